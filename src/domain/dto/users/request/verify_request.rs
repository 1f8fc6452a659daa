//! 이메일 인증 링크의 쿼리 파라미터

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyQuery {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "인증 코드가 필요합니다"))]
    pub code: String,
}
