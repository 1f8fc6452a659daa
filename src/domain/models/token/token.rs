//! JWT 클레임
//!
//! 사용자 서비스가 로그인 시 발급하고, 두 서비스의 인증 미들웨어가 검증합니다.

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::UserType;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 회원 id (ObjectId hex)
    pub sub: String,
    pub email: String,
    pub role: UserType,
    pub iat: i64,
    pub exp: i64,
}
