//! 도메인 에러 코드
//!
//! 서비스 계층이 던지는 비즈니스 에러를 열거합니다. 각 코드는
//! 사용자에게 보여줄 메시지와 HTTP 상태를 함께 가집니다.

use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // 회원
    AlreadyRegisterUser,
    NotFoundUser,
    AlreadyVerify,
    ExpireCode,
    WrongVerification,
    LoginCheckFail,
    MailSendFail,

    // 상품
    NotFoundProduct,
    NotFoundItem,
    SameItemName,

    // 장바구니
    ItemCountNotEnough,
    CartChangeFail,
}

impl ErrorCode {
    /// 응답 본문에 담기는 메시지
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyRegisterUser => "이미 가입된 회원입니다.",
            ErrorCode::NotFoundUser => "일치하는 회원이 없습니다.",
            ErrorCode::AlreadyVerify => "이미 인증이 완료되었습니다.",
            ErrorCode::ExpireCode => "인증 시간이 만료되었습니다.",
            ErrorCode::WrongVerification => "잘못된 인증 시도입니다.",
            ErrorCode::LoginCheckFail => "아이디나 패스워드를 확인해 주세요.",
            ErrorCode::MailSendFail => "인증 메일 발송에 실패했습니다.",
            ErrorCode::NotFoundProduct => "상품을 찾을 수 없습니다.",
            ErrorCode::NotFoundItem => "아이템을 찾을 수 없습니다.",
            ErrorCode::SameItemName => "아이템 명 중복 입니다.",
            ErrorCode::ItemCountNotEnough => "상품의 수량이 부족합니다.",
            ErrorCode::CartChangeFail => "장바구니에 추가할 수 없습니다.",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::NotFoundUser | ErrorCode::NotFoundProduct | ErrorCode::NotFoundItem => {
                StatusCode::NOT_FOUND
            }
            ErrorCode::AlreadyRegisterUser | ErrorCode::AlreadyVerify | ErrorCode::SameItemName => {
                StatusCode::CONFLICT
            }
            ErrorCode::LoginCheckFail => StatusCode::UNAUTHORIZED,
            ErrorCode::MailSendFail => StatusCode::BAD_GATEWAY,
            ErrorCode::CartChangeFail => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::ExpireCode
            | ErrorCode::WrongVerification
            | ErrorCode::ItemCountNotEnough => StatusCode::BAD_REQUEST,
        }
    }

    /// `NOT_FOUND_PRODUCT` 형태의 코드 문자열
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::AlreadyRegisterUser => "ALREADY_REGISTER_USER",
            ErrorCode::NotFoundUser => "NOT_FOUND_USER",
            ErrorCode::AlreadyVerify => "ALREADY_VERIFY",
            ErrorCode::ExpireCode => "EXPIRE_CODE",
            ErrorCode::WrongVerification => "WRONG_VERIFICATION",
            ErrorCode::LoginCheckFail => "LOGIN_CHECK_FAIL",
            ErrorCode::MailSendFail => "MAIL_SEND_FAIL",
            ErrorCode::NotFoundProduct => "NOT_FOUND_PRODUCT",
            ErrorCode::NotFoundItem => "NOT_FOUND_ITEM",
            ErrorCode::SameItemName => "SAME_ITEM_NAME",
            ErrorCode::ItemCountNotEnough => "ITEM_COUNT_NOT_ENOUGH",
            ErrorCode::CartChangeFail => "CART_CHANGE_FAIL",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_code_matches_as_str() {
        for code in [
            ErrorCode::AlreadyRegisterUser,
            ErrorCode::NotFoundProduct,
            ErrorCode::SameItemName,
            ErrorCode::ItemCountNotEnough,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::NotFoundItem.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::SameItemName.status(), StatusCode::CONFLICT);
        assert_eq!(ErrorCode::LoginCheckFail.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::ItemCountNotEnough.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::CartChangeFail.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
