//! 회원 가입 요청 DTO
//!
//! 고객과 판매자 가입이 같은 폼을 사용합니다. 역할은 요청 경로로 결정됩니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub name: String,

    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    pub password: String,

    #[validate(custom(function = "validate_phone"))]
    pub phone: String,

    /// `YYYY-MM-DD`
    #[serde(default)]
    pub birth: Option<NaiveDate>,
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
    let allowed = phone.chars().all(|c| c.is_ascii_digit() || c == '-');

    if !allowed || !(9..=11).contains(&digits) {
        return Err(ValidationError::new("invalid_phone")
            .with_message("전화번호 형식이 올바르지 않습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str, phone: &str) -> SignUpRequest {
        SignUpRequest {
            email: email.to_string(),
            name: "tester".to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
            birth: None,
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("buyer@example.com", "password1", "010-1234-5678").validate().is_ok());
    }

    #[test]
    fn test_invalid_email_and_short_password() {
        let errors = request("not-an-email", "short", "01012345678").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_invalid_phone() {
        assert!(request("buyer@example.com", "password1", "call me").validate().is_err());
        assert!(request("buyer@example.com", "password1", "010").validate().is_err());
    }

    #[test]
    fn test_birth_parses_from_iso_date() {
        let json = r#"{"email":"a@b.com","name":"n","password":"password1","phone":"01012345678","birth":"1990-01-31"}"#;
        let parsed: SignUpRequest = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.birth, NaiveDate::from_ymd_opt(1990, 1, 31));
    }
}
