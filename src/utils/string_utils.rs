//! # 문자열 유틸리티
//!
//! 요청 값 정규화, id 파싱, 검색어 이스케이프, 인증 코드 생성처럼
//! 여러 서비스에서 공통으로 쓰는 문자열 처리 함수들입니다.

use mongodb::bson::oid::ObjectId;
use rand::{distributions::Alphanumeric, Rng};
use crate::errors::AppError;

/// 이메일 비교는 앞뒤 공백을 무시하고 소문자로 합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 요청으로 받은 hex 문자열 id를 ObjectId로 변환합니다.
pub fn parse_object_id(value: &str, field_name: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(value.trim())
        .map_err(|_| AppError::ValidationError(format!("유효하지 않은 {} 형식입니다", field_name)))
}

/// 사용자 입력을 MongoDB `$regex`에서 문자 그대로 매칭되도록 이스케이프합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 영문 대소문자와 숫자로 된 임의 문자열
pub fn random_alphanumeric(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("  World  ", "name").unwrap(), "World");
        assert!(validate_required_string("   ", "name").is_err());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Buyer@Example.COM "), "buyer@example.com");
    }

    #[test]
    fn test_parse_object_id() {
        let id = ObjectId::new();

        assert_eq!(parse_object_id(&id.to_hex(), "상품 id").unwrap(), id);
        assert!(matches!(
            parse_object_id("1234", "상품 id"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_escape_regex() {
        assert_eq!(escape_regex("Test"), "Test");
        assert_eq!(escape_regex("a.b*c"), "a\\.b\\*c");
        assert_eq!(escape_regex("(sale) $10"), "\\(sale\\) \\$10");
    }

    #[test]
    fn test_random_alphanumeric() {
        let code = random_alphanumeric(10);

        assert_eq!(code.len(), 10);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(code, random_alphanumeric(10));
    }
}
