//! 메일 발송 및 이메일 인증 설정

use std::env;

/// Mailgun 호환 메일 API 설정
///
/// ```bash
/// export MAILGUN_API_URL="https://api.mailgun.net/v3"
/// export MAILGUN_DOMAIN="sandbox.mailgun.org"
/// export MAILGUN_API_KEY="key-..."
/// export MAILGUN_FROM="no-reply <no-reply@sandbox.mailgun.org>"
/// ```
pub struct MailgunConfig;

impl MailgunConfig {
    pub fn api_url() -> String {
        env::var("MAILGUN_API_URL").unwrap_or_else(|_| "https://api.mailgun.net/v3".to_string())
    }

    pub fn domain() -> String {
        env::var("MAILGUN_DOMAIN").unwrap_or_default()
    }

    pub fn api_key() -> String {
        env::var("MAILGUN_API_KEY").unwrap_or_else(|_| {
            log::warn!("MAILGUN_API_KEY not set, verification mail will be rejected");
            String::new()
        })
    }

    pub fn from() -> String {
        env::var("MAILGUN_FROM").unwrap_or_else(|_| "no-reply <no-reply@localhost>".to_string())
    }

    /// `{api_url}/{domain}/messages`
    pub fn messages_endpoint() -> String {
        format!("{}/{}/messages", Self::api_url().trim_end_matches('/'), Self::domain())
    }
}

/// 가입 인증 메일 설정
pub struct VerificationConfig;

impl VerificationConfig {
    /// 인증 링크의 기준 URL (`VERIFICATION_BASE_URL`, 기본 "http://localhost:8081")
    pub fn base_url() -> String {
        env::var("VERIFICATION_BASE_URL").unwrap_or_else(|_| "http://localhost:8081".to_string())
    }

    /// 인증 코드 길이
    pub fn code_length() -> usize {
        10
    }

    /// 인증 코드 유효 기간 (일)
    pub fn expire_days() -> i64 {
        env::var("VERIFICATION_EXPIRE_DAYS")
            .ok()
            .and_then(|days| days.parse().ok())
            .unwrap_or(1)
    }
}
