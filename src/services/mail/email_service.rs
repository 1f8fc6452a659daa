//! 메일 발송 서비스
//!
//! Mailgun 호환 HTTP API로 가입 인증 메일을 보냅니다.
//! 요청은 `POST {api_url}/{domain}/messages`, basic auth `api:{key}`,
//! form 필드 `from`, `to`, `subject`, `text` 입니다.

use log::{error, info};
use serde::Serialize;
use singleton_macro::service;
use crate::{
    config::{MailgunConfig, VerificationConfig},
    domain::entities::users::UserType,
    errors::{AppError, ErrorCode},
};

/// 메일 API에 보내는 form 본문
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendMailForm {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl SendMailForm {
    /// 가입 인증 메일
    ///
    /// 링크는 `{base_url}/signup/{customer|seller}/verify?email=..&code=..` 입니다.
    pub fn verification(base_url: &str, user_type: UserType, name: &str, email: &str, code: &str) -> Self {
        let link = format!(
            "{}/signup/{}/verify?email={}&code={}",
            base_url.trim_end_matches('/'),
            user_type.as_str(),
            urlencoding::encode(email),
            urlencoding::encode(code),
        );

        Self {
            from: MailgunConfig::from(),
            to: email.to_string(),
            subject: "Verification Email!".to_string(),
            text: format!("Hello {}! Please Click Link for verification.\n\n{}", name, link),
        }
    }
}

#[service(name = "email")]
pub struct EmailService {
    client: reqwest::Client,
}

impl EmailService {
    pub async fn send(&self, form: &SendMailForm) -> Result<(), AppError> {
        let response = self
            .client
            .post(MailgunConfig::messages_endpoint())
            .basic_auth("api", Some(MailgunConfig::api_key()))
            .form(form)
            .send()
            .await
            .map_err(|e| {
                error!("메일 API 호출 실패: {}", e);
                AppError::Business(ErrorCode::MailSendFail)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!("메일 API 오류 응답 {}: {}", status, body);
            return Err(AppError::Business(ErrorCode::MailSendFail));
        }

        info!("메일 발송 완료: {}", form.to);
        Ok(())
    }

    pub async fn send_verification(&self, user_type: UserType, name: &str, email: &str, code: &str) -> Result<(), AppError> {
        let form = SendMailForm::verification(&VerificationConfig::base_url(), user_type, name, email, code);
        self.send(&form).await
    }
}
