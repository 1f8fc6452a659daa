//! # 회원 가입 서비스
//!
//! 고객/판매자 가입과 이메일 인증을 처리합니다.
//!
//! ```text
//! signup(type, form)
//!   ├─ 같은 역할에 같은 이메일 존재      → ALREADY_REGISTER_USER
//!   ├─ bcrypt 해싱, 인증 코드 발급
//!   ├─ 인증 메일 발송 실패              → MAIL_SEND_FAIL (아무것도 저장하지 않음)
//!   └─ 회원 저장 (verify = false)
//!
//! verify(type, email, code)
//!   ├─ 회원 없음                        → NOT_FOUND_USER
//!   ├─ 이미 인증됨                      → ALREADY_VERIFY
//!   ├─ 코드 불일치                      → WRONG_VERIFICATION
//!   ├─ 만료                             → EXPIRE_CODE
//!   └─ verify = true
//! ```

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::DateTime;
use singleton_macro::service;
use crate::{
    config::{PasswordConfig, VerificationConfig},
    domain::{
        dto::users::request::SignUpRequest,
        entities::users::{User, UserType},
    },
    errors::{AppError, ErrorCode, ErrorContext},
    repositories::users::user_repo::UserRepository,
    services::mail::EmailService,
    utils::string_utils::{normalize_email, random_alphanumeric},
};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// 인증 코드 만료 시각
pub(crate) fn verification_deadline(now: DateTime, expire_days: i64) -> DateTime {
    DateTime::from_millis(now.timestamp_millis() + expire_days * MILLIS_PER_DAY)
}

#[service(name = "signup")]
pub struct SignUpService {
    user_repo: Arc<UserRepository>,

    email_service: Arc<EmailService>,
}

impl SignUpService {
    pub async fn signup(&self, user_type: UserType, request: SignUpRequest) -> Result<User, AppError> {
        let email = normalize_email(&request.email);

        if self.user_repo.exists_by_email(&email, user_type).await? {
            return Err(ErrorCode::AlreadyRegisterUser.into());
        }

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, PasswordConfig::bcrypt_cost())
            .context("비밀번호 해싱 실패")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        let mut user = User::new(
            user_type,
            email,
            request.name.trim().to_string(),
            password_hash,
            request.phone,
            request.birth,
        );

        let code = random_alphanumeric(VerificationConfig::code_length());
        user.verify_expired_at = Some(verification_deadline(DateTime::now(), VerificationConfig::expire_days()));
        user.verification_code = Some(code.clone());

        self.email_service
            .send_verification(user_type, &user.name, &user.email, &code)
            .await?;

        let created = self.user_repo.create(user).await?;
        log::info!("{} 가입 완료: {}", user_type.as_str(), created.email);

        Ok(created)
    }

    pub async fn verify(&self, user_type: UserType, email: &str, code: &str) -> Result<(), AppError> {
        let email = normalize_email(email);

        let mut user = self
            .user_repo
            .find_by_email(&email, user_type)
            .await?
            .ok_or(ErrorCode::NotFoundUser)?;

        user.verify_email(code, DateTime::now())?;

        let id = user
            .id
            .ok_or_else(|| AppError::InternalError("저장된 회원에 id가 없습니다".to_string()))?;
        self.user_repo.mark_verified(&id).await?;

        log::info!("{} 이메일 인증 완료: {}", user_type.as_str(), email);
        Ok(())
    }
}
