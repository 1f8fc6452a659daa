//! 로그인 서비스
//!
//! 이메일/비밀번호와 인증 여부를 확인한 뒤 역할이 담긴 JWT를 발급합니다.
//! 회원 없음, 비밀번호 불일치, 미인증은 모두 `LOGIN_CHECK_FAIL` 하나로 응답합니다.

use std::sync::Arc;
use bcrypt::verify;
use singleton_macro::service;
use crate::{
    domain::{
        dto::users::{request::SignInRequest, response::LoginResponse},
        entities::users::{User, UserType},
    },
    errors::{AppError, ErrorCode, ErrorContext},
    repositories::users::user_repo::UserRepository,
    services::auth::TokenService,
    utils::string_utils::normalize_email,
};

/// 로그인 가능한 회원인지 확인합니다.
pub(crate) fn check_credentials(user: &User, password: &str) -> Result<(), AppError> {
    let matched = verify(password, &user.password_hash).context("비밀번호 검증 실패")?;

    if !matched || !user.verify {
        return Err(ErrorCode::LoginCheckFail.into());
    }
    Ok(())
}

#[service(name = "signin")]
pub struct SignInService {
    user_repo: Arc<UserRepository>,

    token_service: Arc<TokenService>,
}

impl SignInService {
    pub async fn signin(&self, user_type: UserType, request: SignInRequest) -> Result<LoginResponse, AppError> {
        let email = normalize_email(&request.email);

        let Some(user) = self.user_repo.find_by_email(&email, user_type).await? else {
            log::warn!("로그인 실패 (회원 없음): {}", email);
            return Err(ErrorCode::LoginCheckFail.into());
        };

        if let Err(e) = check_credentials(&user, &request.password) {
            log::warn!("로그인 실패: {}", email);
            return Err(e);
        }

        let token = self.token_service.generate_token(&user)?;
        log::info!("{} 로그인: {}", user_type.as_str(), email);

        Ok(LoginResponse::bearer(token, self.token_service.expires_in()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_password(password: &str, verified: bool) -> User {
        let mut user = User::new(
            UserType::Customer,
            "buyer@example.com".to_string(),
            "buyer".to_string(),
            bcrypt::hash(password, 4).unwrap(),
            "01012345678".to_string(),
            None,
        );
        user.verify = verified;
        user
    }

    #[test]
    fn test_verified_user_with_right_password() {
        let user = user_with_password("password1", true);

        assert!(check_credentials(&user, "password1").is_ok());
    }

    #[test]
    fn test_wrong_password() {
        let user = user_with_password("password1", true);

        let err = check_credentials(&user, "password2").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::LoginCheckFail));
    }

    #[test]
    fn test_unverified_user_cannot_sign_in() {
        let user = user_with_password("password1", false);

        let err = check_credentials(&user, "password1").unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::LoginCheckFail));
    }
}
