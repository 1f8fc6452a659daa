//! 회원 정보 조회 서비스

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    domain::{
        dto::users::response::UserInfoResponse,
        models::auth::AuthenticatedUser,
    },
    errors::{AppError, ErrorCode},
    repositories::users::user_repo::UserRepository,
};

#[service(name = "user")]
pub struct UserService {
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 토큰의 id, 이메일, 역할이 모두 일치하는 회원 정보
    pub async fn get_info(&self, auth: &AuthenticatedUser) -> Result<UserInfoResponse, AppError> {
        let id = auth.object_id()?;

        let user = self
            .user_repo
            .find_by_id_and_email(&id, &auth.email, auth.role)
            .await?
            .ok_or(ErrorCode::NotFoundUser)?;

        Ok(UserInfoResponse::from(user))
    }
}
