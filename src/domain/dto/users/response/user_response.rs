//! 회원 관련 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::{User, UserType};

/// `/customer/getInfo`, `/seller/getInfo` 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub user_type: UserType,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string().unwrap_or_default(),
            email: user.email,
            name: user.name,
            user_type: user.user_type,
        }
    }
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    /// 초 단위 만료 시간
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
