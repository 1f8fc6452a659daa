//! User Entity Implementation
//!
//! 고객(customer)과 판매자(seller)를 하나의 `users` 컬렉션에 저장합니다.
//! 두 역할은 `user_type`으로 구분되며 같은 이메일이라도 역할이 다르면
//! 별도 계정으로 가입할 수 있습니다.

use std::str::FromStr;
use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::errors::{AppError, ErrorCode};

/// 회원 역할
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Customer,
    Seller,
}

impl UserType {
    /// JWT `role` 클레임과 URL 경로에 쓰이는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Customer => "customer",
            UserType::Seller => "seller",
        }
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(UserType::Customer),
            "seller" => Ok(UserType::Seller),
            other => Err(AppError::ValidationError(format!("알 수 없는 회원 역할입니다: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<NaiveDate>,
    pub user_type: UserType,
    pub verify: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_expired_at: Option<DateTime>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 인증 전 상태의 신규 회원
    pub fn new(
        user_type: UserType,
        email: String,
        name: String,
        password_hash: String,
        phone: String,
        birth: Option<NaiveDate>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            name,
            password_hash,
            phone,
            birth,
            user_type,
            verify: false,
            verification_code: None,
            verify_expired_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 인증 코드 검증
    ///
    /// 이미 인증된 회원, 코드 불일치, 만료 순서로 확인합니다.
    /// 성공하면 `verify`가 `true`가 됩니다.
    pub fn verify_email(&mut self, code: &str, now: DateTime) -> Result<(), ErrorCode> {
        if self.verify {
            return Err(ErrorCode::AlreadyVerify);
        }
        if self.verification_code.as_deref() != Some(code) {
            return Err(ErrorCode::WrongVerification);
        }
        match self.verify_expired_at {
            Some(expired_at) if expired_at >= now => {}
            _ => return Err(ErrorCode::ExpireCode),
        }

        self.verify = true;
        self.updated_at = now;
        Ok(())
    }
}
