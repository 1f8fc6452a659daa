//! # 회원 리포지토리
//!
//! 고객과 판매자를 `users` 컬렉션 하나에 저장합니다. 이메일은 역할별로 유일하며
//! (`email + user_type` 유니크 인덱스), id 기반 조회는 Redis에 10분간 캐시됩니다.

use std::sync::Arc;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    db::Database,
    domain::entities::users::{User, UserType},
    errors::{AppError, ErrorCode},
};

const USER_CACHE_TTL_SECONDS: u64 = 600;

#[repository(name = "user", collection = "users")]
pub struct UserRepository {
    db: Arc<Database>,

    redis: Arc<RedisClient>,
}

/// 유니크 인덱스 위반 (E11000)
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

impl UserRepository {
    pub async fn find_by_email(&self, email: &str, user_type: UserType) -> Result<Option<User>, AppError> {
        self.collection::<User>()
            .find_one(doc! { "email": email, "user_type": user_type.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn exists_by_email(&self, email: &str, user_type: UserType) -> Result<bool, AppError> {
        let count = self
            .collection::<User>()
            .count_documents(doc! { "email": email, "user_type": user_type.as_str() })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    /// id로 조회합니다. 캐시를 먼저 확인합니다.
    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        let cache_key = self.cache_key(&id.to_hex());

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            if let Err(e) = self.redis.set_with_expiry(&cache_key, user, USER_CACHE_TTL_SECONDS).await {
                log::warn!("회원 캐시 저장 실패 ({}): {}", cache_key, e);
            }
        }

        Ok(user)
    }

    /// 토큰의 id와 이메일이 모두 일치하는 회원
    pub async fn find_by_id_and_email(&self, id: &ObjectId, email: &str, user_type: UserType) -> Result<Option<User>, AppError> {
        Ok(self
            .find_by_id(id)
            .await?
            .filter(|user| user.email == email && user.user_type == user_type))
    }

    /// 새 회원을 저장하고 발급된 id를 채워 반환합니다.
    ///
    /// 동시 가입으로 유니크 인덱스에 걸리면 `ALREADY_REGISTER_USER`.
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::Business(ErrorCode::AlreadyRegisterUser)
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("삽입된 회원 id가 ObjectId가 아닙니다".to_string()))?;
        user.id = Some(id);

        Ok(user)
    }

    pub async fn mark_verified(&self, id: &ObjectId) -> Result<(), AppError> {
        self.collection::<User>()
            .update_one(
                doc! { "_id": *id },
                doc! { "$set": { "verify": true, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        self.evict(id).await;
        Ok(())
    }

    async fn evict(&self, id: &ObjectId) {
        if let Err(e) = self.invalidate_cache(&id.to_hex()).await {
            log::warn!("회원 캐시 무효화 실패 ({}): {}", id, e);
        }
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1, "user_type": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_user_type_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection::<User>()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
