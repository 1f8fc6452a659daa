//! # Redis 캐시 클라이언트
//!
//! 장바구니처럼 데이터베이스 대신 키-값 저장소에 두는 상태를 JSON으로
//! 직렬화해 보관합니다. 모든 명령은 멀티플렉싱된 비동기 연결을 사용합니다.
//!
//! `#[repository]` 매크로는 `redis` 필드가 있는 리포지토리에
//! `cache_key`, `invalidate_cache`, `invalidate_pattern_cache` 헬퍼를 생성하며,
//! 이 헬퍼들은 [`RedisClient::del`], [`RedisClient::keys`],
//! [`RedisClient::del_multiple`]을 사용합니다.

use redis::{AsyncCommands, Client, RedisError};
use serde::{Serialize, de::DeserializeOwned};
use log::info;
use crate::config::StoreConfig;

/// Redis 캐시 클라이언트 래퍼
///
/// ```rust,ignore
/// let redis = RedisClient::new().await?;
/// redis.set("cart:6650f0c2...", &cart).await?;
/// let cart: Option<Cart> = redis.get("cart:6650f0c2...").await?;
/// ```
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

fn serde_failure(context: &'static str, e: serde_json::Error) -> RedisError {
    RedisError::from((redis::ErrorKind::TypeError, context, e.to_string()))
}

impl RedisClient {
    /// `REDIS_URL`로 클라이언트를 만들고 `PING`으로 연결을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::open(StoreConfig::redis_url())?;

        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("✅ Redis 연결 성공");

        Ok(Self { client })
    }

    /// JSON으로 저장된 값을 읽어 역직렬화합니다. 키가 없으면 `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        value
            .map(|json| serde_json::from_str(&json).map_err(|e| serde_failure("Deserialization failed", e)))
            .transpose()
    }

    /// 만료 없이 저장합니다.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serde_failure("Serialization failed", e))?;
        conn.set(key, json).await
    }

    pub async fn set_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| serde_failure("Serialization failed", e))?;
        conn.set_ex(key, json, seconds).await
    }

    pub async fn del(&self, key: &str) -> Result<(), RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(key).await
    }

    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), RedisError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del(keys).await
    }

    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}
