//! # 장바구니 리포지토리
//!
//! 장바구니는 Redis에만 저장됩니다. 키는 매크로가 생성하는
//! `cache_key(customer_id)` (`cart_repository:{customer_id}`)이며 만료되지 않습니다.

use std::sync::Arc;
use singleton_macro::repository;
use crate::{
    caching::redis::RedisClient,
    core::registry::Repository,
    domain::models::cart::Cart,
    errors::AppError,
};

#[repository(name = "cart", collection = "carts")]
pub struct CartRepository {
    redis: Arc<RedisClient>,
}

impl CartRepository {
    /// 저장된 장바구니. 없으면 `None`.
    pub async fn find(&self, customer_id: &str) -> Result<Option<Cart>, AppError> {
        self.redis
            .get::<Cart>(&self.cache_key(customer_id))
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }

    pub async fn save(&self, cart: &Cart) -> Result<(), AppError> {
        self.redis
            .set(&self.cache_key(&cart.customer_id), cart)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))
    }
}
