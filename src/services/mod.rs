//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로로 싱글톤 등록되며, 필요한 리포지토리와 다른 서비스는
//! `ServiceLocator`가 주입합니다.
//!
//! ```rust,ignore
//! use crate::services::{cart::CartService, users::SignInService};
//!
//! let cart = CartService::instance().get_cart(&customer_id).await?;
//! ```

pub mod auth;
pub mod mail;
pub mod users;
pub mod products;
pub mod cart;
