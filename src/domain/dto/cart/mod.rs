//! 장바구니 API 요청 DTO
//!
//! 응답은 [`crate::domain::models::cart::Cart`]를 그대로 직렬화합니다.

pub mod request;

pub use request::*;
