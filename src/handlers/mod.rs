//! HTTP 요청 핸들러
//!
//! 핸들러는 요청 DTO를 검증한 뒤 서비스 싱글톤에 위임합니다.
//! `users`는 user_api, 나머지는 order_api에서 사용합니다.

pub mod users;
pub mod products;
pub mod search;
pub mod cart;
