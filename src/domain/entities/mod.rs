//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 영속 엔티티입니다.
//!
//! - [`users`] - 고객/판매자 (`users` 컬렉션)
//! - [`products`] - 상품과 내장된 상품 옵션 (`products` 컬렉션)
//!
//! 엔티티는 도메인 규칙(이메일 인증, 옵션 이름 중복 검사 등)을 직접 구현하여
//! 서비스 계층이 저장소 없이도 테스트 가능한 로직에 위임할 수 있게 합니다.

pub mod users;
pub mod products;

pub use users::*;
pub use products::*;
