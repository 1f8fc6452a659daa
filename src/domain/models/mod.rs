//! # Domain Models
//!
//! 데이터베이스 컬렉션에 직접 대응하지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 인증된 사용자, 역할 요구사항
//! - [`token`] - JWT 클레임
//! - [`cart`] - Redis에 저장되는 장바구니와 병합/갱신 규칙

pub mod auth;
pub mod token;
pub mod cart;
