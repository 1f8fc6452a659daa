//! # Commerce Backend
//!
//! 회원 서비스(user_api)와 주문 서비스(order_api)로 구성된 전자상거래 백엔드입니다.
//! 두 실행 파일은 이 라이브러리를 공유하며 각자 필요한 라우트만 등록합니다.
//!
//! ## 구성
//!
//! ```text
//! handlers ─► services ─► repositories ─► MongoDB (users, products)
//!    ▲            │                  └──► Redis   (회원 캐시, 장바구니)
//!    │            └─► Mailgun HTTP API (가입 인증 메일)
//! middlewares (JWT 인증, 역할 확인)
//! ```
//!
//! - 서비스와 리포지토리는 `#[service]`, `#[repository]` 매크로로 싱글톤 등록되며
//!   [`core::registry::ServiceLocator`]가 의존성을 주입합니다.
//! - 비즈니스 에러는 [`errors::ErrorCode`]로 표현되고 [`errors::AppError`]가
//!   HTTP 응답으로 변환합니다.
//! - 장바구니 병합/갱신 규칙은 [`domain::models::cart::Cart`]에 있습니다.

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
pub mod server;
