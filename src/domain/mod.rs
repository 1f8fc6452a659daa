//! # Domain Layer Module
//!
//! 비즈니스 규칙과 API 계약을 담는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB에 저장되는 회원, 상품
//! ├── models    - 장바구니, 토큰 클레임, 인증 사용자
//! └── dto       - 요청 폼 / 응답 본문
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, caching)
//! ```
//!
//! 장바구니 병합과 갱신, 옵션 이름 중복 검사, 이메일 인증처럼
//! 저장소 없이 판단할 수 있는 규칙은 이 계층에 두고 서비스는
//! 조회와 저장만 담당합니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
