//! HTTP 미들웨어
//!
//! 토큰 인증과 역할 확인을 담당하는 [`AuthMiddleware`]를 제공합니다.

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
pub use auth_inner::AUTH_TOKEN_HEADER;
