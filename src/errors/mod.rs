//! 에러 처리 모듈
//!
//! - [`app_error`] - `AppError`, `AppResult`, `ErrorContext`
//! - [`error_code`] - 도메인 에러 코드 `ErrorCode`

pub mod app_error;
pub mod error_code;

pub use app_error::*;
pub use error_code::*;
