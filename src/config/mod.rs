//! # Configuration Module
//!
//! 환경 변수 기반 설정을 한 곳에서 관리합니다. 설정값은 unit struct의
//! 정적 메서드로 노출되며, 호출 시점에 환경 변수를 읽습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 저장소 연결, 서버, 요청 제한
//! - [`auth_config`] - JWT
//! - [`mail_config`] - Mailgun, 이메일 인증
//!
//! ## 환경 변수
//!
//! ```bash
//! # 공통
//! export ENVIRONMENT="development"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8081"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="commerce_user"
//! export REDIS_URL="redis://localhost:6379"
//! export JWT_SECRET="shared-secret"
//!
//! # 사용자 서비스
//! export MAILGUN_DOMAIN="sandbox.mailgun.org"
//! export MAILGUN_API_KEY="key-..."
//! export VERIFICATION_BASE_URL="http://localhost:8081"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod mail_config;

pub use data_config::*;
pub use auth_config::*;
pub use mail_config::*;
