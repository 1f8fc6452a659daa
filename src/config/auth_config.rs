//! 인증 관련 설정
//!
//! 사용자 서비스가 발급하고 주문 서비스가 검증하는 JWT의 서명 키와
//! 만료 시간을 관리합니다. 두 서비스는 같은 `JWT_SECRET`을 공유해야 합니다.

use std::env;

/// JWT 토큰 설정
///
/// ```bash
/// export JWT_SECRET="openssl rand -base64 32 로 생성한 값"
/// export JWT_EXPIRATION_HOURS="24"
/// ```
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 환경 변수가 설정되지 않은 경우 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-secret-key".to_string()
            })
    }

    /// 액세스 토큰 만료 시간 (시간 단위, 기본 24)
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .ok()
            .and_then(|hours| hours.parse().ok())
            .unwrap_or(24)
    }
}
