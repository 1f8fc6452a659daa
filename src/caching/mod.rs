//! 캐싱 계층 모듈
//!
//! Redis를 키-값 저장소로 사용합니다. 주문 서비스의 장바구니와
//! 사용자 서비스의 회원 조회 캐시가 여기에 저장됩니다.
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
