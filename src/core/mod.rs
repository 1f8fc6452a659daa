//! # Core Framework Module
//!
//! 서비스/리포지토리 싱글톤을 관리하는 의존성 주입 컨테이너를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 타입별 싱글톤 인스턴스 보관 및 지연 생성
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 등록
//!
//! ## 새로운 서비스 추가
//! 1. 구조체 정의 + `#[service(name = "...")]` 매크로 적용
//! 2. 의존성은 `Arc<T>` 필드로 선언 (자동 주입)
//! 3. 비즈니스 로직 구현
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! panic: Circular dependency detected: CartService is already being initialized
//! ```
//! 서비스 계층을 단방향 의존성으로 재구성합니다.
//!
//! ### 미등록 타입
//! ```text
//! panic: No service found for entity: productitem
//! ```
//! 여러 단어로 된 타입은 매크로에 `name`을 명시했는지 확인합니다.

pub mod registry;

pub use registry::*;
