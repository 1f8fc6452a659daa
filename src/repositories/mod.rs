//! # Repositories
//!
//! `#[repository]` 매크로로 등록되는 데이터 액세스 계층입니다.
//!
//! | 리포지토리 | 저장소 | 내용 |
//! |-----------|--------|------|
//! | [`UserRepository`] | MongoDB `users` + Redis 캐시 | 고객/판매자 |
//! | [`ProductRepository`] | MongoDB `products` | 상품과 내장 옵션 |
//! | [`CartRepository`] | Redis | 고객별 장바구니 |

pub mod users;
pub mod products;
pub mod cart;

pub use users::UserRepository;
pub use products::ProductRepository;
pub use cart::CartRepository;
