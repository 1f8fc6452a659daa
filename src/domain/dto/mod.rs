//! # Data Transfer Objects
//!
//! HTTP 요청/응답 계약을 정의합니다. 요청 DTO는 `validator`로 입력을 검증하고,
//! 응답 DTO는 엔티티에서 `From`으로 변환하며 ObjectId를 hex 문자열로 노출합니다.
//!
//! - [`users`] - 가입, 로그인, 인증, 회원 정보
//! - [`products`] - 상품/옵션 등록, 수정, 검색
//! - [`cart`] - 장바구니 담기, 교체
//!
//! ```rust,ignore
//! #[post("/customer")]
//! pub async fn sign_up_customer(payload: web::Json<SignUpRequest>) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     // ...
//! }
//! ```

pub mod users;
pub mod products;
pub mod cart;
