pub mod signup_request;
pub mod signin_request;
pub mod verify_request;

pub use signup_request::SignUpRequest;
pub use signin_request::SignInRequest;
pub use verify_request::VerifyQuery;
