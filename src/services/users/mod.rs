pub mod signup_service;
pub mod signin_service;
pub mod user_service;

pub use signup_service::SignUpService;
pub use signin_service::SignInService;
pub use user_service::UserService;
