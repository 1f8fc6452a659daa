//! 인증 미들웨어
//!
//! 라우트 스코프에 `wrap`으로 붙여 토큰 검증과 역할 확인을 수행합니다.
//!
//! ```rust,ignore
//! web::scope("/seller")
//!     .wrap(AuthMiddleware::required_with_role(UserType::Seller))
//! ```
//!
//! - 토큰 없음/무효 → 401 `authentication_required`
//! - 역할 불일치 → 403 `insufficient_permissions`
//! - 성공 → `AuthenticatedUser`가 요청 extensions에 저장됨

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::entities::users::UserType;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// 유효한 토큰과 지정된 역할을 요구하는 미들웨어
pub struct AuthMiddleware {
    required_role: UserType,
}

impl AuthMiddleware {
    pub fn required_with_role(role: UserType) -> Self {
        Self { required_role: role }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};
    use crate::domain::models::auth::AuthenticatedUser;
    use crate::services::auth::TokenService;

    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.email)
    }

    fn token_for(role: UserType) -> String {
        TokenService::instance()
            .issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "member@example.com", role)
            .unwrap()
    }

    macro_rules! seller_app {
        () => {
            test::init_service(
                App::new().service(
                    web::scope("/seller")
                        .wrap(AuthMiddleware::required_with_role(UserType::Seller))
                        .route("/me", web::get().to(whoami)),
                ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_missing_token_is_unauthorized() {
        let app = seller_app!();

        let req = test::TestRequest::get().uri("/seller/me").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "authentication_required");
    }

    #[actix_web::test]
    async fn test_invalid_token_is_unauthorized() {
        let app = seller_app!();

        let req = test::TestRequest::get()
            .uri("/seller/me")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_wrong_role_is_forbidden() {
        let app = seller_app!();

        let req = test::TestRequest::get()
            .uri("/seller/me")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserType::Customer))))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["error"], "insufficient_permissions");
    }

    #[actix_web::test]
    async fn test_bearer_token_passes() {
        let app = seller_app!();

        let req = test::TestRequest::get()
            .uri("/seller/me")
            .insert_header(("Authorization", format!("Bearer {}", token_for(UserType::Seller))))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;

        assert_eq!(body, "member@example.com");
    }

    #[actix_web::test]
    async fn test_x_auth_token_fallback_passes() {
        let app = seller_app!();

        let req = test::TestRequest::get()
            .uri("/seller/me")
            .insert_header(("X-AUTH-TOKEN", token_for(UserType::Seller)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
    }
}
