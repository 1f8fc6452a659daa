//! 라우트 구성
//!
//! 두 실행 파일이 각자 필요한 라우트만 등록합니다.
//!
//! | 서비스 | 스코프 | 인증 |
//! |--------|--------|------|
//! | user_api | `/signup`, `/signin` | 없음 |
//! | user_api | `/customer`, `/seller` | 역할별 토큰 |
//! | order_api | `/seller/product` | seller |
//! | order_api | `/search/product` | 없음 |
//! | order_api | `/customer/cart` | customer |

use crate::domain::entities::users::UserType;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use serde_json::json;

/// 회원 서비스 라우트
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/signup")
            .service(handlers::users::signup_customer)
            .service(handlers::users::signup_seller)
            .service(handlers::users::verify_customer)
            .service(handlers::users::verify_seller)
    );

    cfg.service(
        web::scope("/signin")
            .service(handlers::users::signin_customer)
            .service(handlers::users::signin_seller)
    );

    cfg.service(
        web::scope("/customer")
            .wrap(AuthMiddleware::required_with_role(UserType::Customer))
            .service(handlers::users::get_info)
    );

    cfg.service(
        web::scope("/seller")
            .wrap(AuthMiddleware::required_with_role(UserType::Seller))
            .service(handlers::users::get_info)
    );
}

/// 주문 서비스 라우트
pub fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    cfg.service(
        web::scope("/seller/product")
            .wrap(AuthMiddleware::required_with_role(UserType::Seller))
            .service(handlers::products::add_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product)
            .service(handlers::products::add_product_item)
            .service(handlers::products::update_product_item)
            .service(handlers::products::delete_product_item)
    );

    cfg.service(
        web::scope("/search/product")
            .service(handlers::search::search_by_name)
            .service(handlers::search::get_by_product_id)
            .service(handlers::search::get_product_item)
    );

    cfg.service(
        web::scope("/customer/cart")
            .wrap(AuthMiddleware::required_with_role(UserType::Customer))
            .service(handlers::cart::get_cart)
            .service(handlers::cart::add_cart)
            .service(handlers::cart::update_cart)
            .service(handlers::cart::clear_cart)
    );
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_order_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_cart_requires_customer_token() {
        let app = test::init_service(App::new().configure(configure_order_routes)).await;

        let req = test::TestRequest::get().uri("/customer/cart").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_product_management_requires_seller_role() {
        let app = test::init_service(App::new().configure(configure_order_routes)).await;
        let token = crate::services::auth::TokenService::instance()
            .issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "buyer@example.com", UserType::Customer)
            .unwrap();

        let req = test::TestRequest::delete()
            .uri("/seller/product?id=abc")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_get_info_requires_token() {
        let app = test::init_service(App::new().configure(configure_user_routes)).await;

        let req = test::TestRequest::get().uri("/seller/getInfo").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }
}
