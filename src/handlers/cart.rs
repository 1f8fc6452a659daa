//! 고객 장바구니 핸들러 (order_api, `/customer/cart`)
//!
//! 장바구니는 토큰의 회원 id로 식별합니다.

use actix_web::{web, HttpResponse, delete, get, post, put};
use validator::Validate;
use crate::domain::dto::cart::{AddProductCartForm, UpdateCartForm};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::cart::CartService;

#[get("")]
pub async fn get_cart(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let cart = CartService::instance().get_cart(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(cart))
}

#[post("")]
pub async fn add_cart(
    user: AuthenticatedUser,
    payload: web::Json<AddProductCartForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cart = CartService::instance()
        .add_cart(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(cart))
}

#[put("")]
pub async fn update_cart(
    user: AuthenticatedUser,
    payload: web::Json<UpdateCartForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let cart = CartService::instance()
        .update_cart(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(cart))
}

#[delete("")]
pub async fn clear_cart(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    CartService::instance().clear_cart(&user.user_id).await?;

    Ok(HttpResponse::Ok().finish())
}
