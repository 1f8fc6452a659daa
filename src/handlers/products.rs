//! 판매자 상품 관리 핸들러 (order_api, `/seller/product`)

use actix_web::{web, HttpResponse, delete, post, put};
use validator::Validate;
use crate::domain::dto::products::{
    AddProductForm, AddProductItemForm, IdQuery, UpdateProductForm, UpdateProductItemForm,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::products::{ProductItemService, ProductService};

#[post("")]
pub async fn add_product(
    user: AuthenticatedUser,
    payload: web::Json<AddProductForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let seller_id = user.object_id()?;
    let product = ProductService::instance()
        .add_product(&seller_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

#[put("")]
pub async fn update_product(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProductForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let seller_id = user.object_id()?;
    let product = ProductService::instance()
        .update_product(&seller_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

#[delete("")]
pub async fn delete_product(
    user: AuthenticatedUser,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    let seller_id = user.object_id()?;
    ProductService::instance().delete_product(&seller_id, &query.id).await?;

    Ok(HttpResponse::Ok().finish())
}

#[post("/item")]
pub async fn add_product_item(
    user: AuthenticatedUser,
    payload: web::Json<AddProductItemForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let seller_id = user.object_id()?;
    let item = ProductItemService::instance()
        .add_product_item(&seller_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(item))
}

#[put("/item")]
pub async fn update_product_item(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProductItemForm>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let seller_id = user.object_id()?;
    let item = ProductItemService::instance()
        .update_product_item(&seller_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(item))
}

#[delete("/item")]
pub async fn delete_product_item(
    user: AuthenticatedUser,
    query: web::Query<IdQuery>,
) -> Result<HttpResponse, AppError> {
    let seller_id = user.object_id()?;
    ProductItemService::instance()
        .delete_product_item(&seller_id, &query.id)
        .await?;

    Ok(HttpResponse::Ok().finish())
}
