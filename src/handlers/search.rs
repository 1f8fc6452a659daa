//! 상품 검색 핸들러 (order_api, `/search/product`). 인증 없이 호출할 수 있습니다.

use actix_web::{web, HttpResponse, get};
use crate::domain::dto::products::{IdQuery, ProductDetailQuery, SearchQuery};
use crate::errors::AppError;
use crate::services::products::{ProductItemService, ProductSearchService};

#[get("")]
pub async fn search_by_name(query: web::Query<SearchQuery>) -> Result<HttpResponse, AppError> {
    let products = ProductSearchService::instance().search_by_name(&query.name).await?;

    Ok(HttpResponse::Ok().json(products))
}

#[get("/detail")]
pub async fn get_by_product_id(query: web::Query<ProductDetailQuery>) -> Result<HttpResponse, AppError> {
    let product = ProductSearchService::instance()
        .get_by_product_id(&query.product_id)
        .await?;

    Ok(HttpResponse::Ok().json(product))
}

#[get("/item")]
pub async fn get_product_item(query: web::Query<IdQuery>) -> Result<HttpResponse, AppError> {
    let item = ProductItemService::instance().get_product_item(&query.id).await?;

    Ok(HttpResponse::Ok().json(item))
}
