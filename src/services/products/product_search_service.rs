//! 상품 검색 서비스

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::products::{ProductResponse, ProductSummaryResponse},
        entities::products::Product,
    },
    errors::{AppError, ErrorCode},
    repositories::products::product_repo::ProductRepository,
};

#[service(name = "productsearch")]
pub struct ProductSearchService {
    product_repo: Arc<ProductRepository>,
}

impl ProductSearchService {
    /// 이름에 검색어가 포함된 상품 (대소문자 무시)
    pub async fn search_by_name(&self, name: &str) -> Result<Vec<ProductSummaryResponse>, AppError> {
        let products = self.product_repo.search_by_name(name.trim()).await?;

        Ok(products.into_iter().map(ProductSummaryResponse::from).collect())
    }

    pub async fn get_by_product_id(&self, product_id: &str) -> Result<ProductResponse, AppError> {
        let id = ObjectId::parse_str(product_id.trim()).map_err(|_| ErrorCode::NotFoundProduct)?;

        self.product_repo
            .find_by_id(&id)
            .await?
            .map(ProductResponse::from)
            .ok_or_else(|| ErrorCode::NotFoundProduct.into())
    }

    /// id 목록에 해당하는 상품. 없는 id는 건너뜁니다.
    pub async fn get_list_by_product_ids(&self, ids: &[ObjectId]) -> Result<Vec<Product>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.product_repo.find_all_by_ids(ids).await
    }
}
