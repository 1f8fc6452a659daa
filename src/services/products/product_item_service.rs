//! 상품 옵션 서비스
//!
//! 옵션은 상품 문서에 내장되어 있으므로 모든 변경은 상품을 읽고,
//! 엔티티 메서드로 옵션을 바꾼 뒤, 상품 문서를 통째로 교체합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::products::{AddProductItemForm, ProductItemResponse, UpdateProductItemForm},
        entities::products::Product,
    },
    errors::{AppError, ErrorCode},
    repositories::products::product_repo::ProductRepository,
};

fn item_id(value: &str) -> Result<ObjectId, ErrorCode> {
    ObjectId::parse_str(value.trim()).map_err(|_| ErrorCode::NotFoundItem)
}

#[service(name = "productitem")]
pub struct ProductItemService {
    product_repo: Arc<ProductRepository>,
}

impl ProductItemService {
    pub async fn get_product_item(&self, id: &str) -> Result<ProductItemResponse, AppError> {
        let id = item_id(id)?;

        let product = self
            .product_repo
            .find_by_item_id(&id)
            .await?
            .ok_or(ErrorCode::NotFoundItem)?;

        product
            .find_item(&id)
            .map(ProductItemResponse::from)
            .ok_or_else(|| ErrorCode::NotFoundItem.into())
    }

    pub async fn add_product_item(&self, seller_id: &ObjectId, form: AddProductItemForm) -> Result<ProductItemResponse, AppError> {
        let product_id = ObjectId::parse_str(form.product_id.trim()).map_err(|_| ErrorCode::NotFoundProduct)?;

        let mut product = self
            .product_repo
            .find_by_seller_and_id(seller_id, &product_id)
            .await?
            .ok_or(ErrorCode::NotFoundProduct)?;

        let response = ProductItemResponse::from(product.add_item(form.name, form.price, form.count)?);
        self.save(&product, ErrorCode::NotFoundProduct).await?;

        Ok(response)
    }

    pub async fn update_product_item(&self, seller_id: &ObjectId, form: UpdateProductItemForm) -> Result<ProductItemResponse, AppError> {
        let id = item_id(&form.id)?;
        let mut product = self.owned_product_of_item(seller_id, &id).await?;

        let response = ProductItemResponse::from(product.update_item(&id, form.name, form.price, form.count)?);
        self.save(&product, ErrorCode::NotFoundItem).await?;

        Ok(response)
    }

    pub async fn delete_product_item(&self, seller_id: &ObjectId, id: &str) -> Result<(), AppError> {
        let id = item_id(id)?;
        let mut product = self.owned_product_of_item(seller_id, &id).await?;

        product.remove_item(&id)?;
        self.save(&product, ErrorCode::NotFoundItem).await?;

        log::info!("상품 옵션 삭제: {} (product {})", id, product.id);
        Ok(())
    }

    async fn owned_product_of_item(&self, seller_id: &ObjectId, item_id: &ObjectId) -> Result<Product, AppError> {
        self.product_repo
            .find_by_seller_and_item_id(seller_id, item_id)
            .await?
            .ok_or_else(|| ErrorCode::NotFoundItem.into())
    }

    /// 읽은 뒤 상품이 삭제되었으면 `missing` 코드로 실패합니다.
    async fn save(&self, product: &Product, missing: ErrorCode) -> Result<(), AppError> {
        if self.product_repo.replace(product).await? {
            Ok(())
        } else {
            Err(missing.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_item_id_is_not_found() {
        assert_eq!(item_id("zzz"), Err(ErrorCode::NotFoundItem));

        let id = ObjectId::new();
        assert_eq!(item_id(&format!(" {} ", id.to_hex())), Ok(id));
    }
}
