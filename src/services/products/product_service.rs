//! # 상품 관리 서비스
//!
//! 판매자의 상품 등록/수정/삭제를 처리합니다. 모든 변경은 요청한 판매자가
//! 소유한 상품에만 적용되며, 다른 판매자의 상품은 존재하지 않는 것으로 취급합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::products::{AddProductForm, ProductResponse, UpdateProductForm},
        entities::products::Product,
    },
    errors::{AppError, ErrorCode},
    repositories::products::product_repo::ProductRepository,
    utils::string_utils::{parse_object_id, validate_required_string},
};

/// 등록 폼으로 새 상품을 만듭니다. 옵션은 새 id를 발급받습니다.
pub(crate) fn build_product(seller_id: ObjectId, form: AddProductForm) -> Result<Product, AppError> {
    let name = validate_required_string(&form.name, "상품 이름")?;
    let mut product = Product::new(seller_id, name, form.description);

    for item in form.items {
        product.add_item(item.name, item.price, item.count)?;
    }
    Ok(product)
}

/// 수정 폼을 상품에 반영합니다. 폼에 있는 옵션만 id로 찾아 수정합니다.
pub(crate) fn apply_update(product: &mut Product, form: UpdateProductForm) -> Result<(), AppError> {
    product.name = validate_required_string(&form.name, "상품 이름")?;
    product.description = form.description;

    for item in form.items {
        let item_id = ObjectId::parse_str(item.id.trim()).map_err(|_| ErrorCode::NotFoundItem)?;
        product.update_item(&item_id, item.name, item.price, item.count)?;
    }
    Ok(())
}

#[service(name = "product")]
pub struct ProductService {
    product_repo: Arc<ProductRepository>,
}

impl ProductService {
    pub async fn add_product(&self, seller_id: &ObjectId, form: AddProductForm) -> Result<ProductResponse, AppError> {
        let product = build_product(*seller_id, form)?;
        self.product_repo.insert(&product).await?;

        log::info!("상품 등록: {} (seller {})", product.id, seller_id);
        Ok(ProductResponse::from(product))
    }

    pub async fn update_product(&self, seller_id: &ObjectId, form: UpdateProductForm) -> Result<ProductResponse, AppError> {
        let id = ObjectId::parse_str(form.id.trim()).map_err(|_| ErrorCode::NotFoundProduct)?;

        let mut product = self
            .product_repo
            .find_by_seller_and_id(seller_id, &id)
            .await?
            .ok_or(ErrorCode::NotFoundProduct)?;

        apply_update(&mut product, form)?;

        if !self.product_repo.replace(&product).await? {
            return Err(ErrorCode::NotFoundProduct.into());
        }
        Ok(ProductResponse::from(product))
    }

    pub async fn delete_product(&self, seller_id: &ObjectId, product_id: &str) -> Result<(), AppError> {
        let id = parse_object_id(product_id, "상품 id")?;

        if !self.product_repo.delete_by_seller_and_id(seller_id, &id).await? {
            return Err(ErrorCode::NotFoundProduct.into());
        }

        log::info!("상품 삭제: {} (seller {})", id, seller_id);
        Ok(())
    }
}
