//! # 상품 리포지토리
//!
//! 상품과 상품 옵션을 `products` 컬렉션에 저장합니다. 옵션은 상품 문서에
//! 내장되므로 옵션 조회는 `items.id` 필드로 상품 문서를 찾습니다.

use std::sync::Arc;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Document, Regex},
    options::IndexOptions,
    IndexModel,
};
use singleton_macro::repository;
use crate::{
    db::Database,
    domain::entities::products::Product,
    errors::AppError,
    utils::string_utils::escape_regex,
};

/// 검색어를 문자 그대로 포함하는 이름 (대소문자 무시)
fn name_contains_filter(keyword: &str) -> Document {
    doc! {
        "name": Regex {
            pattern: escape_regex(keyword),
            options: "i".to_string(),
        }
    }
}

#[repository(name = "product", collection = "products")]
pub struct ProductRepository {
    db: Arc<Database>,
}

impl ProductRepository {
    pub async fn insert(&self, product: &Product) -> Result<(), AppError> {
        self.collection::<Product>()
            .insert_one(product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 상품 문서 전체를 교체합니다. 반환값은 교체 여부입니다.
    pub async fn replace(&self, product: &Product) -> Result<bool, AppError> {
        let result = self
            .collection::<Product>()
            .replace_one(doc! { "_id": product.id }, product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    pub async fn find_by_id(&self, id: &ObjectId) -> Result<Option<Product>, AppError> {
        self.find_one(doc! { "_id": *id }).await
    }

    pub async fn find_by_seller_and_id(&self, seller_id: &ObjectId, id: &ObjectId) -> Result<Option<Product>, AppError> {
        self.find_one(doc! { "_id": *id, "seller_id": *seller_id }).await
    }

    /// 옵션 id를 포함하는 상품
    pub async fn find_by_item_id(&self, item_id: &ObjectId) -> Result<Option<Product>, AppError> {
        self.find_one(doc! { "items.id": *item_id }).await
    }

    pub async fn find_by_seller_and_item_id(&self, seller_id: &ObjectId, item_id: &ObjectId) -> Result<Option<Product>, AppError> {
        self.find_one(doc! { "items.id": *item_id, "seller_id": *seller_id }).await
    }

    /// 존재하는 id만 반환합니다.
    pub async fn find_all_by_ids(&self, ids: &[ObjectId]) -> Result<Vec<Product>, AppError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        self.find_many(doc! { "_id": { "$in": ids.to_vec() } }).await
    }

    /// 이름에 `keyword`를 포함하는 상품 (대소문자 무시)
    pub async fn search_by_name(&self, keyword: &str) -> Result<Vec<Product>, AppError> {
        self.find_many(name_contains_filter(keyword)).await
    }

    pub async fn delete_by_seller_and_id(&self, seller_id: &ObjectId, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Product>()
            .delete_one(doc! { "_id": *id, "seller_id": *seller_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Product>, AppError> {
        self.collection::<Product>()
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<Product>, AppError> {
        self.collection::<Product>()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let seller_index = IndexModel::builder()
            .keys(doc! { "seller_id": 1 })
            .options(IndexOptions::builder()
                .name("seller_id".to_string())
                .build())
            .build();

        let item_index = IndexModel::builder()
            .keys(doc! { "items.id": 1 })
            .options(IndexOptions::builder()
                .name("items_id".to_string())
                .build())
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder()
                .name("name".to_string())
                .build())
            .build();

        self.collection::<Product>()
            .create_indexes([seller_index, item_index, name_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::Bson;

    fn regex_of(filter: &Document) -> Regex {
        match filter.get("name") {
            Some(Bson::RegularExpression(regex)) => regex.clone(),
            other => panic!("name 필드가 정규식이 아닙니다: {:?}", other),
        }
    }

    #[test]
    fn test_name_filter_is_case_insensitive_contains() {
        let regex = regex_of(&name_contains_filter("Test"));

        assert_eq!(regex.pattern, "Test");
        assert_eq!(regex.options, "i");
    }

    #[test]
    fn test_name_filter_escapes_metacharacters() {
        let regex = regex_of(&name_contains_filter("a+b (1)"));

        assert_eq!(regex.pattern, r"a\+b \(1\)");
    }
}
