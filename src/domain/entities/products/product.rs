//! 상품 엔티티
//!
//! 상품 옵션(`ProductItem`)은 상품 문서 안에 내장되며 각자 고유한 `id`를 가집니다.
//! 옵션 이름은 한 상품 안에서 중복될 수 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: ObjectId,
    pub product_id: ObjectId,
    pub seller_id: ObjectId,
    pub name: String,
    pub price: i64,
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub seller_id: ObjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<ProductItem>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Product {
    /// 새 상품. 저장 전에 id를 미리 발급해 옵션의 `product_id`로 사용합니다.
    pub fn new(seller_id: ObjectId, name: String, description: String) -> Self {
        let now = DateTime::now();

        Self {
            id: ObjectId::new(),
            seller_id,
            name,
            description,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn find_item(&self, item_id: &ObjectId) -> Option<&ProductItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    pub fn has_item_named(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name == name)
    }

    /// 옵션을 추가합니다. 같은 이름의 옵션이 있으면 `SAME_ITEM_NAME`.
    pub fn add_item(&mut self, name: String, price: i64, count: i64) -> Result<&ProductItem, ErrorCode> {
        if self.has_item_named(&name) {
            return Err(ErrorCode::SameItemName);
        }

        self.items.push(ProductItem {
            id: ObjectId::new(),
            product_id: self.id,
            seller_id: self.seller_id,
            name,
            price,
            count,
        });
        self.updated_at = DateTime::now();

        self.items.last().ok_or(ErrorCode::NotFoundItem)
    }

    /// 옵션 수정. 없는 옵션이면 `NOT_FOUND_ITEM`, 다른 옵션과 이름이 겹치면 `SAME_ITEM_NAME`.
    pub fn update_item(&mut self, item_id: &ObjectId, name: String, price: i64, count: i64) -> Result<&ProductItem, ErrorCode> {
        if self.items.iter().any(|item| &item.id != item_id && item.name == name) {
            return Err(ErrorCode::SameItemName);
        }

        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or(ErrorCode::NotFoundItem)?;

        item.name = name;
        item.price = price;
        item.count = count;
        self.updated_at = DateTime::now();

        Ok(item)
    }

    pub fn remove_item(&mut self, item_id: &ObjectId) -> Result<ProductItem, ErrorCode> {
        let position = self
            .items
            .iter()
            .position(|item| &item.id == item_id)
            .ok_or(ErrorCode::NotFoundItem)?;

        self.updated_at = DateTime::now();
        Ok(self.items.remove(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shoes() -> Product {
        let mut product = Product::new(ObjectId::new(), "나이키 에어포스".to_string(), "신발".to_string());
        for i in 0..3 {
            product.add_item(format!("나이키 에어포스{}", i), 10000, 10).unwrap();
        }
        product
    }

    #[test]
    fn test_add_item_sets_back_references() {
        let product = shoes();

        assert_eq!(product.items.len(), 3);
        assert!(product.items.iter().all(|item| item.product_id == product.id));
        assert!(product.items.iter().all(|item| item.seller_id == product.seller_id));
    }

    #[test]
    fn test_add_item_rejects_same_name() {
        let mut product = shoes();

        let result = product.add_item("나이키 에어포스0".to_string(), 5000, 1);

        assert_eq!(result.err(), Some(ErrorCode::SameItemName));
        assert_eq!(product.items.len(), 3);
    }

    #[test]
    fn test_update_item() {
        let mut product = shoes();
        let item_id = product.items[1].id;

        let updated = product.update_item(&item_id, "한정판".to_string(), 20000, 2).unwrap();

        assert_eq!(updated.name, "한정판");
        assert_eq!(updated.price, 20000);
        assert_eq!(updated.count, 2);
    }

    #[test]
    fn test_update_item_keeps_own_name() {
        let mut product = shoes();
        let item_id = product.items[0].id;

        assert!(product.update_item(&item_id, "나이키 에어포스0".to_string(), 9000, 1).is_ok());
    }

    #[test]
    fn test_update_item_rejects_sibling_name() {
        let mut product = shoes();
        let item_id = product.items[0].id;

        let result = product.update_item(&item_id, "나이키 에어포스2".to_string(), 9000, 1);

        assert_eq!(result.err(), Some(ErrorCode::SameItemName));
    }

    #[test]
    fn test_unknown_item() {
        let mut product = shoes();
        let unknown = ObjectId::new();

        assert_eq!(
            product.update_item(&unknown, "x".to_string(), 1, 1).err(),
            Some(ErrorCode::NotFoundItem)
        );
        assert_eq!(product.remove_item(&unknown).err(), Some(ErrorCode::NotFoundItem));
    }

    #[test]
    fn test_remove_item() {
        let mut product = shoes();
        let item_id = product.items[2].id;

        let removed = product.remove_item(&item_id).unwrap();

        assert_eq!(removed.name, "나이키 에어포스2");
        assert!(product.find_item(&item_id).is_none());
    }
}
