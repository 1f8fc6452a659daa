//! 장바구니 요청 폼

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::models::cart::{CartItem, CartProduct};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCartItemForm {
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub count: i64,

    #[validate(range(min = 0, message = "가격은 0 이상이어야 합니다"))]
    pub price: i64,
}

/// 장바구니에 담을 상품과 옵션
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProductCartForm {
    pub id: String,

    #[serde(default)]
    pub seller_id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(length(min = 1, message = "담을 옵션을 선택해주세요"))]
    #[validate(nested)]
    pub items: Vec<AddCartItemForm>,
}

impl AddProductCartForm {
    /// 상품 id와 옵션 id의 앞뒤 공백을 제거합니다.
    ///
    /// 장바구니 병합과 카탈로그 조회가 같은 id 문자열을 쓰도록 저장 전에 호출합니다.
    pub fn normalized(mut self) -> Self {
        self.id = self.id.trim().to_string();
        for item in &mut self.items {
            item.id = item.id.trim().to_string();
        }
        self
    }
}

impl From<AddProductCartForm> for CartProduct {
    fn from(form: AddProductCartForm) -> Self {
        Self {
            id: form.id,
            seller_id: form.seller_id,
            name: form.name,
            description: form.description,
            items: form
                .items
                .into_iter()
                .map(|item| CartItem {
                    id: item.id,
                    name: item.name,
                    count: item.count,
                    price: item.price,
                })
                .collect(),
        }
    }
}

/// 장바구니 전체 교체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCartForm {
    #[validate(nested)]
    #[serde(default)]
    pub products: Vec<AddProductCartForm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(count: i64) -> AddProductCartForm {
        AddProductCartForm {
            id: "p1".to_string(),
            seller_id: "s1".to_string(),
            name: "Product A".to_string(),
            description: "Description A".to_string(),
            items: vec![AddCartItemForm {
                id: "i1".to_string(),
                name: "Item1".to_string(),
                count,
                price: 1000,
            }],
        }
    }

    #[test]
    fn test_rejects_zero_count() {
        assert!(form(1).validate().is_ok());
        assert!(form(0).validate().is_err());
    }

    #[test]
    fn test_rejects_empty_items() {
        let mut empty = form(1);
        empty.items.clear();

        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_normalized_trims_ids() {
        let mut padded = form(1);
        padded.id = " p1\t".to_string();
        padded.items[0].id = "  i1 ".to_string();

        let normalized = padded.normalized();

        assert_eq!(normalized.id, "p1");
        assert_eq!(normalized.items[0].id, "i1");
    }

    #[test]
    fn test_into_cart_product() {
        let product = CartProduct::from(form(2));

        assert_eq!(product.id, "p1");
        assert_eq!(product.items[0].count, 2);
        assert_eq!(product.items[0].price, 1000);
    }
}
