//! 상품 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::products::{Product, ProductItem};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductItemResponse {
    pub id: String,
    pub product_id: String,
    pub name: String,
    pub price: i64,
    pub count: i64,
}

impl From<&ProductItem> for ProductItemResponse {
    fn from(item: &ProductItem) -> Self {
        Self {
            id: item.id.to_hex(),
            product_id: item.product_id.to_hex(),
            name: item.name.clone(),
            price: item.price,
            count: item.count,
        }
    }
}

/// 옵션을 포함한 상품 상세
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<ProductItemResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            items: product.items.iter().map(ProductItemResponse::from).collect(),
            name: product.name,
            description: product.description,
        }
    }
}

/// 검색 목록용 요약 (옵션 제외)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductSummaryResponse {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
}

impl From<Product> for ProductSummaryResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            name: product.name,
            description: product.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_product_response_converts_ids_to_hex() {
        let mut product = Product::new(ObjectId::new(), "상품".to_string(), "설명".to_string());
        product.add_item("옵션".to_string(), 1000, 3).unwrap();
        let product_id = product.id.to_hex();

        let response = ProductResponse::from(product);

        assert_eq!(response.id, product_id);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].product_id, product_id);
        assert_eq!(response.items[0].id.len(), 24);
    }
}
