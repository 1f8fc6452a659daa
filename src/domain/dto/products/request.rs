//! 상품 등록/수정 요청 폼
//!
//! id는 모두 ObjectId hex 문자열로 받으며, 형식 검사는 서비스 계층에서
//! `ObjectId::parse_str`로 수행합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 상품 등록 시 함께 등록하는 옵션
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductItemForm {
    #[validate(length(min = 1, max = 100, message = "옵션 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0, message = "가격은 0 이상이어야 합니다"))]
    pub price: i64,

    #[validate(range(min = 0, message = "수량은 0 이상이어야 합니다"))]
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = 100, message = "상품 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<ProductItemForm>,
}

/// 기존 상품에 옵션 추가
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddProductItemForm {
    pub product_id: String,

    #[validate(length(min = 1, max = 100, message = "옵션 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0, message = "가격은 0 이상이어야 합니다"))]
    pub price: i64,

    #[validate(range(min = 0, message = "수량은 0 이상이어야 합니다"))]
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductItemForm {
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "옵션 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[validate(range(min = 0, message = "가격은 0 이상이어야 합니다"))]
    pub price: i64,

    #[validate(range(min = 0, message = "수량은 0 이상이어야 합니다"))]
    pub count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProductForm {
    pub id: String,

    #[validate(length(min = 1, max = 100, message = "상품 이름은 1-100자 사이여야 합니다"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[validate(nested)]
    #[serde(default)]
    pub items: Vec<UpdateProductItemForm>,
}

/// `?id=` 쿼리
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    pub id: String,
}

/// `/search/product?name=`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub name: String,
}

/// `/search/product/detail?productId=`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetailQuery {
    pub product_id: String,
}
