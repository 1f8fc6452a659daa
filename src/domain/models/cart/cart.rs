//! 장바구니 모델
//!
//! 장바구니는 데이터베이스가 아닌 Redis에 JSON으로 저장됩니다.
//! 상품 id와 옵션 id가 병합 키이며, `messages`는 병합/갱신 중 발생한
//! 변동 사항을 사용자에게 한 번 알려주기 위한 일시적인 필드입니다.
//!
//! # 담기 규칙
//!
//! ```text
//! 장바구니에 같은 상품 id 없음  → 상품 전체 추가
//! 같은 상품 id 있음
//!   ├─ 같은 옵션 id 있음        → 수량 합산, 가격 덮어쓰기
//!   └─ 같은 옵션 id 없음        → 옵션 추가
//! ```

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::domain::entities::products::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub count: i64,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: String,
    pub seller_id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub customer_id: String,
    #[serde(default)]
    pub products: Vec<CartProduct>,
    #[serde(default)]
    pub messages: Vec<String>,
}

/// 같은 id의 옵션을 첫 등장 위치에 합칩니다. 수량은 더하고 가격은 마지막 값을 씁니다.
fn merge_items(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        match merged.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => {
                existing.count = existing.count.saturating_add(item.count);
                existing.price = item.price;
            }
            None => merged.push(item),
        }
    }
    merged
}

impl Cart {
    pub fn new(customer_id: impl Into<String>) -> Self {
        Self {
            customer_id: customer_id.into(),
            products: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub fn find_product(&self, product_id: &str) -> Option<&CartProduct> {
        self.products.iter().find(|product| product.id == product_id)
    }

    /// 장바구니에 이미 담긴 옵션 수량. 없으면 0.
    pub fn item_count(&self, product_id: &str, item_id: &str) -> i64 {
        self.find_product(product_id)
            .and_then(|product| product.items.iter().find(|item| item.id == item_id))
            .map(|item| item.count)
            .unwrap_or(0)
    }

    /// 상품을 장바구니에 병합합니다.
    ///
    /// 같은 옵션 id가 여러 번 들어오면 하나로 합쳐지며, 수량 합산은 `i64::MAX`에서 멈춥니다.
    pub fn add_product(&mut self, incoming: CartProduct) {
        let Some(product) = self.products.iter_mut().find(|product| product.id == incoming.id) else {
            let items = merge_items(incoming.items);
            self.products.push(CartProduct { items, ..incoming });
            return;
        };

        if product.name != incoming.name {
            self.messages.push(format!("{}의 정보가 변경되었습니다.", incoming.name));
            product.name = incoming.name;
            product.description = incoming.description;
        }

        for incoming_item in incoming.items {
            match product.items.iter_mut().find(|item| item.id == incoming_item.id) {
                Some(item) => {
                    if item.price != incoming_item.price {
                        self.messages.push(format!("{} 가격이 변경되었습니다.", item.name));
                    }
                    item.count = item.count.saturating_add(incoming_item.count);
                    item.price = incoming_item.price;
                }
                None => product.items.push(incoming_item),
            }
        }
    }

    /// 상품 카탈로그의 현재 상태로 장바구니를 갱신합니다.
    ///
    /// 삭제된 상품/옵션은 빼고, 가격은 카탈로그 가격으로 맞추고, 재고를 넘는
    /// 수량은 재고만큼 줄입니다. 변동 사항은 `messages`에 추가됩니다.
    pub fn refresh(&mut self, catalog: &[Product]) {
        let catalog: HashMap<String, &Product> = catalog
            .iter()
            .map(|product| (product.id.to_hex(), product))
            .collect();

        let mut messages = Vec::new();

        self.products.retain_mut(|cart_product| {
            let Some(product) = catalog.get(&cart_product.id) else {
                messages.push(format!("{} 상품이 삭제되었습니다.", cart_product.name));
                return false;
            };

            let mut item_messages = Vec::new();
            cart_product.items.retain_mut(|cart_item| {
                let Some(item) = product.items.iter().find(|item| item.id.to_hex() == cart_item.id) else {
                    item_messages.push(format!("{} 옵션이 삭제되었습니다.", cart_item.name));
                    return false;
                };

                if item.count <= 0 {
                    item_messages.push(format!("{} 옵션이 삭제되었습니다.", cart_item.name));
                    return false;
                }

                let price_changed = cart_item.price != item.price;
                let count_exceeded = cart_item.count > item.count;

                if price_changed {
                    cart_item.price = item.price;
                }
                if count_exceeded {
                    cart_item.count = item.count;
                }

                match (price_changed, count_exceeded) {
                    (true, true) => item_messages.push(format!(
                        "{} 가격변동, 수량이 부족하여 구매 가능한 최대치로 변경되었습니다.",
                        cart_item.name
                    )),
                    (true, false) => item_messages.push(format!("{} 가격이 변동되었습니다.", cart_item.name)),
                    (false, true) => item_messages.push(format!(
                        "{} 수량이 부족하여 구매 가능한 최대치로 변경되었습니다.",
                        cart_item.name
                    )),
                    (false, false) => {}
                }
                true
            });

            if cart_product.items.is_empty() {
                messages.push(format!(
                    "{} 상품의 옵션이 모두 없어져 구매가 불가능합니다.",
                    cart_product.name
                ));
                return false;
            }

            if !item_messages.is_empty() {
                messages.push(format!(
                    "{} 상품의 변동 사항 : {}",
                    cart_product.name,
                    item_messages.join(", ")
                ));
            }
            true
        });

        self.messages.extend(messages);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn cart_item(id: &str, name: &str, count: i64, price: i64) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: name.to_string(),
            count,
            price,
        }
    }

    fn cart_product(id: &str, name: &str, items: Vec<CartItem>) -> CartProduct {
        CartProduct {
            id: id.to_string(),
            seller_id: "seller".to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            items,
        }
    }

    fn existing_cart() -> Cart {
        let mut cart = Cart::new("customer");
        cart.products.push(cart_product("p1", "Product A", vec![cart_item("i1", "Item1", 2, 1000)]));
        cart
    }

    #[test]
    fn test_add_to_empty_cart_appends_product() {
        let mut cart = Cart::new("customer");

        cart.add_product(cart_product("p2", "Product B", vec![cart_item("i2", "Item2", 1, 2000)]));

        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.products[0].id, "p2");
        assert_eq!(cart.products[0].items, vec![cart_item("i2", "Item2", 1, 2000)]);
        assert!(cart.messages.is_empty());
    }

    #[test]
    fn test_add_new_item_to_existing_product() {
        let mut cart = existing_cart();

        cart.add_product(cart_product("p1", "Product A", vec![cart_item("i3", "Item3", 1, 1500)]));

        assert_eq!(cart.products.len(), 1);
        let items = &cart.products[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], cart_item("i1", "Item1", 2, 1000));
        assert_eq!(items[1], cart_item("i3", "Item3", 1, 1500));
    }

    #[test]
    fn test_add_existing_item_sums_count_without_duplicating() {
        let mut cart = existing_cart();

        cart.add_product(cart_product("p1", "Product A", vec![cart_item("i1", "Item1", 3, 1000)]));

        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.products[0].items, vec![cart_item("i1", "Item1", 5, 1000)]);
        assert!(cart.messages.is_empty());
    }

    #[test]
    fn test_add_existing_item_overwrites_price() {
        let mut cart = existing_cart();

        cart.add_product(cart_product("p1", "Product A", vec![cart_item("i1", "Item1", 1, 1200)]));

        let item = &cart.products[0].items[0];
        assert_eq!(item.count, 3);
        assert_eq!(item.price, 1200);
        assert_eq!(cart.messages, vec!["Item1 가격이 변경되었습니다.".to_string()]);
    }

    #[test]
    fn test_add_with_renamed_product_reports_change() {
        let mut cart = existing_cart();

        cart.add_product(cart_product("p1", "Product A2", vec![]));

        assert_eq!(cart.products[0].name, "Product A2");
        assert_eq!(cart.messages.len(), 1);
    }

    #[test]
    fn test_add_new_product_folds_repeated_item_ids() {
        let mut cart = Cart::new("customer");

        cart.add_product(cart_product(
            "p1",
            "Product A",
            vec![cart_item("i1", "Item1", 4, 1000), cart_item("i1", "Item1", 4, 1100)],
        ));

        assert_eq!(cart.products[0].items, vec![cart_item("i1", "Item1", 8, 1100)]);
        assert_eq!(cart.item_count("p1", "i1"), 8);
    }

    #[test]
    fn test_add_existing_item_count_saturates() {
        let mut cart = existing_cart();

        cart.add_product(cart_product("p1", "Product A", vec![cart_item("i1", "Item1", i64::MAX, 1000)]));

        assert_eq!(cart.item_count("p1", "i1"), i64::MAX);
    }

    #[test]
    fn test_item_count() {
        let cart = existing_cart();

        assert_eq!(cart.item_count("p1", "i1"), 2);
        assert_eq!(cart.item_count("p1", "missing"), 0);
        assert_eq!(cart.item_count("missing", "i1"), 0);
    }

    fn catalog_product(item_count: usize, price: i64, stock: i64) -> Product {
        let mut product = Product::new(ObjectId::new(), "나이키 에어포스".to_string(), "신발".to_string());
        for i in 0..item_count {
            product.add_item(format!("나이키 에어포스{}", i), price, stock).unwrap();
        }
        product
    }

    fn cart_for(product: &Product, item_index: usize, count: i64, price: i64) -> Cart {
        let item = &product.items[item_index];
        let mut cart = Cart::new("customer");
        cart.add_product(CartProduct {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            name: product.name.clone(),
            description: product.description.clone(),
            items: vec![cart_item(&item.id.to_hex(), &item.name, count, price)],
        });
        cart
    }

    #[test]
    fn test_refresh_corrects_stale_price_with_one_message() {
        let product = catalog_product(3, 10000, 10);
        let mut cart = cart_for(&product, 0, 5, 20000);
        assert!(cart.messages.is_empty());

        cart.refresh(std::slice::from_ref(&product));

        assert_eq!(cart.messages.len(), 1);
        assert_eq!(cart.products.len(), 1);
        let item = &cart.products[0].items[0];
        assert_eq!(item.price, 10000);
        assert_eq!(item.count, 5);
    }

    #[test]
    fn test_refresh_caps_count_to_stock() {
        let product = catalog_product(1, 10000, 3);
        let mut cart = cart_for(&product, 0, 5, 10000);

        cart.refresh(std::slice::from_ref(&product));

        assert_eq!(cart.products[0].items[0].count, 3);
        assert_eq!(
            cart.messages,
            vec!["나이키 에어포스 상품의 변동 사항 : 나이키 에어포스0 수량이 부족하여 구매 가능한 최대치로 변경되었습니다.".to_string()]
        );
    }

    #[test]
    fn test_refresh_price_and_stock_together() {
        let product = catalog_product(1, 10000, 3);
        let mut cart = cart_for(&product, 0, 5, 9000);

        cart.refresh(std::slice::from_ref(&product));

        assert!(cart.messages[0].contains("가격변동, 수량이 부족하여"));
    }

    #[test]
    fn test_refresh_removes_deleted_product() {
        let product = catalog_product(1, 10000, 10);
        let mut cart = cart_for(&product, 0, 1, 10000);

        cart.refresh(&[]);

        assert!(cart.products.is_empty());
        assert_eq!(cart.messages, vec!["나이키 에어포스 상품이 삭제되었습니다.".to_string()]);
    }

    #[test]
    fn test_refresh_removes_product_without_items() {
        let mut product = catalog_product(1, 10000, 10);
        let mut cart = cart_for(&product, 0, 1, 10000);
        let item_id = product.items[0].id;
        product.remove_item(&item_id).unwrap();

        cart.refresh(std::slice::from_ref(&product));

        assert!(cart.products.is_empty());
        assert_eq!(
            cart.messages,
            vec!["나이키 에어포스 상품의 옵션이 모두 없어져 구매가 불가능합니다.".to_string()]
        );
    }

    #[test]
    fn test_refresh_removes_deleted_item_and_keeps_product() {
        let mut product = catalog_product(2, 10000, 10);
        let mut cart = cart_for(&product, 0, 1, 10000);
        let kept = &product.items[1];
        cart.add_product(CartProduct {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            name: product.name.clone(),
            description: product.description.clone(),
            items: vec![cart_item(&kept.id.to_hex(), &kept.name, 1, 10000)],
        });
        let removed_id = product.items[0].id;
        product.remove_item(&removed_id).unwrap();

        cart.refresh(std::slice::from_ref(&product));

        assert_eq!(cart.products.len(), 1);
        assert_eq!(cart.products[0].items.len(), 1);
        assert_eq!(
            cart.messages,
            vec!["나이키 에어포스 상품의 변동 사항 : 나이키 에어포스0 옵션이 삭제되었습니다.".to_string()]
        );
    }

    #[test]
    fn test_refresh_sold_out_item_is_reported_as_removed() {
        let product = catalog_product(2, 10000, 0);
        let mut cart = cart_for(&product, 0, 2, 10000);
        let other = &product.items[1];
        cart.add_product(CartProduct {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            name: product.name.clone(),
            description: product.description.clone(),
            items: vec![cart_item(&other.id.to_hex(), &other.name, 1, 10000)],
        });

        cart.refresh(std::slice::from_ref(&product));

        assert!(cart.products.is_empty());
        assert_eq!(
            cart.messages,
            vec!["나이키 에어포스 상품의 옵션이 모두 없어져 구매가 불가능합니다.".to_string()]
        );
    }

    #[test]
    fn test_refresh_sold_out_item_message() {
        let mut product = catalog_product(2, 10000, 10);
        let sold_out_id = product.items[0].id;
        let mut cart = cart_for(&product, 0, 2, 10000);
        let other = &product.items[1];
        cart.add_product(CartProduct {
            id: product.id.to_hex(),
            seller_id: product.seller_id.to_hex(),
            name: product.name.clone(),
            description: product.description.clone(),
            items: vec![cart_item(&other.id.to_hex(), &other.name, 1, 10000)],
        });
        product.update_item(&sold_out_id, "나이키 에어포스0".to_string(), 10000, 0).unwrap();

        cart.refresh(std::slice::from_ref(&product));

        assert_eq!(cart.products[0].items.len(), 1);
        assert_eq!(
            cart.messages,
            vec!["나이키 에어포스 상품의 변동 사항 : 나이키 에어포스0 옵션이 삭제되었습니다.".to_string()]
        );
    }

    #[test]
    fn test_refresh_without_changes_keeps_cart_silent() {
        let product = catalog_product(2, 10000, 10);
        let mut cart = cart_for(&product, 1, 2, 10000);
        let before = cart.clone();

        cart.refresh(std::slice::from_ref(&product));

        assert_eq!(cart, before);
    }
}
