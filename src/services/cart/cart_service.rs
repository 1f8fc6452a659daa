//! # 장바구니 서비스
//!
//! 고객 장바구니를 Redis에 보관하고, 담기 전 재고를 확인하며,
//! 조회할 때마다 상품 카탈로그 기준으로 가격/재고/삭제 여부를 갱신합니다.
//!
//! 갱신 중 생긴 메시지는 응답에만 한 번 실리고 저장본에서는 지워집니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use singleton_macro::service;
use crate::{
    domain::{
        dto::cart::{AddProductCartForm, UpdateCartForm},
        entities::products::Product,
        models::cart::Cart,
    },
    errors::{AppError, ErrorCode},
    repositories::cart::cart_repo::CartRepository,
    services::products::ProductSearchService,
};

/// 담으려는 옵션이 상품에 속하고 재고가 충분한지 확인합니다.
///
/// 폼 안에서 같은 옵션 id가 반복되면 수량을 합친 뒤 장바구니 수량과 함께 재고와 비교합니다.
pub(crate) fn check_addable(cart: &Cart, product: &Product, form: &AddProductCartForm) -> Result<(), ErrorCode> {
    let mut requested: Vec<(&str, i64)> = Vec::new();
    for form_item in &form.items {
        match requested.iter_mut().find(|(id, _)| *id == form_item.id) {
            Some((_, count)) => *count = count.saturating_add(form_item.count),
            None => requested.push((&form_item.id, form_item.count)),
        }
    }

    for (item_id, count) in requested {
        let item = product
            .items
            .iter()
            .find(|item| item.id.to_hex() == item_id)
            .ok_or(ErrorCode::NotFoundItem)?;

        let in_cart = cart.item_count(&form.id, item_id);
        if in_cart.saturating_add(count) > item.count {
            return Err(ErrorCode::ItemCountNotEnough);
        }
    }
    Ok(())
}

/// 카탈로그 조회용 상품 id 목록. 형식이 잘못된 id는 삭제된 상품과 같이 취급됩니다.
fn product_ids(cart: &Cart) -> Vec<ObjectId> {
    cart.products
        .iter()
        .filter_map(|product| ObjectId::parse_str(&product.id).ok())
        .collect()
}

/// 카탈로그 기준으로 갱신한 장바구니를 응답용과 저장용으로 나눕니다.
///
/// 응답에는 쌓여 있던 메시지와 이번 갱신 메시지가 모두 실리고, 저장본의 메시지는 비워집니다.
pub(crate) fn refresh_for_read(mut cart: Cart, catalog: &[Product]) -> (Cart, Cart) {
    cart.refresh(catalog);

    let response = cart.clone();
    cart.clear_messages();
    (response, cart)
}

fn cart_change_failed(customer_id: &str, e: AppError) -> AppError {
    log::error!("장바구니 저장 실패 (customer {}): {}", customer_id, e);
    ErrorCode::CartChangeFail.into()
}

#[service(name = "cart")]
pub struct CartService {
    cart_repo: Arc<CartRepository>,

    product_search_service: Arc<ProductSearchService>,
}

impl CartService {
    pub async fn add_cart(&self, customer_id: &str, form: AddProductCartForm) -> Result<Cart, AppError> {
        let form = form.normalized();
        let product_id = ObjectId::parse_str(&form.id).map_err(|_| ErrorCode::NotFoundProduct)?;

        let product = self
            .product_search_service
            .get_list_by_product_ids(&[product_id])
            .await?
            .into_iter()
            .next()
            .ok_or(ErrorCode::NotFoundProduct)?;

        let mut cart = self.load(customer_id).await?;
        check_addable(&cart, &product, &form)?;

        cart.add_product(form.into());
        self.cart_repo
            .save(&cart)
            .await
            .map_err(|e| cart_change_failed(customer_id, e))?;

        log::info!("장바구니 담기: customer {} product {}", customer_id, product_id);
        Ok(cart)
    }

    pub async fn get_cart(&self, customer_id: &str) -> Result<Cart, AppError> {
        let cart = self.load(customer_id).await?;

        let products = self
            .product_search_service
            .get_list_by_product_ids(&product_ids(&cart))
            .await?;

        let (response, stored) = refresh_for_read(cart, &products);
        self.cart_repo.save(&stored).await?;

        Ok(response)
    }

    /// 장바구니 전체를 요청 내용으로 바꾼 뒤 갱신된 장바구니를 반환합니다.
    pub async fn update_cart(&self, customer_id: &str, form: UpdateCartForm) -> Result<Cart, AppError> {
        let mut cart = Cart::new(customer_id);
        for product in form.products {
            cart.add_product(product.normalized().into());
        }
        cart.clear_messages();

        self.cart_repo
            .save(&cart)
            .await
            .map_err(|e| cart_change_failed(customer_id, e))?;
        self.get_cart(customer_id).await
    }

    pub async fn clear_cart(&self, customer_id: &str) -> Result<(), AppError> {
        self.cart_repo.save(&Cart::new(customer_id)).await
    }

    async fn load(&self, customer_id: &str) -> Result<Cart, AppError> {
        Ok(self
            .cart_repo
            .find(customer_id)
            .await?
            .unwrap_or_else(|| Cart::new(customer_id)))
    }
}
