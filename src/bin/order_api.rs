//! 주문 서비스 (상품 관리, 검색, 장바구니)

use log::info;
use commerce_backend::repositories::products::product_repo::ProductRepository;
use commerce_backend::routes::configure_order_routes;
use commerce_backend::server::{self, ServerOptions};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::load_env_file();
    server::init_logging();

    info!("🚀 주문 서비스 시작중...");

    server::initialize("commerce_order").await?;

    if let Err(e) = ProductRepository::instance().create_indexes().await {
        log::warn!("상품 인덱스 생성 실패: {}", e);
    }

    server::run(ServerOptions {
        name: "order_api",
        default_port: 8082,
        routes: configure_order_routes,
    })
    .await
}
