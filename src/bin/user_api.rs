//! 회원 서비스 (가입, 이메일 인증, 로그인, 회원 정보)

use log::info;
use commerce_backend::repositories::users::user_repo::UserRepository;
use commerce_backend::routes::configure_user_routes;
use commerce_backend::server::{self, ServerOptions};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    server::load_env_file();
    server::init_logging();

    info!("🚀 회원 서비스 시작중...");

    server::initialize("commerce_user").await?;

    if let Err(e) = UserRepository::instance().create_indexes().await {
        log::warn!("회원 인덱스 생성 실패: {}", e);
    }

    server::run(ServerOptions {
        name: "user_api",
        default_port: 8081,
        routes: configure_user_routes,
    })
    .await
}
