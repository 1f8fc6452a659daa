//! 서버 기동 공통 코드
//!
//! user_api와 order_api 실행 파일은 같은 순서로 기동합니다.
//!
//! 1. 프로필별 `.env` 로드, 로깅 초기화
//! 2. MongoDB, Redis 연결 후 `ServiceLocator`에 등록
//! 3. 등록된 리포지토리/서비스 싱글톤 초기화
//! 4. 요청 제한, CORS, 접근 로그를 붙여 HTTP 서버 실행

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use crate::caching::redis::RedisClient;
use crate::config::{RateLimitConfig, ServerConfig};
use crate::core::registry::ServiceLocator;
use crate::db::Database;

/// 실행 파일별 설정
pub struct ServerOptions {
    pub name: &'static str,
    pub default_port: u16,
    pub routes: fn(&mut web::ServiceConfig),
}

pub fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

pub fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    error!("{}: {}", context, e);
    io::Error::other(format!("{}: {}", context, e))
}

/// 데이터 스토어를 연결하고 모든 싱글톤을 초기화합니다.
pub async fn initialize(default_database: &str) -> io::Result<()> {
    info!("📡 데이터 스토어 연결 중...");

    let database = Database::new(default_database)
        .await
        .map_err(|e| startup_error("데이터베이스 연결 실패", e))?;
    let redis_client = RedisClient::new()
        .await
        .map_err(|e| startup_error("Redis 연결 실패", e))?;

    ServiceLocator::set(Arc::new(database));
    ServiceLocator::set(Arc::new(redis_client));

    ServiceLocator::initialize_all()
        .await
        .map_err(|e| startup_error("서비스 초기화 실패", e))?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");
    Ok(())
}

pub fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-auth-token"),
        ])
        .supports_credentials()
        .max_age(3600)
}

/// HTTP 서버를 실행합니다. 종료될 때까지 반환하지 않습니다.
pub async fn run(options: ServerOptions) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port(options.default_port));

    let rate_limit = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit.per_second)
        .burst_size(rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| startup_error("요청 제한 설정 실패", "per_second와 burst_size는 0보다 커야 합니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit.per_second,
        rate_limit.burst_size
    );
    info!("🌐 {} 서버가 http://{} 에서 실행중입니다", options.name, bind_address);

    let routes = options.routes;
    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(routes)
    })
        .bind(&bind_address)?
        .workers(4)
        .run()
        .await
}
