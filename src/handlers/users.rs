//! 회원 API 핸들러 (user_api)
//!
//! 가입/인증/로그인은 역할별로 같은 모양의 엔드포인트가 두 벌씩 있습니다.
//! 역할은 요청 경로로 정해집니다.

use actix_web::{web, HttpResponse, get, post};
use serde_json::json;
use validator::Validate;
use crate::domain::dto::users::request::{SignInRequest, SignUpRequest, VerifyQuery};
use crate::domain::entities::users::UserType;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::users::{SignInService, SignUpService, UserService};

async fn signup(user_type: UserType, payload: SignUpRequest) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    SignUpService::instance().signup(user_type, payload).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "회원 가입에 성공하였습니다." })))
}

async fn verify(user_type: UserType, query: VerifyQuery) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    SignUpService::instance().verify(user_type, &query.email, &query.code).await?;

    Ok(HttpResponse::Ok().json(json!({ "message": "인증이 완료되었습니다." })))
}

async fn signin(user_type: UserType, payload: SignInRequest) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = SignInService::instance().signin(user_type, payload).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[post("/customer")]
pub async fn signup_customer(payload: web::Json<SignUpRequest>) -> Result<HttpResponse, AppError> {
    signup(UserType::Customer, payload.into_inner()).await
}

#[post("/seller")]
pub async fn signup_seller(payload: web::Json<SignUpRequest>) -> Result<HttpResponse, AppError> {
    signup(UserType::Seller, payload.into_inner()).await
}

#[get("/customer/verify")]
pub async fn verify_customer(query: web::Query<VerifyQuery>) -> Result<HttpResponse, AppError> {
    verify(UserType::Customer, query.into_inner()).await
}

#[get("/seller/verify")]
pub async fn verify_seller(query: web::Query<VerifyQuery>) -> Result<HttpResponse, AppError> {
    verify(UserType::Seller, query.into_inner()).await
}

#[post("/customer")]
pub async fn signin_customer(payload: web::Json<SignInRequest>) -> Result<HttpResponse, AppError> {
    signin(UserType::Customer, payload.into_inner()).await
}

#[post("/seller")]
pub async fn signin_seller(payload: web::Json<SignInRequest>) -> Result<HttpResponse, AppError> {
    signin(UserType::Seller, payload.into_inner()).await
}

/// `/customer/getInfo`, `/seller/getInfo` 공용. 역할 확인은 스코프의 미들웨어가 합니다.
#[get("/getInfo")]
pub async fn get_info(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let info = UserService::instance().get_info(&user).await?;

    Ok(HttpResponse::Ok().json(info))
}
