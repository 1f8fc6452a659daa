//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::domain::entities::users::UserType;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::TokenService;

/// `Authorization` 헤더가 없을 때 확인하는 헤더
pub const AUTH_TOKEN_HEADER: &str = "X-AUTH-TOKEN";

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: UserType,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role;

        Box::pin(async move {
            let token_service = TokenService::instance();

            let user = match extract_user_from_request(&req, &token_service) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패 {}: {}", req.path(), err);
                    let response = HttpResponse::Unauthorized()
                        .json(serde_json::json!({
                            "error": "authentication_required",
                            "message": "유효한 인증 토큰이 필요합니다"
                        }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            if !user.has_role(required_role) {
                log::warn!("권한 부족: 회원 {} ({}), 필요 권한: {}",
                    user.user_id, user.role.as_str(), required_role.as_str());
                let response = HttpResponse::Forbidden()
                    .json(serde_json::json!({
                        "error": "insufficient_permissions",
                        "message": "접근 권한이 부족합니다"
                    }));
                let (req, _) = req.into_parts();
                return Ok(ServiceResponse::new(req, response).map_into_right_body());
            }

            log::debug!("인증 성공: 회원 {}", user.user_id);
            req.extensions_mut().insert(user);

            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청 헤더에서 토큰을 꺼내 검증합니다.
///
/// `Authorization: Bearer <token>`을 먼저 보고, 없으면 `X-AUTH-TOKEN: <token>`을 봅니다.
fn extract_user_from_request(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthenticatedUser, AppError> {
    let header = |name: &str| req.headers().get(name).and_then(|h| h.to_str().ok());

    let token = match (header("Authorization"), header(AUTH_TOKEN_HEADER)) {
        (Some(auth_header), _) => token_service.extract_bearer_token(auth_header)?,
        (None, Some(raw)) if !raw.trim().is_empty() => raw.trim(),
        _ => return Err(AppError::AuthenticationError("인증 헤더가 없습니다".to_string())),
    };

    let claims = token_service.verify_token(token)?;
    Ok(AuthenticatedUser::from(claims))
}
