/*!
 * JWT 认证中间件
 *
 * 验证 `Authorization: Bearer <token>`，并把令牌中的用户解析为 [`AuthPrincipal`]
 * （用户 ID + 学生/教师/校长 ID 之一）放入请求扩展。
 *
 * ```rust,ignore
 * web::scope("/api/v1/student")
 *     .wrap(RequireJWT)
 *     .service(
 *         web::scope("")
 *             .wrap(RequireRole::new_any(UserRole::student_roles()))
 *             .route("/assignments", web::get().to(list_assignments)),
 *     )
 * ```
 *
 * 处理函数中通过 [`RequireJWT::require_principal`] 取出主体。
 * 令牌缺失、无效、用户不存在或缺少角色记录时返回 401。
 */

use crate::errors::{GraderError, Result};
use crate::models::auth::AuthPrincipal;
use crate::storage::Storage;
use crate::utils::jwt::JwtUtils;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token，再解析为认证主体
async fn extract_and_resolve_principal(
    req: &ServiceRequest,
) -> std::result::Result<AuthPrincipal, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| "Invalid user ID in JWT".to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| "Storage not found in app data".to_string())?
        .get_ref()
        .clone();

    storage
        .resolve_principal(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<std::result::Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            match extract_and_resolve_principal(&req).await {
                Ok(principal) => {
                    debug!(
                        "JWT authentication successful for user {} as {}",
                        principal.user_id,
                        principal.user_role()
                    );
                    req.extensions_mut().insert(principal);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取认证主体
impl RequireJWT {
    /// 从请求扩展中提取认证主体
    /// 此函数应该在应用了RequireJWT中间件的路由处理程序中使用
    pub fn extract_principal(req: &actix_web::HttpRequest) -> Option<AuthPrincipal> {
        req.extensions().get::<AuthPrincipal>().copied()
    }

    /// 同上，缺失时返回 401
    pub fn require_principal(req: &actix_web::HttpRequest) -> Result<AuthPrincipal> {
        Self::extract_principal(req)
            .ok_or_else(|| GraderError::unauthorized("Authentication required"))
    }
}
