use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::AuthService;
use crate::errors::GraderError;
use crate::models::{
    ApiResponse,
    auth::{LoginRequest, LoginResponse},
};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

const ERR_BAD_CREDENTIALS: &str = "Username or password is incorrect";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 1. 根据用户名获取用户信息
    let user = storage
        .get_user_by_username(&login_request.username)
        .await?;

    // 2. 验证密码，用户不存在与密码错误返回同样的信息
    let user = user
        .filter(|u| verify_password(&login_request.password, &u.password_hash))
        .ok_or_else(|| GraderError::unauthorized(ERR_BAD_CREDENTIALS))?;

    // 3. 生成令牌
    let access_token = user.generate_access_token().map_err(|e| {
        error!("Failed to generate JWT token: {}", e);
        GraderError::internal("Login failed, unable to generate token")
    })?;

    info!("User {} logged in as {}", user.username, user.role);

    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse {
        access_token,
        expires_in: JwtUtils::access_token_expires_in(),
        user,
    })))
}
