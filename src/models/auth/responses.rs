use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 登录响应模型
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    pub expires_in: i64,
    pub user: User,
}
