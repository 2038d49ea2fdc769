use super::entities::UserRole;
use serde::Deserialize;
use ts_rs::TS;

// 用户创建请求
//
// 由校长创建学生、教师或校长账号；password 在进入存储层之前会被替换为哈希值
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}
