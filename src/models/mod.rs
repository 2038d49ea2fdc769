pub mod assignments;
pub mod auth;
pub mod common;
pub mod system;
pub mod teachers;
pub mod users;

pub use common::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
