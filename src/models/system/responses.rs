use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

// 就绪检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub status: String,
    pub time: DateTime<Utc>,
    pub uptime_seconds: Option<i64>,
}
