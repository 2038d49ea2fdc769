use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "teacher.ts")]
pub struct Teacher {
    // 教师 ID（作业中的 teacher_id 指向这里）
    pub id: i64,
    // 关联的用户 ID
    pub user_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
