use serde::Deserialize;
use ts_rs::TS;

use super::entities::Grade;

// 创建或编辑草稿请求
//
// 不带 id 时新建草稿；带 id 时编辑已有草稿的内容
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct UpsertAssignmentRequest {
    pub id: Option<i64>,
    pub content: Option<String>,
}

// 提交作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct SubmitAssignmentRequest {
    pub id: i64,
    pub teacher_id: i64,
}

// 评分请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct GradeAssignmentRequest {
    pub id: i64,
    pub grade: Option<Grade>,
}
