use serde::Serialize;
use ts_rs::TS;

use super::entities::{Assignment, AssignmentState, Grade};

/// 评分结果
///
/// 在作业本身之外再单独给出评分后的状态与等级
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct GradedAssignmentResponse {
    #[serde(rename = "data")]
    pub assignment: Assignment,
    pub state: AssignmentState,
    pub grade: Option<Grade>,
}

impl From<Assignment> for GradedAssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            state: assignment.state,
            grade: assignment.grade,
            assignment,
        }
    }
}
