use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 统一的API响应结构
//
// 成功: {"data": ...}
// 失败: {"error": "错误详情", "data": null}
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            error: None,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn error_empty(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope() {
        let json = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2] }));
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(ApiResponse::error_empty("NOT_FOUND")).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "NOT_FOUND", "data": null }));
    }
}
