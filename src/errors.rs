//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，每个错误携带 HTTP 状态码与错误详情。
//! 错误实现了 `actix_web::ResponseError`，处理函数可以直接用 `?` 向外传播，
//! 由 actix 边界层序列化为 `{"error": ..., "data": null}`。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::models::ApiResponse;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - status_code_u16() 方法 - 返回 HTTP 状态码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_grader_errors {
    ($(
        $variant:ident($status:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum GraderError {
            $($variant(String),)*
        }

        impl GraderError {
            /// 获取 HTTP 状态码
            pub fn status_code_u16(&self) -> u16 {
                match self {
                    $(GraderError::$variant(_) => $status,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(GraderError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(GraderError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl GraderError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        GraderError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_grader_errors! {
    BadRequest(400, "BAD_REQUEST"),
    Unauthorized(401, "UNAUTHORIZED"),
    Forbidden(403, "FORBIDDEN"),
    NotFound(404, "NOT_FOUND"),
    DatabaseConfig(500, "DATABASE_CONFIG_ERROR"),
    DatabaseConnection(500, "DATABASE_CONNECTION_ERROR"),
    DatabaseOperation(500, "DATABASE_OPERATION_ERROR"),
    Serialization(500, "SERIALIZATION_ERROR"),
    Internal(500, "INTERNAL_SERVER_ERROR"),
}

impl GraderError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for GraderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for GraderError {}

impl ResponseError for GraderError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code_u16() >= 500 {
            tracing::error!("{}", self.format_simple());
        }
        HttpResponse::build(self.status_code()).json(ApiResponse::error_empty(self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for GraderError {
    fn from(err: sea_orm::DbErr) -> Self {
        GraderError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for GraderError {
    fn from(err: std::io::Error) -> Self {
        GraderError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for GraderError {
    fn from(err: serde_json::Error) -> Self {
        GraderError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraderError>;
