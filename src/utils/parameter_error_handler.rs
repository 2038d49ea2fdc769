//! 请求参数解析失败时的统一响应

use actix_web::{
    HttpRequest,
    error::{Error, JsonPayloadError, QueryPayloadError},
};
use tracing::debug;

use crate::errors::GraderError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload rejected on {}: {}", req.path(), err);
    GraderError::bad_request(format!("Invalid JSON payload: {err}")).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string rejected on {}: {}", req.path(), err);
    GraderError::bad_request(format!("Invalid query parameters: {err}")).into()
}
