//! 断言工具
//!
//! 条件成立时什么也不做，不成立时返回携带状态码的 [`GraderError`]。
//! 所有断言都经由 [`base_assert`] 生成错误。

use crate::errors::{GraderError, Result};

/// 根据状态码构造错误，未知状态码归为内部错误
pub fn failure(status_code: u16, message: impl Into<String>) -> GraderError {
    match status_code {
        400 => GraderError::bad_request(message),
        401 => GraderError::unauthorized(message),
        403 => GraderError::forbidden(message),
        404 => GraderError::not_found(message),
        _ => GraderError::internal(message),
    }
}

/// 无条件失败
pub fn base_assert<T>(status_code: u16, message: impl Into<String>) -> Result<T> {
    Err(failure(status_code, message))
}

/// 401
pub fn assert_auth(cond: bool, message: Option<&str>) -> Result<()> {
    if cond {
        return Ok(());
    }
    base_assert(401, message.unwrap_or("UNAUTHORIZED"))
}

/// 403
pub fn assert_true(cond: bool, message: Option<&str>) -> Result<()> {
    if cond {
        return Ok(());
    }
    base_assert(403, message.unwrap_or("FORBIDDEN"))
}

/// 400
pub fn assert_valid(cond: bool, message: Option<&str>) -> Result<()> {
    if cond {
        return Ok(());
    }
    base_assert(400, message.unwrap_or("BAD_REQUEST"))
}

/// 404，成功时返回解包后的对象
pub fn assert_found<T>(obj: Option<T>, message: Option<&str>) -> Result<T> {
    match obj {
        Some(value) => Ok(value),
        None => base_assert(404, message.unwrap_or("NOT_FOUND")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_assert() {
        let err = base_assert::<()>(404, "NOT_FOUND").unwrap_err();
        assert_eq!(err.status_code_u16(), 404);
        assert_eq!(err.message(), "NOT_FOUND");

        let err = base_assert::<()>(418, "teapot").unwrap_err();
        assert_eq!(err.status_code_u16(), 500);
        assert_eq!(err.message(), "teapot");
    }

    #[test]
    fn test_assert_auth() {
        let err = assert_auth(false, None).unwrap_err();
        assert_eq!(err.status_code_u16(), 401);
        assert_eq!(err.message(), "UNAUTHORIZED");
        assert!(assert_auth(true, None).is_ok());
    }

    #[test]
    fn test_assert_true() {
        let err = assert_true(false, None).unwrap_err();
        assert_eq!(err.status_code_u16(), 403);
        assert_eq!(err.message(), "FORBIDDEN");
        assert!(assert_true(true, None).is_ok());
    }

    #[test]
    fn test_assert_valid() {
        let err = assert_valid(false, None).unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), "BAD_REQUEST");
        assert!(assert_valid(true, None).is_ok());

        let err = assert_valid(false, Some("empty content")).unwrap_err();
        assert_eq!(err.message(), "empty content");
    }

    #[test]
    fn test_assert_found() {
        let err = assert_found::<i32>(None, None).unwrap_err();
        assert_eq!(err.status_code_u16(), 404);
        assert_eq!(err.message(), "NOT_FOUND");
        assert_eq!(assert_found(Some(7), None).unwrap(), 7);
    }
}
