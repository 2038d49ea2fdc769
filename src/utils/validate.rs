//! 账号字段校验

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::Result;
use crate::models::users::requests::CreateUserRequest;
use crate::utils::assertions::assert_valid;

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{5,16}$").expect("Invalid username regex"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub const ERR_USERNAME: &str =
    "Username must be 5 to 16 characters of letters, numbers, underscores or hyphens";
pub const ERR_EMAIL: &str = "Email format is invalid";

/// 用户名：5 到 16 个字母、数字、下划线或连字符
pub fn validate_username(username: &str) -> Result<()> {
    assert_valid(USERNAME_RE.is_match(username), Some(ERR_USERNAME))
}

pub fn validate_email(email: &str) -> Result<()> {
    assert_valid(EMAIL_RE.is_match(email), Some(ERR_EMAIL))
}

/// 密码策略：至少 8 个字符，同时包含大写字母、小写字母和数字
///
/// 返回所有未满足的规则，空表示通过。
pub fn password_violations(password: &str) -> Vec<&'static str> {
    let rules: [(bool, &'static str); 4] = [
        (
            password.chars().count() >= 8,
            "Password must be at least 8 characters long",
        ),
        (
            password.chars().any(|c| c.is_ascii_uppercase()),
            "Password must contain at least one uppercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_lowercase()),
            "Password must contain at least one lowercase letter",
        ),
        (
            password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one digit",
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(ok, message)| (!ok).then_some(message))
        .collect()
}

pub fn validate_password(password: &str) -> Result<()> {
    let violations = password_violations(password);
    let message = violations.join("; ");
    assert_valid(violations.is_empty(), Some(message.as_str()))
}

/// 校验新账号的全部字段
pub fn validate_new_user(req: &CreateUserRequest) -> Result<()> {
    validate_username(&req.username)?;
    validate_email(&req.email)?;
    validate_password(&req.password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::users::entities::UserRole;

    #[test]
    fn test_username_rules() {
        assert!(validate_username("student1").is_ok());
        assert!(validate_username("t-e_a").is_ok());
        assert!(validate_username("t-e_").is_err());
        assert!(validate_username("sixteen_chars_16").is_ok());
        assert!(validate_username("a_very_long_username").is_err());
        let err = validate_username("bad name").unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_USERNAME);
    }

    #[test]
    fn test_email_rules() {
        assert!(validate_email("teacher@school.edu").is_ok());
        assert!(validate_email("teacher@school").is_err());
        assert!(validate_email("no-at-sign.edu").is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(password_violations("SecurePass123").is_empty());
        assert_eq!(
            password_violations("abcd1234"),
            vec!["Password must contain at least one uppercase letter"]
        );
        assert_eq!(password_violations("Ab1").len(), 1);
        assert_eq!(password_violations("").len(), 4);

        let err = validate_password("ABCDEFGH").unwrap_err();
        assert!(err.message().contains("lowercase"));
        assert!(err.message().contains("digit"));
    }

    #[test]
    fn test_validate_new_user() {
        let mut req = CreateUserRequest {
            username: "student1".into(),
            email: "student1@school.edu".into(),
            password: "SecurePass123".into(),
            role: UserRole::Student,
        };
        assert!(validate_new_user(&req).is_ok());

        req.email = "broken".into();
        assert_eq!(validate_new_user(&req).unwrap_err().message(), ERR_EMAIL);
    }
}
