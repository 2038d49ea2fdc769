use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::utils::assertions::failure;

/// 已认证主体的角色，携带对应角色表中的 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrincipalRole {
    Student(i64),
    Teacher(i64),
    Principal(i64),
}

/// 已认证主体
///
/// 由 RequireJWT 中间件解析后放入请求扩展，每个请求恰好对应一个角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPrincipal {
    pub user_id: i64,
    pub role: PrincipalRole,
}

impl AuthPrincipal {
    pub fn student(user_id: i64, student_id: i64) -> Self {
        Self {
            user_id,
            role: PrincipalRole::Student(student_id),
        }
    }

    pub fn teacher(user_id: i64, teacher_id: i64) -> Self {
        Self {
            user_id,
            role: PrincipalRole::Teacher(teacher_id),
        }
    }

    pub fn principal(user_id: i64, principal_id: i64) -> Self {
        Self {
            user_id,
            role: PrincipalRole::Principal(principal_id),
        }
    }

    pub fn user_role(&self) -> UserRole {
        match self.role {
            PrincipalRole::Student(_) => UserRole::Student,
            PrincipalRole::Teacher(_) => UserRole::Teacher,
            PrincipalRole::Principal(_) => UserRole::Principal,
        }
    }

    pub fn student_id(&self) -> Option<i64> {
        match self.role {
            PrincipalRole::Student(id) => Some(id),
            _ => None,
        }
    }

    pub fn teacher_id(&self) -> Option<i64> {
        match self.role {
            PrincipalRole::Teacher(id) => Some(id),
            _ => None,
        }
    }

    pub fn principal_id(&self) -> Option<i64> {
        match self.role {
            PrincipalRole::Principal(id) => Some(id),
            _ => None,
        }
    }

    /// 要求当前主体为学生，否则 403
    pub fn require_student(&self) -> Result<i64> {
        self.student_id()
            .ok_or_else(|| failure(403, "Requester is not a student"))
    }

    /// 要求当前主体为教师，否则 403
    pub fn require_teacher(&self) -> Result<i64> {
        self.teacher_id()
            .ok_or_else(|| failure(403, "Requester is not a teacher"))
    }

    /// 要求当前主体为校长，否则 403
    pub fn require_principal(&self) -> Result<i64> {
        self.principal_id()
            .ok_or_else(|| failure(403, "Requester is not a principal"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_accessors() {
        let p = AuthPrincipal::teacher(3, 5);
        assert_eq!(p.teacher_id(), Some(5));
        assert_eq!(p.student_id(), None);
        assert_eq!(p.user_role(), UserRole::Teacher);
        assert_eq!(p.require_teacher().unwrap(), 5);
        assert_eq!(p.require_student().unwrap_err().status_code_u16(), 403);
    }
}
