//! 作业状态机
//!
//! DRAFT --提交--> SUBMITTED --评分--> GRADED --重新评分--> GRADED
//!
//! 这里只有纯函数：接收作业实体，校验守卫条件，返回迁移后的实体。
//! 读取、写回以及事务都由存储层负责。

use super::entities::{Assignment, AssignmentState, DraftGrading, Grade};
use crate::errors::Result;
use crate::models::auth::{AuthPrincipal, PrincipalRole};
use crate::utils::assertions::{assert_true, assert_valid, base_assert};

pub const ERR_OTHER_STUDENT: &str = "This assignment belongs to another student";
pub const ERR_EDIT_NON_DRAFT: &str = "Only assignments in draft state can be edited";
pub const ERR_EMPTY_CONTENT: &str = "Assignment with empty content cannot be submitted";
pub const ERR_RESUBMIT: &str = "Only a draft assignment can be submitted";
pub const ERR_EMPTY_GRADE: &str = "Assignment with empty grade cannot be graded";
pub const ERR_GRADE_DRAFT: &str = "Cannot grade a draft assignment";
pub const ERR_OTHER_TEACHER: &str = "This assignment is not submitted to you";

/// 编辑草稿内容，状态保持 DRAFT
pub fn edit_draft(
    mut assignment: Assignment,
    student_id: i64,
    content: Option<String>,
) -> Result<Assignment> {
    assert_valid(assignment.is_owned_by(student_id), Some(ERR_OTHER_STUDENT))?;
    assert_valid(assignment.is_draft(), Some(ERR_EDIT_NON_DRAFT))?;

    assignment.content = content;
    Ok(assignment)
}

/// 提交作业：DRAFT -> SUBMITTED，同时确定批改教师
pub fn submit(
    mut assignment: Assignment,
    teacher_id: i64,
    principal: &AuthPrincipal,
) -> Result<Assignment> {
    let student_id = principal.require_student()?;
    assert_valid(assignment.is_owned_by(student_id), Some(ERR_OTHER_STUDENT))?;
    assert_valid(assignment.content.is_some(), Some(ERR_EMPTY_CONTENT))?;
    assert_valid(
        assignment
            .state
            .can_transition_to(AssignmentState::Submitted),
        Some(ERR_RESUBMIT),
    )?;

    assignment.teacher_id = Some(teacher_id);
    assignment.state = AssignmentState::Submitted;
    Ok(assignment)
}

/// 教师是否可以批改该作业：非草稿，且提交给了该教师
pub fn can_grade(assignment: &Assignment, teacher_id: i64) -> bool {
    match assignment.state {
        AssignmentState::Draft => false,
        AssignmentState::Submitted | AssignmentState::Graded => {
            assignment.teacher_id == Some(teacher_id)
        }
    }
}

/// 评分或重新评分：SUBMITTED/GRADED -> GRADED
///
/// 教师只能批改提交给自己的作业；校长可以批改任意作业；
/// 草稿能否被校长直接评分由 `policy` 决定。
pub fn mark_grade(
    mut assignment: Assignment,
    grade: Option<Grade>,
    principal: &AuthPrincipal,
    policy: DraftGrading,
) -> Result<Assignment> {
    let Some(grade) = grade else {
        return base_assert(400, ERR_EMPTY_GRADE);
    };

    match principal.role {
        PrincipalRole::Teacher(teacher_id) => {
            assert_valid(!assignment.is_draft(), Some(ERR_GRADE_DRAFT))?;
            assert_valid(can_grade(&assignment, teacher_id), Some(ERR_OTHER_TEACHER))?;
        }
        PrincipalRole::Principal(_) => {}
        PrincipalRole::Student(_) => {
            assert_true(false, Some("Students cannot grade assignments"))?;
        }
    }

    if !assignment.state.can_transition_to(AssignmentState::Graded) {
        // 只有草稿会走到这里
        assert_valid(
            assignment.is_draft() && policy == DraftGrading::Allow,
            Some(ERR_GRADE_DRAFT),
        )?;
    }

    assignment.grade = Some(grade);
    assignment.state = AssignmentState::Graded;
    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(student_id: i64, content: Option<&str>) -> Assignment {
        let now = chrono::Utc::now();
        Assignment {
            id: 1,
            student_id,
            teacher_id: None,
            content: content.map(str::to_string),
            grade: None,
            state: AssignmentState::Draft,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_full_lifecycle() {
        let student = AuthPrincipal::student(10, 1);
        let principal = AuthPrincipal::principal(30, 1);

        let assignment = draft(1, None);
        let assignment = edit_draft(assignment, 1, Some("hello".into())).unwrap();
        assert_eq!(assignment.state, AssignmentState::Draft);
        assert_eq!(assignment.content.as_deref(), Some("hello"));

        let assignment = submit(assignment, 5, &student).unwrap();
        assert_eq!(assignment.state, AssignmentState::Submitted);
        assert_eq!(assignment.teacher_id, Some(5));

        let assignment =
            mark_grade(assignment, Some(Grade::A), &principal, DraftGrading::Reject).unwrap();
        assert_eq!(assignment.state, AssignmentState::Graded);
        assert_eq!(assignment.grade, Some(Grade::A));

        let assignment =
            mark_grade(assignment, Some(Grade::B), &principal, DraftGrading::Reject).unwrap();
        assert_eq!(assignment.state, AssignmentState::Graded);
        assert_eq!(assignment.grade, Some(Grade::B));
        assert_eq!(assignment.teacher_id, Some(5));
    }

    #[test]
    fn test_submit_empty_content() {
        let err = submit(draft(1, None), 5, &AuthPrincipal::student(10, 1)).unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_EMPTY_CONTENT);
    }

    #[test]
    fn test_submit_other_student() {
        let err = submit(draft(1, Some("x")), 5, &AuthPrincipal::student(20, 2)).unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_OTHER_STUDENT);
    }

    #[test]
    fn test_resubmit_keeps_teacher() {
        let student = AuthPrincipal::student(10, 1);
        let submitted = submit(draft(1, Some("x")), 5, &student).unwrap();
        let err = submit(submitted, 6, &student).unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_RESUBMIT);
    }

    #[test]
    fn test_edit_non_draft() {
        let submitted = submit(draft(1, Some("x")), 5, &AuthPrincipal::student(10, 1)).unwrap();
        let err = edit_draft(submitted, 1, Some("y".into())).unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_EDIT_NON_DRAFT);
    }

    #[test]
    fn test_grade_empty() {
        let submitted = submit(draft(1, Some("x")), 5, &AuthPrincipal::student(10, 1)).unwrap();
        let err = mark_grade(
            submitted,
            None,
            &AuthPrincipal::principal(30, 1),
            DraftGrading::Reject,
        )
        .unwrap_err();
        assert_eq!(err.status_code_u16(), 400);
        assert_eq!(err.message(), ERR_EMPTY_GRADE);
    }

    #[test]
    fn test_grade_draft_policy() {
        let principal = AuthPrincipal::principal(30, 1);
        let err = mark_grade(
            draft(1, Some("x")),
            Some(Grade::C),
            &principal,
            DraftGrading::Reject,
        )
        .unwrap_err();
        assert_eq!(err.message(), ERR_GRADE_DRAFT);

        let graded = mark_grade(
            draft(1, Some("x")),
            Some(Grade::C),
            &principal,
            DraftGrading::Allow,
        )
        .unwrap();
        assert_eq!(graded.state, AssignmentState::Graded);
    }

    #[test]
    fn test_teacher_grading_rules() {
        let submitted = submit(draft(1, Some("x")), 5, &AuthPrincipal::student(10, 1)).unwrap();
        assert!(can_grade(&submitted, 5));
        assert!(!can_grade(&submitted, 6));
        assert!(!can_grade(&draft(1, Some("x")), 5));

        let err = mark_grade(
            submitted.clone(),
            Some(Grade::A),
            &AuthPrincipal::teacher(40, 6),
            DraftGrading::Reject,
        )
        .unwrap_err();
        assert_eq!(err.message(), ERR_OTHER_TEACHER);

        // 教师永远不能直接批改草稿
        let err = mark_grade(
            draft(1, Some("x")),
            Some(Grade::A),
            &AuthPrincipal::teacher(40, 5),
            DraftGrading::Allow,
        )
        .unwrap_err();
        assert_eq!(err.message(), ERR_GRADE_DRAFT);

        let graded = mark_grade(
            submitted,
            Some(Grade::D),
            &AuthPrincipal::teacher(41, 5),
            DraftGrading::Reject,
        )
        .unwrap();
        assert_eq!(graded.grade, Some(Grade::D));
    }

    #[test]
    fn test_student_cannot_grade() {
        let submitted = submit(draft(1, Some("x")), 5, &AuthPrincipal::student(10, 1)).unwrap();
        let err = mark_grade(
            submitted,
            Some(Grade::A),
            &AuthPrincipal::student(10, 1),
            DraftGrading::Reject,
        )
        .unwrap_err();
        assert_eq!(err.status_code_u16(), 403);
    }
}
