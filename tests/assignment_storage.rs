mod common;

use crate::common::{create_account, setup_storage};
use rust_assignment_grader::entity::assignments::ActiveModel as ActiveAssignmentModel;
use rust_assignment_grader::models::assignments::entities::{AssignmentState, DraftGrading, Grade};
use rust_assignment_grader::models::assignments::requests::UpsertAssignmentRequest;
use rust_assignment_grader::models::users::entities::UserRole;
use rust_assignment_grader::storage::Storage;
use sea_orm::ActiveModelTrait;
use sea_orm::ActiveValue::Set;

fn new_draft(content: Option<&str>) -> UpsertAssignmentRequest {
    UpsertAssignmentRequest {
        id: None,
        content: content.map(str::to_owned),
    }
}

fn edit(id: i64, content: &str) -> UpsertAssignmentRequest {
    UpsertAssignmentRequest {
        id: Some(id),
        content: Some(content.to_owned()),
    }
}

#[tokio::test]
async fn test_draft_submit_grade_regrade() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let teacher = create_account(&storage, "teacher1", UserRole::Teacher).await;
    let principal = create_account(&storage, "principal", UserRole::Principal).await;
    let student_id = student.student_id().unwrap();
    let teacher_id = teacher.teacher_id().unwrap();

    let draft = storage
        .upsert_assignment(student_id, new_draft(None))
        .await
        .unwrap();
    assert_eq!(draft.state, AssignmentState::Draft);
    assert_eq!(draft.content, None);
    assert!(storage.is_draft_assignment(draft.id).await.unwrap());

    let draft = storage
        .upsert_assignment(student_id, edit(draft.id, "hello"))
        .await
        .unwrap();
    assert_eq!(draft.state, AssignmentState::Draft);
    assert_eq!(draft.content.as_deref(), Some("hello"));

    let submitted = storage
        .submit_assignment(draft.id, teacher_id, &student)
        .await
        .unwrap();
    assert_eq!(submitted.state, AssignmentState::Submitted);
    assert_eq!(submitted.teacher_id, Some(teacher_id));

    let graded = storage
        .grade_assignment(submitted.id, Some(Grade::A), &teacher, DraftGrading::Reject)
        .await
        .unwrap();
    assert_eq!(graded.state, AssignmentState::Graded);
    assert_eq!(graded.grade, Some(Grade::A));

    let regraded = storage
        .grade_assignment(graded.id, Some(Grade::B), &principal, DraftGrading::Reject)
        .await
        .unwrap();
    assert_eq!(regraded.state, AssignmentState::Graded);
    assert_eq!(regraded.grade, Some(Grade::B));

    let stored = storage
        .get_assignment_by_id(regraded.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.grade, Some(Grade::B));
    assert_eq!(stored.teacher_id, Some(teacher_id));
    assert_eq!(stored.student_id, student_id);
}

#[tokio::test]
async fn test_submit_empty_content_is_rejected() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let teacher = create_account(&storage, "teacher1", UserRole::Teacher).await;

    let draft = storage
        .upsert_assignment(student.student_id().unwrap(), new_draft(None))
        .await
        .unwrap();

    let err = storage
        .submit_assignment(draft.id, teacher.teacher_id().unwrap(), &student)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(
        err.message(),
        "Assignment with empty content cannot be submitted"
    );
    assert!(storage.is_draft_assignment(draft.id).await.unwrap());
}

#[tokio::test]
async fn test_other_student_cannot_touch_assignment() {
    let (storage, _db) = setup_storage().await;
    let owner = create_account(&storage, "student1", UserRole::Student).await;
    let intruder = create_account(&storage, "student2", UserRole::Student).await;
    let teacher = create_account(&storage, "teacher1", UserRole::Teacher).await;

    let draft = storage
        .upsert_assignment(owner.student_id().unwrap(), new_draft(Some("essay")))
        .await
        .unwrap();

    let err = storage
        .submit_assignment(draft.id, teacher.teacher_id().unwrap(), &intruder)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(err.message(), "This assignment belongs to another student");

    let err = storage
        .upsert_assignment(intruder.student_id().unwrap(), edit(draft.id, "mine now"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(err.message(), "This assignment belongs to another student");
}

#[tokio::test]
async fn test_missing_rows_are_not_found() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let principal = create_account(&storage, "principal", UserRole::Principal).await;

    assert!(!storage.assignment_exists(999).await.unwrap());
    assert!(storage.get_assignment_by_id(999).await.unwrap().is_none());

    let err = storage.is_draft_assignment(999).await.unwrap_err();
    assert_eq!(err.status_code_u16(), 404);
    assert_eq!(err.message(), "No assignment with ID 999 was found");

    let err = storage
        .upsert_assignment(student.student_id().unwrap(), edit(999, "x"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 404);

    let err = storage
        .submit_assignment(999, 1, &student)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 404);

    let err = storage
        .grade_assignment(999, Some(Grade::A), &principal, DraftGrading::Reject)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 404);
}

#[tokio::test]
async fn test_submit_to_unknown_teacher_rolls_back() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;

    let draft = storage
        .upsert_assignment(student.student_id().unwrap(), new_draft(Some("essay")))
        .await
        .unwrap();

    let err = storage
        .submit_assignment(draft.id, 42, &student)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 404);
    assert_eq!(err.message(), "No teacher with ID 42 was found");

    let stored = storage.get_assignment_by_id(draft.id).await.unwrap().unwrap();
    assert_eq!(stored.state, AssignmentState::Draft);
    assert_eq!(stored.teacher_id, None);
}

#[tokio::test]
async fn test_edit_and_resubmit_after_submission_rejected() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let teacher1 = create_account(&storage, "teacher1", UserRole::Teacher).await;
    let teacher2 = create_account(&storage, "teacher2", UserRole::Teacher).await;
    let student_id = student.student_id().unwrap();

    let draft = storage
        .upsert_assignment(student_id, new_draft(Some("essay")))
        .await
        .unwrap();
    storage
        .submit_assignment(draft.id, teacher1.teacher_id().unwrap(), &student)
        .await
        .unwrap();

    let err = storage
        .upsert_assignment(student_id, edit(draft.id, "changed"))
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Only assignments in draft state can be edited");

    let err = storage
        .submit_assignment(draft.id, teacher2.teacher_id().unwrap(), &student)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);

    let stored = storage.get_assignment_by_id(draft.id).await.unwrap().unwrap();
    assert_eq!(stored.teacher_id, teacher1.teacher_id());
    assert_eq!(stored.content.as_deref(), Some("essay"));
}

#[tokio::test]
async fn test_grading_rules() {
    let (storage, _db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let teacher1 = create_account(&storage, "teacher1", UserRole::Teacher).await;
    let teacher2 = create_account(&storage, "teacher2", UserRole::Teacher).await;
    let principal = create_account(&storage, "principal", UserRole::Principal).await;
    let student_id = student.student_id().unwrap();
    let teacher1_id = teacher1.teacher_id().unwrap();
    let teacher2_id = teacher2.teacher_id().unwrap();

    let draft = storage
        .upsert_assignment(student_id, new_draft(Some("essay")))
        .await
        .unwrap();

    // 草稿：默认拒绝，开启后校长可以直接评分
    assert!(!storage.can_grade(draft.id, teacher1_id).await.unwrap());
    let err = storage
        .grade_assignment(draft.id, Some(Grade::C), &principal, DraftGrading::Reject)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(err.message(), "Cannot grade a draft assignment");
    assert!(storage.is_draft_assignment(draft.id).await.unwrap());

    let other = storage
        .upsert_assignment(student_id, new_draft(Some("other")))
        .await
        .unwrap();
    let graded = storage
        .grade_assignment(other.id, Some(Grade::C), &principal, DraftGrading::Allow)
        .await
        .unwrap();
    assert_eq!(graded.state, AssignmentState::Graded);

    storage
        .submit_assignment(draft.id, teacher1_id, &student)
        .await
        .unwrap();
    assert!(storage.can_grade(draft.id, teacher1_id).await.unwrap());
    assert!(!storage.can_grade(draft.id, teacher2_id).await.unwrap());
    assert!(!storage.can_grade(draft.id, 999).await.unwrap());
    assert!(!storage.can_grade(999, teacher1_id).await.unwrap());

    let err = storage
        .grade_assignment(draft.id, Some(Grade::A), &teacher2, DraftGrading::Reject)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(err.message(), "This assignment is not submitted to you");

    let err = storage
        .grade_assignment(draft.id, None, &teacher1, DraftGrading::Reject)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Assignment with empty grade cannot be graded");

    let err = storage
        .grade_assignment(draft.id, Some(Grade::A), &student, DraftGrading::Reject)
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 403);

    let stored = storage.get_assignment_by_id(draft.id).await.unwrap().unwrap();
    assert_eq!(stored.state, AssignmentState::Submitted);
    assert_eq!(stored.grade, None);
}

#[tokio::test]
async fn test_role_scoped_listings() {
    let (storage, db) = setup_storage().await;
    let student1 = create_account(&storage, "student1", UserRole::Student).await;
    let student2 = create_account(&storage, "student2", UserRole::Student).await;
    let teacher1 = create_account(&storage, "teacher1", UserRole::Teacher).await;
    let teacher2 = create_account(&storage, "teacher2", UserRole::Teacher).await;
    let student1_id = student1.student_id().unwrap();
    let teacher1_id = teacher1.teacher_id().unwrap();

    let submitted = storage
        .upsert_assignment(student1_id, new_draft(Some("a")))
        .await
        .unwrap();
    storage
        .submit_assignment(submitted.id, teacher1_id, &student1)
        .await
        .unwrap();
    storage
        .upsert_assignment(student1_id, new_draft(None))
        .await
        .unwrap();
    let other = storage
        .upsert_assignment(student2.student_id().unwrap(), new_draft(Some("b")))
        .await
        .unwrap();
    storage
        .submit_assignment(other.id, teacher2.teacher_id().unwrap(), &student2)
        .await
        .unwrap();

    // 绕过状态机写入一条已经带有教师的草稿
    let now = chrono::Utc::now().timestamp();
    ActiveAssignmentModel {
        student_id: Set(student1_id),
        teacher_id: Set(Some(teacher1_id)),
        content: Set(Some("sneaky".to_owned())),
        grade: Set(None),
        state: Set("DRAFT".to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let mine = storage.list_assignments_by_student(student1_id).await.unwrap();
    assert_eq!(mine.len(), 3);
    assert!(mine.windows(2).all(|w| w[0].id < w[1].id));

    let for_teacher = storage.list_assignments_by_teacher(teacher1_id).await.unwrap();
    assert_eq!(for_teacher.len(), 1);
    assert_eq!(for_teacher[0].id, submitted.id);
    assert!(for_teacher.iter().all(|a| a.state != AssignmentState::Draft));

    let all = storage.list_submitted_assignments().await.unwrap();
    assert_eq!(
        all.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![submitted.id, other.id]
    );

    let teachers = storage.list_teachers().await.unwrap();
    assert_eq!(teachers.len(), 2);
    assert_eq!(teachers[0].id, teacher1_id);
}

#[tokio::test]
async fn test_accounts() {
    let (storage, _db) = setup_storage().await;
    assert_eq!(storage.count_users().await.unwrap(), 0);

    let teacher = create_account(&storage, "teacher1", UserRole::Teacher).await;
    assert_eq!(teacher.user_role(), UserRole::Teacher);
    assert!(
        storage
            .get_teacher_by_id(teacher.teacher_id().unwrap())
            .await
            .unwrap()
            .is_some()
    );

    let user = storage
        .get_user_by_username("teacher1")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user.id, teacher.user_id);
    assert!(storage.get_user_by_username("nobody").await.unwrap().is_none());
    assert!(storage.resolve_principal(999).await.unwrap().is_none());

    let err = storage
        .create_user(rust_assignment_grader::models::users::requests::CreateUserRequest {
            username: "teacher1".to_owned(),
            email: "another@school.edu".to_owned(),
            password: "unused".to_owned(),
            role: UserRole::Student,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 400);
    assert_eq!(storage.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_state_is_not_read_as_draft() {
    let (storage, db) = setup_storage().await;
    let student = create_account(&storage, "student1", UserRole::Student).await;
    let student_id = student.student_id().unwrap();

    let now = chrono::Utc::now().timestamp();
    let row = ActiveAssignmentModel {
        student_id: Set(student_id),
        teacher_id: Set(None),
        content: Set(Some("hello".to_owned())),
        grade: Set(None),
        state: Set("ARCHIVED".to_owned()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let err = storage.get_assignment_by_id(row.id).await.unwrap_err();
    assert_eq!(err.status_code_u16(), 500);

    let err = storage
        .upsert_assignment(student_id, edit(row.id, "reopened"))
        .await
        .unwrap_err();
    assert_eq!(err.status_code_u16(), 500);
    assert!(storage.list_assignments_by_student(student_id).await.is_err());
}
