//! 作业存储操作
//!
//! 修改类操作都在单个事务中完成：读取行、调用状态机迁移、写回、提交。
//! 任一步骤返回错误时事务随之丢弃并回滚。

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Model};
use crate::entity::teachers::Entity as Teachers;
use crate::errors::{GraderError, Result};
use crate::models::{
    assignments::{
        entities::{Assignment, AssignmentState, DraftGrading, Grade},
        lifecycle,
        requests::UpsertAssignmentRequest,
    },
    auth::AuthPrincipal,
};
use crate::utils::assertions::assert_found;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseTransaction, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

fn not_found_message(assignment_id: i64) -> String {
    format!("No assignment with ID {assignment_id} was found")
}

/// 教师/校长可见状态的字符串值
fn grader_visible_states() -> Vec<&'static str> {
    AssignmentState::visible_to_graders()
        .iter()
        .map(AssignmentState::as_str)
        .collect()
}

impl SeaOrmStorage {
    async fn begin_txn(&self) -> Result<DatabaseTransaction> {
        self.db
            .begin()
            .await
            .map_err(|e| GraderError::database_operation(format!("开启事务失败: {e}")))
    }

    async fn commit_txn(txn: DatabaseTransaction) -> Result<()> {
        txn.commit()
            .await
            .map_err(|e| GraderError::database_operation(format!("提交事务失败: {e}")))
    }

    /// 在给定连接（通常是事务）上按 ID 读取作业，不存在时返回 NOT_FOUND
    async fn find_assignment_or_404<C: ConnectionTrait>(
        conn: &C,
        assignment_id: i64,
    ) -> Result<Assignment> {
        let model = Assignments::find_by_id(assignment_id)
            .one(conn)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询作业失败: {e}")))?;

        let message = not_found_message(assignment_id);
        assert_found(model, Some(message.as_str()))?.into_assignment()
    }

    /// 写回状态机可能修改的字段，并刷新 updated_at
    async fn save_assignment<C: ConnectionTrait>(
        conn: &C,
        assignment: &Assignment,
    ) -> Result<Assignment> {
        let model = ActiveModel {
            id: Set(assignment.id),
            teacher_id: Set(assignment.teacher_id),
            content: Set(assignment.content.clone()),
            grade: Set(assignment.grade.map(|g| g.to_string())),
            state: Set(assignment.state.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(conn)
            .await
            .map_err(|e| GraderError::database_operation(format!("更新作业失败: {e}")))?;

        result.into_assignment()
    }

    /// 新建草稿或编辑已有草稿
    pub async fn upsert_assignment_impl(
        &self,
        student_id: i64,
        req: UpsertAssignmentRequest,
    ) -> Result<Assignment> {
        let txn = self.begin_txn().await?;

        let result = match req.id {
            Some(assignment_id) => {
                let assignment = Self::find_assignment_or_404(&txn, assignment_id).await?;
                let assignment = lifecycle::edit_draft(assignment, student_id, req.content)?;
                Self::save_assignment(&txn, &assignment).await?
            }
            None => {
                let now = chrono::Utc::now().timestamp();
                let model = ActiveModel {
                    student_id: Set(student_id),
                    teacher_id: Set(None),
                    content: Set(req.content),
                    grade: Set(None),
                    state: Set(AssignmentState::Draft.to_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };

                model
                    .insert(&txn)
                    .await
                    .map_err(|e| GraderError::database_operation(format!("创建作业失败: {e}")))?
                    .into_assignment()?
            }
        };

        Self::commit_txn(txn).await?;
        Ok(result)
    }

    /// 提交作业
    pub async fn submit_assignment_impl(
        &self,
        assignment_id: i64,
        teacher_id: i64,
        principal: &AuthPrincipal,
    ) -> Result<Assignment> {
        let txn = self.begin_txn().await?;

        let assignment = Self::find_assignment_or_404(&txn, assignment_id).await?;
        let assignment = lifecycle::submit(assignment, teacher_id, principal)?;

        let teacher = Teachers::find_by_id(teacher_id)
            .one(&txn)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询教师失败: {e}")))?;
        let message = format!("No teacher with ID {teacher_id} was found");
        assert_found(teacher, Some(message.as_str()))?;

        let result = Self::save_assignment(&txn, &assignment).await?;
        Self::commit_txn(txn).await?;

        info!(
            "Assignment {} submitted by student {} to teacher {}",
            result.id, result.student_id, teacher_id
        );
        Ok(result)
    }

    /// 评分或重新评分
    pub async fn grade_assignment_impl(
        &self,
        assignment_id: i64,
        grade: Option<Grade>,
        principal: &AuthPrincipal,
        policy: DraftGrading,
    ) -> Result<Assignment> {
        let txn = self.begin_txn().await?;

        let assignment = Self::find_assignment_or_404(&txn, assignment_id).await?;
        let previous_state = assignment.state;
        let assignment = lifecycle::mark_grade(assignment, grade, principal, policy)?;

        let result = Self::save_assignment(&txn, &assignment).await?;
        Self::commit_txn(txn).await?;

        info!(
            "Assignment {} graded {:?} by user {} ({} -> {})",
            result.id, result.grade, principal.user_id, previous_state, result.state
        );
        Ok(result)
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询作业失败: {e}")))?;

        result.map(Model::into_assignment).transpose()
    }

    /// 学生的全部作业，任意状态
    pub async fn list_assignments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询学生作业失败: {e}")))?;

        results.into_iter().map(Model::into_assignment).collect()
    }

    /// 提交给教师的作业，草稿永远不可见
    pub async fn list_assignments_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .filter(Column::State.is_in(grader_visible_states()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询教师作业失败: {e}")))?;

        results.into_iter().map(Model::into_assignment).collect()
    }

    /// 所有已经交到教师手中的作业（校长视角）
    pub async fn list_submitted_assignments_impl(&self) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::TeacherId.is_not_null())
            .filter(Column::State.is_in(grader_visible_states()))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询作业列表失败: {e}")))?;

        results.into_iter().map(Model::into_assignment).collect()
    }

    /// 作业是否存在
    pub async fn assignment_exists_impl(&self, assignment_id: i64) -> Result<bool> {
        let count = Assignments::find_by_id(assignment_id)
            .count(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(count > 0)
    }

    /// 作业是否为草稿
    pub async fn is_draft_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let assignment = Self::find_assignment_or_404(&self.db, assignment_id).await?;
        Ok(assignment.is_draft())
    }

    /// 教师是否可以批改该作业：作业与教师都存在、非草稿、且提交给了该教师
    pub async fn can_grade_impl(&self, assignment_id: i64, teacher_id: i64) -> Result<bool> {
        let Some(assignment) = self.get_assignment_by_id_impl(assignment_id).await? else {
            return Ok(false);
        };

        if self.get_teacher_by_id_impl(teacher_id).await?.is_none() {
            return Ok(false);
        }

        Ok(lifecycle::can_grade(&assignment, teacher_id))
    }
}
