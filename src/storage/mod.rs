use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::{Assignment, DraftGrading, Grade},
        requests::UpsertAssignmentRequest,
    },
    auth::AuthPrincipal,
    teachers::entities::Teacher,
    users::{entities::User, requests::CreateUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储接口
///
/// 服务层只通过这个 trait 访问数据库；每个修改作业的方法都在一个事务内完成
/// 读取、状态迁移与写回，要么整体提交，要么整体回滚。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户及其角色记录（password 字段须已是哈希值）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 将用户解析为带角色 ID 的认证主体
    async fn resolve_principal(&self, user_id: i64) -> Result<Option<AuthPrincipal>>;

    /// 教师方法
    // 列出所有教师
    async fn list_teachers(&self) -> Result<Vec<Teacher>>;
    // 通过ID获取教师
    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>>;

    /// 作业状态迁移
    // 新建草稿或编辑已有草稿
    async fn upsert_assignment(
        &self,
        student_id: i64,
        req: UpsertAssignmentRequest,
    ) -> Result<Assignment>;
    // 提交作业给指定教师
    async fn submit_assignment(
        &self,
        assignment_id: i64,
        teacher_id: i64,
        principal: &AuthPrincipal,
    ) -> Result<Assignment>;
    // 评分或重新评分
    async fn grade_assignment(
        &self,
        assignment_id: i64,
        grade: Option<Grade>,
        principal: &AuthPrincipal,
        policy: DraftGrading,
    ) -> Result<Assignment>;

    /// 作业查询
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 学生的全部作业
    async fn list_assignments_by_student(&self, student_id: i64) -> Result<Vec<Assignment>>;
    // 提交给教师的作业（不含草稿）
    async fn list_assignments_by_teacher(&self, teacher_id: i64) -> Result<Vec<Assignment>>;
    // 所有已提交或已评分的作业
    async fn list_submitted_assignments(&self) -> Result<Vec<Assignment>>;
    // 作业是否存在
    async fn assignment_exists(&self, assignment_id: i64) -> Result<bool>;
    // 作业是否为草稿，作业不存在时返回 NOT_FOUND
    async fn is_draft_assignment(&self, assignment_id: i64) -> Result<bool>;
    // 教师是否可以批改该作业
    async fn can_grade(&self, assignment_id: i64, teacher_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
