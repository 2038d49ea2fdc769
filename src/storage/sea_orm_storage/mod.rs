//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod teachers;
mod users;

use crate::config::AppConfig;
use crate::errors::{GraderError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(storage)
    }

    /// 使用已有连接创建存储实例并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| GraderError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| GraderError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .foreign_keys(true)
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| GraderError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| GraderError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(GraderError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::{Assignment, DraftGrading, Grade},
        requests::UpsertAssignmentRequest,
    },
    auth::AuthPrincipal,
    teachers::entities::Teacher,
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn resolve_principal(&self, user_id: i64) -> Result<Option<AuthPrincipal>> {
        self.resolve_principal_impl(user_id).await
    }

    // 教师模块
    async fn list_teachers(&self) -> Result<Vec<Teacher>> {
        self.list_teachers_impl().await
    }

    async fn get_teacher_by_id(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        self.get_teacher_by_id_impl(teacher_id).await
    }

    // 作业模块
    async fn upsert_assignment(
        &self,
        student_id: i64,
        req: UpsertAssignmentRequest,
    ) -> Result<Assignment> {
        self.upsert_assignment_impl(student_id, req).await
    }

    async fn submit_assignment(
        &self,
        assignment_id: i64,
        teacher_id: i64,
        principal: &AuthPrincipal,
    ) -> Result<Assignment> {
        self.submit_assignment_impl(assignment_id, teacher_id, principal)
            .await
    }

    async fn grade_assignment(
        &self,
        assignment_id: i64,
        grade: Option<Grade>,
        principal: &AuthPrincipal,
        policy: DraftGrading,
    ) -> Result<Assignment> {
        self.grade_assignment_impl(assignment_id, grade, principal, policy)
            .await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_student(&self, student_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_student_impl(student_id).await
    }

    async fn list_assignments_by_teacher(&self, teacher_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_teacher_impl(teacher_id).await
    }

    async fn list_submitted_assignments(&self) -> Result<Vec<Assignment>> {
        self.list_submitted_assignments_impl().await
    }

    async fn assignment_exists(&self, assignment_id: i64) -> Result<bool> {
        self.assignment_exists_impl(assignment_id).await
    }

    async fn is_draft_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.is_draft_assignment_impl(assignment_id).await
    }

    async fn can_grade(&self, assignment_id: i64, teacher_id: i64) -> Result<bool> {
        self.can_grade_impl(assignment_id, teacher_id).await
    }
}
