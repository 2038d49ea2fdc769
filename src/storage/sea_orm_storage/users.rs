//! 用户存储操作

use super::SeaOrmStorage;
use crate::entity::principals::{
    ActiveModel as PrincipalActiveModel, Column as PrincipalColumn, Entity as Principals,
};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::entity::teachers::{
    ActiveModel as TeacherActiveModel, Column as TeacherColumn, Entity as Teachers,
};
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{GraderError, Result};
use crate::models::{
    auth::AuthPrincipal,
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};
use crate::utils::assertions::assert_valid;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, Set,
    TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建用户，同时创建对应的角色记录
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| GraderError::database_operation(format!("开启事务失败: {e}")))?;

        let duplicated = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(req.username.as_str()))
                    .add(Column::Email.eq(req.email.as_str())),
            )
            .count(&txn)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询用户失败: {e}")))?;
        assert_valid(duplicated == 0, Some("Username or email already exists"))?;

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let user = model
            .insert(&txn)
            .await
            .map_err(|e| GraderError::database_operation(format!("创建用户失败: {e}")))?;

        let role_result = match req.role {
            UserRole::Student => StudentActiveModel {
                user_id: Set(user.id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map(|_| ()),
            UserRole::Teacher => TeacherActiveModel {
                user_id: Set(user.id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map(|_| ()),
            UserRole::Principal => PrincipalActiveModel {
                user_id: Set(user.id),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map(|_| ()),
        };
        role_result
            .map_err(|e| GraderError::database_operation(format!("创建角色记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| GraderError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(user.into_user())
    }

    /// 通过用户名获取用户
    pub async fn get_user_by_username_impl(&self, username: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 统计用户数量
    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("统计用户数量失败: {e}")))?;

        Ok(count)
    }

    /// 将用户解析为认证主体
    ///
    /// 用户不存在或缺少对应的角色记录时返回 None
    pub async fn resolve_principal_impl(&self, user_id: i64) -> Result<Option<AuthPrincipal>> {
        let Some(user) = Users::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询用户失败: {e}")))?
            .map(|m| m.into_user())
        else {
            return Ok(None);
        };

        let principal = match user.role {
            UserRole::Student => Students::find()
                .filter(StudentColumn::UserId.eq(user_id))
                .one(&self.db)
                .await
                .map(|m| m.map(|s| AuthPrincipal::student(user_id, s.id))),
            UserRole::Teacher => Teachers::find()
                .filter(TeacherColumn::UserId.eq(user_id))
                .one(&self.db)
                .await
                .map(|m| m.map(|t| AuthPrincipal::teacher(user_id, t.id))),
            UserRole::Principal => Principals::find()
                .filter(PrincipalColumn::UserId.eq(user_id))
                .one(&self.db)
                .await
                .map(|m| m.map(|p| AuthPrincipal::principal(user_id, p.id))),
        }
        .map_err(|e| GraderError::database_operation(format!("查询角色记录失败: {e}")))?;

        Ok(principal)
    }
}
