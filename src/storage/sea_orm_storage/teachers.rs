//! 教师存储操作

use super::SeaOrmStorage;
use crate::entity::teachers::{Column, Entity as Teachers};
use crate::errors::{GraderError, Result};
use crate::models::teachers::entities::Teacher;
use sea_orm::{EntityTrait, QueryOrder};

impl SeaOrmStorage {
    /// 列出所有教师
    pub async fn list_teachers_impl(&self) -> Result<Vec<Teacher>> {
        let results = Teachers::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询教师列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_teacher()).collect())
    }

    /// 通过 ID 获取教师
    pub async fn get_teacher_by_id_impl(&self, teacher_id: i64) -> Result<Option<Teacher>> {
        let result = Teachers::find_by_id(teacher_id)
            .one(&self.db)
            .await
            .map_err(|e| GraderError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.map(|m| m.into_teacher()))
    }
}
