pub mod grade;
pub mod list;
pub mod submit;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{GraderError, Result};
use crate::models::assignments::{
    entities::DraftGrading,
    requests::{GradeAssignmentRequest, SubmitAssignmentRequest, UpsertAssignmentRequest},
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        if let Some(storage) = &self.storage {
            return Ok(storage.clone());
        }
        request
            .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| GraderError::internal("Storage not found in app data"))
    }

    pub(crate) fn draft_grading(&self) -> DraftGrading {
        DraftGrading::from_flag(AppConfig::get().grading.allow_draft_grading)
    }

    // 学生：列出自己的作业
    pub async fn list_student_assignments(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_student_assignments(self, request).await
    }

    // 学生：新建或编辑草稿
    pub async fn upsert_assignment(
        &self,
        payload: UpsertAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_assignment(self, payload, request).await
    }

    // 学生：提交作业
    pub async fn submit_assignment(
        &self,
        payload: SubmitAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_assignment(self, payload, request).await
    }

    // 教师：列出提交给自己的作业
    pub async fn list_teacher_assignments(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_teacher_assignments(self, request).await
    }

    // 校长：列出所有已提交或已评分的作业
    pub async fn list_principal_assignments(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_principal_assignments(self, request).await
    }

    // 教师或校长：评分
    pub async fn grade_assignment(
        &self,
        payload: GradeAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_assignment(self, payload, request).await
    }
}
