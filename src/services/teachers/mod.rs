pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{GraderError, Result};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
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

    // 列出所有教师
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_teachers(self, request).await
    }
}
