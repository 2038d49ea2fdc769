use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TeacherService;
use crate::models::ApiResponse;

pub async fn list_teachers(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let teachers = storage.list_teachers().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(teachers)))
}
