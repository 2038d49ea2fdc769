use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;

pub async fn list_student_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let student_id = RequireJWT::require_principal(request)?.require_student()?;
    let storage = service.get_storage(request)?;

    let assignments = storage.list_assignments_by_student(student_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignments)))
}

pub async fn list_teacher_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let teacher_id = RequireJWT::require_principal(request)?.require_teacher()?;
    let storage = service.get_storage(request)?;

    let assignments = storage.list_assignments_by_teacher(teacher_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignments)))
}

pub async fn list_principal_assignments(
    service: &AssignmentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    RequireJWT::require_principal(request)?.require_principal()?;
    let storage = service.get_storage(request)?;

    let assignments = storage.list_submitted_assignments().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(assignments)))
}
