use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, assignments::requests::UpsertAssignmentRequest};

pub async fn upsert_assignment(
    service: &AssignmentService,
    payload: UpsertAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let student_id = RequireJWT::require_principal(request)?.require_student()?;
    let storage = service.get_storage(request)?;

    let creating = payload.id.is_none();
    let assignment = storage.upsert_assignment(student_id, payload).await?;

    if creating {
        info!(
            "Draft assignment {} created by student {}",
            assignment.id, student_id
        );
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(assignment)))
}
