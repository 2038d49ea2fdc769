use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, assignments::requests::SubmitAssignmentRequest};

pub async fn submit_assignment(
    service: &AssignmentService,
    payload: SubmitAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = RequireJWT::require_principal(request)?;
    let storage = service.get_storage(request)?;

    let assignment = storage
        .submit_assignment(payload.id, payload.teacher_id, &principal)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(assignment)))
}
