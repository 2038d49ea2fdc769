use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::middlewares::RequireJWT;
use crate::models::{
    ApiResponse,
    assignments::{requests::GradeAssignmentRequest, responses::GradedAssignmentResponse},
};

// 教师与校长共用，权限差异由状态机按主体角色判定
pub async fn grade_assignment(
    service: &AssignmentService,
    payload: GradeAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let principal = RequireJWT::require_principal(request)?;
    let storage = service.get_storage(request)?;

    let assignment = storage
        .grade_assignment(
            payload.id,
            payload.grade,
            &principal,
            service.draft_grading(),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(GradedAssignmentResponse::from(
        assignment,
    ))))
}
