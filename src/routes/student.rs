use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::{SubmitAssignmentRequest, UpsertAssignmentRequest};
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_student_assignments(&req).await
}

pub async fn upsert_assignment(
    req: HttpRequest,
    payload: web::Json<UpsertAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .upsert_assignment(payload.into_inner(), &req)
        .await
}

pub async fn submit_assignment(
    req: HttpRequest,
    payload: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .submit_assignment(payload.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/student")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
                    .route("/assignments", web::get().to(list_assignments))
                    .route("/assignments", web::post().to(upsert_assignment))
                    .route("/assignments/submit", web::post().to(submit_assignment)),
            ),
    );
}
