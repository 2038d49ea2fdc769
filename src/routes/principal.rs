use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::services::{AssignmentService, TeacherService, UserService};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn list_assignments(req: HttpRequest) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_principal_assignments(&req).await
}

pub async fn grade_assignment(
    req: HttpRequest,
    payload: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .grade_assignment(payload.into_inner(), &req)
        .await
}

pub async fn list_teachers(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_teachers(&req).await
}

pub async fn create_user(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE.create_user(user_data.into_inner(), &req).await
}

// 配置路由
pub fn configure_principal_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/principal")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(UserRole::principal_roles()))
                    .route("/assignments", web::get().to(list_assignments))
                    .route("/assignments/grade", web::post().to(grade_assignment))
                    .route("/teachers", web::get().to(list_teachers))
                    .route("/users", web::post().to(create_user)),
            ),
    );
}
