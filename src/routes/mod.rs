pub mod auth;

pub mod principal;

pub mod student;

pub mod system;

pub mod teacher;

pub use auth::configure_auth_routes;
pub use principal::configure_principal_routes;
pub use student::configure_student_routes;
pub use system::configure_system_routes;
pub use teacher::configure_teacher_routes;

use actix_web::web;

/// 挂载全部路由
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_system_routes)
        .configure(configure_auth_routes)
        .configure(configure_student_routes)
        .configure(configure_teacher_routes)
        .configure(configure_principal_routes);
}
