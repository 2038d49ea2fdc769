pub mod assignments;
pub mod auth;
pub mod system;
pub mod teachers;
pub mod users;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use system::SystemService;
pub use teachers::TeacherService;
pub use users::UserService;
