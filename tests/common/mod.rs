use rust_assignment_grader::models::auth::AuthPrincipal;
use rust_assignment_grader::models::users::entities::UserRole;
use rust_assignment_grader::models::users::requests::CreateUserRequest;
use rust_assignment_grader::storage::Storage;
use rust_assignment_grader::storage::sea_orm_storage::SeaOrmStorage;
use sea_orm::{Database, DatabaseConnection};

/// 内存 SQLite 上运行迁移后的存储，同时返回底层连接以便直接造数据
pub async fn setup_storage() -> (SeaOrmStorage, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    let storage = SeaOrmStorage::from_connection(db.clone()).await.unwrap();
    (storage, db)
}

/// 创建账号并解析为认证主体
///
/// 测试中密码字段不做哈希
#[allow(dead_code)]
pub async fn create_account(storage: &dyn Storage, username: &str, role: UserRole) -> AuthPrincipal {
    let user = storage
        .create_user(CreateUserRequest {
            username: username.to_owned(),
            email: format!("{username}@school.edu"),
            password: "unused".to_owned(),
            role,
        })
        .await
        .unwrap();

    storage.resolve_principal(user.id).await.unwrap().unwrap()
}
