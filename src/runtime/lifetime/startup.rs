use crate::errors::Result;
use crate::models::users::entities::UserRole;
use crate::models::users::requests::CreateUserRequest;
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_PRINCIPAL_USERNAME: &str = "principal";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化默认校长账号
///
/// 数据库中没有任何用户时创建，否则什么也不做。返回是否创建了账号。
pub async fn seed_principal(storage: &Arc<dyn Storage>, password: Option<String>) -> Result<bool> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!(
            "Database already has {} user(s), skipping principal seed",
            count
        );
        return Ok(false);
    }
    info!("No users found in database, creating default principal account...");

    // 获取密码：优先使用传入值，否则生成随机密码
    let password = password.unwrap_or_else(|| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  PRINCIPAL PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated principal password: {}", pwd);
        warn!("  Please save this password or set PRINCIPAL_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let user = storage
        .create_user(CreateUserRequest {
            username: DEFAULT_PRINCIPAL_USERNAME.to_string(),
            email: "principal@localhost".to_string(),
            password: hash_password(&password)?,
            role: UserRole::Principal,
        })
        .await?;

    info!(
        "Default principal account created successfully (ID: {}, username: {})",
        user.id, user.username
    );
    Ok(true)
}

/// 准备服务器启动的上下文
/// 包括加密库、存储与默认账号
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 其他依赖可能已经安装过，失败时沿用已有 provider
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    // 初始化默认校长账号（如果需要）
    if let Err(e) = seed_principal(&storage, std::env::var("PRINCIPAL_PASSWORD").ok()).await {
        warn!("Failed to seed principal account: {}", e);
    }

    Ok(StartupContext { storage })
}
