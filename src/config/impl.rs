use config::builder::{ConfigBuilder, DefaultState};
use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 仅用于本地开发的签名密钥，生产环境拒绝使用
pub const DEVELOPMENT_JWT_SECRET: &str = "change-me-in-production";

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::with_defaults(Config::builder())?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("GRADER")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("cors.allowed_origins")
                    .with_list_parse_key("cors.allowed_methods")
                    .with_list_parse_key("cors.allowed_headers")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.check_jwt_secret()?;
        Ok(app_config)
    }

    /// 生产环境必须显式配置 JWT 密钥
    fn check_jwt_secret(&self) -> Result<(), ConfigError> {
        if self.is_production()
            && (self.jwt.secret.is_empty() || self.jwt.secret == DEVELOPMENT_JWT_SECRET)
        {
            return Err(ConfigError::Message(
                "jwt.secret must be set (JWT_SECRET) in production".to_string(),
            ));
        }
        Ok(())
    }

    /// 内置默认值，没有任何配置文件时也能启动
    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("app.system_name", "Assignment Grader")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 7755)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 262_144)?
            .set_default("jwt.secret", DEVELOPMENT_JWT_SECRET)?
            .set_default("jwt.access_token_expiry", 60 * 24)?
            .set_default("database.url", "grader.db")?
            .set_default("database.pool_size", 8)?
            .set_default("database.timeout", 30)?
            .set_default("cors.allowed_origins", vec!["*"])?
            .set_default("cors.allowed_methods", vec!["GET", "POST"])?
            .set_default(
                "cors.allowed_headers",
                vec!["Authorization", "Content-Type"],
            )?
            .set_default("cors.max_age", 3600)?
            .set_default("argon2.memory_cost", 19_456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("grading.allow_draft_grading", false)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load().expect("defaults should load");
        assert!(config.server.workers >= 1);
        assert!(config.jwt.access_token_expiry > 0);
        assert_eq!(config.database.pool_size, 8);
        assert!(config.argon2.time_cost >= 1);
    }

    #[test]
    fn test_production_rejects_builtin_jwt_secret() {
        let mut config = AppConfig::load().expect("defaults should load");
        config.app.environment = "production".into();
        config.jwt.secret = DEVELOPMENT_JWT_SECRET.into();
        assert!(config.check_jwt_secret().is_err());

        config.jwt.secret = String::new();
        assert!(config.check_jwt_secret().is_err());

        config.jwt.secret = "a-real-deployment-secret".into();
        assert!(config.check_jwt_secret().is_ok());

        config.app.environment = "development".into();
        config.jwt.secret = DEVELOPMENT_JWT_SECRET.into();
        assert!(config.check_jwt_secret().is_ok());
    }
}
