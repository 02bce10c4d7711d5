use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use rand::{Rng, distr::Alphanumeric};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

const GENERATED_SECRET_LEN: usize = 48;
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// 内置默认值，保证在没有配置文件时也能启动
fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    builder
        .set_default("app.system_name", "Attendance System")?
        .set_default("app.environment", "development")?
        .set_default("app.log_level", "info")?
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("server.unix_socket_path", "")?
        .set_default("server.workers", 0)?
        .set_default("server.max_workers", 8)?
        .set_default("server.timeouts.client_request", 5000)?
        .set_default("server.timeouts.client_disconnect", 1000)?
        .set_default("server.timeouts.keep_alive", 30)?
        .set_default("server.limits.max_payload_size", 1_048_576)?
        .set_default("jwt.secret", "")?
        .set_default("jwt.access_token_expiry", 60)?
        .set_default("argon2.memory_cost", 19456)?
        .set_default("argon2.time_cost", 2)?
        .set_default("argon2.parallelism", 1)?
        .set_default("cors.max_age", 3600)?
        .set_default("storage.backend", "memory")?
        .set_default("storage.seed_demo_users", true)?
        .set_default("storage.demo_password", "")?
        .set_default("reporting.top_absentees_limit", 5)?
        .set_default("reporting.recent_activities_limit", 5)?
        .set_default("rate_limit.login_max_requests", 5)?
        .set_default("rate_limit.login_window_secs", 60)
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = with_defaults(Config::builder())?
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
                Environment::with_prefix("ATTENDANCE")
                    .separator("__")
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
            .set_override_option("storage.backend", std::env::var("STORAGE_BACKEND").ok())?
            .set_override_option(
                "storage.demo_password",
                std::env::var("DEMO_PASSWORD").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.resolve_jwt_secret()?;

        Ok(app_config)
    }

    /// 校验 JWT 密钥
    ///
    /// 开发环境未配置时生成仅在本进程有效的随机密钥，其他环境必须显式配置。
    fn resolve_jwt_secret(&mut self) -> Result<(), ConfigError> {
        if self.jwt.secret.trim().is_empty() {
            if !self.is_development() {
                return Err(ConfigError::Message(format!(
                    "jwt.secret is required in '{}' environment (set JWT_SECRET)",
                    self.app.environment
                )));
            }
            self.jwt.secret = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(GENERATED_SECRET_LEN)
                .map(char::from)
                .collect();
            eprintln!("jwt.secret 未配置，已生成临时密钥，重启后已签发的令牌全部失效");
            return Ok(());
        }
        if self.is_production() && self.jwt.secret.trim().len() < MIN_PRODUCTION_SECRET_LEN {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {MIN_PRODUCTION_SECRET_LEN} characters in production"
            )));
        }
        Ok(())
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
    fn test_defaults_are_complete() {
        let config = with_defaults(Config::builder())
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .expect("defaults should deserialize into AppConfig");

        assert_eq!(config.storage.backend, "memory");
        assert!(config.storage.seed_demo_users);
        assert_eq!(config.reporting.top_absentees_limit, 5);
        assert_eq!(config.reporting.recent_activities_limit, 5);
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
        assert!(config.is_development());
    }

    fn config_with(environment: &str, secret: &str) -> AppConfig {
        with_defaults(Config::builder())
            .and_then(|b| b.set_override("app.environment", environment))
            .and_then(|b| b.set_override("jwt.secret", secret))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .expect("config should deserialize")
    }

    #[test]
    fn test_missing_secret_rejected_outside_development() {
        for environment in ["production", "staging"] {
            let mut config = config_with(environment, "");
            assert!(config.resolve_jwt_secret().is_err());
        }
    }

    #[test]
    fn test_missing_secret_generated_in_development() {
        let mut first = config_with("development", "");
        let mut second = config_with("development", "  ");
        first.resolve_jwt_secret().unwrap();
        second.resolve_jwt_secret().unwrap();

        assert_eq!(first.jwt.secret.len(), GENERATED_SECRET_LEN);
        assert_ne!(first.jwt.secret, second.jwt.secret);
    }

    #[test]
    fn test_production_secret_length() {
        let mut short = config_with("production", "too-short");
        assert!(short.resolve_jwt_secret().is_err());

        let mut strong = config_with("production", &"k".repeat(MIN_PRODUCTION_SECRET_LEN));
        assert!(strong.resolve_jwt_secret().is_ok());
    }
}
