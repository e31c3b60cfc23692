use core_config::{
    AppInfo, ConfigError, FromEnv, app_info, env_parse_or_default, logging::LogConfig,
    rate_limit::RateLimitConfig, server::ServerConfig,
};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration, read once at start-up.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub environment: Environment,
    pub server: ServerConfig,
    pub log: LogConfig,
    pub database: PostgresConfig,
    pub rate_limit: RateLimitConfig,
    /// Apply pending migrations before serving (`RUN_MIGRATIONS`, default true)
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            app: app_info!(),
            environment: Environment::from_env(),
            server: ServerConfig::from_env()?,
            log: LogConfig::from_env()?,
            database: PostgresConfig::from_env()?, // Required - will fail if not set
            rate_limit: RateLimitConfig::from_env()?,
            run_migrations: env_parse_or_default("RUN_MIGRATIONS", "true")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_database_url() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingEnvVar(ref key) if key == "DATABASE_URL"));
        });
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/inventory")),
                ("PORT", None),
                ("RUN_MIGRATIONS", None),
                ("RATE_LIMIT_MAX", None),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.server.port, 3000);
                assert!(config.run_migrations);
                assert_eq!(config.rate_limit.max_requests, 100);
                assert_eq!(config.app.name, "inventory_api");
            },
        );
    }

    #[test]
    fn test_run_migrations_must_be_bool() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgres://localhost/inventory")),
                ("RUN_MIGRATIONS", Some("sometimes")),
            ],
            || {
                assert!(matches!(
                    Config::from_env(),
                    Err(ConfigError::ParseError { .. })
                ));
            },
        );
    }
}
