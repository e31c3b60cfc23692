use crate::{env_or_default, ConfigError, FromEnv};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log verbosity used when `RUST_LOG` is not set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_LEVEL)
    }
}

impl FromEnv for LogConfig {
    /// Reads `LOG_LEVEL` (default: "info")
    fn from_env() -> Result<Self, ConfigError> {
        let level = env_or_default("LOG_LEVEL", DEFAULT_LOG_LEVEL);
        if level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "LOG_LEVEL".to_string(),
                details: "must not be empty".to_string(),
            });
        }
        Ok(Self::new(level.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_defaults_to_info() {
        temp_env::with_var_unset("LOG_LEVEL", || {
            assert_eq!(LogConfig::from_env().unwrap(), LogConfig::new("info"));
        });
    }

    #[test]
    fn test_log_config_reads_level() {
        temp_env::with_var("LOG_LEVEL", Some("debug"), || {
            assert_eq!(LogConfig::from_env().unwrap().level, "debug");
        });
    }

    #[test]
    fn test_log_config_rejects_blank_level() {
        temp_env::with_var("LOG_LEVEL", Some("  "), || {
            let err = LogConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("LOG_LEVEL"));
        });
    }
}
