use jester_core::SkillVariant;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub variant: SkillVariant,
    /// Requests whose application id differs are rejected. Unset disables the check.
    pub app_id: Option<String>,
    pub log_level: Level,
    pub content_path: Option<PathBuf>,
    pub sound_base_url: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let bind_address_str =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string()))?;

        let variant_str = std::env::var("SKILL_VARIANT").unwrap_or_else(|_| "jokes".to_string());
        let variant = variant_str
            .parse::<SkillVariant>()
            .map_err(|e| ConfigError::InvalidValue("SKILL_VARIANT".to_string(), e))?;

        let app_id = non_empty_var("SKILL_APP_ID");

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let content_path = non_empty_var("CONTENT_PATH").map(PathBuf::from);
        let sound_base_url = non_empty_var("SOUND_BASE_URL");

        if let Some(url) = &sound_base_url {
            if !url.starts_with("https://") {
                return Err(ConfigError::InvalidValue(
                    "SOUND_BASE_URL".to_string(),
                    format!("'{}' must be an https URL", url),
                ));
            }
        }

        Ok(Self {
            bind_address,
            variant,
            app_id,
            log_level,
            content_path,
            sound_base_url,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;
    use tracing::Level;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("BIND_ADDRESS");
            env::remove_var("SKILL_VARIANT");
            env::remove_var("SKILL_APP_ID");
            env::remove_var("RUST_LOG");
            env::remove_var("CONTENT_PATH");
            env::remove_var("SOUND_BASE_URL");
        }
    }

    #[test]
    fn test_config_error_display() {
        let invalid_value =
            ConfigError::InvalidValue("TEST_VAR".to_string(), "bad_value".to_string());
        assert_eq!(
            format!("{}", invalid_value),
            "Invalid value for environment variable TEST_VAR: bad_value"
        );
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        clear_env_vars();

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "0.0.0.0:3000");
        assert_eq!(config.variant, SkillVariant::Jokes);
        assert_eq!(config.app_id, None);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.content_path, None);
        assert_eq!(config.sound_base_url, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_custom_values() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "127.0.0.1:8080");
            env::set_var("SKILL_VARIANT", "recipes");
            env::set_var("SKILL_APP_ID", "amzn1.echo-sdk-ams.app.custom");
            env::set_var("RUST_LOG", "debug");
            env::set_var("CONTENT_PATH", "/custom/content.json");
            env::set_var("SOUND_BASE_URL", "https://cdn.example.com/sounds/");
        }

        let config = Config::from_env().expect("Config should load successfully");

        assert_eq!(config.bind_address.to_string(), "127.0.0.1:8080");
        assert_eq!(config.variant, SkillVariant::Recipes);
        assert_eq!(
            config.app_id,
            Some("amzn1.echo-sdk-ams.app.custom".to_string())
        );
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.content_path,
            Some(PathBuf::from("/custom/content.json"))
        );
        assert_eq!(
            config.sound_base_url,
            Some("https://cdn.example.com/sounds/".to_string())
        );
    }

    #[test]
    #[serial]
    fn test_config_blank_app_id_disables_check() {
        clear_env_vars();
        unsafe {
            env::set_var("SKILL_APP_ID", "   ");
        }

        let config = Config::from_env().expect("Config should load successfully");
        assert_eq!(config.app_id, None);
    }

    #[test]
    #[serial]
    fn test_config_invalid_bind_address() {
        clear_env_vars();
        unsafe {
            env::set_var("BIND_ADDRESS", "not-a-valid-address");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, _) = err;
        assert_eq!(var, "BIND_ADDRESS");
    }

    #[test]
    #[serial]
    fn test_config_invalid_variant() {
        clear_env_vars();
        unsafe {
            env::set_var("SKILL_VARIANT", "limericks");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, msg) = err;
        assert_eq!(var, "SKILL_VARIANT");
        assert!(msg.contains("limericks"));
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        clear_env_vars();
        unsafe {
            env::set_var("RUST_LOG", "not-a-level");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, _) = err;
        assert_eq!(var, "RUST_LOG");
    }

    #[test]
    #[serial]
    fn test_config_insecure_sound_base_url() {
        clear_env_vars();
        unsafe {
            env::set_var("SOUND_BASE_URL", "http://cdn.example.com/sounds/");
        }

        let err = Config::from_env().unwrap_err();
        let ConfigError::InvalidValue(var, _) = err;
        assert_eq!(var, "SOUND_BASE_URL");
    }
}
