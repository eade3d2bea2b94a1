//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CUTE_SHOP_STORE_NAME` - Display name of the shop (default: Cute Shop)
//! - `CUTE_SHOP_SESSION_FILE` - Path of the persisted session token file;
//!   when unset the session lives in memory only
//! - `CUTE_SHOP_DEMO_EMAIL` - Demo account email (default: user123@gmail.com)
//! - `CUTE_SHOP_DEMO_PASSWORD` - Demo account password (default: 123123)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

use cute_shop_core::Email;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Display name of the shop.
    pub store_name: String,
    /// Path of the persisted session token file, if persistence is enabled.
    pub session_file: Option<PathBuf>,
    /// Demo account email.
    pub demo_email: Email,
    /// Demo account password.
    pub demo_password: SecretString,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(&|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_lookup(
        lookup: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let store_name =
            lookup("CUTE_SHOP_STORE_NAME").unwrap_or_else(|| "Cute Shop".to_owned());

        let session_file = lookup("CUTE_SHOP_SESSION_FILE").map(PathBuf::from);

        let demo_email_raw =
            lookup("CUTE_SHOP_DEMO_EMAIL").unwrap_or_else(|| "user123@gmail.com".to_owned());
        let demo_email = Email::parse(&demo_email_raw).map_err(|e| {
            ConfigError::InvalidEnvVar("CUTE_SHOP_DEMO_EMAIL".to_owned(), e.to_string())
        })?;

        let demo_password = SecretString::from(
            lookup("CUTE_SHOP_DEMO_PASSWORD").unwrap_or_else(|| "123123".to_owned()),
        );

        Ok(Self {
            store_name,
            session_file,
            demo_email,
            demo_password,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup<'a>(vars: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| vars.get(key).map(|v| (*v).to_owned())
    }

    #[test]
    fn test_defaults() {
        let vars = HashMap::new();
        let config = StorefrontConfig::from_lookup(&lookup(&vars)).unwrap();

        assert_eq!(config.store_name, "Cute Shop");
        assert_eq!(config.session_file, None);
        assert_eq!(config.demo_email.as_str(), "user123@gmail.com");
    }

    #[test]
    fn test_overrides() {
        let vars = HashMap::from([
            ("CUTE_SHOP_STORE_NAME", "Test Shop"),
            ("CUTE_SHOP_SESSION_FILE", "/tmp/session.json"),
            ("CUTE_SHOP_DEMO_EMAIL", "demo@example.com"),
        ]);
        let config = StorefrontConfig::from_lookup(&lookup(&vars)).unwrap();

        assert_eq!(config.store_name, "Test Shop");
        assert_eq!(config.session_file, Some(PathBuf::from("/tmp/session.json")));
        assert_eq!(config.demo_email.as_str(), "demo@example.com");
    }

    #[test]
    fn test_invalid_demo_email() {
        let vars = HashMap::from([("CUTE_SHOP_DEMO_EMAIL", "not-an-email")]);
        let result = StorefrontConfig::from_lookup(&lookup(&vars));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(name, _)) if name == "CUTE_SHOP_DEMO_EMAIL"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let vars = HashMap::from([("CUTE_SHOP_DEMO_PASSWORD", "hunter22")]);
        let config = StorefrontConfig::from_lookup(&lookup(&vars)).unwrap();
        assert!(!format!("{config:?}").contains("hunter22"));
    }
}
