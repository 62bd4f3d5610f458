//! Configuration for Basic authentication.
//!
//! Implements the `FromEnv` trait from `core_config`, following the same
//! pattern as `ServerConfig` and `StorageConfig`.

use core_config::{env_or_default, ConfigError, FromEnv};

/// Basic authentication configuration.
///
/// Loaded from environment variables:
/// - `BASIC_AUTH_USERNAME` (default: "test_user")
/// - `BASIC_AUTH_PASSWORD` (default: "test_password")
/// - `BASIC_AUTH_REALM` (default: "products-api") - fallback challenge realm
///   when the request carries no Host header
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub realm: String,
}

impl AuthConfig {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        realm: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            realm: realm.into(),
        }
    }
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: env_or_default("BASIC_AUTH_USERNAME", "test_user"),
            password: env_or_default("BASIC_AUTH_PASSWORD", "test_password"),
            realm: env_or_default("BASIC_AUTH_REALM", "products-api"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_config_defaults() {
        temp_env::with_vars(
            [
                ("BASIC_AUTH_USERNAME", None::<&str>),
                ("BASIC_AUTH_PASSWORD", None),
                ("BASIC_AUTH_REALM", None),
            ],
            || {
                let config = AuthConfig::from_env().unwrap();
                assert_eq!(config.username, "test_user");
                assert_eq!(config.password, "test_password");
                assert_eq!(config.realm, "products-api");
            },
        );
    }

    #[test]
    fn test_auth_config_overrides() {
        temp_env::with_vars(
            [
                ("BASIC_AUTH_USERNAME", Some("admin")),
                ("BASIC_AUTH_PASSWORD", Some("hunter2")),
                ("BASIC_AUTH_REALM", Some("catalog")),
            ],
            || {
                let config = AuthConfig::from_env().unwrap();
                assert_eq!(config.username, "admin");
                assert_eq!(config.password, "hunter2");
                assert_eq!(config.realm, "catalog");
            },
        );
    }
}
