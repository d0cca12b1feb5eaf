//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MP_DATA_DIR` - Directory holding file-backed storage areas (default: `.manga-panel`)
//! - `MP_USER_KEY` - Volatile-area key of the session identity (default: `mp_user`)
//! - `MP_FAVORITES_PREFIX` - Prefix of per-user favorites keys (default: `mp_favs_`)
//! - `MP_GLOBAL_FAVORITES_KEY` - Favorites key without a session (default: `mp_favorites`)
//! - `MP_CATALOG_PATH` - JSON catalog file replacing the bundled catalog

use std::path::PathBuf;

use thiserror::Error;

use crate::StorageKeys;
use crate::keys::{DEFAULT_FAVORITES_PREFIX, DEFAULT_GLOBAL_FAVORITES_KEY, DEFAULT_USER_KEY};

/// Directory of the durable area inside the data directory.
const DURABLE_DIR: &str = "local";

/// Directory of the volatile area inside the data directory.
const VOLATILE_DIR: &str = "session";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory holding the file-backed storage areas
    pub data_dir: PathBuf,
    /// Storage key names
    pub keys: StorageKeys,
    /// Optional catalog file
    pub catalog_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".manga-panel"),
            keys: StorageKeys::default(),
            catalog_path: None,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a key name is set but empty, or if the global
    /// favorites key would collide with a per-user key.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_or_default(&var, "MP_DATA_DIR", ".manga-panel"));
        let keys = StorageKeys {
            user: get_key(&var, "MP_USER_KEY", DEFAULT_USER_KEY)?,
            favorites_prefix: get_key(&var, "MP_FAVORITES_PREFIX", DEFAULT_FAVORITES_PREFIX)?,
            global_favorites: get_key(&var, "MP_GLOBAL_FAVORITES_KEY", DEFAULT_GLOBAL_FAVORITES_KEY)?,
        };
        validate_keys(&keys)?;
        let catalog_path = var("MP_CATALOG_PATH").map(PathBuf::from);

        Ok(Self {
            data_dir,
            keys,
            catalog_path,
        })
    }

    /// Path of the durable storage directory.
    #[must_use]
    pub fn durable_path(&self) -> PathBuf {
        self.data_dir.join(DURABLE_DIR)
    }

    /// Path of the volatile storage directory.
    #[must_use]
    pub fn volatile_path(&self) -> PathBuf {
        self.data_dir.join(VOLATILE_DIR)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a variable with a default value.
fn get_or_default(var: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    var(key).unwrap_or_else(|| default.to_string())
}

/// Get a storage key name, rejecting empty values.
fn get_key(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: &str,
) -> Result<String, ConfigError> {
    let value = get_or_default(var, key, default);
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be empty".to_string(),
        ));
    }
    Ok(value)
}

/// The global key must not be reachable as `<prefix><email>`: an email never
/// lacks an `@`, so a global key without one is always safe.
fn validate_keys(keys: &StorageKeys) -> Result<(), ConfigError> {
    let collides = keys
        .global_favorites
        .strip_prefix(&keys.favorites_prefix)
        .is_some_and(|rest| rest.contains('@'));
    if collides {
        return Err(ConfigError::InvalidEnvVar(
            "MP_GLOBAL_FAVORITES_KEY".to_string(),
            format!(
                "collides with per-user keys under prefix '{}'",
                keys.favorites_prefix
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ClientConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ClientConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.durable_path(), PathBuf::from(".manga-panel/local"));
        assert_eq!(config.volatile_path(), PathBuf::from(".manga-panel/session"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("MP_DATA_DIR", "/tmp/mp"),
            ("MP_USER_KEY", "user"),
            ("MP_FAVORITES_PREFIX", "favorites:"),
            ("MP_GLOBAL_FAVORITES_KEY", "favorites:global"),
            ("MP_CATALOG_PATH", "catalog.json"),
        ])
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/mp"));
        assert_eq!(config.keys.user, "user");
        assert_eq!(config.keys.favorites_prefix, "favorites:");
        assert_eq!(config.keys.global_favorites, "favorites:global");
        assert_eq!(config.catalog_path, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = load(&[("MP_USER_KEY", "  ")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "MP_USER_KEY"));
    }

    #[test]
    fn test_global_key_colliding_with_user_keys_rejected() {
        let err = load(&[("MP_GLOBAL_FAVORITES_KEY", "mp_favs_a@x.com")]).unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "MP_GLOBAL_FAVORITES_KEY")
        );
    }
}
