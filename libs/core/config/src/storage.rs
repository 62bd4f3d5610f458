use crate::{env_or_default, ConfigError, FromEnv};
use std::path::PathBuf;

/// Location of the JSON catalog file backing the product store.
///
/// The whole catalog lives in a single file; every read parses it in full
/// and every mutation rewrites it in full.
#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub products_file: PathBuf,
}

impl StorageConfig {
    pub fn new(products_file: impl Into<PathBuf>) -> Self {
        Self {
            products_file: products_file.into(),
        }
    }
}

impl FromEnv for StorageConfig {
    /// Reads from environment variables with sensible defaults:
    /// - PRODUCTS_FILE: defaults to "data/products.json"
    fn from_env() -> Result<Self, ConfigError> {
        let products_file = env_or_default("PRODUCTS_FILE", "data/products.json");
        Ok(Self {
            products_file: PathBuf::from(products_file),
        })
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            products_file: PathBuf::from("data/products.json"),
        }
    }
}
