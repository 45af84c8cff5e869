//! Importer Configuration
//!
//! Loads `ImporterConfig` from an optional TOML file plus a `DOORWARE_*`
//! environment overlay. Defaults mirror the paths the legacy one-off script
//! hardcoded relative to the site checkout.

use crate::error::ImportError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Full importer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImporterConfig {
    /// Root of the vendor-supplied product image tree
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory representative images are copied into (created if absent)
    #[serde(default = "default_dest_dir")]
    pub dest_dir: PathBuf,

    /// Path of the generated JSON catalog
    #[serde(default = "default_catalog_file")]
    pub catalog_file: PathBuf,

    /// URL prefix recorded in each product's `image` field
    #[serde(default = "default_image_url_prefix")]
    pub image_url_prefix: String,

    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("products_image")
}

fn default_dest_dir() -> PathBuf {
    PathBuf::from("public/images/products/auto")
}

fn default_catalog_file() -> PathBuf {
    PathBuf::from("scripts/products_db.json")
}

fn default_image_url_prefix() -> String {
    "/images/products/auto".to_string()
}

impl Default for ImporterConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            dest_dir: default_dest_dir(),
            catalog_file: default_catalog_file(),
            image_url_prefix: default_image_url_prefix(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration: optional `doorware.toml` in the working
    /// directory, then `DOORWARE_*` environment overrides (nested keys use
    /// `__`, e.g. `DOORWARE_LOGGING__LEVEL=debug`).
    pub fn load() -> Result<ImporterConfig, ImportError> {
        let settings = Config::builder()
            .add_source(File::with_name("doorware").required(false))
            .add_source(
                Environment::with_prefix("DOORWARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration from a specific file (still subject to
    /// environment overrides).
    pub fn load_from_file(path: &Path) -> Result<ImporterConfig, ImportError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(true))
            .add_source(
                Environment::with_prefix("DOORWARE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
