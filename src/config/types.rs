use notas_common::DEFAULT_DB_NAME;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// File name of the bundled seed and of the private copy
    #[serde(default = "default_db_name")]
    pub name: String,

    /// Private data directory (platform data dir if unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            name: default_db_name(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetsConfig {
    /// Static directory holding the bundled seed
    #[serde(default = "default_assets_dir")]
    pub dir: PathBuf,

    /// Base URL of the local asset server; takes precedence over `dir`
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: default_assets_dir(),
            url: None,
        }
    }
}

fn default_db_name() -> String {
    DEFAULT_DB_NAME.to_string()
}

fn default_assets_dir() -> PathBuf {
    PathBuf::from("./static")
}
