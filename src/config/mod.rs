mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./notas.toml", "~/.config/notas/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let name = &config.database.name;
    if name.is_empty() {
        anyhow::bail!("Database name cannot be empty");
    }
    if name.contains(['/', '\\']) || name == "." || name == ".." {
        anyhow::bail!("Database name '{}' must be a bare file name", name);
    }

    if let Some(url) = &config.assets.url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            anyhow::bail!("Asset URL '{}' must start with http:// or https://", url);
        }
    }

    if config.assets.url.is_none() && !config.assets.dir.exists() {
        tracing::warn!("Asset directory does not exist: {:?}", config.assets.dir);
    }

    Ok(())
}
