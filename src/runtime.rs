//! Wiring of the runtime connection from configuration.

use anyhow::Result;
use notas_db::assets::{AssetSource, DirAssets, HttpAssets};
use notas_db::connection::ConnectionManager;
use notas_db::storage::DataDir;

use crate::config::Config;

/// Connection manager as assembled by the CLI.
pub type AppConnection = ConnectionManager<DataDir, Box<dyn AssetSource>>;

/// Build an uninitialized connection manager for `config`.
pub fn connection_from_config(config: &Config) -> Result<AppConnection> {
    let storage = match &config.database.data_dir {
        Some(dir) => DataDir::new(dir),
        None => DataDir::open_default()?,
    };

    let assets: Box<dyn AssetSource> = match &config.assets.url {
        Some(url) => Box::new(HttpAssets::new(url.clone())?),
        None => Box::new(DirAssets::new(&config.assets.dir)),
    };

    tracing::debug!(
        "Using data directory {:?} for {}",
        storage.root(),
        config.database.name
    );

    Ok(ConnectionManager::new(
        config.database.name.clone(),
        storage,
        assets,
    ))
}
