//! Bundled seed asset sources.
//!
//! On first run the connection manager copies the seed database shipped with
//! the app into private storage. The seed is reached through the app's local
//! asset server at `/<db name>` ([`HttpAssets`]) or, for desktop builds and
//! tests, straight from the static directory ([`DirAssets`]).

use std::io;
use std::path::{Path, PathBuf};

use notas_common::{Error, Result};
use tracing::debug;

/// Source of bundled, read-only application assets.
pub trait AssetSource {
    /// Fetch the full content of the asset called `name`.
    fn fetch(&self, name: &str) -> Result<Vec<u8>>;
}

impl<T: AssetSource + ?Sized> AssetSource for Box<T> {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        (**self).fetch(name)
    }
}

/// Assets served over HTTP by the app's local asset server.
#[derive(Debug, Clone)]
pub struct HttpAssets {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpAssets {
    /// Client for the asset server at `base_url`.
    ///
    /// The asset server is local to the app, so system proxies are bypassed.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .map_err(|e| Error::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// URL of an asset: the base URL followed by `/` and the asset name.
    pub fn url_for(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

impl AssetSource for HttpAssets {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let url = self.url_for(name);
        debug!("Fetching bundled asset {}", url);

        let response = self.client.get(&url).send().map_err(|e| {
            Error::asset_fetch(format!("Failed to fetch initial database file {url}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::asset_fetch(format!(
                "Failed to fetch initial database file {url}: HTTP {status}"
            )));
        }

        let body = response.bytes().map_err(|e| {
            Error::asset_fetch(format!("Failed to read initial database file {url}: {e}"))
        })?;
        Ok(body.to_vec())
    }
}

/// Assets read from a local static directory.
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirAssets {
    fn fetch(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        std::fs::read(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::asset_fetch(format!(
                "Failed to fetch initial database file: {} does not exist",
                path.display()
            )),
            _ => Error::asset_fetch(format!(
                "Failed to fetch initial database file {}: {e}",
                path.display()
            )),
        })
    }
}
