//! Runtime database connection lifecycle.
//!
//! A [`ConnectionManager`] owns the single live engine of the process. On the
//! first [`initialize`](ConnectionManager::initialize) it copies the bundled
//! seed into private storage if no copy exists yet, then loads the private
//! copy into a fresh in-memory engine. Changes only reach private storage
//! when [`save`](ConnectionManager::save) is called; anything not saved
//! before the process exits is lost.

use std::io;

use notas_common::{Error, Result};
use tracing::{debug, info};

use crate::assets::AssetSource;
use crate::encoding;
use crate::engine::Database;
use crate::storage::Storage;

/// Lifecycle state of a [`ConnectionManager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No engine has been loaded yet.
    Uninitialized,
    /// The engine is loaded and stays loaded until the manager is dropped.
    Ready,
}

/// Owner of the process's database connection.
pub struct ConnectionManager<S, A> {
    db_name: String,
    storage: S,
    assets: A,
    db: Option<Database>,
}

impl<S: Storage, A: AssetSource> ConnectionManager<S, A> {
    /// Create an uninitialized manager for the database file `db_name`.
    ///
    /// The same name is used to fetch the bundled seed and to store the
    /// private copy.
    pub fn new(db_name: impl Into<String>, storage: S, assets: A) -> Self {
        Self {
            db_name: db_name.into(),
            storage,
            assets,
            db: None,
        }
    }

    pub fn db_name(&self) -> &str {
        &self.db_name
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn state(&self) -> ConnectionState {
        if self.db.is_some() {
            ConnectionState::Ready
        } else {
            ConnectionState::Uninitialized
        }
    }

    /// Load the database, bootstrapping private storage from the seed on
    /// first run.
    ///
    /// Calling this again once the manager is ready performs no I/O and
    /// returns the same engine.
    pub fn initialize(&mut self) -> Result<&Database> {
        if self.db.is_some() {
            debug!("Database already initialized.");
        } else {
            if !self.database_exists()? {
                self.create_database()?;
            }
            let db = self.load_database()?;
            self.db = Some(db);
        }

        self.database()
    }

    /// The live engine, once initialized.
    pub fn database(&self) -> Result<&Database> {
        self.db.as_ref().ok_or(Error::NotInitialized)
    }

    /// Persist the live engine's current state to private storage.
    pub fn save(&self) -> Result<()> {
        let db = self.database()?;

        info!("Saving database...");
        let image = db.export()?;
        self.storage
            .write_text(&self.db_name, &encoding::encode(&image))
            .map_err(|e| Error::storage(format!("Failed to save {}: {e}", self.db_name)))
    }

    /// Only a missing file counts as absent; other stat failures propagate.
    fn database_exists(&self) -> Result<bool> {
        match self.storage.stat(&self.db_name) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::storage(format!(
                "Failed to stat {}: {e}",
                self.db_name
            ))),
        }
    }

    fn create_database(&self) -> Result<()> {
        info!("Creating database...");

        let seed = self.assets.fetch(&self.db_name)?;
        if seed.is_empty() {
            return Err(Error::asset_fetch(format!(
                "Initial database file {} is empty",
                self.db_name
            )));
        }
        // A seed that does not import must not reach private storage.
        Database::import(&seed)?;

        self.storage
            .write_text(&self.db_name, &encoding::encode(&seed))
            .map_err(|e| Error::storage(format!("Failed to write {}: {e}", self.db_name)))
    }

    fn load_database(&self) -> Result<Database> {
        info!("Loading database...");

        let text = self
            .storage
            .read_text(&self.db_name)
            .map_err(|e| Error::storage(format!("Failed to read {}: {e}", self.db_name)))?;
        Database::import(&encoding::decode(&text)?)
    }
}
