//! In-memory embedded engine.
//!
//! A [`Database`] owns a single in-memory SQLite connection. Its full state
//! can be exported as the native SQLite file image and a new engine can be
//! built from such an image. Both directions go through SQLite's online
//! backup API with a short-lived staging file.

use std::ops::Deref;
use std::path::PathBuf;

use notas_common::{Error, Result};
use rusqlite::backup::Progress;
use rusqlite::{Connection, DatabaseName};
use tempfile::TempDir;

/// Name of the staging file inside the temporary directory.
const STAGING_FILE: &str = "image.db";

/// Live embedded engine instance.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Create a fresh, empty in-memory engine.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| Error::database(format!("Failed to open in-memory database: {e}")))?;
        Ok(Self { conn })
    }

    /// Build a new engine from a serialized database image.
    ///
    /// An empty image yields an empty database.
    pub fn import(bytes: &[u8]) -> Result<Self> {
        let (_dir, path) = staging_path()?;
        std::fs::write(&path, bytes)?;

        let mut db = Self::open_in_memory()?;
        db.conn
            .restore(DatabaseName::Main, &path, None::<fn(Progress)>)
            .map_err(|e| Error::database(format!("Failed to import database image: {e}")))?;

        Ok(db)
    }

    /// Export the engine's full state as a serialized database image.
    pub fn export(&self) -> Result<Vec<u8>> {
        let (_dir, path) = staging_path()?;
        std::fs::File::create(&path)?;

        self.conn
            .backup(DatabaseName::Main, &path, None)
            .map_err(|e| Error::database(format!("Failed to export database image: {e}")))?;

        Ok(std::fs::read(&path)?)
    }

    /// Execute one or more SQL statements.
    pub fn execute_batch(&self, sql: &str) -> Result<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| Error::database(e.to_string()))
    }
}

impl Deref for Database {
    type Target = Connection;

    fn deref(&self) -> &Connection {
        &self.conn
    }
}

/// The staging file lives as long as the returned directory guard.
fn staging_path() -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join(STAGING_FILE);
    Ok((dir, path))
}
