//! Private storage capability.
//!
//! The runtime keeps its database under an application-private data
//! directory and only ever exchanges text with it. [`Storage`] is the
//! capability the connection manager is written against; [`DataDir`] is the
//! filesystem-backed implementation.

use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use notas_common::{Error, Result};
use tempfile::NamedTempFile;

/// Metadata returned by [`Storage::stat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub size: u64,
}

/// Text file access scoped to one private directory.
pub trait Storage {
    /// Stat a file. A missing file fails with [`io::ErrorKind::NotFound`].
    fn stat(&self, name: &str) -> io::Result<FileStat>;

    /// Read a whole file as UTF-8 text.
    fn read_text(&self, name: &str) -> io::Result<String>;

    /// Replace a file's content with `data`.
    fn write_text(&self, name: &str, data: &str) -> io::Result<()>;
}

/// Filesystem storage rooted at a private data directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Use `root` as the private data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Use the platform's per-user data directory for notas.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("app", "notas", "notas")
            .ok_or_else(|| Error::storage("Could not determine data directory"))?;
        Ok(Self::new(dirs.data_dir()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the root, refusing anything but a bare file name.
    fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(name)),
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{name}' is not a file name inside the data directory"),
            )),
        }
    }
}

impl Storage for DataDir {
    fn stat(&self, name: &str) -> io::Result<FileStat> {
        let meta = fs::metadata(self.resolve(name)?)?;
        Ok(FileStat { size: meta.len() })
    }

    fn read_text(&self, name: &str) -> io::Result<String> {
        fs::read_to_string(self.resolve(name)?)
    }

    fn write_text(&self, name: &str, data: &str) -> io::Result<()> {
        let path = self.resolve(name)?;
        fs::create_dir_all(&self.root)?;

        // Stage next to the target so the rename stays on one filesystem.
        let mut staged = NamedTempFile::new_in(&self.root)?;
        staged.write_all(data.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&path).map_err(|e| e.error)?;

        Ok(())
    }
}
