//! Seed database builder.
//!
//! Reads every `.sql` file of a migration directory, applies them in
//! ascending file-name order to a fresh in-memory engine, and writes the
//! resulting database image to the bundled seed path. Nothing records which
//! files were applied: each run starts from an empty engine and re-applies
//! all of them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use notas_common::paths::is_sql_file;
use notas_common::DEFAULT_DB_NAME;
use thiserror::Error;
use tracing::{debug, info};

use crate::engine::Database;

/// Directory the migration files are read from.
pub const MIGRATIONS_DIR: &str = "./drizzle";

/// Directory the seed database is written to.
pub const SEED_DIR: &str = "./static";

/// Migration builder error types
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("Failed to list migrations in {}: {source}", path.display())]
    Discover { path: PathBuf, source: io::Error },

    #[error("Failed to read migration {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Migration {} failed: {message}", path.display())]
    Failed { path: PathBuf, message: String },

    #[error("Failed to save seed database at {}: {message}", path.display())]
    Save { path: PathBuf, message: String },
}

/// A single migration file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFile {
    pub name: String,
    pub path: PathBuf,
}

/// Outcome of a successful seed build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// File names in the order they were executed.
    pub applied: Vec<String>,
    pub output: PathBuf,
    /// Size of the written database image.
    pub bytes: usize,
}

/// Default seed output path, `./static/<db name>`.
pub fn seed_output_path() -> PathBuf {
    Path::new(SEED_DIR).join(DEFAULT_DB_NAME)
}

/// List the migration files of `dir` in execution order.
///
/// Only regular files with the `.sql` extension are returned. They are
/// ordered by a plain string comparison of their names, so `0010_x.sql`
/// runs after `0002_y.sql` only when the prefixes are zero-padded.
pub fn discover(dir: &Path) -> Result<Vec<MigrationFile>, MigrationError> {
    let discover_err = |source| MigrationError::Discover {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(discover_err)? {
        let entry = entry.map_err(discover_err)?;
        let path = entry.path();

        if !entry.file_type().map_err(discover_err)?.is_file() || !is_sql_file(&path) {
            debug!("Skipping non-migration entry {}", path.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        files.push(MigrationFile { name, path });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Apply migration files in the given order, stopping at the first failure.
///
/// # Returns
///
/// * `Ok(usize)` - Number of files executed
/// * `Err(MigrationError)` - The first file that could not be read or run
pub fn apply(db: &Database, files: &[MigrationFile]) -> Result<usize, MigrationError> {
    for file in files {
        let sql = fs::read_to_string(&file.path).map_err(|source| MigrationError::Read {
            path: file.path.clone(),
            source,
        })?;

        db.execute_batch(&sql)
            .map_err(|e| MigrationError::Failed {
                path: file.path.clone(),
                message: e.to_string(),
            })?;

        info!("Executed migration: {}", file.name);
    }

    Ok(files.len())
}

/// Build a seed database from `dir` and write it to `output`.
///
/// This function will:
/// 1. Create a fresh in-memory engine
/// 2. Discover and apply every migration file in order
/// 3. Export the engine and overwrite `output` with the image
///
/// Nothing is written unless every migration succeeded.
pub fn build_seed(dir: &Path, output: &Path) -> Result<BuildReport, MigrationError> {
    let save_err = |message: String| MigrationError::Save {
        path: output.to_path_buf(),
        message,
    };

    let db = Database::open_in_memory().map_err(|e| save_err(e.to_string()))?;

    let files = discover(dir)?;
    apply(&db, &files)?;

    let image = db.export().map_err(|e| save_err(e.to_string()))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| save_err(e.to_string()))?;
    }
    fs::write(output, &image).map_err(|e| save_err(e.to_string()))?;

    info!("Database saved at: {}", output.display());

    Ok(BuildReport {
        applied: files.into_iter().map(|f| f.name).collect(),
        output: output.to_path_buf(),
        bytes: image.len(),
    })
}

/// Build the seed from [`MIGRATIONS_DIR`] into [`seed_output_path`].
pub fn build_default_seed() -> Result<BuildReport, MigrationError> {
    build_seed(Path::new(MIGRATIONS_DIR), &seed_output_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, sql: &str) {
        fs::write(dir.join(name), sql).unwrap();
    }

    fn trail(image: &[u8]) -> Vec<String> {
        let db = Database::import(image).unwrap();
        let mut stmt = db.prepare("SELECT step FROM trail ORDER BY rowid").unwrap();
        let steps = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<Vec<String>>>()
            .unwrap();
        steps
    }

    #[test]
    fn test_discover_sorts_by_name() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0003_c.sql", "");
        write(dir.path(), "0001_a.sql", "");
        write(dir.path(), "0002_b.sql", "");

        let names: Vec<_> = discover(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["0001_a.sql", "0002_b.sql", "0003_c.sql"]);
    }

    #[test]
    fn test_discover_is_not_numeric_aware() {
        let dir = tempdir().unwrap();
        write(dir.path(), "10_late.sql", "");
        write(dir.path(), "9_early.sql", "");

        let names: Vec<_> = discover(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, ["10_late.sql", "9_early.sql"]);
    }

    #[test]
    fn test_discover_skips_other_entries() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0001_init.sql", "");
        write(dir.path(), "notes.txt", "this is not sql");
        fs::create_dir(dir.path().join("meta.sql")).unwrap();

        let files = discover(dir.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "0001_init.sql");
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempdir().unwrap();
        let err = discover(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, MigrationError::Discover { .. }));
    }

    #[test]
    fn test_build_applies_in_name_order() {
        let dir = tempdir().unwrap();
        // Written in reverse so directory order is unlikely to match.
        write(dir.path(), "0003_third.sql", "INSERT INTO trail VALUES ('third');");
        write(dir.path(), "0002_second.sql", "INSERT INTO trail VALUES ('second');");
        write(dir.path(), "0001_first.sql", "CREATE TABLE trail (step TEXT NOT NULL);");

        let out = dir.path().join("out").join("seed.db");
        let report = build_seed(dir.path(), &out).unwrap();

        assert_eq!(
            report.applied,
            ["0001_first.sql", "0002_second.sql", "0003_third.sql"]
        );
        assert_eq!(report.bytes, fs::metadata(&out).unwrap().len() as usize);
        assert_eq!(trail(&fs::read(&out).unwrap()), ["second", "third"]);
    }

    #[test]
    fn test_build_ignores_non_sql_files() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0001_init.sql", "CREATE TABLE trail (step TEXT);");
        write(dir.path(), "0000_broken.txt", "THIS IS NOT SQL AT ALL");

        let out = dir.path().join("seed.db");
        let report = build_seed(dir.path(), &out).unwrap();
        assert_eq!(report.applied, ["0001_init.sql"]);
    }

    #[test]
    fn test_build_aborts_on_invalid_sql() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0001_init.sql", "CREATE TABLE trail (step TEXT);");
        write(dir.path(), "0002_bad.sql", "INSERT INTO nowhere VALUES (;");
        write(dir.path(), "0003_after.sql", "INSERT INTO trail VALUES ('x');");

        let out = dir.path().join("seed.db");
        let err = build_seed(dir.path(), &out).unwrap_err();

        match &err {
            MigrationError::Failed { path, .. } => assert!(path.ends_with("0002_bad.sql")),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("0002_bad.sql"));
        assert!(!out.exists());
    }

    #[test]
    fn test_failed_build_keeps_previous_seed() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("seed.db");
        fs::write(&out, b"previous").unwrap();
        write(dir.path(), "0001_bad.sql", "CREATE TABLE");

        assert!(build_seed(dir.path(), &out).is_err());
        assert_eq!(fs::read(&out).unwrap(), b"previous");
    }

    #[test]
    fn test_build_reports_unwritable_output() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0001_init.sql", "CREATE TABLE trail (step TEXT);");
        let blocker = dir.path().join("static");
        fs::write(&blocker, b"a file, not a directory").unwrap();

        let out = blocker.join("seed.db");
        let err = build_seed(dir.path(), &out).unwrap_err();

        match &err {
            MigrationError::Save { path, .. } => assert_eq!(path, &out),
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Failed to save seed database at"));
        assert!(err.to_string().contains("seed.db"));
    }

    #[test]
    fn test_build_overwrites_existing_seed() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("seed.db");
        fs::write(&out, b"stale seed").unwrap();
        write(dir.path(), "0001_init.sql", "CREATE TABLE trail (step TEXT);");

        build_seed(dir.path(), &out).unwrap();
        assert!(fs::read(&out).unwrap().starts_with(b"SQLite format 3\0"));
    }

    #[test]
    fn test_rebuild_reapplies_everything() {
        let dir = tempdir().unwrap();
        write(dir.path(), "0001_init.sql", "CREATE TABLE trail (step TEXT);");
        write(dir.path(), "0002_row.sql", "INSERT INTO trail VALUES ('once');");

        let out = dir.path().join("seed.db");
        build_seed(dir.path(), &out).unwrap();
        build_seed(dir.path(), &out).unwrap();

        assert_eq!(trail(&fs::read(&out).unwrap()), ["once"]);
    }

    #[test]
    fn test_build_empty_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("seed.db");

        let report = build_seed(dir.path(), &out).unwrap();
        assert!(report.applied.is_empty());
        assert!(out.exists());
    }

    #[test]
    fn test_seed_output_path() {
        assert!(seed_output_path().ends_with("static/mydatabase.db"));
    }
}
