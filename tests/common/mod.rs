//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], a temporary app layout with a migration
//! directory, a static asset directory, and a private data directory.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use notas::config::Config;
use notas_db::migrations::{build_seed, BuildReport};
use tempfile::TempDir;

pub const CREATE_NOTA: &str = "CREATE TABLE `nota` (
	`id` integer PRIMARY KEY AUTOINCREMENT NOT NULL,
	`status` integer DEFAULT 0 NOT NULL,
	`conteudo` text NOT NULL
);
";

pub const INSERT_TEST_ROW: &str = "INSERT INTO nota (conteudo) VALUES ('test');\n";

/// Temporary app layout rooted in a temp directory.
pub struct TestHarness {
    pub root: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("drizzle")).unwrap();
        fs::create_dir_all(root.path().join("static")).unwrap();
        Self { root }
    }

    /// Harness whose migration dir holds the `nota` table and one row.
    pub fn with_seed_migrations() -> Self {
        let harness = Self::new();
        harness.write_migration("0001_create_nota.sql", CREATE_NOTA);
        harness.write_migration("0002_insert_test.sql", INSERT_TEST_ROW);
        harness
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn migrations_dir(&self) -> PathBuf {
        self.path().join("drizzle")
    }

    pub fn static_dir(&self) -> PathBuf {
        self.path().join("static")
    }

    pub fn data_dir(&self) -> PathBuf {
        self.path().join("data")
    }

    pub fn seed_path(&self) -> PathBuf {
        self.static_dir().join(notas_common::DEFAULT_DB_NAME)
    }

    pub fn write_migration(&self, name: &str, sql: &str) {
        fs::write(self.migrations_dir().join(name), sql).unwrap();
    }

    pub fn build_seed(&self) -> BuildReport {
        build_seed(&self.migrations_dir(), &self.seed_path()).unwrap()
    }

    /// Runtime config pointing at this harness's directories.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.database.data_dir = Some(self.data_dir());
        config.assets.dir = self.static_dir();
        config
    }

    /// Write the runtime config as TOML and return its path.
    pub fn write_config(&self) -> PathBuf {
        let path = self.path().join("notas.toml");
        fs::write(&path, toml_for(&self.config())).unwrap();
        path
    }
}

fn toml_for(config: &Config) -> String {
    let data_dir = config.database.data_dir.as_ref().unwrap();
    format!(
        "[database]\nname = {:?}\ndata_dir = {:?}\n\n[assets]\ndir = {:?}\n",
        config.database.name,
        data_dir.to_string_lossy(),
        config.assets.dir.to_string_lossy()
    )
}
