//! Notas-Common: Shared error types, constants, and file helpers.
//!
//! This crate provides functionality used by both the seed builder and the
//! runtime connection manager:
//!
//! - **Error Handling**: Common error type and result alias
//! - **Path Utilities**: Detection of SQL migration files by extension
//!
//! # Examples
//!
//! ```
//! use notas_common::{Error, Result, DEFAULT_DB_NAME};
//! use notas_common::paths::is_sql_file;
//! use std::path::Path;
//!
//! assert!(is_sql_file(Path::new("0001_init.sql")));
//! assert_eq!(DEFAULT_DB_NAME, "mydatabase.db");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("nota 7"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod paths;

pub use error::{Error, Result};

/// File name shared by the bundled seed asset and the private-storage copy.
pub const DEFAULT_DB_NAME: &str = "mydatabase.db";
