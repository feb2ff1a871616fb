//! Path utilities for recognizing migration files.
//!
//! The seed builder only executes files carrying the SQL extension. The match
//! is exact and case-sensitive, so `init.SQL` or `init.sql.bak` are skipped.

use std::path::Path;

/// Extension of migration files the builder executes.
const SQL_EXTENSION: &str = "sql";

/// Check if a path names a SQL migration file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use notas_common::paths::is_sql_file;
///
/// assert!(is_sql_file(Path::new("0000_create_nota.sql")));
/// assert!(is_sql_file(Path::new("/path/to/drizzle/0001_seed.sql")));
/// assert!(!is_sql_file(Path::new("meta/_journal.json")));
/// ```
pub fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == SQL_EXTENSION)
        .unwrap_or(false)
}
