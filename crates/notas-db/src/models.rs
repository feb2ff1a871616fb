//! Rust models matching the database schema.

use serde::{Deserialize, Serialize};

/// A note row from the `nota` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Nota {
    pub id: i64,
    /// Defaults to 0 on insert.
    pub status: i64,
    pub conteudo: String,
}

impl Nota {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            status: row.get(1)?,
            conteudo: row.get(2)?,
        })
    }
}
