//! Static declaration of the persisted schema.
//!
//! The app stores a single table, `nota`. The declaration here is the typed
//! counterpart of the DDL shipped in the migration directory and is used to
//! check that a loaded database has the shape the query layer expects.

use notas_common::{Error, Result};
use rusqlite::Connection;

/// SQLite storage class of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Text,
}

impl ColumnType {
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Text => "TEXT",
        }
    }
}

/// A declared column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnType,
    pub primary_key: bool,
    pub auto_increment: bool,
    pub not_null: bool,
    pub default: Option<&'static str>,
}

/// A declared table.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

/// The `nota` table: one note per row.
pub const NOTA: Table = Table {
    name: "nota",
    columns: &[
        Column {
            name: "id",
            kind: ColumnType::Integer,
            primary_key: true,
            auto_increment: true,
            not_null: true,
            default: None,
        },
        Column {
            name: "status",
            kind: ColumnType::Integer,
            primary_key: false,
            auto_increment: false,
            not_null: true,
            default: Some("0"),
        },
        Column {
            name: "conteudo",
            kind: ColumnType::Text,
            primary_key: false,
            auto_increment: false,
            not_null: true,
            default: None,
        },
    ],
};

impl Table {
    /// Render the `CREATE TABLE` statement for this declaration.
    pub fn create_statement(&self) -> String {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|c| {
                let mut def = format!("`{}` {}", c.name, c.kind.as_sql());
                if c.primary_key {
                    def.push_str(" PRIMARY KEY");
                }
                if c.auto_increment {
                    def.push_str(" AUTOINCREMENT");
                }
                if let Some(default) = c.default {
                    def.push_str(&format!(" DEFAULT {default}"));
                }
                if c.not_null {
                    def.push_str(" NOT NULL");
                }
                def
            })
            .collect();

        format!("CREATE TABLE `{}` (\n\t{}\n);", self.name, columns.join(",\n\t"))
    }

    /// Check that `conn` holds this table with every declared column.
    pub fn verify(&self, conn: &Connection) -> Result<()> {
        let mut stmt = conn
            .prepare(&format!("PRAGMA table_info(`{}`)", self.name))
            .map_err(|e| Error::database(e.to_string()))?;

        // (name, type, notnull, pk)
        let live: Vec<(String, String, bool, bool)> = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)? != 0,
                    row.get::<_, i64>(5)? != 0,
                ))
            })
            .map_err(|e| Error::database(e.to_string()))?
            .collect::<rusqlite::Result<_>>()
            .map_err(|e| Error::database(e.to_string()))?;

        if live.is_empty() {
            return Err(Error::database(format!("Table '{}' does not exist", self.name)));
        }

        for column in self.columns {
            let found = live.iter().find(|(name, ..)| name == column.name).ok_or_else(|| {
                Error::database(format!("Table '{}' has no column '{}'", self.name, column.name))
            })?;

            let (_, kind, not_null, pk) = found;
            if !kind.eq_ignore_ascii_case(column.kind.as_sql())
                || *not_null != column.not_null
                || *pk != column.primary_key
            {
                return Err(Error::database(format!(
                    "Column '{}.{}' does not match its declaration",
                    self.name, column.name
                )));
            }
        }

        Ok(())
    }
}
