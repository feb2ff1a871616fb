//! Note database queries.
//!
//! This module provides CRUD operations for the `nota` table. Every function
//! takes a plain connection, so it works on a [`Database`](crate::engine::Database)
//! through deref as well as on any other rusqlite connection.

use notas_common::{Error, Result};
use rusqlite::{Connection, OptionalExtension};

use crate::models::Nota;

const SELECT_NOTA: &str = "SELECT id, status, conteudo FROM nota";

/// Create a new note with the default status.
///
/// # Returns
///
/// * `Ok(Nota)` - The created note, including its assigned id
/// * `Err(Error)` - If the content is empty or a database error occurs
pub fn create_nota(conn: &Connection, conteudo: &str) -> Result<Nota> {
    if conteudo.is_empty() {
        return Err(Error::invalid_input("Note content cannot be empty"));
    }

    conn.execute(
        "INSERT INTO nota (conteudo) VALUES (:conteudo)",
        rusqlite::named_params! { ":conteudo": conteudo },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    let id = conn.last_insert_rowid();
    get_nota(conn, id)?.ok_or_else(|| Error::internal(format!("Inserted nota {id} vanished")))
}

/// Create a new note with an explicit status.
pub fn create_nota_with_status(conn: &Connection, conteudo: &str, status: i64) -> Result<Nota> {
    if conteudo.is_empty() {
        return Err(Error::invalid_input("Note content cannot be empty"));
    }

    conn.execute(
        "INSERT INTO nota (status, conteudo) VALUES (:status, :conteudo)",
        rusqlite::named_params! { ":status": status, ":conteudo": conteudo },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(Nota {
        id: conn.last_insert_rowid(),
        status,
        conteudo: conteudo.to_string(),
    })
}

/// Get a note by id.
///
/// # Returns
///
/// * `Ok(Some(Nota))` - The note if found
/// * `Ok(None)` - If the note does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_nota(conn: &Connection, id: i64) -> Result<Option<Nota>> {
    conn.query_row(
        &format!("{SELECT_NOTA} WHERE id = :id"),
        rusqlite::named_params! { ":id": id },
        Nota::from_row,
    )
    .optional()
    .map_err(|e| Error::database(e.to_string()))
}

/// List all notes ordered by id.
pub fn list_notas(conn: &Connection) -> Result<Vec<Nota>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_NOTA} ORDER BY id"))
        .map_err(|e| Error::database(e.to_string()))?;

    let notas = stmt
        .query_map([], Nota::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(notas)
}

/// List notes with the given status, ordered by id.
pub fn list_notas_by_status(conn: &Connection, status: i64) -> Result<Vec<Nota>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_NOTA} WHERE status = :status ORDER BY id"))
        .map_err(|e| Error::database(e.to_string()))?;

    let notas = stmt
        .query_map(rusqlite::named_params! { ":status": status }, Nota::from_row)
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(notas)
}

/// Count all notes.
pub fn count_notas(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM nota", [], |row| row.get(0))
        .map_err(|e| Error::database(e.to_string()))
}

/// Set a note's status.
pub fn update_status(conn: &Connection, id: i64, status: i64) -> Result<()> {
    let changed = conn
        .execute(
            "UPDATE nota SET status = :status WHERE id = :id",
            rusqlite::named_params! { ":status": status, ":id": id },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if changed == 0 {
        return Err(Error::not_found(format!("nota {id}")));
    }
    Ok(())
}

/// Replace a note's content.
pub fn update_conteudo(conn: &Connection, id: i64, conteudo: &str) -> Result<()> {
    if conteudo.is_empty() {
        return Err(Error::invalid_input("Note content cannot be empty"));
    }

    let changed = conn
        .execute(
            "UPDATE nota SET conteudo = :conteudo WHERE id = :id",
            rusqlite::named_params! { ":conteudo": conteudo, ":id": id },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if changed == 0 {
        return Err(Error::not_found(format!("nota {id}")));
    }
    Ok(())
}

/// Delete a note.
pub fn delete_nota(conn: &Connection, id: i64) -> Result<()> {
    let changed = conn
        .execute(
            "DELETE FROM nota WHERE id = :id",
            rusqlite::named_params! { ":id": id },
        )
        .map_err(|e| Error::database(e.to_string()))?;

    if changed == 0 {
        return Err(Error::not_found(format!("nota {id}")));
    }
    Ok(())
}
