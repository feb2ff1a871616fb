//! Database query modules.
//!
//! - notas: CRUD over the `nota` table

pub mod notas;
