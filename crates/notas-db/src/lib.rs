//! Notas-DB: Embedded database engine, seed builder, and connection lifecycle
//!
//! This crate provides database functionality for notas using an in-memory
//! SQLite engine (rusqlite) whose full state travels as a byte image.
//!
//! # Modules
//!
//! - `engine` - In-memory engine with byte-image import and export
//! - `encoding` - Text-safe encoding of database images
//! - `migrations` - Seed database builder
//! - `storage` - Private storage capability
//! - `assets` - Bundled seed asset sources
//! - `connection` - Runtime connection lifecycle
//! - `schema` - Static declaration of the `nota` table
//! - `models` - Rust models matching the database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```no_run
//! use notas_db::assets::DirAssets;
//! use notas_db::connection::ConnectionManager;
//! use notas_db::queries::notas;
//! use notas_db::storage::DataDir;
//!
//! let storage = DataDir::open_default().unwrap();
//! let assets = DirAssets::new("./static");
//! let mut manager = ConnectionManager::new("mydatabase.db", storage, assets);
//!
//! let db = manager.initialize().unwrap();
//! notas::create_nota(db, "comprar pão").unwrap();
//! manager.save().unwrap();
//! ```

pub mod assets;
pub mod connection;
pub mod encoding;
pub mod engine;
pub mod migrations;
pub mod models;
pub mod queries;
pub mod schema;
pub mod storage;
