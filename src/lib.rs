//! Notas - seed database builder and on-device note storage
//!
//! This library crate exposes configuration and runtime wiring for
//! integration testing.

pub mod config;
pub mod runtime;
