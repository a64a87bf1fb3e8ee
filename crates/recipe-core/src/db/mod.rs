//! SQLite-backed key-value storage.
//!
//! This module provides the durable layer under the draft store. Values are
//! plain strings addressed by string keys, the same contract a browser's
//! local storage offers, so typed records are serialized by the caller.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod kv_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
