//! Key-value reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM storage WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const DELETE_VALUE_SQL: &str = "DELETE FROM storage WHERE key = ?1";

impl super::Database {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read storage value")
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value, now])
            .db_context("Failed to write storage value")?;
        Ok(())
    }

    /// Removes `key`. Returns whether a value was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let deleted = self
            .connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to remove storage value")?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::super::Database;

    fn open() -> (TempDir, Database) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db = Database::new(temp_dir.path().join("kv.db")).expect("Failed to open database");
        (temp_dir, db)
    }

    #[test]
    fn test_set_get_overwrite() {
        let (_temp_dir, db) = open();

        assert_eq!(db.get("k").unwrap(), None);
        db.set("k", "one").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("one"));
        db.set("k", "two").unwrap();
        assert_eq!(db.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, db) = open();

        db.set("k", "v").unwrap();
        assert!(db.remove("k").unwrap());
        assert!(!db.remove("k").unwrap());
        assert_eq!(db.get("k").unwrap(), None);
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("kv.db");

        Database::new(&path).unwrap().set("k", "v").unwrap();
        let reopened = Database::new(&path).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }
}
