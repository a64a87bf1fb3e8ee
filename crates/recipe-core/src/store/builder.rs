//! Builder for opening the draft store.

use std::path::{Path, PathBuf};

use super::DraftStore;
use crate::error::{RecipeError, Result};

/// Builder for creating and configuring [`DraftStore`] instances.
#[derive(Debug, Clone)]
pub struct DraftStoreBuilder {
    database_path: Option<PathBuf>,
}

impl DraftStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/recipe-builder/recipes.db` or
    /// `~/.local/share/recipe-builder/recipes.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Opens the store, creating the database file and its parent
    /// directories when missing.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::Configuration` if the path names a directory.
    /// Returns `RecipeError::FileSystem` if the parent directory cannot be
    /// created.
    /// Returns `RecipeError::Database` if database initialization fails.
    pub fn build(self) -> Result<DraftStore> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if db_path.is_dir() {
            return Err(RecipeError::Configuration {
                message: format!("Database path '{}' is a directory", db_path.display()),
            });
        }

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RecipeError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        DraftStore::open(db_path)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("recipe-builder")
            .place_data_file("recipes.db")
            .map_err(|e| RecipeError::XdgDirectory(e.to_string()))
    }
}

impl Default for DraftStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
