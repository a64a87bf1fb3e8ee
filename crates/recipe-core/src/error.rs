//! Error types for the recipe builder library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Step;

/// Comprehensive error type for all recipe builder operations.
#[derive(Error, Debug)]
pub enum RecipeError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// No recipe exists for the requested ID
    #[error("Recipe with ID '{id}' not found")]
    RecipeNotFound { id: String },
    /// The form is waiting on a fetch and rejects interaction
    #[error("The form is still loading")]
    Busy,
    /// An editor operation was attempted while another step is active
    #[error("Operation requires the {expected} step, but the {actual} step is active")]
    WrongStep { expected: Step, actual: Step },
    /// Removing the only remaining ingredient row
    #[error("At least one ingredient row is required")]
    LastIngredient,
    /// Submission attempted before reaching the final step
    #[error("Recipes can only be submitted from the {} step", Step::LAST)]
    NotFinalStep,
    /// Retry requested although the last fetch did not fail
    #[error("There is no failed fetch to retry")]
    FetchNotFailed,
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> RecipeError {
        RecipeError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl RecipeError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a database error with a message and its rusqlite source.
    pub fn database(message: impl Into<String>, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RecipeError::database(message, e))
    }
}

/// Result type alias for recipe builder operations
pub type Result<T> = std::result::Result<T, RecipeError>;
