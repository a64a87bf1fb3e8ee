//! Core library for the recipe builder.
//!
//! This crate provides the multi-step recipe form, draft persistence with
//! cross-tab change notifications, a mock recipe backend and the recipe
//! listing.
//!
//! # Architecture
//!
//! - **Storage** ([`store`], [`db`]): A key-value table in SQLite standing in
//!   for browser local storage. Every handle is a tab; writes are published
//!   to the other tabs as [`StorageEvent`]s
//! - **Form** ([`form`]): The [`RecipeBuilder`] wizard and its step editors
//! - **Backend** ([`backend`]): The fetch and submit seam used by the form
//! - **Listing** ([`listing`]): Search, tag filters and the create gate
//! - **Display** ([`display`]): Markdown formatting for everything above
//!
//! # Quick Start
//!
//! ```rust
//! use recipe_core::{DraftStoreBuilder, MockBackend, Navigation, RecipeBuilder, Settings};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DraftStoreBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()?;
//! let settings = Settings::default();
//! let backend = MockBackend::new(&settings.timings).with_store(store.connect_tab()?);
//!
//! let mut builder = RecipeBuilder::open(store, &settings);
//! builder.set_title("Lemon Tart")?;
//! builder.advance()?;
//! builder.advance()?;
//! builder.edit_instruction(0, "Bake the shell blind")?;
//!
//! assert_eq!(builder.submit(&backend).await?, Navigation::Listing);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod db;
pub mod display;
pub mod error;
pub mod form;
pub mod listing;
pub mod models;
pub mod settings;
pub mod store;

// Re-export commonly used types
pub use backend::{MockBackend, RecipeBackend};
pub use db::Database;
pub use display::{DraftSaved, LocalDateTime, RecipeList, SessionStatusView, Submitted, WizardView};
pub use error::{RecipeError, Result};
pub use form::{
    ActiveEditor, DraftPrompt, FormMode, FormSink, Navigation, PendingFetch, RecipeBuilder,
};
pub use listing::RecipeListing;
pub use models::{
    DraftRecord, Ingredient, IngredientField, InstructionStep, Loading, NumberOrText, Recipe,
    RecipeFormData, RecipePatch, SessionStatus, Step,
};
pub use settings::{Settings, SettingsUpdate, Theme, Timings};
pub use store::{DraftStore, DraftStoreBuilder, StorageEvent, StorageWatcher};
