//! Display formatting for recipes, drafts and the wizard.
//!
//! Domain models implement [`std::fmt::Display`] directly (see
//! [`models`]); collections and operation outcomes get newtype wrappers so
//! the same data can be formatted for each context. All output is markdown,
//! rendered by the CLI's terminal renderer.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (RecipeList)
//! - [`results`]: Operation outcomes (DraftSaved, Submitted, SessionStatusView)
//! - [`wizard`]: The wizard screen for a [`crate::RecipeBuilder`]
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod wizard;

pub use collections::RecipeList;
pub use datetime::LocalDateTime;
pub use results::{DraftSaved, SessionStatusView, Submitted};
pub use wizard::WizardView;
