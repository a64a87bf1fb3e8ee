//! Data models for recipes, drafts and wizard state.
//!
//! This module contains the domain models shared by the draft store, the
//! step editors and the form controller. Display implementations for these
//! models live in [`crate::display::models`] so the data structures stay
//! free of presentation logic.
//!
//! # Serialized Layout
//!
//! The models serialize to a stable JSON layout, so stored drafts stay
//! readable across releases:
//!
//! - [`RecipeFormData`] is the canonical in-progress recipe
//! - [`DraftRecord`] is the persisted draft, with the ingredient list nested
//!   as a JSON string and a `lastSaved` timestamp
//! - [`Recipe`] is the listing summary kept under `savedRecipes`
//!
//! # Examples
//!
//! ```rust
//! use recipe_core::models::{Ingredient, NumberOrText, RecipeFormData};
//!
//! let mut data = RecipeFormData::default();
//! data.ingredients.push(Ingredient {
//!     name: "Flour".to_string(),
//!     quantity: NumberOrText::Number(2.0),
//!     unit: "cup".to_string(),
//! });
//! assert!(data.ingredients[0].is_valid());
//! assert_eq!(data.calories, "0");
//! ```

pub mod catalog;
pub mod draft;
pub mod recipe;
pub mod status;
pub mod step;

// Re-export all public types at the models level
pub use catalog::Recipe;
pub use draft::DraftRecord;
pub use recipe::{
    AttachmentRef, Ingredient, IngredientField, InstructionStep, NumberOrText, RecipeFormData,
    RecipePatch,
};
pub use status::{Loading, SessionStatus};
pub use step::Step;
