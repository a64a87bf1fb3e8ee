//! Multi-step recipe form: the controller and its step editors.
//!
//! The [`RecipeBuilder`] owns the canonical [`RecipeFormData`] and mounts one
//! step editor at a time. Editors keep their own buffers (debounced fields,
//! validation state, filters) and push changes back through a [`FormSink`].
//!
//! ```text
//! ┌─────────────────┐  updater  ┌─────────────────┐  snapshot  ┌─────────────────┐
//! │   Step Editor   │──────────▶│  RecipeBuilder  │───────────▶│   DraftStore    │
//! │ (local buffer)  │◀──────────│ (canonical data)│◀───────────│  (local disk)   │
//! └─────────────────┘   seed    └─────────────────┘   detect   └─────────────────┘
//! ```
//!
//! ## Update Contract
//!
//! Editors never hold the canonical data. Every change is an updater closure
//! handed to [`FormSink::apply`], which runs it against the latest canonical
//! state. When canonical data changes from outside (loading a draft, a
//! finished fetch) the controller calls the active editor's `sync_from` so
//! its buffer follows.
//!
//! ## Submodules
//!
//! - [`controller`]: The wizard controller, draft lifecycle and submission
//! - [`details`]: Title, description and calories with debounced title check
//! - [`ingredients`]: Ingredient rows with per-row quantity validation
//! - [`instructions`]: Ordered steps with a display filter and typing indicator
//! - [`timer`]: Cancellable debounce timer
//!
//! # Example
//!
//! ```rust
//! use recipe_core::{DraftStore, RecipeBuilder, Settings, Step};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = DraftStore::open("recipes.db")?;
//! let mut builder = RecipeBuilder::open(store, &Settings::default());
//!
//! builder.set_title("Apple Pie")?;
//! builder.advance()?;
//! builder.update_ingredient(0, recipe_core::IngredientField::Name, "Apples")?;
//! builder.advance()?;
//! assert_eq!(builder.step(), Step::Instructions);
//!
//! builder.save_draft()?;
//! # Ok(())
//! # }
//! ```

use crate::{
    models::{RecipeFormData, Step},
    settings::Timings,
};

pub mod controller;
pub mod details;
pub mod ingredients;
pub mod instructions;
pub mod timer;


pub use controller::{DraftPrompt, FormMode, Navigation, PendingFetch, RecipeBuilder};
pub use details::{DetailsEditor, DetailsFields, TitleCheck};
pub use ingredients::IngredientsEditor;
pub use instructions::{InstructionsEditor, VisibleStep};
pub use timer::DebounceTimer;

/// Write access to the canonical form data, handed to editors.
pub struct FormSink<'a> {
    data: &'a mut RecipeFormData,
    updates: usize,
}

impl<'a> FormSink<'a> {
    pub fn new(data: &'a mut RecipeFormData) -> Self {
        Self { data, updates: 0 }
    }

    /// Latest canonical state.
    pub fn current(&self) -> &RecipeFormData {
        self.data
    }

    /// Run `updater` against the latest canonical state.
    pub fn apply(&mut self, updater: impl FnOnce(&mut RecipeFormData)) {
        updater(self.data);
        self.updates += 1;
    }

    /// Number of updates applied through this sink.
    pub fn updates(&self) -> usize {
        self.updates
    }
}

/// The editor mounted for the current step.
pub enum ActiveEditor {
    Details(DetailsEditor),
    Ingredients(IngredientsEditor),
    Instructions(InstructionsEditor),
}

impl ActiveEditor {
    /// Mount the editor for `step`, seeded from the sink's canonical data.
    pub fn mount(step: Step, sink: &mut FormSink<'_>, timings: &Timings) -> Self {
        match step {
            Step::Details => {
                ActiveEditor::Details(DetailsEditor::mount(sink, timings.title_debounce))
            }
            Step::Ingredients => ActiveEditor::Ingredients(IngredientsEditor::mount(sink)),
            Step::Instructions => {
                ActiveEditor::Instructions(InstructionsEditor::mount(sink, timings.typing_indicator))
            }
        }
    }

    pub fn step(&self) -> Step {
        match self {
            ActiveEditor::Details(_) => Step::Details,
            ActiveEditor::Ingredients(_) => Step::Ingredients,
            ActiveEditor::Instructions(_) => Step::Instructions,
        }
    }

    /// Re-align the editor's buffer after an external canonical change.
    pub fn sync_from(&mut self, sink: &mut FormSink<'_>) {
        match self {
            ActiveEditor::Details(editor) => editor.sync_from(sink),
            ActiveEditor::Ingredients(editor) => editor.sync_from(sink),
            ActiveEditor::Instructions(editor) => editor.sync_from(sink),
        }
    }
}
