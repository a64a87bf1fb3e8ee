//! The wizard controller owning canonical form data.

use jiff::Timestamp;
use log::{info, warn};

use super::{
    ActiveEditor, DetailsEditor, FormSink, IngredientsEditor, InstructionsEditor,
};
use crate::{
    backend::RecipeBackend,
    error::{RecipeError, Result},
    models::{DraftRecord, IngredientField, Loading, RecipeFormData, RecipePatch, Step},
    settings::{Settings, Timings},
    store::DraftStore,
};

/// Whether the form creates a new recipe or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

impl FormMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Edit { .. } => "Edit",
        }
    }
}

/// Where the application should go after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Back to the recipe listing
    Listing,
}

/// Offer to restore a draft found when the form was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftPrompt {
    pub last_saved: Timestamp,
}

/// An outstanding edit-mode fetch.
///
/// The ticket is handed back to [`RecipeBuilder::resolve_fetch`], which
/// consumes it, so each fetch resolves exactly once.
#[derive(Debug)]
#[must_use = "a pending fetch leaves the form loading until it is resolved"]
pub struct PendingFetch {
    id: String,
}

impl PendingFetch {
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Three-step recipe wizard.
///
/// The builder owns the canonical [`RecipeFormData`] for one editing
/// session and mounts the editor of the current step. While an edit-mode
/// fetch is pending ([`Loading::Validating`]) no editor is mounted and every
/// action fails with [`RecipeError::Busy`].
pub struct RecipeBuilder {
    store: DraftStore,
    timings: Timings,
    mode: FormMode,
    step: Step,
    loading: Loading,
    data: RecipeFormData,
    editor: Option<ActiveEditor>,
    draft_prompt: Option<DraftPrompt>,
    backs_draft: bool,
}

impl RecipeBuilder {
    /// Open the form for a new recipe.
    pub fn open(store: DraftStore, settings: &Settings) -> Self {
        let mut builder = Self::mounted(store, settings, FormMode::Create);
        builder.mount_editor();
        builder
    }

    /// Open the form for an existing recipe. The form stays loading until
    /// the returned ticket is resolved.
    pub fn open_for_edit(
        store: DraftStore,
        settings: &Settings,
        id: impl Into<String>,
    ) -> (Self, PendingFetch) {
        let id = id.into();
        let mut builder = Self::mounted(store, settings, FormMode::Edit { id: id.clone() });
        builder.loading = Loading::Validating;
        (builder, PendingFetch { id })
    }

    fn mounted(store: DraftStore, settings: &Settings, mode: FormMode) -> Self {
        let draft_prompt = store.detect_draft().map(|record| DraftPrompt {
            last_saved: record.last_saved,
        });
        Self {
            store,
            timings: settings.timings,
            mode,
            step: Step::FIRST,
            loading: Loading::Idle,
            data: RecipeFormData::default(),
            editor: None,
            draft_prompt,
            backs_draft: false,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn loading(&self) -> &Loading {
        &self.loading
    }

    pub fn data(&self) -> &RecipeFormData {
        &self.data
    }

    /// The mounted editor; `None` while loading.
    pub fn editor(&self) -> Option<&ActiveEditor> {
        self.editor.as_ref()
    }

    pub fn details(&self) -> Option<&DetailsEditor> {
        match &self.editor {
            Some(ActiveEditor::Details(editor)) => Some(editor),
            _ => None,
        }
    }

    pub fn ingredients(&self) -> Option<&IngredientsEditor> {
        match &self.editor {
            Some(ActiveEditor::Ingredients(editor)) => Some(editor),
            _ => None,
        }
    }

    pub fn instructions(&self) -> Option<&InstructionsEditor> {
        match &self.editor {
            Some(ActiveEditor::Instructions(editor)) => Some(editor),
            _ => None,
        }
    }

    pub fn draft_prompt(&self) -> Option<&DraftPrompt> {
        self.draft_prompt.as_ref()
    }

    pub fn can_advance(&self) -> bool {
        !self.loading.is_validating() && self.step.next().is_some()
    }

    pub fn can_retreat(&self) -> bool {
        !self.loading.is_validating() && self.step.previous().is_some()
    }

    pub fn can_save(&self) -> bool {
        !self.loading.is_validating()
    }

    pub fn can_submit(&self) -> bool {
        !self.loading.is_validating() && self.step == Step::LAST
    }

    /// Move to the next step. Does nothing on the last step.
    pub fn advance(&mut self) -> Result<Step> {
        self.ensure_idle()?;
        if let Some(next) = self.step.next() {
            self.step = next;
            self.mount_editor();
        }
        Ok(self.step)
    }

    /// Move to the previous step. Does nothing on the first step.
    pub fn retreat(&mut self) -> Result<Step> {
        self.ensure_idle()?;
        if let Some(previous) = self.step.previous() {
            self.step = previous;
            self.mount_editor();
        }
        Ok(self.step)
    }

    /// Save the current form as the draft and mark the session as drafting.
    pub fn save_draft(&mut self) -> Result<DraftRecord> {
        self.ensure_idle()?;
        let record = self.store.save_draft(&self.data)?;
        self.backs_draft = true;
        info!("Draft saved at {}", record.last_saved);
        Ok(record)
    }

    /// Merge the stored draft into the form.
    ///
    /// Returns whether a draft was loaded. A missing or unreadable draft
    /// loads nothing. The draft prompt is dismissed either way.
    pub fn load_draft(&mut self) -> Result<bool> {
        self.ensure_idle()?;
        self.draft_prompt = None;

        let patch = self
            .store
            .read_draft()
            .and_then(|record| record.map(DraftRecord::into_patch).transpose());
        match patch {
            Ok(Some(patch)) => {
                self.merge_external(patch);
                self.backs_draft = true;
                info!("Draft loaded");
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => {
                warn!("Could not load draft: {e}");
                Ok(false)
            }
        }
    }

    /// Hide the draft prompt without loading.
    pub fn dismiss_draft(&mut self) {
        self.draft_prompt = None;
    }

    /// Resolve an edit-mode fetch with its outcome.
    ///
    /// On success the result is merged and editing starts. On failure the
    /// form moves to [`Loading::Failed`], from where
    /// [`retry_fetch`](Self::retry_fetch) can start over, and the error is
    /// returned.
    ///
    /// A ticket this form is not waiting on is rejected with
    /// [`RecipeError::InvalidInput`] and leaves the form untouched.
    pub fn resolve_fetch(&mut self, pending: PendingFetch, result: Result<RecipePatch>) -> Result<()> {
        match &self.mode {
            FormMode::Edit { id } if self.loading.is_validating() && *id == pending.id => {}
            _ => {
                return Err(RecipeError::invalid_input("fetch").with_reason(format!(
                    "no fetch for recipe '{}' is pending on this form",
                    pending.id
                )));
            }
        }

        let outcome = match result {
            Ok(patch) => {
                info!("Loaded recipe '{}' for editing", pending.id);
                self.loading = Loading::Idle;
                self.data.merge(patch);
                Ok(())
            }
            Err(e) => {
                warn!("Fetching recipe '{}' failed: {e}", pending.id);
                self.loading = Loading::Failed {
                    message: e.to_string(),
                };
                Err(e)
            }
        };
        self.mount_editor();
        outcome
    }

    /// Fetch the recipe named by `pending` from `backend` and resolve it.
    pub async fn load_recipe<B: RecipeBackend>(
        &mut self,
        backend: &B,
        pending: PendingFetch,
    ) -> Result<()> {
        let result = backend.fetch_recipe(pending.id()).await;
        self.resolve_fetch(pending, result)
    }

    /// Start a new fetch after the previous one failed.
    pub fn retry_fetch(&mut self) -> Result<PendingFetch> {
        let FormMode::Edit { id } = &self.mode else {
            return Err(RecipeError::FetchNotFailed);
        };
        if !matches!(self.loading, Loading::Failed { .. }) {
            return Err(RecipeError::FetchNotFailed);
        }
        let pending = PendingFetch { id: id.clone() };
        self.loading = Loading::Validating;
        self.editor = None;
        Ok(pending)
    }

    /// Submit the recipe and return to the listing.
    ///
    /// The session flag is cleared before the round trip. The draft backing
    /// this session is removed once the submission succeeds.
    pub async fn submit<B: RecipeBackend>(&mut self, backend: &B) -> Result<Navigation> {
        self.ensure_idle()?;
        if self.step != Step::LAST {
            return Err(RecipeError::NotFinalStep);
        }

        self.store.clear_session_status()?;
        info!("Submitting in {} mode", self.mode.as_str());
        backend.submit_recipe(&self.data).await?;

        if self.backs_draft {
            self.store.clear_draft()?;
            self.backs_draft = false;
        }
        Ok(Navigation::Listing)
    }

    pub fn set_title(&mut self, value: &str) -> Result<()> {
        let (editor, mut sink) = self.details_editor()?;
        editor.set_title(value, &mut sink);
        Ok(())
    }

    pub fn set_description(&mut self, value: &str) -> Result<()> {
        let (editor, mut sink) = self.details_editor()?;
        editor.set_description(value, &mut sink);
        Ok(())
    }

    pub fn set_calories(&mut self, value: &str) -> Result<()> {
        let (editor, mut sink) = self.details_editor()?;
        editor.set_calories(value, &mut sink);
        Ok(())
    }

    pub fn add_ingredient(&mut self) -> Result<()> {
        let (editor, mut sink) = self.ingredients_editor()?;
        editor.add(&mut sink);
        Ok(())
    }

    pub fn remove_ingredient(&mut self, index: usize) -> Result<()> {
        let (editor, mut sink) = self.ingredients_editor()?;
        editor.remove(index, &mut sink)
    }

    pub fn update_ingredient(
        &mut self,
        index: usize,
        field: IngredientField,
        value: &str,
    ) -> Result<()> {
        let (editor, mut sink) = self.ingredients_editor()?;
        editor.update(index, field, value, &mut sink)
    }

    pub fn add_instruction(&mut self) -> Result<()> {
        let (editor, mut sink) = self.instructions_editor()?;
        editor.add(&mut sink);
        Ok(())
    }

    pub fn edit_instruction(&mut self, index: usize, text: &str) -> Result<()> {
        let (editor, mut sink) = self.instructions_editor()?;
        editor.edit(index, text, &mut sink)
    }

    pub fn set_instruction_filter(&mut self, query: &str) -> Result<()> {
        let (editor, _) = self.instructions_editor()?;
        editor.set_filter(query);
        Ok(())
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.loading.is_validating() {
            Err(RecipeError::Busy)
        } else {
            Ok(())
        }
    }

    fn details_editor(&mut self) -> Result<(&mut DetailsEditor, FormSink<'_>)> {
        self.ensure_idle()?;
        let actual = self.step;
        match &mut self.editor {
            Some(ActiveEditor::Details(editor)) => Ok((editor, FormSink::new(&mut self.data))),
            _ => Err(RecipeError::WrongStep {
                expected: Step::Details,
                actual,
            }),
        }
    }

    fn ingredients_editor(&mut self) -> Result<(&mut IngredientsEditor, FormSink<'_>)> {
        self.ensure_idle()?;
        let actual = self.step;
        match &mut self.editor {
            Some(ActiveEditor::Ingredients(editor)) => {
                Ok((editor, FormSink::new(&mut self.data)))
            }
            _ => Err(RecipeError::WrongStep {
                expected: Step::Ingredients,
                actual,
            }),
        }
    }

    fn instructions_editor(&mut self) -> Result<(&mut InstructionsEditor, FormSink<'_>)> {
        self.ensure_idle()?;
        let actual = self.step;
        match &mut self.editor {
            Some(ActiveEditor::Instructions(editor)) => {
                Ok((editor, FormSink::new(&mut self.data)))
            }
            _ => Err(RecipeError::WrongStep {
                expected: Step::Instructions,
                actual,
            }),
        }
    }

    /// Replace the mounted editor with a fresh one for the current step.
    fn mount_editor(&mut self) {
        // Unmount first so pending timers of the old editor are cancelled
        self.editor = None;
        let mut sink = FormSink::new(&mut self.data);
        self.editor = Some(ActiveEditor::mount(self.step, &mut sink, &self.timings));
    }

    fn merge_external(&mut self, patch: RecipePatch) {
        self.data.merge(patch);
        if let Some(editor) = &mut self.editor {
            editor.sync_from(&mut FormSink::new(&mut self.data));
        }
    }
}
