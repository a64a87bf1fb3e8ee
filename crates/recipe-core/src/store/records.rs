//! Typed records kept in the draft store.

use jiff::Timestamp;
use log::{debug, warn};

use super::{DraftStore, DRAFT_KEY, SAVED_RECIPES_KEY, SESSION_STATUS_KEY};
use crate::{
    error::Result,
    models::{DraftRecord, Recipe, RecipeFormData, SessionStatus},
};

impl DraftStore {
    /// Saves `data` as the draft and marks the session as drafting.
    pub fn save_draft(&self, data: &RecipeFormData) -> Result<DraftRecord> {
        let record = DraftRecord::capture(data, Timestamp::now())?;
        self.set(DRAFT_KEY, &serde_json::to_string(&record)?)?;
        self.set_session_status(SessionStatus::Drafting)?;
        debug!("Saved draft at {}", record.last_saved);
        Ok(record)
    }

    /// Reads and parses the stored draft.
    pub fn read_draft(&self) -> Result<Option<DraftRecord>> {
        match self.get(DRAFT_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Like [`read_draft`](Self::read_draft), but any failure counts as no
    /// draft.
    pub fn detect_draft(&self) -> Option<DraftRecord> {
        match self.read_draft() {
            Ok(record) => record,
            Err(e) => {
                warn!("Ignoring unreadable draft: {e}");
                None
            }
        }
    }

    pub fn clear_draft(&self) -> Result<()> {
        self.remove(DRAFT_KEY)
    }

    /// Current session status. Unknown tokens read as no status.
    pub fn session_status(&self) -> Result<Option<SessionStatus>> {
        let Some(raw) = self.get(SESSION_STATUS_KEY)? else {
            return Ok(None);
        };
        match raw.parse::<SessionStatus>() {
            Ok(status) => Ok(Some(status)),
            Err(e) => {
                warn!("{e}");
                Ok(None)
            }
        }
    }

    pub fn set_session_status(&self, status: SessionStatus) -> Result<()> {
        self.set(SESSION_STATUS_KEY, status.as_str())
    }

    pub fn clear_session_status(&self) -> Result<()> {
        self.remove(SESSION_STATUS_KEY)
    }

    /// Recipes submitted from this machine. A malformed list reads as empty.
    pub fn saved_recipes(&self) -> Result<Vec<Recipe>> {
        let Some(raw) = self.get(SAVED_RECIPES_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(recipes) => Ok(recipes),
            Err(e) => {
                warn!("Ignoring unreadable saved recipes: {e}");
                Ok(Vec::new())
            }
        }
    }

    pub fn append_saved_recipe(&self, recipe: Recipe) -> Result<()> {
        let mut recipes = self.saved_recipes()?;
        recipes.push(recipe);
        self.set(SAVED_RECIPES_KEY, &serde_json::to_string(&recipes)?)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::{Ingredient, InstructionStep, NumberOrText};

    fn open() -> (TempDir, DraftStore) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = DraftStore::open(temp_dir.path().join("store.db")).expect("open store");
        (temp_dir, store)
    }

    #[test]
    fn test_save_sets_drafting_flag() {
        let (_temp_dir, store) = open();

        assert_eq!(store.session_status().unwrap(), None);
        store.save_draft(&RecipeFormData::default()).unwrap();
        assert_eq!(
            store.session_status().unwrap(),
            Some(SessionStatus::Drafting)
        );
        assert_eq!(
            store.get(SESSION_STATUS_KEY).unwrap().as_deref(),
            Some("drafting")
        );
    }

    #[test]
    fn test_saved_draft_reads_back() {
        let (_temp_dir, store) = open();
        let data = RecipeFormData {
            title: "Pancakes".to_string(),
            ingredients: vec![Ingredient {
                name: "Milk".to_string(),
                quantity: NumberOrText::Text("1.5".to_string()),
                unit: "cup".to_string(),
            }],
            instructions: vec![InstructionStep::new("Whisk"), InstructionStep::new("Fry")],
            ..RecipeFormData::default()
        };

        let saved = store.save_draft(&data).unwrap();
        let read = store.read_draft().unwrap().expect("draft present");
        assert_eq!(read, saved);
        assert_eq!(read.ingredients().unwrap(), data.ingredients);
    }

    #[test]
    fn test_detect_treats_garbage_as_absent() {
        let (_temp_dir, store) = open();

        store.set(DRAFT_KEY, "{ definitely not a draft").unwrap();
        assert!(store.read_draft().is_err());
        assert_eq!(store.detect_draft(), None);
    }

    #[test]
    fn test_unknown_status_token() {
        let (_temp_dir, store) = open();
        store.set(SESSION_STATUS_KEY, "idle").unwrap();
        assert_eq!(store.session_status().unwrap(), None);
    }

    #[test]
    fn test_saved_recipes_append() {
        let (_temp_dir, store) = open();
        assert!(store.saved_recipes().unwrap().is_empty());

        let recipe = Recipe::from_form("user-1", &RecipeFormData::default());
        store.append_saved_recipe(recipe.clone()).unwrap();
        store.append_saved_recipe(recipe).unwrap();
        assert_eq!(store.saved_recipes().unwrap().len(), 2);

        store.set(SAVED_RECIPES_KEY, "oops").unwrap();
        assert!(store.saved_recipes().unwrap().is_empty());
    }
}
