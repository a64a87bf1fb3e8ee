//! Recipe backend used by the form controller.
//!
//! [`RecipeBackend`] is the seam where a real network client would plug in.
//! [`MockBackend`] simulates one with fixed latency and a small dataset.

use std::{future::Future, time::Duration};

use jiff::Timestamp;
use log::info;
use tokio::time::sleep;

use crate::{
    error::{RecipeError, Result},
    models::{Recipe, RecipeFormData, RecipePatch},
    settings::Timings,
    store::DraftStore,
};

/// Remote operations the form depends on.
pub trait RecipeBackend {
    /// Fetch a recipe for editing. The result is merged into the form.
    fn fetch_recipe(&self, id: &str) -> impl Future<Output = Result<RecipePatch>>;

    /// Submit a finished recipe.
    fn submit_recipe(&self, data: &RecipeFormData) -> impl Future<Output = Result<()>>;
}

/// Recipes known to [`MockBackend::fetch_recipe`]: id, title, description,
/// calories.
const MOCK_RECIPES: [(&str, &str, &str, &str); 2] = [
    (
        "1",
        "Pasta Carbonara from API",
        "A fetched description",
        "650",
    ),
    (
        "feat-1",
        "Chef's Curry from API",
        "Fetched spicy surprise!",
        "720",
    ),
];

/// Simulated backend with fixed latency.
///
/// When given a store, each submitted recipe is appended to the saved
/// recipes so the listing shows it.
pub struct MockBackend {
    fetch_latency: Duration,
    submit_latency: Duration,
    store: Option<DraftStore>,
}

impl MockBackend {
    pub fn new(timings: &Timings) -> Self {
        Self {
            fetch_latency: timings.fetch_latency,
            submit_latency: timings.submit_latency,
            store: None,
        }
    }

    /// Record submissions in `store`.
    pub fn with_store(mut self, store: DraftStore) -> Self {
        self.store = Some(store);
        self
    }
}

impl RecipeBackend for MockBackend {
    async fn fetch_recipe(&self, id: &str) -> Result<RecipePatch> {
        sleep(self.fetch_latency).await;

        let (_, title, description, calories) = MOCK_RECIPES
            .iter()
            .find(|(known, ..)| *known == id)
            .ok_or_else(|| RecipeError::RecipeNotFound { id: id.to_string() })?;

        Ok(RecipePatch {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            calories: Some(calories.to_string()),
            ..RecipePatch::default()
        })
    }

    async fn submit_recipe(&self, data: &RecipeFormData) -> Result<()> {
        sleep(self.submit_latency).await;

        if let Some(store) = &self.store {
            let id = format!("user-{}", Timestamp::now().as_millisecond());
            store.append_saved_recipe(Recipe::from_form(id, data))?;
        }
        info!("Recipe '{}' submitted", data.title);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fetch_known_recipe() {
        let backend = MockBackend::new(&Timings::default());

        let patch = backend.fetch_recipe("feat-1").await.unwrap();
        assert_eq!(patch.title.as_deref(), Some("Chef's Curry from API"));
        assert_eq!(patch.calories.as_deref(), Some("720"));
        assert_eq!(patch.ingredients, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_unknown_recipe() {
        let backend = MockBackend::new(&Timings::default());

        let err = backend.fetch_recipe("42").await.unwrap_err();
        assert!(matches!(err, RecipeError::RecipeNotFound { id } if id == "42"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_takes_configured_latency() {
        let backend = MockBackend::new(&Timings::default());
        let started = tokio::time::Instant::now();

        backend.fetch_recipe("1").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_records_recipe() {
        let temp_dir = TempDir::new().unwrap();
        let store = DraftStore::open(temp_dir.path().join("store.db")).unwrap();
        let backend = MockBackend::new(&Timings::default()).with_store(store.connect_tab().unwrap());

        let data = RecipeFormData {
            title: "Shakshuka".to_string(),
            calories: "380".to_string(),
            ..RecipeFormData::default()
        };
        backend.submit_recipe(&data).await.unwrap();

        let saved = store.saved_recipes().unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "Shakshuka");
        assert_eq!(
            saved[0].total_calories,
            crate::models::NumberOrText::Number(380.0)
        );
    }
}
