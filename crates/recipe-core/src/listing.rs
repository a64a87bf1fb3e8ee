//! Recipe listing with search, tag filters and the create gate.
//!
//! The listing mirrors the session status flag: while a draft session is
//! open, creating another recipe is disabled. It picks up flag changes from
//! other tabs through [`RecipeListing::apply_event`].

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    error::Result,
    models::{NumberOrText, Recipe, SessionStatus},
    store::{DraftStore, StorageEvent, SESSION_STATUS_KEY},
};

/// Tags offered as filters.
pub const ALL_TAGS: [&str; 4] = ["Vegan", "Dessert", "Quick Meal", "Spicy"];

/// The offered tag matching `name`, ignoring case.
pub fn known_tag(name: &str) -> Option<&'static str> {
    ALL_TAGS
        .iter()
        .copied()
        .find(|tag| tag.eq_ignore_ascii_case(name.trim()))
}

/// Built-in catalog shown before any saved recipes.
pub fn mock_recipes() -> Vec<Recipe> {
    let recipe = |id: &str, title: &str, description: &str, calories: f64, tags: &[&str]| Recipe {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        total_calories: NumberOrText::Number(calories),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    };
    vec![
        recipe("1", "Classic Pasta Carbonara", "Creamy Italian pasta dish", 650.0, &[]),
        recipe("2", "Spicy Vegan Curry", "Healthy and fresh", 320.0, &["Vegan", "Spicy"]),
        recipe("3", "Chocolate Lava Cake", "A decadent dessert", 480.0, &["Dessert"]),
    ]
}

/// State of the listing view.
#[derive(Debug, Clone, Default)]
pub struct RecipeListing {
    recipes: Vec<Recipe>,
    loading: bool,
    search_query: String,
    selected_tags: Vec<String>,
    create_disabled: bool,
}

impl RecipeListing {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Load the catalog: built-in recipes followed by saved ones.
    pub async fn fetch(&mut self, store: &DraftStore, latency: Duration) -> Result<()> {
        self.loading = true;
        sleep(latency).await;

        let mut recipes = mock_recipes();
        recipes.extend(store.saved_recipes()?);
        self.recipes = recipes;
        self.loading = false;
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    /// Select `tag`, or deselect it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(position) = self.selected_tags.iter().position(|t| t == tag) {
            self.selected_tags.remove(position);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    /// Recipes matching the search query and any selected tag.
    pub fn displayed(&self) -> Vec<&Recipe> {
        self.recipes
            .iter()
            .filter(|recipe| recipe.matches_query(&self.search_query))
            .filter(|recipe| recipe.matches_any_tag(&self.selected_tags))
            .collect()
    }

    pub fn is_create_disabled(&self) -> bool {
        self.create_disabled
    }

    /// Read the session flag directly from storage.
    pub fn sync_with_session_status(&mut self, store: &DraftStore) -> Result<()> {
        self.create_disabled = store.session_status()? == Some(SessionStatus::Drafting);
        Ok(())
    }

    /// Follow a change published by another tab. Returns whether the
    /// create gate changed.
    pub fn apply_event(&mut self, event: &StorageEvent) -> bool {
        if event.key != SESSION_STATUS_KEY {
            return false;
        }
        let disabled = event.new_value.as_deref() == Some(SessionStatus::Drafting.as_str());
        let changed = disabled != self.create_disabled;
        self.create_disabled = disabled;
        changed
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::models::RecipeFormData;

    fn titles(listing: &RecipeListing) -> Vec<&str> {
        listing
            .displayed()
            .iter()
            .map(|recipe| recipe.title.as_str())
            .collect()
    }

    async fn loaded() -> (TempDir, DraftStore, RecipeListing) {
        let temp_dir = TempDir::new().unwrap();
        let store = DraftStore::open(temp_dir.path().join("store.db")).unwrap();
        let mut listing = RecipeListing::new();
        listing.fetch(&store, Duration::ZERO).await.unwrap();
        (temp_dir, store, listing)
    }

    #[test]
    fn test_known_tag_ignores_case() {
        assert_eq!(known_tag("quick meal"), Some("Quick Meal"));
        assert_eq!(known_tag(" VEGAN "), Some("Vegan"));
        assert_eq!(known_tag("Keto"), None);
    }

    #[tokio::test]
    async fn test_fetch_includes_saved_recipes() {
        let temp_dir = TempDir::new().unwrap();
        let store = DraftStore::open(temp_dir.path().join("store.db")).unwrap();
        let saved = RecipeFormData {
            title: "Banana Bread".to_string(),
            ..RecipeFormData::default()
        };
        store
            .append_saved_recipe(Recipe::from_form("user-1", &saved))
            .unwrap();

        let mut listing = RecipeListing::new();
        assert!(listing.is_loading());
        listing.fetch(&store, Duration::ZERO).await.unwrap();

        assert!(!listing.is_loading());
        assert_eq!(listing.recipes().len(), 4);
        assert_eq!(listing.recipes()[3].title, "Banana Bread");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let (_temp_dir, _store, mut listing) = loaded().await;

        listing.set_search("CURRY");
        assert_eq!(titles(&listing), vec!["Spicy Vegan Curry"]);

        listing.set_search("");
        assert_eq!(titles(&listing).len(), 3);
    }

    #[tokio::test]
    async fn test_tags_match_any() {
        let (_temp_dir, _store, mut listing) = loaded().await;

        listing.toggle_tag("Dessert");
        listing.toggle_tag("Spicy");
        assert_eq!(
            titles(&listing),
            vec!["Spicy Vegan Curry", "Chocolate Lava Cake"]
        );

        listing.toggle_tag("Spicy");
        assert_eq!(titles(&listing), vec!["Chocolate Lava Cake"]);

        listing.set_search("pasta");
        assert!(titles(&listing).is_empty());
    }

    #[tokio::test]
    async fn test_create_gate_follows_other_tab() {
        let (_temp_dir, store, mut listing) = loaded().await;
        let builder_tab = store.connect_tab().unwrap();
        let mut watcher = store.subscribe();

        listing.sync_with_session_status(&store).unwrap();
        assert!(!listing.is_create_disabled());

        builder_tab.save_draft(&RecipeFormData::default()).unwrap();
        let mut changed = false;
        while let Some(event) = watcher.try_recv() {
            changed |= listing.apply_event(&event);
        }
        assert!(changed);
        assert!(listing.is_create_disabled());

        builder_tab.clear_session_status().unwrap();
        let event = watcher.recv().await.unwrap();
        assert!(listing.apply_event(&event));
        assert!(!listing.is_create_disabled());
    }
}
