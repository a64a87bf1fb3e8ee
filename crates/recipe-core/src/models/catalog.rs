//! Recipe summaries shown in the listing.

use serde::{Deserialize, Serialize};

use super::{NumberOrText, RecipeFormData};

/// A recipe as it appears in the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub total_calories: NumberOrText,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recipe {
    /// Summarize a submitted form under the given ID.
    pub fn from_form(id: impl Into<String>, data: &RecipeFormData) -> Self {
        let calories = NumberOrText::Text(data.calories.clone());
        Self {
            id: id.into(),
            title: data.title.clone(),
            description: data.description.clone(),
            total_calories: calories
                .as_number()
                .map(NumberOrText::Number)
                .unwrap_or(calories),
            tags: Vec::new(),
        }
    }

    /// Case-insensitive substring match against the title. An empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        query.is_empty() || self.title.to_lowercase().contains(&query.to_lowercase())
    }

    /// True when no tags are selected or the recipe carries any of them.
    pub fn matches_any_tag(&self, selected: &[String]) -> bool {
        selected.is_empty() || selected.iter().any(|tag| self.tags.contains(tag))
    }
}
