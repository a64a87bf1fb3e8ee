//! Collection wrapper types for displaying groups of recipes.

use std::fmt;

use crate::models::Recipe;

/// Newtype wrapper for displaying a recipe listing.
///
/// Handles empty collections gracefully, which is what the listing shows
/// when a search or tag filter matches nothing.
///
/// # Examples
///
/// ```rust
/// use recipe_core::{display::RecipeList, listing::mock_recipes};
///
/// let recipes = mock_recipes();
/// let output = RecipeList(recipes.iter().collect()).to_string();
/// assert!(output.contains("Chocolate Lava Cake"));
///
/// assert_eq!(RecipeList(vec![]).to_string(), "No recipes found.\n");
/// ```
pub struct RecipeList<'a>(pub Vec<&'a Recipe>);

impl RecipeList<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for RecipeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes found.");
        }
        for (i, recipe) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{recipe}")?;
        }
        Ok(())
    }
}
