//! Recipe form model and its parts.

use serde::{Deserialize, Serialize};

/// Numeric value entered as a number or as raw text.
///
/// Form inputs hand over text while stored recipes carry JSON numbers, so
/// both shapes are accepted and only interpreted when validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum NumberOrText {
    Number(f64),
    Text(String),
}

impl NumberOrText {
    /// Interpret the value as a finite number.
    ///
    /// Text is trimmed before parsing; empty or unparseable text yields
    /// `None`, as do NaN and infinities.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            NumberOrText::Number(n) => *n,
            NumberOrText::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl Default for NumberOrText {
    fn default() -> Self {
        NumberOrText::Text(String::new())
    }
}

impl From<&str> for NumberOrText {
    fn from(value: &str) -> Self {
        NumberOrText::Text(value.to_string())
    }
}

impl From<f64> for NumberOrText {
    fn from(value: f64) -> Self {
        NumberOrText::Number(value)
    }
}

/// A single ingredient row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Ingredient {
    pub name: String,
    pub quantity: NumberOrText,
    pub unit: String,
}

impl Ingredient {
    /// Row shown when a recipe has no ingredients yet.
    pub fn starter() -> Self {
        Self {
            name: String::new(),
            quantity: NumberOrText::Number(1.0),
            unit: "cup".to_string(),
        }
    }

    /// A row is valid when its quantity is a number greater than zero.
    pub fn is_valid(&self) -> bool {
        self.quantity.as_number().is_some_and(|q| q > 0.0)
    }
}

/// Editable columns of an ingredient row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Quantity,
    Unit,
}

/// One numbered instruction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct InstructionStep {
    pub step: String,
}

impl InstructionStep {
    pub fn new(step: impl Into<String>) -> Self {
        Self { step: step.into() }
    }
}

/// Reference to an attached image. Uploading is handled elsewhere; the form
/// only carries the reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AttachmentRef(pub String);

/// Canonical state of the recipe being created or edited.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeFormData {
    pub title: String,
    pub description: String,
    /// Kept as text until submission.
    pub calories: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<InstructionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AttachmentRef>,
}

impl Default for RecipeFormData {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            calories: "0".to_string(),
            ingredients: Vec::new(),
            instructions: vec![InstructionStep::default()],
            image: None,
        }
    }
}

impl RecipeFormData {
    /// Merge a patch into this form, field by field.
    pub fn merge(&mut self, patch: RecipePatch) {
        patch.apply(self);
    }
}

/// Partial update merged into [`RecipeFormData`].
///
/// Fields that are `Some` replace the current value, `None` leaves it alone.
/// Both loaded drafts and fetched recipes arrive as patches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub calories: Option<String>,
    pub ingredients: Option<Vec<Ingredient>>,
    pub instructions: Option<Vec<InstructionStep>>,
    pub image: Option<AttachmentRef>,
}

impl RecipePatch {
    /// Apply all present fields to `data`.
    pub fn apply(self, data: &mut RecipeFormData) {
        if let Some(title) = self.title {
            data.title = title;
        }
        if let Some(description) = self.description {
            data.description = description;
        }
        if let Some(calories) = self.calories {
            data.calories = calories;
        }
        if let Some(ingredients) = self.ingredients {
            data.ingredients = ingredients;
        }
        if let Some(instructions) = self.instructions {
            data.instructions = instructions;
        }
        if let Some(image) = self.image {
            data.image = Some(image);
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<RecipeFormData> for RecipePatch {
    fn from(data: RecipeFormData) -> Self {
        Self {
            title: Some(data.title),
            description: Some(data.description),
            calories: Some(data.calories),
            ingredients: Some(data.ingredients),
            instructions: Some(data.instructions),
            image: data.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_validity() {
        let row = |q: NumberOrText| Ingredient {
            quantity: q,
            ..Ingredient::default()
        };

        assert!(row(NumberOrText::Number(2.0)).is_valid());
        assert!(row("0.5".into()).is_valid());
        assert!(row(" 3 ".into()).is_valid());
        assert!(!row(NumberOrText::Number(0.0)).is_valid());
        assert!(!row(NumberOrText::Number(-1.0)).is_valid());
        assert!(!row("".into()).is_valid());
        assert!(!row("a pinch".into()).is_valid());
        assert!(!row(NumberOrText::Number(f64::NAN)).is_valid());
    }

    #[test]
    fn test_quantity_accepts_number_or_string_json() {
        let from_number: Ingredient =
            serde_json::from_str(r#"{"name":"Flour","quantity":2,"unit":"cup"}"#).unwrap();
        assert_eq!(from_number.quantity, NumberOrText::Number(2.0));

        let from_text: Ingredient =
            serde_json::from_str(r#"{"name":"Salt","quantity":"1","unit":"tsp"}"#).unwrap();
        assert_eq!(from_text.quantity, NumberOrText::Text("1".to_string()));
    }

    #[test]
    fn test_default_form() {
        let data = RecipeFormData::default();
        assert_eq!(data.title, "");
        assert_eq!(data.calories, "0");
        assert!(data.ingredients.is_empty());
        assert_eq!(data.instructions, vec![InstructionStep::default()]);
    }

    #[test]
    fn test_patch_only_overrides_present_fields() {
        let mut data = RecipeFormData {
            title: "Soup".to_string(),
            description: "Warm".to_string(),
            ..RecipeFormData::default()
        };

        data.merge(RecipePatch {
            title: Some("Stew".to_string()),
            calories: Some("400".to_string()),
            ..RecipePatch::default()
        });

        assert_eq!(data.title, "Stew");
        assert_eq!(data.description, "Warm");
        assert_eq!(data.calories, "400");
    }
}
