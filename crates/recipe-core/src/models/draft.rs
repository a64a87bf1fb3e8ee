//! Persisted draft record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{AttachmentRef, Ingredient, InstructionStep, RecipeFormData, RecipePatch};
use crate::error::Result;

/// Snapshot of an in-progress recipe as stored under the draft key.
///
/// The ingredient list is nested as its own JSON string, matching the
/// layout drafts have always been stored in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub title: String,
    pub description: String,
    pub calories: String,
    /// JSON-encoded `Vec<Ingredient>`
    pub ingredients: String,
    pub instructions: Vec<InstructionStep>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<AttachmentRef>,
    /// Time the draft was saved (UTC)
    pub last_saved: Timestamp,
}

impl DraftRecord {
    /// Snapshot `data` as saved at `last_saved`.
    pub fn capture(data: &RecipeFormData, last_saved: Timestamp) -> Result<Self> {
        Ok(Self {
            title: data.title.clone(),
            description: data.description.clone(),
            calories: data.calories.clone(),
            ingredients: serde_json::to_string(&data.ingredients)?,
            instructions: data.instructions.clone(),
            image: data.image.clone(),
            last_saved,
        })
    }

    /// Decode the nested ingredient list.
    pub fn ingredients(&self) -> Result<Vec<Ingredient>> {
        Ok(serde_json::from_str(&self.ingredients)?)
    }

    /// Turn the record into a patch that overrides every stored field.
    pub fn into_patch(self) -> Result<RecipePatch> {
        let ingredients = self.ingredients()?;
        Ok(RecipePatch {
            title: Some(self.title),
            description: Some(self.description),
            calories: Some(self.calories),
            ingredients: Some(ingredients),
            instructions: Some(self.instructions),
            image: self.image,
        })
    }
}
