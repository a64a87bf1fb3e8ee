//! Ingredients step: an editable list that always keeps at least one row.

use super::FormSink;
use crate::{
    error::{RecipeError, Result},
    models::{Ingredient, IngredientField, NumberOrText},
};

/// Message shown under a row whose quantity is not a positive number.
pub const QUANTITY_ERROR: &str = "Quantity must be greater than 0.";

/// Editor for the ingredients step.
///
/// Invalid rows are flagged in [`errors`](Self::errors) but still stored and
/// propagated; only removing the last row is refused.
pub struct IngredientsEditor {
    rows: Vec<Ingredient>,
    errors: Vec<Option<&'static str>>,
}

impl IngredientsEditor {
    /// Mount the editor. Without canonical ingredients it starts from one
    /// starter row, which is propagated so canonical state shows it too.
    pub fn mount(sink: &mut FormSink<'_>) -> Self {
        let mut editor = Self {
            rows: Vec::new(),
            errors: Vec::new(),
        };
        editor.seed(sink);
        editor
    }

    pub fn rows(&self) -> &[Ingredient] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-row validation messages, aligned with [`rows`](Self::rows).
    pub fn errors(&self) -> &[Option<&'static str>] {
        &self.errors
    }

    pub fn row_error(&self, index: usize) -> Option<&'static str> {
        self.errors.get(index).copied().flatten()
    }

    /// Whether the remove action is available.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    /// Append a blank row.
    pub fn add(&mut self, sink: &mut FormSink<'_>) {
        self.rows.push(Ingredient::default());
        self.commit(sink);
    }

    /// Remove the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `RecipeError::LastIngredient` when only one row remains and
    /// `RecipeError::InvalidInput` when `index` is out of range. The list is
    /// unchanged in both cases.
    pub fn remove(&mut self, index: usize, sink: &mut FormSink<'_>) -> Result<()> {
        if !self.can_remove() {
            return Err(RecipeError::LastIngredient);
        }
        self.check_index(index)?;
        self.rows.remove(index);
        self.commit(sink);
        Ok(())
    }

    /// Change one field of the row at `index`.
    pub fn update(
        &mut self,
        index: usize,
        field: IngredientField,
        value: &str,
        sink: &mut FormSink<'_>,
    ) -> Result<()> {
        self.check_index(index)?;
        let row = &mut self.rows[index];
        match field {
            IngredientField::Name => row.name = value.to_string(),
            IngredientField::Quantity => row.quantity = NumberOrText::Text(value.to_string()),
            IngredientField::Unit => row.unit = value.to_string(),
        }
        self.commit(sink);
        Ok(())
    }

    /// Re-seed when canonical ingredients differ from the local rows.
    pub fn sync_from(&mut self, sink: &mut FormSink<'_>) {
        if sink.current().ingredients != self.rows {
            self.seed(sink);
        }
    }

    fn seed(&mut self, sink: &mut FormSink<'_>) {
        let current = &sink.current().ingredients;
        if current.is_empty() {
            self.rows = vec![Ingredient::starter()];
            self.commit(sink);
        } else {
            self.rows = current.clone();
            self.revalidate();
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(RecipeError::invalid_input("index").with_reason(format!(
                "Ingredient {index} does not exist; there are {} rows",
                self.rows.len()
            )))
        }
    }

    fn revalidate(&mut self) {
        self.errors = self
            .rows
            .iter()
            .map(|row| (!row.is_valid()).then_some(QUANTITY_ERROR))
            .collect();
    }

    fn commit(&mut self, sink: &mut FormSink<'_>) {
        self.revalidate();
        let rows = self.rows.clone();
        sink.apply(move |data| data.ingredients = rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecipeFormData;

    fn row(name: &str, quantity: f64, unit: &str) -> Ingredient {
        Ingredient {
            name: name.to_string(),
            quantity: NumberOrText::Number(quantity),
            unit: unit.to_string(),
        }
    }

    #[test]
    fn test_mount_without_ingredients_uses_starter() {
        let mut data = RecipeFormData::default();
        let editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));

        assert_eq!(editor.rows(), &[Ingredient::starter()]);
        assert_eq!(data.ingredients, vec![Ingredient::starter()]);
        assert_eq!(editor.errors(), &[None]);
        assert!(!editor.can_remove());
    }

    #[test]
    fn test_mount_keeps_existing_rows() {
        let mut data = RecipeFormData {
            ingredients: vec![row("Flour", 2.0, "cup"), row("Eggs", 0.0, "")],
            ..RecipeFormData::default()
        };
        let mut sink = FormSink::new(&mut data);
        let editor = IngredientsEditor::mount(&mut sink);

        assert_eq!(sink.updates(), 0);
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.errors(), &[None, Some(QUANTITY_ERROR)]);
    }

    #[test]
    fn test_add_appends_blank_invalid_row() {
        let mut data = RecipeFormData::default();
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));

        editor.add(&mut FormSink::new(&mut data));
        assert_eq!(editor.len(), 2);
        assert_eq!(editor.rows()[1], Ingredient::default());
        assert_eq!(editor.row_error(1), Some(QUANTITY_ERROR));
        assert_eq!(data.ingredients.len(), 2);
    }

    #[test]
    fn test_remove_first_of_two_keeps_survivor() {
        let mut data = RecipeFormData {
            ingredients: vec![row("Flour", 2.0, "cup"), row("Sugar", 1.0, "tbsp")],
            ..RecipeFormData::default()
        };
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));

        editor.remove(0, &mut FormSink::new(&mut data)).unwrap();
        assert_eq!(editor.rows(), &[row("Sugar", 1.0, "tbsp")]);
        assert_eq!(data.ingredients, vec![row("Sugar", 1.0, "tbsp")]);
        assert!(!editor.can_remove());

        let err = editor.remove(0, &mut FormSink::new(&mut data)).unwrap_err();
        assert!(matches!(err, RecipeError::LastIngredient));
        assert_eq!(editor.len(), 1);
        assert_eq!(data.ingredients.len(), 1);
    }

    #[test]
    fn test_list_never_drops_below_one() {
        let mut data = RecipeFormData::default();
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));
        for _ in 0..3 {
            editor.add(&mut FormSink::new(&mut data));
        }

        for _ in 0..10 {
            let _ = editor.remove(0, &mut FormSink::new(&mut data));
            assert!(!editor.is_empty());
        }
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut data = RecipeFormData::default();
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));
        editor.add(&mut FormSink::new(&mut data));

        let err = editor.remove(5, &mut FormSink::new(&mut data)).unwrap_err();
        assert!(matches!(err, RecipeError::InvalidInput { .. }));
        assert_eq!(editor.len(), 2);
    }

    #[test]
    fn test_update_revalidates_quantity() {
        let mut data = RecipeFormData::default();
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));

        editor
            .update(0, IngredientField::Quantity, "0", &mut FormSink::new(&mut data))
            .unwrap();
        assert_eq!(editor.row_error(0), Some(QUANTITY_ERROR));
        assert_eq!(data.ingredients[0].quantity, NumberOrText::Text("0".to_string()));

        editor
            .update(0, IngredientField::Quantity, "2.5", &mut FormSink::new(&mut data))
            .unwrap();
        assert_eq!(editor.row_error(0), None);

        editor
            .update(0, IngredientField::Name, "Butter", &mut FormSink::new(&mut data))
            .unwrap();
        assert_eq!(data.ingredients[0].name, "Butter");
    }

    #[test]
    fn test_sync_reseeds_on_external_change() {
        let mut data = RecipeFormData::default();
        let mut editor = IngredientsEditor::mount(&mut FormSink::new(&mut data));

        data.ingredients = vec![row("Flour", 2.0, "cup")];
        editor.sync_from(&mut FormSink::new(&mut data));
        assert_eq!(editor.rows(), &[row("Flour", 2.0, "cup")]);
    }
}
