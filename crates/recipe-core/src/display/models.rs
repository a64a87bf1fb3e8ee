//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    DraftRecord, Ingredient, NumberOrText, Recipe, RecipeFormData, SessionStatus, Step,
};

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for NumberOrText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberOrText::Number(n) => write!(f, "{n}"),
            NumberOrText::Text(s) => write!(f, "{s}"),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        };
        write!(f, "{name}: {}", self.quantity)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}

impl fmt::Display for RecipeFormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = if self.title.is_empty() {
            "Untitled recipe"
        } else {
            &self.title
        };
        writeln!(f, "# {title}")?;
        writeln!(f)?;
        writeln!(f, "- Calories: {}", self.calories)?;
        if let Some(image) = &self.image {
            writeln!(f, "- Image: {}", image.0)?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        writeln!(f, "\n## Ingredients")?;
        writeln!(f)?;
        if self.ingredients.is_empty() {
            writeln!(f, "No ingredients yet.")?;
        }
        for ingredient in &self.ingredients {
            writeln!(f, "- {ingredient}")?;
        }

        writeln!(f, "\n## Instructions")?;
        writeln!(f)?;
        for (i, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, instruction.step)?;
        }
        Ok(())
    }
}

impl fmt::Display for DraftRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Draft saved {}", LocalDateTime(&self.last_saved))?;
        writeln!(f)?;
        match self.clone().into_patch() {
            Ok(patch) => {
                let mut data = RecipeFormData::default();
                data.merge(patch);
                write!(f, "{data}")
            }
            Err(_) => writeln!(f, "The stored ingredient list is unreadable."),
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}. {}", self.id, self.title)?;
        writeln!(f)?;
        if !self.description.is_empty() {
            writeln!(f, "{}", self.description)?;
            writeln!(f)?;
        }
        write!(f, "- Calories: {}", self.total_calories)?;
        if !self.tags.is_empty() {
            write!(f, "\n- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstructionStep;

    #[test]
    fn test_ingredient_display() {
        let ingredient = Ingredient {
            name: "Flour".to_string(),
            quantity: NumberOrText::Number(2.0),
            unit: "cup".to_string(),
        };
        assert_eq!(ingredient.to_string(), "Flour: 2 cup");
        assert_eq!(Ingredient::default().to_string(), "(unnamed): ");
    }

    #[test]
    fn test_form_display() {
        let data = RecipeFormData {
            title: "Toast".to_string(),
            instructions: vec![InstructionStep::new("Slice"), InstructionStep::new("Toast")],
            ..RecipeFormData::default()
        };
        let output = data.to_string();

        assert!(output.starts_with("# Toast\n"));
        assert!(output.contains("- Calories: 0"));
        assert!(output.contains("No ingredients yet."));
        assert!(output.contains("1. Slice\n2. Toast\n"));
    }
}
