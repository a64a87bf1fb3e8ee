//! The wizard screen: stepper, the active step's editor and its messages.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    form::{ActiveEditor, DetailsEditor, IngredientsEditor, InstructionsEditor, RecipeBuilder},
    models::{Loading, Step},
};

/// Renders the current state of a [`RecipeBuilder`] as markdown.
pub struct WizardView<'a>(pub &'a RecipeBuilder);

impl fmt::Display for WizardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let builder = self.0;
        writeln!(f, "# {} Recipe", builder.mode().as_str())?;
        writeln!(f)?;
        write_stepper(f, builder.step())?;

        if let Some(prompt) = builder.draft_prompt() {
            writeln!(f)?;
            writeln!(
                f,
                "> A draft saved {} is available.",
                LocalDateTime(&prompt.last_saved)
            )?;
        }

        match builder.loading() {
            Loading::Validating => {
                writeln!(f)?;
                return writeln!(f, "Loading recipe...");
            }
            Loading::Failed { message } => {
                writeln!(f)?;
                writeln!(f, "**Error:** {message}")?;
            }
            Loading::Idle => {}
        }

        writeln!(f)?;
        writeln!(f, "## {}", builder.step().heading())?;
        writeln!(f)?;
        match builder.editor() {
            Some(ActiveEditor::Details(editor)) => write_details(f, editor),
            Some(ActiveEditor::Ingredients(editor)) => write_ingredients(f, editor),
            Some(ActiveEditor::Instructions(editor)) => write_instructions(f, editor),
            None => Ok(()),
        }
    }
}

fn write_stepper(f: &mut fmt::Formatter<'_>, current: Step) -> fmt::Result {
    let mut step = Some(Step::FIRST);
    let mut labels = Vec::new();
    while let Some(s) = step {
        let label = format!("{}. {}", s.number(), s.heading());
        labels.push(if s == current {
            format!("**{label}**")
        } else {
            label
        });
        step = s.next();
    }
    writeln!(f, "{}", labels.join(" > "))
}

fn write_details(f: &mut fmt::Formatter<'_>, editor: &DetailsEditor) -> fmt::Result {
    let fields = editor.fields();
    writeln!(f, "- Title: {}", fields.title)?;
    if editor.is_checking_title() {
        writeln!(f, "  - Checking title...")?;
    } else if let Some(error) = editor.title_error() {
        writeln!(f, "  - **{error}**")?;
    }
    writeln!(f, "- Description: {}", fields.description)?;
    writeln!(f, "- Calories: {}", fields.calories)
}

fn write_ingredients(f: &mut fmt::Formatter<'_>, editor: &IngredientsEditor) -> fmt::Result {
    for (i, row) in editor.rows().iter().enumerate() {
        writeln!(f, "{}. {row}", i + 1)?;
        if let Some(error) = editor.row_error(i) {
            writeln!(f, "   - **{error}**")?;
        }
    }
    Ok(())
}

fn write_instructions(f: &mut fmt::Formatter<'_>, editor: &InstructionsEditor) -> fmt::Result {
    if !editor.filter().is_empty() {
        writeln!(f, "Filter: `{}`", editor.filter())?;
        writeln!(f)?;
    }
    if editor.no_matches() {
        writeln!(f, "No steps match the filter.")?;
    }
    for row in editor.visible() {
        writeln!(f, "{}. {}", row.number, row.text)?;
    }
    if editor.is_typing() {
        writeln!(f)?;
        writeln!(f, "_Typing..._")?;
    }
    Ok(())
}
