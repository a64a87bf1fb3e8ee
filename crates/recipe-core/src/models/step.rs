//! Wizard step definition.

use serde::{Deserialize, Serialize};

/// Steps of the recipe wizard in the order they are visited.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Title, description and calories
    #[default]
    Details,

    /// Ingredient rows
    Ingredients,

    /// Ordered instructions
    Instructions,
}

impl Step {
    pub const FIRST: Step = Step::Details;
    pub const LAST: Step = Step::Instructions;

    /// 1-based position shown in the stepper
    pub fn number(&self) -> u8 {
        match self {
            Step::Details => 1,
            Step::Ingredients => 2,
            Step::Instructions => 3,
        }
    }

    /// The following step, or `None` on the last one. No wraparound.
    pub fn next(&self) -> Option<Step> {
        match self {
            Step::Details => Some(Step::Ingredients),
            Step::Ingredients => Some(Step::Instructions),
            Step::Instructions => None,
        }
    }

    /// The preceding step, or `None` on the first one.
    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::Details => None,
            Step::Ingredients => Some(Step::Details),
            Step::Instructions => Some(Step::Ingredients),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::Details => "details",
            Step::Ingredients => "ingredients",
            Step::Instructions => "instructions",
        }
    }

    /// Heading shown above the step's editor
    pub fn heading(&self) -> &'static str {
        match self {
            Step::Details => "Recipe Details",
            Step::Ingredients => "Ingredients",
            Step::Instructions => "Instructions",
        }
    }
}
