//! Result wrapper types for displaying operation outcomes.
//!
//! Each wrapper pairs a success message with the resource it concerns so
//! the CLI prints consistent feedback for draft and submit operations.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DraftRecord, RecipeFormData, SessionStatus};

/// Outcome of saving a draft.
pub struct DraftSaved<'a>(pub &'a DraftRecord);

impl fmt::Display for DraftSaved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Draft saved at {}",
            LocalDateTime(&self.0.last_saved)
        )
    }
}

/// Outcome of a successful submission.
pub struct Submitted<'a> {
    pub data: &'a RecipeFormData,
    pub draft_cleared: bool,
}

impl fmt::Display for Submitted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe '{}' submitted.", self.data.title)?;
        if self.draft_cleared {
            writeln!(f, "The saved draft was removed.")?;
        }
        Ok(())
    }
}

/// Session flag together with the draft it refers to.
pub struct SessionStatusView<'a> {
    pub status: Option<SessionStatus>,
    pub draft: Option<&'a DraftRecord>,
}

impl fmt::Display for SessionStatusView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => writeln!(f, "Session: {status}")?,
            None => writeln!(f, "Session: idle")?,
        }
        match self.draft {
            Some(draft) => writeln!(f, "Draft: saved {}", LocalDateTime(&draft.last_saved)),
            None => writeln!(f, "Draft: none"),
        }
    }
}
