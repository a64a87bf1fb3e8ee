//! Status enumerations for the session flag and the form loading state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Process-wide session status kept under the session status key.
///
/// The flag is a singleton: absent means no draft session is open.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    /// A draft has been saved and not yet submitted
    Drafting,
}

impl FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drafting" => Ok(SessionStatus::Drafting),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

impl SessionStatus {
    /// Token written to storage
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Drafting => "drafting",
        }
    }
}

/// Loading state of the form controller, orthogonal to the wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Loading {
    /// Nothing in flight
    #[default]
    Idle,

    /// An edit-mode fetch is pending; all interaction is disabled
    Validating,

    /// The last fetch failed and can be retried
    Failed { message: String },
}

impl Loading {
    pub fn is_validating(&self) -> bool {
        matches!(self, Loading::Validating)
    }
}
