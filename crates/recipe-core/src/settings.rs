//! Application settings passed explicitly to the components that need them.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Color theme for rendered output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Delays used by the editors and the simulated backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Quiet period before the title length check runs
    pub title_debounce: Duration,
    /// How long the "typing" indicator stays on after the last keystroke
    pub typing_indicator: Duration,
    /// Simulated latency of fetching a recipe for editing
    pub fetch_latency: Duration,
    /// Simulated latency of submitting a recipe
    pub submit_latency: Duration,
    /// Simulated latency of loading the recipe listing
    pub listing_latency: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            title_debounce: Duration::from_millis(800),
            typing_indicator: Duration::from_millis(1500),
            fetch_latency: Duration::from_millis(1000),
            submit_latency: Duration::from_millis(1000),
            listing_latency: Duration::from_millis(1500),
        }
    }
}

impl Timings {
    /// Replace every simulated network latency with `latency`, keeping the
    /// editor timers.
    pub fn with_latency(self, latency: Duration) -> Self {
        Self {
            fetch_latency: latency,
            submit_latency: latency,
            listing_latency: latency,
            ..self
        }
    }
}

/// Partial settings change applied with [`Settings::update`].
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub timings: Option<Timings>,
}

/// Settings scoped to one application instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub theme: Theme,
    pub timings: Timings,
}

impl Settings {
    /// Merge the fields present in `update`.
    pub fn update(&mut self, update: SettingsUpdate) {
        if let Some(theme) = update.theme {
            log::debug!("Switching theme to {}", theme.as_str());
            self.theme = theme;
        }
        if let Some(timings) = update.timings {
            self.timings = timings;
        }
    }
}
