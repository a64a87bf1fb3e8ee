//! Details step: title, description and calories.

use std::{future::Future, time::Duration};

use tokio::sync::watch;

use super::{timer::DebounceTimer, FormSink};
use crate::models::RecipeFormData;

/// Shortest title that passes the check.
pub const MIN_TITLE_LEN: usize = 4;

/// Message shown under a title that is too short.
pub const TITLE_TOO_SHORT: &str = "Title is too short. Must be at least 4 characters.";

/// Local buffer of the details step.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailsFields {
    pub title: String,
    pub description: String,
    pub calories: String,
}

impl DetailsFields {
    fn from_form(data: &RecipeFormData) -> Self {
        Self {
            title: data.title.clone(),
            description: data.description.clone(),
            calories: data.calories.clone(),
        }
    }
}

/// State of the debounced title check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TitleCheck {
    /// A check is scheduled and has not run yet
    pub checking: bool,
    /// Error from the last completed check
    pub error: Option<String>,
}

/// Returns the error for `title`, if it is too short.
pub fn validate_title(title: &str) -> Option<String> {
    (title.chars().count() < MIN_TITLE_LEN).then(|| TITLE_TOO_SHORT.to_string())
}

/// Editor for the details step.
///
/// Every edit reaches canonical state immediately; the title check only
/// runs once typing pauses for the debounce delay and never blocks edits.
pub struct DetailsEditor {
    fields: DetailsFields,
    check: watch::Sender<TitleCheck>,
    timer: DebounceTimer,
    debounce: Duration,
}

impl DetailsEditor {
    /// Mount the editor, seeded from canonical data. A non-empty title is
    /// checked right away.
    pub fn mount(sink: &mut FormSink<'_>, debounce: Duration) -> Self {
        let mut editor = Self {
            fields: DetailsFields::from_form(sink.current()),
            check: watch::Sender::new(TitleCheck::default()),
            timer: DebounceTimer::new(),
            debounce,
        };
        editor.schedule_title_check();
        editor
    }

    pub fn fields(&self) -> &DetailsFields {
        &self.fields
    }

    pub fn set_title(&mut self, value: &str, sink: &mut FormSink<'_>) {
        self.fields.title = value.to_string();
        self.schedule_title_check();
        self.commit(sink);
    }

    pub fn set_description(&mut self, value: &str, sink: &mut FormSink<'_>) {
        self.fields.description = value.to_string();
        self.commit(sink);
    }

    pub fn set_calories(&mut self, value: &str, sink: &mut FormSink<'_>) {
        self.fields.calories = value.to_string();
        self.commit(sink);
    }

    /// Re-seed the buffer when canonical values differ from it.
    pub fn sync_from(&mut self, sink: &mut FormSink<'_>) {
        let seeded = DetailsFields::from_form(sink.current());
        if seeded == self.fields {
            return;
        }
        let title_changed = seeded.title != self.fields.title;
        self.fields = seeded;
        if title_changed {
            self.schedule_title_check();
        }
    }

    pub fn is_checking_title(&self) -> bool {
        self.check.borrow().checking
    }

    pub fn title_error(&self) -> Option<String> {
        self.check.borrow().error.clone()
    }

    /// Receiver notified whenever the title check state changes.
    pub fn watch_title(&self) -> watch::Receiver<TitleCheck> {
        self.check.subscribe()
    }

    /// Completes once no title check is pending. Also completes if the
    /// editor is dropped first.
    pub fn title_settled(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut receiver = self.check.subscribe();
        async move {
            let _ = receiver.wait_for(|check| !check.checking).await;
        }
    }

    fn commit(&self, sink: &mut FormSink<'_>) {
        let fields = self.fields.clone();
        sink.apply(move |data| {
            data.title = fields.title;
            data.description = fields.description;
            data.calories = fields.calories;
        });
    }

    fn schedule_title_check(&mut self) {
        if self.fields.title.is_empty() {
            // Nothing to check; keep whatever error was last shown
            self.timer.cancel();
            self.check.send_modify(|check| check.checking = false);
            return;
        }

        self.check.send_modify(|check| check.checking = true);
        let title = self.fields.title.clone();
        let check = self.check.clone();
        self.timer.start(self.debounce, move || {
            check.send_modify(|state| {
                state.checking = false;
                state.error = validate_title(&title);
            });
        });
    }
}
