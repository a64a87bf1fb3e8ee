//! Instructions step: ordered free-text steps with a display filter.

use std::time::Duration;

use tokio::sync::watch;

use super::{timer::DebounceTimer, FormSink};
use crate::{
    error::{RecipeError, Result},
    models::InstructionStep,
};

/// A row as displayed under the current filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleStep<'a> {
    /// 1-based number among the visible rows
    pub number: usize,
    /// Position in the stored list
    pub index: usize,
    pub text: &'a str,
}

/// Editor for the instructions step.
pub struct InstructionsEditor {
    steps: Vec<InstructionStep>,
    filter: String,
    typing: watch::Sender<bool>,
    timer: DebounceTimer,
    typing_delay: Duration,
}

impl InstructionsEditor {
    /// Mount the editor, seeded from canonical data or one empty step.
    pub fn mount(sink: &mut FormSink<'_>, typing_delay: Duration) -> Self {
        Self {
            steps: Self::seeded(sink),
            filter: String::new(),
            typing: watch::Sender::new(false),
            timer: DebounceTimer::new(),
            typing_delay,
        }
    }

    /// Stored steps in their original order.
    pub fn steps(&self) -> &[InstructionStep] {
        &self.steps
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// True until the typing delay passes without another keystroke.
    pub fn is_typing(&self) -> bool {
        *self.typing.borrow()
    }

    pub fn add(&mut self, sink: &mut FormSink<'_>) {
        self.steps.push(InstructionStep::default());
        self.commit(sink);
    }

    /// Replace the text of the step stored at `index`.
    pub fn edit(&mut self, index: usize, text: &str, sink: &mut FormSink<'_>) -> Result<()> {
        let Some(step) = self.steps.get_mut(index) else {
            return Err(RecipeError::invalid_input("index").with_reason(format!(
                "Instruction {index} does not exist; there are {} steps",
                self.steps.len()
            )));
        };
        step.step = text.to_string();

        self.typing.send_replace(true);
        let typing = self.typing.clone();
        self.timer.start(self.typing_delay, move || {
            typing.send_replace(false);
        });

        self.commit(sink);
        Ok(())
    }

    /// Set the display filter. Stored steps are untouched.
    pub fn set_filter(&mut self, query: &str) {
        self.filter = query.to_string();
    }

    /// Steps matching the filter (case-insensitive substring), numbered in
    /// display order.
    pub fn visible(&self) -> Vec<VisibleStep<'_>> {
        let query = self.filter.to_lowercase();
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| step.step.to_lowercase().contains(&query))
            .enumerate()
            .map(|(position, (index, step))| VisibleStep {
                number: position + 1,
                index,
                text: &step.step,
            })
            .collect()
    }

    /// A filter is set and nothing matches it.
    pub fn no_matches(&self) -> bool {
        !self.filter.is_empty() && self.visible().is_empty()
    }

    /// Re-seed when canonical instructions differ from the local steps.
    pub fn sync_from(&mut self, sink: &mut FormSink<'_>) {
        if sink.current().instructions != self.steps {
            self.steps = Self::seeded(sink);
        }
    }

    fn seeded(sink: &FormSink<'_>) -> Vec<InstructionStep> {
        let current = &sink.current().instructions;
        if current.is_empty() {
            vec![InstructionStep::default()]
        } else {
            current.clone()
        }
    }

    fn commit(&self, sink: &mut FormSink<'_>) {
        if sink.current().instructions == self.steps {
            return;
        }
        let steps = self.steps.clone();
        sink.apply(move |data| data.instructions = steps);
    }
}
