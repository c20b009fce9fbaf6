//! Combined widget state shared through Leptos context.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::session::Session;
use super::transcript::Transcript;

/// State for the chat widget.
///
/// Held in a single `RwSignal` so every mutation re-renders the transcript
/// projection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub session: Session,
    pub transcript: Transcript,
}

impl ChatState {
    /// Toggle the panel; the transcript is left untouched.
    pub fn toggle_open(&mut self) {
        self.session.toggle();
    }

    pub fn is_pending(&self) -> bool {
        self.session.pending
    }
}
