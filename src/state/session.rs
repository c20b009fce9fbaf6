//! Per-widget session flags: panel visibility, input draft, in-flight request.
//!
//! DESIGN
//! ======
//! Kept separate from the transcript so toggling the panel or typing never
//! touches conversation history.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Session state created on mount and dropped on unmount.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub open: bool,
    pub draft: String,
    pub pending: bool,
}

impl Session {
    /// Flip panel visibility.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Whether the send control should be enabled for the current draft.
    pub fn can_send(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }
}
