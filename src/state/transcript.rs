//! Append-only transcript of conversation turns.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use super::turn::Turn;

/// Ordered turns for one widget session.
///
/// The only mutation is [`Transcript::append`]; turns are never reordered,
/// edited, or removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    /// Add a turn to the end and return a reference to it.
    pub fn append(&mut self, turn: Turn) -> &Turn {
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// All turns in insertion order.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
