//! Client-side widget state.
//!
//! DESIGN
//! ======
//! `turn` holds the immutable transcript entries, `transcript` the
//! append-only store, `session` the transient flags, and `chat` bundles the
//! two for context distribution.

pub mod chat;
pub mod session;
pub mod transcript;
pub mod turn;
