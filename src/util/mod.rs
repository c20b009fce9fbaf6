//! Utility helpers shared across widget components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Isolates browser DOM glue from component logic; every helper is a safe
//! no-op outside the `hydrate` build.

pub mod dom;
