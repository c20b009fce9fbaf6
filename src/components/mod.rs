//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the floating widget while reading/writing the shared
//! `ChatState` signal and `WidgetConfig` from Leptos context.

pub mod chat_widget;
pub mod composer;
pub mod message_list;
pub mod result_card;
