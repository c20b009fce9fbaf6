//! Cosmetic DOM side effects: scroll-to-newest and textarea auto-height.
//!
//! TRADE-OFFS
//! ==========
//! These never affect widget state. Failures are logged and otherwise
//! ignored, and SSR paths no-op.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use leptos::prelude::NodeRef;

/// Tallest the input grows before it starts scrolling.
pub const MAX_INPUT_HEIGHT_PX: i32 = 100;

/// Height to apply to the input for a given content scroll height.
pub fn input_height(scroll_height: i32) -> i32 {
    scroll_height.clamp(0, MAX_INPUT_HEIGHT_PX)
}

/// Bring the end-of-list marker into view.
pub fn scroll_to_end(marker: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;
        if let Some(el) = marker.get_untracked() {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = marker;
    }
}

/// Resize the input to fit its content, capped at [`MAX_INPUT_HEIGHT_PX`].
pub fn fit_input_height(input: NodeRef<leptos::html::Textarea>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;
        let Some(el) = input.get_untracked() else {
            return;
        };
        let style = el.style();
        if let Err(err) = style.set_property("height", "auto") {
            leptos::logging::warn!("could not reset input height: {err:?}");
            return;
        }
        let height = input_height(el.scroll_height());
        if let Err(err) = style.set_property("height", &format!("{height}px")) {
            leptos::logging::warn!("could not resize input: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}

/// Drop any inline height so the input returns to a single row.
pub fn reset_input_height(input: NodeRef<leptos::html::Textarea>) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::GetUntracked;
        if let Some(el) = input.get_untracked() {
            if let Err(err) = el.style().remove_property("height") {
                leptos::logging::warn!("could not reset input height: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}
