//! Message input row: textarea plus send button.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges DOM events to the request coordinator. Admission runs inside a
//! single signal update, the network exchange runs in a spawned task, and
//! settlement is applied in a second update once the reply lands.

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::coordinator::{begin_submit, settle};
use crate::net::transport::{BrowserTransport, Transport};
use crate::state::chat::ChatState;
use crate::util::dom;

/// Input row. Enter submits, Shift+Enter inserts a newline.
#[component]
pub fn Composer() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = StoredValue::new(expect_context::<WidgetConfig>());
    let input_ref = NodeRef::<leptos::html::Textarea>::new();
    let placeholder = config.with_value(|c| c.input_placeholder.clone());

    let do_send = move || {
        let draft = chat.with_untracked(|c| c.session.draft.clone());
        let Some(request) = chat.try_update(|c| begin_submit(c, &draft)).flatten() else {
            return;
        };
        dom::reset_input_height(input_ref);

        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let outcome = BrowserTransport
                .post_json(&config.endpoint_url(), &request.body())
                .await;
            let applied = chat.try_update(|c| {
                settle(c, request, outcome, &config);
            });
            if applied.is_none() {
                leptos::logging::warn!("widget unmounted before the reply settled");
            }
        });
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        chat.update(|c| c.session.set_draft(event_target_value(&ev)));
        dom::fit_input_height(input_ref);
    };

    let pending = move || chat.with(ChatState::is_pending);
    let cannot_send = move || !chat.with(|c| c.session.can_send());

    view! {
        <div class="chat-widget__input-row">
            <textarea
                class="chat-widget__input"
                rows="1"
                placeholder=placeholder
                node_ref=input_ref
                disabled=pending
                prop:value=move || chat.with(|c| c.session.draft.clone())
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
            <button class="chat-widget__send" on:click=on_click disabled=cannot_send>
                {move || if pending() { "..." } else { "Send" }}
            </button>
        </div>
    }
}
