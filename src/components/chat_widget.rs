//! Floating toggle button and chat panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point for host pages. Each mounted widget owns its own session and
//! transcript; both are dropped with the component.

use leptos::prelude::*;

use crate::components::composer::Composer;
use crate::components::message_list::MessageList;
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;

/// Embeddable chat widget.
///
/// Provides `RwSignal<ChatState>` and `WidgetConfig` contexts to its children.
#[component]
pub fn ChatWidget(#[prop(optional)] config: Option<WidgetConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let chat = RwSignal::new(ChatState::default());
    provide_context(chat);
    provide_context(config.clone());

    let WidgetConfig { title, open_label, close_label, .. } = config;
    let is_open = move || chat.with(|c| c.session.open);
    let toggle = move |_| chat.update(ChatState::toggle_open);

    view! {
        <div class="chat-widget">
            <button class="chat-widget__toggle" on:click=toggle>
                "💬 "
                {move || if is_open() { close_label.clone() } else { open_label.clone() }}
            </button>

            <Show when=is_open>
                <div class="chat-widget__panel">
                    <div class="chat-widget__header">
                        <div class="chat-widget__heading">
                            <span class="chat-widget__title">{title.clone()}</span>
                            <span class="chat-widget__status"></span>
                        </div>
                        <button class="chat-widget__close" title="Close chat" on:click=toggle>
                            "✖"
                        </button>
                    </div>
                    <MessageList/>
                    <Composer/>
                </div>
            </Show>
        </div>
    }
}
