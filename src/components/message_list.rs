//! Scrollable transcript with greeting and composing indicator.

use leptos::prelude::*;

use crate::components::result_card::ResultCard;
use crate::config::WidgetConfig;
use crate::render::{TranscriptRow, TurnView, visible_rows};
use crate::state::chat::ChatState;
use crate::state::turn::Role;
use crate::util::dom;

/// Message list re-projected from `ChatState` on every change.
#[component]
pub fn MessageList() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let config = expect_context::<WidgetConfig>();
    let end_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to the newest row whenever a turn lands or pending flips;
    // typing into the draft must not scroll.
    let revision = Memo::new(move |_| chat.with(|c| (c.transcript.len(), c.session.pending)));
    Effect::new(move || {
        revision.track();
        dom::scroll_to_end(end_ref);
    });

    let rows = move || {
        chat.with(|c| visible_rows(c, &config))
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <div class="chat-widget__messages">
            <For each=rows key=|(index, row)| row_key(*index, row) children=|(_, row)| row_view(row)/>
            <div class="chat-widget__end" node_ref=end_ref></div>
        </div>
    }
}

/// Stable key per row; turns keep their transcript index because the
/// transcript is append-only, so existing cards are not rebuilt.
fn row_key(index: usize, row: &TranscriptRow) -> (usize, u8) {
    let kind = match row {
        TranscriptRow::Greeting(_) => 0,
        TranscriptRow::Turn(_) => 1,
        TranscriptRow::Composing { .. } => 2,
    };
    (index, kind)
}

fn row_view(row: TranscriptRow) -> AnyView {
    match row {
        TranscriptRow::Greeting(text) => view! {
            <div class="chat-widget__greeting">
                <div class="chat-widget__greeting-icon">"🍽️"</div>
                <div>{text}</div>
            </div>
        }
        .into_any(),
        TranscriptRow::Turn(turn) => view! { <TurnBubble turn/> }.into_any(),
        TranscriptRow::Composing { label, text } => view! {
            <div class="chat-widget__row chat-widget__row--assistant">
                <div class="chat-widget__bubble chat-widget__bubble--assistant">
                    <div class="chat-widget__role">{label}</div>
                    <div class="chat-widget__composing">
                        <span>{text}</span>
                        <span class="chat-widget__dots">
                            <span class="chat-widget__dot"></span>
                            <span class="chat-widget__dot"></span>
                            <span class="chat-widget__dot"></span>
                        </span>
                    </div>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// One transcript turn plus its result cards.
#[component]
fn TurnBubble(turn: TurnView) -> impl IntoView {
    let TurnView { role, label, body, is_error, cards } = turn;
    let is_user = role == Role::User;
    let is_assistant = !is_user;

    view! {
        <div
            class="chat-widget__row"
            class:chat-widget__row--user=is_user
            class:chat-widget__row--assistant=is_assistant
        >
            <div class="chat-widget__turn">
                <div
                    class="chat-widget__bubble"
                    class:chat-widget__bubble--user=is_user
                    class:chat-widget__bubble--assistant=is_assistant
                    class:chat-widget__bubble--error=is_error
                >
                    <div class="chat-widget__role">{label}</div>
                    <div class="chat-widget__text">{body}</div>
                </div>
                {(!cards.is_empty())
                    .then(move || {
                        view! {
                            <div class="chat-widget__cards">
                                {cards.into_iter().map(|card| view! { <ResultCard card/> }).collect_view()}
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
