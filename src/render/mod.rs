//! Pure projection from widget state to display data.
//!
//! DESIGN
//! ======
//! Components render these view structs and never read `Turn` fields
//! directly, so labels, price text, and image resolution are testable
//! without a browser. The composing indicator and greeting are derived rows;
//! neither is ever stored in the transcript.


pub mod format;
pub mod image;

use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::state::turn::{ResultItem, Role, Turn};

use self::format::{match_label, price_label};
use self::image::ImageSource;

/// Display data for one transcript turn.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnView {
    pub role: Role,
    /// "You" or the assistant's display name.
    pub label: String,
    /// Turn text verbatim; line breaks are preserved by the stylesheet.
    pub body: String,
    pub is_error: bool,
    pub cards: Vec<ResultCardView>,
}

/// Display data for one result item.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultCardView {
    pub name: String,
    pub description: String,
    pub category: String,
    pub image: ImageSource,
    /// Image reference as received, for diagnostics.
    pub image_ref: String,
    pub price: String,
    pub match_percent: Option<String>,
}

/// One row in the rendered message list.
#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptRow {
    /// Shown only while the transcript is empty.
    Greeting(String),
    Turn(TurnView),
    /// Shown only while a request is pending.
    Composing { label: String, text: String },
}

pub fn project_turn(turn: &Turn, config: &WidgetConfig) -> TurnView {
    let label = match turn.role() {
        Role::User => config.user_label.clone(),
        Role::Assistant => config.assistant_name.clone(),
    };
    TurnView {
        role: turn.role(),
        label,
        body: turn.text().to_owned(),
        is_error: turn.is_error(),
        cards: turn.results().iter().map(|item| project_item(item, config)).collect(),
    }
}

pub fn project_item(item: &ResultItem, config: &WidgetConfig) -> ResultCardView {
    let image = if item.image_ref.trim().is_empty() {
        ImageSource::Fallback(config.placeholder_image.clone())
    } else {
        ImageSource::Primary(config.image_url(&item.image_ref))
    };
    ResultCardView {
        name: item.name.clone(),
        description: item.description.clone(),
        category: item.category.clone(),
        image,
        image_ref: item.image_ref.clone(),
        price: price_label(&item.price, config),
        match_percent: match_label(item.similarity_score),
    }
}

/// Rows to render for the current state, in display order.
pub fn visible_rows(state: &ChatState, config: &WidgetConfig) -> Vec<TranscriptRow> {
    let mut rows: Vec<TranscriptRow> = state
        .transcript
        .all()
        .iter()
        .map(|turn| TranscriptRow::Turn(project_turn(turn, config)))
        .collect();
    if rows.is_empty() {
        rows.push(TranscriptRow::Greeting(config.greeting.clone()));
    }
    if state.session.pending {
        rows.push(TranscriptRow::Composing {
            label: config.assistant_name.clone(),
            text: config.composing_text.clone(),
        });
    }
    rows
}
