//! Wire DTOs for the reply endpoint.
//!
//! DESIGN
//! ======
//! The reply envelope is read leniently: every field is optional and
//! malformed result items are dropped rather than failing the whole reply.
//! Only a body that is not JSON at all is treated as a failed exchange.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::RequestError;
use crate::state::turn::{Price, ResultItem};

/// Assistant text used when the service replied without any usable text.
pub const NO_RESPONSE_TEXT: &str = "No response received";

/// Request body posted to the reply endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub message: String,
}

/// Parsed reply from the service.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseEnvelope {
    /// Primary reply text.
    pub response: Option<String>,
    /// Secondary reply text, shown when `response` is absent.
    pub error: Option<String>,
    /// Validated result items, possibly empty.
    pub images: Vec<ResultItem>,
}

impl ResponseEnvelope {
    /// Parse a response body.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Payload`] if the body is not valid JSON.
    pub fn parse(body: &str) -> Result<Self, RequestError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| RequestError::Payload(e.to_string()))?;
        Ok(Self::from_value(&value))
    }

    /// Extract recognized fields from any JSON value.
    ///
    /// Non-object values yield an empty envelope.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let images = value
            .get("images")
            .and_then(serde_json::Value::as_array)
            .map(|items| items.iter().filter_map(result_item_from_value).collect())
            .unwrap_or_default();
        Self { response: non_empty_string(value.get("response")), error: non_empty_string(value.get("error")), images }
    }

    /// Reply text by priority: `response`, then `error`, then the fallback.
    pub fn reply_text(&self) -> &str {
        self.response
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or(NO_RESPONSE_TEXT)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WireResultItem {
    name: Option<String>,
    description: Option<String>,
    image_path: Option<String>,
    category: Option<String>,
    price: serde_json::Value,
    similarity_score: serde_json::Value,
}

fn non_empty_string(value: Option<&serde_json::Value>) -> Option<String> {
    value
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Validate one wire item; items without a usable name are dropped.
pub(crate) fn result_item_from_value(value: &serde_json::Value) -> Option<ResultItem> {
    let wire = match WireResultItem::deserialize(value) {
        Ok(wire) => wire,
        Err(err) => {
            leptos::logging::warn!("dropping malformed result item: {err}");
            return None;
        }
    };
    let name = wire.name.filter(|n| !n.trim().is_empty())?;
    Some(ResultItem {
        name,
        description: wire.description.unwrap_or_default(),
        image_ref: wire.image_path.unwrap_or_default(),
        category: wire.category.unwrap_or_default(),
        price: Price::from_value(&wire.price),
        similarity_score: similarity_from_value(&wire.similarity_score),
    })
}

fn similarity_from_value(value: &serde_json::Value) -> Option<f64> {
    value
        .as_f64()
        .filter(|score| score.is_finite() && (0.0..=1.0).contains(score))
}
