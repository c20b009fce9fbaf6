//! Transcript entries and the structured result items attached to them.
//!
//! DESIGN
//! ======
//! Fields are private and only constructors exist, so a `Turn` cannot be
//! edited after creation and a user turn can never carry the error flag or
//! result items.

#[cfg(test)]
#[path = "turn_test.rs"]
mod turn_test;

/// Author of a transcript turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One immutable exchange unit in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    role: Role,
    text: String,
    is_error: bool,
    results: Vec<ResultItem>,
}

impl Turn {
    /// A turn authored by the person typing into the widget.
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: Role::User, text: text.into(), is_error: false, results: Vec::new() }
    }

    /// A successful assistant reply, optionally carrying result items.
    pub fn assistant(text: impl Into<String>, results: Vec<ResultItem>) -> Self {
        Self { role: Role::Assistant, text: text.into(), is_error: false, results }
    }

    /// An assistant turn describing a failed exchange.
    pub fn assistant_error(text: impl Into<String>) -> Self {
        Self { role: Role::Assistant, text: text.into(), is_error: true, results: Vec::new() }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }
}

/// A structured catalog entry returned alongside an assistant reply.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultItem {
    /// Display label; never blank.
    pub name: String,
    pub description: String,
    /// Path or URL fragment resolved against the configured API base.
    pub image_ref: String,
    pub category: String,
    pub price: Price,
    /// Match confidence in `[0, 1]`, if the service reported one.
    pub similarity_score: Option<f64>,
}

/// Price as received from the service.
///
/// The service sends numbers or number-like strings; anything else is kept
/// verbatim so rendering can show it instead of failing.
#[derive(Clone, Debug, PartialEq)]
pub enum Price {
    Amount(f64),
    Raw(String),
    Unavailable,
}

impl Price {
    /// Coerce a wire value into a price.
    pub fn from_value(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).map_or(Self::Unavailable, Self::Amount),
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Self::Unavailable;
                }
                match trimmed.parse::<f64>() {
                    Ok(v) if v.is_finite() => Self::Amount(v),
                    _ => Self::Raw(s.clone()),
                }
            }
            serde_json::Value::Null => Self::Unavailable,
            other => Self::Raw(other.to_string()),
        }
    }
}
