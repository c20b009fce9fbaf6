//! Failure taxonomy for a reply exchange.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Diagnostic used when a failure carries no further detail.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Why an accepted submission could not produce a normal reply.
///
/// The `Display` output is the diagnostic embedded in the error turn.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum RequestError {
    /// No response was obtained (DNS, connection refused, transport timeout).
    #[error("{0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The service answered 2xx but the body was not JSON.
    #[error("invalid response body: {0}")]
    Payload(String),
}

impl RequestError {
    /// Network failure with a best-effort detail string.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        if detail.trim().is_empty() {
            return Self::Network(UNKNOWN_ERROR.to_owned());
        }
        Self::Network(detail)
    }

    /// Status failure; an unreadable body becomes the placeholder diagnostic.
    pub fn status(status: u16, body: Option<String>) -> Self {
        let body = body.filter(|b| !b.trim().is_empty()).unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        Self::Status { status, body }
    }

    /// Full user-facing message for the error turn.
    pub fn user_message(&self, service_hint: &str) -> String {
        format!("Error: {self}. Make sure {service_hint} is running")
    }
}
