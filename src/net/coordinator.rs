//! Request lifecycle: admission, dispatch, and settlement into the transcript.
//!
//! SYSTEM CONTEXT
//! ==============
//! Turns user intent into at most one outstanding exchange with the reply
//! endpoint. Every accepted submission appends one user turn immediately and
//! exactly one assistant turn when the exchange settles.
//!
//! DESIGN
//! ======
//! The lifecycle is split into [`begin_submit`] and [`settle`] so reactive
//! callers can release their state borrow across the network await.
//! [`PendingRequest`] is move-only; settling consumes it, so one acceptance
//! cannot produce two assistant turns.
//!
//! In-flight requests are not cancelled on close or unmount, and no timeout
//! is applied beyond the transport's own.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use super::error::RequestError;
use super::transport::{RawReply, Transport, TransportError};
use super::types::{OutgoingMessage, ResponseEnvelope};
use crate::config::WidgetConfig;
use crate::state::chat::ChatState;
use crate::state::turn::Turn;

/// Ticket for an accepted submission awaiting settlement.
#[derive(Debug, PartialEq, Eq)]
pub struct PendingRequest {
    message: String,
}

impl PendingRequest {
    /// Trimmed text the user submitted.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn body(&self) -> OutgoingMessage {
        OutgoingMessage { message: self.message.clone() }
    }
}

/// Admit a submission.
///
/// Blank input or a submission while another request is pending is a silent
/// no-op returning `None`. Otherwise the user turn is appended, the draft
/// cleared, and the session marked pending.
pub fn begin_submit(state: &mut ChatState, raw: &str) -> Option<PendingRequest> {
    let message = raw.trim();
    if message.is_empty() || state.session.pending {
        return None;
    }

    let message = message.to_owned();
    state.transcript.append(Turn::user(message.clone()));
    state.session.draft.clear();
    state.session.pending = true;
    leptos::logging::log!("sending message: {message}");
    Some(PendingRequest { message })
}

/// Map a transport outcome onto a parsed envelope or a failure.
///
/// # Errors
///
/// Returns [`RequestError::Network`] when no response was obtained,
/// [`RequestError::Status`] for non-2xx replies, and
/// [`RequestError::Payload`] when a 2xx body is unreadable or not JSON.
pub fn classify(outcome: Result<RawReply, TransportError>) -> Result<ResponseEnvelope, RequestError> {
    let reply = outcome.map_err(|e| RequestError::network(e.0))?;
    if !reply.is_success() {
        return Err(RequestError::status(reply.status, reply.body));
    }
    let body = reply
        .body
        .ok_or_else(|| RequestError::Payload("response body could not be read".to_owned()))?;
    ResponseEnvelope::parse(&body)
}

/// Build the assistant turn for a classified outcome.
pub fn assistant_turn(result: Result<ResponseEnvelope, RequestError>, config: &WidgetConfig) -> Turn {
    match result {
        Ok(envelope) => {
            leptos::logging::log!("result items received: {}", envelope.images.len());
            let text = envelope.reply_text().to_owned();
            Turn::assistant(text, envelope.images)
        }
        Err(err) => {
            leptos::logging::error!("reply failed: {err}");
            Turn::assistant_error(err.user_message(&config.service_hint))
        }
    }
}

/// Apply the outcome of an accepted submission.
///
/// Appends exactly one assistant turn and clears `pending`.
pub fn settle<'a>(
    state: &'a mut ChatState,
    request: PendingRequest,
    outcome: Result<RawReply, TransportError>,
    config: &WidgetConfig,
) -> &'a Turn {
    let turn = assistant_turn(classify(outcome), config);
    leptos::logging::log!("settled reply for: {}", request.message);
    state.session.pending = false;
    state.transcript.append(turn)
}

/// Drives whole submissions through a [`Transport`].
#[derive(Clone, Debug)]
pub struct RequestCoordinator<T> {
    transport: T,
    config: WidgetConfig,
}

impl<T: Transport> RequestCoordinator<T> {
    pub fn new(transport: T, config: WidgetConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Admit, dispatch, and settle one submission.
    ///
    /// Returns the assistant turn, or `None` when admission rejected the input.
    pub async fn submit<'a>(&self, state: &'a mut ChatState, raw: &str) -> Option<&'a Turn> {
        let request = begin_submit(state, raw)?;
        let outcome = self.transport.post_json(&self.config.endpoint_url(), &request.body()).await;
        Some(settle(state, request, outcome, &self.config))
    }
}
