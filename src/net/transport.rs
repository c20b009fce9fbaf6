//! HTTP transports for the reply endpoint.
//!
//! Client-side (hydrate): `gloo-net` fetch.
//! Native targets: `reqwest`, used by Rust callers and integration tests.
//! Server-side (SSR) browser transport: stub returning an error, since the
//! widget only talks to the service from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transports never interpret status codes. They report either the raw reply
//! or a [`TransportError`] when no response was obtained; classification is
//! the coordinator's job.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::future::Future;

use super::types::OutgoingMessage;

/// Status and best-effort body text of an HTTP reply.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    /// `None` when the body could not be read.
    pub body: Option<String>,
}

impl RawReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No response was obtained from the service.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Posts one JSON message and reports the raw reply.
pub trait Transport {
    fn post_json(&self, url: &str, body: &OutgoingMessage) -> impl Future<Output = Result<RawReply, TransportError>>;
}

/// Browser fetch transport.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_json(&self, url: &str, body: &OutgoingMessage) -> Result<RawReply, TransportError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError(e.to_string()))?;
            let status = resp.status();
            leptos::logging::log!("reply status: {status}");
            let body = match resp.text().await {
                Ok(text) => Some(text),
                Err(err) => {
                    leptos::logging::warn!("could not read reply body: {err}");
                    None
                }
            };
            Ok(RawReply { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (url, body);
            Err(TransportError("not available on server".to_owned()))
        }
    }
}

/// `reqwest` transport for native callers.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug, Default)]
pub struct NativeTransport {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl NativeTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Transport for NativeTransport {
    async fn post_json(&self, url: &str, body: &OutgoingMessage) -> Result<RawReply, TransportError> {
        let resp = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = resp.status().as_u16();
        leptos::logging::log!("reply status: {status}");
        let body = match resp.text().await {
            Ok(text) => Some(text),
            Err(err) => {
                leptos::logging::warn!("could not read reply body: {err}");
                None
            }
        };
        Ok(RawReply { status, body })
    }
}
