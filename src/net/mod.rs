//! Networking for the reply endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema, `transport` performs the HTTP exchange,
//! `error` classifies failures, and `coordinator` owns the request lifecycle
//! and writes its outcome into the transcript.

pub mod coordinator;
pub mod error;
pub mod transport;
pub mod types;
