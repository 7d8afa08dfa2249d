//! HTTP surface hosting the state store.
//!
//! Presentation code sends intents here and renders the returned state
//! snapshots.
//!
//! # Modules
//!
//! - [`dto`] - Request/response bodies
//! - [`handlers`] - View and health handlers
//! - [`middleware`] - Request tracing

pub mod dto;
pub mod handlers;
pub mod middleware;
