//! State shape held by the store.

use crate::domain::entities::{DomainReport, HistoryEntry};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Transient UI flags. Each one is set and cleared independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UiFlags {
    /// A domain lookup is in flight.
    pub submitting: bool,
    /// A history fetch is in flight.
    pub loading: bool,
    /// The last operation produced something to show.
    pub show_info: bool,
}

/// Single-slot user-facing error. A new error overwrites the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    pub message: String,
    pub active: bool,
}

impl ErrorMessage {
    pub fn active(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            active: true,
        }
    }
}

/// Last known reachability of the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendStatus {
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Everything the presentation layer renders from.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupState {
    /// Report of the most recent successful lookup.
    pub report: Option<DomainReport>,
    /// Previously queried domains, in backend order.
    pub history: Vec<HistoryEntry>,
    pub flags: UiFlags,
    pub error: ErrorMessage,
    pub backend: BackendStatus,
    /// When the last action was committed.
    pub updated_at: Option<DateTime<Utc>>,
}
