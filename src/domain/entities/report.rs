//! Domain report entity.

use super::Server;
use serde::Serialize;

/// SSL and server metadata returned for a single queried domain.
///
/// A report is replaced as a whole on every successful lookup; `servers` is
/// always rebuilt from the latest response, never merged with a previous one.
/// Its reduced projection for the recent-queries list is
/// [`HistoryEntry`](super::HistoryEntry), built with `From<&DomainReport>`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainReport {
    pub ssl_grade: String,
    pub previous_ssl_grade: String,
    pub logo: String,
    pub title: String,
    pub is_down: bool,
    /// Whether the backend saw a different server set than on the previous lookup.
    pub servers_changed: bool,
    pub servers: Vec<Server>,
}
