//! Backend port for SSL report lookups.

use crate::domain::entities::{DomainReport, HistoryEntry};
use async_trait::async_trait;
use thiserror::Error;

/// Typed failure of a single backend call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("backend transport error: {0}")]
    Transport(String),

    /// A success response arrived but its body did not match the expected shape.
    #[error("backend response could not be decoded: {0}")]
    Decode(String),

    /// A response arrived with a status outside the 2xx range.
    #[error("backend answered with unexpected status {status}")]
    UnexpectedStatus { status: u16 },
}

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, BackendError>;

/// Interface to the service that computes SSL grades and server lists.
///
/// Every call returns a typed result; success is decided by the
/// implementation from the HTTP status code range, never from status text.
///
/// # Implementations
///
/// - [`crate::infrastructure::HttpDomainBackend`] - `reqwest` client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DomainBackend: Send + Sync {
    /// Requests a fresh report for `domain_name` (`POST /domain`).
    async fn analyze_domain(&self, domain_name: &str) -> BackendResult<DomainReport>;

    /// Lists previously queried domains in backend order (`GET /get-last-domains`).
    async fn last_domains(&self) -> BackendResult<Vec<HistoryEntry>>;

    /// Probes backend availability (`GET /status`).
    async fn status(&self) -> BackendResult<()>;
}
