//! Store service running lookups against the backend.

use super::action::{Action, reduce};
use super::state::{BackendStatus, LookupState};
use crate::domain::backend::DomainBackend;
use crate::error::LookupError;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;

/// Application state store.
///
/// Holds [`LookupState`] behind a `watch` channel so renderers can subscribe
/// to changes. Operations never return errors: every failure ends up in the
/// state's error slot.
///
/// Concurrent operations are not deduplicated or cancelled. Their actions are
/// committed in arrival order and the last write wins.
pub struct LookupStore {
    backend: Arc<dyn DomainBackend>,
    state: watch::Sender<LookupState>,
}

impl LookupStore {
    /// Creates a store with empty state.
    pub fn new(backend: Arc<dyn DomainBackend>) -> Self {
        let (state, _) = watch::channel(LookupState::default());
        Self { backend, state }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> LookupState {
        self.state.borrow().clone()
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.state.subscribe()
    }

    /// Applies `action` through the reducer and stamps the commit time.
    pub fn dispatch(&self, action: Action) {
        self.state.send_modify(|state| {
            let mut next = reduce(std::mem::take(state), action);
            next.updated_at = Some(Utc::now());
            *state = next;
        });
    }

    /// Looks up `domain_name` and commits the report or an error.
    ///
    /// An empty name is rejected without calling the backend.
    pub async fn fetch_domain(&self, domain_name: &str) {
        if domain_name.is_empty() {
            self.fail("fetch_domain", LookupError::EmptyDomainName);
            self.dispatch(Action::DomainSettled);
            return;
        }

        self.dispatch(Action::DomainRequested);
        let _settle = Settle::on_drop(self, Action::DomainSettled);

        match self.backend.analyze_domain(domain_name).await {
            Ok(report) => {
                tracing::debug!(
                    domain = domain_name,
                    servers = report.servers.len(),
                    grade = %report.ssl_grade,
                    "domain report received"
                );
                record("fetch_domain", "success");
                self.dispatch(Action::DomainLoaded(report));
            }
            Err(e) => self.fail("fetch_domain", e.into()),
        }
    }

    /// Reloads the list of previously queried domains.
    pub async fn fetch_domain_history(&self) {
        self.dispatch(Action::HistoryRequested);
        let _settle = Settle::on_drop(self, Action::HistorySettled);

        match self.backend.last_domains().await {
            Ok(entries) => {
                tracing::debug!(entries = entries.len(), "domain history received");
                record("fetch_domain_history", "success");
                self.dispatch(Action::HistoryLoaded(entries));
            }
            Err(e) => self.fail("fetch_domain_history", e.into()),
        }
    }

    /// Probes the backend and records whether it answered.
    pub async fn check_backend(&self) -> BackendStatus {
        let status = match self.backend.status().await {
            Ok(()) => BackendStatus::Online,
            Err(e) => {
                tracing::warn!(error = %e, "backend status check failed");
                BackendStatus::Offline
            }
        };

        self.dispatch(Action::BackendChecked(status));
        status
    }

    fn fail(&self, operation: &'static str, error: LookupError) {
        match error {
            LookupError::EmptyDomainName => tracing::debug!(operation, "rejected empty domain name"),
            _ => tracing::warn!(operation, error = %error, "lookup operation failed"),
        }
        record(operation, error.kind());
        self.dispatch(Action::Failed(error.user_message()));
    }
}

/// Commits a settled action when dropped, so a busy flag is cleared even if
/// the operation's future is dropped mid-call.
struct Settle<'a> {
    store: &'a LookupStore,
    action: Option<Action>,
}

impl<'a> Settle<'a> {
    fn on_drop(store: &'a LookupStore, action: Action) -> Self {
        Self {
            store,
            action: Some(action),
        }
    }
}

impl Drop for Settle<'_> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            self.store.dispatch(action);
        }
    }
}

fn record(operation: &'static str, outcome: &'static str) {
    metrics::counter!("lookup_operations_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}
