//! Store actions and the reducer applying them.

use super::state::{BackendStatus, ErrorMessage, LookupState};
use crate::domain::entities::{DomainReport, HistoryEntry};

/// A single state transition committed by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A domain lookup started.
    DomainRequested,
    /// A domain lookup returned a report.
    DomainLoaded(DomainReport),
    /// A domain lookup finished, whatever its outcome.
    DomainSettled,
    /// A history fetch started.
    HistoryRequested,
    /// A history fetch returned entries, in backend order.
    HistoryLoaded(Vec<HistoryEntry>),
    /// A history fetch finished, whatever its outcome.
    HistorySettled,
    /// An operation failed with a user-facing message.
    Failed(String),
    /// The backend probe finished.
    BackendChecked(BackendStatus),
}

/// Applies `action` to `state` and returns the next state.
///
/// Pure: no I/O, no clock. Timestamps are stamped by the store after the
/// reducer runs.
pub fn reduce(mut state: LookupState, action: Action) -> LookupState {
    match action {
        Action::DomainRequested => {
            state.flags.submitting = true;
            state.flags.show_info = false;
            state.error = ErrorMessage::default();
        }
        Action::DomainLoaded(report) => {
            state.report = Some(report);
            state.flags.show_info = true;
        }
        Action::DomainSettled => {
            state.flags.submitting = false;
        }
        Action::HistoryRequested => {
            state.flags.loading = true;
            state.flags.show_info = false;
            state.history.clear();
            state.error = ErrorMessage::default();
        }
        Action::HistoryLoaded(entries) => {
            state.history.extend(entries);
            state.flags.show_info = true;
        }
        Action::HistorySettled => {
            state.flags.loading = false;
        }
        Action::Failed(message) => {
            state.error = ErrorMessage::active(message);
        }
        Action::BackendChecked(status) => {
            state.backend = status;
        }
    }

    state
}
