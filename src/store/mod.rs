//! Application state store.
//!
//! The store is an explicit object handed to whoever renders state; there is
//! no process-wide singleton. All state changes go through [`reduce`], a pure
//! function of the previous state and an [`Action`].
//!
//! - [`state`] - State shape: report, history, UI flags, error slot
//! - [`action`] - Actions and the reducer
//! - [`service`] - [`LookupStore`], which runs backend operations and commits actions

pub mod action;
pub mod service;
pub mod state;

pub use action::{Action, reduce};
pub use service::LookupStore;
pub use state::{BackendStatus, ErrorMessage, LookupState, UiFlags};
