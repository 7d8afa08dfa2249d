//! # Domain Lookup
//!
//! Client side of an SSL report lookup tool: submit a domain name, receive
//! its SSL grade and server list from a backend, and keep a list of
//! previously queried domains.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Report entities and the backend port
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` backend client
//! - **Store** ([`store`]) - Application state, actions and the reducer
//! - **Navigation** ([`navigation`]) - Path-to-view table
//! - **API Layer** ([`api`]) - Axum host exposing views and intents over HTTP
//!
//! ## Quick Start
//!
//! ```bash
//! export BACKEND_URL="http://localhost:8090"
//! cargo run
//! curl -X POST localhost:8080/domain -d '{"domainName":"example.com"}' \
//!      -H 'Content-Type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod navigation;
pub mod state;
pub mod store;

pub mod config;
pub mod server;

pub mod routes;

pub use error::{AppError, LookupError};
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::domain::backend::{BackendError, DomainBackend};
    pub use crate::domain::entities::{DomainReport, HistoryEntry, Server};
    pub use crate::error::{AppError, LookupError};
    pub use crate::infrastructure::HttpDomainBackend;
    pub use crate::navigation::{NavigationTable, View};
    pub use crate::state::AppState;
    pub use crate::store::{LookupState, LookupStore};
}
