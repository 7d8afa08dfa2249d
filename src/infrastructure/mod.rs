//! Infrastructure layer: concrete adapters for external services.
//!
//! - [`HttpDomainBackend`] - `reqwest` implementation of [`crate::domain::backend::DomainBackend`]

mod dto;
mod http_backend;

pub use http_backend::HttpDomainBackend;
