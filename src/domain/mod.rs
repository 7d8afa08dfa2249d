//! Domain layer: lookup entities and the backend port.
//!
//! - [`entities`] - Domain report, server and history entry types
//! - [`backend`] - Trait abstracting the SSL report backend

pub mod backend;
pub mod entities;
