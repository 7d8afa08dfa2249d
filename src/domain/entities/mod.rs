//! Domain entities representing lookup results.
//!
//! Entities are the client-side view of what the backend reports. They are
//! built from wire DTOs in [`crate::infrastructure`] and never edited by users.

pub mod history;
pub mod report;
pub mod server;

pub use history::HistoryEntry;
pub use report::DomainReport;
pub use server::Server;
