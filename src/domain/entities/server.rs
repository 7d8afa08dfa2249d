//! Server entity: one endpoint behind a queried domain.

use serde::Serialize;

/// A server answering for a queried domain.
///
/// Built once from a backend response element and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Server {
    pub address: String,
    pub country: String,
    pub owner: String,
    pub ssl_grade: String,
}

impl Server {
    pub fn new(address: String, country: String, owner: String, ssl_grade: String) -> Self {
        Self {
            address,
            country,
            owner,
            ssl_grade,
        }
    }
}
