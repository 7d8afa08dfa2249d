//! Wire shapes exchanged with the SSL report backend.
//!
//! The backend speaks snake_case JSON except for the request body, which
//! carries `domainName`.

use crate::domain::entities::{DomainReport, HistoryEntry, Server};
use serde::{Deserialize, Serialize};

/// Body of `POST /domain`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest<'a> {
    pub domain_name: &'a str,
}

/// Server element of a domain response.
#[derive(Debug, Deserialize)]
pub struct ServerBody {
    pub address: String,
    pub country: String,
    pub owner: String,
    pub ssl_grade: String,
}

/// Body of a successful `POST /domain`.
#[derive(Debug, Deserialize)]
pub struct DomainBody {
    pub ssl_grade: String,
    pub previous_ssl_grade: String,
    pub logo: String,
    pub title: String,
    pub is_down: bool,
    #[serde(default)]
    pub servers_changed: bool,
    #[serde(default)]
    pub servers: Vec<ServerBody>,
}

/// Element of a successful `GET /get-last-domains`.
///
/// The backend may include server detail here; it is ignored.
#[derive(Debug, Deserialize)]
pub struct HistoryBody {
    pub ssl_grade: String,
    pub previous_ssl_grade: String,
    pub logo: String,
    pub title: String,
    pub is_down: bool,
}

/// Body of `GET /status`.
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: String,
}

impl From<ServerBody> for Server {
    fn from(body: ServerBody) -> Self {
        Server::new(body.address, body.country, body.owner, body.ssl_grade)
    }
}

impl From<DomainBody> for DomainReport {
    fn from(body: DomainBody) -> Self {
        Self {
            ssl_grade: body.ssl_grade,
            previous_ssl_grade: body.previous_ssl_grade,
            logo: body.logo,
            title: body.title,
            is_down: body.is_down,
            servers_changed: body.servers_changed,
            servers: body.servers.into_iter().map(Server::from).collect(),
        }
    }
}

impl From<HistoryBody> for HistoryEntry {
    fn from(body: HistoryBody) -> Self {
        Self {
            ssl_grade: body.ssl_grade,
            previous_ssl_grade: body.previous_ssl_grade,
            logo: body.logo,
            title: body.title,
            is_down: body.is_down,
        }
    }
}
