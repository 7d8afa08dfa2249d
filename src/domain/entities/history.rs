//! History entry entity.

use super::DomainReport;
use serde::Serialize;

/// One previously queried domain, without server detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub ssl_grade: String,
    pub previous_ssl_grade: String,
    pub logo: String,
    pub title: String,
    pub is_down: bool,
}

impl From<&DomainReport> for HistoryEntry {
    fn from(report: &DomainReport) -> Self {
        Self {
            ssl_grade: report.ssl_grade.clone(),
            previous_ssl_grade: report.previous_ssl_grade.clone(),
            logo: report.logo.clone(),
            title: report.title.clone(),
            is_down: report.is_down,
        }
    }
}
