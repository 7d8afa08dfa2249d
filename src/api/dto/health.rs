//! DTOs for health check endpoint.

use crate::store::BackendStatus;
use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each dependency.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub backend: CheckStatus,
}

/// Individual dependency health status.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: BackendStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
