//! DTOs for view endpoints.

use crate::navigation::View;
use crate::store::LookupState;
use serde::{Deserialize, Serialize};

/// Body of `POST /domain`.
///
/// A missing `domainName` is treated as empty and rejected by the store.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    #[serde(rename = "domainName", default)]
    pub domain_name: String,
}

/// A view together with the state it renders from.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub view: View,
    pub path: String,
    pub state: LookupState,
}
