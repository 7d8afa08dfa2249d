//! Handler serving the navigation table's views.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, Uri},
};
use serde_json::json;

use crate::api::dto::view::{LookupRequest, ViewResponse};
use crate::error::AppError;
use crate::navigation::View;
use crate::state::AppState;

/// Resolves the request path through the navigation table and serves the view.
///
/// Mounted as the router fallback, so a lazy view is only loaded when a
/// request first reaches it.
///
/// # Endpoints
///
/// - `GET  {base}/`        - Home view
/// - `GET  {base}/domain`  - Domain view, current report
/// - `POST {base}/domain`  - Looks up `{"domainName": "..."}`, then Domain view
/// - `GET  {base}/domains` - Reloads history, then Domains view
///
/// # Response
///
/// ```json
/// {
///   "view": "Domain",
///   "path": "/domain",
///   "state": {
///     "report": { "ssl_grade": "A", "servers": [ ... ], ... },
///     "history": [],
///     "flags": { "submitting": false, "loading": false, "show_info": true },
///     "error": { "message": "", "active": false },
///     "backend": "unknown",
///     "updated_at": "2026-10-18T12:00:00Z"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 for unregistered paths, 405 for unsupported methods and 400
/// when the lookup body is not valid JSON. Lookup failures are not HTTP
/// errors: they show up in `state.error`.
pub async fn view_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Result<Json<ViewResponse>, AppError> {
    let path = uri.path();
    let route = state.navigation.resolve(path).ok_or_else(|| {
        AppError::not_found("No view registered for path", json!({ "path": path }))
    })?;
    let view = route.view();

    match (view, &method) {
        (View::Home | View::Domain, &Method::GET) => {}
        (View::Domain, &Method::POST) => {
            let request: LookupRequest = serde_json::from_slice(&body).map_err(|e| {
                AppError::bad_request("Invalid request body", json!({ "reason": e.to_string() }))
            })?;
            state.store.fetch_domain(&request.domain_name).await;
        }
        (View::Domains, &Method::GET) => state.store.fetch_domain_history().await,
        _ => {
            return Err(AppError::method_not_allowed(
                "Method not allowed for view",
                json!({ "view": view, "method": method.as_str() }),
            ));
        }
    }

    Ok(Json(ViewResponse {
        view,
        path: state.navigation.full_path(route),
        state: state.store.snapshot(),
    }))
}
