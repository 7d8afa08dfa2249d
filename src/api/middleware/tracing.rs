//! Request/response tracing for the state host.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Creates the tracing layer wrapped around every route.
///
/// Spans are opened at `INFO` with method, URI and version; responses are
/// logged with status and latency in milliseconds; 5xx responses are logged
/// again at `WARN`.
///
/// ```text
/// INFO request{method=POST uri=/domain version=HTTP/1.1}: finished processing request latency=842 ms status=200
/// ```
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(DefaultOnFailure::new().level(Level::WARN))
}
