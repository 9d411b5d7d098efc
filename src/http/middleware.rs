//! Request-boundary hook.
//! Counts and logs every request before it reaches a handler.

use std::time::Instant;

use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::http::request::RequestIdExt;
use crate::http::server::AppState;
use crate::observability::metrics::record_http_request;

pub async fn track_requests(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    state.metrics.record_request();

    let method = req.method().to_string();
    // Route template keeps the Prometheus label set bounded.
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    tracing::info!(
        request_id = %req.request_id(),
        method = %method,
        path = %req.uri().path(),
        "Request"
    );

    let response = next.run(req).await;
    record_http_request(&method, &route, response.status().as_u16(), start);
    response
}
