//! Endpoint handlers: `/health`, `/metrics`, `/records`.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::data::GenreFilter;
use crate::http::server::AppState;
use crate::observability::MetricsSnapshot;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub metrics: MetricsSnapshot,
    pub uptime_seconds: f64,
    pub data_records: usize,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    state.metrics.record_health_check();
    Json(HealthResponse {
        status: "ok",
        timestamp: state.health_timestamp.then(Utc::now),
    })
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        metrics: state.metrics.snapshot(),
        uptime_seconds: state.metrics.uptime().as_secs_f64(),
        data_records: state.store.len(),
    })
}

/// Lists the store, optionally narrowed by `?genre=`.
///
/// Query pairs are taken raw so repeated or unknown keys never turn into a
/// rejection; the first `genre` wins and an empty value means no filter.
pub async fn records(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    state.metrics.record_records_request();

    let genre = params
        .iter()
        .find(|(key, _)| key == "genre")
        .map(|(_, value)| value.as_str())
        .filter(|value| !value.is_empty());

    let records = state.store.records();
    match genre {
        Some(genre) => {
            let filtered = GenreFilter::new(genre, state.genre_match).apply(records);
            tracing::info!(count = filtered.len(), genre = %genre, "Filtered records");
            Json(filtered).into_response()
        }
        None => Json(records).into_response(),
    }
}
