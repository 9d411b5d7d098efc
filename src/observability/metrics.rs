//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Per-process request counters served as JSON on `/metrics`
//! - Optional Prometheus scrape endpoint via the `metrics` facade
//!
//! # Metrics
//! - `record_service_http_requests_total` (counter): by method, path, status
//! - `record_service_http_request_duration_seconds` (histogram): by method, path
//! - `record_service_data_records` (gauge): rows in the store
//!
//! # Design Decisions
//! - Counters are atomics owned by [`ServiceMetrics`] and injected through
//!   handler state, never globals
//! - Relaxed ordering: counters are independent and only read for reporting

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Serialize;

/// In-process request counters, reset only by a restart.
#[derive(Debug)]
pub struct ServiceMetrics {
    requests_total: AtomicU64,
    health_checks: AtomicU64,
    records_requests: AtomicU64,
    started_at: DateTime<Utc>,
    started: Instant,
}

/// Point-in-time copy of [`ServiceMetrics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub health_checks: u64,
    pub records_requests: u64,
    pub start_time: DateTime<Utc>,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            requests_total: AtomicU64::new(0),
            health_checks: AtomicU64::new(0),
            records_requests: AtomicU64::new(0),
            started_at: Utc::now(),
            started: Instant::now(),
        }
    }

    pub fn record_request(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_health_check(&self) {
        self.health_checks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_records_request(&self) {
        self.records_requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Time since the counters were created.
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            health_checks: self.health_checks.load(Ordering::Relaxed),
            records_requests: self.records_requests.load(Ordering::Relaxed),
            start_time: self.started_at,
        }
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the Prometheus exporter listening on `addr`.
///
/// Must be called from inside a Tokio runtime.
pub fn init_prometheus(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Prometheus exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install Prometheus exporter"),
    }
}

/// Record one finished HTTP request.
pub fn record_http_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "record_service_http_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!(
        "record_service_http_request_duration_seconds",
        "method" => method.to_string(),
        "path" => path.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}

/// Publish the store size once it is known.
pub fn record_store_size(count: usize) {
    metrics::gauge!("record_service_data_records").set(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn counters_start_at_zero() {
        let snapshot = ServiceMetrics::new().snapshot();
        assert_eq!(snapshot.requests_total, 0);
        assert_eq!(snapshot.health_checks, 0);
        assert_eq!(snapshot.records_requests, 0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        let metrics = Arc::new(ServiceMetrics::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let metrics = metrics.clone();
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_request();
                        metrics.record_records_request();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.requests_total, 8000);
        assert_eq!(snapshot.records_requests, 8000);
        assert_eq!(snapshot.health_checks, 0);
    }

    #[test]
    fn snapshot_serializes_start_time_as_rfc3339() {
        let metrics = ServiceMetrics::new();
        metrics.record_health_check();
        let json = serde_json::to_value(metrics.snapshot()).unwrap();

        assert_eq!(json["health_checks"], 1);
        let start = json["start_time"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(start).is_ok());
    }
}
