//! Typed async client for record-service.

mod client;

pub use client::{Counters, HealthResponse, MetricsResponse, RecordClient, RecordObject};
