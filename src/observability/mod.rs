//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request middleware and handlers produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (in-process counters + Prometheus facade)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → GET /metrics (JSON snapshot)
//!     → Prometheus scrape (optional)
//! ```

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::{MetricsSnapshot, ServiceMetrics};
