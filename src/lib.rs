//! CSV Record Service Library
//!
//! Loads a CSV file into memory once at startup and serves it read-only over
//! HTTP. See [`http::HttpServer`] for the entry point used by the binary and
//! the integration tests.

pub mod config;
pub mod data;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ServiceConfig;
pub use data::{Record, RecordStore};
pub use error::ServiceError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
