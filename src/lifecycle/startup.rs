//! Startup orchestration.
//!
//! # Design Decisions
//! - Records load before the listener binds (traffic only when ready)
//! - A load failure is fatal or tolerated per `data.on_load_error`
//! - Subsystems initialize in order, not concurrently

use std::net::SocketAddr;
use std::path::Path;

use crate::config::ServiceConfig;
use crate::data::load_store;
use crate::error::ServiceError;
use crate::http::HttpServer;
use crate::observability::metrics::{init_prometheus, record_store_size};

/// Load the records and build the server for `config`.
///
/// Must be called from inside a Tokio runtime when Prometheus is enabled.
pub fn bootstrap(config: ServiceConfig) -> Result<HttpServer, ServiceError> {
    tracing::info!(
        bind_address = %config.bind_address(),
        data_path = %config.data.path,
        on_load_error = ?config.data.on_load_error,
        genre_match = ?config.records.genre_match,
        "Configuration loaded"
    );

    let store = load_store(Path::new(&config.data.path), config.data.on_load_error)?;

    let obs = &config.observability;
    if obs.prometheus_enabled {
        let addr: SocketAddr = obs
            .prometheus_address
            .parse()
            .map_err(|_| ServiceError::BindAddress(obs.prometheus_address.clone()))?;
        init_prometheus(addr);
    }
    record_store_size(store.len());

    Ok(HttpServer::new(config, store))
}
