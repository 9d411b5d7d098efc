//! Startup error type.
//!
//! Request handling never fails past the router, so the only errors that
//! surface to the caller are the ones that stop the service from starting.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::data::DataError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("data load error: {0}")]
    Data(#[from] DataError),

    #[error("invalid bind address {0}")]
    BindAddress(String),
}
