//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file)
//!     → loader.rs (DATA_PATH / PORT overrides)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the data it points at is loaded once too
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{resolve_config, resolve_config_with, ConfigError};
pub use schema::{
    DataConfig, GenreMatch, ListenerConfig, LoadFailurePolicy, LogFormat, ObservabilityConfig,
    RecordsConfig, ServiceConfig, TimeoutConfig,
};
