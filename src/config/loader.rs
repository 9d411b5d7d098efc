//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Overrides `data.path`.
pub const DATA_PATH_ENV: &str = "DATA_PATH";
/// Overrides `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Resolve the effective configuration: file (or defaults), then environment.
pub fn resolve_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    resolve_config_with(path, |var| std::env::var(var).ok())
}

/// [`resolve_config`] with an explicit environment lookup.
///
/// Validation runs once, after the overrides, so an environment value can
/// repair a file value.
pub fn resolve_config_with<F>(path: Option<&Path>, lookup: F) -> Result<ServiceConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    apply_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply `DATA_PATH` and `PORT` on top of `config`.
///
/// `lookup` abstracts the environment so tests don't have to mutate the
/// process-wide one.
pub fn apply_overrides<F>(config: &mut ServiceConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = lookup(DATA_PATH_ENV) {
        config.data.path = path;
    }

    if let Some(port) = lookup(PORT_ENV) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
            var: PORT_ENV,
            value: port,
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_path_and_port() {
        let mut config = ServiceConfig::default();
        apply_overrides(
            &mut config,
            env(&[(DATA_PATH_ENV, "/tmp/books.csv"), (PORT_ENV, "8088")]),
        )
        .unwrap();

        assert_eq!(config.data.path, "/tmp/books.csv");
        assert_eq!(config.listener.port, 8088);
    }

    #[test]
    fn missing_env_keeps_config() {
        let mut config = ServiceConfig::default();
        apply_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config.listener.port, 5055);
        assert_eq!(config.data.path, "assets/sample.csv");
    }

    #[test]
    fn bad_port_is_rejected() {
        let mut config = ServiceConfig::default();
        let err = apply_overrides(&mut config, env(&[(PORT_ENV, "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { var: PORT_ENV, .. }));
    }

    fn write_toml(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "record-service-{}-{}.toml",
            std::process::id(),
            name
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn env_port_repairs_invalid_file_port() {
        let path = write_toml("port-zero", "[listener]\nport = 0\n");

        let config = resolve_config_with(Some(path.as_path()), env(&[(PORT_ENV, "8080")])).unwrap();
        assert_eq!(config.listener.port, 8080);

        let err = resolve_config_with(Some(path.as_path()), env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/record-service.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
