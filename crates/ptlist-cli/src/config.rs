//! Server configuration.
//!
//! The listening port comes from `APP_PORT` (process environment or env
//! file) when set; otherwise from the command line if it lies in the
//! dynamic port range, falling back to [`DEFAULT_PORT`].

use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

pub const DEFAULT_ENV_FILE: &str = "../env/.env";
pub const PORT_ENV: &str = "APP_PORT";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 65535;

/// Dynamic/private ports (RFC 6335), never assigned to a service.
pub const DYNAMIC_PORTS: RangeInclusive<u16> = 49152..=65535;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load the env file (if present) and resolve the listening address.
    pub fn load(env_file: &Path, port_arg: Option<&str>) -> Result<Self> {
        match dotenvy::from_path(env_file) {
            Ok(()) => debug!(path = %env_file.display(), "Loaded env file"),
            Err(e) => warn!(path = %env_file.display(), error = %e, "Could not load env file"),
        }

        let env_port = std::env::var(PORT_ENV).ok();
        let port = resolve_port(env_port.as_deref(), port_arg)?;

        Ok(Self {
            host: DEFAULT_HOST.to_string(),
            port,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Pick the listening port.
///
/// A non-empty `env_port` always wins and must be a valid port. Otherwise
/// `port_arg` is used when it parses and lies in [`DYNAMIC_PORTS`].
pub fn resolve_port(env_port: Option<&str>, port_arg: Option<&str>) -> Result<u16> {
    if let Some(raw) = env_port.map(str::trim).filter(|s| !s.is_empty()) {
        return raw
            .parse::<u16>()
            .with_context(|| format!("Invalid {} '{}'", PORT_ENV, raw));
    }

    Ok(port_arg
        .and_then(|arg| arg.trim().parse::<u16>().ok())
        .filter(|port| DYNAMIC_PORTS.contains(port))
        .unwrap_or(DEFAULT_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_port_wins() {
        assert_eq!(resolve_port(Some("8080"), Some("50000")).unwrap(), 8080);
    }

    #[test]
    fn invalid_env_port_is_an_error() {
        let err = resolve_port(Some("http"), None).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
        assert!(resolve_port(Some("70000"), None).is_err());
    }

    #[test]
    fn empty_env_port_is_ignored() {
        assert_eq!(resolve_port(Some(""), Some("50000")).unwrap(), 50000);
        assert_eq!(resolve_port(Some("  "), None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn argument_must_be_a_dynamic_port() {
        assert_eq!(resolve_port(None, Some("49152")).unwrap(), 49152);
        assert_eq!(resolve_port(None, Some("65535")).unwrap(), 65535);
        assert_eq!(resolve_port(None, Some("49151")).unwrap(), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("8080")).unwrap(), DEFAULT_PORT);
        assert_eq!(resolve_port(None, Some("not-a-port")).unwrap(), DEFAULT_PORT);
        assert_eq!(resolve_port(None, None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: 50001,
        };
        assert_eq!(config.bind_addr(), "0.0.0.0:50001");
    }
}
