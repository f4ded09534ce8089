use chrono::{DateTime, Utc};
use ptlist_core::parse_wire_timestamp;
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Install the stderr log subscriber. `RUST_LOG` overrides the defaults.
pub fn init_tracing(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn parse_reference(s: Option<&str>) -> CliResult<Option<DateTime<Utc>>> {
    s.map(|raw| {
        parse_wire_timestamp(raw)
            .map_err(|e| CliError::input(format!("Invalid reference timestamp: {}", e)))
    })
    .transpose()
}
