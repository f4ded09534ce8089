use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_ENV_FILE;

/// Periodic task timestamp list tool
#[derive(Parser, Debug)]
#[command(name = "ptlist")]
#[command(version, about = "Periodic task timestamp list tool")]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the timestamps at which a periodic task fires
    List(ListArgs),
    /// Serve the timestamp list over HTTP
    Serve(ServeArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Period: 1h, 1d, 1mo, 1y
    #[arg(short, long)]
    pub period: String,

    /// IANA timezone (e.g., Europe/Athens)
    #[arg(short, long)]
    pub tz: String,

    /// Start of window (YYYYMMDDThhmmssZ)
    #[arg(long)]
    pub t1: String,

    /// End of window (YYYYMMDDThhmmssZ)
    #[arg(long)]
    pub t2: String,

    /// Instant whose UTC offset seeds the DST correction (defaults to now)
    #[arg(long)]
    pub reference: Option<String>,

    /// Output format: json, text
    #[arg(long, default_value = "json")]
    pub output_format: String,
}

#[derive(clap::Args, Debug)]
pub struct ServeArgs {
    /// Port in the dynamic range 49152-65535 (APP_PORT takes precedence)
    pub port: Option<String>,

    /// Env file loaded before reading APP_PORT
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,
}
