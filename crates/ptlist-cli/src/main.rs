use std::process::ExitCode;

use clap::Parser;

mod cli;
mod config;
mod error;
mod list_cmd;
mod serve_cmd;
mod shared;

use cli::{Cli, Commands};
use error::{OutputFormat, output_format_hint, parse_output_format, render_error};
use list_cmd::run_list;
use serve_cmd::run_serve;
use shared::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::List(args) => {
            init_tracing(cli.verbose, "warn");

            let fallback = output_format_hint(&args.output_format);
            let output_format = match parse_output_format(&args.output_format) {
                Ok(format) => format,
                Err(err) => return render_error(&err, fallback),
            };

            match run_list(args, output_format) {
                Ok(code) => code,
                Err(err) => render_error(&err, output_format),
            }
        }
        Commands::Serve(args) => {
            init_tracing(cli.verbose, "info");

            match run_serve(args) {
                Ok(code) => code,
                Err(err) => render_error(&err, OutputFormat::Text),
            }
        }
    }
}
