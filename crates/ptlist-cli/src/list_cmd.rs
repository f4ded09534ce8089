use std::process::ExitCode;

use ptlist_core::{SeriesResult, compute_series_from_strings};

use crate::cli::ListArgs;
use crate::error::{CliError, CliResult, EXIT_SUCCESS, OutputFormat};
use crate::shared::parse_reference;

pub fn run_list(args: ListArgs, output_format: OutputFormat) -> CliResult<ExitCode> {
    let reference = parse_reference(args.reference.as_deref())?;

    let result = compute_series_from_strings(&args.period, &args.tz, &args.t1, &args.t2, reference)?;

    print!("{}", render_series(&result, output_format)?);

    Ok(ExitCode::from(EXIT_SUCCESS))
}

fn render_series(result: &SeriesResult, output_format: OutputFormat) -> CliResult<String> {
    match output_format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| CliError::runtime(format!("Failed to serialize JSON: {}", e)))?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Text => Ok(result
            .timestamps
            .iter()
            .map(|ts| format!("{}\n", ts))
            .collect()),
    }
}

#[cfg(test)]
mod tests {
    use ptlist_core::Period;

    use super::*;

    fn tokyo_daily() -> SeriesResult {
        SeriesResult {
            period: Period::Daily,
            tz: "Asia/Tokyo".to_string(),
            t1: "20210301T000000Z".to_string(),
            t2: "20210303T000000Z".to_string(),
            timestamps: vec![
                "20210301T150000Z".to_string(),
                "20210302T150000Z".to_string(),
            ],
        }
    }

    #[test]
    fn text_output_is_one_timestamp_per_line() {
        let out = render_series(&tokyo_daily(), OutputFormat::Text).unwrap();
        assert_eq!(out, "20210301T150000Z\n20210302T150000Z\n");
    }

    #[test]
    fn text_output_of_empty_series_is_empty() {
        let mut result = tokyo_daily();
        result.timestamps.clear();
        assert_eq!(render_series(&result, OutputFormat::Text).unwrap(), "");
    }

    #[test]
    fn json_output_echoes_request() {
        let out = render_series(&tokyo_daily(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["period"], "1d");
        assert_eq!(value["tz"], "Asia/Tokyo");
        assert_eq!(value["timestamps"][1], "20210302T150000Z");
        assert!(out.ends_with("}\n"));
    }
}
