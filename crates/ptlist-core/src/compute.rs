//! Series computation entry points.
//!
//! Ties the pieces together: resolve the zone, parse the bounds, round them
//! for the period and generate the DST-corrected series.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::generate::SeriesGenerator;
use crate::models::{Period, SeriesResult};
use crate::parse::{format_wire_timestamp, parse_wire_timestamp};
use crate::round::round_bounds;
use crate::tz::parse_tz;

/// Compute the firing instants of a periodic task between `t1` and `t2`.
///
/// # Arguments
///
/// * `t1` - Unrounded start of the window
/// * `t2` - Unrounded end of the window
/// * `tz` - The zone the task's wall-clock cadence is defined in
/// * `period` - The task cadence
/// * `reference` - Instant whose civil offset seeds the DST correction;
///   `None` uses the current time
///
/// # Examples
///
/// ```
/// use ptlist_core::compute::compute_series;
/// use ptlist_core::models::Period;
/// use ptlist_core::parse::{format_wire_timestamp, parse_wire_timestamp};
/// use ptlist_core::tz::parse_tz;
///
/// let t1 = parse_wire_timestamp("20210714T204603Z").unwrap();
/// let t2 = parse_wire_timestamp("20210715T123456Z").unwrap();
/// let tz = parse_tz("Europe/Athens").unwrap();
/// let reference = parse_wire_timestamp("20210714T120000Z").unwrap();
///
/// let series = compute_series(t1, t2, tz, Period::Hourly, Some(reference)).unwrap();
/// assert_eq!(series.len(), 16);
/// assert_eq!(format_wire_timestamp(&series[0]), "20210714T210000Z");
/// assert_eq!(format_wire_timestamp(&series[15]), "20210715T120000Z");
/// ```
pub fn compute_series(
    t1: DateTime<Utc>,
    t2: DateTime<Utc>,
    tz: Tz,
    period: Period,
    reference: Option<DateTime<Utc>>,
) -> crate::error::Result<Vec<DateTime<Utc>>> {
    let bounds = round_bounds(t1, t2, period, tz)?;

    let mut generator = SeriesGenerator::new(tz, period);
    if let Some(reference) = reference {
        generator = generator.with_reference(reference);
    }

    generator.generate(bounds)
}

/// Compute a series from the four request strings.
///
/// Inputs are validated in order: timezone, `t1`, `t2`, then the period
/// code. The first failure is returned and nothing else is computed.
///
/// # Arguments
///
/// * `period` - Period code: `1h`, `1d`, `1mo` or `1y`
/// * `tz_name` - IANA timezone name
/// * `t1` - Start bound in wire format
/// * `t2` - End bound in wire format
/// * `reference` - See [`compute_series`]
pub fn compute_series_from_strings(
    period: &str,
    tz_name: &str,
    t1: &str,
    t2: &str,
    reference: Option<DateTime<Utc>>,
) -> crate::error::Result<SeriesResult> {
    let tz = parse_tz(tz_name)?;
    let start = parse_wire_timestamp(t1)?;
    let end = parse_wire_timestamp(t2)?;
    let period: Period = period.parse()?;

    let series = compute_series(start, end, tz, period, reference)?;
    debug!(%period, tz = tz_name, t1, t2, len = series.len(), "Computed series");

    Ok(SeriesResult {
        period,
        tz: tz_name.to_string(),
        t1: t1.to_string(),
        t2: t2.to_string(),
        timestamps: series.iter().map(format_wire_timestamp).collect(),
    })
}
