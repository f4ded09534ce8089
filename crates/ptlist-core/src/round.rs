//! Boundary rounding.
//!
//! Aligns the raw `t1`/`t2` instants to the natural boundary of the period.
//! The rules are applied to the UTC calendar fields of the instants; the
//! rounded bounds are then normalized against the zone's local day (see
//! [`normalize_to_local_day`]).

use chrono::{DateTime, Datelike, TimeDelta, Timelike, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::calendar::{at_hour, last_day_of_month, last_day_of_year};
use crate::error::{PtListError, Result};
use crate::models::{Bounds, Period};
use crate::parse::format_wire_timestamp;
use crate::tz::normalize_to_local_day;

/// Round the raw window `[start, end]` for `period` as observed in `tz`.
///
/// 1. A `start` with a non-zero minute moves up to the top of the next hour.
/// 2. Per period:
///    - hourly: `end` is truncated to its hour if its minute is non-zero
///    - daily: `end` moves to the previous day at `start`'s hour if its
///      minute is non-zero
///    - monthly: `start` moves to the last day of its month, `end` to the
///      last day of the month before its own, both at `start`'s hour
///    - yearly: `start` moves to December 31 of its year, `end` to
///      December 31 of the year before its own, both at `start`'s hour
/// 3. Both bounds are normalized to the local day in `tz`.
///
/// The result may have `start > end`, which generates an empty series.
///
/// # Examples
///
/// ```
/// use ptlist_core::models::Period;
/// use ptlist_core::parse::{format_wire_timestamp, parse_wire_timestamp};
/// use ptlist_core::round::round_bounds;
/// use ptlist_core::tz::parse_tz;
///
/// let start = parse_wire_timestamp("20180214T204603Z").unwrap();
/// let end = parse_wire_timestamp("20211115T123456Z").unwrap();
/// let tz = parse_tz("Europe/Athens").unwrap();
///
/// let bounds = round_bounds(start, end, Period::Yearly, tz).unwrap();
/// assert_eq!(format_wire_timestamp(&bounds.start), "20181231T210000Z");
/// assert_eq!(format_wire_timestamp(&bounds.end), "20201231T210000Z");
/// ```
pub fn round_bounds(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    period: Period,
    tz: Tz,
) -> Result<Bounds> {
    let start = round_up_to_hour(start)?;
    let hour = start.hour();

    let (start, end) = match period {
        Period::Hourly => {
            let end = if end.minute() > 0 {
                in_range(at_hour(end.date_naive(), end.hour()))?
            } else {
                end
            };
            (start, end)
        }
        Period::Daily => {
            let end = if end.minute() > 0 {
                in_range(end.date_naive().pred_opt().and_then(|d| at_hour(d, hour)))?
            } else {
                end
            };
            (start, end)
        }
        Period::Monthly => (
            in_range(
                last_day_of_month(start.year(), start.month(), 0).and_then(|d| at_hour(d, hour)),
            )?,
            in_range(
                last_day_of_month(end.year(), end.month(), -1).and_then(|d| at_hour(d, hour)),
            )?,
        ),
        Period::Yearly => (
            in_range(last_day_of_year(start.year()).and_then(|d| at_hour(d, hour)))?,
            in_range(
                end.year()
                    .checked_sub(1)
                    .and_then(last_day_of_year)
                    .and_then(|d| at_hour(d, hour)),
            )?,
        ),
    };

    let bounds = Bounds::new(
        normalize_to_local_day(start, tz),
        normalize_to_local_day(end, tz),
    );

    debug!(
        %period,
        %tz,
        start = %format_wire_timestamp(&bounds.start),
        end = %format_wire_timestamp(&bounds.end),
        "Rounded bounds"
    );

    Ok(bounds)
}

/// Move an instant with a non-zero minute to the top of the following hour.
///
/// Instants already on the hour keep their seconds.
fn round_up_to_hour(instant: DateTime<Utc>) -> Result<DateTime<Utc>> {
    if instant.minute() == 0 {
        return Ok(instant);
    }

    in_range(
        at_hour(instant.date_naive(), instant.hour())
            .and_then(|top| top.checked_add_signed(TimeDelta::hours(1))),
    )
}

fn in_range(rounded: Option<DateTime<Utc>>) -> Result<DateTime<Utc>> {
    rounded.ok_or_else(|| PtListError::TimeRounding("rounded time is out of range".to_string()))
}
