//! Timezone handling utilities.
//!
//! This module resolves IANA zone names, reports the civil offset in effect
//! at an instant, and converts local wall-clock times back to UTC with
//! explicit handling of DST gaps and overlaps.

use std::cmp::Ordering;

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{PtListError, Result};

/// Parse an IANA timezone name into a [`chrono_tz::Tz`].
///
/// # Examples
///
/// ```
/// use ptlist_core::tz::parse_tz;
///
/// let tz = parse_tz("Europe/Athens").unwrap();
/// assert_eq!(tz.to_string(), "Europe/Athens");
/// assert!(parse_tz("Europe/Aten").is_err());
/// ```
pub fn parse_tz(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|_| PtListError::TimezoneLoading(format!("unknown time zone {}", name)))
}

/// Civil UTC offset, in seconds east of UTC, in effect at `instant` in `tz`.
pub fn offset_seconds_at(instant: DateTime<Utc>, tz: Tz) -> i32 {
    tz.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

/// Convert a local wall-clock time in `tz` to UTC.
///
/// Ambiguous times (fall back) resolve to the earlier instant. Nonexistent
/// times (spring forward) are read with the offset in effect before the gap,
/// which lands them after the transition by the length of the gap.
pub fn local_to_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            let before = tz
                .offset_from_utc_datetime(&(local - TimeDelta::days(1)))
                .fix()
                .local_minus_utc();
            (local - TimeDelta::seconds(i64::from(before))).and_utc()
        }
    }
}

/// UTC instant of local midnight at the start of `date` in `tz`.
pub fn local_midnight_to_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    local_to_utc(date.and_time(NaiveTime::MIN), tz)
}

/// Snap an instant to a local day boundary when its local date and UTC date differ.
///
/// - local date later than UTC date: local midnight starting the local date
///   (moves the instant earlier)
/// - local date earlier than UTC date: local midnight ending the local date
///   (moves the instant later)
/// - same date: unchanged
pub fn normalize_to_local_day(instant: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
    let local_date = instant.with_timezone(&tz).date_naive();
    let utc_date = instant.date_naive();

    match local_date.cmp(&utc_date) {
        Ordering::Greater => local_midnight_to_utc(local_date, tz),
        Ordering::Less => match local_date.succ_opt() {
            Some(next) => local_midnight_to_utc(next, tz),
            None => instant,
        },
        Ordering::Equal => instant,
    }
}
