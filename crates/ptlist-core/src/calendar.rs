//! Calendar arithmetic on UTC fields shared by rounding and stepping.

use chrono::{DateTime, NaiveDate, Utc};

/// First day of the month `months_ahead` months after (`year`, `month`).
///
/// `months_ahead` may be negative. Returns `None` outside chrono's range.
pub(crate) fn first_of_month(year: i32, month: u32, months_ahead: i32) -> Option<NaiveDate> {
    let index = year
        .checked_mul(12)?
        .checked_add(i32::try_from(month).ok()? - 1)?
        .checked_add(months_ahead)?;
    let month0 = u32::try_from(index.rem_euclid(12)).ok()?;
    NaiveDate::from_ymd_opt(index.div_euclid(12), month0 + 1, 1)
}

/// Last day of the month `months_ahead` months after (`year`, `month`).
pub(crate) fn last_day_of_month(year: i32, month: u32, months_ahead: i32) -> Option<NaiveDate> {
    first_of_month(year, month, months_ahead.checked_add(1)?)?.pred_opt()
}

/// December 31 of `year`.
pub(crate) fn last_day_of_year(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 12, 31)
}

/// `date` at `hour`:00:00 UTC.
pub(crate) fn at_hour(date: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    date.and_hms_opt(hour, 0, 0).map(|naive| naive.and_utc())
}
