//! Period stepping.
//!
//! Advances an instant by exactly one period. Hourly steps are a fixed
//! absolute duration; the other periods step on the UTC calendar, and the
//! monthly and yearly periods anchor on the end of the period so that
//! months of different lengths and leap years never shift the cadence.

use chrono::{DateTime, Datelike, Days, TimeDelta, Timelike, Utc};

use crate::calendar::{at_hour, last_day_of_month, last_day_of_year};
use crate::error::{PtListError, Result};
use crate::models::Period;

/// Advance `instant` by one `period`.
///
/// - hourly: +1 hour
/// - daily: +1 calendar day, time of day kept
/// - monthly: last day of the following month, at the same hour
/// - yearly: December 31 of the following year, at the same hour
///
/// Monthly and yearly steps zero minutes and seconds. The result is always
/// strictly later than `instant`.
///
/// # Examples
///
/// ```
/// use ptlist_core::models::Period;
/// use ptlist_core::parse::{format_wire_timestamp, parse_wire_timestamp};
/// use ptlist_core::step::step;
///
/// let jan = parse_wire_timestamp("20210131T210000Z").unwrap();
/// let feb = step(jan, Period::Monthly).unwrap();
/// assert_eq!(format_wire_timestamp(&feb), "20210228T210000Z");
/// ```
pub fn step(instant: DateTime<Utc>, period: Period) -> Result<DateTime<Utc>> {
    let next = match period {
        Period::Hourly => instant.checked_add_signed(TimeDelta::hours(1)),
        Period::Daily => instant.checked_add_days(Days::new(1)),
        Period::Monthly => last_day_of_month(instant.year(), instant.month(), 1)
            .and_then(|d| at_hour(d, instant.hour())),
        Period::Yearly => last_day_of_year(instant.year())
            .and_then(|d| at_hour(d, instant.hour()))
            .and_then(|anchor| anchor.with_year(anchor.year().checked_add(1)?)),
    };

    next.ok_or_else(|| {
        PtListError::AddingPeriod(format!(
            "cannot add {} to {}",
            period,
            instant.format("%Y-%m-%dT%H:%M:%SZ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{format_wire_timestamp, parse_wire_timestamp};

    fn step_wire(input: &str, period: Period) -> String {
        format_wire_timestamp(&step(parse_wire_timestamp(input).unwrap(), period).unwrap())
    }

    #[test]
    fn hourly_is_fixed_duration() {
        assert_eq!(step_wire("20210714T230000Z", Period::Hourly), "20210715T000000Z");
        assert_eq!(step_wire("20210714T200030Z", Period::Hourly), "20210714T210030Z");
    }

    #[test]
    fn daily_rolls_over_month_and_year() {
        assert_eq!(step_wire("20210228T210000Z", Period::Daily), "20210301T210000Z");
        assert_eq!(step_wire("20200228T210000Z", Period::Daily), "20200229T210000Z");
        assert_eq!(step_wire("20211231T150000Z", Period::Daily), "20220101T150000Z");
    }

    #[test]
    fn monthly_keeps_end_of_month_anchor() {
        let mut cursor = "20210131T220000Z".to_string();
        let mut seen = Vec::new();
        for _ in 0..13 {
            cursor = step_wire(&cursor, Period::Monthly);
            seen.push(cursor.clone());
        }
        assert_eq!(
            seen,
            vec![
                "20210228T220000Z",
                "20210331T220000Z",
                "20210430T220000Z",
                "20210531T220000Z",
                "20210630T220000Z",
                "20210731T220000Z",
                "20210831T220000Z",
                "20210930T220000Z",
                "20211031T220000Z",
                "20211130T220000Z",
                "20211231T220000Z",
                "20220131T220000Z",
                "20220228T220000Z",
            ]
        );
    }

    #[test]
    fn monthly_from_mid_month_lands_on_next_month_end() {
        assert_eq!(step_wire("20200115T064512Z", Period::Monthly), "20200229T060000Z");
    }

    #[test]
    fn monthly_from_first_of_month_skips_to_next_month_end() {
        // A cursor pushed past midnight into the next month advances from there.
        assert_eq!(step_wire("20210301T000000Z", Period::Monthly), "20210430T000000Z");
    }

    #[test]
    fn yearly_keeps_end_of_year_anchor() {
        assert_eq!(step_wire("20181231T220000Z", Period::Yearly), "20191231T220000Z");
        assert_eq!(step_wire("20191231T220000Z", Period::Yearly), "20201231T220000Z");
        assert_eq!(step_wire("20200614T101500Z", Period::Yearly), "20211231T100000Z");
    }

    #[test]
    fn step_is_strictly_increasing_for_all_periods() {
        let samples = [
            "20200101T000000Z",
            "20200131T230000Z",
            "20200229T120000Z",
            "20201231T235959Z",
            "20210615T064500Z",
        ];
        for period in [Period::Hourly, Period::Daily, Period::Monthly, Period::Yearly] {
            for sample in samples {
                let instant = parse_wire_timestamp(sample).unwrap();
                let next = step(instant, period).unwrap();
                assert!(next > instant, "{period} from {sample} went to {next}");
            }
        }
    }

    #[test]
    fn stepping_past_the_representable_range_fails() {
        let last = DateTime::<Utc>::MAX_UTC;
        for period in [Period::Hourly, Period::Daily, Period::Monthly, Period::Yearly] {
            match step(last, period) {
                Err(PtListError::AddingPeriod(_)) => {}
                other => panic!("expected AddingPeriod for {period}, got {other:?}"),
            }
        }
    }
}
