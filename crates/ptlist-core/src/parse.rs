//! Wire timestamp codec.
//!
//! The wire format is the fixed-width UTC representation `YYYYMMDDThhmmssZ`
//! (e.g. `20210714T204603Z`). Parsing and formatting are exact inverses for
//! every second-aligned instant in years 0000-9999.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};

use crate::error::{PtListError, Result};

/// `strftime` pattern of the wire format.
pub const WIRE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

const WIRE_LEN: usize = 16;

/// Parse a wire timestamp into a UTC instant.
///
/// The input must match `YYYYMMDDThhmmssZ` exactly: no surrounding
/// whitespace, no sign, no fractional seconds, no offset other than `Z`.
///
/// # Examples
///
/// ```
/// use ptlist_core::parse::parse_wire_timestamp;
/// use chrono::{TimeZone, Utc};
///
/// let dt = parse_wire_timestamp("20210714T204603Z").unwrap();
/// assert_eq!(dt, Utc.with_ymd_and_hms(2021, 7, 14, 20, 46, 3).single().unwrap());
/// ```
pub fn parse_wire_timestamp(input: &str) -> Result<DateTime<Utc>> {
    if !has_wire_shape(input) {
        return Err(PtListError::TimeParsing(format!(
            "Invalid timestamp: '{}'. Expected YYYYMMDDThhmmssZ",
            input
        )));
    }

    let naive = NaiveDateTime::parse_from_str(input, WIRE_FORMAT).map_err(|e| {
        PtListError::TimeParsing(format!("Invalid timestamp: '{}'. Error: {}", input, e))
    })?;

    // chrono reads second 60 as a leap second.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(PtListError::TimeParsing(format!(
            "Invalid timestamp: '{}'. Seconds must be 00-59",
            input
        )));
    }

    Ok(naive.and_utc())
}

/// Format a UTC instant in the wire format. Sub-second precision is dropped.
pub fn format_wire_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(WIRE_FORMAT).to_string()
}

fn has_wire_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == WIRE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            8 => *b == b'T',
            15 => *b == b'Z',
            _ => b.is_ascii_digit(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeDelta, TimeZone};

    #[test]
    fn parse_reference_timestamp() {
        let dt = parse_wire_timestamp("20210714T204603Z").unwrap();
        assert_eq!(dt.year(), 2021);
        assert_eq!(dt.month(), 7);
        assert_eq!(dt.day(), 14);
        assert_eq!(dt.hour(), 20);
        assert_eq!(dt.minute(), 46);
        assert_eq!(dt.second(), 3);
    }

    #[test]
    fn format_reference_timestamp() {
        let dt = Utc.with_ymd_and_hms(2021, 2, 28, 22, 0, 0).single().unwrap();
        assert_eq!(format_wire_timestamp(&dt), "20210228T220000Z");
    }

    #[test]
    fn format_drops_subsecond_precision() {
        let dt = Utc.with_ymd_and_hms(2021, 2, 28, 22, 0, 5).single().unwrap()
            + TimeDelta::milliseconds(750);
        assert_eq!(format_wire_timestamp(&dt), "20210228T220005Z");
    }

    #[test]
    fn round_trip_every_second_of_a_day_boundary() {
        let start = Utc.with_ymd_and_hms(2020, 12, 31, 23, 0, 0).single().unwrap();
        for offset in 0..7200 {
            let dt = start + TimeDelta::seconds(offset);
            let wire = format_wire_timestamp(&dt);
            assert_eq!(parse_wire_timestamp(&wire).unwrap(), dt, "{wire}");
        }
    }

    #[test]
    fn round_trip_across_years() {
        let mut dt = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).single().unwrap();
        let end = Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).single().unwrap();
        // Odd stride so every field value gets exercised.
        let stride = TimeDelta::seconds(86_400 * 3 + 3_671);
        while dt < end {
            let wire = format_wire_timestamp(&dt);
            assert_eq!(parse_wire_timestamp(&wire).unwrap(), dt, "{wire}");
            dt += stride;
        }
    }

    #[test]
    fn leap_day_is_accepted() {
        assert!(parse_wire_timestamp("20200229T120000Z").is_ok());
        assert!(parse_wire_timestamp("20210229T120000Z").is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        let bad = [
            "",
            "20210714",
            "20210714T204603",
            "20210714T204603z",
            "2021-07-14T20:46:03Z",
            " 20210714T204603Z",
            "20210714T204603Z ",
            "+2021071T204603Z",
            "20211314T204603Z",
            "20210732T204603Z",
            "20210714T244603Z",
            "20210714T206003Z",
            "20210714T120060Z",
            "20211231T235960Z",
            "20210714X204603Z",
        ];
        for input in bad {
            match parse_wire_timestamp(input) {
                Err(PtListError::TimeParsing(_)) => {}
                other => panic!("expected TimeParsing for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn last_second_of_minute_is_59() {
        let dt = parse_wire_timestamp("20210714T120059Z").unwrap();
        assert_eq!(dt.second(), 59);
        assert_eq!(dt.nanosecond(), 0);
    }
}
