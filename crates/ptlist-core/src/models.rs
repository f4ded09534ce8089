//! Core data types for ptlist.
//!
//! This module defines the primary types used throughout the library:
//! - [`Period`] - Task cadence (hourly/daily/monthly/yearly)
//! - [`Bounds`] - Rounded generation window
//! - [`SeriesResult`] - Complete result for a series computation
//! - [`PtListResponse`] - Series as returned by the HTTP service

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{PtListError, Result};

/// Cadence of a periodic task.
///
/// Selects both the rounding rule applied to the window bounds and the
/// stepping rule used to advance through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Period {
    /// Every hour, a fixed 3600 second step.
    #[serde(rename = "1h")]
    Hourly,
    /// Every calendar day.
    #[serde(rename = "1d")]
    Daily,
    /// Every month, anchored on the last day of the month.
    #[serde(rename = "1mo")]
    Monthly,
    /// Every year, anchored on December 31.
    #[serde(rename = "1y")]
    Yearly,
}

impl Period {
    /// The wire code of this period.
    pub fn code(&self) -> &'static str {
        match self {
            Period::Hourly => "1h",
            Period::Daily => "1d",
            Period::Monthly => "1mo",
            Period::Yearly => "1y",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Period {
    type Err = PtListError;

    /// Codes are matched exactly; `1H` is not `1h`.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1h" => Ok(Period::Hourly),
            "1d" => Ok(Period::Daily),
            "1mo" => Ok(Period::Monthly),
            "1y" => Ok(Period::Yearly),
            _ => Err(PtListError::TimeRounding(format!(
                "Unsupported period: '{}'. Expected: 1h, 1d, 1mo, 1y",
                s
            ))),
        }
    }
}

/// Rounded generation window. Both ends are inclusive.
///
/// `start > end` is allowed and yields an empty series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Bounds {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

/// Complete result of a series computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesResult {
    /// The period code used.
    pub period: Period,
    /// The timezone the series was observed in.
    pub tz: String,
    /// Start bound as requested, before rounding.
    pub t1: String,
    /// End bound as requested, before rounding.
    pub t2: String,
    /// Emitted timestamps in wire format, in emission order.
    pub timestamps: Vec<String>,
}

/// Success body of the HTTP service: `{"timestamps":[...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PtListResponse {
    pub timestamps: Vec<String>,
}

impl From<SeriesResult> for PtListResponse {
    fn from(result: SeriesResult) -> Self {
        Self {
            timestamps: result.timestamps,
        }
    }
}
