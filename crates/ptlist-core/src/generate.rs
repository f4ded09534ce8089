//! Series generation.
//!
//! Walks the rounded window one period at a time and corrects the cursor for
//! civil offset changes so that every occurrence stays on the same local
//! wall-clock time across DST transitions, even though all emitted instants
//! are UTC.
//!
//! The correction compares the offset at the cursor with the last offset
//! observed. The first observation is the offset at a *reference instant*
//! (generation time unless overridden), not at the window start. Whenever the
//! whole-hour difference is non-zero, the cursor and the window end are both
//! shifted by that many hours and the observed offset is updated.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;
use tracing::trace;

use crate::error::{PtListError, Result};
use crate::models::{Bounds, Period};
use crate::parse::format_wire_timestamp;
use crate::step::step;
use crate::tz::offset_seconds_at;

const SECONDS_PER_HOUR: i32 = 3600;

/// Generates the firing instants of a periodic task inside a rounded window.
#[derive(Debug, Clone, Copy)]
pub struct SeriesGenerator {
    tz: Tz,
    period: Period,
    reference: Option<DateTime<Utc>>,
}

impl SeriesGenerator {
    pub fn new(tz: Tz, period: Period) -> Self {
        Self {
            tz,
            period,
            reference: None,
        }
    }

    /// Use the offset at `reference` as the initial observed offset instead of
    /// the offset at the current time.
    pub fn with_reference(mut self, reference: DateTime<Utc>) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Lazily iterate the series for `bounds`.
    ///
    /// The iterator yields `Err` at most once, after which it is exhausted.
    pub fn iter(&self, bounds: Bounds) -> Series {
        let reference = self.reference.unwrap_or_else(Utc::now);
        Series {
            tz: self.tz,
            period: self.period,
            state: State::Positioned {
                remaining: bounds,
                last_offset: offset_seconds_at(reference, self.tz),
            },
        }
    }

    /// Generate the whole series for `bounds`.
    ///
    /// Any stepping failure fails the whole call; no partial series is returned.
    pub fn generate(&self, bounds: Bounds) -> Result<Vec<DateTime<Utc>>> {
        let series = self.iter(bounds).collect::<Result<Vec<_>>>()?;
        trace!(period = %self.period, tz = %self.tz, len = series.len(), "Generated series");
        Ok(series)
    }
}

/// Iterator over a generated series. See [`SeriesGenerator::iter`].
#[derive(Debug, Clone)]
pub struct Series {
    tz: Tz,
    period: Period,
    state: State,
}

#[derive(Debug, Clone)]
enum State {
    /// `remaining.start` is the cursor.
    Positioned { remaining: Bounds, last_offset: i32 },
    Failed(PtListError),
    Done,
}

impl Iterator for Series {
    type Item = Result<DateTime<Utc>>;

    fn next(&mut self) -> Option<Self::Item> {
        match std::mem::replace(&mut self.state, State::Done) {
            State::Done => None,
            State::Failed(err) => Some(Err(err)),
            State::Positioned {
                remaining,
                last_offset,
            } => {
                if remaining.is_empty() {
                    return None;
                }

                let (remaining, last_offset) = match self.correct_offset(remaining, last_offset) {
                    Ok(corrected) => corrected,
                    Err(err) => return Some(Err(err)),
                };

                let cursor = remaining.start;
                self.state = match step(cursor, self.period) {
                    Ok(next) => State::Positioned {
                        remaining: Bounds::new(next, remaining.end),
                        last_offset,
                    },
                    Err(err) => State::Failed(err),
                };

                Some(Ok(cursor))
            }
        }
    }
}

impl Series {
    /// Shift cursor and window end when the civil offset at the cursor differs
    /// from the last observed offset by at least one whole hour.
    fn correct_offset(&self, remaining: Bounds, last_offset: i32) -> Result<(Bounds, i32)> {
        let cursor = remaining.start;
        let current_offset = offset_seconds_at(cursor, self.tz);
        // Truncates toward zero: sub-hour differences never shift.
        let delta_hours = (last_offset - current_offset) / SECONDS_PER_HOUR;
        if delta_hours == 0 {
            return Ok((remaining, last_offset));
        }

        let shift = TimeDelta::hours(i64::from(delta_hours));
        let shifted = cursor
            .checked_add_signed(shift)
            .zip(remaining.end.checked_add_signed(shift));
        let Some((shifted_cursor, shifted_end)) = shifted else {
            return Err(PtListError::AddingPeriod(format!(
                "cannot shift {} by {} hours",
                format_wire_timestamp(&cursor),
                delta_hours
            )));
        };

        trace!(
            tz = %self.tz,
            from = %format_wire_timestamp(&cursor),
            to = %format_wire_timestamp(&shifted_cursor),
            delta_hours,
            "Civil offset changed, shifting cursor and window end"
        );

        Ok((Bounds::new(shifted_cursor, shifted_end), current_offset))
    }
}
