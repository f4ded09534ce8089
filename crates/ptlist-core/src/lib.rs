//! # ptlist-core
//!
//! DST-aware timestamp generation for periodic tasks.
//!
//! Given a cadence (hourly, daily, monthly, yearly), an IANA timezone and two
//! bounds, this library computes every UTC instant at which the task fires,
//! keeping the cadence on the same local wall-clock time across daylight
//! saving transitions.
//!
//! ## Features
//!
//! - **Boundary Rounding**: Bounds snap to the top of the hour, the previous
//!   day, the end of the month or the end of the year depending on the period.
//! - **Calendar Stepping**: Months and years advance by end-of-period anchoring,
//!   so month lengths and leap years never drift the cadence.
//! - **DST Correction**: The cursor is shifted by whole hours whenever the civil
//!   offset changes.
//! - **Wire Format**: Timestamps are read and written as `YYYYMMDDThhmmssZ`.
//! - **IANA Timezones**: Full support for IANA timezone database via chrono-tz.
//!
//! ## Example
//!
//! ```rust
//! use ptlist_core::prelude::*;
//!
//! let reference = parse_wire_timestamp("20210714T120000Z").unwrap();
//! let result = compute_series_from_strings(
//!     "1y",
//!     "Europe/Athens",
//!     "20180214T204603Z",
//!     "20211115T123456Z",
//!     Some(reference),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     result.timestamps,
//!     vec!["20181231T220000Z", "20191231T220000Z", "20201231T220000Z"]
//! );
//! ```

mod calendar;
pub mod compute;
pub mod error;
pub mod generate;
pub mod models;
pub mod parse;
pub mod round;
pub mod step;
pub mod tz;

// Re-export commonly used types at the crate root
pub use compute::{compute_series, compute_series_from_strings};
pub use error::{ErrorResponse, PtListError, Result};
pub use generate::{Series, SeriesGenerator};
pub use models::{Bounds, Period, PtListResponse, SeriesResult};
pub use parse::{format_wire_timestamp, parse_wire_timestamp};

/// Prelude module for convenient imports.
///
/// ```
/// use ptlist_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compute::{compute_series, compute_series_from_strings};
    pub use crate::error::{ErrorResponse, PtListError, Result};
    pub use crate::generate::SeriesGenerator;
    pub use crate::models::*;
    pub use crate::parse::{format_wire_timestamp, parse_wire_timestamp};
    pub use crate::round::round_bounds;
    pub use crate::step::step;
    pub use crate::tz::parse_tz;
}
