//! Error types for ptlist-core.
//!
//! Every failure is converted at its origin into one of the kinds below and
//! returned to the caller immediately. No kind is retried and no partial
//! series is ever returned alongside an error.

use serde::Serialize;
use thiserror::Error;

/// The main error type for ptlist operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PtListError {
    /// The timezone name does not resolve to a known IANA zone.
    #[error("Could not load given timezone location: {0}")]
    TimezoneLoading(String),

    /// A timestamp is not in the `YYYYMMDDThhmmssZ` wire format.
    #[error("Could not parse time: {0}")]
    TimeParsing(String),

    /// Rounding the bounds failed, including an unsupported period code.
    #[error("Failed to round time objects: {0}")]
    TimeRounding(String),

    /// Advancing the cursor by one period left the representable range.
    #[error("Could not add period to time object: {0}")]
    AddingPeriod(String),
}

impl PtListError {
    /// Numeric error code as exposed by the service.
    ///
    /// Unsupported periods share the rounding code.
    pub fn code(&self) -> u16 {
        match self {
            PtListError::TimeRounding(_) => 101,
            PtListError::TimezoneLoading(_) => 102,
            PtListError::TimeParsing(_) => 103,
            PtListError::AddingPeriod(_) => 104,
        }
    }

    /// Stable snake_case name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            PtListError::TimezoneLoading(_) => "timezone_loading",
            PtListError::TimeParsing(_) => "time_parsing",
            PtListError::TimeRounding(_) => "time_rounding",
            PtListError::AddingPeriod(_) => "adding_period",
        }
    }

    /// Human-readable description used on the wire.
    pub fn desc(&self) -> &'static str {
        match self {
            PtListError::TimezoneLoading(_) => "Could not load given timezone location",
            PtListError::TimeParsing(_) => "Could not parse time",
            PtListError::TimeRounding(_) => "Failed to round time objects",
            PtListError::AddingPeriod(_) => "Could not add period to time object",
        }
    }
}

/// Result type alias for ptlist operations.
pub type Result<T> = std::result::Result<T, PtListError>;

/// Error object returned to callers of the service: `{"status":"error","desc":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub desc: String,
}

impl From<&PtListError> for ErrorResponse {
    fn from(err: &PtListError) -> Self {
        Self {
            status: "error".to_string(),
            desc: err.desc().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_kind() {
        let errors = [
            PtListError::TimeRounding("5m".into()),
            PtListError::TimezoneLoading("Europe/Aten".into()),
            PtListError::TimeParsing("".into()),
            PtListError::AddingPeriod("overflow".into()),
        ];
        let codes: Vec<u16> = errors.iter().map(PtListError::code).collect();
        assert_eq!(codes, vec![101, 102, 103, 104]);
    }

    #[test]
    fn display_includes_detail() {
        let err = PtListError::TimezoneLoading("Europe/Aten".into());
        assert_eq!(
            err.to_string(),
            "Could not load given timezone location: Europe/Aten"
        );
    }

    #[test]
    fn error_response_serialization() {
        let err = PtListError::TimeParsing("bogus".into());
        let json = serde_json::to_string(&ErrorResponse::from(&err)).unwrap();
        assert_eq!(json, r#"{"status":"error","desc":"Could not parse time"}"#);
    }
}
