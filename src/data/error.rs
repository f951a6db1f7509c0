//! Error types for the data layer.

use crate::calendar::CalendarError;

/// Error type for loading and converting yearly series.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// A source record is missing a field or carries a non-numeric value.
    #[error("record {index}: {reason}")]
    MalformedInputRecord {
        /// Position of the record in the input.
        index: usize,
        reason: String,
    },

    /// Two records share the same year.
    #[error("year {year} appears more than once")]
    DuplicateYear { year: i32 },

    /// The dataset text is not valid JSON.
    #[error("parsing dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The calendar primitive could not build a date for a record's year.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed() {
        let e = DataError::MalformedInputRecord {
            index: 2,
            reason: "missing 'value'".to_string(),
        };
        assert_eq!(e.to_string(), "record 2: missing 'value'");
    }

    #[test]
    fn display_duplicate_year() {
        let e = DataError::DuplicateYear { year: 2077 };
        assert_eq!(e.to_string(), "year 2077 appears more than once");
    }

    #[test]
    fn from_calendar_error_is_transparent() {
        let ce = CalendarError::InvalidMonth { month: 0 };
        let de: DataError = ce.clone().into();
        assert!(matches!(de, DataError::Calendar(_)));
        assert_eq!(de.to_string(), ce.to_string());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<DataError>();
    }
}
