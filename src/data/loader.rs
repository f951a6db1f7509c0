use std::collections::HashSet;

use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{CalendarSystem, YearRecord, YearSeries};

/// The source dataset shipped with the application, in Bikram Sambat years.
const BUILTIN_NEPALI: &str = include_str!("../../assets/data_nepali.json");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse the built-in Bikram Sambat dataset.
pub fn builtin_nepali() -> Result<YearSeries, DataError> {
    let records = parse_records(BUILTIN_NEPALI)?;
    Ok(YearSeries::new(CalendarSystem::Nepali, records))
}

/// Parse a yearly dataset from JSON text.
///
/// Expected schema:
///
/// ```json
/// [
///   { "year": 2076, "value": 50 },
///   { "year": 2077, "value": 80 }
/// ]
/// ```
///
/// Every row must be an object with an integer `year` and a finite numeric
/// `value`; extra keys are ignored. Years must be unique.
pub fn parse_records(text: &str) -> Result<Vec<YearRecord>, DataError> {
    let root: JsonValue = serde_json::from_str(text)?;

    let rows = root.as_array().ok_or_else(|| DataError::MalformedInputRecord {
        index: 0,
        reason: "expected a top-level JSON array".to_string(),
    })?;

    let mut records = Vec::with_capacity(rows.len());
    let mut seen = HashSet::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let obj = row
            .as_object()
            .ok_or_else(|| malformed(i, "not a JSON object"))?;

        let year = obj
            .get("year")
            .ok_or_else(|| malformed(i, "missing 'year'"))?
            .as_i64()
            .and_then(|y| i32::try_from(y).ok())
            .ok_or_else(|| malformed(i, "'year' is not an integer"))?;

        let value = obj
            .get("value")
            .ok_or_else(|| malformed(i, "missing 'value'"))?
            .as_f64()
            .ok_or_else(|| malformed(i, "'value' is not a number"))?;

        if !seen.insert(year) {
            return Err(DataError::DuplicateYear { year });
        }
        records.push(YearRecord::new(year, value));
    }

    Ok(records)
}

fn malformed(index: usize, reason: &str) -> DataError {
    DataError::MalformedInputRecord {
        index,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_dataset_matches_reference_values() {
        let series = builtin_nepali().unwrap();
        assert_eq!(series.calendar, CalendarSystem::Nepali);
        assert_eq!(
            series.records,
            vec![
                YearRecord::new(2076, 50.0),
                YearRecord::new(2077, 80.0),
                YearRecord::new(2078, 120.0),
                YearRecord::new(2079, 90.0),
            ]
        );
    }

    #[test]
    fn extra_keys_are_ignored() {
        let records = parse_records(r#"[{"year": 2080, "value": 1.5, "note": "x"}]"#).unwrap();
        assert_eq!(records, vec![YearRecord::new(2080, 1.5)]);
    }

    #[test]
    fn empty_array() {
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn missing_value_is_malformed() {
        let err = parse_records(r#"[{"year": 2076, "value": 1}, {"year": 2077}]"#).unwrap_err();
        match err {
            DataError::MalformedInputRecord { index, reason } => {
                assert_eq!(index, 1);
                assert_eq!(reason, "missing 'value'");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_year_is_malformed() {
        let err = parse_records(r#"[{"value": 3}]"#).unwrap_err();
        assert!(matches!(err, DataError::MalformedInputRecord { index: 0, .. }));
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let err = parse_records(r#"[{"year": 2076, "value": "fifty"}]"#).unwrap_err();
        assert!(matches!(err, DataError::MalformedInputRecord { index: 0, .. }));
    }

    #[test]
    fn fractional_year_is_malformed() {
        let err = parse_records(r#"[{"year": 2076.5, "value": 1}]"#).unwrap_err();
        assert!(matches!(err, DataError::MalformedInputRecord { index: 0, .. }));
    }

    #[test]
    fn non_object_row_is_malformed() {
        let err = parse_records("[[2076, 50]]").unwrap_err();
        assert!(matches!(err, DataError::MalformedInputRecord { index: 0, .. }));
    }

    #[test]
    fn top_level_object_is_rejected() {
        let err = parse_records(r#"{"year": 2076, "value": 50}"#).unwrap_err();
        assert!(matches!(err, DataError::MalformedInputRecord { .. }));
    }

    #[test]
    fn duplicate_year_is_rejected() {
        let err = parse_records(r#"[{"year": 2076, "value": 1}, {"year": 2076, "value": 2}]"#)
            .unwrap_err();
        assert!(matches!(err, DataError::DuplicateYear { year: 2076 }));
    }

    #[test]
    fn invalid_json() {
        assert!(matches!(parse_records("[{"), Err(DataError::Json(_))));
    }
}
