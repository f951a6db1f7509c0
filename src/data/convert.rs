use std::collections::HashMap;

use chrono::Datelike;

use crate::calendar::{CalendarError, DateRange, NepaliDate};

use super::error::DataError;
use super::model::{DailyRecord, YearRecord};

// ---------------------------------------------------------------------------
// Per-year running totals
// ---------------------------------------------------------------------------

/// Sum and day count collected for one Gregorian year.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearTally {
    pub sum: f64,
    pub count: u32,
}

impl YearTally {
    pub fn mean(&self) -> f64 {
        self.sum / f64::from(self.count)
    }
}

/// Gregorian year → [`YearTally`], iterated in the order years were first seen.
#[derive(Debug, Clone, Default)]
pub struct YearAccumulator {
    tallies: Vec<(i32, YearTally)>,
    /// Position of each year in `tallies`.
    index: HashMap<i32, usize>,
}

impl YearAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one day towards its year.
    pub fn add(&mut self, day: DailyRecord) {
        let slot = *self.index.entry(day.year).or_insert_with(|| {
            self.tallies.push((day.year, YearTally::default()));
            self.tallies.len() - 1
        });
        let tally = &mut self.tallies[slot].1;
        tally.sum += day.value;
        tally.count += 1;
    }

    pub fn get(&self, year: i32) -> Option<&YearTally> {
        self.index.get(&year).map(|&i| &self.tallies[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &YearTally)> + '_ {
        self.tallies.iter().map(|(year, tally)| (*year, tally))
    }

    /// Number of distinct years.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Days counted across all years.
    pub fn total_days(&self) -> u64 {
        self.tallies.iter().map(|(_, t)| u64::from(t.count)).sum()
    }

    /// One record per year holding `sum / count`, in first-seen order.
    pub fn averages(&self) -> Vec<YearRecord> {
        self.iter()
            .map(|(year, tally)| YearRecord::new(year, tally.mean()))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Bikram Sambat year → Gregorian days
// ---------------------------------------------------------------------------

/// The Gregorian days covered by BS `year`, from 1 Baisakh to the last day of
/// Chaitra.
pub fn gregorian_span(year: i32) -> Result<DateRange, CalendarError> {
    let first = NepaliDate::first_of_year(year)?;
    let last = NepaliDate::last_of_year(year)?;
    Ok(DateRange::new(first.to_gregorian(), last.to_gregorian()))
}

/// One [`DailyRecord`] per Gregorian day of the record's BS year, each
/// carrying the record's full value.
pub fn daily_records(
    record: &YearRecord,
) -> Result<impl ExactSizeIterator<Item = DailyRecord>, CalendarError> {
    let value = record.value;
    let span = gregorian_span(record.year)?;
    Ok(span.into_iter().map(move |day| DailyRecord {
        year: day.year(),
        value,
    }))
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Spread every BS-year record over its Gregorian days and total them per
/// Gregorian year.
///
/// Fails on the first record whose value is not finite or whose year the
/// calendar table cannot represent; nothing is returned for the other records.
pub fn accumulate(records: &[YearRecord]) -> Result<YearAccumulator, DataError> {
    let mut acc = YearAccumulator::new();

    for (i, record) in records.iter().enumerate() {
        if !record.value.is_finite() {
            return Err(DataError::MalformedInputRecord {
                index: i,
                reason: format!("value {} is not a finite number", record.value),
            });
        }

        let days = daily_records(record)?;
        log::debug!(
            "BS {} spans {} Gregorian days",
            record.year,
            days.len()
        );
        for day in days {
            acc.add(day);
        }
    }

    Ok(acc)
}

/// Convert BS-year records into day-weighted Gregorian-year averages.
///
/// Each day of a BS year carries that year's value, so a Gregorian year's
/// result is the average of the source values weighted by how many of its days
/// each source year covers. Output is in order of the first Gregorian year
/// seen, which follows the input order; sort it if year order matters.
pub fn convert(records: &[YearRecord]) -> Result<Vec<YearRecord>, DataError> {
    Ok(accumulate(records)?.averages())
}
