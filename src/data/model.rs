use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CalendarSystem – which calendar a series' years are counted in
// ---------------------------------------------------------------------------

/// The two calendars a yearly series can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CalendarSystem {
    /// Bikram Sambat (Nepali lunar-solar calendar).
    Nepali,
    Gregorian,
}

impl CalendarSystem {
    pub const ALL: [CalendarSystem; 2] = [CalendarSystem::Nepali, CalendarSystem::Gregorian];

    /// The other calendar.
    pub fn toggled(self) -> Self {
        match self {
            CalendarSystem::Nepali => CalendarSystem::Gregorian,
            CalendarSystem::Gregorian => CalendarSystem::Nepali,
        }
    }
}

impl fmt::Display for CalendarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarSystem::Nepali => write!(f, "Nepali"),
            CalendarSystem::Gregorian => write!(f, "Gregorian"),
        }
    }
}

// ---------------------------------------------------------------------------
// YearRecord – one bar of the chart
// ---------------------------------------------------------------------------

/// One aggregate value for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    pub year: i32,
    pub value: f64,
}

impl YearRecord {
    pub fn new(year: i32, value: f64) -> Self {
        Self { year, value }
    }
}

/// A single day's share of a source record, tagged with its Gregorian year.
///
/// Only exists while a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyRecord {
    pub year: i32,
    pub value: f64,
}

// ---------------------------------------------------------------------------
// YearSeries – records plus the calendar they are counted in
// ---------------------------------------------------------------------------

/// A yearly series tagged with its calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct YearSeries {
    pub calendar: CalendarSystem,
    /// Records in the order they were produced.
    pub records: Vec<YearRecord>,
}

impl YearSeries {
    pub fn new(calendar: CalendarSystem, records: Vec<YearRecord>) -> Self {
        Self { calendar, records }
    }

    /// Number of years.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered by ascending year.
    pub fn sorted(&self) -> Vec<YearRecord> {
        let mut records = self.records.clone();
        records.sort_by_key(|r| r.year);
        records
    }

    /// Largest value in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.records
            .iter()
            .map(|r| r.value)
            .fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
    }

    /// First and last year covered, in year order.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        let min = self.records.iter().map(|r| r.year).min()?;
        let max = self.records.iter().map(|r| r.year).max()?;
        Some((min, max))
    }
}
