//! Bikram Sambat (Nepali) calendar dates.
//!
//! Month lengths in this calendar are not computable from a rule, so they are
//! read from a table. The table covers BS 2070 through BS 2082 and is anchored
//! at BS 2070-01-01 = 2013-04-14 (Gregorian).

use std::fmt;

use chrono::{Duration, NaiveDate};

use super::error::CalendarError;

// ---------------------------------------------------------------------------
// Month-length table
// ---------------------------------------------------------------------------

/// First BS year present in [`MONTH_LENGTHS`].
pub const FIRST_YEAR: i32 = 2070;
/// Last BS year present in [`MONTH_LENGTHS`].
pub const LAST_YEAR: i32 = FIRST_YEAR + MONTH_LENGTHS.len() as i32 - 1;

/// Days in each month, Baisakh through Chaitra.
const MONTH_LENGTHS: [[u8; 12]; 13] = [
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2081
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2082
];

/// Gregorian date of BS `FIRST_YEAR`-01-01.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2013, 4, 14).expect("BS epoch is a valid Gregorian date")
}

fn year_row(year: i32) -> Result<&'static [u8; 12], CalendarError> {
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(CalendarError::YearOutOfRange {
            year,
            min: FIRST_YEAR,
            max: LAST_YEAR,
        });
    }
    Ok(&MONTH_LENGTHS[(year - FIRST_YEAR) as usize])
}

/// Number of days in `month` (1..=12) of BS `year`.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let row = year_row(year)?;
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(row[usize::from(month - 1)])
}

/// Number of days in BS `year`.
pub fn days_in_year(year: i32) -> Result<u16, CalendarError> {
    Ok(year_row(year)?.iter().map(|&d| u16::from(d)).sum())
}

// ---------------------------------------------------------------------------
// NepaliDate
// ---------------------------------------------------------------------------

/// A valid date in the Bikram Sambat calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NepaliDate {
    year: i32,
    month: u8,
    day: u8,
}

impl NepaliDate {
    /// Creates a date from year, month (1..=12) and day.
    ///
    /// # Errors
    ///
    /// Fails if the year is outside the table, the month is not 1..=12, or the
    /// day does not exist in that month. Day 31 of a 30-day month is an error,
    /// never a rollover into the next month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if day == 0 || day > max_day {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// 1 Baisakh of `year`.
    pub fn first_of_year(year: i32) -> Result<Self, CalendarError> {
        Self::new(year, 1, 1)
    }

    /// Last day of Chaitra in `year`, which is day 30 or 31 depending on the year.
    pub fn last_of_year(year: i32) -> Result<Self, CalendarError> {
        let day = days_in_month(year, 12)?;
        Self::new(year, 12, day)
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u8 {
        self.month
    }

    pub fn day(self) -> u8 {
        self.day
    }

    /// Days elapsed since the table epoch.
    fn days_since_epoch(self) -> i64 {
        let whole_years: i64 = MONTH_LENGTHS[..(self.year - FIRST_YEAR) as usize]
            .iter()
            .flatten()
            .map(|&d| i64::from(d))
            .sum();
        let row = &MONTH_LENGTHS[(self.year - FIRST_YEAR) as usize];
        let whole_months: i64 = row[..usize::from(self.month - 1)]
            .iter()
            .map(|&d| i64::from(d))
            .sum();
        whole_years + whole_months + i64::from(self.day) - 1
    }

    /// The equivalent Gregorian date.
    pub fn to_gregorian(self) -> NaiveDate {
        epoch() + Duration::days(self.days_since_epoch())
    }

    /// The Bikram Sambat date falling on a Gregorian date.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        let mut remaining = (date - epoch()).num_days();
        if remaining < 0 {
            return Err(CalendarError::GregorianOutOfRange { date });
        }

        for (year, row) in (FIRST_YEAR..).zip(MONTH_LENGTHS.iter()) {
            for (month, &len) in (1u8..).zip(row.iter()) {
                let len = i64::from(len);
                if remaining < len {
                    return Ok(Self {
                        year,
                        month,
                        day: remaining as u8 + 1,
                    });
                }
                remaining -= len;
            }
        }
        Err(CalendarError::GregorianOutOfRange { date })
    }
}

impl fmt::Display for NepaliDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}
