use chrono::NaiveDate;

/// Errors raised by the Bikram Sambat date primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The year lies outside the month-length table.
    #[error("BS year {year} is outside the supported range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u8 },

    /// The day does not exist in that month of that year.
    #[error("invalid day {day} for BS {year}-{month:02} (month has {max_day} days)")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        max_day: u8,
    },

    /// The Gregorian date has no Bikram Sambat equivalent in the table.
    #[error("Gregorian date {date} is outside the supported range")]
    GregorianOutOfRange { date: NaiveDate },
}
