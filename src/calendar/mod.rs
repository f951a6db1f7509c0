//! Calendar layer: the Bikram Sambat date primitive and Gregorian day ranges.
//!
//! ```text
//!   (BS year, month, day)
//!        │
//!        ▼
//!   ┌──────────────┐
//!   │ bikram_sambat │  month table → Gregorian NaiveDate
//!   └──────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  range    │  start..=end → one NaiveDate per day
//!   └──────────┘
//! ```

pub mod bikram_sambat;
pub mod error;
pub mod range;

pub use bikram_sambat::NepaliDate;
pub use error::CalendarError;
pub use range::DateRange;
