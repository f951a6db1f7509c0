//! Yearly series in the Bikram Sambat calendar, and their conversion to
//! day-weighted Gregorian-year averages.
//!
//! ```
//! use sambat_chart::data::{convert, YearRecord};
//!
//! let gregorian = convert(&[YearRecord::new(2076, 50.0)]).unwrap();
//!
//! assert_eq!(
//!     gregorian,
//!     vec![YearRecord::new(2019, 50.0), YearRecord::new(2020, 50.0)]
//! );
//! ```

pub mod calendar;
pub mod data;
