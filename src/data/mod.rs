//! Data layer: yearly series, the built-in dataset, and calendar conversion.
//!
//! Architecture:
//! ```text
//!   assets/data_nepali.json (compiled in)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse JSON → YearSeries (BS years)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  convert  │  BS year → Gregorian days → per-year averages
//!   └──────────┘
//!        │
//!        ▼
//!   YearSeries (Gregorian years)
//! ```

pub mod convert;
pub mod error;
pub mod loader;
pub mod model;

pub use convert::convert;
pub use error::DataError;
pub use model::{CalendarSystem, YearRecord, YearSeries};
