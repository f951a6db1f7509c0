use sambat_chart::data::{self, CalendarSystem, YearRecord, YearSeries};

use crate::color::CalendarColors;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Source series in Bikram Sambat years.
    pub source: YearSeries,

    /// Gregorian series, converted on first use and reused afterwards.
    gregorian: Option<YearSeries>,

    /// Calendar currently shown in the chart and table.
    pub calendar: CalendarSystem,

    /// Bar colour per calendar.
    pub colors: CalendarColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// How many times the source has been converted.
    conversions: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(YearSeries::new(CalendarSystem::Nepali, Vec::new()))
    }
}

impl AppState {
    pub fn new(source: YearSeries) -> Self {
        Self {
            calendar: source.calendar,
            source,
            gregorian: None,
            colors: CalendarColors::new(),
            status_message: None,
            conversions: 0,
        }
    }

    /// State holding the built-in dataset, or an empty one with the load error
    /// in the status line.
    pub fn with_builtin_dataset() -> Self {
        match data::loader::builtin_nepali() {
            Ok(series) => {
                log::info!("Loaded {} Nepali-calendar years", series.len());
                Self::new(series)
            }
            Err(e) => {
                log::error!("Failed to load built-in dataset: {e:#}");
                Self {
                    status_message: Some(format!("Error: {e:#}")),
                    ..Self::default()
                }
            }
        }
    }

    /// Show `calendar`, converting the source the first time Gregorian is
    /// requested. On failure the current calendar stays active.
    pub fn set_calendar(&mut self, calendar: CalendarSystem) {
        if calendar == self.calendar {
            return;
        }
        if calendar == CalendarSystem::Nepali && self.source.calendar == CalendarSystem::Gregorian {
            log::warn!("Gregorian source data cannot be shown in Nepali years");
            return;
        }
        if calendar == CalendarSystem::Gregorian {
            if let Err(e) = self.ensure_gregorian() {
                log::error!("Calendar conversion failed: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                return;
            }
        }
        log::info!("Switched chart to the {calendar} calendar");
        self.calendar = calendar;
        self.status_message = None;
    }

    /// Switch to the other calendar.
    pub fn toggle_calendar(&mut self) {
        self.set_calendar(self.calendar.toggled());
    }

    fn ensure_gregorian(&mut self) -> Result<(), data::DataError> {
        if self.gregorian.is_some() || self.source.calendar == CalendarSystem::Gregorian {
            return Ok(());
        }
        let records = data::convert(&self.source.records)?;
        self.conversions += 1;
        log::info!(
            "Converted {} BS years into {} Gregorian years (run {})",
            self.source.len(),
            records.len(),
            self.conversions
        );
        self.gregorian = Some(YearSeries::new(CalendarSystem::Gregorian, records));
        Ok(())
    }

    /// The series for the active calendar.
    pub fn active_series(&self) -> &YearSeries {
        match (self.calendar, &self.gregorian) {
            (CalendarSystem::Gregorian, Some(series)) => series,
            _ => &self.source,
        }
    }

    /// Active records in ascending year order.
    pub fn active_records(&self) -> Vec<YearRecord> {
        self.active_series().sorted()
    }

    #[cfg(test)]
    pub fn conversions(&self) -> usize {
        self.conversions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nepali(records: &[(i32, f64)]) -> YearSeries {
        YearSeries::new(
            CalendarSystem::Nepali,
            records.iter().map(|&(y, v)| YearRecord::new(y, v)).collect(),
        )
    }

    #[test]
    fn starts_on_the_source_calendar() {
        let state = AppState::with_builtin_dataset();
        assert_eq!(state.calendar, CalendarSystem::Nepali);
        assert_eq!(state.active_records().len(), 4);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn load_error_state_is_empty_with_message() {
        let state = AppState {
            status_message: Some("Error: bad".to_string()),
            ..AppState::default()
        };
        assert!(state.active_records().is_empty());
        assert_eq!(state.calendar, CalendarSystem::Nepali);
        assert_eq!(state.status_message.as_deref(), Some("Error: bad"));
    }

    #[test]
    fn toggling_converts_once() {
        let mut state = AppState::new(nepali(&[(2076, 50.0), (2077, 80.0)]));
        state.toggle_calendar();
        assert_eq!(state.calendar, CalendarSystem::Gregorian);
        state.toggle_calendar();
        assert_eq!(state.calendar, CalendarSystem::Nepali);
        state.toggle_calendar();
        assert_eq!(state.calendar, CalendarSystem::Gregorian);
        assert_eq!(state.conversions(), 1);
    }

    #[test]
    fn gregorian_records_are_sorted() {
        let mut state = AppState::new(nepali(&[(2078, 120.0), (2076, 50.0)]));
        state.set_calendar(CalendarSystem::Gregorian);
        let years: Vec<i32> = state.active_records().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022]);
    }

    #[test]
    fn failed_conversion_keeps_previous_calendar() {
        let mut state = AppState::new(nepali(&[(2100, 1.0)]));
        state.toggle_calendar();
        assert_eq!(state.calendar, CalendarSystem::Nepali);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
        assert_eq!(state.active_records(), vec![YearRecord::new(2100, 1.0)]);
        assert_eq!(state.conversions(), 0);
    }

    #[test]
    fn gregorian_source_cannot_switch_to_nepali() {
        let mut state = AppState::new(YearSeries::new(
            CalendarSystem::Gregorian,
            vec![YearRecord::new(2020, 1.0)],
        ));
        state.toggle_calendar();
        assert_eq!(state.calendar, CalendarSystem::Gregorian);
        assert_eq!(state.conversions(), 0);
    }

    #[test]
    fn same_calendar_is_a_no_op() {
        let mut state = AppState::new(nepali(&[(2076, 50.0)]));
        state.set_calendar(CalendarSystem::Nepali);
        assert_eq!(state.conversions(), 0);
        assert!(state.status_message.is_none());
    }
}
