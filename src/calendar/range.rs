//! Inclusive ranges of Gregorian days.

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// DateRange: inclusive span of Gregorian days
// ---------------------------------------------------------------------------

/// Every calendar day from `start` to `end`, both inclusive.
///
/// A range whose start lies after its end is empty. The range is `Copy`, so
/// each call to [`DateRange::iter`] restarts from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range (0 when `start > end`).
    pub fn len(&self) -> usize {
        usize::try_from((self.end - self.start).num_days() + 1).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn iter(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        // `succ_opt` is None only at NaiveDate::MAX, which also ends the range.
        self.next = current.succ_opt().filter(|d| *d <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self
            .next
            .map_or(0, |d| DateRange::new(d, self.end).len());
        (n, Some(n))
    }
}

impl ExactSizeIterator for Days {}

impl std::iter::FusedIterator for Days {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inclusive_on_both_ends() {
        let days: Vec<_> = DateRange::new(ymd(2019, 12, 30), ymd(2020, 1, 2))
            .iter()
            .collect();
        assert_eq!(
            days,
            vec![
                ymd(2019, 12, 30),
                ymd(2019, 12, 31),
                ymd(2020, 1, 1),
                ymd(2020, 1, 2),
            ]
        );
    }

    #[test]
    fn single_day() {
        let d = ymd(2020, 2, 29);
        let range = DateRange::new(d, d);
        assert_eq!(range.len(), 1);
        assert_eq!(range.iter().collect::<Vec<_>>(), vec![d]);
    }

    #[test]
    fn reversed_range_is_empty() {
        let range = DateRange::new(ymd(2020, 1, 2), ymd(2020, 1, 1));
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.iter().next(), None);
    }

    #[test]
    fn crosses_leap_day() {
        let range = DateRange::new(ymd(2020, 2, 28), ymd(2020, 3, 1));
        assert_eq!(range.iter().count(), 3);
    }

    #[test]
    fn restartable() {
        let range = DateRange::new(ymd(2019, 4, 14), ymd(2020, 4, 12));
        let first: Vec<_> = range.iter().collect();
        let second: Vec<_> = (&range).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 365);
    }

    #[test]
    fn exact_size_tracks_progress() {
        let mut days = DateRange::new(ymd(2021, 1, 1), ymd(2021, 1, 10)).iter();
        assert_eq!(days.len(), 10);
        days.next();
        days.next();
        assert_eq!(days.len(), 8);
        assert_eq!(days.by_ref().count(), 8);
        assert_eq!(days.next(), None);
    }

    #[test]
    fn ends_at_max_date() {
        let range = DateRange::new(NaiveDate::MAX.pred_opt().unwrap(), NaiveDate::MAX);
        assert_eq!(range.iter().count(), 2);
    }
}
