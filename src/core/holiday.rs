use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeSet;

/// Classifies calendar dates as working days or holidays.
///
/// A date counts as a holiday when it falls on a weekend or when it is
/// listed in the configured holiday table. The two sources are independent,
/// so a listed Saturday is still just one holiday.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    table: BTreeSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new<I>(table: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            table: table.into_iter().collect(),
        }
    }

    /// True when `day` is a Saturday, a Sunday, or a listed holiday.
    pub fn is_holiday(&self, day: NaiveDate) -> bool {
        matches!(day.weekday(), Weekday::Sat | Weekday::Sun) || self.table.contains(&day)
    }

    /// All holidays inside the inclusive range `[start, end]`, in ascending
    /// order. An inverted range yields an empty set.
    pub fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> BTreeSet<NaiveDate> {
        let mut found = BTreeSet::new();
        let mut day = start;
        while day <= end {
            if self.is_holiday(day) {
                found.insert(day);
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        found
    }
}
