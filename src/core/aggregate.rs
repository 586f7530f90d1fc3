use crate::models::{DailyTotal, LaborEvent};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Collapses events into one row per calendar date by summing headcounts.
/// The result is always sorted by date ascending, whatever order the
/// events arrive in. Sums accumulate in `u64`; single counts are `u32` and
/// there is no cap on events per day.
pub fn daily_totals(events: &[LaborEvent]) -> Vec<DailyTotal> {
    let mut by_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for ev in events {
        *by_day.entry(ev.date).or_insert(0) += u64::from(ev.count);
    }
    by_day
        .into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}
