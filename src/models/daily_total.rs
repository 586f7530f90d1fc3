use chrono::NaiveDate;

/// Summed headcount across all events sharing one calendar date. The sum
/// is `u64` because a day can hold any number of `u32` counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: u64,
}
