//! Date utilities: parsing, zh weekday names, period expressions.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Weekday name in the fixed zh-TW locale the logbook uses.
pub fn weekday_zh(day: NaiveDate) -> &'static str {
    match day.weekday() {
        Weekday::Mon => "週一",
        Weekday::Tue => "週二",
        Weekday::Wed => "週三",
        Weekday::Thu => "週四",
        Weekday::Fri => "週五",
        Weekday::Sat => "週六",
        Weekday::Sun => "週日",
    }
}

/// Last calendar day of the month containing `day`.
fn last_day_of_month(day: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = (day.year(), day.month());
    let (ny, nm) = if m == 12 { (y + 1, 1) } else { (y, m + 1) };
    NaiveDate::from_ymd_opt(ny, nm, 1).and_then(|d| d.pred_opt())
}

/// Bounds of one period token: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d").ok()?;
            Some((first, last_day_of_month(first)?))
        }
        10 => {
            let d = parse_date(p)?;
            Some((d, d))
        }
        _ => None,
    }
}

/// Parse a period expression into an inclusive date range.
///
/// Supported:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - any `start:end` pair of the above (start's first day to end's last day)
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let bounds = if let Some((a, b)) = p.split_once(':') {
        match (period_bounds(a.trim()), period_bounds(b.trim())) {
            (Some((start, _)), Some((_, end))) => Some((start, end)),
            _ => None,
        }
    } else {
        period_bounds(p.trim())
    };

    bounds.ok_or_else(|| AppError::InvalidPeriod(p.to_string()))
}
