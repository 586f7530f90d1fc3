// src/export/model.rs

use crate::models::{DailyTotal, LaborEvent};
use serde::Serialize;

/// Flat row for event exports. Field names are renamed to the Chinese
/// column labels so CSV headers and JSON keys match the on-screen table.
#[derive(Serialize, Clone, Debug)]
pub struct EventRow {
    #[serde(rename = "日期")]
    pub date: String,
    #[serde(rename = "廠商名稱")]
    pub vendor: String,
    #[serde(rename = "施工工種")]
    pub work_type: String,
    #[serde(rename = "班別")]
    pub shift: String,
    #[serde(rename = "施工人數")]
    pub count: u32,
    #[serde(rename = "備註")]
    pub remark: String,
}

impl From<&LaborEvent> for EventRow {
    fn from(e: &LaborEvent) -> Self {
        Self {
            date: e.date_str(),
            vendor: e.vendor.clone(),
            work_type: e.work_type.clone(),
            shift: e.shift.label().to_string(),
            count: e.count,
            remark: e.remark.clone(),
        }
    }
}

/// Flat row for daily-total exports.
#[derive(Serialize, Clone, Debug)]
pub struct TotalRow {
    #[serde(rename = "日期")]
    pub date: String,
    #[serde(rename = "人數")]
    pub total: u64,
}

impl From<&DailyTotal> for TotalRow {
    fn from(t: &DailyTotal) -> Self {
        Self {
            date: t.date.format("%Y-%m-%d").to_string(),
            total: t.total,
        }
    }
}
