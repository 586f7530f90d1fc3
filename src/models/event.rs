use super::shift::Shift;
use crate::errors::ValidationError;
use chrono::NaiveDate;

/// One recorded shift of work: who was on site, doing what, on which day,
/// with how many people. Immutable once appended; the ledger has no update
/// or delete operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaborEvent {
    pub date: NaiveDate,
    pub vendor: String,
    /// Snapshot of the work-type label chosen at entry time. Plain string,
    /// not a reference into the registry; later registry changes never
    /// touch historical rows.
    pub work_type: String,
    pub shift: Shift,
    pub count: u32,
    pub remark: String,
}

impl LaborEvent {
    /// Append-time constraints. Checked once, on append; never re-checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.vendor.is_empty() {
            return Err(ValidationError::EmptyVendor);
        }
        if self.count < 1 {
            return Err(ValidationError::ZeroCount);
        }
        Ok(())
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
