use crate::errors::{AppError, AppResult};
use crate::models::{LaborEvent, Shift};
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;
use crate::utils::date;

/// Record one labor event in the active project.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Add {
        date,
        vendor,
        work_type,
        shift,
        count,
        remark,
    } = cmd
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse shift
        //
        let shift_parsed =
            Shift::from_input(shift).ok_or_else(|| AppError::InvalidShift(shift.to_string()))?;

        //
        // 3. Unknown work types are recorded as given, with a notice
        //
        if !state.registry.contains(work_type) {
            messages::warning(format!("工種「{}」不在目前選單中（仍照原值記錄）", work_type));
        }

        //
        // 4. Validate and append
        //
        let event = LaborEvent {
            date: d,
            vendor: vendor.clone(),
            work_type: work_type.clone(),
            shift: shift_parsed,
            count: *count,
            remark: remark.join(" "),
        };
        let active = state.active.clone();
        state.ledger.append_event(&active, event)?;

        state.journal.record(
            "add",
            &active,
            &format!("{} {} {}人", date, vendor, count),
        );
        messages::success(format!("已新增 {} 的施工紀錄（{} / {}人）", date, vendor, count));
    }

    Ok(())
}
