use crate::chart::{ChartSpec, build_trend};
use crate::core::aggregate::daily_totals;
use crate::errors::{AppError, AppResult};
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;

use std::fs;

/// Build the trend chart spec for the active project and emit it as JSON,
/// either to stdout or to a file.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Chart { out } = cmd {
        let label = state.ledger.get(&state.active)?.display_label();
        let events = state.ledger.sorted_events(&state.active)?;
        let totals = daily_totals(&events);

        let spec = build_trend(&totals, &label, &state.calendar);

        if let ChartSpec::NoData { message } = &spec {
            messages::info(message);
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&spec)
            .map_err(|e| AppError::Export(format!("chart spec serialization error: {e}")))?;

        match out {
            Some(file) => {
                fs::write(file, &json)?;
                let active = state.active.clone();
                state.journal.record("chart", &active, file);
                messages::success(format!("Chart spec written: {}", file));
            }
            None => println!("{}", json),
        }
    }

    Ok(())
}
