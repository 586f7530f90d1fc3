use crate::core::aggregate::daily_totals;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;
use crate::utils::date::parse_period;

/// Export the active project's raw events or daily totals.
///
/// `range` accepts `all`, `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or a colon range
/// of two such expressions.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Export {
        format,
        file,
        range,
        totals,
        force,
    } = cmd
    {
        let mut events = state.ledger.sorted_events(&state.active)?;

        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_period(r)?),
        };
        if let Some((start, end)) = bounds {
            events.retain(|e| e.date >= start && e.date <= end);
        }

        if events.is_empty() {
            messages::warning("⚠️  No events found for selected range.");
            return Ok(());
        }

        if *totals {
            let rows = daily_totals(&events);
            ExportLogic::export_totals(&rows, format, file, *force)?;
        } else {
            ExportLogic::export_events(&events, format, file, *force)?;
        }

        let active = state.active.clone();
        state
            .journal
            .record("export", &active, &format!("{} -> {}", format.as_str(), file));
    }

    Ok(())
}
