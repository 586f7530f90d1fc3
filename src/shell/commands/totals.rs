use crate::chart::builder::NO_DATA_MESSAGE;
use crate::core::aggregate::daily_totals;
use crate::errors::AppResult;
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;
use crate::utils::date::{parse_period, weekday_zh};
use crate::utils::table::{Column, Table};

use ansi_term::Colour;

/// Print per-day headcount totals, with weekends and listed holidays
/// marked in red.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Totals { range } = cmd {
        let label = state.ledger.get(&state.active)?.display_label();
        let events = state.ledger.sorted_events(&state.active)?;

        let mut totals = daily_totals(&events);

        if let Some(r) = range {
            let (start, end) = parse_period(r)?;
            totals.retain(|t| t.date >= start && t.date <= end);
        }

        if totals.is_empty() {
            messages::info(NO_DATA_MESSAGE);
            return Ok(());
        }

        println!("📅 {} 每日施工人數", label);

        let mut table = Table::new(vec![
            Column::new("日期"),
            Column::new("星期"),
            Column::new("人數"),
            Column::new("假日"),
        ]);

        for t in &totals {
            let date_str = t.date.format("%Y-%m-%d").to_string();
            let (date_cell, mark) = if state.calendar.is_holiday(t.date) {
                (
                    Colour::Red.paint(date_str).to_string(),
                    Colour::Red.paint("✔").to_string(),
                )
            } else {
                (date_str, String::new())
            };

            table.add_row(vec![
                date_cell,
                weekday_zh(t.date).to_string(),
                t.total.to_string(),
                mark,
            ]);
        }

        print!("{}", table.render());

        let sum: u64 = totals.iter().map(|t| t.total).sum();
        println!("合計：{} 人", sum);
    }

    Ok(())
}
