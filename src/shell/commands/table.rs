use crate::chart::builder::NO_DATA_MESSAGE;
use crate::errors::AppResult;
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;
use crate::utils::table::{Column, Table};

/// Print the active project's events, date-sorted, as an aligned table.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Table = cmd {
        let label = state.ledger.get(&state.active)?.display_label();
        let events = state.ledger.sorted_events(&state.active)?;

        if events.is_empty() {
            messages::info(NO_DATA_MESSAGE);
            return Ok(());
        }

        println!("📋 {}", label);

        let mut table = Table::new(vec![
            Column::new("日期"),
            Column::new("廠商名稱"),
            Column::new("施工工種"),
            Column::new("班別"),
            Column::new("施工人數"),
            Column::wrapped("備註", 24),
        ]);

        for e in &events {
            table.add_row(vec![
                e.date_str(),
                e.vendor.clone(),
                e.work_type.clone(),
                e.shift.label().to_string(),
                e.count.to_string(),
                e.remark.clone(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
