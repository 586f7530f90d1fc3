use crate::core::journal::color_for_operation;
use crate::errors::AppResult;
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;
use crate::utils::formatting::display_width;

/// Print the session journal, one line per recorded mutation.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    if let SessionCommand::Journal = cmd {
        let entries = state.journal.entries();

        if entries.is_empty() {
            messages::info("Journal is empty.");
            return Ok(());
        }

        println!("📜 Session journal:\n");

        let seq_w = entries
            .iter()
            .map(|e| e.seq.to_string().len())
            .max()
            .unwrap_or(1);
        let at_w = entries.iter().map(|e| e.at.len()).max().unwrap_or(0);

        // Column width from the visible op+target text, in display cells,
        // same math as the table renderer
        let op_w = entries
            .iter()
            .map(|e| display_width(&visible_op_target(&e.operation, &e.target)))
            .max()
            .unwrap_or(10);

        for e in entries {
            let color = color_for_operation(&e.operation);

            let visible = visible_op_target(&e.operation, &e.target);
            let padding = " ".repeat(op_w.saturating_sub(display_width(&visible)));

            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            println!(
                "{:>seq_w$}: {:<at_w$} | {}{} => {}",
                e.seq,
                e.at,
                colored,
                padding,
                e.message,
                seq_w = seq_w,
                at_w = at_w
            );
        }
    }

    Ok(())
}

fn visible_op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{} ({})", operation, target)
    }
}
