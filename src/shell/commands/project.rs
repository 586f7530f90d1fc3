use crate::errors::{AppError, AppResult};
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;

/// Slot listing, slot switching and project metadata edits.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    match cmd {
        SessionCommand::Projects => {
            println!("📁 Project slots:");
            for (i, p) in state.ledger.projects().iter().enumerate() {
                let marker = if p.id == state.active { "*" } else { " " };
                let host = if p.host.is_empty() { "-" } else { &p.host };
                println!(
                    " {} {}. {} [{}] host: {} ({} rows)",
                    marker,
                    i + 1,
                    p.display_label(),
                    p.id,
                    host,
                    p.events().len()
                );
            }
        }

        SessionCommand::Use { slot } => {
            let projects = state.ledger.projects();
            if *slot < 1 || *slot > projects.len() {
                return Err(AppError::ProjectNotFound(format!("slot {}", slot)));
            }
            let target = &projects[slot - 1];
            state.active = target.id.clone();
            messages::success(format!("Switched to {}", target.display_label()));
        }

        SessionCommand::Name { text } => {
            let name = text.join(" ");
            let active = state.active.clone();
            state.ledger.rename(&active, &name)?;
            state.journal.record("name", &active, &name);
            messages::success(format!("Project name updated: {}", name));
        }

        SessionCommand::Host { text } => {
            let host = text.join(" ");
            let active = state.active.clone();
            state.ledger.set_host(&active, &host)?;
            state.journal.record("host", &active, &host);
            messages::success(format!("Project host updated: {}", host));
        }

        _ => {}
    }

    Ok(())
}
