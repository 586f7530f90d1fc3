use crate::core::registry::AddOutcome;
use crate::errors::AppResult;
use crate::shell::SessionState;
use crate::shell::command::SessionCommand;
use crate::ui::messages;

/// Work-type menu listing and extension.
pub fn handle(cmd: &SessionCommand, state: &mut SessionState) -> AppResult<()> {
    match cmd {
        SessionCommand::Worktypes => {
            println!("🧰 目前可選工種：{}", state.registry.list().join(", "));
        }

        SessionCommand::Worktype { label } => {
            // Multi-word labels arrive as separate tokens, like name/host
            let label = label.join(" ");
            match state.registry.add(&label) {
                AddOutcome::Added => {
                    state.journal.record("worktype", "registry", &label);
                    messages::success(format!("已新增：{}", label));
                }
                AddOutcome::AlreadyExists => {
                    messages::warning("該工種已存在");
                }
                AddOutcome::Blank => {
                    messages::warning("工種名稱不可為空白");
                }
            }
        }

        _ => {}
    }

    Ok(())
}
