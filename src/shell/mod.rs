pub mod command;
pub mod commands;

use crate::config::Config;
use crate::core::holiday::HolidayCalendar;
use crate::core::journal::SessionJournal;
use crate::core::registry::WorkTypeRegistry;
use crate::core::store::ProjectLedger;
use crate::errors::AppResult;
use crate::ui::messages;

use clap::Parser;
use command::{ReplLine, SessionCommand};
use std::io::{self, BufRead, Write};

/// Everything one session owns. Dropped wholesale when the session ends.
pub struct SessionState {
    pub calendar: HolidayCalendar,
    pub registry: WorkTypeRegistry,
    pub ledger: ProjectLedger,
    pub journal: SessionJournal,
    /// Id of the project commands operate on.
    pub active: String,
}

impl SessionState {
    pub fn new(cfg: &Config) -> Self {
        let ledger = ProjectLedger::initialize(cfg.project_slots.max(1));
        let active = ledger.projects()[0].id.clone();

        Self {
            calendar: HolidayCalendar::new(cfg.public_holidays.iter().copied()),
            registry: WorkTypeRegistry::new(&cfg.work_types),
            ledger,
            journal: SessionJournal::default(),
            active,
        }
    }
}

/// Interactive session loop. Reads one command per line from stdin until
/// `quit` or EOF. The prompt goes to stderr so piped stdout stays clean.
pub fn run_session(cfg: &Config) -> AppResult<()> {
    let mut state = SessionState::new(cfg);

    messages::header("每日施工人數紀錄與統計");
    messages::info(format!(
        "{} project slots ready. Type 'help' for commands, 'quit' to end.",
        state.ledger.projects().len()
    ));

    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        eprint!("crewlog> ");
        io::stderr().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like quit
            break;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        match ReplLine::try_parse_from(&tokens) {
            Ok(repl) => {
                if let SessionCommand::Quit = repl.command {
                    break;
                }
                if let Err(e) = dispatch(&mut state, &repl.command) {
                    messages::error(e);
                }
            }
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    messages::info("Session closed, ledger discarded.");
    Ok(())
}

/// Routes one parsed line to its handler.
fn dispatch(state: &mut SessionState, cmd: &SessionCommand) -> AppResult<()> {
    match cmd {
        SessionCommand::Projects
        | SessionCommand::Use { .. }
        | SessionCommand::Name { .. }
        | SessionCommand::Host { .. } => commands::project::handle(cmd, state),
        SessionCommand::Add { .. } => commands::add::handle(cmd, state),
        SessionCommand::Worktypes | SessionCommand::Worktype { .. } => {
            commands::worktype::handle(cmd, state)
        }
        SessionCommand::Table => commands::table::handle(cmd, state),
        SessionCommand::Totals { .. } => commands::totals::handle(cmd, state),
        SessionCommand::Chart { .. } => commands::chart::handle(cmd, state),
        SessionCommand::Export { .. } => commands::export::handle(cmd, state),
        SessionCommand::Journal => commands::journal::handle(cmd, state),
        SessionCommand::Quit => Ok(()),
    }
}
