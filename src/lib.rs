//! crewlog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod shell;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Some(Commands::Init) => cli::commands::init::handle(cli),
        None => shell::run_session(cfg),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load(cli.config.as_deref())?;

    // 3️⃣ applica eventuale override degli slot da riga di comando
    if let Some(slots) = cli.slots {
        cfg.project_slots = slots;
    }

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
