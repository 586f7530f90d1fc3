use clap::{Parser, Subcommand};

/// Command-line interface definition for crewlog
/// Daily construction-labor logbook with holiday-aware trend charts
#[derive(Parser)]
#[command(
    name = "crewlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record daily construction crews per project and chart headcount trends",
    long_about = None
)]
pub struct Cli {
    /// Override config file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override the number of project slots for this session
    #[arg(global = true, long = "slots")]
    pub slots: Option<usize>,

    /// With no subcommand, an interactive session starts on stdin
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,
}
