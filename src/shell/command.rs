use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Grammar for one line of session input. `multicall` makes the first
/// token the command name, so lines read like `add 2024-05-03 ...`.
#[derive(Parser)]
#[command(multicall = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    /// List the project slots and show which one is active
    Projects,

    /// Switch the active project (1-based slot number)
    Use {
        slot: usize,
    },

    /// Rename the active project
    Name {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Set the hosting organization of the active project
    Host {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Record a labor event in the active project
    Add {
        /// Date of the work (YYYY-MM-DD)
        date: String,

        /// Vendor company name
        vendor: String,

        /// Work type, ideally one from the shared menu
        work_type: String,

        /// Shift (早班/中班/晚班 or morning/day/night)
        shift: String,

        /// Headcount on site
        count: u32,

        /// Free-form remark
        remark: Vec<String>,
    },

    /// Show the shared work-type menu
    Worktypes,

    /// Add a label to the shared work-type menu
    Worktype {
        #[arg(required = true, num_args = 1..)]
        label: Vec<String>,
    },

    /// Print the active project's events as a table
    Table,

    /// Print per-day headcount totals for the active project
    Totals {
        #[arg(long, help = "Filter by year/month/day or a custom range")]
        range: Option<String>,
    },

    /// Build the trend chart spec for the active project
    Chart {
        #[arg(long = "out", value_name = "FILE", help = "Write the spec to FILE instead of stdout")]
        out: Option<String>,
    },

    /// Export the active project's data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, help = "Export daily totals instead of raw events")]
        totals: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the session journal
    Journal,

    /// End the session
    #[command(alias = "exit")]
    Quit,
}
