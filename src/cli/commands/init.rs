use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes the default configuration file so the holiday table, the
/// work-type seed and the slot count can be edited before the next
/// session.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = match &cli.config {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };

    println!("⚙️  Initializing crewlog…");
    println!("📄 Config file : {}", path.display());

    Config::write_default(&path)?;

    println!("✅ Default configuration written");
    println!("🎉 crewlog initialization completed!");
    Ok(())
}
