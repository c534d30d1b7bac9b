//! Config command - read and update settings

use crate::{BookrError, cli::ConfigCommands, config::BookrConfig};
use std::io::Write;
use std::path::Path;

type Result<T> = std::result::Result<T, BookrError>;

/// Execute a config subcommand against the file at `config_path`
///
/// # Errors
/// Returns `BookrError::InvalidInput` for a malformed `KEY=VALUE`, or the
/// configuration error for unknown keys, bad values and failed writes.
pub fn execute(
    mut config: BookrConfig,
    command: &ConfigCommands,
    config_path: &Path,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                BookrError::InvalidInput("Invalid format. Use: bookr config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save_to(config_path)?;
            if !quiet {
                writeln!(out, "Set {key} = {}", config.get(key)?)?;
            }
        }
        ConfigCommands::Get { key } => {
            writeln!(out, "{}", config.get(key)?)?;
        }
        ConfigCommands::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
    }
    Ok(())
}
