//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, file, or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "show_piles": {
//!     "value": true,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "history": {
            "value": config.history,
            "source": sources.history,
        },
        "show_piles": {
            "value": config.show_piles,
            "source": sources.show_piles,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
