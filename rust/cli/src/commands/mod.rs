//! Command handler modules for the letterbox CLI.
//!
//! Each subcommand lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed in
//! - Errors propagated as [`CliError`](crate::CliError)

pub mod cfg;
pub mod deal;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
