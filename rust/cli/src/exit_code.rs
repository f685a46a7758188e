//! Process exit codes returned by [`crate::run`].

/// Command completed (an abandoned game also counts).
pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, or a failed command.
pub const ERROR: i32 = 2;

/// Input ended before a command that needs it could finish.
pub const INTERRUPTED: i32 = 130;
