//! Macros for common CLI error handling patterns.

/// Write a line to a stream, returning the error exit code if the write fails.
///
/// ```ignore
/// write_or_exit!(err, "Usage: letterbox <command> [options]");
/// ```
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
