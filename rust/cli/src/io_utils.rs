//! Line-oriented input helpers.

use std::io::BufRead;

/// Reads a line of input from a buffered reader, blocking until available.
///
/// Surrounding whitespace is trimmed. Returns `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use letterbox_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  Alice \n");
/// assert_eq!(read_stdin_line(&mut input).as_deref(), Some("Alice"));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}
