//! Parsing of raw terminal answers.
//!
//! Only the shape of an answer is checked here. Whether a position fits the
//! hand, or a name is a legal target, is decided by the engine, which
//! re-prompts through [`GameIo::reject`](letterbox_engine::io::GameIo::reject).

/// Outcome of parsing a card-position answer.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// A non-negative number
    Position(usize),
    /// User entered quit command (q or quit)
    Quit,
    /// Not a number
    Invalid,
}

/// `q` or `quit`, any case.
pub fn is_quit(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "q" | "quit")
}

/// Parses the answer to "which card will you play?".
///
/// # Example
///
/// ```rust
/// # use letterbox_cli::validation::{parse_card_position, ParseResult};
/// assert_eq!(parse_card_position(" 1 "), ParseResult::Position(1));
/// assert_eq!(parse_card_position("QUIT"), ParseResult::Quit);
/// assert_eq!(parse_card_position("king"), ParseResult::Invalid);
/// ```
pub fn parse_card_position(input: &str) -> ParseResult {
    if is_quit(input) {
        return ParseResult::Quit;
    }
    match input.trim().parse::<usize>() {
        Ok(pos) => ParseResult::Position(pos),
        Err(_) => ParseResult::Invalid,
    }
}
