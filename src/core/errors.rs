use thiserror::Error;

/// Errors from constructing cards and hands.
///
/// These cover bad input only. A hand that was built successfully can always
/// be classified and compared without an error path.
#[derive(Error, Debug, PartialEq, Eq, Clone, Hash)]
pub enum ShowdownError {
    /// A hand takes exactly five cards; anything else is rejected with the
    /// count that was actually supplied.
    #[error("Expected a hand of exactly five cards, got {0}")]
    InvalidHandSize(usize),

    #[error("Unexpected character for a card value: {0}")]
    UnexpectedValueChar(char),

    #[error("Unexpected character for a card suit: {0}")]
    UnexpectedSuitChar(char),

    /// Card notation is a value char followed by a suit char, nothing more.
    #[error("Unparseable card string: {0}")]
    InvalidCardString(String),
}
