/// Everything about a single card.
mod card;
/// Export `Card`, `Suit`, and `Value`.
pub use self::card::{Card, Suit, Value};

/// Error types for card and hand construction.
mod errors;
/// Export `ShowdownError`.
pub use self::errors::ShowdownError;

/// A validated hand of five cards carrying its rank.
mod hand;
/// Export `Hand`.
pub use self::hand::Hand;

/// Rank categories and the classification trait.
mod rank;
/// Export `Rank` and `Rankable`.
pub use self::rank::{Rank, Rankable};

/// Two hand comparison with kicker tie breaks.
mod showdown;
/// Export `showdown` and `Winner`.
pub use self::showdown::{showdown, Winner};
