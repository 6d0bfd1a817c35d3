use std::collections::BTreeSet;
use std::fmt;

use crate::core::card::{Card, Suit, Value};
use crate::core::errors::ShowdownError;
use crate::core::rank::{Rank, Rankable};

/// A full hand of five poker cards.
///
/// The cards live in a set ordered by `Card`'s ordering, and the hand's
/// [`Rank`] is computed once during construction. There is no way to add or
/// remove cards afterwards, so the cached rank can never go stale and a
/// `Hand` is freely shareable across threads.
///
/// Passing the same card twice is a caller bug; the set collapses the
/// duplicate and the hand silently holds fewer than five cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Card>", into = "Vec<Card>"))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hand {
    /// The five cards, kept in card order.
    cards: BTreeSet<Card>,
    /// The rank category these five cards evaluate to.
    rank: Rank,
}

impl Hand {
    /// Create a hand from exactly five cards.
    ///
    /// The fixed size array makes the size error unrepresentable, so this
    /// constructor is infallible.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Hand, Rank};
    ///
    /// let hand = Hand::new([
    ///     Card::try_from("3d").unwrap(),
    ///     Card::try_from("8d").unwrap(),
    ///     Card::try_from("3c").unwrap(),
    ///     Card::try_from("3h").unwrap(),
    ///     Card::try_from("8s").unwrap(),
    /// ]);
    /// assert_eq!(Rank::FullHouse, hand.rank());
    /// ```
    pub fn new(cards: [Card; 5]) -> Self {
        Self::from_set(cards.into_iter().collect())
    }

    /// Create a hand from a slice of cards.
    ///
    /// Anything other than exactly five cards is rejected with the offending
    /// count.
    pub fn new_from_slice(cards: &[Card]) -> Result<Self, ShowdownError> {
        if cards.len() != 5 {
            return Err(ShowdownError::InvalidHandSize(cards.len()));
        }
        Ok(Self::from_set(cards.iter().copied().collect()))
    }

    /// Parse a hand from card notation, two chars per card.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Hand, Rank};
    ///
    /// let hand = Hand::new_from_str("Tc8cQcJc9c").unwrap();
    /// assert_eq!(Rank::StraightFlush, hand.rank());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, ShowdownError> {
        let mut cards: Vec<Card> = Vec::with_capacity(5);
        let mut chars = hand_string.chars();
        while let Some(value_char) = chars.next() {
            let suit_char = chars
                .next()
                .ok_or_else(|| ShowdownError::InvalidCardString(hand_string.to_string()))?;
            let value = Value::from_char(value_char)
                .ok_or(ShowdownError::UnexpectedValueChar(value_char))?;
            let suit =
                Suit::from_char(suit_char).ok_or(ShowdownError::UnexpectedSuitChar(suit_char))?;
            cards.push(Card::new(value, suit));
        }
        Self::new_from_slice(&cards)
    }

    /// The rank these five cards were classified into when the hand was
    /// built. This is a field read, never a re-evaluation.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Iterate the cards in card order, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().copied()
    }

    /// The highest card in the hand.
    ///
    /// Among cards sharing the top value this picks the one with the highest
    /// suit, but that is set ordering only. Strength comparisons read the
    /// value and ignore the suit.
    pub fn highest_card(&self) -> Card {
        *self
            .cards
            .iter()
            .next_back()
            .expect("a hand always holds cards")
    }

    /// The highest value held by exactly two cards, if any.
    pub fn highest_pair_value(&self) -> Option<Value> {
        self.values_with_count(2).next_back()
    }

    /// The lowest value held by exactly two cards, if any.
    pub fn lowest_pair_value(&self) -> Option<Value> {
        self.values_with_count(2).next()
    }

    /// The highest value held by a single card, where single cards are not
    /// part of any pair, triple, or quad.
    pub fn highest_single_value(&self) -> Option<Value> {
        self.values_with_count(1).next_back()
    }

    /// The value held by exactly three cards, if any.
    pub fn trips_value(&self) -> Option<Value> {
        self.values_with_count(3).next()
    }

    /// The value held by exactly four cards, if any.
    pub fn quads_value(&self) -> Option<Value> {
        self.values_with_count(4).next()
    }

    fn from_set(cards: BTreeSet<Card>) -> Self {
        let rank = cards.rank_five();
        Self { cards, rank }
    }

    /// Values held by exactly `target` cards, ascending.
    fn values_with_count(&self, target: u8) -> impl DoubleEndedIterator<Item = Value> {
        let mut counts = [0u8; 13];
        for card in &self.cards {
            counts[card.value as usize] += 1;
        }
        counts
            .into_iter()
            .enumerate()
            .filter(move |(_, count)| *count == target)
            .map(|(value, _)| Value::from(value as u8))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = ShowdownError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new_from_slice(&cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.into_iter().collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for card in &self.cards {
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
