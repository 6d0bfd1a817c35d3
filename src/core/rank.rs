use std::collections::BTreeSet;
use std::fmt;

use crate::core::card::Card;
use crate::core::hand::Hand;

/// All the possible rank categories for a five card hand, weakest first.
///
/// The declaration order is the comparison order, so the derived `Ord` is
/// the total order used when two hands meet.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Rank {
    /// No matches at all.
    HighCard,
    /// One card value appears twice.
    OnePair,
    /// Two different values each appear twice.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five consecutive values.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five consecutive values, all in one suit.
    StraightFlush,
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rank::HighCard => "High Card",
            Rank::OnePair => "Pair",
            Rank::TwoPair => "Two Pairs",
            Rank::ThreeOfAKind => "Three of a Kind",
            Rank::Straight => "Straight",
            Rank::Flush => "Flush",
            Rank::FullHouse => "Full House",
            Rank::FourOfAKind => "Four of a Kind",
            Rank::StraightFlush => "Straight Flush",
        };
        write!(f, "{name}")
    }
}

/// Five consecutive value bits set in the bitset.
///
/// The ace only ever sits at the top of the ladder, so A-2-3-4-5 does not
/// qualify. With five cards a run of five bits also implies five distinct
/// values.
fn is_straight(value_set: u16) -> bool {
    value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4) != 0
}

/// Can this turn into a hand rank? There are implementations for `Hand`,
/// `Vec<Card>`, and card slices.
pub trait Rankable {
    /// The five cards to classify.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Classify exactly five cards into their rank category.
    ///
    /// This is a pure function of the cards. The five card guarantee is the
    /// caller's job; `Hand` construction is the validating path. Nothing is
    /// cached, so repeated calls repeat the work.
    ///
    /// # Examples
    /// ```
    /// use showdown::core::{Hand, Rank, Rankable};
    ///
    /// let hand = Hand::new_from_str("2h2d8d8sKd").unwrap();
    /// assert_eq!(Rank::TwoPair, hand.rank_five());
    /// ```
    fn rank_five(&self) -> Rank {
        let mut value_set: u16 = 0;
        let mut suit_set: u8 = 0;
        let mut value_to_count = [0u8; 13];

        for c in self.cards() {
            value_set |= 1 << c.value as u16;
            suit_set |= 1 << c.suit as u8;
            value_to_count[c.value as usize] += 1;
        }

        // Rotate into count => bitset of values holding that count.
        let mut count_to_values: [u16; 5] = [0; 5];
        for (value, &count) in value_to_count.iter().enumerate() {
            count_to_values[count as usize] |= 1 << value;
        }

        let potential_flush = suit_set.count_ones() == 1;
        let potential_straight = is_straight(value_set);

        // First match wins. The order doubles as the category priority, so
        // a straight flush is claimed before either half on its own, and
        // grouped values are only consulted once runs and suits are ruled
        // out.
        if potential_straight && potential_flush {
            Rank::StraightFlush
        } else if potential_flush {
            Rank::Flush
        } else if potential_straight {
            Rank::Straight
        } else if count_to_values[4] != 0 {
            Rank::FourOfAKind
        } else if count_to_values[3] != 0 && count_to_values[2] != 0 {
            Rank::FullHouse
        } else if count_to_values[3] != 0 {
            Rank::ThreeOfAKind
        } else {
            match count_to_values[2].count_ones() {
                0 => Rank::HighCard,
                1 => Rank::OnePair,
                _ => Rank::TwoPair,
            }
        }
    }
}

impl Rankable for Hand {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter()
    }
}

impl Rankable for BTreeSet<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}
