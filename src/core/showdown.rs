use std::cmp::Ordering;

use tracing::{debug, instrument};

use crate::core::card::Value;
use crate::core::hand::Hand;
use crate::core::rank::Rank;

/// Outcome of pitting two hands against each other.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Winner {
    /// The first hand takes it.
    FirstHand,
    /// The second hand takes it.
    SecondHand,
    /// Neither hand has precedence.
    Draw,
}

impl From<Ordering> for Winner {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => Winner::FirstHand,
            Ordering::Less => Winner::SecondHand,
            Ordering::Equal => Winner::Draw,
        }
    }
}

impl Winner {
    /// A human readable account of the outcome, naming the winning rank and
    /// both hands. The comparison itself performs no output; callers decide
    /// where this string goes.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Hand, showdown};
    ///
    /// let first = Hand::new_from_str("QdAc4s2s8h").unwrap();
    /// let second = Hand::new_from_str("KdJc4s2s4h").unwrap();
    /// let winner = showdown(&first, &second);
    /// assert!(winner.describe(&first, &second).contains("Pair"));
    /// ```
    pub fn describe(&self, first: &Hand, second: &Hand) -> String {
        match self {
            Winner::FirstHand => format!(
                "First hand wins, holding a {} with cards {} against {}",
                first.rank(),
                first,
                second
            ),
            Winner::SecondHand => format!(
                "Second hand wins, holding a {} with cards {} against {}",
                second.rank(),
                second,
                first
            ),
            Winner::Draw => {
                format!("There is no precedence between {first} and {second}, call it a draw")
            }
        }
    }
}

/// Decide which of two hands wins.
///
/// Ranks are compared first on their total order. Equal ranks fall back to
/// the rank specific kicker rules, all on card value alone; suits never
/// break a strength tie. When every rule comes up equal the result is a
/// draw.
///
/// # Examples
///
/// ```
/// use showdown::core::{Hand, Winner, showdown};
///
/// let pair_of_fours = Hand::new_from_str("KdJc4s2s4h").unwrap();
/// let ace_high = Hand::new_from_str("QdAc4s2s8h").unwrap();
/// assert_eq!(Winner::FirstHand, showdown(&pair_of_fours, &ace_high));
/// ```
#[instrument(level = "trace", skip_all)]
pub fn showdown(first: &Hand, second: &Hand) -> Winner {
    let ordering = first
        .rank()
        .cmp(&second.rank())
        .then_with(|| break_tie(first, second));
    let winner = Winner::from(ordering);
    debug!(?winner, %first, %second, "showdown decided");
    winner
}

/// Kicker rules for two hands carrying the same rank.
///
/// Each lookup is guaranteed by the rank the hands were classified into, so
/// a miss means classification and comparison have diverged. That is a
/// programming fault and panics rather than limping along on a default.
fn break_tie(first: &Hand, second: &Hand) -> Ordering {
    match first.rank() {
        Rank::OnePair => highest_pair(first)
            .cmp(&highest_pair(second))
            .then_with(|| highest_single(first).cmp(&highest_single(second))),
        Rank::TwoPair => highest_pair(first)
            .cmp(&highest_pair(second))
            .then_with(|| lowest_pair(first).cmp(&lowest_pair(second)))
            .then_with(|| highest_single(first).cmp(&highest_single(second))),
        Rank::ThreeOfAKind | Rank::FullHouse => trips(first).cmp(&trips(second)),
        Rank::FourOfAKind => quads(first).cmp(&quads(second)),
        Rank::StraightFlush | Rank::Flush | Rank::Straight | Rank::HighCard => first
            .highest_card()
            .value
            .cmp(&second.highest_card().value),
    }
}

fn highest_pair(hand: &Hand) -> Value {
    hand.highest_pair_value()
        .expect("a hand ranked on its pairs must hold a pair")
}

fn lowest_pair(hand: &Hand) -> Value {
    hand.lowest_pair_value()
        .expect("a hand ranked on its pairs must hold a pair")
}

fn highest_single(hand: &Hand) -> Value {
    hand.highest_single_value()
        .expect("a hand ranked on its kickers must hold a single card")
}

fn trips(hand: &Hand) -> Value {
    hand.trips_value()
        .expect("a hand ranked on its triple must hold a triple")
}

fn quads(hand: &Hand) -> Value {
    hand.quads_value()
        .expect("a hand ranked on its quad must hold a quad")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn test_higher_rank_wins_outright() {
        let high_card = Hand::new_from_str("QdAc4s2s8h").unwrap();
        let pair = Hand::new_from_str("KdJc4s2s4h").unwrap();
        assert_eq!(Rank::HighCard, high_card.rank());
        assert_eq!(Rank::OnePair, pair.rank());

        assert_eq!(Winner::SecondHand, showdown(&high_card, &pair));
        assert_eq!(Winner::FirstHand, showdown(&pair, &high_card));
    }

    #[test]
    fn test_pair_value_breaks_tie() {
        let fours = Hand::new_from_str("KdJc4s2s4h").unwrap();
        let nines = Hand::new_from_str("9d9c3s2s7h").unwrap();
        assert_eq!(Winner::SecondHand, showdown(&fours, &nines));
    }

    #[test]
    fn test_pair_kicker_breaks_equal_pairs() {
        // Both hold a pair of fours; the ace kicker beats the king kicker.
        let ace_kicker = Hand::new_from_str("4s4hAcJd9s").unwrap();
        let king_kicker = Hand::new_from_str("4c4dKcJh9d").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&ace_kicker, &king_kicker));
        assert_eq!(Winner::SecondHand, showdown(&king_kicker, &ace_kicker));
    }

    #[test]
    fn test_two_pair_lower_pair_breaks_tie() {
        // Equal high pair of aces, nines against fours underneath.
        let aces_and_nines = Hand::new_from_str("AdAc9s9h2d").unwrap();
        let aces_and_fours = Hand::new_from_str("AsAh4s4hKd").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&aces_and_nines, &aces_and_fours));
    }

    #[test]
    fn test_two_pair_singleton_breaks_tie() {
        // Same two pairs; only the remaining card differs.
        let king_kicker = Hand::new_from_str("AdAc9s9hKd").unwrap();
        let two_kicker = Hand::new_from_str("AsAh9c9d2d").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&king_kicker, &two_kicker));
    }

    #[test]
    fn test_trips_value_decides_three_of_a_kind() {
        let trip_aces = Hand::new_from_str("AdAcQsJsAh").unwrap();
        let trip_kings = Hand::new_from_str("KdKcQdJdKh").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&trip_aces, &trip_kings));
    }

    #[test]
    fn test_trips_value_decides_full_house() {
        let threes_over_eights = Hand::new_from_str("3d8d3c3h8s").unwrap();
        let nines_over_twos = Hand::new_from_str("9d2d9c9h2s").unwrap();
        assert_eq!(
            Winner::SecondHand,
            showdown(&threes_over_eights, &nines_over_twos)
        );
    }

    #[test]
    fn test_quad_value_decides_four_of_a_kind() {
        let quad_threes = Hand::new_from_str("3d8d3c3h3s").unwrap();
        let quad_fives = Hand::new_from_str("5d2d5c5h5s").unwrap();
        assert_eq!(Winner::SecondHand, showdown(&quad_threes, &quad_fives));
    }

    #[test]
    fn test_highest_card_decides_straights() {
        let queen_high = Hand::new_from_str("Td8cQsJs9h").unwrap();
        let king_high = Hand::new_from_str("Th9cQdJdKh").unwrap();
        assert_eq!(Winner::SecondHand, showdown(&queen_high, &king_high));
    }

    #[test]
    fn test_highest_card_decides_flushes() {
        let ace_high = Hand::new_from_str("3dAdTd2d7d").unwrap();
        let king_high = Hand::new_from_str("3cKcTc2c7c").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&ace_high, &king_high));
    }

    #[test]
    fn test_straight_flush_beats_four_of_a_kind() {
        let straight_flush = Hand::new_from_str("Tc8cQcJc9c").unwrap();
        let quad_threes = Hand::new_from_str("3d8d3c3h3s").unwrap();
        assert_eq!(Winner::FirstHand, showdown(&straight_flush, &quad_threes));
    }

    #[test_log::test]
    fn test_equal_strength_is_a_draw() {
        // Same values throughout, suits differ. Suits never decide.
        let first = Hand::new_from_str("2c3c4c5c7h").unwrap();
        let second = Hand::new_from_str("2d3d4d5d7s").unwrap();
        assert_eq!(Rank::HighCard, first.rank());
        assert_eq!(Winner::Draw, showdown(&first, &second));
    }

    #[test]
    fn test_identical_straights_draw() {
        let first = Hand::new_from_str("Td8cQsJs9h").unwrap();
        let second = Hand::new_from_str("Th8dQdJd9c").unwrap();
        assert_eq!(Winner::Draw, showdown(&first, &second));
    }

    #[test]
    fn test_winner_from_ordering() {
        assert_eq!(Winner::FirstHand, Winner::from(Ordering::Greater));
        assert_eq!(Winner::SecondHand, Winner::from(Ordering::Less));
        assert_eq!(Winner::Draw, Winner::from(Ordering::Equal));
    }

    #[test]
    fn test_describe_names_winner_and_cards() {
        let pair = Hand::new_from_str("KdJc4s2s4h").unwrap();
        let high_card = Hand::new_from_str("QdAc4s2s8h").unwrap();

        let winner = showdown(&pair, &high_card);
        let message = winner.describe(&pair, &high_card);
        assert!(message.starts_with("First hand wins, holding a Pair"));
        assert!(message.contains(&pair.to_string()));
        assert!(message.contains(&high_card.to_string()));
    }

    #[test]
    fn test_describe_draw() {
        let first = Hand::new_from_str("2c3c4c5c7h").unwrap();
        let second = Hand::new_from_str("2d3d4d5d7s").unwrap();
        let message = showdown(&first, &second).describe(&first, &second);
        assert!(message.contains("draw"));
    }
}
