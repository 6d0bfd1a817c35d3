//! A library for evaluating and ranking five card poker hands.
//!
//! A [`Hand`](crate::core::Hand) owns exactly five cards and knows its
//! [`Rank`](crate::core::Rank) from the moment it is built; construction
//! with any other number of cards fails with the offending count. Two hands
//! go head to head through [`showdown`](crate::core::showdown), which
//! compares ranks first and applies the usual kicker rules when they tie.
//!
//! ```
//! use showdown::core::{Hand, Rank, Winner, showdown};
//!
//! let first = Hand::new_from_str("Tc8cQcJc9c").unwrap();
//! let second = Hand::new_from_str("3d8d3c3h3s").unwrap();
//!
//! assert_eq!(Rank::StraightFlush, first.rank());
//! assert_eq!(Rank::FourOfAKind, second.rank());
//! assert_eq!(Winner::FirstHand, showdown(&first, &second));
//! ```
//!
//! One deliberate departure from most poker rules: the ace is always high,
//! so A-2-3-4-5 is not a straight here.

/// The core module with all the card, hand, rank, and showdown types.
pub mod core;
