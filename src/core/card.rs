use std::fmt;

use crate::core::errors::ShowdownError;

/// Card suits, clubs low to spades high.
///
/// Suit order only matters for how cards sort inside a hand. It never
/// contributes to hand strength.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All suits.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Get all the suits.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Translate a char into a `Suit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('s'));
    /// assert_eq!(None, Suit::from_char('x'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'c' => Some(Self::Club),
            'd' => Some(Self::Diamond),
            'h' => Some(Self::Heart),
            's' => Some(Self::Spade),
            _ => None,
        }
    }

    /// The char used to represent this suit in card notation.
    pub fn to_char(self) -> char {
        match self {
            Self::Club => 'c',
            Self::Diamond => 'd',
            Self::Heart => 'h',
            Self::Spade => 's',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Card values two through ace. The ace is always high; nothing in this
/// crate treats it as a one.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// All the values, weakest first.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all the values, weakest first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Translate a char into a `Value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_char('A'));
    /// assert_eq!(Some(Value::Ten), Value::from_char('T'));
    /// assert_eq!(None, Value::from_char('1'));
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '2' => Some(Self::Two),
            '3' => Some(Self::Three),
            '4' => Some(Self::Four),
            '5' => Some(Self::Five),
            '6' => Some(Self::Six),
            '7' => Some(Self::Seven),
            '8' => Some(Self::Eight),
            '9' => Some(Self::Nine),
            'T' => Some(Self::Ten),
            'J' => Some(Self::Jack),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            'A' => Some(Self::Ace),
            _ => None,
        }
    }

    /// The char used to represent this value in card notation.
    pub fn to_char(self) -> char {
        match self {
            Self::Two => '2',
            Self::Three => '3',
            Self::Four => '4',
            Self::Five => '5',
            Self::Six => '6',
            Self::Seven => '7',
            Self::Eight => '8',
            Self::Nine => '9',
            Self::Ten => 'T',
            Self::Jack => 'J',
            Self::Queen => 'Q',
            Self::King => 'K',
            Self::Ace => 'A',
        }
    }
}

impl From<u8> for Value {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Two,
            1 => Self::Three,
            2 => Self::Four,
            3 => Self::Five,
            4 => Self::Six,
            5 => Self::Seven,
            6 => Self::Eight,
            7 => Self::Nine,
            8 => Self::Ten,
            9 => Self::Jack,
            10 => Self::Queen,
            11 => Self::King,
            12 => Self::Ace,
            _ => panic!("Invalid card value index"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A single playing card: a value and a suit.
///
/// Cards order by value first and break ties by suit, so a sorted run of
/// cards keeps equal values adjacent. That ordering is internal bookkeeping;
/// hand strength comparison never consults the suit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of the card.
    pub value: Value,
    /// The suit of the card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Suit, Value};
    ///
    /// let c = Card::new(Value::Ace, Suit::Spade);
    /// assert_eq!("As", c.to_string());
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl TryFrom<&str> for Card {
    type Error = ShowdownError;

    /// Parse the two char notation, value then suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use showdown::core::{Card, Suit, Value};
    ///
    /// let c = Card::try_from("Kd").unwrap();
    /// assert_eq!(Card::new(Value::King, Suit::Diamond), c);
    /// ```
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        let value_char = chars
            .next()
            .ok_or_else(|| ShowdownError::InvalidCardString(s.to_string()))?;
        let suit_char = chars
            .next()
            .ok_or_else(|| ShowdownError::InvalidCardString(s.to_string()))?;
        if chars.next().is_some() {
            return Err(ShowdownError::InvalidCardString(s.to_string()));
        }
        let value = Value::from_char(value_char)
            .ok_or(ShowdownError::UnexpectedValueChar(value_char))?;
        let suit = Suit::from_char(suit_char).ok_or(ShowdownError::UnexpectedSuitChar(suit_char))?;
        Ok(Card { value, suit })
    }
}
