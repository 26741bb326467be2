//! Card types.

use core::cmp::Ordering;
use core::fmt;

use crate::error::CardError;
use crate::options::RankOrder;

/// Card suit.
///
/// The declaration order is the suit priority used when grading cards:
/// clubs lowest, spades highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits, lowest priority first.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        })
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in standard order, 2 through ace.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the face value of a numeric rank, `None` for court cards and aces.
    #[must_use]
    pub const fn pips(self) -> Option<u8> {
        match self {
            Self::Jack | Self::Queen | Self::King | Self::Ace => None,
            // Two is the first variant.
            _ => Some(self as u8 + 2),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jack => f.write_str("Jack"),
            Self::Queen => f.write_str("Queen"),
            Self::King => f.write_str("King"),
            Self::Ace => f.write_str("Ace"),
            _ => write!(f, "{}", self.pips().unwrap_or_default()),
        }
    }
}

/// A playing card.
///
/// Two cards are equal when both rank and suit match. Ordering depends on
/// the variant being played, so it is exposed through [`Card::compare`]
/// rather than [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Compares two cards by their grade within `order`.
    ///
    /// Cards of a higher suit always win; within a suit the rank that comes
    /// later in `order` wins.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] if either rank is not part of `order`.
    ///
    /// # Example
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use cardgames::{Card, Rank, RankOrder, Suit};
    ///
    /// let order = RankOrder::standard();
    /// let ace = Card::new(Rank::Ace, Suit::Clubs);
    /// let two = Card::new(Rank::Two, Suit::Diamonds);
    /// assert_eq!(ace.compare(&two, &order), Ok(Ordering::Less));
    /// ```
    pub fn compare(&self, other: &Self, order: &RankOrder) -> Result<Ordering, CardError> {
        Ok(order.grade(self)?.cmp(&order.grade(other)?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;
