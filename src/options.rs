//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::error::{CardError, RankOrderError};

/// Card game a deck is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Variant {
    /// Plain 52-card deck, dealt as a whole.
    #[default]
    Standard,
    /// War: two hands of 26.
    War,
    /// Belote: 32 cards, hands of 8.
    Belote,
    /// Sixty-Six: 24 cards, hands of 6.
    SixtySix,
}

impl Variant {
    /// Returns how many cards [`Deck::deal`](crate::Deck::deal) takes from the top.
    ///
    /// `None` means the whole remaining deck.
    #[must_use]
    pub const fn deal_size(self) -> Option<usize> {
        match self {
            Self::Standard => None,
            Self::War => Some(26),
            Self::Belote => Some(8),
            Self::SixtySix => Some(6),
        }
    }

    /// Returns the default rank order of the variant.
    #[must_use]
    pub fn rank_order(self) -> RankOrder {
        match self {
            Self::Standard | Self::War => RankOrder::standard(),
            Self::Belote => RankOrder::belote(),
            Self::SixtySix => RankOrder::sixty_six(),
        }
    }
}

const BELOTE_RANKS: [Rank; 8] = [
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

const SIXTY_SIX_RANKS: [Rank; 6] = [
    Rank::Nine,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ten,
    Rank::Ace,
];

/// Ordered list of the ranks a deck contains, lowest first.
///
/// The order drives both deck generation and card grading. Suits are always
/// [`Suit::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankOrder {
    ranks: Vec<Rank>,
}

impl RankOrder {
    /// Creates a rank order from the given ranks, lowest first.
    ///
    /// # Errors
    ///
    /// Returns an error if `ranks` is empty or contains a rank twice.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::{Rank, RankOrder, RankOrderError};
    ///
    /// let order = RankOrder::new(vec![Rank::Jack, Rank::Queen, Rank::King]).unwrap();
    /// assert_eq!(order.len(), 3);
    ///
    /// let err = RankOrder::new(vec![Rank::Jack, Rank::Jack]).unwrap_err();
    /// assert_eq!(err, RankOrderError::DuplicateRank(Rank::Jack));
    /// ```
    pub fn new(ranks: Vec<Rank>) -> Result<Self, RankOrderError> {
        if ranks.is_empty() {
            return Err(RankOrderError::Empty);
        }

        for (i, rank) in ranks.iter().enumerate() {
            if ranks[..i].contains(rank) {
                return Err(RankOrderError::DuplicateRank(*rank));
            }
        }

        Ok(Self { ranks })
    }

    /// Standard order: 2 through 10, jack, queen, king, ace.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            ranks: Rank::ALL.to_vec(),
        }
    }

    /// Belote order: 7, 8, 9, jack, queen, king, 10, ace.
    #[must_use]
    pub fn belote() -> Self {
        Self {
            ranks: BELOTE_RANKS.to_vec(),
        }
    }

    /// Sixty-Six order: 9, jack, queen, king, 10, ace.
    #[must_use]
    pub fn sixty_six() -> Self {
        Self {
            ranks: SIXTY_SIX_RANKS.to_vec(),
        }
    }

    /// Returns the ranks, lowest first.
    #[must_use]
    pub fn ranks(&self) -> &[Rank] {
        &self.ranks
    }

    /// Returns the number of ranks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    /// Always `false`; a rank order holds at least one rank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    /// Returns whether `rank` is part of the order.
    #[must_use]
    pub fn contains(&self, rank: Rank) -> bool {
        self.ranks.contains(&rank)
    }

    /// Returns the position of `rank` in the order.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] if the rank is not part of the order.
    pub fn rank_index(&self, rank: Rank) -> Result<usize, CardError> {
        self.ranks
            .iter()
            .position(|&r| r == rank)
            .ok_or(CardError::UnknownRank(rank))
    }

    /// Returns the position of `suit` in [`Suit::ALL`].
    #[must_use]
    pub const fn suit_index(&self, suit: Suit) -> usize {
        suit.index()
    }

    /// Returns the grade of a card: `suit_index * len + rank_index`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] if the card's rank is not part of the order.
    pub fn grade(&self, card: &Card) -> Result<usize, CardError> {
        let rank_index = self.rank_index(card.rank())?;
        Ok(self.suit_index(card.suit()) * self.len() + rank_index)
    }
}

impl Default for RankOrder {
    fn default() -> Self {
        Self::standard()
    }
}

/// Configuration for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardgames::{DeckOptions, Rank, RankOrder, Variant};
///
/// let order = RankOrder::new(vec![Rank::Nine, Rank::Ten, Rank::Ace]).unwrap();
/// let options = DeckOptions::war().with_order(order);
/// assert_eq!(options.variant, Variant::War);
/// assert_eq!(options.order.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOptions {
    /// Game the deck is dealt for.
    pub variant: Variant,
    /// Ranks the deck contains and grades by.
    pub order: RankOrder,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckOptions {
    /// Creates options for `variant` with its default rank order.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            order: variant.rank_order(),
        }
    }

    /// Options for a standard 52-card deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Variant::Standard)
    }

    /// Options for a War deck.
    #[must_use]
    pub fn war() -> Self {
        Self::new(Variant::War)
    }

    /// Options for a Belote deck.
    #[must_use]
    pub fn belote() -> Self {
        Self::new(Variant::Belote)
    }

    /// Options for a Sixty-Six deck.
    #[must_use]
    pub fn sixty_six() -> Self {
        Self::new(Variant::SixtySix)
    }

    /// Sets the rank order.
    #[must_use]
    pub fn with_order(mut self, order: RankOrder) -> Self {
        self.order = order;
        self
    }
}
