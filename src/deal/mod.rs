//! Hands dealt from a deck.
//!
//! Every hand implements [`Hand`]. Variant-specific queries live on the
//! variant's own type, and [`Deal`] is what [`Deck::deal`](crate::Deck::deal)
//! hands back.

use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::options::Variant;

mod belote;
mod sixty_six;
mod war;

pub use belote::{BeloteDeal, belote_priority};
pub use sixty_six::SixtySixDeal;
pub use war::WarDeal;

/// Read access shared by every hand.
pub trait Hand {
    /// Returns the cards in the hand, in dealt order.
    fn cards(&self) -> &[Card];

    /// Returns the number of cards in the hand.
    fn size(&self) -> usize {
        self.cards().len()
    }

    /// Returns whether the hand is empty.
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Returns whether the hand holds `card`.
    fn contains(&self, card: &Card) -> bool {
        self.cards().contains(card)
    }
}

/// Returns whether `cards` hold both the queen and the king of `suit`.
pub(crate) fn has_royal_pair(cards: &[Card], suit: Suit) -> bool {
    cards.contains(&Card::new(Rank::Queen, suit)) && cards.contains(&Card::new(Rank::King, suit))
}

/// A hand from a standard deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandardDeal {
    cards: Vec<Card>,
}

impl StandardDeal {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl Hand for StandardDeal {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// A hand dealt for one of the supported variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deal {
    /// Whole standard deck.
    Standard(StandardDeal),
    /// War hand.
    War(WarDeal),
    /// Belote hand.
    Belote(BeloteDeal),
    /// Sixty-Six hand.
    SixtySix(SixtySixDeal),
}

impl Deal {
    /// Returns the variant the hand was dealt for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self {
            Self::Standard(_) => Variant::Standard,
            Self::War(_) => Variant::War,
            Self::Belote(_) => Variant::Belote,
            Self::SixtySix(_) => Variant::SixtySix,
        }
    }

    /// Returns the War hand, if this is one.
    pub const fn as_war_mut(&mut self) -> Option<&mut WarDeal> {
        match self {
            Self::War(deal) => Some(deal),
            _ => None,
        }
    }

    /// Returns the Belote hand, if this is one.
    #[must_use]
    pub const fn as_belote(&self) -> Option<&BeloteDeal> {
        match self {
            Self::Belote(deal) => Some(deal),
            _ => None,
        }
    }

    /// Returns the Sixty-Six hand, if this is one.
    #[must_use]
    pub const fn as_sixty_six(&self) -> Option<&SixtySixDeal> {
        match self {
            Self::SixtySix(deal) => Some(deal),
            _ => None,
        }
    }

    /// Converts into the War hand, if this is one.
    #[must_use]
    pub fn into_war(self) -> Option<WarDeal> {
        match self {
            Self::War(deal) => Some(deal),
            _ => None,
        }
    }

    /// Converts into the Belote hand, if this is one.
    #[must_use]
    pub fn into_belote(self) -> Option<BeloteDeal> {
        match self {
            Self::Belote(deal) => Some(deal),
            _ => None,
        }
    }

    /// Converts into the Sixty-Six hand, if this is one.
    #[must_use]
    pub fn into_sixty_six(self) -> Option<SixtySixDeal> {
        match self {
            Self::SixtySix(deal) => Some(deal),
            _ => None,
        }
    }
}

impl Hand for Deal {
    fn cards(&self) -> &[Card] {
        match self {
            Self::Standard(deal) => deal.cards(),
            Self::War(deal) => deal.cards(),
            Self::Belote(deal) => deal.cards(),
            Self::SixtySix(deal) => deal.cards(),
        }
    }
}
