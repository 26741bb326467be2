use alloc::vec::Vec;

use super::{Hand, has_royal_pair};
use crate::card::{Card, Suit};

/// A Sixty-Six hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SixtySixDeal {
    cards: Vec<Card>,
}

impl SixtySixDeal {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns whether a non-trump suit holds both queen and king, worth 20.
    #[must_use]
    pub fn twenty(&self, trump: Suit) -> bool {
        Suit::ALL
            .into_iter()
            .filter(|&suit| suit != trump)
            .any(|suit| has_royal_pair(&self.cards, suit))
    }

    /// Returns whether the trump suit holds both queen and king, worth 40.
    #[must_use]
    pub fn forty(&self, trump: Suit) -> bool {
        has_royal_pair(&self.cards, trump)
    }
}

impl Hand for SixtySixDeal {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
