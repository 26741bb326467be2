use alloc::vec::Vec;

use super::{Hand, has_royal_pair};
use crate::card::{Card, Rank, Suit};

/// Returns the Belote priority of a rank.
///
/// Ten ranks just below the ace and above the king; every numeric rank other
/// than ten keeps its face value.
#[must_use]
pub fn belote_priority(rank: Rank) -> u8 {
    match rank {
        Rank::Jack => 10,
        Rank::Queen => 11,
        Rank::King => 12,
        Rank::Ten => 13,
        Rank::Ace => 14,
        _ => rank.pips().unwrap_or_default(),
    }
}

/// A Belote hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BeloteDeal {
    cards: Vec<Card>,
}

impl BeloteDeal {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the card of `suit` with the highest Belote priority.
    #[must_use]
    pub fn highest_of_suit(&self, suit: Suit) -> Option<Card> {
        self.cards
            .iter()
            .filter(|card| card.suit() == suit)
            .max_by_key(|card| belote_priority(card.rank()))
            .copied()
    }

    /// Returns whether the hand holds the queen and king of one suit.
    #[must_use]
    pub fn belote(&self) -> bool {
        Suit::ALL
            .into_iter()
            .any(|suit| has_royal_pair(&self.cards, suit))
    }

    /// Returns whether the hand holds three consecutive cards of one suit.
    #[must_use]
    pub fn tierce(&self) -> bool {
        self.longest_run() >= 3
    }

    /// Returns whether the hand holds four consecutive cards of one suit.
    #[must_use]
    pub fn quarte(&self) -> bool {
        self.longest_run() >= 4
    }

    /// Returns whether the hand holds five consecutive cards of one suit.
    #[must_use]
    pub fn quint(&self) -> bool {
        self.longest_run() >= 5
    }

    /// Returns whether the hand holds all four jacks.
    #[must_use]
    pub fn carre_of_jacks(&self) -> bool {
        self.carre(Rank::Jack)
    }

    /// Returns whether the hand holds all four nines.
    #[must_use]
    pub fn carre_of_nines(&self) -> bool {
        self.carre(Rank::Nine)
    }

    /// Returns whether the hand holds all four aces.
    #[must_use]
    pub fn carre_of_aces(&self) -> bool {
        self.carre(Rank::Ace)
    }

    fn carre(&self, rank: Rank) -> bool {
        self.cards.iter().filter(|card| card.rank() == rank).count() == 4
    }

    /// Length of the longest same-suit run of consecutive priorities.
    fn longest_run(&self) -> usize {
        let mut longest = 0;

        for suit in Suit::ALL {
            let mut priorities: Vec<u8> = self
                .cards
                .iter()
                .filter(|card| card.suit() == suit)
                .map(|card| belote_priority(card.rank()))
                .collect();
            priorities.sort_unstable();

            let mut streak = 0;
            let mut previous: Option<u8> = None;
            for priority in priorities {
                streak = match previous {
                    Some(p) if priority == p + 1 => streak + 1,
                    _ => 1,
                };
                longest = longest.max(streak);
                previous = Some(priority);
            }
        }

        longest
    }
}

impl Hand for BeloteDeal {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}
