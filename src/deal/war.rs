use alloc::vec::Vec;
use rand::Rng;
use tracing::trace;

use super::Hand;
use crate::card::Card;

/// Hand size at or below which cards may be played face up.
const FACE_UP_LIMIT: usize = 3;

/// A War hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WarDeal {
    cards: Vec<Card>,
}

impl WarDeal {
    /// Creates a hand holding `cards`.
    #[must_use]
    pub const fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Plays a card chosen uniformly at random and removes it from the hand.
    ///
    /// Returns `None` once the hand is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::{Deck, DeckOptions, Hand};
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(1);
    /// let mut hand = Deck::new(DeckOptions::war()).deal().into_war().unwrap();
    /// let card = hand.play_card(&mut rng).unwrap();
    /// assert_eq!(hand.size(), 25);
    /// assert!(!hand.contains(&card));
    /// ```
    pub fn play_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let card = self.cards[rng.random_range(0..self.cards.len())];
        self.cards.retain(|c| *c != card);
        trace!(%card, remaining = self.cards.len(), "played card");
        Some(card)
    }

    /// Returns whether cards may be played face up, which War allows once a
    /// hand is down to its last three cards.
    #[must_use]
    pub fn allow_face_up(&self) -> bool {
        self.cards.len() <= FACE_UP_LIMIT
    }
}

impl Hand for WarDeal {
    fn cards(&self) -> &[Card] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::card::{Rank, Suit};

    #[test_log::test]
    fn play_card_drains_hand() {
        let cards = vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Spades),
        ];
        let mut hand = WarDeal::new(cards.clone());
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut played = vec![];

        while let Some(card) = hand.play_card(&mut rng) {
            assert!(cards.contains(&card));
            assert!(!played.contains(&card));
            played.push(card);
            assert_eq!(hand.size(), cards.len() - played.len());
        }

        assert_eq!(played.len(), 3);
        assert_eq!(hand.play_card(&mut rng), None);
    }

    #[test]
    fn face_up_at_three_cards() {
        let mut hand = WarDeal::new(vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Three, Suit::Clubs),
            Card::new(Rank::Four, Suit::Clubs),
            Card::new(Rank::Five, Suit::Clubs),
        ]);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        assert!(!hand.allow_face_up());
        assert!(hand.play_card(&mut rng).is_some());
        assert!(hand.allow_face_up());
        assert!(WarDeal::default().allow_face_up());
    }
}
