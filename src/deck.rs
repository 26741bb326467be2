//! Deck of cards.

use core::cmp::Reverse;
use core::fmt;

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::card::{Card, Suit};
use crate::deal::{BeloteDeal, Deal, SixtySixDeal, StandardDeal, WarDeal};
use crate::error::CardError;
use crate::options::{DeckOptions, Variant};

/// An ordered deck of cards for one game variant.
///
/// The first card is the top of the deck. Cards only ever leave the deck,
/// through draws or [`Deck::deal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Remaining cards, top first.
    cards: Vec<Card>,
    /// Variant and rank order.
    options: DeckOptions,
}

impl Deck {
    /// Creates a full deck: every suit crossed with every rank of the order,
    /// suit by suit, highest first. A fresh deck is already in sorted order,
    /// with the ace of spades on top.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::{Card, Deck, DeckOptions, Rank, Suit};
    ///
    /// let deck = Deck::new(DeckOptions::standard());
    /// assert_eq!(deck.size(), 52);
    /// assert_eq!(deck.top_card(), Some(&Card::new(Rank::Ace, Suit::Spades)));
    /// assert_eq!(deck.bottom_card(), Some(&Card::new(Rank::Two, Suit::Clubs)));
    /// assert_eq!(Deck::new(DeckOptions::belote()).size(), 32);
    /// assert_eq!(Deck::new(DeckOptions::sixty_six()).size(), 24);
    /// ```
    #[must_use]
    pub fn new(options: DeckOptions) -> Self {
        let mut cards = Vec::with_capacity(Suit::ALL.len() * options.order.len());

        for suit in Suit::ALL.into_iter().rev() {
            for &rank in options.order.ranks().iter().rev() {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards, options }
    }

    /// Creates a deck holding exactly `cards`, top first.
    ///
    /// An empty list gives an empty deck.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownRank`] if a card's rank is not part of the
    /// rank order.
    pub fn from_cards(cards: Vec<Card>, options: DeckOptions) -> Result<Self, CardError> {
        if let Some(card) = cards.iter().find(|c| !options.order.contains(c.rank())) {
            return Err(CardError::UnknownRank(card.rank()));
        }

        Ok(Self { cards, options })
    }

    /// Creates a full deck shuffled with a [`ChaCha8Rng`] seeded from `seed`.
    #[must_use]
    pub fn shuffled(options: DeckOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Self::new(options);
        deck.shuffle(&mut rng);
        deck
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Returns the variant the deck is dealt for.
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.options.variant
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of remaining cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the remaining cards, top first.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Removes and returns the top card.
    pub fn draw_top_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Removes and returns the bottom card.
    pub fn draw_bottom_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the bottom card without removing it.
    #[must_use]
    pub fn bottom_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Shuffles the remaining cards in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        self.cards.shuffle(rng);
        debug!(size = self.cards.len(), "deck shuffled");
        self
    }

    /// Sorts the remaining cards by grade, highest first.
    ///
    /// Every card's rank is known to the order (checked on construction), so
    /// grading cannot fail here.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::{Card, Deck, DeckOptions, Rank, Suit};
    ///
    /// let mut deck = Deck::new(DeckOptions::sixty_six());
    /// deck.sort();
    /// assert_eq!(deck.top_card(), Some(&Card::new(Rank::Ace, Suit::Spades)));
    /// assert_eq!(deck.bottom_card(), Some(&Card::new(Rank::Nine, Suit::Clubs)));
    /// ```
    pub fn sort(&mut self) -> &mut Self {
        let order = &self.options.order;
        self.cards
            .sort_by_cached_key(|card| Reverse(order.grade(card).ok()));
        debug!(size = self.cards.len(), "deck sorted");
        self
    }

    /// Removes the variant's hand from the top of the deck.
    ///
    /// War takes 26 cards, Belote 8, Sixty-Six 6 and a standard deck the whole
    /// of what remains. A deck with fewer cards left deals what it has.
    ///
    /// # Example
    ///
    /// ```
    /// use cardgames::{Deck, DeckOptions, Hand};
    ///
    /// let mut deck = Deck::new(DeckOptions::war());
    /// let hand = deck.deal();
    /// assert_eq!(hand.size(), 26);
    /// assert_eq!(deck.size(), 26);
    /// ```
    pub fn deal(&mut self) -> Deal {
        let count = self
            .variant()
            .deal_size()
            .map_or(self.cards.len(), |size| size.min(self.cards.len()));
        let cards: Vec<Card> = self.cards.drain(..count).collect();

        debug!(
            variant = ?self.variant(),
            dealt = cards.len(),
            remaining = self.cards.len(),
            "dealt hand"
        );

        match self.variant() {
            Variant::Standard => Deal::Standard(StandardDeal::new(cards)),
            Variant::War => Deal::War(WarDeal::new(cards)),
            Variant::Belote => Deal::Belote(BeloteDeal::new(cards)),
            Variant::SixtySix => Deal::SixtySix(SixtySixDeal::new(cards)),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DeckOptions::default())
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = alloc::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::*;
    use crate::card::Rank;
    use crate::deal::Hand;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn new_is_suit_major_highest_first() {
        let deck = Deck::new(DeckOptions::belote());
        assert_eq!(deck.top_card(), Some(&card(Rank::Ace, Suit::Spades)));
        assert_eq!(deck.cards()[1], card(Rank::Ten, Suit::Spades));
        assert_eq!(deck.cards()[7], card(Rank::Seven, Suit::Spades));
        assert_eq!(deck.cards()[8], card(Rank::Ace, Suit::Hearts));
        assert_eq!(deck.bottom_card(), Some(&card(Rank::Seven, Suit::Clubs)));
    }

    #[test]
    fn new_deck_is_already_sorted() {
        for options in [
            DeckOptions::standard(),
            DeckOptions::war(),
            DeckOptions::belote(),
            DeckOptions::sixty_six(),
        ] {
            let fresh = Deck::new(options.clone());
            let mut sorted = Deck::new(options);
            sorted.sort();
            assert_eq!(fresh, sorted);
        }
    }

    #[test]
    fn first_belote_deal_is_top_spades() {
        let mut deck = Deck::new(DeckOptions::belote());
        let hand = deck.deal();
        let dealt: Vec<Card> = [
            Rank::Ace,
            Rank::Ten,
            Rank::King,
            Rank::Queen,
            Rank::Jack,
            Rank::Nine,
            Rank::Eight,
            Rank::Seven,
        ]
        .into_iter()
        .map(|rank| card(rank, Suit::Spades))
        .collect();
        assert_eq!(hand.cards(), dealt.as_slice());
    }

    #[test]
    fn from_cards_keeps_order_and_allows_empty() {
        let cards = vec![card(Rank::Ace, Suit::Hearts), card(Rank::Nine, Suit::Clubs)];
        let deck = Deck::from_cards(cards.clone(), DeckOptions::sixty_six()).unwrap();
        assert_eq!(deck.cards(), cards.as_slice());

        let empty = Deck::from_cards(vec![], DeckOptions::standard()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn from_cards_rejects_unknown_rank() {
        let cards = vec![card(Rank::Two, Suit::Hearts)];
        assert_eq!(
            Deck::from_cards(cards, DeckOptions::belote()),
            Err(CardError::UnknownRank(Rank::Two))
        );
    }

    #[test]
    fn draws_on_empty_deck_are_none() {
        let mut deck = Deck::from_cards(vec![card(Rank::Ace, Suit::Clubs)], DeckOptions::war())
            .unwrap();
        assert_eq!(deck.draw_bottom_card(), Some(card(Rank::Ace, Suit::Clubs)));
        assert_eq!(deck.draw_bottom_card(), None);
        assert_eq!(deck.draw_top_card(), None);
        assert_eq!(deck.top_card(), None);
        assert_eq!(deck.bottom_card(), None);
    }

    #[test]
    fn display_joins_with_newlines() {
        let cards = vec![card(Rank::Ten, Suit::Clubs), card(Rank::Queen, Suit::Spades)];
        let deck = Deck::from_cards(cards, DeckOptions::standard()).unwrap();
        assert_eq!(deck.to_string(), "10 of Clubs\nQueen of Spades");
        assert_eq!(Deck::from_cards(vec![], DeckOptions::standard()).unwrap().to_string(), "");
    }

    #[test]
    fn sort_ranks_ten_above_king_in_belote() {
        let cards = vec![
            card(Rank::King, Suit::Hearts),
            card(Rank::Seven, Suit::Spades),
            card(Rank::Ten, Suit::Hearts),
        ];
        let mut deck = Deck::from_cards(cards, DeckOptions::belote()).unwrap();
        deck.sort();

        assert_eq!(
            deck.cards(),
            &[
                card(Rank::Seven, Suit::Spades),
                card(Rank::Ten, Suit::Hearts),
                card(Rank::King, Suit::Hearts),
            ]
        );
    }

    #[test_log::test]
    fn deal_takes_variant_sizes_from_top() {
        let mut belote = Deck::new(DeckOptions::belote());
        let first_eight = belote.cards()[..8].to_vec();
        let hand = belote.deal();
        assert_eq!(hand.variant(), Variant::Belote);
        assert_eq!(hand.cards(), first_eight.as_slice());
        assert_eq!(belote.size(), 24);

        let mut sixty_six = Deck::new(DeckOptions::sixty_six());
        assert_eq!(sixty_six.deal().size(), 6);
        assert_eq!(sixty_six.size(), 18);

        let mut standard = Deck::default();
        assert_eq!(standard.deal().size(), 52);
        assert!(standard.is_empty());
    }

    #[test_log::test]
    fn deal_on_short_deck_takes_what_remains() {
        let cards = vec![card(Rank::Ace, Suit::Clubs), card(Rank::King, Suit::Clubs)];
        let mut deck = Deck::from_cards(cards, DeckOptions::belote()).unwrap();

        assert_eq!(deck.deal().size(), 2);
        assert!(deck.is_empty());

        let hand = deck.deal();
        assert!(hand.is_empty());
        assert_eq!(hand.variant(), Variant::Belote);
    }

    #[test]
    fn shuffled_is_deterministic_per_seed() {
        let a = Deck::shuffled(DeckOptions::war(), 7);
        let b = Deck::shuffled(DeckOptions::war(), 7);
        assert_eq!(a, b);
        assert_eq!(a.size(), 52);
    }

    #[test]
    fn iterates_top_first() {
        let deck = Deck::new(DeckOptions::sixty_six());
        let first = (&deck).into_iter().next().copied();
        assert_eq!(first, deck.top_card().copied());
        assert_eq!(deck.iter().count(), 24);
        assert_eq!(deck.into_iter().last(), Some(card(Rank::Nine, Suit::Clubs)));
    }
}
