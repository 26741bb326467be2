//! Card, deck and deal model for War, Belote and Sixty-Six, with optional
//! `no_std` support.
//!
//! A [`Deck`] is built from [`DeckOptions`], optionally shuffled or sorted,
//! and [`Deck::deal`] then moves the variant's hand off the top into a
//! [`Deal`] that answers the variant's questions.
//!
//! # Example
//!
//! ```
//! use cardgames::{Deck, DeckOptions, Hand, Suit};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut deck = Deck::new(DeckOptions::sixty_six());
//!
//! // A fresh deck is sorted, so the first hand is every spade.
//! let hand = deck.deal().into_sixty_six().unwrap();
//! assert_eq!(hand.size(), 6);
//! assert!(hand.forty(Suit::Spades));
//! assert!(!hand.twenty(Suit::Spades));
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! deck.shuffle(&mut rng);
//! assert_eq!(deck.size(), 18);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deal;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deal::{BeloteDeal, Deal, Hand, SixtySixDeal, StandardDeal, WarDeal, belote_priority};
pub use deck::Deck;
pub use error::{CardError, RankOrderError};
pub use options::{DeckOptions, RankOrder, Variant};
