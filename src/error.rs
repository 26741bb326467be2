//! Error types for card and deck operations.

use thiserror::Error;

use crate::card::Rank;

/// Errors that can occur when grading or validating cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// The rank is not part of the deck's rank order.
    #[error("rank {0} is not part of the rank order")]
    UnknownRank(Rank),
}

/// Errors that can occur when building a rank order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankOrderError {
    /// No ranks were given.
    #[error("rank order is empty")]
    Empty,
    /// A rank appears more than once.
    #[error("rank {0} appears more than once")]
    DuplicateRank(Rank),
}
