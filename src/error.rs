//! Error types for deck and table operations.

use thiserror::Error;

/// Errors that can occur when taking cards out of a [`Deck`](crate::Deck).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards.
    #[error("the deck is empty")]
    Empty,
    /// No card in the deck matches.
    #[error("card not found in deck")]
    CardNotFound,
    /// Position is past the end of the deck.
    #[error("card index out of range")]
    IndexOutOfRange,
}

/// Errors that can occur when creating a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SetupError {
    /// The player count is zero.
    #[error("a table needs at least one player")]
    NoPlayers,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Not enough cards in the draw pile.
    #[error("not enough cards in the draw pile: {needed} needed, {remaining} remaining")]
    NotEnoughCards {
        /// Cards the deal would have moved.
        needed: usize,
        /// Cards left in the draw pile.
        remaining: usize,
    },
}

/// Errors that can occur when a player draws a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DrawError {
    /// Player index is not below the player count.
    #[error("player index out of range")]
    PlayerOutOfRange,
    /// No cards left in the draw pile.
    #[error("no cards left in the draw pile")]
    NoCards,
}

/// Errors that can occur when a player plays a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Player index is not below the player count.
    #[error("player index out of range")]
    PlayerOutOfRange,
    /// The hand does not hold the card.
    #[error("card not found in hand")]
    CardNotFound,
    /// Position is past the end of the hand.
    #[error("card index out of range")]
    IndexOutOfRange,
}

impl From<DeckError> for PlayError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::CardNotFound | DeckError::Empty => Self::CardNotFound,
            DeckError::IndexOutOfRange => Self::IndexOutOfRange,
        }
    }
}
