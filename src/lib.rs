//! A multi-deck, multi-player card pile with optional `no_std` support.
//!
//! The crate provides a [`Table`] type that builds a draw pile from one or
//! more standard decks, shuffles it, deals cards to players, and tracks each
//! player's hand as a [`Deck`].
//!
//! # Example
//!
//! ```
//! use cardpile::{SortOrder, Table, TableOptions};
//!
//! let options = TableOptions::default().with_players(4);
//! let mut table = Table::new(options, 42).unwrap();
//! table.shuffle();
//! table.deal(13).unwrap();
//! table.sort_hands(SortOrder::RankDescending);
//! assert_eq!(table.cards_remaining(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod render;
pub mod shuffle;
pub mod table;

// Re-export main types
pub use card::{Card, DECK_SIZE, JOKERS_PER_DECK, Suit};
pub use deck::{Deck, SortOrder};
pub use error::{DealError, DeckError, DrawError, PlayError, SetupError};
pub use options::TableOptions;
pub use render::{DisplayMode, render};
pub use table::Table;
