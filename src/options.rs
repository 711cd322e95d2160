//! Table configuration options.

use crate::card::{DECK_SIZE, JOKERS_PER_DECK};
use crate::deck::SortOrder;
use crate::shuffle::DEFAULT_REPEATS;

/// Configuration options for a card table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardpile::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(2)
///     .with_players(4)
///     .with_jokers(true);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of source decks combined into the draw pile.
    pub decks: u32,
    /// Number of players. Must be at least one.
    pub players: usize,
    /// Whether each source deck adds two jokers.
    pub jokers: bool,
    /// Number of swaps performed by [`Table::shuffle`](crate::Table::shuffle).
    pub shuffle_repeats: u32,
    /// Order used by [`Table::sort_hands_default`](crate::Table::sort_hands_default).
    pub hand_order: SortOrder,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            players: 2,
            jokers: false,
            shuffle_repeats: DEFAULT_REPEATS,
            hand_order: SortOrder::RankDescending,
        }
    }
}

impl TableOptions {
    /// Sets the number of source decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(3);
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u32) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::TableOptions;
    ///
    /// let options = TableOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self
    }

    /// Sets whether jokers are included.
    #[must_use]
    pub const fn with_jokers(mut self, jokers: bool) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of swaps per shuffle.
    #[must_use]
    pub const fn with_shuffle_repeats(mut self, repeats: u32) -> Self {
        self.shuffle_repeats = repeats;
        self
    }

    /// Sets the default hand order.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{SortOrder, TableOptions};
    ///
    /// let options = TableOptions::default().with_hand_order(SortOrder::RankAscending);
    /// assert_eq!(options.hand_order, SortOrder::RankAscending);
    /// ```
    #[must_use]
    pub const fn with_hand_order(mut self, order: SortOrder) -> Self {
        self.hand_order = order;
        self
    }

    /// Returns the number of cards in a freshly built draw pile.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        let per_deck = if self.jokers {
            DECK_SIZE + JOKERS_PER_DECK
        } else {
            DECK_SIZE
        };
        self.decks as usize * per_deck
    }
}
