//! Card table and session state.

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::error::SetupError;
use crate::options::TableOptions;

mod deal;
mod play;

/// A card table that owns the draw pile, one hand per player, and the discard
/// pile.
///
/// Every card starts in the draw pile. Dealing and drawing move cards from the
/// end of the pile into hands, playing moves them from a hand to the discard
/// pile, and [`Table::collect`] returns everything to the pile. The sum of all
/// three always equals [`Table::total_cards`].
#[derive(Debug, Clone)]
pub struct Table {
    /// Options the table was built with.
    options: TableOptions,
    /// Shared draw pile; the last card is drawn first.
    pile: Deck,
    /// Player hands, indexed by player number.
    hands: Vec<Deck>,
    /// Cards played out of hands.
    discard: Deck,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Table {
    /// Creates a new table with the given seed.
    ///
    /// The draw pile holds `options.decks` unshuffled source decks; call
    /// [`Table::shuffle`] before dealing.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpile::{Table, TableOptions};
    ///
    /// let table = Table::new(TableOptions::default().with_players(4), 42).unwrap();
    /// assert_eq!(table.cards_remaining(), 52);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::NoPlayers`] if `options.players` is zero.
    pub fn new(options: TableOptions, seed: u64) -> Result<Self, SetupError> {
        if options.players == 0 {
            return Err(SetupError::NoPlayers);
        }

        let pile = Self::create_pile(&options);
        debug!(
            decks = options.decks,
            players = options.players,
            jokers = options.jokers,
            cards = pile.len(),
            "table created"
        );

        Ok(Self {
            options,
            pile,
            hands: (0..options.players).map(|_| Deck::new()).collect(),
            discard: Deck::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Builds the unshuffled draw pile from the configured source decks.
    fn create_pile(options: &TableOptions) -> Deck {
        let mut pile = Deck::with_capacity(options.total_cards());
        for _ in 0..options.decks {
            pile.extend_standard(options.jokers);
        }
        pile
    }

    /// Replaces the random number generator with one seeded from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Shuffles the draw pile using the configured number of swaps.
    pub fn shuffle(&mut self) {
        self.shuffle_with(self.options.shuffle_repeats);
    }

    /// Shuffles the draw pile with an explicit number of swaps.
    pub fn shuffle_with(&mut self, repeats: u32) {
        self.pile.shuffle(&mut self.rng, repeats);
        debug!(repeats, cards = self.pile.len(), "draw pile shuffled");
    }

    /// Returns the options the table was built with.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.len()
    }

    /// Returns the draw pile.
    #[must_use]
    pub const fn pile(&self) -> &Deck {
        &self.pile
    }

    /// Returns the number of cards remaining in the draw pile.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.pile.len()
    }

    /// Returns the hand of the specified player.
    ///
    /// Returns `None` if `player` is not below the player count.
    #[must_use]
    pub fn hand(&self, player: usize) -> Option<&Deck> {
        self.hands.get(player)
    }

    /// Returns the hand of the specified player for in-place edits such as
    /// sorting or reordering.
    ///
    /// Returns `None` if `player` is not below the player count.
    pub fn hand_mut(&mut self, player: usize) -> Option<&mut Deck> {
        self.hands.get_mut(player)
    }

    /// Returns all hands in player order.
    #[must_use]
    pub fn hands(&self) -> &[Deck] {
        &self.hands
    }

    /// Returns the cards played so far.
    #[must_use]
    pub const fn discard(&self) -> &Deck {
        &self.discard
    }

    /// Returns the number of cards the table was built with.
    #[must_use]
    pub const fn total_cards(&self) -> usize {
        self.options.total_cards()
    }
}
