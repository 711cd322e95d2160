//! Card types and label tables.

/// Card suit.
///
/// Suits are ordered Club < Diamond < Heart < Spade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Suit {
    /// Clubs.
    #[default]
    Club,
    /// Diamonds.
    Diamond,
    /// Hearts.
    Heart,
    /// Spades.
    Spade,
}

impl Suit {
    /// All suits in ascending order.
    pub const ALL: [Self; 4] = [Self::Club, Self::Diamond, Self::Heart, Self::Spade];

    /// Returns the UTF-8 glyph for the suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        SUIT_GLYPHS[self as usize]
    }
}

const SUIT_GLYPHS: [&str; 4] = ["\u{2663}", "\u{2666}", "\u{2665}", "\u{2660}"];

const RANK_LABELS: [&str; 15] = [
    "", "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "JOKER",
];

/// Rank of the "no card" placeholder.
pub const NO_RANK: u8 = 0;
/// Rank of an Ace.
pub const ACE: u8 = 1;
/// Rank of a Jack.
pub const JACK: u8 = 11;
/// Rank of a Queen.
pub const QUEEN: u8 = 12;
/// Rank of a King.
pub const KING: u8 = 13;
/// Rank of a Joker.
pub const JOKER: u8 = 14;

/// Number of cards per deck, jokers excluded.
pub const DECK_SIZE: usize = 52;
/// Number of jokers added per deck when jokers are enabled.
pub const JOKERS_PER_DECK: usize = 2;

/// A playing card.
///
/// Equality compares suit and rank only, so two jokers are always equal.
/// The default card is the "no card" placeholder (Club, rank 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Card {
    /// The suit of the card. Jokers are stored as [`Suit::Diamond`].
    pub suit: Suit,
    /// The rank of the card (0 = none, 1 = Ace, 11..=13 = J/Q/K, 14 = Joker).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 0..=14
    /// are accepted but render with an empty label.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Creates a joker.
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Diamond, JOKER)
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        self.rank == JOKER
    }

    /// Returns whether this card is the "no card" placeholder.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.rank == NO_RANK
    }

    /// Returns the suit glyph.
    #[must_use]
    pub const fn suit_glyph(&self) -> &'static str {
        self.suit.glyph()
    }

    /// Returns the rank label (`"A"`, `"2"`..`"10"`, `"J"`, `"Q"`, `"K"`,
    /// `"JOKER"`, or `""` for the placeholder).
    #[must_use]
    pub fn rank_label(&self) -> &'static str {
        RANK_LABELS.get(self.rank as usize).copied().unwrap_or("")
    }

    /// Rank used by the descending orders, where an Ace outranks everything.
    pub(crate) const fn ace_high_rank(&self) -> u8 {
        if self.rank == ACE { JOKER + 1 } else { self.rank }
    }
}
