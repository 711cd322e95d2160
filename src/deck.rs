//! Ordered card collections.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::{Index, IndexMut};

use rand::Rng;

use crate::card::{ACE, Card, DECK_SIZE, JOKERS_PER_DECK, KING, Suit};
use crate::error::DeckError;
use crate::shuffle;

/// Ordering applied by [`Deck::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    /// Rank descending with Aces highest, then suit descending.
    #[default]
    RankDescending,
    /// Suit descending, then rank descending with Aces highest.
    SuitDescending,
    /// Rank ascending (Aces lowest), then suit ascending.
    RankAscending,
}

impl SortOrder {
    /// Compares two cards under this order.
    #[must_use]
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        match self {
            Self::RankDescending => b
                .ace_high_rank()
                .cmp(&a.ace_high_rank())
                .then(b.suit.cmp(&a.suit)),
            Self::SuitDescending => b
                .suit
                .cmp(&a.suit)
                .then(b.ace_high_rank().cmp(&a.ace_high_rank())),
            Self::RankAscending => a.rank.cmp(&b.rank).then(a.suit.cmp(&b.suit)),
        }
    }
}

/// An ordered collection of cards.
///
/// The last card is the "top" of the deck: [`Deck::pop`] takes from there
/// and [`Deck::push`] adds there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a new empty deck.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates an empty deck with room for `capacity` cards.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
        }
    }

    /// Creates one unshuffled source deck.
    ///
    /// Cards are ordered Club..Spade, Ace..King within each suit, followed by
    /// two jokers when `jokers` is set.
    #[must_use]
    pub fn standard(jokers: bool) -> Self {
        let mut deck = Self::with_capacity(DECK_SIZE + JOKERS_PER_DECK);
        deck.extend_standard(jokers);
        deck
    }

    pub(crate) fn extend_standard(&mut self, jokers: bool) {
        for suit in Suit::ALL {
            for rank in ACE..=KING {
                self.cards.push(Card::new(suit, rank));
            }
        }
        if jokers {
            for _ in 0..JOKERS_PER_DECK {
                self.cards.push(Card::joker());
            }
        }
    }

    /// Adds a card to the end of the deck.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the last card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if the deck has no cards.
    pub fn pop(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Removes and returns the first card equal to `card`.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if no card matches. The deck is left
    /// unchanged.
    pub fn remove_card(&mut self, card: Card) -> Result<Card, DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(DeckError::CardNotFound)?;
        Ok(self.cards.remove(index))
    }

    /// Removes and returns the card at `index`, shifting later cards down.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Card, DeckError> {
        if index >= self.cards.len() {
            return Err(DeckError::IndexOutOfRange);
        }
        Ok(self.cards.remove(index))
    }

    /// Sorts the deck in place.
    pub fn sort(&mut self, order: SortOrder) {
        self.cards.sort_unstable_by(|a, b| order.compare(a, b));
    }

    /// Returns a new deck holding every card of `suit`, in their current order.
    ///
    /// Jokers are stored as diamonds and therefore belong to the diamond subset.
    #[must_use]
    pub fn subset_by_suit(&self, suit: Suit) -> Self {
        self.cards.iter().filter(|c| c.suit == suit).copied().collect()
    }

    /// Applies the transposition shuffle to this deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R, repeats: u32) {
        shuffle::transpose(&mut self.cards, rng, repeats);
    }

    /// Returns whether the deck contains a card equal to `card`.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Returns the last card, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the cards in order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns an iterator over the cards.
    pub fn iter(&self) -> core::slice::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub(crate) fn append(&mut self, other: &mut Self) {
        self.cards.append(&mut other.cards);
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl IndexMut<usize> for Deck {
    fn index_mut(&mut self, index: usize) -> &mut Card {
        &mut self.cards[index]
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
