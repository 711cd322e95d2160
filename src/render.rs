//! Text rendering for cards, decks, and tables.
//!
//! Rendering is stateless: the display mode is passed per call rather than
//! stored on the deck.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Display, Formatter, Write};

use crate::card::{Card, Suit};
use crate::deck::{Deck, SortOrder};
use crate::table::Table;

/// Separator placed between cards.
pub const SEPARATOR: &str = "  ";

/// How [`render`] lays out a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayMode {
    /// Cards in their current order.
    #[default]
    Unsorted,
    /// Cards sorted by rank, Aces highest.
    ByRank,
    /// One line per suit, spades first, each line sorted by rank.
    BySuit,
    /// Rank labels only, in their current order.
    RankLabels,
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            f.write_str(self.rank_label())
        } else {
            write!(f, "{} {:>2}", self.suit_glyph(), self.rank_label())
        }
    }
}

impl Display for Deck {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_joined(f, self.iter())
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.pile(), f)
    }
}

fn write_joined<'a, W, I>(out: &mut W, cards: I) -> fmt::Result
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Card>,
{
    for (i, card) in cards.into_iter().enumerate() {
        if i > 0 {
            out.write_str(SEPARATOR)?;
        }
        write!(out, "{card}")?;
    }
    Ok(())
}

/// Renders a deck in the given mode.
///
/// The deck itself is never reordered; sorted modes work on a copy.
///
/// # Example
///
/// ```
/// use cardpile::{Card, Deck, DisplayMode, Suit, render};
///
/// let deck = Deck::from(vec![Card::new(Suit::Heart, 10), Card::new(Suit::Spade, 1)]);
/// assert_eq!(render(&deck, DisplayMode::ByRank), "\u{2660}  A  \u{2665} 10");
/// ```
#[must_use]
pub fn render(deck: &Deck, mode: DisplayMode) -> String {
    let mut out = String::new();
    // Writing into a String never fails.
    let _ = write_mode(&mut out, deck, mode);
    out
}

fn write_mode(out: &mut String, deck: &Deck, mode: DisplayMode) -> fmt::Result {
    match mode {
        DisplayMode::Unsorted => write_joined(out, deck),
        DisplayMode::ByRank => {
            let mut sorted = deck.clone();
            sorted.sort(SortOrder::RankDescending);
            write_joined(out, &sorted)
        }
        DisplayMode::BySuit => {
            let groups: Vec<Deck> = Suit::ALL
                .iter()
                .rev()
                .map(|&suit| {
                    let mut group = deck.subset_by_suit(suit);
                    group.sort(SortOrder::RankDescending);
                    group
                })
                .filter(|group| !group.is_empty())
                .collect();
            for (i, group) in groups.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                write_joined(out, group)?;
            }
            Ok(())
        }
        DisplayMode::RankLabels => {
            for (i, card) in deck.iter().enumerate() {
                if i > 0 {
                    out.push_str(SEPARATOR);
                }
                out.push_str(card.rank_label());
            }
            Ok(())
        }
    }
}
