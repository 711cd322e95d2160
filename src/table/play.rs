use tracing::debug;

use crate::card::Card;
use crate::deck::SortOrder;
use crate::error::PlayError;

use super::Table;

impl Table {
    /// Plays a card from a player's hand onto the discard pile.
    ///
    /// The first card in the hand equal to `card` is removed; with multiple
    /// source decks the hand may hold several equal cards.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not below the player count or the hand
    /// does not hold the card. The hand is unchanged on error.
    pub fn play(&mut self, player: usize, card: Card) -> Result<Card, PlayError> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(PlayError::PlayerOutOfRange)?;
        let played = hand.remove_card(card)?;
        self.discard.push(played);
        debug!(player, rank = played.rank, left = hand.len(), "card played");
        Ok(played)
    }

    /// Plays the card at position `index` of a player's hand.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not below the player count or `index`
    /// is past the end of the hand.
    pub fn play_at(&mut self, player: usize, index: usize) -> Result<Card, PlayError> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(PlayError::PlayerOutOfRange)?;
        let played = hand.remove_at(index)?;
        self.discard.push(played);
        debug!(player, index, rank = played.rank, left = hand.len(), "card played");
        Ok(played)
    }

    /// Sorts every hand with the given order.
    pub fn sort_hands(&mut self, order: SortOrder) {
        for hand in &mut self.hands {
            hand.sort(order);
        }
    }

    /// Sorts every hand with the order from [`TableOptions::hand_order`].
    ///
    /// [`TableOptions::hand_order`]: crate::TableOptions::hand_order
    pub fn sort_hands_default(&mut self) {
        self.sort_hands(self.options.hand_order);
    }
}
