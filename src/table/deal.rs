use tracing::{debug, trace};

use crate::card::Card;
use crate::error::{DealError, DrawError};

use super::Table;

impl Table {
    /// Moves up to `total` cards from the end of the draw pile into hands,
    /// one per player in turn starting with player 0.
    fn deal_round_robin(&mut self, total: usize) -> usize {
        let players = self.hands.len();
        let mut dealt = 0;

        while dealt < total {
            let Ok(card) = self.pile.pop() else {
                break;
            };
            let player = dealt % players;
            trace!(player, rank = card.rank, "card dealt");
            self.hands[player].push(card);
            dealt += 1;
        }

        dealt
    }

    /// Deals `cards_per_player` cards to every player.
    ///
    /// Cards are taken from the end of the draw pile and handed out one at a
    /// time in player order (0, 1, .., n-1, 0, ..). Returns the number of
    /// cards dealt.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NotEnoughCards`] if the draw pile holds fewer than
    /// `cards_per_player * player_count()` cards. No card is moved in that
    /// case.
    pub fn deal(&mut self, cards_per_player: usize) -> Result<usize, DealError> {
        let needed = cards_per_player.saturating_mul(self.hands.len());
        let remaining = self.pile.len();
        if remaining < needed {
            return Err(DealError::NotEnoughCards { needed, remaining });
        }

        let dealt = self.deal_round_robin(needed);
        debug!(cards_per_player, dealt, remaining = self.pile.len(), "cards dealt");
        Ok(dealt)
    }

    /// Deals like [`Table::deal`] but stops early when the draw pile runs out.
    ///
    /// Returns the number of cards actually dealt. When the pile runs out
    /// mid-round, earlier players end up with one more card than later ones.
    pub fn deal_available(&mut self, cards_per_player: usize) -> usize {
        let total = cards_per_player.saturating_mul(self.hands.len());
        let dealt = self.deal_round_robin(total);
        debug!(cards_per_player, dealt, remaining = self.pile.len(), "cards dealt");
        dealt
    }

    /// Draws one card from the end of the draw pile into a player's hand.
    ///
    /// Returns the card drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if `player` is not below the player count or the draw
    /// pile is empty.
    pub fn draw(&mut self, player: usize) -> Result<Card, DrawError> {
        let hand = self
            .hands
            .get_mut(player)
            .ok_or(DrawError::PlayerOutOfRange)?;
        let card = self.pile.pop().map_err(|_| DrawError::NoCards)?;
        hand.push(card);
        debug!(player, rank = card.rank, remaining = self.pile.len(), "card drawn");
        Ok(card)
    }

    /// Returns every card in hands and the discard pile to the end of the
    /// draw pile.
    ///
    /// Hands are emptied in player order, followed by the discard pile. The
    /// draw pile is not reshuffled.
    pub fn collect(&mut self) {
        for hand in &mut self.hands {
            self.pile.append(hand);
        }
        self.pile.append(&mut self.discard);
        debug!(cards = self.pile.len(), "cards collected");
    }
}
