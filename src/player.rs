use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color};
use crate::state::PlayerRole;

/// A seat at the table: stable identity, controlling role, and the hand.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    role: PlayerRole,
    hand: Vec<Card>,
}

impl Player {
    pub(crate) fn new(id: PlayerId, role: PlayerRole, hand: Vec<Card>) -> Self {
        Self { id, role, hand }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }

    /// A player wins the moment their hand empties.
    pub fn has_won(&self) -> bool {
        self.hand.is_empty()
    }

    /// Colors currently held, as passed to the legality predicate.
    pub fn card_colors(&self) -> Vec<Color> {
        self.hand.iter().map(|card| card.color()).collect()
    }

    /// Removes and returns the card at `index`. Callers validate the index.
    pub(crate) fn take_card(&mut self, index: usize) -> Card {
        self.hand.remove(index)
    }

    pub(crate) fn add_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
    }
}
