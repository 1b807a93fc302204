use serde::{Deserialize, Serialize};

use crate::card::WildChoice;

/// Stable identifier of a player within a game. Callers must not assume it
/// equals the player's seat index.
pub type PlayerId = usize;

/// Move available to a player during their turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Play the card at `hand_index`. Wild-family cards must carry the
    /// color (and optionally direction) choice; colored cards must not.
    Play {
        hand_index: usize,
        choice: Option<WildChoice>,
    },
    /// Take the pending penalty cards (or a single card when no chain is
    /// open) and forfeit the turn.
    Draw,
}

impl Action {
    /// Returns the hand index if the action plays a card.
    pub fn hand_index(&self) -> Option<usize> {
        match self {
            Action::Play { hand_index, .. } => Some(*hand_index),
            Action::Draw => None,
        }
    }
}
