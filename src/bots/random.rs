use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::Action;
use crate::bot::Bot;
use crate::state::{GameStateView, GameStatus};

/// Control bot that samples uniformly from the legal action set. Useful as
/// a floor for benchmarking the real strategies.
pub struct RandomBot<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn select_action(
        &mut self,
        state: &GameStateView,
        legal_actions: &[Action],
    ) -> Option<Action> {
        if matches!(state.status, GameStatus::Finished { .. }) {
            return None;
        }
        legal_actions.choose(&mut self.rng).copied()
    }
}
