use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Color, WildChoice, most_held_color};
use crate::state::{GameStateView, GameStatus};

/// Baseline strategy: scan the hand in index order and play the first legal
/// card found. No lookahead. When the first legal card is a wild, the color
/// pick is the color the hand holds most of (Red when no colored card
/// remains).
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BaselineBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for BaselineBot {
    fn select_action(
        &mut self,
        state: &GameStateView,
        _legal_actions: &[Action],
    ) -> Option<Action> {
        if matches!(state.status, GameStatus::Finished { .. }) {
            return None;
        }
        let hand_colors: Vec<Color> = state.hand.iter().map(|card| card.color()).collect();
        for (hand_index, card) in state.hand.iter().enumerate() {
            if card.is_legal(
                &state.top_card,
                state.required_color,
                state.pending_draw,
                &hand_colors,
            ) {
                let choice = card.is_wild_family().then(|| WildChoice {
                    next_color: most_held_color(&state.hand).unwrap_or(Color::Red),
                    next_direction: None,
                });
                return Some(Action::Play { hand_index, choice });
            }
        }
        Some(Action::Draw)
    }
}
