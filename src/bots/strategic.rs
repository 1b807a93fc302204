use crate::action::Action;
use crate::bot::Bot;
use crate::card::{Card, Color, WildChoice, most_held_color};
use crate::state::{GameStateView, GameStatus};

/// Heuristic strategy that presses penalty chains and hoards color
/// flexibility.
///
/// Priority order over the legal cards, each tier resolved to the lowest
/// hand index:
/// 1. A WildDrawFour, to open or extend the heaviest penalty chain.
/// 2. A DrawTwo.
/// 3. A card whose color matches the color the hand holds most of, keeping
///    future turns flexible.
/// 4. The first legal card (the baseline behavior).
///
/// Exactly one card is committed per turn; a second held penalty card is
/// never auto-chained. Wild color picks follow the most-held color, ties
/// resolving in declaration order of the four colors, Red when no colored
/// card remains.
pub struct StrategicBot;

impl StrategicBot {
    pub fn new() -> Self {
        Self
    }

    fn wild_color(hand: &[Card]) -> Color {
        most_held_color(hand).unwrap_or(Color::Red)
    }
}

impl Default for StrategicBot {
    fn default() -> Self {
        Self::new()
    }
}

impl Bot for StrategicBot {
    fn select_action(
        &mut self,
        state: &GameStateView,
        _legal_actions: &[Action],
    ) -> Option<Action> {
        if matches!(state.status, GameStatus::Finished { .. }) {
            return None;
        }
        let hand_colors: Vec<Color> = state.hand.iter().map(|card| card.color()).collect();
        let legal: Vec<usize> = state
            .hand
            .iter()
            .enumerate()
            .filter(|(_, card)| {
                card.is_legal(
                    &state.top_card,
                    state.required_color,
                    state.pending_draw,
                    &hand_colors,
                )
            })
            .map(|(index, _)| index)
            .collect();
        if legal.is_empty() {
            return Some(Action::Draw);
        }

        let pick = legal
            .iter()
            .copied()
            .find(|&index| matches!(state.hand[index], Card::WildDrawFour { .. }))
            .or_else(|| {
                legal
                    .iter()
                    .copied()
                    .find(|&index| matches!(state.hand[index], Card::DrawTwo { .. }))
            })
            .or_else(|| {
                let favorite = most_held_color(&state.hand)?;
                legal
                    .iter()
                    .copied()
                    .find(|&index| state.hand[index].color() == favorite)
            })
            .unwrap_or(legal[0]);

        let card = state.hand[pick];
        let choice = card.is_wild_family().then(|| WildChoice {
            next_color: Self::wild_color(&state.hand),
            next_direction: None,
        });
        Some(Action::Play {
            hand_index: pick,
            choice,
        })
    }
}
