use crate::action::Action;
use crate::state::GameStateView;

/// Interface for move-selecting players.
///
/// The return value encodes the three outcomes a strategy can reach:
/// `Some(Action::Play { .. })` names the hand index to play (with the color
/// pick for wilds), `Some(Action::Draw)` means nothing in the hand is legal
/// and the penalty or single card must be drawn, and `None` means no action
/// is possible because the game is already over (defensive for stale calls).
///
/// Selection must be read-only with respect to the game: implementations
/// see a [`GameStateView`] snapshot and the legal action set, never the
/// game itself.
pub trait Bot {
    fn select_action(
        &mut self,
        state: &GameStateView,
        legal_actions: &[Action],
    ) -> Option<Action>;
}
