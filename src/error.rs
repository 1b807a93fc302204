use thiserror::Error;

use crate::action::PlayerId;

/// Errors that can occur when manipulating the game state.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("player id {0} is not part of this game")]
    InvalidPlayer(PlayerId),
    #[error("not the specified player's turn")]
    NotPlayersTurn,
    #[error("invalid move: {0}")]
    InvalidAction(#[from] InvalidAction),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Details of rejected moves. None of these mutate any game state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidAction {
    #[error("hand index {0} is out of range")]
    HandIndex(usize),
    #[error("card is not legal on the current top card")]
    IllegalCard,
    #[error("playing a wild card requires a concrete color choice")]
    MissingColorChoice,
    #[error("color choice supplied for a non-wild card")]
    UnexpectedColorChoice,
}
