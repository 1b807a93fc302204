use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Card, Color, Direction, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
use crate::error::GameError;

/// Global constants for a running game.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub ai_players: usize,
    pub strategic_ai_players: usize,
    pub hand_size: usize,
}

impl GameSettings {
    pub fn new(
        num_players: usize,
        ai_players: usize,
        strategic_ai_players: usize,
    ) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 9",
            ));
        }
        if ai_players > num_players {
            return Err(GameError::InvalidConfiguration(
                "ai players cannot exceed total players",
            ));
        }
        if strategic_ai_players > ai_players {
            return Err(GameError::InvalidConfiguration(
                "strategic ai players cannot exceed ai players",
            ));
        }
        Ok(Self {
            num_players,
            ai_players,
            strategic_ai_players,
            hand_size: HAND_SIZE,
        })
    }
}

/// Who controls a seat.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerRole {
    Human,
    BaselineAi,
    StrategicAi,
}

/// Status of the entire game. `Finished` is absorbing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished { winner: PlayerId },
}

/// Public portion of a player's state that all opponents may observe.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub role: PlayerRole,
    pub hand_size: usize,
    pub is_current: bool,
    pub has_won: bool,
}

/// Read-only game snapshot tailored for bots. Evaluating a decision against
/// a view never mutates the game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub status: GameStatus,
    pub self_player: PlayerId,
    pub current_player: PlayerId,
    pub direction: Direction,
    pub top_card: Card,
    pub required_color: Color,
    pub pending_draw: usize,
    pub draw_pile_count: usize,
    pub discard_pile_count: usize,
    pub players: Vec<PlayerPublicState>,
    pub hand: Vec<Card>,
}
