//! UNO-style rules engine with pluggable bot strategies and simulation
//! drivers.

pub mod action;
pub mod bot;
pub mod bots;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod player;
pub mod score;
pub mod state;
pub mod visualize;

pub use crate::action::{Action, PlayerId};
pub use crate::bot::Bot;
pub use crate::bots::{
    BaselineBot, HumanBot, RandomBot, StrategicBot, create_bot_from_spec, label_for_spec,
};
pub use crate::card::{Card, Color, Direction, WildChoice};
pub use crate::deck::Deck;
pub use crate::error::{GameError, InvalidAction};
pub use crate::game::{Game, GameBuilder, GameConfig};
pub use crate::player::Player;
pub use crate::score::{card_points, winner_points};
pub use crate::state::{
    GameSettings, GameStateView, GameStatus, PlayerPublicState, PlayerRole,
};
pub use crate::visualize::{
    DescribeOptions, VisualOptions, describe_action, render_state,
};
