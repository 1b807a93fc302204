use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::action::{Action, PlayerId};
use crate::card::{Card, Color, Direction, PLAYABLE_COLORS, WildChoice, full_deck};
use crate::deck::Deck;
use crate::error::{GameError, InvalidAction};
use crate::player::Player;
use crate::state::{GameSettings, GameStateView, GameStatus, PlayerPublicState, PlayerRole};

const DEFAULT_SEED: u64 = 0x5EED_CA4D_5EED_CA4D;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub ai_players: usize,
    pub strategic_ai_players: usize,
    pub seed: u64,
    pub hand_size: Option<usize>,
}

impl GameConfig {
    pub fn new(
        num_players: usize,
        ai_players: usize,
        strategic_ai_players: usize,
        seed: u64,
    ) -> Result<Self, GameError> {
        GameSettings::new(num_players, ai_players, strategic_ai_players)?;
        Ok(Self {
            num_players,
            ai_players,
            strategic_ai_players,
            seed,
            hand_size: None,
        })
    }
}

/// Builder that enables deterministic deck injection for tests and
/// reproducible simulations.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
}

impl GameBuilder {
    pub fn new(
        num_players: usize,
        ai_players: usize,
        strategic_ai_players: usize,
    ) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, ai_players, strategic_ai_players, DEFAULT_SEED)?,
            deck: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Use an explicit deck instead of a shuffled full catalogue. Cards are
    /// dealt by popping from the end, so the final `hand_size` entries form
    /// seat 0's hand.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Override the number of cards dealt to each hand (default 7).
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.config.hand_size = Some(hand_size);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Core rules engine: roster, rotation, required color, penalty chain, and
/// the owned draw/discard piles. One instance per table; single-threaded
/// mutation through [`Game::apply_action`].
pub struct Game {
    settings: GameSettings,
    status: GameStatus,
    current: usize,
    direction: Direction,
    required_color: Color,
    pending_draw: usize,
    players: Vec<Player>,
    deck: Deck,
}

impl Game {
    pub fn builder(
        num_players: usize,
        ai_players: usize,
        strategic_ai_players: usize,
    ) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players, ai_players, strategic_ai_players)
    }

    /// Ready-to-play game with a shuffled catalogue and the default seed.
    pub fn new(
        num_players: usize,
        ai_players: usize,
        strategic_ai_players: usize,
    ) -> Result<Self, GameError> {
        Self::builder(num_players, ai_players, strategic_ai_players)?.build()
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck } = builder;
        let mut settings = GameSettings::new(
            config.num_players,
            config.ai_players,
            config.strategic_ai_players,
        )?;
        if let Some(hand_size) = config.hand_size {
            if hand_size == 0 {
                return Err(GameError::InvalidConfiguration("hand size must be positive"));
            }
            settings.hand_size = hand_size;
        }
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut cards = if let Some(deck) = deck {
            deck
        } else {
            let mut cards = full_deck();
            cards.shuffle(&mut rng);
            cards
        };

        if cards.len() < settings.num_players * settings.hand_size + 1 {
            return Err(GameError::InvalidConfiguration(
                "deck does not contain enough cards to deal hands",
            ));
        }

        let mut players = Vec::with_capacity(settings.num_players);
        for seat in 0..settings.num_players {
            let mut hand = Vec::with_capacity(settings.hand_size);
            for _ in 0..settings.hand_size {
                hand.push(cards.pop().ok_or(GameError::InvalidConfiguration(
                    "deck exhausted while dealing hands",
                ))?);
            }
            players.push(Player::new(seat, role_for_seat(&settings, seat), hand));
        }

        let mut deck = Deck::new(cards, rng);
        let seed_card = deck.flip_seed_card()?;

        Ok(Game {
            settings,
            status: GameStatus::InProgress,
            current: 0,
            direction: Direction::Clockwise,
            required_color: seed_card.color(),
            pending_draw: 0,
            players,
            deck,
        })
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::InProgress => None,
        }
    }

    /// Id of the player whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current].id()
    }

    /// Seat index of the current player within the roster.
    pub fn current_seat(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The color a plain card must match; set by wild plays, otherwise the
    /// top card's own color.
    pub fn required_color(&self) -> Color {
        self.required_color
    }

    pub fn pending_draw(&self) -> usize {
        self.pending_draw
    }

    pub fn top_card(&self) -> Card {
        *self
            .deck
            .top_card()
            .expect("discard pile is seeded at game start")
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id() == id)
    }

    pub fn draw_pile_count(&self) -> usize {
        self.deck.draw_pile_count()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.deck.discard_pile_count()
    }

    /// Cards in circulation across piles and hands. Constant for the whole
    /// lifetime of a game.
    pub fn total_cards(&self) -> usize {
        self.deck.draw_pile_count()
            + self.deck.discard_pile_count()
            + self.players.iter().map(Player::hand_size).sum::<usize>()
    }

    fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|player| player.id() == id)
    }

    /// Read-only snapshot from one player's perspective.
    pub fn state_view(&self, perspective: PlayerId) -> Result<GameStateView, GameError> {
        let seat = self
            .seat_of(perspective)
            .ok_or(GameError::InvalidPlayer(perspective))?;
        let players = self
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| PlayerPublicState {
                id: player.id(),
                role: player.role(),
                hand_size: player.hand_size(),
                is_current: idx == self.current,
                has_won: player.has_won(),
            })
            .collect();
        Ok(GameStateView {
            settings: self.settings,
            status: self.status,
            self_player: perspective,
            current_player: self.current_player(),
            direction: self.direction,
            top_card: self.top_card(),
            required_color: self.required_color,
            pending_draw: self.pending_draw,
            draw_pile_count: self.deck.draw_pile_count(),
            discard_pile_count: self.deck.discard_pile_count(),
            players,
            hand: self.players[seat].hand().to_vec(),
        })
    }

    /// Every move the player may make right now. Wild-family cards appear
    /// once per concrete color choice; [`Action::Draw`] is offered exactly
    /// when nothing in the hand is playable.
    pub fn legal_actions(&self, player: PlayerId) -> Result<Vec<Action>, GameError> {
        if self.is_finished() {
            return Ok(Vec::new());
        }
        let seat = self
            .seat_of(player)
            .ok_or(GameError::InvalidPlayer(player))?;
        if seat != self.current {
            return Err(GameError::NotPlayersTurn);
        }
        let top = self.top_card();
        let hand_colors = self.players[seat].card_colors();
        let mut actions = Vec::new();
        for (hand_index, card) in self.players[seat].hand().iter().enumerate() {
            if !card.is_legal(&top, self.required_color, self.pending_draw, &hand_colors) {
                continue;
            }
            if card.is_wild_family() {
                for color in PLAYABLE_COLORS {
                    actions.push(Action::Play {
                        hand_index,
                        choice: Some(WildChoice {
                            next_color: color,
                            next_direction: None,
                        }),
                    });
                }
            } else {
                actions.push(Action::Play {
                    hand_index,
                    choice: None,
                });
            }
        }
        if actions.is_empty() {
            actions.push(Action::Draw);
        }
        Ok(actions)
    }

    /// Applies one move for `player`. Rejections never mutate any state.
    pub fn apply_action(&mut self, player: PlayerId, action: Action) -> Result<(), GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat = self
            .seat_of(player)
            .ok_or(GameError::InvalidPlayer(player))?;
        if seat != self.current {
            return Err(GameError::NotPlayersTurn);
        }
        match action {
            Action::Play { hand_index, choice } => self.play_card(hand_index, choice),
            Action::Draw => {
                self.draw_cards();
                Ok(())
            }
        }
    }

    fn play_card(
        &mut self,
        hand_index: usize,
        choice: Option<WildChoice>,
    ) -> Result<(), GameError> {
        let card = *self.players[self.current]
            .card(hand_index)
            .ok_or(InvalidAction::HandIndex(hand_index))?;
        let hand_colors = self.players[self.current].card_colors();
        let top = self.top_card();
        if !card.is_legal(&top, self.required_color, self.pending_draw, &hand_colors) {
            return Err(InvalidAction::IllegalCard.into());
        }
        let played = if card.is_wild_family() {
            let choice = choice.ok_or(InvalidAction::MissingColorChoice)?;
            if choice.next_color == Color::Wild {
                return Err(InvalidAction::MissingColorChoice.into());
            }
            card.with_choice(choice)
        } else {
            if choice.is_some() {
                return Err(InvalidAction::UnexpectedColorChoice.into());
            }
            card
        };

        self.players[self.current].take_card(hand_index);
        self.deck.discard(played);
        self.required_color = played.next_color().unwrap_or_else(|| played.color());

        let mut advance = 1;
        match played {
            Card::Skip { .. } => advance = 2,
            Card::Reverse { .. } => {
                self.direction = self.direction.reversed();
                // With two seats a reverse skips the opponent: the turn
                // comes straight back to the acting player.
                if self.settings.num_players == 2 {
                    advance = 2;
                }
            }
            Card::DrawTwo { .. } | Card::WildDrawFour { .. } => {
                self.pending_draw += played.penalty();
            }
            Card::Number { .. } | Card::Wild { .. } => {}
        }

        if self.players[self.current].has_won() {
            self.status = GameStatus::Finished {
                winner: self.players[self.current].id(),
            };
            return Ok(());
        }
        self.advance_turn(advance);
        Ok(())
    }

    /// Resolves the pending penalty against the current player, or a single
    /// voluntary draw when no chain is open. Either way the turn passes on.
    fn draw_cards(&mut self) {
        let want = if self.pending_draw == 0 {
            1
        } else {
            self.pending_draw
        };
        let drawn = self.deck.draw(want);
        self.players[self.current].add_cards(drawn);
        self.pending_draw = 0;
        self.advance_turn(1);
    }

    fn advance_turn(&mut self, steps: usize) {
        let seats = self.players.len();
        for _ in 0..steps {
            self.current = match self.direction {
                Direction::Clockwise => (self.current + 1) % seats,
                Direction::CounterClockwise => (self.current + seats - 1) % seats,
            };
        }
    }
}

fn role_for_seat(settings: &GameSettings, seat: usize) -> PlayerRole {
    let humans = settings.num_players - settings.ai_players;
    let baseline = settings.ai_players - settings.strategic_ai_players;
    if seat < humans {
        PlayerRole::Human
    } else if seat < humans + baseline {
        PlayerRole::BaselineAi
    } else {
        PlayerRole::StrategicAi
    }
}
