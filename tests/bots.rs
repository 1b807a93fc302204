use rand::SeedableRng;
use rand::rngs::StdRng;

use unobot::action::Action;
use unobot::bot::Bot;
use unobot::bots::{BaselineBot, HumanBot, RandomBot, StrategicBot};
use unobot::card::{Card, Color, Direction, WildChoice};
use unobot::error::GameError;
use unobot::state::{
    GameSettings, GameStateView, GameStatus, PlayerPublicState, PlayerRole,
};
use unobot::GameBuilder;

fn num(color: Color, rank: u8) -> Card {
    Card::Number { color, rank }
}

fn draw_two(color: Color) -> Card {
    Card::DrawTwo { color }
}

fn base_state(
    hand: Vec<Card>,
    top_card: Card,
    required_color: Color,
    pending_draw: usize,
) -> GameStateView {
    let settings = GameSettings::new(2, 2, 1).unwrap();
    GameStateView {
        settings,
        status: GameStatus::InProgress,
        self_player: 0,
        current_player: 0,
        direction: Direction::Clockwise,
        top_card,
        required_color,
        pending_draw,
        draw_pile_count: 40,
        discard_pile_count: 5,
        players: vec![
            PlayerPublicState {
                id: 0,
                role: PlayerRole::StrategicAi,
                hand_size: hand.len(),
                is_current: true,
                has_won: false,
            },
            PlayerPublicState {
                id: 1,
                role: PlayerRole::BaselineAi,
                hand_size: 7,
                is_current: false,
                has_won: false,
            },
        ],
        hand,
    }
}

fn finished_state(hand: Vec<Card>) -> GameStateView {
    let mut state = base_state(hand, num(Color::Red, 5), Color::Red, 0);
    state.status = GameStatus::Finished { winner: 1 };
    state
}

#[test]
fn baseline_plays_the_first_legal_index() {
    let state = base_state(
        vec![num(Color::Blue, 2), num(Color::Red, 1), num(Color::Red, 3)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = BaselineBot::new();
    let chosen = bot.select_action(&state, &[]);
    assert_eq!(
        chosen,
        Some(Action::Play {
            hand_index: 1,
            choice: None
        })
    );
}

#[test]
fn baseline_draws_when_nothing_is_legal() {
    let state = base_state(
        vec![num(Color::Blue, 2), num(Color::Green, 3)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = BaselineBot::new();
    assert_eq!(bot.select_action(&state, &[]), Some(Action::Draw));
}

#[test]
fn baseline_picks_the_majority_color_for_a_wild() {
    let state = base_state(
        vec![
            Card::wild(),
            num(Color::Blue, 2),
            num(Color::Blue, 3),
            num(Color::Red, 1),
        ],
        num(Color::Green, 5),
        Color::Green,
        0,
    );
    let mut bot = BaselineBot::new();
    let chosen = bot.select_action(&state, &[]);
    assert_eq!(
        chosen,
        Some(Action::Play {
            hand_index: 0,
            choice: Some(WildChoice {
                next_color: Color::Blue,
                next_direction: None,
            }),
        })
    );
}

#[test]
fn bots_return_no_action_once_the_game_is_over() {
    let state = finished_state(vec![num(Color::Red, 1)]);
    assert_eq!(BaselineBot::new().select_action(&state, &[]), None);
    assert_eq!(StrategicBot::new().select_action(&state, &[]), None);
    assert_eq!(
        RandomBot::new(StdRng::seed_from_u64(1)).select_action(&state, &[]),
        None
    );
    // The human bot bails out before prompting for input.
    assert_eq!(HumanBot::new("test").select_action(&state, &[]), None);
}

#[test]
fn strategic_prefers_wild_draw_four_over_draw_two() {
    let state = base_state(
        vec![
            draw_two(Color::Red),
            Card::wild_draw_four(),
            num(Color::Red, 1),
        ],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = StrategicBot::new();
    let chosen = bot.select_action(&state, &[]).expect("game in progress");
    assert_eq!(chosen.hand_index(), Some(1));
    match chosen {
        Action::Play {
            choice: Some(choice),
            ..
        } => assert_eq!(choice.next_color, Color::Red),
        other => panic!("expected an annotated wild play, got {other:?}"),
    }
}

#[test]
fn strategic_prefers_draw_two_over_plain_cards() {
    let state = base_state(
        vec![num(Color::Red, 1), draw_two(Color::Red), num(Color::Blue, 2)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = StrategicBot::new();
    let chosen = bot.select_action(&state, &[]).expect("game in progress");
    assert_eq!(chosen.hand_index(), Some(1));
}

#[test]
fn strategic_prefers_the_majority_color() {
    // The blue 5 is legal by rank; blue is held twice against one red, so
    // it wins over the earlier red 9.
    let state = base_state(
        vec![num(Color::Red, 9), num(Color::Blue, 5), num(Color::Blue, 7)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = StrategicBot::new();
    let chosen = bot.select_action(&state, &[]).expect("game in progress");
    assert_eq!(chosen.hand_index(), Some(1));
}

#[test]
fn strategic_falls_back_to_the_first_legal_card() {
    // Blue is the majority color but no blue card is legal.
    let state = base_state(
        vec![num(Color::Red, 1), num(Color::Blue, 2), num(Color::Blue, 3)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let mut bot = StrategicBot::new();
    let chosen = bot.select_action(&state, &[]).expect("game in progress");
    assert_eq!(chosen.hand_index(), Some(0));
}

#[test]
fn strategic_answers_an_open_chain_with_the_matching_family() {
    let state = base_state(
        vec![num(Color::Red, 1), draw_two(Color::Green)],
        draw_two(Color::Blue),
        Color::Blue,
        2,
    );
    let mut bot = StrategicBot::new();
    let chosen = bot.select_action(&state, &[]).expect("game in progress");
    assert_eq!(
        chosen,
        Action::Play {
            hand_index: 1,
            choice: None
        }
    );
}

#[test]
fn strategic_draws_when_a_chain_cannot_be_answered() {
    let state = base_state(
        vec![num(Color::Blue, 2), Card::wild()],
        draw_two(Color::Blue),
        Color::Blue,
        2,
    );
    let mut bot = StrategicBot::new();
    assert_eq!(bot.select_action(&state, &[]), Some(Action::Draw));
}

#[test]
fn strategic_commits_a_single_penalty_card_per_turn() -> Result<(), GameError> {
    // Holding two wild draw-fours, exactly one is played: the resulting
    // penalty is four, not eight.
    let hands = [
        vec![
            Card::wild_draw_four(),
            Card::wild_draw_four(),
            num(Color::Red, 1),
        ],
        vec![num(Color::Blue, 2), num(Color::Blue, 3), num(Color::Blue, 4)],
    ];
    let mut deck: Vec<Card> = Vec::new();
    deck.push(num(Color::Red, 5));
    for hand in hands.iter().rev() {
        deck.extend(hand.iter().rev().copied());
    }
    let mut game = GameBuilder::new(2, 2, 2)?
        .with_hand_size(3)
        .with_deck(deck)
        .build()?;
    let p0 = game.current_player();
    let view = game.state_view(p0)?;
    let legal = game.legal_actions(p0)?;
    let mut bot = StrategicBot::new();
    let action = bot.select_action(&view, &legal).expect("game in progress");
    assert_eq!(action.hand_index(), Some(0));
    game.apply_action(p0, action)?;
    assert_eq!(game.pending_draw(), 4);
    Ok(())
}

#[test]
fn random_bot_selects_a_legal_action() {
    let state = base_state(
        vec![num(Color::Red, 1), num(Color::Red, 2)],
        num(Color::Red, 5),
        Color::Red,
        0,
    );
    let legal = vec![
        Action::Play {
            hand_index: 0,
            choice: None,
        },
        Action::Play {
            hand_index: 1,
            choice: None,
        },
    ];
    let mut bot = RandomBot::new(StdRng::seed_from_u64(42));
    let chosen = bot.select_action(&state, &legal).expect("game in progress");
    assert!(legal.contains(&chosen));
}
