use std::fmt::Write;

use crate::action::Action;
use crate::card::{Card, Color, Direction};
use crate::state::{GameStateView, GameStatus, PlayerRole};

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_hand_indices: bool,
    pub show_pile_counts: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_hand_indices: true,
            show_pile_counts: true,
        }
    }
}

/// Fine tune textual action descriptions.
#[derive(Clone, Copy, Debug)]
pub struct DescribeOptions {
    pub include_card_details: bool,
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            include_card_details: true,
        }
    }
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let status = match state.status {
        GameStatus::InProgress => String::from("In progress"),
        GameStatus::Finished { winner } => format!("Finished (winner: Player {winner})"),
    };
    let _ = writeln!(out, "Game status: {status}");
    let _ = writeln!(
        out,
        "Current player: {}{}",
        state.current_player,
        if state.current_player == state.self_player {
            " (You)"
        } else {
            ""
        }
    );
    let _ = writeln!(out, "Direction: {}", direction_name(state.direction));
    let _ = writeln!(
        out,
        "Top card: {}  |  Required color: {}",
        format_card(state.top_card),
        color_name(state.required_color)
    );
    if state.pending_draw > 0 {
        let _ = writeln!(out, "Open penalty chain: draw {}", state.pending_draw);
    }
    if options.show_pile_counts {
        let _ = writeln!(
            out,
            "Draw pile: {}  |  Discard pile: {}",
            state.draw_pile_count, state.discard_pile_count
        );
    }
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let label_you = if player.id == state.self_player {
            " (You)"
        } else {
            ""
        };
        let current_tag = if player.is_current { " <- current" } else { "" };
        let _ = writeln!(
            out,
            "  Player {}{} [{}] - {} card(s){}",
            player.id,
            label_you,
            role_name(player.role),
            player.hand_size,
            current_tag
        );
    }
    if state.hand.is_empty() {
        let _ = writeln!(out, "Hand: (empty)");
    } else if options.show_hand_indices {
        let mut entries = Vec::with_capacity(state.hand.len());
        for (index, card) in state.hand.iter().enumerate() {
            entries.push(format!("{}:{}", index, format_card(*card)));
        }
        let _ = writeln!(out, "Hand: {}", entries.join("  "));
    } else {
        let entries: Vec<String> = state.hand.iter().map(|card| format_card(*card)).collect();
        let _ = writeln!(out, "Hand: {}", entries.join("  "));
    }
    out
}

pub fn describe_action(state: &GameStateView, action: &Action) -> String {
    describe_action_with_options(state, action, DescribeOptions::default())
}

pub fn describe_action_with_options(
    state: &GameStateView,
    action: &Action,
    options: DescribeOptions,
) -> String {
    match action {
        Action::Play { hand_index, choice } => {
            let card_desc = if options.include_card_details {
                state
                    .hand
                    .get(*hand_index)
                    .map(|card| format!(" {}", format_card(*card)))
                    .unwrap_or_default()
            } else {
                String::new()
            };
            match choice {
                Some(choice) => format!(
                    "Play hand[{hand_index}]{card_desc} (color -> {})",
                    color_name(choice.next_color)
                ),
                None => format!("Play hand[{hand_index}]{card_desc}"),
            }
        }
        Action::Draw => {
            if state.pending_draw > 0 {
                format!("Draw {} penalty card(s)", state.pending_draw)
            } else {
                String::from("Draw a card")
            }
        }
    }
}

fn format_card(card: Card) -> String {
    match card {
        Card::Number { color, rank } => format!("{}{rank}", color_letter(color)),
        Card::Skip { color } => format!("{}S", color_letter(color)),
        Card::Reverse { color } => format!("{}R", color_letter(color)),
        Card::DrawTwo { color } => format!("{}+2", color_letter(color)),
        Card::Wild { choice } => match choice {
            Some(choice) => format!("W({})", color_letter(choice.next_color)),
            None => String::from("W"),
        },
        Card::WildDrawFour { choice } => match choice {
            Some(choice) => format!("W+4({})", color_letter(choice.next_color)),
            None => String::from("W+4"),
        },
    }
}

fn color_letter(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Yellow => 'Y',
        Color::Wild => 'W',
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Blue => "Blue",
        Color::Green => "Green",
        Color::Yellow => "Yellow",
        Color::Wild => "Wild",
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Clockwise => "clockwise",
        Direction::CounterClockwise => "counter-clockwise",
    }
}

fn role_name(role: PlayerRole) -> &'static str {
    match role {
        PlayerRole::Human => "human",
        PlayerRole::BaselineAi => "baseline ai",
        PlayerRole::StrategicAi => "strategic ai",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameBuilder;

    #[test]
    fn render_and_describe_include_expected_phrases() {
        let game = GameBuilder::new(2, 0, 0)
            .expect("builder")
            .build()
            .expect("game");
        let current = game.current_player();
        let view = game.state_view(current).expect("state view");
        let text = render_state(&view);
        assert!(text.contains("Player 0 (You)"));
        assert!(text.contains("Hand:"));
        assert!(text.contains("Required color:"));
        let actions = game.legal_actions(current).expect("actions available");
        let desc = describe_action(&view, &actions[0]);
        assert!(desc.starts_with("Play") || desc.starts_with("Draw"));
        // A draw with no open chain reads as a single-card draw.
        let draw_desc = describe_action(&view, &Action::Draw);
        assert_eq!(draw_desc, "Draw a card");
    }
}
