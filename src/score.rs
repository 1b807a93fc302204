//! Scoring utilities for simulations.
//!
//! Current scoring rule (winner-only):
//!   points = sum of the card values left in every opponent's hand,
//!   where a Number counts its rank, Skip/Reverse/DrawTwo count 20,
//!   and the wild family counts 50.
//! Non-winning players receive 0 points.
//! Aborted games award no points.

use crate::action::PlayerId;
use crate::card::Card;
use crate::game::Game;

/// Point value of a single card held at game end.
pub fn card_points(card: &Card) -> usize {
    match *card {
        Card::Number { rank, .. } => rank as usize,
        Card::Skip { .. } | Card::Reverse { .. } | Card::DrawTwo { .. } => 20,
        Card::Wild { .. } | Card::WildDrawFour { .. } => 50,
    }
}

/// Compute the winner's points for a finished game.
///
/// Assumes `winner` is a valid player id. If the game was aborted before a
/// win, caller should skip calling this.
pub fn winner_points(game: &Game, winner: PlayerId) -> usize {
    game.players()
        .iter()
        .filter(|player| player.id() != winner)
        .flat_map(|player| player.hand().iter())
        .map(card_points)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;

    #[test]
    fn test_card_point_values() {
        assert_eq!(
            card_points(&Card::Number {
                color: Color::Red,
                rank: 7
            }),
            7
        );
        assert_eq!(card_points(&Card::Skip { color: Color::Blue }), 20);
        assert_eq!(
            card_points(&Card::Reverse {
                color: Color::Green
            }),
            20
        );
        assert_eq!(
            card_points(&Card::DrawTwo {
                color: Color::Yellow
            }),
            20
        );
        assert_eq!(card_points(&Card::wild()), 50);
        assert_eq!(card_points(&Card::wild_draw_four()), 50);
    }

    #[test]
    fn test_winner_points_sums_opponent_hands() {
        // Cards are dealt by popping from the end: seat 0 takes the last
        // entry, seat 1 the one before it. The wild stays in the draw pile;
        // the green 4 seeds the discard.
        let deck = vec![
            Card::wild(),
            Card::Number {
                color: Color::Green,
                rank: 4,
            },
            Card::DrawTwo { color: Color::Blue }, // seat 1's hand
            Card::Number {
                color: Color::Red,
                rank: 1,
            }, // seat 0's hand
        ];
        let game = crate::game::GameBuilder::new(2, 0, 0)
            .expect("builder")
            .with_hand_size(1)
            .with_deck(deck)
            .build()
            .expect("game");
        assert_eq!(winner_points(&game, 0), 20);
        assert_eq!(winner_points(&game, 1), 1);
    }
}
