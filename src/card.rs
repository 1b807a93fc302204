use serde::{Deserialize, Serialize};

/// Color tag carried by every card. Only wild-family cards carry `Wild`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    Wild,
}

/// The four concrete colors, in tie-break order.
pub const PLAYABLE_COLORS: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

/// Rotation direction of the turn order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Color (and optional direction) picked by whoever plays a wild-family card.
/// Stamped onto the card exactly once, at play time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct WildChoice {
    pub next_color: Color,
    pub next_direction: Option<Direction>,
}

pub const DECK_SIZE: usize = 108;
pub const HAND_SIZE: usize = 7;
pub const MIN_RANK: u8 = 0;
pub const MAX_RANK: u8 = 9;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 9;

/// Representation of a single card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Card {
    /// Numbered card, rank 0-9.
    Number { color: Color, rank: u8 },
    /// Skips the next player.
    Skip { color: Color },
    /// Flips the rotation direction.
    Reverse { color: Color },
    /// Opens or extends a two-card penalty chain.
    DrawTwo { color: Color },
    /// Wild card; the player picks the next required color.
    Wild { choice: Option<WildChoice> },
    /// Wild card that opens or extends a four-card penalty chain.
    WildDrawFour { choice: Option<WildChoice> },
}

impl Card {
    /// Fresh, unannotated wild card.
    pub fn wild() -> Self {
        Card::Wild { choice: None }
    }

    /// Fresh, unannotated wild draw-four card.
    pub fn wild_draw_four() -> Self {
        Card::WildDrawFour { choice: None }
    }

    /// Intrinsic color tag; `Color::Wild` for the wild family.
    #[inline]
    pub fn color(&self) -> Color {
        match *self {
            Card::Number { color, .. }
            | Card::Skip { color }
            | Card::Reverse { color }
            | Card::DrawTwo { color } => color,
            Card::Wild { .. } | Card::WildDrawFour { .. } => Color::Wild,
        }
    }

    /// Numeric rank when available.
    #[inline]
    pub fn rank(&self) -> Option<u8> {
        match *self {
            Card::Number { rank, .. } => Some(rank),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wild_family(&self) -> bool {
        matches!(self, Card::Wild { .. } | Card::WildDrawFour { .. })
    }

    /// Color stamped at play time, if any.
    #[inline]
    pub fn next_color(&self) -> Option<Color> {
        match *self {
            Card::Wild { choice } | Card::WildDrawFour { choice } => {
                choice.map(|c| c.next_color)
            }
            _ => None,
        }
    }

    /// Direction stamped at play time, if any.
    #[inline]
    pub fn next_direction(&self) -> Option<Direction> {
        match *self {
            Card::Wild { choice } | Card::WildDrawFour { choice } => {
                choice.and_then(|c| c.next_direction)
            }
            _ => None,
        }
    }

    /// Number of penalty cards this card adds to an open chain.
    #[inline]
    pub fn penalty(&self) -> usize {
        match self {
            Card::DrawTwo { .. } => 2,
            Card::WildDrawFour { .. } => 4,
            _ => 0,
        }
    }

    /// Copy of this card with the play-time choice stamped on.
    /// Only meaningful for unannotated wild-family cards.
    pub(crate) fn with_choice(self, choice: WildChoice) -> Card {
        match self {
            Card::Wild { choice: existing } => {
                debug_assert!(existing.is_none(), "wild choice is stamped once per play");
                Card::Wild { choice: Some(choice) }
            }
            Card::WildDrawFour { choice: existing } => {
                debug_assert!(existing.is_none(), "wild choice is stamped once per play");
                Card::WildDrawFour { choice: Some(choice) }
            }
            other => other,
        }
    }

    /// Copy with any play-time annotation removed. Applied when a discarded
    /// wild is reshuffled into the draw pile so it can be stamped again.
    pub(crate) fn cleared(self) -> Card {
        match self {
            Card::Wild { .. } => Card::Wild { choice: None },
            Card::WildDrawFour { .. } => Card::WildDrawFour { choice: None },
            other => other,
        }
    }

    /// Whether this card may be played on `top` under the live table state.
    ///
    /// With an open penalty chain (`pending_draw > 0`) the only legal reply
    /// is a card of the same penalty family as the chain opener; chains
    /// never cross families. With no chain open, wild-family cards are
    /// always legal, numbers match on color or rank, and the remaining
    /// action cards match on color only.
    ///
    /// `hand_colors` is the acting player's held colors; it does not affect
    /// the result under the current ruleset but is part of the contract so a
    /// challenge rule can be added without changing call sites.
    pub fn is_legal(
        &self,
        top: &Card,
        required_color: Color,
        pending_draw: usize,
        _hand_colors: &[Color],
    ) -> bool {
        if pending_draw > 0 {
            return matches!(
                (self, top),
                (Card::DrawTwo { .. }, Card::DrawTwo { .. })
                    | (Card::WildDrawFour { .. }, Card::WildDrawFour { .. })
            );
        }
        match *self {
            Card::Wild { .. } | Card::WildDrawFour { .. } => true,
            Card::Number { color, rank } => color == required_color || top.rank() == Some(rank),
            Card::Skip { color } | Card::Reverse { color } | Card::DrawTwo { color } => {
                color == required_color
            }
        }
    }
}

/// Builds the full 108-card catalogue in deterministic order (unshuffled).
///
/// Per color: one 0, two each of 1-9, two each of Skip/Reverse/DrawTwo;
/// plus four Wild and four WildDrawFour.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for color in PLAYABLE_COLORS {
        deck.push(Card::Number {
            color,
            rank: MIN_RANK,
        });
        for rank in 1..=MAX_RANK {
            deck.push(Card::Number { color, rank });
            deck.push(Card::Number { color, rank });
        }
        for _ in 0..2 {
            deck.push(Card::Skip { color });
            deck.push(Card::Reverse { color });
            deck.push(Card::DrawTwo { color });
        }
    }
    for _ in 0..4 {
        deck.push(Card::wild());
        deck.push(Card::wild_draw_four());
    }
    deck
}

/// The concrete color appearing most often in `cards`, if any.
/// Ties resolve to the earliest color in [`PLAYABLE_COLORS`] order.
pub fn most_held_color(cards: &[Card]) -> Option<Color> {
    let mut counts = [0usize; PLAYABLE_COLORS.len()];
    for card in cards {
        if let Some(slot) = PLAYABLE_COLORS.iter().position(|&c| c == card.color()) {
            counts[slot] += 1;
        }
    }
    let mut best: Option<usize> = None;
    for (slot, &count) in counts.iter().enumerate() {
        if count > 0 && best.map_or(true, |b| count > counts[b]) {
            best = Some(slot);
        }
    }
    best.map(|slot| PLAYABLE_COLORS[slot])
}
