use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::error::GameError;

/// Draw pile and discard pile of a single game, plus the RNG used for
/// reshuffles. Drawing from an undersized pile is an expected condition and
/// never errors: the discard pile (minus its top card) is reshuffled in, and
/// if the combined pool is still short the draw is capped at what exists.
#[derive(Debug)]
pub struct Deck {
    draw_pile: Vec<Card>,
    discard_pile: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    pub(crate) fn new(draw_pile: Vec<Card>, rng: StdRng) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
            rng,
        }
    }

    /// Flips the opening card onto the discard pile and returns it.
    /// Non-number cards are rotated to the bottom of the draw pile so the
    /// game always opens on a concrete color with no action effect to
    /// resolve.
    pub(crate) fn flip_seed_card(&mut self) -> Result<Card, GameError> {
        for _ in 0..self.draw_pile.len() {
            match self.draw_pile.pop() {
                Some(card @ Card::Number { .. }) => {
                    self.discard_pile.push(card);
                    return Ok(card);
                }
                Some(other) => self.draw_pile.insert(0, other),
                None => break,
            }
        }
        Err(GameError::InvalidConfiguration(
            "deck holds no number card to seed the discard pile",
        ))
    }

    /// Removes up to `n` cards from the draw pile, reshuffling the discard
    /// pile (except its top card) in when the pile runs dry.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);
        for _ in 0..n {
            if self.draw_pile.is_empty() {
                self.replenish();
            }
            match self.draw_pile.pop() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Appends `card`, making it the new top card.
    pub(crate) fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// The card legality checks read. `None` only before the seed flip.
    pub fn top_card(&self) -> Option<&Card> {
        self.discard_pile.last()
    }

    pub fn draw_pile_count(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn discard_pile_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Moves every discard except the top back into the draw pile, freshly
    /// shuffled. Wild annotations are cleared so a recycled wild can be
    /// stamped again on its next play.
    fn replenish(&mut self) {
        if self.discard_pile.len() <= 1 {
            return;
        }
        let top = self.discard_pile.pop();
        let mut recycled: Vec<Card> = self.discard_pile.drain(..).map(Card::cleared).collect();
        if let Some(top) = top {
            self.discard_pile.push(top);
        }
        recycled.shuffle(&mut self.rng);
        self.draw_pile.append(&mut recycled);
    }
}
