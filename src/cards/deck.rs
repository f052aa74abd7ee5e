//! Deck building.

use crate::core::GameRng;

use super::catalog::{catalog_cards, Card};

/// Build the draw pile: every catalog card exactly once, uniformly shuffled.
#[must_use]
pub fn create_shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut cards = catalog_cards();
    rng.shuffle(&mut cards);
    cards
}
