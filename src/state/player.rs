//! Player state.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::config::MAX_PERMANENT_CARDS;
use crate::core::PlayerId;

/// A player's complete state within a game.
///
/// Owned exclusively by the [`GameState`](crate::state::GameState)
/// aggregate and mutated only through engine operations; the `im` vectors
/// make those copies O(1).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Unique id (embeds the seating index).
    pub id: PlayerId,
    /// Display name, surrounding whitespace trimmed.
    pub name: String,
    /// Current gold.
    pub gold: u32,
    /// Victory points earned so far.
    pub victory_points: u32,
    /// Damage dealt across the game; drives elimination/revive logic
    /// outside this engine.
    pub damage_count: u32,
    /// Permanent cards in play, at most [`MAX_PERMANENT_CARDS`].
    pub permanent_cards: Vector<Card>,
    /// Single-use cards held, consumed on use.
    pub single_use_cards: Vector<Card>,
}

impl Player {
    /// Can this player pay `cost` gold?
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.gold >= cost
    }

    /// Does this player have room for another permanent card?
    #[must_use]
    pub fn can_hold_permanent(&self) -> bool {
        self.permanent_cards.len() < MAX_PERMANENT_CARDS
    }
}
