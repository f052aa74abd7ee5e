//! Turn lifecycle: phases and per-turn bookkeeping.
//!
//! Every turn walks the same closed phase machine:
//!
//! ```text
//! MarketplaceRefresh → ComeOut → PointPhase ⟲ → TurnEnd → MarketplaceRefresh
//!                                                       ↘ GameOver
//! ```
//!
//! Transitions are validated at the mutation boundary rather than inferred
//! from other fields; `GameOver` is terminal.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::state::Monster;

/// Phase of the active player's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Entry phase of every turn: buy, refresh, or pass on the marketplace.
    MarketplaceRefresh,
    /// First roll of the turn; establishes the point or ends the turn.
    ComeOut,
    /// Rolling against the established point and the monster's numbers.
    PointPhase,
    /// The turn has resolved; control passes or the game ends.
    TurnEnd,
    /// Terminal: reachable only once the game is over.
    GameOver,
}

impl TurnPhase {
    /// Is `from → to` an allowed phase transition?
    #[must_use]
    pub fn can_transition(from: TurnPhase, to: TurnPhase) -> bool {
        use TurnPhase::*;
        matches!(
            (from, to),
            (MarketplaceRefresh, ComeOut)
                | (ComeOut, PointPhase)
                | (ComeOut, TurnEnd)
                | (PointPhase, PointPhase)
                | (PointPhase, TurnEnd)
                | (TurnEnd, MarketplaceRefresh)
                | (TurnEnd, GameOver)
        )
    }
}

/// Per-turn state, reset whenever the turn passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase.
    pub phase: TurnPhase,
    /// Whose turn it is.
    pub active_player_id: PlayerId,
    /// The established point, if any. One of 4/5/6/8/9/10 when set.
    pub point: Option<u8>,
    /// Damage dealt this turn; discarded on a crap-out.
    pub turn_damage: u32,
    /// Snapshot of the current monster taken at the start of the turn.
    /// A crap-out restores it.
    pub monster_state_before_turn: Option<Monster>,
    /// Has the active player consumed their revive this game?
    pub has_used_revive: bool,
    /// How many turns in a row the active player has taken. Starts at 1.
    pub consecutive_turns: u32,
    /// Rolls taken this turn.
    pub roll_count: u32,
}
