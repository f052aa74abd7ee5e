//! The game-state aggregate.
//!
//! `GameState` owns everything: players, the turn, the marketplace, the
//! draw pile, and the monster track. Engine operations never mutate a
//! state in place; each produces a new value, which the `im` collections
//! make cheap. That keeps `monster_state_before_turn`-style snapshots
//! valid references to genuinely prior states.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::PlayerId;
use crate::state::{Marketplace, Monster, Player, TurnState};

/// A wager placed on a dice sum.
///
/// Bets exist in the data model from game start but no betting operations
/// belong to this engine layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Who placed the bet.
    pub player_id: PlayerId,
    /// Gold wagered.
    pub amount: u32,
    /// The dice sum wagered on.
    pub target_sum: u8,
}

/// Complete state of one game session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seating order, fixed at creation.
    pub players: Vector<Player>,
    /// Index into `players` of the active player.
    pub current_player_index: usize,
    /// The active player's turn.
    pub turn_state: TurnState,
    /// The shared card offering.
    pub marketplace: Marketplace,
    /// Remaining draw pile.
    pub card_deck: Vector<Card>,
    /// The monster track, fixed length, fixed at creation.
    pub monsters: Vector<Monster>,
    /// Index into `monsters` of the monster being fought.
    pub current_monster_index: usize,
    /// Outstanding bets. Empty at game start.
    pub bets: Vector<Bet>,
    /// Player currently leading on damage dealt, if anyone has dealt any.
    pub damage_leader_id: Option<PlayerId>,
    /// Has the game ended?
    pub is_game_over: bool,
    /// The winner, set when the game ends.
    pub winner_id: Option<PlayerId>,
}

impl GameState {
    /// The player whose turn it is.
    #[must_use]
    pub fn active_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// The monster currently being fought, if the track is not cleared.
    #[must_use]
    pub fn current_monster(&self) -> Option<&Monster> {
        self.monsters.get(self.current_monster_index)
    }

    /// Linear lookup by player id. `None` when no player matches.
    #[must_use]
    pub fn find_player_by_id(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Index of the player with `id`, or `None` when absent.
    #[must_use]
    pub fn find_player_index_by_id(&self, id: &PlayerId) -> Option<usize> {
        self.players.iter().position(|p| &p.id == id)
    }
}
