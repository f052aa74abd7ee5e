//! Game state value types.
//!
//! ## Key Types
//!
//! - `Player`: gold, victory points, damage, card collections
//! - `Monster` / `MonsterKind`: the track's occupants and their numbers
//! - `Marketplace`: the shared card offering (empty slot = sold)
//! - `TurnPhase` / `TurnState`: the per-turn state machine
//! - `GameState`: the aggregate every engine operation consumes and
//!   produces
//!
//! All of these are immutable value types; mutation happens by building
//! the next state in `rules::mutate`.

pub mod game;
pub mod marketplace;
pub mod monster;
pub mod player;
pub mod turn;

pub use game::{Bet, GameState};
pub use marketplace::Marketplace;
pub use monster::{Monster, MonsterKind};
pub use player::Player;
pub use turn::{TurnPhase, TurnState};
