//! # dicebound
//!
//! Rules engine for a turn-based dice-and-card combat game: craps point
//! mechanics driving RPG monster encounters, with a shared card
//! marketplace economy.
//!
//! ## Design Principles
//!
//! 1. **State values, not objects**: every operation takes a `GameState`
//!    and returns a new one. `im` collections make the copies O(1), and
//!    rollback snapshots stay valid references to prior states.
//!
//! 2. **One randomness seam**: dice rolls and deck shuffles go through
//!    `GameRng`. Seed it for deterministic tests, or feed pre-rolled sums
//!    straight into the evaluator.
//!
//! 3. **Closed sum types at the rules boundary**: roll outcomes, card
//!    variants, turn phases, and errors are all closed enums, so invalid
//!    field combinations don't exist.
//!
//! ## Modules
//!
//! - `core`: identifiers, RNG, fixed configuration constants
//! - `dice`: probability and classification over six-sided dice
//! - `cards`: the fixed catalog and shuffled draw pile
//! - `state`: players, monsters, marketplace, turn, and game aggregates
//! - `rules`: roll evaluation, game setup, and state mutation

pub mod cards;
pub mod core;
pub mod dice;
pub mod rules;
pub mod state;

// Re-export commonly used types
pub use crate::core::{CardId, GameRng, MonsterId, PlayerId};

pub use crate::cards::{catalog_cards, create_shuffled_deck, Card, CardEffect};

pub use crate::state::{
    Bet, GameState, Marketplace, Monster, MonsterKind, Player, TurnPhase, TurnState,
};

pub use crate::rules::{
    accept_escape, advance_to_next_player, apply_point_phase_outcome, begin_turn, describe,
    evaluate_point_phase_roll, initialize_game, initialize_game_seeded, purchase_card,
    refresh_marketplace, resolve_come_out_roll, validate_player_names, NameValidation,
    RollOutcome, RulesError, RulesResult,
};
