//! The rules core: roll evaluation, game setup, and state mutation.
//!
//! - `evaluate`: classifies point-phase rolls into tagged outcomes
//! - `setup`: builds players, the marketplace, the monster track, and the
//!   initial game state
//! - `mutate`: applies outcomes and purchases, producing the next state
//! - `error`: the error taxonomy shared by all of the above

pub mod error;
pub mod evaluate;
pub mod mutate;
pub mod setup;

pub use error::{RulesError, RulesResult};
pub use evaluate::{describe, evaluate_point_phase_roll, RollOutcome};
pub use mutate::{
    accept_escape, advance_to_next_player, apply_point_phase_outcome, begin_turn, purchase_card,
    refresh_marketplace, resolve_come_out_roll,
};
pub use setup::{
    create_initial_marketplace, create_initial_turn_state, create_monsters, create_player,
    create_players, initialize_game, initialize_game_seeded, next_player_index, reset_turn_state,
    validate_player_names, NameValidation,
};
