//! Error taxonomy for the rules engine.
//!
//! Precondition violations (`InvalidRoll`, `InvalidPoint`) are raised
//! before any outcome classification and must never be coerced into game
//! states. Lookup misses are *not* errors; they stay `Option`-shaped at
//! the call sites that probe state.

use crate::core::{CardId, PlayerId};
use crate::state::TurnPhase;

/// Errors that can occur while applying the game rules.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RulesError {
    /// A dice sum outside the attainable 2..=12 range for two dice.
    #[error("invalid roll sum {sum}: two dice produce sums 2 through 12")]
    InvalidRoll { sum: u8 },

    /// A point value outside {4, 5, 6, 8, 9, 10}.
    #[error("invalid point {value}: the point must be 4, 5, 6, 8, 9, or 10")]
    InvalidPoint { value: u8 },

    /// Player-name validation failed while building a game.
    #[error("invalid player names: {0}")]
    InvalidPlayerNames(String),

    /// An operation was attempted in the wrong turn phase.
    #[error("wrong phase: expected {expected:?}, game is in {actual:?}")]
    InvalidPhase {
        expected: TurnPhase,
        actual: TurnPhase,
    },

    /// No player with the given id exists in this game.
    #[error("no such player: {0}")]
    PlayerNotFound(PlayerId),

    /// The requested card is not for sale in the marketplace.
    #[error("card {0} is not available in the marketplace")]
    CardNotAvailable(CardId),

    /// The acting player cannot pay the required gold.
    #[error("not enough gold: need {needed}, have {available}")]
    InsufficientGold { needed: u32, available: u32 },

    /// The acting player already holds the maximum permanent cards.
    #[error("permanent card limit reached")]
    PermanentCardLimit,
}

/// Convenience result type for rules operations.
pub type RulesResult<T> = Result<T, RulesError>;
