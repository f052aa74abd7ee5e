//! Core engine types: identifiers, RNG, and fixed configuration.
//!
//! Everything above this module treats randomness and identity as opaque:
//! dice rolls and shuffles go through [`GameRng`], and entities are named
//! by the id newtypes defined here.

pub mod config;
pub mod ids;
pub mod rng;

pub use ids::{CardId, MonsterId, PlayerId};
pub use rng::GameRng;
