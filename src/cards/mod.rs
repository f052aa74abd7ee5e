//! Card system: the fixed catalog and the shuffled draw pile.
//!
//! ## Key Types
//!
//! - `Card`: closed sum over the three card variants the game knows
//!   (permanent, single-use, point)
//! - `CardEffect`: the effects permanent and single-use cards carry
//!
//! Ownership of a card flows deck → marketplace → player on purchase;
//! cards themselves never change after being stamped from the catalog.

pub mod catalog;
pub mod deck;

pub use catalog::{catalog_cards, Card, CardEffect};
pub use deck::create_shuffled_deck;
