//! Identifier newtypes for players, cards, and monsters.
//!
//! Ids are string-backed because they cross the presentation boundary as
//! display handles (the UI matches on them directly). Each wrapper keeps
//! the id opaque to the rest of the engine: equality and hashing only,
//! no parsing outside this module.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Process-wide counter giving every created entity a unique suffix.
static NEXT_SUFFIX: AtomicU64 = AtomicU64::new(0);

fn next_suffix() -> u64 {
    NEXT_SUFFIX.fetch_add(1, Ordering::Relaxed)
}

/// Unique identifier for a player.
///
/// Ids embed the player's seating index: `player-<index>-<suffix>`, so a
/// substring match on `player-<index>` always finds the right player.
///
/// ```
/// use dicebound::core::PlayerId;
///
/// let id = PlayerId::for_index(2);
/// assert!(id.as_str().starts_with("player-2"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a fresh id for the player seated at `index`.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self(format!("player-{}-{}", index, next_suffix()))
    }

    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a card.
///
/// Catalog cards get `card-<n>-<suffix>` ids; uniqueness holds across the
/// whole deck, the marketplace, and every player's collection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(String);

impl CardId {
    /// Create a fresh id for the catalog entry numbered `n`.
    #[must_use]
    pub fn for_catalog_entry(n: usize) -> Self {
        Self(format!("card-{}-{}", n, next_suffix()))
    }

    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a monster on the track.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonsterId(String);

impl MonsterId {
    /// Create a fresh id for the monster at 1-based track `position`.
    #[must_use]
    pub fn for_position(position: u8) -> Self {
        Self(format!("monster-{}-{}", position, next_suffix()))
    }

    /// Wrap an existing id string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
