//! Monsters along the track.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::MonsterId;

/// Kind of monster. `Boss` is terminal: defeating it ends the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterKind {
    Goblin,
    Skeleton,
    Orc,
    Troll,
    Wraith,
    Boss,
}

/// A monster occupying one position on the track.
///
/// `remaining_numbers` starts equal to `numbers_to_hit` and only shrinks;
/// once it empties the monster is defeated for the rest of the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    /// Unique id.
    pub id: MonsterId,
    /// What kind of monster this is.
    pub kind: MonsterKind,
    /// 1-based position along the track.
    pub position: u8,
    /// The point-range numbers assigned at creation. Never empty.
    pub numbers_to_hit: SmallVec<[u8; 6]>,
    /// Numbers not yet hit. Always a subset of `numbers_to_hit`.
    pub remaining_numbers: SmallVec<[u8; 6]>,
    /// Victory points awarded on defeat.
    pub points: u32,
    /// Gold awarded on defeat.
    pub gold_reward: u32,
}

impl Monster {
    /// Has every number been hit?
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.remaining_numbers.is_empty()
    }

    /// Copy of this monster with `number` struck from the remaining set.
    ///
    /// A number not in the set strikes nothing; defeat never reverses.
    #[must_use]
    pub fn with_number_hit(&self, number: u8) -> Self {
        let mut next = self.clone();
        next.remaining_numbers.retain(|&mut n| n != number);
        next
    }
}
