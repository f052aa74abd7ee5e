//! Dice probability and classification utilities.
//!
//! Pure combinatorics over six-sided dice plus the craps vocabulary the
//! rest of the engine speaks: naturals, craps, points, and monster hits.
//! Only [`roll_dice`] touches randomness; everything else is a total pure
//! function over its documented domain.
//!
//! ```
//! use dicebound::dice;
//!
//! assert!(dice::is_natural(7));
//! assert_eq!(dice::combinations(7), 6);
//! assert_eq!(dice::possible_sums(2), (2..=12).collect::<Vec<u16>>());
//! ```

use smallvec::SmallVec;

use crate::core::config::POINT_NUMBERS;
use crate::core::GameRng;

/// Number of ways to roll each total with two six-sided dice, indexed by sum.
const WAYS: [u32; 13] = [0, 0, 1, 2, 3, 4, 5, 6, 5, 4, 3, 2, 1];

/// Total ordered (die1, die2) pairs for two six-sided dice.
const TOTAL_PAIRS: u32 = 36;

/// Roll `count` independent six-sided dice.
pub fn roll_dice(rng: &mut GameRng, count: usize) -> SmallVec<[u8; 2]> {
    (0..count).map(|_| rng.roll_die()).collect()
}

/// Roll the standard pair of dice.
pub fn roll_two(rng: &mut GameRng) -> SmallVec<[u8; 2]> {
    roll_dice(rng, 2)
}

/// Sum a sequence of die values. An empty sequence sums to 0.
#[must_use]
pub fn sum_dice(values: &[u8]) -> u8 {
    values.iter().sum()
}

/// A natural: 7 or 11.
#[must_use]
pub fn is_natural(sum: u8) -> bool {
    sum == 7 || sum == 11
}

/// Craps: 2, 3, or 12.
#[must_use]
pub fn is_craps(sum: u8) -> bool {
    matches!(sum, 2 | 3 | 12)
}

/// A point number: 4, 5, 6, 8, 9, or 10.
#[must_use]
pub fn is_point(sum: u8) -> bool {
    POINT_NUMBERS.contains(&sum)
}

/// Crapping out: rolling a 7 during the point phase.
#[must_use]
pub fn is_crap_out(sum: u8) -> bool {
    sum == 7
}

/// The escape trigger: a roll of 2.
#[must_use]
pub fn is_escape_roll(sum: u8) -> bool {
    sum == 2
}

/// Did the roll repeat the established point?
#[must_use]
pub fn is_point_hit(sum: u8, point: u8) -> bool {
    sum == point
}

/// Did the roll land on one of the monster's numbers?
///
/// An empty number set can never be hit.
#[must_use]
pub fn is_monster_hit(sum: u8, monster_numbers: &[u8]) -> bool {
    monster_numbers.contains(&sum)
}

/// Every attainable sum for `dice_count` six-sided dice, ascending.
///
/// `possible_sums(1)` is `[1..=6]`, `possible_sums(2)` is `[2..=12]`.
/// Zero dice attain no sums. Sums are widened to `u16` so the full
/// `u8` count range stays representable.
#[must_use]
pub fn possible_sums(dice_count: u8) -> Vec<u16> {
    if dice_count == 0 {
        return Vec::new();
    }
    let lo = u16::from(dice_count);
    let hi = u16::from(dice_count) * 6;
    (lo..=hi).collect()
}

/// Number of ordered (die1, die2) pairs producing `sum` with two dice.
///
/// Zero outside 2..=12; the counts across the valid range total 36.
#[must_use]
pub fn combinations(sum: u8) -> u32 {
    WAYS.get(sum as usize).copied().unwrap_or(0)
}

/// Probability of rolling `sum` with two six-sided dice.
#[must_use]
pub fn probability(sum: u8) -> f64 {
    f64::from(combinations(sum)) / f64::from(TOTAL_PAIRS)
}
