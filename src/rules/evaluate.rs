//! Point-phase roll evaluation.
//!
//! During the point phase every roll resolves to exactly one outcome,
//! decided by a strict priority order. The ambiguous cases are the whole
//! point of the ordering:
//!
//! 1. A 7 craps out, even if 7 somehow sits in the monster's numbers.
//! 2. Repeating the point wins over hitting a monster number of the same
//!    value.
//! 3. A monster number wins over the escape trigger, even when that
//!    number is 2.
//! 4. A 2 outside the monster's numbers offers an escape.
//! 5. Everything else is a miss.
//!
//! ```
//! use dicebound::rules::{evaluate_point_phase_roll, RollOutcome};
//!
//! let outcome = evaluate_point_phase_roll(8, 8, &[8, 9, 10]).unwrap();
//! assert_eq!(outcome, RollOutcome::PointHit { point_value: 8 });
//! ```

use serde::{Deserialize, Serialize};

use crate::dice;
use crate::rules::error::{RulesError, RulesResult};

/// Outcome of a single point-phase roll.
///
/// Closed sum type; each case carries only the fields that case uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollOutcome {
    /// Rolled a 7: the turn ends and the monster recovers.
    CrapOut,
    /// Repeated the established point: the turn ends favorably.
    PointHit { point_value: u8 },
    /// Landed on one of the monster's remaining numbers.
    Hit { hit_number: u8 },
    /// Rolled a 2 that hits nothing: the player may choose to escape.
    EscapeOffered,
    /// Nothing happened.
    Miss { sum: u8 },
}

impl RollOutcome {
    /// Does this outcome end the active player's turn?
    ///
    /// Only crapping out and hitting the point do; an offered escape ends
    /// the turn only if the player takes it.
    #[must_use]
    pub fn is_turn_ending(self) -> bool {
        matches!(self, RollOutcome::CrapOut | RollOutcome::PointHit { .. })
    }

    /// Does this outcome benefit the roller?
    #[must_use]
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            RollOutcome::PointHit { .. } | RollOutcome::Hit { .. }
        )
    }
}

/// Classify a point-phase roll.
///
/// `sum` must be an attainable two-dice sum (2..=12) and `point` must be
/// an established point (4/5/6/8/9/10); both are checked before any
/// classification, per the precondition contract.
pub fn evaluate_point_phase_roll(
    sum: u8,
    point: u8,
    remaining_numbers: &[u8],
) -> RulesResult<RollOutcome> {
    if !(2..=12).contains(&sum) {
        return Err(RulesError::InvalidRoll { sum });
    }
    if !dice::is_point(point) {
        return Err(RulesError::InvalidPoint { value: point });
    }

    let outcome = if dice::is_crap_out(sum) {
        RollOutcome::CrapOut
    } else if dice::is_point_hit(sum, point) {
        RollOutcome::PointHit { point_value: point }
    } else if dice::is_monster_hit(sum, remaining_numbers) {
        RollOutcome::Hit { hit_number: sum }
    } else if dice::is_escape_roll(sum) {
        RollOutcome::EscapeOffered
    } else {
        RollOutcome::Miss { sum }
    };

    Ok(outcome)
}

/// Plain-text description of a point-phase outcome.
#[must_use]
pub fn describe(outcome: RollOutcome) -> String {
    match outcome {
        RollOutcome::CrapOut => {
            "Rolled a seven and crapped out! The turn is over and the monster recovers."
                .to_string()
        }
        RollOutcome::PointHit { point_value } => {
            format!("Hit the point {point_value}! The turn ends in your favor.")
        }
        RollOutcome::Hit { hit_number } => {
            format!("A hit! {hit_number} is struck from the monster's numbers.")
        }
        RollOutcome::EscapeOffered => {
            "Snake eyes. You may escape the monster now, or keep rolling.".to_string()
        }
        RollOutcome::Miss { sum } => format!("Rolled {sum}. Nothing happens."),
    }
}
