//! Fixed game configuration.
//!
//! The game's tunable numbers live here as named constants. They are
//! referenced by name throughout the engine and never change mid-game;
//! the presentation layer reads the same constants for display.

/// Sides on every die in the game.
pub const DICE_SIDES: u8 = 6;

/// Number of card slots offered by the marketplace.
pub const MARKETPLACE_SIZE: usize = 5;

/// Gold cost to discard and redraw the marketplace offering.
pub const MARKETPLACE_REFRESH_COST: u32 = 2;

/// Gold each player starts with.
pub const STARTING_GOLD: u32 = 3;

/// Victory points each player starts with.
pub const STARTING_VICTORY_POINTS: u32 = 0;

/// Damage count each player starts with.
pub const STARTING_DAMAGE: u32 = 0;

/// Minimum players required to start a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum players allowed in a game.
pub const MAX_PLAYERS: usize = 4;

/// Length of the monster track. The final position is always the boss.
pub const MONSTER_COUNT: usize = 10;

/// Maximum permanent cards a player may hold at once.
pub const MAX_PERMANENT_CARDS: usize = 6;

/// The craps point numbers: sums that establish or repeat a point.
pub const POINT_NUMBERS: [u8; 6] = [4, 5, 6, 8, 9, 10];
