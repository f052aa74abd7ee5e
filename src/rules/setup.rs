//! Game initialization.
//!
//! Builds players, turn state, the marketplace, the monster track, and the
//! full [`GameState`] aggregate. Name validation returns a structured
//! result for UI probing; [`initialize_game`] escalates an invalid result
//! into a [`RulesError`] so a game can never be built from bad input.

use im::Vector;

use crate::cards::{create_shuffled_deck, Card};
use crate::core::config::{
    MARKETPLACE_SIZE, MAX_PLAYERS, MIN_PLAYERS, MONSTER_COUNT, POINT_NUMBERS, STARTING_DAMAGE,
    STARTING_GOLD, STARTING_VICTORY_POINTS,
};
use crate::core::{GameRng, MonsterId, PlayerId};
use crate::rules::error::{RulesError, RulesResult};
use crate::state::{
    GameState, Marketplace, Monster, MonsterKind, Player, TurnPhase, TurnState,
};

/// Create a player seated at `index`.
///
/// Surrounding whitespace is trimmed from the name; the id embeds the
/// seating index (`player-<index>-…`).
#[must_use]
pub fn create_player(name: &str, index: usize) -> Player {
    Player {
        id: PlayerId::for_index(index),
        name: name.trim().to_string(),
        gold: STARTING_GOLD,
        victory_points: STARTING_VICTORY_POINTS,
        damage_count: STARTING_DAMAGE,
        permanent_cards: Vector::new(),
        single_use_cards: Vector::new(),
    }
}

/// Create one player per name, seated in order.
#[must_use]
pub fn create_players<S: AsRef<str>>(names: &[S]) -> Vector<Player> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| create_player(name.as_ref(), index))
        .collect()
}

/// Result of validating a proposed player-name list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameValidation {
    /// Did every rule pass?
    pub is_valid: bool,
    /// Message for the first violated rule, when invalid.
    pub error: Option<String>,
}

impl NameValidation {
    fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a proposed player-name list.
///
/// Rules are checked in order; the first violation's message is returned:
/// player count bounds, then non-empty names, then case-insensitive
/// uniqueness (after trimming).
#[must_use]
pub fn validate_player_names<S: AsRef<str>>(names: &[S]) -> NameValidation {
    if names.len() < MIN_PLAYERS {
        return NameValidation::fail(format!("Minimum {MIN_PLAYERS} players required"));
    }
    if names.len() > MAX_PLAYERS {
        return NameValidation::fail(format!("Maximum {MAX_PLAYERS} players allowed"));
    }
    if names.iter().any(|n| n.as_ref().trim().is_empty()) {
        return NameValidation::fail("Every player must have a name");
    }

    let mut seen = rustc_hash::FxHashSet::default();
    for name in names {
        if !seen.insert(name.as_ref().trim().to_lowercase()) {
            return NameValidation::fail("Player names must be unique");
        }
    }

    NameValidation::ok()
}

/// Turn state for the start of a brand-new turn.
#[must_use]
pub fn create_initial_turn_state(active_player_id: PlayerId) -> TurnState {
    reset_turn_state(active_player_id, false)
}

/// Turn state reset for `active_player_id`, optionally carrying forward
/// the consumed-revive flag.
#[must_use]
pub fn reset_turn_state(active_player_id: PlayerId, preserve_revive: bool) -> TurnState {
    TurnState {
        phase: TurnPhase::MarketplaceRefresh,
        active_player_id,
        point: None,
        turn_damage: 0,
        monster_state_before_turn: None,
        has_used_revive: preserve_revive,
        consecutive_turns: 1,
        roll_count: 0,
    }
}

/// Draw the opening marketplace from the front of `deck`.
///
/// Returns the marketplace and the remaining draw pile; their id sets are
/// disjoint by construction.
#[must_use]
pub fn create_initial_marketplace(deck: Vec<Card>) -> (Marketplace, Vec<Card>) {
    let mut deck = deck;
    let remaining = deck.split_off(MARKETPLACE_SIZE.min(deck.len()));
    (Marketplace::from_cards(deck), remaining)
}

/// How many numbers a monster at the given 1-based position must be hit on.
fn numbers_for_position(position: u8) -> usize {
    match position {
        1..=3 => 1,
        4..=6 => 2,
        _ if (position as usize) < MONSTER_COUNT => 3,
        _ => 4,
    }
}

fn kind_for_position(position: u8) -> MonsterKind {
    if position as usize == MONSTER_COUNT {
        return MonsterKind::Boss;
    }
    match (position - 1) % 5 {
        0 => MonsterKind::Goblin,
        1 => MonsterKind::Skeleton,
        2 => MonsterKind::Orc,
        3 => MonsterKind::Troll,
        _ => MonsterKind::Wraith,
    }
}

/// Populate the monster track.
///
/// Numbers are drawn without replacement from the point numbers; the boss
/// additionally carries 2, so late-game escape rolls land as hits.
#[must_use]
pub fn create_monsters(rng: &mut GameRng) -> Vector<Monster> {
    (1..=MONSTER_COUNT as u8)
        .map(|position| {
            let kind = kind_for_position(position);
            let count = numbers_for_position(position);

            let mut pool = POINT_NUMBERS;
            rng.shuffle(&mut pool);
            let mut numbers: smallvec::SmallVec<[u8; 6]> =
                pool.iter().copied().take(count).collect();
            if kind == MonsterKind::Boss {
                numbers.push(2);
            }
            numbers.sort_unstable();

            Monster {
                id: MonsterId::for_position(position),
                kind,
                position,
                numbers_to_hit: numbers.clone(),
                remaining_numbers: numbers,
                points: count as u32 + u32::from(kind == MonsterKind::Boss),
                gold_reward: 2 * count as u32,
            }
        })
        .collect()
}

/// Next seat in turn order, wrapping around the table.
#[must_use]
pub fn next_player_index(current: usize, player_count: usize) -> usize {
    (current + 1) % player_count
}

/// Initialize a full game from player names, seeding randomness from the
/// operating system.
pub fn initialize_game<S: AsRef<str>>(names: &[S]) -> RulesResult<GameState> {
    let mut rng = GameRng::from_entropy();
    initialize_game_with_rng(names, &mut rng)
}

/// Initialize a full game with a fixed seed. Same seed, same game.
pub fn initialize_game_seeded<S: AsRef<str>>(names: &[S], seed: u64) -> RulesResult<GameState> {
    let mut rng = GameRng::new(seed);
    initialize_game_with_rng(names, &mut rng)
}

fn initialize_game_with_rng<S: AsRef<str>>(
    names: &[S],
    rng: &mut GameRng,
) -> RulesResult<GameState> {
    let validation = validate_player_names(names);
    if let Some(error) = validation.error {
        return Err(RulesError::InvalidPlayerNames(error));
    }

    let players = create_players(names);
    let deck = create_shuffled_deck(rng);
    let (marketplace, remaining_deck) = create_initial_marketplace(deck);
    let monsters = create_monsters(rng);
    let turn_state = create_initial_turn_state(players[0].id.clone());

    Ok(GameState {
        players,
        current_player_index: 0,
        turn_state,
        marketplace,
        card_deck: remaining_deck.into_iter().collect(),
        monsters,
        current_monster_index: 0,
        bets: Vector::new(),
        damage_leader_id: None,
        is_game_over: false,
        winner_id: None,
    })
}
