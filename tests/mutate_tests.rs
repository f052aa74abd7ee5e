//! State mutator tests: turn lifecycle, combat resolution, and the
//! marketplace economy.

use dicebound::cards::{catalog_cards, Card};
use dicebound::core::config::{MARKETPLACE_REFRESH_COST, MARKETPLACE_SIZE};
use dicebound::core::{CardId, GameRng, MonsterId, PlayerId};
use dicebound::rules::{
    accept_escape, apply_point_phase_outcome, begin_turn, evaluate_point_phase_roll,
    purchase_card, refresh_marketplace, resolve_come_out_roll, RollOutcome, RulesError,
};
use dicebound::rules::setup::initialize_game_seeded;
use dicebound::state::{GameState, Monster, MonsterKind, TurnPhase};
use rustc_hash::FxHashSet;
use smallvec::smallvec;

fn fresh_game() -> GameState {
    initialize_game_seeded(&["Alice", "Bob"], 42).unwrap()
}

/// Walk a fresh game into the point phase with the given point.
///
/// Picks a point that differs from every number on the first monster so
/// point/monster interactions stay unambiguous in the test.
fn into_point_phase(state: &GameState) -> (GameState, u8) {
    let monster_numbers: Vec<u8> = state.monsters[0].remaining_numbers.to_vec();
    let point = [4u8, 5, 6, 8, 9, 10]
        .into_iter()
        .find(|p| !monster_numbers.contains(p))
        .expect("some point number must miss the monster");

    let state = begin_turn(state).unwrap();
    let state = resolve_come_out_roll(&state, point).unwrap();
    assert_eq!(state.turn_state.phase, TurnPhase::PointPhase);
    (state, point)
}

// === Turn lifecycle ===

#[test]
fn test_full_turn_reaches_point_phase() {
    let game = fresh_game();
    let (state, point) = into_point_phase(&game);

    assert_eq!(state.turn_state.point, Some(point));
    assert_eq!(state.turn_state.roll_count, 1);
    assert!(state.turn_state.monster_state_before_turn.is_some());
}

#[test]
fn test_states_are_snapshots_not_aliases() {
    let game = fresh_game();
    let after = begin_turn(&game).unwrap();

    // The original is still at the marketplace with no snapshot taken.
    assert_eq!(game.turn_state.phase, TurnPhase::MarketplaceRefresh);
    assert!(game.turn_state.monster_state_before_turn.is_none());
    assert_eq!(after.turn_state.phase, TurnPhase::ComeOut);
}

#[test]
fn test_point_phase_ops_rejected_outside_point_phase() {
    let game = fresh_game();
    let err = apply_point_phase_outcome(&game, RollOutcome::Miss { sum: 3 }).unwrap_err();
    assert!(matches!(
        err,
        RulesError::InvalidPhase {
            expected: TurnPhase::PointPhase,
            ..
        }
    ));

    let err = accept_escape(&game).unwrap_err();
    assert!(matches!(err, RulesError::InvalidPhase { .. }));
}

// === Combat resolution ===

#[test]
fn test_miss_only_counts_the_roll() {
    let (state, _) = into_point_phase(&fresh_game());
    let next = apply_point_phase_outcome(&state, RollOutcome::Miss { sum: 3 }).unwrap();

    assert_eq!(next.turn_state.roll_count, state.turn_state.roll_count + 1);
    assert_eq!(next.players, state.players);
    assert_eq!(next.monsters, state.monsters);
    assert_eq!(next.turn_state.phase, TurnPhase::PointPhase);
}

#[test]
fn test_hit_damages_monster_and_tracks_leader() {
    let (state, point) = into_point_phase(&fresh_game());
    let number = state.monsters[0].remaining_numbers[0];

    let outcome =
        evaluate_point_phase_roll(number, point, &state.monsters[0].remaining_numbers).unwrap();
    assert_eq!(outcome, RollOutcome::Hit { hit_number: number });

    let next = apply_point_phase_outcome(&state, outcome).unwrap();
    assert!(!next.monsters[0].remaining_numbers.contains(&number));
    assert_eq!(next.turn_state.turn_damage, 1);
    assert_eq!(next.players[0].damage_count, 1);
    assert_eq!(next.damage_leader_id, Some(next.players[0].id.clone()));
}

#[test]
fn test_defeat_awards_and_advances_track() {
    let (state, _) = into_point_phase(&fresh_game());
    // The first monster needs exactly one number.
    assert_eq!(state.monsters[0].remaining_numbers.len(), 1);
    let number = state.monsters[0].remaining_numbers[0];

    let vp_before = state.players[0].victory_points;
    let gold_before = state.players[0].gold;
    let reward = state.monsters[0].gold_reward;
    let points = state.monsters[0].points;

    let next =
        apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: number }).unwrap();

    assert!(next.monsters[0].is_defeated());
    assert_eq!(next.current_monster_index, 1);
    assert_eq!(next.players[0].victory_points, vp_before + points);
    assert_eq!(next.players[0].gold, gold_before + reward);
    // The turn keeps going against the next monster.
    assert_eq!(next.turn_state.phase, TurnPhase::PointPhase);
}

#[test]
fn test_crap_out_rolls_monster_back() {
    let (state, point) = into_point_phase(&fresh_game());

    // Fight a mid-track monster with two numbers so a partial fight
    // exists to roll back (a one-number monster would just die).
    let mut state = state;
    state.current_monster_index = 3;
    state.turn_state.monster_state_before_turn = Some(state.monsters[3].clone());
    let monster_before = state.monsters[3].clone();
    assert_eq!(monster_before.remaining_numbers.len(), 2);

    // Land a hit first (on a number that is not the point).
    let number = monster_before
        .remaining_numbers
        .iter()
        .copied()
        .find(|&n| n != point)
        .expect("two numbers cannot both equal the point");
    let state = apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: number }).unwrap();
    assert_eq!(state.players[0].damage_count, 1);
    assert!(!state.monsters[3].is_defeated());

    // Now crap out.
    let next = apply_point_phase_outcome(&state, RollOutcome::CrapOut).unwrap();

    // The monster is byte-for-byte the pre-turn snapshot again.
    assert_eq!(next.monsters[3], monster_before);
    // The turn's damage is discarded with it.
    assert_eq!(next.players[0].damage_count, 0);
    // And the dice pass to the other player.
    assert_eq!(next.current_player_index, 1);
    assert_eq!(next.turn_state.active_player_id, next.players[1].id);
    assert_eq!(next.turn_state.phase, TurnPhase::MarketplaceRefresh);
    assert_eq!(next.turn_state.consecutive_turns, 1);
}

#[test]
fn test_crap_out_after_mid_turn_defeat_restores_only_current_monster() {
    let (state, point) = into_point_phase(&fresh_game());

    // Stage a track where one hit fells the first monster and the second
    // takes two, with every number distinct from the point.
    let numbers: Vec<u8> = [4u8, 5, 6, 8, 9, 10]
        .into_iter()
        .filter(|&n| n != point)
        .collect();
    let first = Monster {
        id: MonsterId::new("monster-1-fodder"),
        kind: MonsterKind::Goblin,
        position: 1,
        numbers_to_hit: smallvec![numbers[0]],
        remaining_numbers: smallvec![numbers[0]],
        points: 1,
        gold_reward: 2,
    };
    let second = Monster {
        id: MonsterId::new("monster-2-sturdy"),
        kind: MonsterKind::Skeleton,
        position: 2,
        numbers_to_hit: smallvec![numbers[1], numbers[2]],
        remaining_numbers: smallvec![numbers[1], numbers[2]],
        points: 2,
        gold_reward: 4,
    };
    let mut state = state;
    state.monsters.set(0, first.clone());
    state.monsters.set(1, second.clone());
    state.current_monster_index = 0;
    state.turn_state.monster_state_before_turn = Some(first.clone());
    let gold_before = state.players[0].gold;

    // Fell the first monster; the fight (and the rollback target) moves on.
    let state =
        apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: numbers[0] }).unwrap();
    assert!(state.monsters[0].is_defeated());
    assert_eq!(state.current_monster_index, 1);
    assert_eq!(
        state.turn_state.monster_state_before_turn,
        Some(second.clone())
    );
    assert_eq!(state.turn_state.turn_damage, 0);

    // Wound the second monster, then crap out.
    let state =
        apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: numbers[1] }).unwrap();
    assert_eq!(state.players[0].damage_count, 2);
    let next = apply_point_phase_outcome(&state, RollOutcome::CrapOut).unwrap();

    // Only the monster still being fought recovers; the defeat is banked.
    assert_eq!(next.monsters[1], second);
    assert!(next.monsters[0].is_defeated());
    assert_eq!(next.players[0].victory_points, first.points);
    assert_eq!(next.players[0].gold, gold_before + first.gold_reward);
    // The wound on the second monster is the only damage discarded.
    assert_eq!(next.players[0].damage_count, 1);
    assert_eq!(next.current_player_index, 1);
}

#[test]
fn test_point_hit_pays_and_retains_the_dice() {
    let (state, point) = into_point_phase(&fresh_game());
    let gold_before = state.players[0].gold;

    let next = apply_point_phase_outcome(
        &state,
        RollOutcome::PointHit { point_value: point },
    )
    .unwrap();

    assert_eq!(next.players[0].gold, gold_before + u32::from(point));
    // Same player, fresh turn, streak incremented.
    assert_eq!(next.current_player_index, 0);
    assert_eq!(next.turn_state.active_player_id, next.players[0].id);
    assert_eq!(next.turn_state.phase, TurnPhase::MarketplaceRefresh);
    assert_eq!(next.turn_state.consecutive_turns, 2);
    assert_eq!(next.turn_state.point, None);
    assert_eq!(next.turn_state.roll_count, 0);
}

#[test]
fn test_escape_keeps_monster_progress() {
    let (state, point) = into_point_phase(&fresh_game());

    let mut state = state;
    state.current_monster_index = 3;
    state.turn_state.monster_state_before_turn = Some(state.monsters[3].clone());

    let number = state.monsters[3]
        .remaining_numbers
        .iter()
        .copied()
        .find(|&n| n != point)
        .expect("two numbers cannot both equal the point");
    let before_hit = state.monsters[3].remaining_numbers.len();
    let state = apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: number }).unwrap();

    let next = accept_escape(&state).unwrap();

    // Unlike a crap-out, the hit sticks.
    assert_eq!(next.monsters[3].remaining_numbers.len(), before_hit - 1);
    assert_eq!(next.players[0].damage_count, 1);
    assert_eq!(next.current_player_index, 1);
}

#[test]
fn test_boss_defeat_ends_the_game() {
    let (state, _) = into_point_phase(&fresh_game());

    // Stage the endgame: boss with one number left, challenger behind on points.
    let mut state = state;
    let boss = Monster {
        id: MonsterId::new("monster-10-boss"),
        kind: MonsterKind::Boss,
        position: 10,
        numbers_to_hit: smallvec![2, 4, 5, 6],
        remaining_numbers: smallvec![5],
        points: 5,
        gold_reward: 8,
    };
    let last = state.monsters.len() - 1;
    state.monsters.set(last, boss);
    state.current_monster_index = last;
    state.turn_state.monster_state_before_turn = Some(state.monsters[last].clone());

    let mut rival = state.players[1].clone();
    rival.victory_points = 3;
    state.players.set(1, rival);

    let next = apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: 5 }).unwrap();

    assert!(next.is_game_over);
    assert_eq!(next.turn_state.phase, TurnPhase::GameOver);
    // Slayer earned 5 points for the boss, beating the rival's 3.
    assert_eq!(next.players[0].victory_points, 5);
    assert_eq!(next.winner_id, Some(next.players[0].id.clone()));
}

#[test]
fn test_boss_defeat_winner_is_point_leader() {
    let (state, _) = into_point_phase(&fresh_game());

    let mut state = state;
    let boss = Monster {
        id: MonsterId::new("monster-10-boss"),
        kind: MonsterKind::Boss,
        position: 10,
        numbers_to_hit: smallvec![2, 4],
        remaining_numbers: smallvec![4],
        points: 1,
        gold_reward: 8,
    };
    let last = state.monsters.len() - 1;
    state.monsters.set(last, boss);
    state.current_monster_index = last;

    // The rival is too far ahead for the boss points to close the gap.
    let mut rival = state.players[1].clone();
    rival.victory_points = 10;
    state.players.set(1, rival);

    let next = apply_point_phase_outcome(&state, RollOutcome::Hit { hit_number: 4 }).unwrap();

    assert!(next.is_game_over);
    assert_eq!(next.winner_id, Some(next.players[1].id.clone()));
}

// === Marketplace economy ===

#[test]
fn test_purchase_moves_gold_and_card() {
    let mut state = fresh_game();
    let mut buyer = state.players[0].clone();
    buyer.gold = 20;
    state.players.set(0, buyer);
    let buyer_id = state.players[0].id.clone();

    let card = state.marketplace.cards().next().unwrap().clone();
    let next = purchase_card(&state, &buyer_id, card.id()).unwrap();

    assert_eq!(next.players[0].gold, 20 - card.cost());
    // The slot is sold, not removed.
    assert_eq!(next.marketplace.slots.len(), MARKETPLACE_SIZE);
    assert_eq!(next.marketplace.cards().count(), MARKETPLACE_SIZE - 1);
    assert_eq!(next.marketplace.slot_of(card.id()), None);

    match &card {
        Card::Permanent { .. } => {
            assert!(next.players[0].permanent_cards.iter().any(|c| c.id() == card.id()));
        }
        Card::SingleUse { .. } => {
            assert!(next.players[0].single_use_cards.iter().any(|c| c.id() == card.id()));
        }
        Card::Point { points, .. } => {
            assert_eq!(next.players[0].victory_points, *points);
            assert!(next.players[0].permanent_cards.is_empty());
        }
    }
}

#[test]
fn test_purchase_point_card_converts_to_victory_points() {
    let mut state = fresh_game();
    let mut buyer = state.players[0].clone();
    buyer.gold = 20;
    state.players.set(0, buyer);
    let buyer_id = state.players[0].id.clone();

    // Put a known point card in the first slot.
    let trophy = catalog_cards()
        .into_iter()
        .find(|c| matches!(c, Card::Point { .. }))
        .unwrap();
    let mut slots = state.marketplace.slots.clone();
    slots.set(0, Some(trophy.clone()));
    state.marketplace.slots = slots;

    let next = purchase_card(&state, &buyer_id, trophy.id()).unwrap();
    let Card::Point { points, .. } = &trophy else {
        unreachable!()
    };
    assert_eq!(next.players[0].victory_points, *points);
    assert!(next.players[0].single_use_cards.is_empty());
}

#[test]
fn test_purchase_errors() {
    let state = fresh_game();
    let buyer_id = state.players[0].id.clone();
    let card = state.marketplace.cards().next().unwrap().clone();

    // Unknown player.
    let ghost = PlayerId::new("player-9-ghost");
    assert!(matches!(
        purchase_card(&state, &ghost, card.id()).unwrap_err(),
        RulesError::PlayerNotFound(_)
    ));

    // Unknown card.
    let phantom = CardId::new("card-999-phantom");
    assert!(matches!(
        purchase_card(&state, &buyer_id, &phantom).unwrap_err(),
        RulesError::CardNotAvailable(_)
    ));

    // Broke player.
    let mut broke_state = state.clone();
    let mut broke = broke_state.players[0].clone();
    broke.gold = 0;
    broke_state.players.set(0, broke);
    assert!(matches!(
        purchase_card(&broke_state, &buyer_id, card.id()).unwrap_err(),
        RulesError::InsufficientGold { .. }
    ));
}

#[test]
fn test_purchase_respects_permanent_limit() {
    let mut state = fresh_game();

    // Fill the buyer's permanent rack and make a permanent card available.
    let permanents: Vec<_> = catalog_cards()
        .into_iter()
        .filter(|c| c.is_permanent())
        .collect();
    let mut buyer = state.players[0].clone();
    buyer.gold = 50;
    for card in permanents.iter().take(6) {
        buyer.permanent_cards.push_back(card.clone());
    }
    state.players.set(0, buyer);

    let for_sale = permanents[6].clone();
    let mut slots = state.marketplace.slots.clone();
    slots.set(0, Some(for_sale.clone()));
    state.marketplace.slots = slots;

    let buyer_id = state.players[0].id.clone();
    assert_eq!(
        purchase_card(&state, &buyer_id, for_sale.id()).unwrap_err(),
        RulesError::PermanentCardLimit
    );
}

#[test]
fn test_refresh_marketplace() {
    let state = fresh_game();
    let player_id = state.players[0].id.clone();
    let gold_before = state.players[0].gold;
    let total_cards = state.card_deck.len() + state.marketplace.cards().count();

    let mut rng = GameRng::new(7);
    let next = refresh_marketplace(&state, &player_id, &mut rng).unwrap();

    assert_eq!(next.players[0].gold, gold_before - MARKETPLACE_REFRESH_COST);
    assert_eq!(next.marketplace.cards().count(), MARKETPLACE_SIZE);
    assert_eq!(
        next.card_deck.len() + next.marketplace.cards().count(),
        total_cards
    );

    let market_ids: FxHashSet<_> = next.marketplace.cards().map(|c| c.id().clone()).collect();
    let deck_ids: FxHashSet<_> = next.card_deck.iter().map(|c| c.id().clone()).collect();
    assert!(market_ids.is_disjoint(&deck_ids));
}

#[test]
fn test_refresh_requires_gold() {
    let mut state = fresh_game();
    let mut broke = state.players[0].clone();
    broke.gold = MARKETPLACE_REFRESH_COST - 1;
    state.players.set(0, broke);
    let player_id = state.players[0].id.clone();

    let mut rng = GameRng::new(7);
    let err = refresh_marketplace(&state, &player_id, &mut rng).unwrap_err();
    assert_eq!(
        err,
        RulesError::InsufficientGold {
            needed: MARKETPLACE_REFRESH_COST,
            available: MARKETPLACE_REFRESH_COST - 1,
        }
    );
}

#[test]
fn test_capability_queries() {
    let state = fresh_game();
    let player = &state.players[0];

    assert!(player.can_afford(player.gold));
    assert!(!player.can_afford(player.gold + 1));
    assert!(player.can_hold_permanent());
}
