//! State mutators: the transitions that drive a game forward.
//!
//! Every function here is state-in/state-out: it validates the phase at
//! the mutation boundary, then builds and returns the next [`GameState`]
//! value. The previous state is never touched, so snapshots held by the
//! caller (including `monster_state_before_turn`) stay intact.

use im::Vector;

use crate::cards::Card;
use crate::core::config::{MARKETPLACE_REFRESH_COST, MARKETPLACE_SIZE};
use crate::core::{CardId, GameRng, PlayerId};
use crate::dice;
use crate::rules::error::{RulesError, RulesResult};
use crate::rules::evaluate::RollOutcome;
use crate::rules::setup::{next_player_index, reset_turn_state};
use crate::state::{GameState, Marketplace, MonsterKind, Player, TurnPhase};

fn require_phase(state: &GameState, expected: TurnPhase) -> RulesResult<()> {
    if state.turn_state.phase == expected {
        Ok(())
    } else {
        Err(RulesError::InvalidPhase {
            expected,
            actual: state.turn_state.phase,
        })
    }
}

fn transition(state: &mut GameState, to: TurnPhase) {
    debug_assert!(TurnPhase::can_transition(state.turn_state.phase, to));
    state.turn_state.phase = to;
}

/// Recompute who leads on damage dealt. Nobody leads at zero damage.
fn damage_leader(players: &Vector<Player>) -> Option<PlayerId> {
    players
        .iter()
        .max_by_key(|p| p.damage_count)
        .filter(|p| p.damage_count > 0)
        .map(|p| p.id.clone())
}

/// Leave the marketplace phase and take the come-out roll.
///
/// Snapshots the monster being fought so a later crap-out can restore it.
pub fn begin_turn(state: &GameState) -> RulesResult<GameState> {
    require_phase(state, TurnPhase::MarketplaceRefresh)?;

    let mut next = state.clone();
    next.turn_state.monster_state_before_turn = state.current_monster().cloned();
    transition(&mut next, TurnPhase::ComeOut);
    Ok(next)
}

/// Resolve the come-out roll.
///
/// A natural (7/11) pays a 1-gold bonus and ends the turn kept; craps
/// (2/3/12) ends the turn with nothing gained; a point number establishes
/// the point and enters the point phase.
pub fn resolve_come_out_roll(state: &GameState, sum: u8) -> RulesResult<GameState> {
    require_phase(state, TurnPhase::ComeOut)?;
    if !(2..=12).contains(&sum) {
        return Err(RulesError::InvalidRoll { sum });
    }

    let mut next = state.clone();
    next.turn_state.roll_count += 1;

    if dice::is_natural(sum) {
        let idx = next.current_player_index;
        let mut player = next.players[idx].clone();
        player.gold += 1;
        next.players.set(idx, player);
        transition(&mut next, TurnPhase::TurnEnd);
        Ok(advance_to_next_player(&next))
    } else if dice::is_craps(sum) {
        transition(&mut next, TurnPhase::TurnEnd);
        Ok(advance_to_next_player(&next))
    } else {
        next.turn_state.point = Some(sum);
        transition(&mut next, TurnPhase::PointPhase);
        Ok(next)
    }
}

/// Apply a classified point-phase outcome to the game.
///
/// The outcome should come from
/// [`evaluate_point_phase_roll`](crate::rules::evaluate_point_phase_roll)
/// against this state's point and monster numbers.
pub fn apply_point_phase_outcome(
    state: &GameState,
    outcome: RollOutcome,
) -> RulesResult<GameState> {
    require_phase(state, TurnPhase::PointPhase)?;

    let mut next = state.clone();
    next.turn_state.roll_count += 1;

    match outcome {
        RollOutcome::CrapOut => {
            // The monster recovers everything it lost this turn. Defeat is
            // irreversible, so a monster already cleared from the track
            // stays cleared; only the one still being fought rolls back.
            if let Some(snapshot) = state.turn_state.monster_state_before_turn.clone() {
                if let Some(current) = next.monsters.get(next.current_monster_index) {
                    if current.id == snapshot.id {
                        next.monsters.set(next.current_monster_index, snapshot);
                    }
                }
            }

            let idx = next.current_player_index;
            let mut player = next.players[idx].clone();
            player.damage_count = player
                .damage_count
                .saturating_sub(next.turn_state.turn_damage);
            next.players.set(idx, player);
            next.damage_leader_id = damage_leader(&next.players);

            transition(&mut next, TurnPhase::TurnEnd);
            Ok(advance_to_next_player(&next))
        }

        RollOutcome::PointHit { point_value } => {
            let idx = next.current_player_index;
            let mut player = next.players[idx].clone();
            player.gold += u32::from(point_value);
            next.players.set(idx, player);

            // Making the point keeps the dice: same player, fresh turn.
            let streak = next.turn_state.consecutive_turns + 1;
            let preserve_revive = next.turn_state.has_used_revive;
            transition(&mut next, TurnPhase::TurnEnd);
            next.turn_state = reset_turn_state(
                next.players[idx].id.clone(),
                preserve_revive,
            );
            next.turn_state.consecutive_turns = streak;
            Ok(next)
        }

        RollOutcome::Hit { hit_number } => {
            next.turn_state.turn_damage += 1;

            let idx = next.current_player_index;
            let mut player = next.players[idx].clone();
            player.damage_count += 1;

            let monster_idx = next.current_monster_index;
            let monster = next.monsters[monster_idx].with_number_hit(hit_number);
            let defeated = monster.is_defeated();
            let was_boss = monster.kind == MonsterKind::Boss;

            if defeated {
                player.victory_points += monster.points;
                player.gold += monster.gold_reward;
            }
            next.players.set(idx, player);
            next.monsters.set(monster_idx, monster);
            next.damage_leader_id = damage_leader(&next.players);

            if defeated {
                if was_boss {
                    next.is_game_over = true;
                    next.winner_id = Some(pick_winner(&next.players, idx));
                    transition(&mut next, TurnPhase::TurnEnd);
                    transition(&mut next, TurnPhase::GameOver);
                } else {
                    next.current_monster_index += 1;
                    // The rollback target moves with the fight: the
                    // defeat is banked, so a later crap-out restores the
                    // incoming monster and discards only damage dealt to
                    // it, never resurrecting the defeated one.
                    next.turn_state.monster_state_before_turn =
                        next.monsters.get(next.current_monster_index).cloned();
                    next.turn_state.turn_damage = 0;
                }
            }
            Ok(next)
        }

        // The escape itself is a player choice; see `accept_escape`.
        RollOutcome::EscapeOffered => Ok(next),

        RollOutcome::Miss { .. } => Ok(next),
    }
}

/// The boss is down: most victory points wins, the slayer wins ties.
fn pick_winner(players: &Vector<Player>, slayer_index: usize) -> PlayerId {
    let best = players.iter().map(|p| p.victory_points).max().unwrap_or(0);
    if players[slayer_index].victory_points == best {
        return players[slayer_index].id.clone();
    }
    players
        .iter()
        .find(|p| p.victory_points == best)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| players[slayer_index].id.clone())
}

/// Take the offered escape: the turn ends immediately, but unlike a
/// crap-out the monster keeps every number already hit.
pub fn accept_escape(state: &GameState) -> RulesResult<GameState> {
    require_phase(state, TurnPhase::PointPhase)?;

    let mut next = state.clone();
    transition(&mut next, TurnPhase::TurnEnd);
    Ok(advance_to_next_player(&next))
}

/// Pass the dice to the next seat and reset the turn state.
///
/// The incoming player's revive flag starts fresh; consumed revives are
/// tracked per turn via `reset_turn_state`'s preserve flag where the same
/// player retains the dice.
#[must_use]
pub fn advance_to_next_player(state: &GameState) -> GameState {
    let mut next = state.clone();
    let incoming = next_player_index(next.current_player_index, next.players.len());
    next.current_player_index = incoming;
    next.turn_state = reset_turn_state(next.players[incoming].id.clone(), false);
    next
}

/// Buy a card out of the marketplace.
///
/// Gold moves from the player, the slot empties, and the card lands in
/// the matching collection; point cards convert straight to victory
/// points and are not retained.
pub fn purchase_card(
    state: &GameState,
    player_id: &PlayerId,
    card_id: &CardId,
) -> RulesResult<GameState> {
    let player_index = state
        .find_player_index_by_id(player_id)
        .ok_or_else(|| RulesError::PlayerNotFound(player_id.clone()))?;

    let slot = state
        .marketplace
        .slot_of(card_id)
        .ok_or_else(|| RulesError::CardNotAvailable(card_id.clone()))?;
    let card = state.marketplace.slots[slot]
        .clone()
        .ok_or_else(|| RulesError::CardNotAvailable(card_id.clone()))?;

    let mut player = state.players[player_index].clone();
    if !player.can_afford(card.cost()) {
        return Err(RulesError::InsufficientGold {
            needed: card.cost(),
            available: player.gold,
        });
    }
    if card.is_permanent() && !player.can_hold_permanent() {
        return Err(RulesError::PermanentCardLimit);
    }

    player.gold -= card.cost();
    match &card {
        Card::Permanent { .. } => player.permanent_cards.push_back(card.clone()),
        Card::SingleUse { .. } => player.single_use_cards.push_back(card.clone()),
        Card::Point { points, .. } => player.victory_points += points,
    }

    let mut next = state.clone();
    next.players.set(player_index, player);
    next.marketplace = next.marketplace.with_slot_sold(slot);
    Ok(next)
}

/// Pay to discard and redraw the marketplace offering.
///
/// Unsold cards are shuffled back into the deck before the fresh draw, so
/// no card ever leaves the game through a refresh.
pub fn refresh_marketplace(
    state: &GameState,
    player_id: &PlayerId,
    rng: &mut GameRng,
) -> RulesResult<GameState> {
    let player_index = state
        .find_player_index_by_id(player_id)
        .ok_or_else(|| RulesError::PlayerNotFound(player_id.clone()))?;

    let mut player = state.players[player_index].clone();
    if !player.can_afford(MARKETPLACE_REFRESH_COST) {
        return Err(RulesError::InsufficientGold {
            needed: MARKETPLACE_REFRESH_COST,
            available: player.gold,
        });
    }
    player.gold -= MARKETPLACE_REFRESH_COST;

    // Returned cards are shuffled back in rather than stacked on the
    // bottom, so a refresh can't be used to count the deck.
    let mut deck: Vec<Card> = state.card_deck.iter().cloned().collect();
    deck.extend(state.marketplace.cards().cloned());
    rng.shuffle(&mut deck);

    let draw_count = MARKETPLACE_SIZE.min(deck.len());
    let remaining = deck.split_off(draw_count);

    let mut next = state.clone();
    next.players.set(player_index, player);
    next.marketplace = Marketplace::from_cards(deck);
    next.card_deck = remaining.into_iter().collect();
    Ok(next)
}
