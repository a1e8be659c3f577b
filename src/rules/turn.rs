//! Turn-order bookkeeping.
//!
//! "Next player" is always the next non-eliminated seat in seating order,
//! cyclically. The forced-turn debt belongs to whoever owns the turn: a
//! completed turn consumes one unit, and play only passes on once the debt
//! is paid off.

use tracing::{debug, info};

use crate::core::{GameState, PlayerId, TurnPhase};
use crate::events::OutcomeEvent;
use crate::status::MatchResult;

/// Turns added to the next player by an Attack.
pub const ATTACK_FORCED_TURNS: u32 = 2;

/// The next active seat after `from`, or `from` itself if nobody else is left.
#[must_use]
pub fn next_active(state: &GameState, from: PlayerId) -> Option<PlayerId> {
    from.cycle_from(state.player_count())
        .find(|p| state.is_active(*p))
}

/// Hand the turn to the next active seat.
pub(crate) fn advance(state: &mut GameState, events: &mut Vec<OutcomeEvent>) {
    let from = state.turn_owner;
    if let Some(to) = next_active(state, from) {
        state.turn_owner = to;
        events.push(OutcomeEvent::TurnAdvanced {
            from,
            to,
            turn_number: state.turn_number,
        });
        debug!(%from, %to, turn = state.turn_number, "turn advanced");
    }
}

/// Finish the current turn (draw, defuse placement, or Skip).
///
/// With debt outstanding one unit is paid and the same player goes again
/// unless that was the last unit.
pub(crate) fn end_turn(state: &mut GameState, events: &mut Vec<OutcomeEvent>) {
    state.turn_number += 1;

    if state.pending_forced_turns > 0 {
        state.pending_forced_turns -= 1;
        if state.pending_forced_turns > 0 {
            let owner = state.turn_owner;
            events.push(OutcomeEvent::TurnAdvanced {
                from: owner,
                to: owner,
                turn_number: state.turn_number,
            });
            return;
        }
    }

    advance(state, events);
}

/// End the turn with an Attack: the next player inherits the current debt
/// plus two more turns. Nothing is paid off and the turn counter is unchanged.
pub(crate) fn pass_attack(state: &mut GameState, events: &mut Vec<OutcomeEvent>) {
    state.pending_forced_turns += ATTACK_FORCED_TURNS;
    advance(state, events);
    events.push(OutcomeEvent::ForcedTurnsAdded {
        target: state.turn_owner,
        added: ATTACK_FORCED_TURNS,
        pending: state.pending_forced_turns,
    });
}

/// Remove an exploded player and either end the match or pass the turn.
///
/// The explosion pays one unit of debt; the rest passes on with the turn.
pub(crate) fn eliminate(state: &mut GameState, player: PlayerId, events: &mut Vec<OutcomeEvent>) {
    state.eliminated.insert(player);
    state.pending_forced_turns = state.pending_forced_turns.saturating_sub(1);
    state.turn_number += 1;
    events.push(OutcomeEvent::PlayerEliminated { player });
    info!(%player, remaining = state.active_count(), "player eliminated");

    let outcome = MatchResult::from_survivors(state.active_players());
    match outcome {
        Some(result) => finish(state, result, events),
        None => advance(state, events),
    }
}

fn finish(state: &mut GameState, result: MatchResult, events: &mut Vec<OutcomeEvent>) {
    state.phase = TurnPhase::MatchOver(result);
    events.push(OutcomeEvent::MatchEnded { result });
    info!(?result, turn = state.turn_number, "match over");
}
