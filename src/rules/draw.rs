//! Drawing, exploding, and defusing.

use tracing::{debug, info};

use crate::cards::{CardCatalog, CardKind};
use crate::core::{EngineError, EngineResult, GameState, PlayerId, RandomSource, TurnPhase};
use crate::events::OutcomeEvent;
use crate::piles::InsertPosition;

use super::turn;

/// Resolve `DrawCard` for the turn owner.
///
/// A safe card ends the turn. A bomb either waits for placement (the drawer
/// spends a defuse) or eliminates the drawer.
pub(crate) fn draw_card(
    state: &mut GameState,
    catalog: &CardCatalog,
    player: PlayerId,
    events: &mut Vec<OutcomeEvent>,
) -> EngineResult<()> {
    let card = state
        .draw_pile
        .draw_top()
        .map_err(|_| EngineError::DrawPileEmpty)?;

    if !catalog.is_kind(card, CardKind::ExplodingKitten) {
        state.give_to_hand(player, card);
        events.push(OutcomeEvent::CardDrawn { player });
        turn::end_turn(state, events);
        return Ok(());
    }

    events.push(OutcomeEvent::ExplodingKittenDrawn { player, card });
    let defuse = state
        .hand(player)
        .iter()
        .copied()
        .find(|c| catalog.is_kind(*c, CardKind::Defuse));

    match defuse {
        Some(defuse) => {
            state.take_from_hand(player, defuse);
            state.discard_pile.discard(defuse);
            state.phase = TurnPhase::AwaitingDefusePlacement { player, bomb: card };
            events.push(OutcomeEvent::Defused { player, defuse });
            debug!(%player, bomb = %card, "defused, awaiting placement");
        }
        None => {
            state.discard_pile.discard(card);
            info!(%player, bomb = %card, "no defuse");
            turn::eliminate(state, player, events);
        }
    }

    Ok(())
}

/// Put the defused bomb back and finish the turn.
pub(crate) fn place_bomb<R: RandomSource + ?Sized>(
    state: &mut GameState,
    position: InsertPosition,
    rng: &mut R,
    events: &mut Vec<OutcomeEvent>,
) -> EngineResult<()> {
    let TurnPhase::AwaitingDefusePlacement { player, bomb } = state.phase else {
        return Err(EngineError::WrongPendingSubstate);
    };

    state.draw_pile.insert_at(bomb, position, rng)?;
    state.phase = TurnPhase::AwaitingAction;
    events.push(OutcomeEvent::BombReinserted { player });
    turn::end_turn(state, events);
    Ok(())
}
