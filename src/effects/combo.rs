//! Cat combos.
//!
//! Two matching cats steal a uniformly random card from the target. Three
//! matching cats take the card the actor names, if the target holds it.
//! A combo never ends the turn.

use tracing::debug;

use crate::cards::{CardCatalog, CardId, CatVariant};
use crate::core::{EngineError, EngineResult, GameState, PlayerId, RandomSource};
use crate::events::OutcomeEvent;

/// Check a combo without changing anything, returning its cat variant.
///
/// Checks run in order: size, ownership (a repeated id counts as not in
/// hand), matching variant, then target.
pub fn validate_combo(
    state: &GameState,
    catalog: &CardCatalog,
    actor: PlayerId,
    cards: &[CardId],
    target: PlayerId,
) -> EngineResult<CatVariant> {
    if !(2..=3).contains(&cards.len()) {
        return Err(EngineError::ComboSizeInvalid { count: cards.len() });
    }

    for (i, &card) in cards.iter().enumerate() {
        if !state.hand_contains(actor, card) || cards[..i].contains(&card) {
            return Err(EngineError::CardNotInHand {
                player: actor,
                card,
            });
        }
    }

    let mut variants = cards.iter().map(|&card| {
        catalog
            .kind_of(card)
            .map(|kind| kind.cat_variant())
    });
    let variant = match variants.next() {
        Some(Ok(Some(variant))) => variant,
        Some(Err(err)) => return Err(err),
        _ => return Err(EngineError::ComboNotMatching),
    };
    for other in variants {
        if other? != Some(variant) {
            return Err(EngineError::ComboNotMatching);
        }
    }

    let invalid_target = target == actor
        || !state.is_active(target)
        || (cards.len() == 2 && state.hand(target).is_empty());
    if invalid_target {
        return Err(EngineError::InvalidTarget {
            target: Some(target),
        });
    }

    Ok(variant)
}

/// Validate and resolve `PlayCombo`.
#[allow(clippy::too_many_arguments)]
pub fn play_combo<R: RandomSource + ?Sized>(
    state: &mut GameState,
    catalog: &CardCatalog,
    actor: PlayerId,
    cards: &[CardId],
    target: PlayerId,
    named_card: Option<CardId>,
    rng: &mut R,
    events: &mut Vec<OutcomeEvent>,
) -> EngineResult<()> {
    let variant = validate_combo(state, catalog, actor, cards, target)?;

    for &card in cards {
        state.take_from_hand(actor, card);
        state.discard_pile.discard(card);
    }
    events.push(OutcomeEvent::ComboPlayed {
        player: actor,
        cards: cards.iter().copied().collect(),
        variant,
        target,
    });

    let taken = if cards.len() == 2 {
        let hand = state.hand(target);
        hand.get(rng.gen_index(hand.len())).copied()
    } else {
        named_card.filter(|&card| state.hand_contains(target, card))
    };

    match taken {
        Some(card) => {
            state.take_from_hand(target, card);
            state.give_to_hand(actor, card);
            events.push(OutcomeEvent::CardStolen {
                from: target,
                to: actor,
            });
        }
        None => events.push(OutcomeEvent::ComboMissed {
            player: actor,
            target,
        }),
    }

    debug!(%actor, %target, size = cards.len(), stole = taken.is_some(), "combo resolved");
    Ok(())
}
