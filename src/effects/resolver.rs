//! Single-card effect resolution.
//!
//! `EffectResolver` moves a played card from hand to discard and then
//! dispatches on its `CardKind`. The dispatch is one exhaustive `match`, so
//! a new card kind cannot be added without deciding what it does.

use tracing::debug;

use crate::cards::{CardCatalog, CardId, CardKind};
use crate::core::{EngineError, EngineResult, GameState, PlayerId, RandomSource, TurnPhase};
use crate::events::OutcomeEvent;
use crate::rules::turn;

/// Resolves played cards against a match state.
pub struct EffectResolver;

impl EffectResolver {
    /// Validate and resolve `PlayCard`.
    ///
    /// The caller has already checked the turn and phase. On error the state
    /// may be partially modified and must be discarded.
    pub fn play_card<R: RandomSource + ?Sized>(
        state: &mut GameState,
        catalog: &CardCatalog,
        actor: PlayerId,
        card: CardId,
        target: Option<PlayerId>,
        rng: &mut R,
        events: &mut Vec<OutcomeEvent>,
    ) -> EngineResult<()> {
        if !state.hand_contains(actor, card) {
            return Err(EngineError::CardNotInHand {
                player: actor,
                card,
            });
        }
        let kind = catalog.kind_of(card)?;
        if !kind.is_playable() {
            return Err(EngineError::CardNotPlayable { card });
        }
        Self::check_target(state, actor, kind, target)?;
        let target = target.filter(|_| kind.needs_target());

        state.take_from_hand(actor, card);
        state.discard_pile.discard(card);
        events.push(OutcomeEvent::CardPlayed {
            player: actor,
            card,
            kind,
            target,
        });
        debug!(%actor, %card, ?kind, "card played");

        Self::resolve(state, actor, kind, target, rng, events);
        Ok(())
    }

    /// Favor needs an active opponent. Other cards ignore any target given.
    fn check_target(
        state: &GameState,
        actor: PlayerId,
        kind: CardKind,
        target: Option<PlayerId>,
    ) -> EngineResult<()> {
        let valid = match (kind.needs_target(), target) {
            (true, Some(t)) => t != actor && state.is_active(t),
            (true, None) => false,
            (false, _) => true,
        };

        if valid {
            Ok(())
        } else {
            Err(EngineError::InvalidTarget { target })
        }
    }

    fn resolve<R: RandomSource + ?Sized>(
        state: &mut GameState,
        actor: PlayerId,
        kind: CardKind,
        target: Option<PlayerId>,
        rng: &mut R,
        events: &mut Vec<OutcomeEvent>,
    ) {
        match kind {
            CardKind::Attack => turn::pass_attack(state, events),

            CardKind::Skip => turn::end_turn(state, events),

            CardKind::Shuffle => {
                state.draw_pile.shuffle(rng);
                events.push(OutcomeEvent::DeckShuffled { player: actor });
            }

            // Peeking is a separate read.
            CardKind::SeeFuture => {}

            CardKind::Favor => {
                if let Some(target) = target {
                    Self::request_favor(state, actor, target, events);
                }
            }

            // Only useful in combos.
            CardKind::Cat(_) => {}

            // Rejected by `is_playable` before resolution.
            CardKind::ExplodingKitten | CardKind::Defuse => {}
        }
    }

    fn request_favor(
        state: &mut GameState,
        actor: PlayerId,
        target: PlayerId,
        events: &mut Vec<OutcomeEvent>,
    ) {
        if state.hand(target).is_empty() {
            events.push(OutcomeEvent::FavorUnanswered { actor, target });
            return;
        }

        state.phase = TurnPhase::AwaitingFavorChoice { actor, target };
        events.push(OutcomeEvent::FavorRequested { actor, target });
    }

    /// The favor target hands `card` to the actor.
    ///
    /// The caller has already checked that the state is awaiting this
    /// player's favor choice.
    pub fn resolve_favor_choice(
        state: &mut GameState,
        target: PlayerId,
        card: CardId,
        events: &mut Vec<OutcomeEvent>,
    ) -> EngineResult<()> {
        let TurnPhase::AwaitingFavorChoice { actor, .. } = state.phase else {
            return Err(EngineError::WrongPendingSubstate);
        };
        if !state.take_from_hand(target, card) {
            return Err(EngineError::CardNotInHand {
                player: target,
                card,
            });
        }

        state.give_to_hand(actor, card);
        state.phase = TurnPhase::AwaitingAction;
        events.push(OutcomeEvent::FavorGranted {
            from: target,
            to: actor,
        });
        Ok(())
    }
}
