//! Legal command enumeration.
//!
//! Lists commands the engine would accept from one player right now, for
//! bots, UIs, and property tests. Three-card combos are left out because
//! they need a named card the actor cannot see.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cards::{CardCatalog, CardId, CatVariant};
use crate::core::{Command, GameState, PlayerId, TurnPhase};
use crate::piles::InsertPosition;

/// Commands `player` may issue in `state`. Empty if nothing is awaited from them.
#[must_use]
pub fn legal_commands(state: &GameState, catalog: &CardCatalog, player: PlayerId) -> Vec<Command> {
    if !state.is_seated(player) {
        return Vec::new();
    }

    match state.phase {
        TurnPhase::MatchOver(_) => Vec::new(),

        TurnPhase::AwaitingDefusePlacement { player: placing, .. } if placing == player => {
            [InsertPosition::Top, InsertPosition::Bottom, InsertPosition::Random]
                .into_iter()
                .map(|position| Command::ResolveDefusePlacement { position })
                .collect()
        }

        TurnPhase::AwaitingFavorChoice { target, .. } if target == player => state
            .hand(player)
            .iter()
            .map(|&card| Command::ResolveFavorChoice { card })
            .collect(),

        TurnPhase::AwaitingAction if state.turn_owner == player => {
            turn_commands(state, catalog, player)
        }

        _ => Vec::new(),
    }
}

fn turn_commands(state: &GameState, catalog: &CardCatalog, player: PlayerId) -> Vec<Command> {
    let mut commands = Vec::new();
    if !state.draw_pile.is_empty() {
        commands.push(Command::DrawCard);
    }

    let opponents: SmallVec<[PlayerId; 4]> =
        state.active_players().filter(|&p| p != player).collect();
    let mut cats: FxHashMap<CatVariant, SmallVec<[CardId; 3]>> = FxHashMap::default();

    for &card in state.hand(player).iter() {
        let Some(kind) = catalog.get(card).map(|c| c.kind) else {
            continue;
        };
        if let Some(variant) = kind.cat_variant() {
            cats.entry(variant).or_default().push(card);
        }
        if !kind.is_playable() {
            continue;
        }
        if kind.needs_target() {
            commands.extend(opponents.iter().map(|&t| Command::play_targeted(card, t)));
        } else {
            commands.push(Command::play(card));
        }
    }

    // One representative pair per variant, in a stable order.
    let mut pairs: Vec<_> = cats.into_iter().filter(|(_, cards)| cards.len() >= 2).collect();
    pairs.sort_by_key(|(variant, _)| *variant);
    for (_, cards) in pairs {
        for &target in &opponents {
            if !state.hand(target).is_empty() {
                commands.push(Command::combo(&cards[..2], target));
            }
        }
    }

    commands
}
