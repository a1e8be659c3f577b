//! Per-player status read model.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardCatalog, CardKind, CatVariant};
use crate::core::{EngineError, EngineResult, GameState, PlayerId, TurnPhase};

/// What one player needs to know about the match, derived without mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub player: PlayerId,
    pub is_my_turn: bool,
    pub is_eliminated: bool,
    /// Turns before this player acts, over the active cycle. 0 on their own
    /// turn, `None` once eliminated or when the match is over.
    pub turns_until_my_turn: Option<usize>,
    pub holds_defuse: bool,
    pub active_player_count: usize,
    pub draw_pile_size: usize,
    /// Holds at least two cats of one variant.
    pub can_play_combo: bool,
    pub hand_size: usize,
    /// The engine is waiting on this player (turn, placement, or favor).
    pub awaiting_my_decision: bool,
    pub match_over: bool,
}

impl PlayerStatus {
    /// Build the report for a seated player.
    pub fn compute(state: &GameState, catalog: &CardCatalog, player: PlayerId) -> EngineResult<Self> {
        if !state.is_seated(player) {
            return Err(EngineError::UnknownPlayer { player });
        }
        let over = state.is_over();
        let is_eliminated = !state.is_active(player);
        let hand = state.hand(player);

        let turns_until_my_turn = if over || is_eliminated {
            None
        } else if state.turn_owner == player {
            Some(0)
        } else {
            state
                .turn_owner
                .cycle_from(state.player_count())
                .filter(|p| state.is_active(*p))
                .position(|p| p == player)
                .map(|i| i + 1)
        };

        let mut cats: FxHashMap<CatVariant, usize> = FxHashMap::default();
        for card in hand.iter() {
            if let Some(variant) = catalog.get(*card).and_then(|c| c.kind.cat_variant()) {
                *cats.entry(variant).or_default() += 1;
            }
        }

        let awaiting_my_decision = match state.phase {
            TurnPhase::AwaitingAction => state.turn_owner == player,
            TurnPhase::AwaitingDefusePlacement { player: p, .. } => p == player,
            TurnPhase::AwaitingFavorChoice { target, .. } => target == player,
            TurnPhase::MatchOver(_) => false,
        };

        Ok(Self {
            player,
            is_my_turn: !over && state.turn_owner == player,
            is_eliminated,
            turns_until_my_turn,
            holds_defuse: hand.iter().any(|c| catalog.is_kind(*c, CardKind::Defuse)),
            active_player_count: state.active_count(),
            draw_pile_size: state.draw_pile.len(),
            can_play_combo: cats.values().any(|&n| n >= 2),
            hand_size: hand.len(),
            awaiting_my_decision,
            match_over: over,
        })
    }
}
