//! Match state.
//!
//! ## GameState
//!
//! One value per match, holding everything the rules need:
//! - Draw and discard piles
//! - Every hand (private information, never put into events)
//! - Eliminated seats and the forced-turn debt
//! - Turn owner, turn counter, and the state-machine phase
//! - Accepted command history
//!
//! Uses `im` persistent data structures, so the engine can clone a state,
//! apply a command to the clone, and drop it on rejection at O(1) cost.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};

use super::command::{ActionRecord, Command};
use super::error::EngineResult;
use super::player::{PlayerId, PlayerMap};
use crate::cards::CardId;
use crate::piles::Pile;
use crate::status::MatchResult;

/// Where the turn state machine currently is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// The turn owner may play cards or draw.
    AwaitingAction,

    /// `player` defused `bomb` and must choose where it goes back.
    /// The bomb is held here until placed.
    AwaitingDefusePlacement { player: PlayerId, bomb: CardId },

    /// `target` owes `actor` a card of their choice.
    AwaitingFavorChoice { actor: PlayerId, target: PlayerId },

    /// Terminal. Only status reads are accepted.
    MatchOver(MatchResult),
}

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    // === Cards ===
    /// Top at index 0.
    pub draw_pile: Pile,

    /// Most recent discard last.
    pub discard_pile: Pile,

    /// Cards per seat. Eliminated players keep theirs.
    pub hands: PlayerMap<Vector<CardId>>,

    // === Turn order ===
    pub eliminated: OrdSet<PlayerId>,

    /// Extra turns the turn owner still owes.
    pub pending_forced_turns: u32,

    pub turn_owner: PlayerId,

    /// Starts at 1.
    pub turn_number: u32,

    pub phase: TurnPhase,

    // === Diagnostics ===
    /// Description of the most recent resolved command. Never read by rules.
    pub last_action: String,

    pub history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a state at the start of the first turn.
    #[must_use]
    pub fn new(
        draw_pile: Pile,
        hands: PlayerMap<Vector<CardId>>,
        turn_owner: PlayerId,
    ) -> Self {
        Self {
            draw_pile,
            discard_pile: Pile::new(),
            hands,
            eliminated: OrdSet::new(),
            pending_forced_turns: 0,
            turn_owner,
            turn_number: 1,
            phase: TurnPhase::AwaitingAction,
            last_action: String::new(),
            history: Vector::new(),
        }
    }

    /// Seats in the match, taken from `hands`.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.hands.player_count()
    }

    /// Whether `player` is one of this match's seats.
    #[must_use]
    pub fn is_seated(&self, player: PlayerId) -> bool {
        self.hands.contains(player)
    }

    /// Seated and not eliminated.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.is_seated(player) && !self.eliminated.contains(&player)
    }

    /// Non-eliminated seats in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        PlayerId::all(self.player_count()).filter(move |p| !self.eliminated.contains(p))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    // === Hands ===

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Vector<CardId> {
        &self.hands[player]
    }

    #[must_use]
    pub fn hand_contains(&self, player: PlayerId, card: CardId) -> bool {
        self.hands[player].contains(&card)
    }

    /// Remove one card from a hand. Returns false if it was not there.
    pub(crate) fn take_from_hand(&mut self, player: PlayerId, card: CardId) -> bool {
        let hand = &mut self.hands[player];
        match hand.index_of(&card) {
            Some(index) => {
                hand.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn give_to_hand(&mut self, player: PlayerId, card: CardId) {
        self.hands[player].push_back(card);
    }

    // === Phase ===

    /// The exploding kitten waiting to be placed, if any.
    #[must_use]
    pub fn pending_bomb(&self) -> Option<CardId> {
        match self.phase {
            TurnPhase::AwaitingDefusePlacement { bomb, .. } => Some(bomb),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase, TurnPhase::MatchOver(_))
    }

    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        match &self.phase {
            TurnPhase::MatchOver(result) => Some(result),
            _ => None,
        }
    }

    /// Every card id in every location: draw pile, discard pile, each hand,
    /// and the pending bomb slot.
    pub fn all_cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.draw_pile
            .iter()
            .chain(self.discard_pile.iter())
            .chain(self.hands.iter().flat_map(|(_, hand)| hand.iter().copied()))
            .chain(self.pending_bomb())
    }

    // === History ===

    pub(crate) fn record(&mut self, player: PlayerId, command: &Command) {
        let sequence = self.history.len() as u32;
        self.history.push_back(ActionRecord {
            player,
            command: command.clone(),
            turn: self.turn_number,
            sequence,
        });
    }

    // === Persistence hand-off ===

    /// Encode the state for the host's storage layer.
    pub fn to_snapshot(&self) -> EngineResult<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a state produced by [`GameState::to_snapshot`].
    pub fn from_snapshot(bytes: &[u8]) -> EngineResult<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
