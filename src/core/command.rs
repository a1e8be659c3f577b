//! Commands a player can submit, and the history record kept for each.
//!
//! The acting player is passed alongside the command rather than inside
//! it; the engine trusts it as the real caller.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::CardId;
use crate::piles::InsertPosition;

/// A state-changing request.
///
/// ## Example
///
/// ```
/// use kitten_engine::cards::CardId;
/// use kitten_engine::core::{Command, PlayerId};
///
/// let favor = Command::play_targeted(CardId::new(30), PlayerId::new(2));
/// let pair = Command::combo(&[CardId::new(40), CardId::new(41)], PlayerId::new(1));
/// assert!(matches!(pair, Command::PlayCombo { named_card: None, .. }));
/// # let _ = favor;
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Play one card from hand.
    PlayCard {
        card: CardId,
        target: Option<PlayerId>,
    },

    /// Play 2 or 3 matching cat cards to steal from `target`.
    /// A 3-card combo takes `named_card` if the target holds it.
    PlayCombo {
        /// SmallVec keeps the common 2-3 card case off the heap.
        cards: SmallVec<[CardId; 3]>,
        target: PlayerId,
        named_card: Option<CardId>,
    },

    /// Draw the top card, ending the turn unless it is an exploding kitten.
    DrawCard,

    /// Put a defused exploding kitten back into the draw pile.
    ResolveDefusePlacement { position: InsertPosition },

    /// The Favor target hands over a card of their choice.
    ResolveFavorChoice { card: CardId },
}

impl Command {
    /// Play a card that takes no target.
    #[must_use]
    pub fn play(card: CardId) -> Self {
        Self::PlayCard { card, target: None }
    }

    /// Play a card aimed at another player.
    #[must_use]
    pub fn play_targeted(card: CardId, target: PlayerId) -> Self {
        Self::PlayCard {
            card,
            target: Some(target),
        }
    }

    /// A combo with no named card (2-card steals).
    #[must_use]
    pub fn combo(cards: &[CardId], target: PlayerId) -> Self {
        Self::PlayCombo {
            cards: SmallVec::from_slice(cards),
            target,
            named_card: None,
        }
    }

    /// A 3-card combo naming the card to take.
    #[must_use]
    pub fn combo_naming(cards: &[CardId], target: PlayerId, named: CardId) -> Self {
        Self::PlayCombo {
            cards: SmallVec::from_slice(cards),
            target,
            named_card: Some(named),
        }
    }

    /// Short verb for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Command::PlayCard { .. } => "play_card",
            Command::PlayCombo { .. } => "play_combo",
            Command::DrawCard => "draw_card",
            Command::ResolveDefusePlacement { .. } => "resolve_defuse_placement",
            Command::ResolveFavorChoice { .. } => "resolve_favor_choice",
        }
    }
}

/// A resolved command kept in the match history.
///
/// Used for:
/// - Replay/debugging
/// - Activity feeds in the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who issued the command.
    pub player: PlayerId,

    /// The command as accepted.
    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Position in the match history.
    pub sequence: u32,
}
