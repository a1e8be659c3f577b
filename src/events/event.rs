//! Outcome events.
//!
//! Every successful command returns an ordered list of events describing
//! what happened, so a broadcast layer can fan them out without diffing
//! states. Events carry public information only: a stolen or granted card
//! is never identified, and a reinserted bomb's position is not revealed.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, CardKind, CatVariant};
use crate::core::PlayerId;
use crate::status::MatchResult;

/// Something that happened while resolving a command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutcomeEvent {
    // === Plays ===
    /// A single card went from hand to discard.
    CardPlayed {
        player: PlayerId,
        card: CardId,
        kind: CardKind,
        target: Option<PlayerId>,
    },

    /// A cat combo went from hand to discard.
    ComboPlayed {
        player: PlayerId,
        cards: SmallVec<[CardId; 3]>,
        variant: CatVariant,
        target: PlayerId,
    },

    /// One card moved from `from`'s hand to `to`'s hand.
    CardStolen { from: PlayerId, to: PlayerId },

    /// A combo resolved without taking anything.
    ComboMissed { player: PlayerId, target: PlayerId },

    DeckShuffled { player: PlayerId },

    // === Favor ===
    FavorRequested { actor: PlayerId, target: PlayerId },
    FavorGranted { from: PlayerId, to: PlayerId },
    /// The target had nothing to give.
    FavorUnanswered { actor: PlayerId, target: PlayerId },

    // === Draws ===
    /// A non-bomb card went into the drawer's hand.
    CardDrawn { player: PlayerId },

    ExplodingKittenDrawn { player: PlayerId, card: CardId },

    /// A defuse was spent on a drawn bomb.
    Defused { player: PlayerId, defuse: CardId },

    BombReinserted { player: PlayerId },

    PlayerEliminated { player: PlayerId },

    // === Turn order ===
    /// Attack debt was added to `target`.
    ForcedTurnsAdded {
        target: PlayerId,
        added: u32,
        pending: u32,
    },

    TurnAdvanced {
        from: PlayerId,
        to: PlayerId,
        turn_number: u32,
    },

    MatchEnded { result: MatchResult },
}

impl OutcomeEvent {
    /// Players the event is about, actor first.
    #[must_use]
    pub fn players(&self) -> SmallVec<[PlayerId; 2]> {
        let mut out = SmallVec::new();
        match self {
            OutcomeEvent::CardPlayed { player, target, .. } => {
                out.push(*player);
                out.extend(*target);
            }
            OutcomeEvent::ComboPlayed { player, target, .. }
            | OutcomeEvent::ComboMissed { player, target } => {
                out.push(*player);
                out.push(*target);
            }
            OutcomeEvent::CardStolen { from, to } | OutcomeEvent::FavorGranted { from, to } => {
                out.push(*to);
                out.push(*from);
            }
            OutcomeEvent::FavorRequested { actor, target }
            | OutcomeEvent::FavorUnanswered { actor, target } => {
                out.push(*actor);
                out.push(*target);
            }
            OutcomeEvent::DeckShuffled { player }
            | OutcomeEvent::CardDrawn { player }
            | OutcomeEvent::ExplodingKittenDrawn { player, .. }
            | OutcomeEvent::Defused { player, .. }
            | OutcomeEvent::BombReinserted { player }
            | OutcomeEvent::PlayerEliminated { player } => out.push(*player),
            OutcomeEvent::ForcedTurnsAdded { target, .. } => out.push(*target),
            OutcomeEvent::TurnAdvanced { from, to, .. } => {
                out.push(*from);
                if from != to {
                    out.push(*to);
                }
            }
            OutcomeEvent::MatchEnded { result } => out.extend(result.winner()),
        }
        out
    }

    /// Check whether `player` is mentioned by this event.
    #[must_use]
    pub fn involves(&self, player: PlayerId) -> bool {
        self.players().contains(&player)
    }
}

impl std::fmt::Display for OutcomeEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutcomeEvent::CardPlayed { player, kind, target: Some(target), .. } => {
                write!(f, "{} played {} on {}", player, kind.display_name(), target)
            }
            OutcomeEvent::CardPlayed { player, kind, target: None, .. } => {
                write!(f, "{} played {}", player, kind.display_name())
            }
            OutcomeEvent::ComboPlayed { player, cards, variant, target } => write!(
                f,
                "{} played {} {} Cats against {}",
                player,
                cards.len(),
                variant.name(),
                target
            ),
            OutcomeEvent::CardStolen { from, to } => write!(f, "{} stole a card from {}", to, from),
            OutcomeEvent::ComboMissed { player, target } => {
                write!(f, "{}'s combo took nothing from {}", player, target)
            }
            OutcomeEvent::DeckShuffled { player } => write!(f, "{} shuffled the draw pile", player),
            OutcomeEvent::FavorRequested { actor, target } => {
                write!(f, "{} asked {} for a favor", actor, target)
            }
            OutcomeEvent::FavorGranted { from, to } => write!(f, "{} gave {} a card", from, to),
            OutcomeEvent::FavorUnanswered { actor, target } => {
                write!(f, "{} had nothing to give {}", target, actor)
            }
            OutcomeEvent::CardDrawn { player } => write!(f, "{} drew a card", player),
            OutcomeEvent::ExplodingKittenDrawn { player, .. } => {
                write!(f, "{} drew an Exploding Kitten", player)
            }
            OutcomeEvent::Defused { player, .. } => write!(f, "{} defused an Exploding Kitten", player),
            OutcomeEvent::BombReinserted { player } => {
                write!(f, "{} put the Exploding Kitten back", player)
            }
            OutcomeEvent::PlayerEliminated { player } => write!(f, "{} exploded", player),
            OutcomeEvent::ForcedTurnsAdded { target, added, pending } => {
                write!(f, "{} owes {} more turns ({} pending)", target, added, pending)
            }
            OutcomeEvent::TurnAdvanced { to, turn_number, .. } => {
                write!(f, "turn {}: {} to act", turn_number, to)
            }
            OutcomeEvent::MatchEnded { result: MatchResult::Winner(player) } => {
                write!(f, "{} wins", player)
            }
            OutcomeEvent::MatchEnded { result: MatchResult::Tie } => write!(f, "the match is a tie"),
        }
    }
}
