//! Command rejection taxonomy.
//!
//! Every error is a local, recoverable rejection: the state handed to the
//! engine is left exactly as it was.

use thiserror::Error;

use super::PlayerId;
use crate::cards::CardId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    // === Turn / sub-state ===
    #[error("it is not {player}'s turn")]
    NotYourTurn { player: PlayerId },

    #[error("command does not match the pending decision")]
    WrongPendingSubstate,

    #[error("{player} is not seated in this match")]
    UnknownPlayer { player: PlayerId },

    // === Hand / legality ===
    #[error("{card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: CardId },

    #[error("{card} cannot be played directly")]
    CardNotPlayable { card: CardId },

    #[error("a combo needs 2 or 3 cards, got {count}")]
    ComboSizeInvalid { count: usize },

    #[error("combo cards must share one cat variant")]
    ComboNotMatching,

    #[error("invalid target {target:?}")]
    InvalidTarget { target: Option<PlayerId> },

    // === Pile bounds ===
    #[error("the draw pile is empty")]
    DrawPileEmpty,

    #[error("the pile is empty")]
    EmptyPile,

    #[error("placement index {index} is outside 0..={len}")]
    InvalidPlacement { index: usize, len: usize },

    // === Setup ===
    #[error("{count} players is below the minimum of {min}")]
    InsufficientPlayers { count: usize, min: usize },

    #[error("{count} players is above the maximum of {max}")]
    TooManyPlayers { count: usize, max: usize },

    #[error("need {needed} defuse cards, catalog has {available}")]
    InsufficientDefuseCards { needed: usize, available: usize },

    #[error("need {needed} exploding kittens, catalog has {available}")]
    InsufficientExplodingKittens { needed: usize, available: usize },

    #[error("dealing needs {needed} cards, working pile has {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error("{card} is not in the catalog")]
    UnknownCard { card: CardId },

    // === Terminal ===
    #[error("the match is over")]
    CommandAfterMatchOver,

    // === Persistence hand-off ===
    #[error("snapshot encoding failed: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        Self::Snapshot(err.to_string())
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_subject() {
        let err = EngineError::CardNotInHand {
            player: PlayerId::new(1),
            card: CardId::new(9),
        };
        assert_eq!(err.to_string(), "Card(9) is not in Player 1's hand");

        let err = EngineError::InvalidPlacement { index: 12, len: 10 };
        assert_eq!(err.to_string(), "placement index 12 is outside 0..=10");
    }
}
