//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a finished match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// Sole survivor.
    Winner(PlayerId),
    /// No survivor. Unreachable with one draw at a time, kept so every
    /// elimination count has a defined outcome.
    Tie,
}

impl MatchResult {
    /// Decide the outcome from the players still standing.
    ///
    /// Returns `None` while more than one player is active.
    #[must_use]
    pub fn from_survivors(mut survivors: impl Iterator<Item = PlayerId>) -> Option<Self> {
        match (survivors.next(), survivors.next()) {
            (None, _) => Some(MatchResult::Tie),
            (Some(winner), None) => Some(MatchResult::Winner(winner)),
            (Some(_), Some(_)) => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, MatchResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            MatchResult::Winner(player) => Some(*player),
            MatchResult::Tie => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_is_winner() {
        let result = MatchResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));

        let tie = MatchResult::Tie;
        assert!(!tie.is_winner(PlayerId::new(0)));
        assert_eq!(tie.winner(), None);
    }

    #[test]
    fn test_from_survivors() {
        assert_eq!(MatchResult::from_survivors(std::iter::empty()), Some(MatchResult::Tie));
        assert_eq!(
            MatchResult::from_survivors([PlayerId::new(2)].into_iter()),
            Some(MatchResult::Winner(PlayerId::new(2)))
        );
        assert_eq!(
            MatchResult::from_survivors([PlayerId::new(0), PlayerId::new(2)].into_iter()),
            None
        );
    }
}
