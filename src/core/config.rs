//! Match configuration.
//!
//! Hosts configure the engine once by providing:
//! - `DeckComposition`: how many of each card kind the catalog holds
//! - `MatchConfig`: player limits, dealing rules, starting-seat policy
//!
//! Both are plain serde values so a host can load them from wherever it
//! keeps its settings.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Number of cards of each kind in a catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckComposition {
    pub exploding_kittens: usize,
    pub defuses: usize,
    pub attacks: usize,
    pub skips: usize,
    pub shuffles: usize,
    pub see_futures: usize,
    pub favors: usize,
    /// Copies of each cat variant.
    pub cats_per_variant: usize,
}

impl DeckComposition {
    /// The canonical 51-card deck.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            exploding_kittens: 4,
            defuses: 6,
            attacks: 4,
            skips: 4,
            shuffles: 4,
            see_futures: 5,
            favors: 4,
            cats_per_variant: 4,
        }
    }
}

impl Default for DeckComposition {
    fn default() -> Self {
        Self::standard()
    }
}

/// Policy for choosing who takes the first turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartingPlayer {
    /// Always start with this seat.
    Fixed(PlayerId),
    /// Pick a seat uniformly with the match RNG.
    Random,
}

/// Rules that are fixed for the lifetime of a match.
///
/// ## Example
///
/// ```
/// use kitten_engine::core::{MatchConfig, PlayerId, StartingPlayer};
///
/// let config = MatchConfig::default()
///     .with_hand_size(5)
///     .with_starting_player(StartingPlayer::Fixed(PlayerId::new(0)));
///
/// assert_eq!(config.hand_size, 5);
/// assert_eq!(config.min_players, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub min_players: usize,
    pub max_players: usize,

    /// Cards dealt from the working pile, on top of the dealt defuses.
    pub hand_size: usize,

    /// Defuse cards dealt to each player before the shuffle.
    pub defuses_per_player: usize,

    /// Cards revealed by See the Future.
    pub see_future_count: usize,

    /// Reject setups whose working pile cannot fill every hand.
    /// When false, late seats simply receive fewer cards.
    pub strict_deal: bool,

    pub starting_player: StartingPlayer,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_players: 2,
            max_players: 5,
            hand_size: 7,
            defuses_per_player: 1,
            see_future_count: 3,
            strict_deal: false,
            starting_player: StartingPlayer::Random,
        }
    }
}

impl MatchConfig {
    /// Set the number of cards dealt per hand.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the allowed player range.
    #[must_use]
    pub fn with_player_limits(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the starting-seat policy.
    #[must_use]
    pub fn with_starting_player(mut self, policy: StartingPlayer) -> Self {
        self.starting_player = policy;
        self
    }

    /// Reject deals that would leave a hand short.
    #[must_use]
    pub fn strict_deal(mut self, strict: bool) -> Self {
        self.strict_deal = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_composition_size() {
        let deck = DeckComposition::standard();
        let total = deck.exploding_kittens
            + deck.defuses
            + deck.attacks
            + deck.skips
            + deck.shuffles
            + deck.see_futures
            + deck.favors
            + deck.cats_per_variant * 5;
        assert_eq!(total, 51);
    }

    #[test]
    fn test_config_builder() {
        let config = MatchConfig::default()
            .with_player_limits(2, 4)
            .strict_deal(true)
            .with_starting_player(StartingPlayer::Fixed(PlayerId::new(1)));

        assert_eq!(config.max_players, 4);
        assert!(config.strict_deal);
        assert_eq!(config.starting_player, StartingPlayer::Fixed(PlayerId::new(1)));
        assert_eq!(config.see_future_count, 3);
    }

    #[test]
    fn test_config_serialization() {
        let config = MatchConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MatchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
