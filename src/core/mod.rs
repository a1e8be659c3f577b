//! Core engine types: players, state, commands, RNG, configuration, errors.
//!
//! These are the building blocks every other module works with. Hosts
//! configure a match through `MatchConfig` rather than by touching the rules.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod command;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState, RandomSource};
pub use config::{DeckComposition, MatchConfig, StartingPlayer};
pub use error::{EngineError, EngineResult};
pub use command::{ActionRecord, Command};
pub use state::{GameState, TurnPhase};
