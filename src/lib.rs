//! # kitten-engine
//!
//! Rules engine for an exploding-kitten style card game: players draw from
//! a shared deck, risk drawing an instant-loss card, and play cards to bend
//! turn order, the deck, and each other's hands.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: `Engine::apply` takes a state and a command and
//!    returns a new state plus events, or a typed rejection. The input state
//!    is never modified.
//!
//! 2. **Injected randomness**: Shuffles, random placements, random steals,
//!    and the starting seat all draw from a caller-supplied `RandomSource`.
//!    The same seed and commands always replay the same match.
//!
//! 3. **Explicit sub-states**: Decisions that wait on a human (placing a
//!    defused bomb, choosing a card to give away) are phases of the state
//!    machine, resumable after any delay.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) state cloning via `im-rs`, so every
//!   command works on a copy that is simply dropped on rejection.
//!
//! - **N-Player**: Seats are `PlayerId`s; eliminated seats are skipped when
//!   the turn passes, in the original seating order.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration, errors, commands, state
//! - `cards`: Card kinds and the catalog
//! - `piles`: Draw and discard piles
//! - `effects`: Per-card effects and cat combos
//! - `events`: Outcome events for broadcast layers
//! - `rules`: Engine, setup, turn order, legal commands
//! - `status`: Read-only player status and match result
//!
//! ## Example
//!
//! ```
//! use kitten_engine::{Command, Engine, GameRng, PlayerId};
//!
//! let engine = Engine::standard();
//! let mut rng = GameRng::new(7);
//! let state = engine.initialize_match(4, &mut rng).unwrap();
//!
//! let owner = state.turn_owner;
//! let transition = engine.apply(&state, owner, &Command::DrawCard, &mut rng).unwrap();
//! assert_eq!(transition.state.history.len(), 1);
//! assert!(engine.status(&transition.state, PlayerId::new(0)).is_ok());
//! ```

pub mod core;
pub mod cards;
pub mod piles;
pub mod effects;
pub mod events;
pub mod rules;
pub mod status;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    GameRng, GameRngState, RandomSource,
    DeckComposition, MatchConfig, StartingPlayer,
    EngineError, EngineResult,
    ActionRecord, Command,
    GameState, TurnPhase,
};

pub use crate::cards::{Card, CardCatalog, CardId, CardKind, CatVariant, DeckPlan};

pub use crate::piles::{InsertPosition, Pile};

pub use crate::effects::EffectResolver;

pub use crate::events::OutcomeEvent;

pub use crate::rules::{Engine, Transition};

pub use crate::status::{MatchResult, PlayerStatus};
