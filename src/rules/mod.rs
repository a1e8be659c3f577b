//! Match rules: setup, the command state machine, and turn order.
//!
//! `Engine` validates whose turn it is and which sub-decision is pending,
//! then hands card effects to `effects` and turn bookkeeping to `turn`.
//!
//! ## State machine
//!
//! ```text
//! AwaitingAction ──draw bomb + defuse──> AwaitingDefusePlacement ──place──> AwaitingAction
//!       │  └──play Favor──> AwaitingFavorChoice ──choose──> AwaitingAction
//!       └──last opponent explodes──> MatchOver
//! ```

mod draw;
mod engine;
mod legal;
mod setup;
pub mod turn;

pub use engine::{Engine, Transition};
pub use legal::legal_commands;
pub use turn::next_active;
