//! Card effects.
//!
//! Invoked by the engine after turn and phase checks pass:
//! - `EffectResolver`: single-card plays and the favor hand-over
//! - `combo`: cat combo validation and theft
//!
//! Effects mutate the engine's working copy of the state. Any error leaves
//! that copy to be dropped, so effects never need to undo anything.

pub mod combo;
mod resolver;

pub use combo::{play_combo, validate_combo};
pub use resolver::EffectResolver;
