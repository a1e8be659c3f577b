//! Read-only summaries derived from a match state.
//!
//! ## Key Types
//!
//! - `PlayerStatus`: Whose turn, who is out, what a player can do
//! - `MatchResult`: Winner or tie once the match is over

mod outcome;
mod report;

pub use outcome::MatchResult;
pub use report::PlayerStatus;
