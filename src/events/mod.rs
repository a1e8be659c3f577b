//! Outcome events returned by every successful command.
//!
//! ## Key Types
//!
//! - `OutcomeEvent`: One public fact about a resolved command

mod event;

pub use event::OutcomeEvent;
