//! Draw and discard piles.
//!
//! ## Key Types
//!
//! - `Pile`: Ordered card ids, top first, with shuffle/draw/insert/discard
//! - `InsertPosition`: Where a card goes back into a pile

pub mod pile;

pub use pile::{InsertPosition, Pile};
