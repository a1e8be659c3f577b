//! Card system: definitions and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for one physical card
//! - `CardKind`: What the card does (closed set)
//! - `CatVariant`: Cat breed used for combo matching
//! - `CardCatalog`: Id lookup and deck planning
//! - `DeckPlan`: The split of a catalog used to set up one match

pub mod catalog;
pub mod definition;

pub use catalog::{CardCatalog, DeckPlan};
pub use definition::{Card, CardId, CardKind, CatVariant};
