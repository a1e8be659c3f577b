//! Card definitions.
//!
//! Every physical card has its own `CardId`. Its `CardKind` decides what
//! happens when it is played or drawn; cards of the same kind (four Attacks,
//! four Taco Cats) are interchangeable apart from their id.

use serde::{Deserialize, Serialize};

/// Unique identifier for one physical card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Cat cards have no effect alone; matching variants form combos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CatVariant {
    Taco,
    Rainbow,
    Beard,
    Melon,
    Potato,
}

impl CatVariant {
    pub const ALL: [CatVariant; 5] = [
        CatVariant::Taco,
        CatVariant::Rainbow,
        CatVariant::Beard,
        CatVariant::Melon,
        CatVariant::Potato,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CatVariant::Taco => "Taco",
            CatVariant::Rainbow => "Rainbow",
            CatVariant::Beard => "Beard",
            CatVariant::Melon => "Melon",
            CatVariant::Potato => "Potato",
        }
    }
}

/// What a card does. Closed set: effect dispatch is an exhaustive match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    ExplodingKitten,
    Defuse,
    Attack,
    Skip,
    Shuffle,
    SeeFuture,
    Favor,
    Cat(CatVariant),
}

impl CardKind {
    /// Display name shared by every card of this kind.
    #[must_use]
    pub fn display_name(self) -> String {
        match self {
            CardKind::ExplodingKitten => "Exploding Kitten".to_string(),
            CardKind::Defuse => "Defuse".to_string(),
            CardKind::Attack => "Attack".to_string(),
            CardKind::Skip => "Skip".to_string(),
            CardKind::Shuffle => "Shuffle".to_string(),
            CardKind::SeeFuture => "See the Future".to_string(),
            CardKind::Favor => "Favor".to_string(),
            CardKind::Cat(variant) => format!("{} Cat", variant.name()),
        }
    }

    /// The cat variant, if this is a cat card.
    #[must_use]
    pub const fn cat_variant(self) -> Option<CatVariant> {
        match self {
            CardKind::Cat(variant) => Some(variant),
            _ => None,
        }
    }

    /// Whether `PlayCard` must name another player.
    #[must_use]
    pub const fn needs_target(self) -> bool {
        matches!(self, CardKind::Favor)
    }

    /// Whether the card may be played from hand with `PlayCard`.
    ///
    /// Defuse is only spent by the explosion path, and exploding kittens
    /// never rest in a hand.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        !matches!(self, CardKind::ExplodingKitten | CardKind::Defuse)
    }
}

/// Immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub kind: CardKind,
    /// Display name (for UI and logs).
    pub name: String,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, kind: CardKind) -> Self {
        Self {
            id,
            kind,
            name: kind.display_name(),
        }
    }
}
