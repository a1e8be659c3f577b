//! Card catalog and deck planning.
//!
//! The `CardCatalog` holds every card that can appear in a match and
//! resolves ids to kinds. It is built once and never changes while a match
//! is running.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardKind, CatVariant};
use crate::core::config::{DeckComposition, MatchConfig};
use crate::core::error::{EngineError, EngineResult};

/// Registry of all cards, keyed by id.
///
/// ## Example
///
/// ```
/// use kitten_engine::cards::{CardCatalog, CardKind};
///
/// let catalog = CardCatalog::standard();
/// assert_eq!(catalog.len(), 51);
/// assert_eq!(catalog.ids_of_kind(CardKind::Defuse).count(), 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, Card>,
    /// Ids in registration order.
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical deck.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_composition(&DeckComposition::standard())
    }

    /// Build a catalog with the given number of cards per kind.
    ///
    /// Ids are assigned sequentially in kind order.
    #[must_use]
    pub fn from_composition(composition: &DeckComposition) -> Self {
        let mut catalog = Self::new();

        let fixed = [
            (CardKind::ExplodingKitten, composition.exploding_kittens),
            (CardKind::Defuse, composition.defuses),
            (CardKind::Attack, composition.attacks),
            (CardKind::Skip, composition.skips),
            (CardKind::Shuffle, composition.shuffles),
            (CardKind::SeeFuture, composition.see_futures),
            (CardKind::Favor, composition.favors),
        ];
        for (kind, count) in fixed {
            for _ in 0..count {
                catalog.register(kind);
            }
        }
        for variant in CatVariant::ALL {
            for _ in 0..composition.cats_per_variant {
                catalog.register(CardKind::Cat(variant));
            }
        }

        catalog
    }

    /// Register a card with the next free id and return that id.
    pub fn register(&mut self, kind: CardKind) -> CardId {
        let id = CardId::new(self.order.len() as u32);
        self.cards.insert(id, Card::new(id, kind));
        self.order.push(id);
        id
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Get a card's kind, failing for ids this catalog never issued.
    pub fn kind_of(&self, id: CardId) -> EngineResult<CardKind> {
        self.get(id)
            .map(|card| card.kind)
            .ok_or(EngineError::UnknownCard { card: id })
    }

    /// Check whether an id belongs to a card of `kind`.
    #[must_use]
    pub fn is_kind(&self, id: CardId, kind: CardKind) -> bool {
        self.get(id).is_some_and(|card| card.kind == kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate over all cards in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }

    /// Ids of every card of one kind, in id order.
    pub fn ids_of_kind(&self, kind: CardKind) -> impl Iterator<Item = CardId> + '_ {
        self.iter().filter(move |c| c.kind == kind).map(|c| c.id)
    }

    /// Split the catalog into the cards a match of `player_count` starts with.
    ///
    /// Pure: nothing is shuffled here. Surplus exploding kittens stay out of
    /// the match.
    pub fn build_deck_for(&self, player_count: usize, config: &MatchConfig) -> EngineResult<DeckPlan> {
        let defuses: Vec<CardId> = self.ids_of_kind(CardKind::Defuse).collect();
        let needed = player_count * config.defuses_per_player;
        if defuses.len() < needed {
            return Err(EngineError::InsufficientDefuseCards {
                needed,
                available: defuses.len(),
            });
        }

        let bomb_pool: Vec<CardId> = self.ids_of_kind(CardKind::ExplodingKitten).collect();
        let bomb_count = player_count.saturating_sub(1);
        if bomb_pool.len() < bomb_count {
            return Err(EngineError::InsufficientExplodingKittens {
                needed: bomb_count,
                available: bomb_pool.len(),
            });
        }

        let (dealt, spare) = defuses.split_at(needed);
        let mut working_pile = spare.to_vec();
        working_pile.extend(
            self.iter()
                .filter(|c| !matches!(c.kind, CardKind::Defuse | CardKind::ExplodingKitten))
                .map(|c| c.id),
        );

        Ok(DeckPlan {
            dealt_defuses: dealt.to_vec(),
            working_pile,
            bombs: bomb_pool[..bomb_count].to_vec(),
        })
    }
}

/// The cards a match is set up from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckPlan {
    /// Defuses dealt before the shuffle, `defuses_per_player` per seat in
    /// seat order.
    pub dealt_defuses: Vec<CardId>,
    /// Remaining defuses and every non-bomb card, unshuffled.
    pub working_pile: Vec<CardId>,
    /// Exploding kittens added after the deal.
    pub bombs: Vec<CardId>,
}

impl DeckPlan {
    /// Every card that takes part in the match.
    pub fn cards(&self) -> impl Iterator<Item = CardId> + '_ {
        self.dealt_defuses
            .iter()
            .chain(&self.working_pile)
            .chain(&self.bombs)
            .copied()
    }
}
