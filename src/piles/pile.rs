//! Ordered card piles.
//!
//! A `Pile` is an ordered sequence of card ids with the top at index 0.
//! The draw pile is consumed from the top; the discard pile grows at the
//! end, so its most recent card is last.
//!
//! Backed by `im::Vector`, so cloning a pile as part of a state snapshot is
//! O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::CardId;
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::RandomSource;

/// Where to put a card being inserted into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InsertPosition {
    /// Index 0, the next card drawn.
    Top,
    /// After the last card.
    Bottom,
    /// Uniformly over `0..=len`, using the injected RNG.
    Random,
    /// Exact index in `0..=len`, counted from the top.
    Index(usize),
}

/// An ordered pile of cards, top first.
///
/// ## Usage
///
/// ```
/// use kitten_engine::cards::CardId;
/// use kitten_engine::core::GameRng;
/// use kitten_engine::piles::{InsertPosition, Pile};
///
/// let mut pile = Pile::from_cards([CardId::new(1), CardId::new(2)]);
/// let mut rng = GameRng::new(42);
///
/// pile.insert_at(CardId::new(9), InsertPosition::Top, &mut rng).unwrap();
/// assert_eq!(pile.draw_top().unwrap(), CardId::new(9));
/// assert_eq!(pile.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<CardId>,
}

impl Pile {
    /// Create a new empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards listed top first.
    pub fn from_cards(cards: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Up to `n` cards from the top, without removing them.
    #[must_use]
    pub fn peek(&self, n: usize) -> Vec<CardId> {
        self.cards.iter().take(n).copied().collect()
    }

    /// The most recently discarded card (last position).
    #[must_use]
    pub fn last(&self) -> Option<CardId> {
        self.cards.back().copied()
    }

    /// Fisher–Yates shuffle.
    ///
    /// Uniform for any uniform `RandomSource`, and deterministic for a
    /// seeded one.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.gen_index(i + 1);
            self.cards.swap(i, j);
        }
        trace!(len = self.cards.len(), "pile shuffled");
    }

    /// Remove and return the top card.
    pub fn draw_top(&mut self) -> EngineResult<CardId> {
        self.cards.pop_front().ok_or(EngineError::EmptyPile)
    }

    /// Insert a card, returning the index it landed at.
    ///
    /// `Index(i)` must satisfy `i <= len`.
    pub fn insert_at<R: RandomSource + ?Sized>(
        &mut self,
        card: CardId,
        position: InsertPosition,
        rng: &mut R,
    ) -> EngineResult<usize> {
        let len = self.cards.len();
        let index = match position {
            InsertPosition::Top => 0,
            InsertPosition::Bottom => len,
            InsertPosition::Random => rng.gen_index(len + 1),
            InsertPosition::Index(i) if i <= len => i,
            InsertPosition::Index(i) => {
                return Err(EngineError::InvalidPlacement { index: i, len });
            }
        };

        self.cards.insert(index, card);
        trace!(%card, index, "card inserted");
        Ok(index)
    }

    /// Append to the end (discard).
    pub fn discard(&mut self, card: CardId) {
        self.cards.push_back(card);
    }
}

impl FromIterator<CardId> for Pile {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        Self::from_cards(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::GameRng;

    fn ids(range: std::ops::Range<u32>) -> Vec<CardId> {
        range.map(CardId::new).collect()
    }

    /// Always picks the highest index it is allowed to.
    struct HighestIndex;

    impl RandomSource for HighestIndex {
        fn gen_index(&mut self, bound: usize) -> usize {
            bound - 1
        }
    }

    #[test]
    fn test_draw_top_takes_front() {
        let mut pile = Pile::from_cards(ids(0..3));

        assert_eq!(pile.draw_top(), Ok(CardId::new(0)));
        assert_eq!(pile.iter().collect::<Vec<_>>(), ids(1..3));
    }

    #[test]
    fn test_draw_top_empty() {
        let mut pile = Pile::new();
        assert_eq!(pile.draw_top(), Err(EngineError::EmptyPile));
    }

    #[test]
    fn test_insert_positions() {
        let mut rng = GameRng::new(1);
        let mut pile = Pile::from_cards(ids(0..3));

        assert_eq!(pile.insert_at(CardId::new(10), InsertPosition::Top, &mut rng), Ok(0));
        assert_eq!(pile.insert_at(CardId::new(11), InsertPosition::Bottom, &mut rng), Ok(4));
        assert_eq!(pile.insert_at(CardId::new(12), InsertPosition::Index(2), &mut rng), Ok(2));

        let order: Vec<_> = pile.iter().map(CardId::raw).collect();
        assert_eq!(order, vec![10, 0, 12, 1, 2, 11]);
    }

    #[test]
    fn test_insert_index_bounds() {
        let mut rng = GameRng::new(1);
        let mut pile = Pile::from_cards(ids(0..3));

        // len itself is a valid index (bottom)
        assert_eq!(pile.insert_at(CardId::new(10), InsertPosition::Index(3), &mut rng), Ok(3));

        let before = pile.clone();
        let err = pile.insert_at(CardId::new(11), InsertPosition::Index(5), &mut rng);
        assert_eq!(err, Err(EngineError::InvalidPlacement { index: 5, len: 4 }));
        assert_eq!(pile, before);
    }

    #[test]
    fn test_random_insert_covers_bottom() {
        let mut pile = Pile::from_cards(ids(0..4));
        let index = pile
            .insert_at(CardId::new(99), InsertPosition::Random, &mut HighestIndex)
            .unwrap();
        assert_eq!(index, 4);
        assert_eq!(pile.last(), Some(CardId::new(99)));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut pile = Pile::from_cards(ids(0..20));
        let before: Vec<_> = pile.iter().collect();

        pile.shuffle(&mut GameRng::new(42));

        let mut after: Vec<_> = pile.iter().collect();
        assert_ne!(before, after);
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_shuffle_deterministic() {
        let mut a = Pile::from_cards(ids(0..30));
        let mut b = a.clone();

        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));

        assert_eq!(a, b);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let pile = Pile::from_cards(ids(0..5));
        assert_eq!(pile.peek(3), ids(0..3));
        assert_eq!(pile.peek(10).len(), 5);
        assert_eq!(pile.len(), 5);
    }

    #[test]
    fn test_discard_appends() {
        let mut pile = Pile::new();
        pile.discard(CardId::new(1));
        pile.discard(CardId::new(2));
        assert_eq!(pile.last(), Some(CardId::new(2)));
    }
}
