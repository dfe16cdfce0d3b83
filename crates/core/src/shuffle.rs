//! Randomized deck ordering.

use rand::seq::SliceRandom;
use rand::Rng;

/// A uniformly random permutation of all question ids, with a reverse index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOrder {
    /// Question ids in deck order.
    order: Vec<usize>,

    /// `positions[id]` is the 0-based index of `id` inside `order`.
    positions: Vec<usize>,
}

impl DeckOrder {
    /// Shuffle the ids `0..total` with the given random source.
    pub fn shuffled<R: Rng + ?Sized>(total: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..total).collect();
        order.shuffle(rng);
        Self::from_order(order)
    }

    fn from_order(order: Vec<usize>) -> Self {
        let mut positions = vec![0; order.len()];
        for (idx, &id) in order.iter().enumerate() {
            positions[id] = idx;
        }
        Self { order, positions }
    }

    /// Number of ids in the permutation.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The full permutation.
    pub fn ids(&self) -> &[usize] {
        &self.order
    }

    /// The first `min(requested, len)` ids; a non-positive request yields none.
    pub fn included(&self, requested: i64) -> &[usize] {
        &self.order[..self.clamp(requested)]
    }

    /// Clamp a requested question count to `0..=len`.
    pub fn clamp(&self, requested: i64) -> usize {
        usize::try_from(requested).map_or(0, |k| k.min(self.len()))
    }

    /// 1-based position of `id` inside the deck, or `None` for an unknown id.
    pub fn deck_position(&self, id: usize) -> Option<usize> {
        self.positions.get(id).map(|idx| idx + 1)
    }
}
