//! Weighted drop selection.

use serde::{Deserialize, Serialize};

use crate::core::DropRng;

/// One droppable item with its selection weight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEntry<T> {
    /// The item dropped when this entry is selected.
    pub item: T,

    /// Selection weight. An entry with weight 0 is never selected.
    pub weight: u32,
}

impl<T> DropEntry<T> {
    /// Create an entry.
    pub fn new(item: T, weight: u32) -> Self {
        Self { item, weight }
    }
}

/// A weighted table of droppable items.
///
/// Selection is proportional to weight and deterministic under a seeded
/// [`DropRng`]: the same table and the same RNG state always pick the
/// same entry.
///
/// ## Example
///
/// ```
/// use glyphcast::core::DropRng;
/// use glyphcast::drops::DropDistribution;
///
/// let table = DropDistribution::new()
///     .with_entry("stick", 10)
///     .with_entry("gem", 1);
///
/// let mut rng = DropRng::new(7);
/// assert!(table.pick(&mut rng).is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropDistribution<T> {
    entries: Vec<DropEntry<T>>,
}

impl<T> DropDistribution<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, item: T, weight: u32) -> Self {
        self.add(item, weight);
        self
    }

    /// Add an entry.
    pub fn add(&mut self, item: T, weight: u32) {
        self.entries.push(DropEntry::new(item, weight));
    }

    /// The entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[DropEntry<T>] {
        &self.entries
    }

    /// Sum of all weights.
    #[must_use]
    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Number of entries, including zero-weight ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pick one item, weight-proportionally.
    ///
    /// Returns `None` when the table is empty or every weight is 0.
    pub fn pick(&self, rng: &mut DropRng) -> Option<&T> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }

        let mut roll = rng.roll(total);
        for entry in &self.entries {
            if roll < entry.weight {
                return Some(&entry.item);
            }
            roll -= entry.weight;
        }
        None
    }

    /// Pick an acceptable item, rerolling rejected picks.
    ///
    /// Each attempt draws from the full table; a pick the `accept`
    /// predicate rejects is discarded and rolled again, up to
    /// `max_rerolls` extra attempts. Returns `None` once the attempts are
    /// spent without an acceptable item.
    pub fn pick_with_rerolls(
        &self,
        rng: &mut DropRng,
        max_rerolls: u32,
        accept: impl Fn(&T) -> bool,
    ) -> Option<&T> {
        for _ in 0..=max_rerolls {
            if let Some(item) = self.pick(rng) {
                if accept(item) {
                    return Some(item);
                }
            }
        }
        None
    }
}

impl<T> Default for DropDistribution<T> {
    fn default() -> Self {
        Self::new()
    }
}
