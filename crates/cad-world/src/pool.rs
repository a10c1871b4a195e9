//! `WeightedPool<T>` — weighted random selection with failure as a value.
//!
//! Every selection site in the engine (zones, crime tables, scenario pools,
//! spawn locations) goes through this container.  The contract:
//!
//! - An entry is selected with probability `weight / total_weight`.
//! - Entries with weight ≤ 0 are never selected.
//! - A pool with no selectable entries returns `None` — never panics, never
//!   falls back to an arbitrary entry.
//! - Selection is a pure function of the pool contents and the RNG state, so
//!   a fixed seed reproduces the full selection sequence.

use cad_core::SimRng;

/// A pool of `(item, weight)` entries supporting weighted sampling.
#[derive(Clone, Debug)]
pub struct WeightedPool<T> {
    entries: Vec<(T, f64)>,
    /// Cached sum of the positive weights.
    total: f64,
}

impl<T> WeightedPool<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
        }
    }

    /// Add `item` with the given spawn weight.  Non-positive weights are kept
    /// in the pool (callers may re-weight later via rebuild) but are never
    /// selectable.
    pub fn push(&mut self, item: T, weight: f64) {
        if weight > 0.0 {
            self.total += weight;
        }
        self.entries.push((item, weight));
    }

    /// Sample one entry according to the configured weights.
    ///
    /// Returns `None` when the pool holds no entry with positive weight.
    pub fn try_spawn(&self, rng: &mut SimRng) -> Option<&T> {
        if self.total <= 0.0 {
            return None;
        }
        let mut roll = rng.gen_range(0.0..self.total);
        for (item, weight) in &self.entries {
            if *weight <= 0.0 {
                continue;
            }
            if roll < *weight {
                return Some(item);
            }
            roll -= *weight;
        }
        // f64 rounding can leave `roll` a hair beyond the final band; the
        // last selectable entry is the correct owner of that sliver.
        self.entries
            .iter()
            .rev()
            .find(|(_, w)| *w > 0.0)
            .map(|(item, _)| item)
    }

    /// Number of entries, selectable or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of the positive weights.  Zero means `try_spawn` always fails.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// Iterate `(item, weight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(T, f64)> {
        self.entries.iter()
    }
}

impl<T> Default for WeightedPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(T, f64)> for WeightedPool<T> {
    fn from_iter<I: IntoIterator<Item = (T, f64)>>(iter: I) -> Self {
        let mut pool = Self::new();
        for (item, weight) in iter {
            pool.push(item, weight);
        }
        pool
    }
}
