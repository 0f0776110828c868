//! Weighted and uniform selection.
//!
//! A [`WeightedTable`] is validated once at construction (non-empty, every
//! weight positive and finite) so that drawing from it never fails.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// One `(value, weight)` row of a weighted table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedEntry<T> {
    /// The value returned when this entry is drawn.
    pub value: T,
    /// Relative weight; always greater than zero.
    pub weight: f64,
}

/// An ordered, non-empty table of weighted values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeightedEntry<T>>", into = "Vec<WeightedEntry<T>>")]
#[serde(bound(
    serialize = "T: Clone + Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct WeightedTable<T> {
    entries: Vec<WeightedEntry<T>>,
    total: f64,
}

impl<T> WeightedTable<T> {
    /// Build a table from `(value, weight)` pairs.
    pub fn new(pairs: impl IntoIterator<Item = (T, f64)>) -> MechResult<Self> {
        let entries = pairs
            .into_iter()
            .map(|(value, weight)| WeightedEntry { value, weight })
            .collect();
        Self::from_entries(entries)
    }

    /// Build a table from already-constructed entries.
    pub fn from_entries(entries: Vec<WeightedEntry<T>>) -> MechResult<Self> {
        if entries.is_empty() {
            return Err(MechError::EmptyTable);
        }
        for (index, entry) in entries.iter().enumerate() {
            if !(entry.weight.is_finite() && entry.weight > 0.0) {
                return Err(MechError::InvalidWeight {
                    index,
                    weight: entry.weight,
                });
            }
        }
        let total: f64 = entries.iter().map(|e| e.weight).sum();
        if !total.is_finite() {
            return Err(MechError::NonFiniteTotal);
        }
        Ok(Self { entries, total })
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    /// The entries in table order.
    pub fn entries(&self) -> &[WeightedEntry<T>] {
        &self.entries
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the values in table order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Draw a value with probability proportional to its weight.
    ///
    /// A uniform `r` in `[0, total)` selects the first entry whose cumulative
    /// weight exceeds it. If rounding drift walks past the end, the last entry
    /// is returned.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        let r = rng.random_range(0.0..self.total);
        let mut cumulative = 0.0;
        for entry in &self.entries {
            cumulative += entry.weight;
            if cumulative > r {
                return &entry.value;
            }
        }
        &self.entries[self.entries.len() - 1].value
    }
}

impl<T> TryFrom<Vec<WeightedEntry<T>>> for WeightedTable<T> {
    type Error = MechError;

    fn try_from(entries: Vec<WeightedEntry<T>>) -> MechResult<Self> {
        Self::from_entries(entries)
    }
}

impl<T> From<WeightedTable<T>> for Vec<WeightedEntry<T>> {
    fn from(table: WeightedTable<T>) -> Self {
        table.entries
    }
}

/// Pick a uniformly random element from a slice, or `None` if it is empty.
pub fn choose_uniform<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        Some(&items[rng.random_range(0..items.len())])
    }
}
