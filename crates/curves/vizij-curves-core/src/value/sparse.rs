use serde::{Deserialize, Serialize};

use super::CurveValue;
use crate::interp::create_hermite_point_weights;
use crate::interp::functions::{hermite_f32, lerp_f32};

/// A small set of non-zero weights keyed by target index (morph targets,
/// skin influences). Indices not present are zero.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(u32, f32)>", into = "Vec<(u32, f32)>")]
pub struct SparseWeights {
    /// Sorted by index, no duplicates.
    entries: Vec<(u32, f32)>,
}

impl SparseWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary `(index, weight)` pairs. Later duplicates win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, f32)>,
    {
        let mut entries: Vec<(u32, f32)> = entries.into_iter().collect();
        // Stable sort keeps input order among equal indices; keep the last one.
        entries.sort_by_key(|&(index, _)| index);
        let mut deduped: Vec<(u32, f32)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            match deduped.last_mut() {
                Some(last) if last.0 == index => last.1 = weight,
                _ => deduped.push((index, weight)),
            }
        }
        Self { entries: deduped }
    }

    #[inline]
    pub fn get(&self, index: u32) -> f32 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map_or(0.0, |pos| self.entries[pos].1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f32)> + '_ {
        self.entries.iter().copied()
    }

    /// Sorted union of the indices present in any of `sets`.
    fn union_indices(sets: &[&SparseWeights]) -> Vec<u32> {
        let mut indices: Vec<u32> = sets
            .iter()
            .flat_map(|s| s.entries.iter().map(|&(i, _)| i))
            .collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

impl From<Vec<(u32, f32)>> for SparseWeights {
    fn from(entries: Vec<(u32, f32)>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<SparseWeights> for Vec<(u32, f32)> {
    fn from(weights: SparseWeights) -> Self {
        weights.entries
    }
}

/// Blends run over the union of indices, treating absent entries as zero.
impl CurveValue for SparseWeights {
    #[inline]
    fn zeroed(&self) -> Self {
        Self::new()
    }

    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        let entries = Self::union_indices(&[a, b])
            .into_iter()
            .map(|i| (i, lerp_f32(a.get(i), b.get(i), t)))
            .collect();
        Self { entries }
    }

    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        let w = create_hermite_point_weights(t);
        let entries = Self::union_indices(&[p0, out0, p1, in1])
            .into_iter()
            .map(|i| (i, hermite_f32(p0.get(i), out0.get(i), p1.get(i), in1.get(i), &w)))
            .collect();
        Self { entries }
    }
}
