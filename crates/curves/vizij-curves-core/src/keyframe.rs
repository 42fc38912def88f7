//! Keyframes and the immutable ordered container samplers are built from.

use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CurveError;

/// A single control point: a value at a time in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<V> {
    pub time: f32,
    pub value: V,
}

impl<V> Keyframe<V> {
    #[inline]
    pub fn new(time: f32, value: V) -> Self {
        Self { time, value }
    }
}

impl<V> From<(f32, V)> for Keyframe<V> {
    #[inline]
    fn from((time, value): (f32, V)) -> Self {
        Self { time, value }
    }
}

/// Value and tangents of a cubic Hermite key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CubicKey<T> {
    pub tangent_in: T,
    pub value: T,
    pub tangent_out: T,
}

impl<T> CubicKey<T> {
    #[inline]
    pub fn new(tangent_in: T, value: T, tangent_out: T) -> Self {
        Self {
            tangent_in,
            value,
            tangent_out,
        }
    }

    /// `[tangent_in, value, tangent_out]`.
    #[inline]
    pub fn parts(&self) -> [&T; 3] {
        [&self.tangent_in, &self.value, &self.tangent_out]
    }
}

/// Owned, immutable, random-access sequence of keyframes ordered by time.
///
/// Cloning shares the backing storage. Times are expected to be strictly
/// ascending; [`KeyframeSequence::validate`] checks that and samplers call it
/// when [`crate::SamplerConfig::validate_order`] is set.
#[derive(Debug, PartialEq)]
pub struct KeyframeSequence<V> {
    keys: Arc<[Keyframe<V>]>,
}

impl<V> Clone for KeyframeSequence<V> {
    fn clone(&self) -> Self {
        Self {
            keys: Arc::clone(&self.keys),
        }
    }
}

impl<V> Default for KeyframeSequence<V> {
    fn default() -> Self {
        Self {
            keys: Arc::from(Vec::new()),
        }
    }
}

impl<V> KeyframeSequence<V> {
    /// Capture `keys` as-is. No ordering check is made here.
    pub fn new(keys: Vec<Keyframe<V>>) -> Self {
        Self {
            keys: Arc::from(keys),
        }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f32, V)>,
    {
        Self::new(pairs.into_iter().map(Keyframe::from).collect())
    }

    /// Ensure times are finite and strictly ascending.
    pub fn validate(&self) -> Result<(), CurveError> {
        let mut previous = f32::NEG_INFINITY;
        for (index, key) in self.keys.iter().enumerate() {
            if !key.time.is_finite() || key.time <= previous {
                return Err(CurveError::UnsortedKeys {
                    index,
                    previous,
                    current: key.time,
                });
            }
            previous = key.time;
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Keyframe<V>] {
        &self.keys
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe<V>> {
        self.keys.iter()
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe<V>> {
        self.keys.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe<V>> {
        self.keys.last()
    }

    /// Time of the first key, or 0 when empty.
    #[inline]
    pub fn start_time(&self) -> f32 {
        self.first().map_or(0.0, |k| k.time)
    }

    /// Time of the last key, or 0 when empty.
    #[inline]
    pub fn end_time(&self) -> f32 {
        self.last().map_or(0.0, |k| k.time)
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end_time() - self.start_time()
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        self.keys.iter().map(|k| k.time)
    }
}

impl<V> From<Vec<Keyframe<V>>> for KeyframeSequence<V> {
    fn from(keys: Vec<Keyframe<V>>) -> Self {
        Self::new(keys)
    }
}

impl<V> FromIterator<Keyframe<V>> for KeyframeSequence<V> {
    fn from_iter<I: IntoIterator<Item = Keyframe<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<V> Index<usize> for KeyframeSequence<V> {
    type Output = Keyframe<V>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.keys[index]
    }
}

impl<'a, V> IntoIterator for &'a KeyframeSequence<V> {
    type Item = &'a Keyframe<V>;
    type IntoIter = std::slice::Iter<'a, Keyframe<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<V: Serialize> Serialize for KeyframeSequence<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.keys.as_ref().serialize(serializer)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for KeyframeSequence<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<Keyframe<V>>::deserialize(deserializer).map(Self::new)
    }
}
