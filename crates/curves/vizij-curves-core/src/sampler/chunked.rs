//! One-second bucketing of long curves.
//!
//! The key sequence is split by `floor(time)` into buckets covering
//! `[k, k + 1)`. Each bucket also carries the last key at or before `k` and
//! the first key at or after `k + 1`, so it evaluates its whole second on its
//! own. A query picks its bucket by index and only scans that bucket.

use crate::curve::CurveExport;
use crate::degree::Degree;
use crate::error::CurveError;
use crate::keyframe::{CubicKey, Keyframe, KeyframeSequence};
use crate::sampler::{check_values, CurveSampler, Sampler};
use crate::value::CurveValue;

/// Width of one bucket in seconds.
pub const BUCKET_SECONDS: f32 = 1.0;

/// Upper bound on the bucket count of one chunked sampler (about 12 days of
/// animation at one bucket per second).
pub const MAX_BUCKETS: usize = 1 << 20;

/// Sampler made of one inner sampler per animated second.
#[derive(Clone, Debug)]
pub struct ChunkedSampler<T> {
    buckets: Vec<CurveSampler<T>>,
    degree: Degree,
    key_count: usize,
    start_time: f32,
    end_time: f32,
}

impl<T: CurveValue> ChunkedSampler<T> {
    /// Bucket a `(time, value)` sequence, building each bucket with `make_bucket`.
    /// Every bucket must report `degree`.
    pub fn from_keys<F>(
        keys: &KeyframeSequence<T>,
        degree: Degree,
        make_bucket: F,
    ) -> Result<Self, CurveError>
    where
        F: FnMut(KeyframeSequence<T>) -> Result<CurveSampler<T>, CurveError>,
    {
        check_values(keys.iter().map(|k| &k.value))?;
        let count = checked_bucket_count(keys)?;
        let parts = partition(keys.as_slice(), count, T::clone_value);
        Self::assemble(parts, make_bucket, degree, keys)
    }

    /// Bucket a cubic `(time, (in, value, out))` sequence.
    pub fn from_cubic_keys<F>(
        keys: &KeyframeSequence<CubicKey<T>>,
        make_bucket: F,
    ) -> Result<Self, CurveError>
    where
        F: FnMut(KeyframeSequence<CubicKey<T>>) -> Result<CurveSampler<T>, CurveError>,
    {
        check_values(keys.iter().flat_map(|k| k.value.parts()))?;
        let count = checked_bucket_count(keys)?;
        let parts = partition(keys.as_slice(), count, |key: &CubicKey<T>| {
            CubicKey::new(
                key.tangent_in.clone_value(),
                key.value.clone_value(),
                key.tangent_out.clone_value(),
            )
        });
        Self::assemble(parts, make_bucket, Degree::Cubic, keys)
    }

    fn assemble<V, F>(
        parts: Vec<KeyframeSequence<V>>,
        mut make_bucket: F,
        degree: Degree,
        source: &KeyframeSequence<V>,
    ) -> Result<Self, CurveError>
    where
        F: FnMut(KeyframeSequence<V>) -> Result<CurveSampler<T>, CurveError>,
    {
        if parts.is_empty() {
            return Err(CurveError::EmptySequence);
        }
        let mut buckets = Vec::with_capacity(parts.len());
        for part in parts {
            let bucket = make_bucket(part)?;
            if bucket.degree() != degree {
                return Err(CurveError::BucketDegreeMismatch {
                    expected: degree,
                    actual: bucket.degree(),
                });
            }
            buckets.push(bucket);
        }
        log::debug!(
            "chunked {degree} sampler: {} keys in {} buckets",
            source.len(),
            buckets.len()
        );
        Ok(Self {
            buckets,
            degree,
            key_count: source.len(),
            start_time: source.start_time(),
            end_time: source.end_time(),
        })
    }

    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    #[inline]
    pub fn buckets(&self) -> &[CurveSampler<T>] {
        &self.buckets
    }

    /// Number of distinct keys in the source sequence.
    #[inline]
    pub fn key_count(&self) -> usize {
        self.key_count
    }

    #[inline]
    pub fn start_time(&self) -> f32 {
        self.start_time
    }

    #[inline]
    pub fn end_time(&self) -> f32 {
        self.end_time
    }

    /// Rebuild the source keys by concatenating buckets and dropping the
    /// duplicated boundary keys.
    pub(crate) fn export_as(&self, requested: Degree) -> Result<CurveExport<T>, CurveError> {
        if requested != self.degree {
            return Err(CurveError::unsupported_conversion(self.degree, requested));
        }
        let mut parts = Vec::with_capacity(self.buckets.len());
        for bucket in &self.buckets {
            parts.push(bucket.export_anchored(requested)?);
        }
        Ok(match requested {
            Degree::Step => CurveExport::Step(merge(parts.into_iter().filter_map(|p| match p {
                CurveExport::Step(keys) => Some(keys),
                _ => None,
            }))),
            Degree::Linear => CurveExport::Linear(merge(parts.into_iter().filter_map(|p| {
                match p {
                    CurveExport::Linear(keys) => Some(keys),
                    _ => None,
                }
            }))),
            Degree::Cubic => CurveExport::Spline(merge(parts.into_iter().filter_map(|p| {
                match p {
                    CurveExport::Spline(keys) => Some(keys),
                    _ => None,
                }
            }))),
        })
    }
}

impl<T: CurveValue> Sampler<T> for ChunkedSampler<T> {
    fn get_point(&self, time: f32) -> T {
        // NaN.max(0.0) is 0.0; +inf saturates to the last bucket.
        let offset = time.max(0.0);
        let index = ((offset / BUCKET_SECONDS).floor() as usize).min(self.buckets.len() - 1);
        self.buckets[index].get_point(offset)
    }

    #[inline]
    fn degree(&self) -> Degree {
        self.degree
    }
}

/// Number of buckets needed to cover `[0, last_time]`, or `None` past
/// [`MAX_BUCKETS`].
pub(crate) fn bucket_count_for(last_time: f32) -> Option<usize> {
    if last_time.is_nan() || last_time < 0.0 {
        return Some(1);
    }
    let whole = (last_time / BUCKET_SECONDS).floor();
    if whole >= MAX_BUCKETS as f32 {
        return None;
    }
    Some(whole as usize + 1)
}

fn checked_bucket_count<V>(keys: &KeyframeSequence<V>) -> Result<usize, CurveError> {
    bucket_count_for(keys.end_time()).ok_or(CurveError::SpanTooLong {
        end_time: keys.end_time(),
        max_buckets: MAX_BUCKETS,
    })
}

/// Split ascending `keys` into `count` self-sufficient one-second buckets,
/// copying every value with `copy` so buckets own their data.
fn partition<V>(
    keys: &[Keyframe<V>],
    count: usize,
    copy: impl Fn(&V) -> V,
) -> Vec<KeyframeSequence<V>> {
    if keys.is_empty() {
        return Vec::new();
    }
    let last_index = keys.len() - 1;
    (0..count)
        .map(|k| {
            let start = k as f32 * BUCKET_SECONDS;
            let end = start + BUCKET_SECONDS;
            // Last key at or before `start` (or the first key if none).
            let first = keys
                .partition_point(|key| key.time <= start)
                .saturating_sub(1);
            // First key at or after `end` (or the last key if none).
            let last = keys.partition_point(|key| key.time < end).min(last_index);
            keys[first..=last]
                .iter()
                .map(|key| Keyframe::new(key.time, copy(&key.value)))
                .collect()
        })
        .collect()
}

/// Concatenate bucket keys, skipping keys not after the previous one.
fn merge<V: Clone>(parts: impl Iterator<Item = KeyframeSequence<V>>) -> KeyframeSequence<V> {
    let mut out: Vec<Keyframe<V>> = Vec::new();
    for part in parts {
        for key in part.iter() {
            if out.last().map_or(true, |prev| key.time > prev.time) {
                out.push(key.clone());
            }
        }
    }
    KeyframeSequence::new(out)
}
