//! Sampler construction settings.

use serde::{Deserialize, Serialize};

/// Settings consulted when building samplers from keyframe sequences.
/// Nothing here is read on the per-frame path.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Minimum key count before a sampler is wrapped in one-second buckets.
    pub chunk_threshold: usize,
    /// Wrap eligible samplers in the chunked sampler.
    pub chunking: bool,
    /// Most buckets a chunked sampler may use per source key. Sparse curves
    /// over long spans stay unchunked instead of allocating a bucket per second.
    pub max_buckets_per_key: usize,
    /// Check the strictly-ascending key time invariant on construction.
    /// Defaults to on in debug builds only.
    pub validate_order: bool,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            chunk_threshold: 3,
            chunking: true,
            max_buckets_per_key: 16,
            validate_order: cfg!(debug_assertions),
        }
    }
}

impl SamplerConfig {
    pub fn with_chunking(mut self, chunking: bool) -> Self {
        self.chunking = chunking;
        self
    }

    pub fn with_chunk_threshold(mut self, threshold: usize) -> Self {
        self.chunk_threshold = threshold;
        self
    }

    pub fn with_max_buckets_per_key(mut self, max: usize) -> Self {
        self.max_buckets_per_key = max;
        self
    }

    pub fn with_validate_order(mut self, validate: bool) -> Self {
        self.validate_order = validate;
        self
    }

    /// Whether a sequence of `key_count` keys should be chunked.
    #[inline]
    pub fn should_chunk(&self, key_count: usize) -> bool {
        self.chunking && key_count >= self.chunk_threshold.max(2)
    }

    /// Whether `buckets` one-second buckets are acceptable for `key_count` keys.
    #[inline]
    pub fn fits_bucket_budget(&self, key_count: usize, buckets: usize) -> bool {
        buckets <= key_count.saturating_mul(self.max_buckets_per_key)
    }
}
