//! Error types for curve construction and export.

use serde::{Deserialize, Serialize};

use crate::degree::Degree;

/// Faults raised at construction or export time. The per-frame sampling path
/// never produces one of these.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CurveError {
    /// Key times are not strictly ascending (or are not finite).
    #[error("Keyframe {index} at time {current} does not follow previous time {previous}")]
    UnsortedKeys {
        index: usize,
        previous: f32,
        current: f32,
    },

    /// Export requested in a degree other than the sampler's native one.
    #[error("Cannot export a {native} curve as {requested}; use {accessor} instead")]
    UnsupportedConversion {
        native: Degree,
        requested: Degree,
        accessor: String,
    },

    /// Array-valued keys with differing element counts.
    #[error("Length mismatch: expected {expected} elements, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A sampler was requested over no keys where one is required.
    #[error("Keyframe sequence is empty")]
    EmptySequence,

    /// Cubic sampling was requested over keys without tangents.
    #[error("Cubic sampling needs (tangent_in, value, tangent_out) keys")]
    MissingTangents,

    /// A chunk factory produced a bucket of a different degree than the chunked sampler.
    #[error("Chunk bucket has degree {actual}, expected {expected}")]
    BucketDegreeMismatch { expected: Degree, actual: Degree },

    /// Keys span more seconds than a chunked sampler will bucket.
    #[error("Keys end at {end_time}s, past the {max_buckets}-bucket chunking limit")]
    SpanTooLong { end_time: f32, max_buckets: usize },

    /// Segment window does not fit inside its backing buffer.
    #[error("Segment [{offset}, {offset}+{len}) exceeds buffer of {buffer_len} elements")]
    SegmentOutOfBounds {
        offset: usize,
        len: usize,
        buffer_len: usize,
    },
}

impl CurveError {
    /// Build the wrong-degree export error, naming the accessor that does work.
    pub fn unsupported_conversion(native: Degree, requested: Degree) -> Self {
        Self::UnsupportedConversion {
            native,
            requested,
            accessor: native.accessor_name().to_string(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnsortedKeys { .. }
            | Self::LengthMismatch { .. }
            | Self::SegmentOutOfBounds { .. }
            | Self::SpanTooLong { .. }
            | Self::EmptySequence
            | Self::MissingTangents => "validation",
            Self::UnsupportedConversion { .. } | Self::BucketDegreeMismatch { .. } => "conversion",
        }
    }
}
