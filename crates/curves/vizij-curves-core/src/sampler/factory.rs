//! Sampler selection from key count, requested degree and config.
//!
//! - no keys: no sampler
//! - one key: [`FixedSampler`] whatever the requested degree
//! - otherwise step or linear (by `is_linear`), or cubic for tangent keys,
//!   wrapped in [`ChunkedSampler`] once the key count reaches the threshold
//!   and the first key is not before 0 and the span needs a reasonable number
//!   of buckets for the key count

use crate::config::SamplerConfig;
use crate::curve::CurveExport;
use crate::degree::Degree;
use crate::error::CurveError;
use crate::keyframe::{CubicKey, Keyframe, KeyframeSequence};
use crate::sampler::chunked::bucket_count_for;
use crate::sampler::{
    check_values, ChunkedSampler, CubicSampler, CurveSampler, FixedSampler, LinearSampler,
    StepSampler,
};
use crate::value::CurveValue;

/// Build a step or linear sampler over `(time, value)` keys.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn build_sampler<T: CurveValue>(
    keys: KeyframeSequence<T>,
    is_linear: bool,
    config: &SamplerConfig,
) -> Result<Option<CurveSampler<T>>, CurveError> {
    if keys.is_empty() {
        return Ok(None);
    }
    check_order(&keys, config)?;

    let degree = if is_linear {
        Degree::Linear
    } else {
        Degree::Step
    };
    let sampler = if chunkable(&keys, config) {
        CurveSampler::Chunked(ChunkedSampler::from_keys(&keys, degree, |bucket| {
            CurveSampler::unchunked(bucket, degree)
        })?)
    } else {
        CurveSampler::unchunked(keys, degree)?
    };
    log::debug!(
        "built {degree} sampler over {} keys (chunked: {})",
        sampler.key_count(),
        sampler.is_chunked()
    );
    Ok(Some(sampler))
}

/// Build a cubic Hermite sampler over `(time, (in, value, out))` keys.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn build_cubic_sampler<T: CurveValue>(
    keys: KeyframeSequence<CubicKey<T>>,
    config: &SamplerConfig,
) -> Result<Option<CurveSampler<T>>, CurveError> {
    if keys.is_empty() {
        return Ok(None);
    }
    check_order(&keys, config)?;

    let sampler = if chunkable(&keys, config) {
        CurveSampler::Chunked(ChunkedSampler::from_cubic_keys(
            &keys,
            CurveSampler::unchunked_cubic,
        )?)
    } else {
        CurveSampler::unchunked_cubic(keys)?
    };
    log::debug!(
        "built cubic sampler over {} keys (chunked: {})",
        sampler.key_count(),
        sampler.is_chunked()
    );
    Ok(Some(sampler))
}

impl<T: CurveValue> CurveSampler<T> {
    /// Fixed, step or linear sampler without chunking. Also the default chunk factory.
    ///
    /// Values are checked for blend compatibility; key order is the caller's
    /// responsibility (see [`KeyframeSequence::validate`]).
    pub fn unchunked(keys: KeyframeSequence<T>, degree: Degree) -> Result<Self, CurveError> {
        match keys.len() {
            0 => Err(CurveError::EmptySequence),
            1 => {
                let key = &keys[0];
                let key = Keyframe::new(key.time, key.value.clone_value());
                Ok(CurveSampler::Fixed(FixedSampler::new(key, degree)))
            }
            _ => match degree {
                Degree::Step => StepSampler::new(keys).map(CurveSampler::Step),
                Degree::Linear => LinearSampler::new(keys).map(CurveSampler::Linear),
                Degree::Cubic => Err(CurveError::MissingTangents),
            },
        }
    }

    /// Fixed or cubic sampler without chunking. Also the default cubic chunk factory.
    pub fn unchunked_cubic(keys: KeyframeSequence<CubicKey<T>>) -> Result<Self, CurveError> {
        match keys.len() {
            0 => Err(CurveError::EmptySequence),
            1 => {
                let key = &keys[0];
                check_values(key.value.parts().into_iter())?;
                let value = CubicKey::new(
                    key.value.tangent_in.clone_value(),
                    key.value.value.clone_value(),
                    key.value.tangent_out.clone_value(),
                );
                Ok(CurveSampler::Fixed(FixedSampler::from_cubic(Keyframe::new(
                    key.time, value,
                ))))
            }
            _ => CubicSampler::new(keys).map(CurveSampler::Cubic),
        }
    }

    /// Rebuild a sampler from an exported keyframe map.
    pub fn from_export(
        export: CurveExport<T>,
        config: &SamplerConfig,
    ) -> Result<Option<Self>, CurveError> {
        match export {
            CurveExport::Step(keys) => build_sampler(keys, false, config),
            CurveExport::Linear(keys) => build_sampler(keys, true, config),
            CurveExport::Spline(keys) => build_cubic_sampler(keys, config),
        }
    }
}

/// Buckets start at 0, so curves keyed before 0 stay unchunked. Sparse keys
/// over a long span would cost more buckets than they save and stay unchunked
/// too.
fn chunkable<V>(keys: &KeyframeSequence<V>, config: &SamplerConfig) -> bool {
    if !config.should_chunk(keys.len()) || keys.start_time() < 0.0 {
        return false;
    }
    match bucket_count_for(keys.end_time()) {
        Some(buckets) if config.fits_bucket_budget(keys.len(), buckets) => true,
        _ => {
            log::debug!(
                "leaving {} keys ending at {}s unchunked: too many buckets",
                keys.len(),
                keys.end_time()
            );
            false
        }
    }
}

fn check_order<V>(keys: &KeyframeSequence<V>, config: &SamplerConfig) -> Result<(), CurveError> {
    if !config.validate_order {
        return Ok(());
    }
    keys.validate().map_err(|err| {
        log::warn!("rejecting keyframe sequence ({}): {err}", err.category());
        err
    })
}
