//! Degree-specific samplers and the [`CurveSampler`] that dispatches between them.
//!
//! - [`FixedSampler`]: zero/one-key curves, constant everywhere
//! - [`StepSampler`]: degree 0, hold left key
//! - [`LinearSampler`]: degree 1, lerp (slerp for quaternions)
//! - [`CubicSampler`]: degree 3, Hermite with per-key tangents
//! - [`ChunkedSampler`]: one of the above per animated second
//!
//! Samplers are immutable once built; `get_point` takes `&self` and may be
//! called from any number of threads.

mod chunked;
mod cubic;
mod factory;
mod fixed;
mod linear;
mod step;

pub use chunked::{ChunkedSampler, BUCKET_SECONDS, MAX_BUCKETS};
pub use cubic::CubicSampler;
pub use factory::{build_cubic_sampler, build_sampler};
pub use fixed::FixedSampler;
pub use linear::LinearSampler;
pub use step::StepSampler;

use crate::curve::{CurveConversion, CurveExport};
use crate::degree::Degree;
use crate::error::CurveError;
use crate::value::CurveValue;

/// Every value must be blend-compatible with the first.
pub(crate) fn check_values<'a, T: CurveValue + 'a>(
    mut values: impl Iterator<Item = &'a T>,
) -> Result<(), CurveError> {
    let Some(first) = values.next() else {
        return Ok(());
    };
    for value in values {
        first.check_compatible(value).map_err(|err| {
            log::warn!("rejecting keyframe values ({}): {err}", err.category());
            err
        })?;
    }
    Ok(())
}

/// Evaluates a curve at arbitrary times.
pub trait Sampler<T> {
    /// Value at `time` seconds. Times outside the keyed range clamp to the
    /// first/last key.
    fn get_point(&self, time: f32) -> T;

    fn degree(&self) -> Degree;

    /// Evaluate at each of `times`; for tooling, not the per-frame path.
    fn sample_many<I>(&self, times: I) -> Vec<T>
    where
        I: IntoIterator<Item = f32>,
        Self: Sized,
    {
        times.into_iter().map(|t| self.get_point(t)).collect()
    }
}

/// A built curve: one of the degree-specific samplers, possibly chunked.
#[derive(Clone, Debug)]
pub enum CurveSampler<T> {
    Fixed(FixedSampler<T>),
    Step(StepSampler<T>),
    Linear(LinearSampler<T>),
    Cubic(CubicSampler<T>),
    Chunked(ChunkedSampler<T>),
}

impl<T: CurveValue> CurveSampler<T> {
    #[inline]
    pub fn is_chunked(&self) -> bool {
        matches!(self, CurveSampler::Chunked(_))
    }

    /// Bucket count when chunked.
    pub fn bucket_count(&self) -> Option<usize> {
        match self {
            CurveSampler::Chunked(c) => Some(c.bucket_count()),
            _ => None,
        }
    }

    pub fn key_count(&self) -> usize {
        match self {
            CurveSampler::Fixed(_) => 1,
            CurveSampler::Step(s) => s.keys().len(),
            CurveSampler::Linear(s) => s.keys().len(),
            CurveSampler::Cubic(s) => s.keys().len(),
            CurveSampler::Chunked(c) => c.key_count(),
        }
    }

    pub fn start_time(&self) -> f32 {
        match self {
            CurveSampler::Fixed(f) => f.time(),
            CurveSampler::Step(s) => s.keys().start_time(),
            CurveSampler::Linear(s) => s.keys().start_time(),
            CurveSampler::Cubic(s) => s.keys().start_time(),
            CurveSampler::Chunked(c) => c.start_time(),
        }
    }

    pub fn end_time(&self) -> f32 {
        match self {
            CurveSampler::Fixed(f) => f.time(),
            CurveSampler::Step(s) => s.keys().end_time(),
            CurveSampler::Linear(s) => s.keys().end_time(),
            CurveSampler::Cubic(s) => s.keys().end_time(),
            CurveSampler::Chunked(c) => c.end_time(),
        }
    }

    /// Export keeping source key times for single-key samplers, so chunk
    /// buckets concatenate back into the original sequence.
    pub(crate) fn export_anchored(&self, requested: Degree) -> Result<CurveExport<T>, CurveError> {
        match self {
            CurveSampler::Fixed(f) => Ok(f.export_as(requested, true)),
            _ => self.export_as(requested),
        }
    }
}

impl<T: CurveValue> Sampler<T> for CurveSampler<T> {
    #[inline]
    fn get_point(&self, time: f32) -> T {
        match self {
            CurveSampler::Fixed(s) => s.get_point(time),
            CurveSampler::Step(s) => s.get_point(time),
            CurveSampler::Linear(s) => s.get_point(time),
            CurveSampler::Cubic(s) => s.get_point(time),
            CurveSampler::Chunked(s) => s.get_point(time),
        }
    }

    #[inline]
    fn degree(&self) -> Degree {
        match self {
            CurveSampler::Fixed(s) => s.degree(),
            CurveSampler::Step(s) => s.degree(),
            CurveSampler::Linear(s) => s.degree(),
            CurveSampler::Cubic(s) => s.degree(),
            CurveSampler::Chunked(s) => s.degree(),
        }
    }
}

impl<T: CurveValue> CurveConversion<T> for CurveSampler<T> {
    #[inline]
    fn native_degree(&self) -> Degree {
        self.degree()
    }

    fn export_as(&self, requested: Degree) -> Result<CurveExport<T>, CurveError> {
        let native = self.degree();
        match self {
            CurveSampler::Fixed(f) => Ok(f.export_as(requested, false)),
            CurveSampler::Chunked(c) => c.export_as(requested),
            _ if requested != native => Err(CurveError::unsupported_conversion(native, requested)),
            CurveSampler::Step(s) => Ok(CurveExport::Step(s.keys().clone())),
            CurveSampler::Linear(s) => Ok(CurveExport::Linear(s.keys().clone())),
            CurveSampler::Cubic(s) => Ok(CurveExport::Spline(s.keys().clone())),
        }
    }
}
