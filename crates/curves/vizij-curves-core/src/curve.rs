//! Curve-conversion contract used by authoring/export tooling.
//!
//! A sampler exports losslessly in its native degree only. Asking for any
//! other degree is an error naming the accessor that works; cross-degree
//! resampling is not offered.

use serde::{Deserialize, Serialize};

use crate::degree::Degree;
use crate::error::CurveError;
use crate::keyframe::{CubicKey, KeyframeSequence};

/// Keyframe map exported from a sampler, tagged with its interpolation kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "keys", rename_all = "lowercase")]
pub enum CurveExport<T> {
    Step(KeyframeSequence<T>),
    Linear(KeyframeSequence<T>),
    Spline(KeyframeSequence<CubicKey<T>>),
}

impl<T> CurveExport<T> {
    #[inline]
    pub fn degree(&self) -> Degree {
        match self {
            CurveExport::Step(_) => Degree::Step,
            CurveExport::Linear(_) => Degree::Linear,
            CurveExport::Spline(_) => Degree::Cubic,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CurveExport::Step(keys) | CurveExport::Linear(keys) => keys.len(),
            CurveExport::Spline(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub trait CurveConversion<T> {
    fn native_degree(&self) -> Degree;

    /// Export in `requested` degree, failing unless it is lossless.
    fn export_as(&self, requested: Degree) -> Result<CurveExport<T>, CurveError>;

    /// Export in the native degree.
    fn export(&self) -> Result<CurveExport<T>, CurveError> {
        self.export_as(self.native_degree())
    }

    fn to_step_keys(&self) -> Result<KeyframeSequence<T>, CurveError> {
        match self.export_as(Degree::Step)? {
            CurveExport::Step(keys) => Ok(keys),
            other => Err(CurveError::unsupported_conversion(
                other.degree(),
                Degree::Step,
            )),
        }
    }

    fn to_linear_keys(&self) -> Result<KeyframeSequence<T>, CurveError> {
        match self.export_as(Degree::Linear)? {
            CurveExport::Linear(keys) => Ok(keys),
            other => Err(CurveError::unsupported_conversion(
                other.degree(),
                Degree::Linear,
            )),
        }
    }

    fn to_spline_keys(&self) -> Result<KeyframeSequence<CubicKey<T>>, CurveError> {
        match self.export_as(Degree::Cubic)? {
            CurveExport::Spline(keys) => Ok(keys),
            other => Err(CurveError::unsupported_conversion(
                other.degree(),
                Degree::Cubic,
            )),
        }
    }
}
