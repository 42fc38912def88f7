use crate::curve::CurveExport;
use crate::degree::Degree;
use crate::keyframe::{CubicKey, Keyframe, KeyframeSequence};
use crate::sampler::Sampler;
use crate::value::CurveValue;

/// Single-key curve: the same value at every time.
///
/// Exports to any degree as one key at time 0.
#[derive(Clone, Debug)]
pub struct FixedSampler<T> {
    /// Time of the source key; only used when merging chunk buckets.
    time: f32,
    value: T,
    /// `(tangent_in, tangent_out)` when built from a cubic key.
    tangents: Option<(T, T)>,
    degree: Degree,
}

impl<T: CurveValue> FixedSampler<T> {
    pub fn new(key: Keyframe<T>, degree: Degree) -> Self {
        Self {
            time: key.time,
            value: key.value,
            tangents: None,
            degree,
        }
    }

    pub fn from_cubic(key: Keyframe<CubicKey<T>>) -> Self {
        let CubicKey {
            tangent_in,
            value,
            tangent_out,
        } = key.value;
        Self {
            time: key.time,
            value,
            tangents: Some((tangent_in, tangent_out)),
            degree: Degree::Cubic,
        }
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Export as `requested`. `anchored` keeps the source key time instead of 0.
    pub(crate) fn export_as(&self, requested: Degree, anchored: bool) -> CurveExport<T> {
        let time = if anchored { self.time } else { 0.0 };
        let value = self.value.clone_value();
        match requested {
            Degree::Step => CurveExport::Step(KeyframeSequence::new(vec![Keyframe::new(time, value)])),
            Degree::Linear => {
                CurveExport::Linear(KeyframeSequence::new(vec![Keyframe::new(time, value)]))
            }
            Degree::Cubic => {
                let (tangent_in, tangent_out) = match &self.tangents {
                    Some((tin, tout)) => (tin.clone_value(), tout.clone_value()),
                    None => (self.value.zeroed(), self.value.zeroed()),
                };
                CurveExport::Spline(KeyframeSequence::new(vec![Keyframe::new(
                    time,
                    CubicKey::new(tangent_in, value, tangent_out),
                )]))
            }
        }
    }
}

impl<T: CurveValue> Sampler<T> for FixedSampler<T> {
    #[inline]
    fn get_point(&self, _time: f32) -> T {
        self.value.clone_value()
    }

    #[inline]
    fn degree(&self) -> Degree {
        self.degree
    }
}
