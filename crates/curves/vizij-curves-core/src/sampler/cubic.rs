use crate::degree::Degree;
use crate::error::CurveError;
use crate::interp::find_range_containing_offset;
use crate::keyframe::{CubicKey, KeyframeSequence};
use crate::sampler::{check_values, Sampler};
use crate::value::CurveValue;

/// Degree 3: Hermite spline through `(tangent_in, value, tangent_out)` keys.
///
/// A segment leaves the left key along its `tangent_out` and arrives at the
/// right key along its `tangent_in`. Tangents are used as stored.
#[derive(Clone, Debug)]
pub struct CubicSampler<T> {
    keys: KeyframeSequence<CubicKey<T>>,
}

impl<T: CurveValue> CubicSampler<T> {
    /// Fails on an empty sequence or values that cannot be blended together.
    /// Key order is not checked here; see [`KeyframeSequence::validate`].
    pub fn new(keys: KeyframeSequence<CubicKey<T>>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::EmptySequence);
        }
        check_values(keys.iter().flat_map(|k| k.value.parts()))?;
        Ok(Self { keys })
    }

    #[inline]
    pub fn keys(&self) -> &KeyframeSequence<CubicKey<T>> {
        &self.keys
    }
}

impl<T: CurveValue> Sampler<T> for CubicSampler<T> {
    fn get_point(&self, time: f32) -> T {
        let keys = self.keys.as_slice();
        let range = find_range_containing_offset(keys, time);
        let left = &keys[range.left].value;
        if range.is_degenerate() || range.t == 0.0 {
            return left.value.clone_value();
        }
        let right = &keys[range.right].value;
        T::interpolate_cubic(
            &left.value,
            &left.tangent_out,
            &right.value,
            &right.tangent_in,
            range.t,
        )
    }

    #[inline]
    fn degree(&self) -> Degree {
        Degree::Cubic
    }
}
