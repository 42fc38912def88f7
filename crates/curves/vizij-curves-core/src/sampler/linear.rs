use crate::degree::Degree;
use crate::error::CurveError;
use crate::interp::find_range_containing_offset;
use crate::keyframe::KeyframeSequence;
use crate::sampler::{check_values, Sampler};
use crate::value::CurveValue;

/// Degree 1: blends the bracketing keys with [`CurveValue::interpolate_linear`].
#[derive(Clone, Debug)]
pub struct LinearSampler<T> {
    keys: KeyframeSequence<T>,
}

impl<T: CurveValue> LinearSampler<T> {
    /// Fails on an empty sequence or values that cannot be blended together.
    /// Key order is not checked here; see [`KeyframeSequence::validate`].
    pub fn new(keys: KeyframeSequence<T>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::EmptySequence);
        }
        check_values(keys.iter().map(|k| &k.value))?;
        Ok(Self { keys })
    }

    #[inline]
    pub fn keys(&self) -> &KeyframeSequence<T> {
        &self.keys
    }
}

impl<T: CurveValue> Sampler<T> for LinearSampler<T> {
    fn get_point(&self, time: f32) -> T {
        let keys = self.keys.as_slice();
        let range = find_range_containing_offset(keys, time);
        let left = &keys[range.left].value;
        // Key hits return the stored value untouched.
        if range.is_degenerate() || range.t == 0.0 {
            return left.clone_value();
        }
        T::interpolate_linear(left, &keys[range.right].value, range.t)
    }

    #[inline]
    fn degree(&self) -> Degree {
        Degree::Linear
    }
}
