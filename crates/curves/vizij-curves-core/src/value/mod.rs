//! Value adapters: how each animatable type is copied, lerped and Hermite-blended.
//!
//! Samplers are generic over [`CurveValue`], so the per-type behaviour is
//! resolved once at compile time rather than switched on per query.

mod array;
mod quat;
mod sparse;

pub use array::{checked_hermite, checked_lerp, Segment};
pub use quat::Quat;
pub use sparse::SparseWeights;

use crate::error::CurveError;
use crate::interp::create_hermite_point_weights;
use crate::interp::functions::{hermite_array, hermite_f32, lerp_array, lerp_f32};

pub type Scalar = f32;
pub type Vector2 = [f32; 2];
pub type Vector3 = [f32; 3];
pub type Vector4 = [f32; 4];

/// Clone / linear / cubic behaviour of an animatable value type.
///
/// Inputs handed to the interpolation functions must be pairwise compatible
/// per [`CurveValue::check_compatible`]; samplers check every key once when
/// they are built.
pub trait CurveValue: Clone + Send + Sync {
    /// Copy handed out by samplers. Never aliases `self`'s storage.
    #[inline]
    fn clone_value(&self) -> Self {
        self.clone()
    }

    /// Ensure `self` and `other` can be blended (equal element counts).
    #[inline]
    fn check_compatible(&self, _other: &Self) -> Result<(), CurveError> {
        Ok(())
    }

    /// Zero value shaped like `self`, used as a flat tangent.
    fn zeroed(&self) -> Self;

    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self;

    /// Hermite blend of `p0` (leaving with `out0`) towards `p1` (arriving with `in1`).
    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self;
}

impl CurveValue for f32 {
    #[inline]
    fn zeroed(&self) -> Self {
        0.0
    }

    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        lerp_f32(*a, *b, t)
    }

    #[inline]
    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        hermite_f32(*p0, *out0, *p1, *in1, &create_hermite_point_weights(t))
    }
}

impl<const N: usize> CurveValue for [f32; N] {
    #[inline]
    fn zeroed(&self) -> Self {
        [0.0; N]
    }

    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        lerp_array(a, b, t)
    }

    #[inline]
    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        hermite_array(p0, out0, p1, in1, &create_hermite_point_weights(t))
    }
}

/// Visibility flags hold the left value under every degree.
impl CurveValue for bool {
    #[inline]
    fn zeroed(&self) -> Self {
        false
    }

    #[inline]
    fn interpolate_linear(a: &Self, _b: &Self, _t: f32) -> Self {
        *a
    }

    #[inline]
    fn interpolate_cubic(p0: &Self, _out0: &Self, _p1: &Self, _in1: &Self, _t: f32) -> Self {
        *p0
    }
}
