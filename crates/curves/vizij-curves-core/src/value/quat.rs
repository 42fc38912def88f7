use serde::{Deserialize, Serialize};

use super::CurveValue;
use crate::interp::create_hermite_point_weights;
use crate::interp::functions::{dot4, hermite_array, normalize4, slerp_quat};

/// Squared norm below which a blended quaternion has no usable direction.
const DEGENERATE_NORM_SQ: f32 = 1e-12;

#[inline]
fn negate4(q: &[f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], -q[3]]
}

/// Rotation quaternion stored as (x, y, z, w).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quat(pub [f32; 4]);

impl Quat {
    pub const IDENTITY: Quat = Quat([0.0, 0.0, 0.0, 1.0]);

    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self([x, y, z, w])
    }

    #[inline]
    pub fn length(&self) -> f32 {
        dot4(&self.0, &self.0).sqrt()
    }

    #[inline]
    pub fn normalized(&self) -> Self {
        Self(normalize4(self.0))
    }
}

impl From<[f32; 4]> for Quat {
    fn from(q: [f32; 4]) -> Self {
        Self(q)
    }
}

/// Linear uses slerp; cubic blends component-wise on the shortest arc then
/// renormalizes.
impl CurveValue for Quat {
    #[inline]
    fn zeroed(&self) -> Self {
        Quat([0.0; 4])
    }

    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        Quat(slerp_quat(&a.0, &b.0, t))
    }

    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        // `q` and `-q` are the same rotation; blend towards the end on p0's side.
        let (p1, in1) = if dot4(&p0.0, &p1.0) < 0.0 {
            (negate4(&p1.0), negate4(&in1.0))
        } else {
            (p1.0, in1.0)
        };
        let w = create_hermite_point_weights(t);
        let blended = hermite_array(&p0.0, &out0.0, &p1, &in1, &w);
        if dot4(&blended, &blended) > DEGENERATE_NORM_SQ {
            return Quat(normalize4(blended));
        }
        // Tangents cancelled the values out; fall back to the shortest arc.
        let arc = slerp_quat(&p0.0, &p1, t);
        if dot4(&arc, &arc) > DEGENERATE_NORM_SQ {
            Quat(arc)
        } else {
            Quat::IDENTITY
        }
    }
}
