//! Point-wise blend primitives:
//! - lerp (component-wise `a(1-t) + bt`)
//! - hermite (`p0*w_p0 + p1*w_p1 + out0*w_t0 + in1*w_t1`)
//! - quaternion slerp with shortest-arc correction, and renormalization

use super::hermite::HermiteWeights;

/// Cosine above which slerp falls back to a normalized lerp.
const SLERP_NLERP_THRESHOLD: f32 = 0.9995;

/// Linear interpolation of scalars, `a(1-t) + bt`.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

#[inline]
pub fn lerp_array<const N: usize>(a: &[f32; N], b: &[f32; N], t: f32) -> [f32; N] {
    std::array::from_fn(|i| lerp_f32(a[i], b[i], t))
}

#[inline]
pub fn hermite_f32(p0: f32, out0: f32, p1: f32, in1: f32, w: &HermiteWeights) -> f32 {
    p0 * w.p0 + p1 * w.p1 + out0 * w.t0 + in1 * w.t1
}

#[inline]
pub fn hermite_array<const N: usize>(
    p0: &[f32; N],
    out0: &[f32; N],
    p1: &[f32; N],
    in1: &[f32; N],
    w: &HermiteWeights,
) -> [f32; N] {
    std::array::from_fn(|i| hermite_f32(p0[i], out0[i], p1[i], in1[i], w))
}

/// Lerp two equal-length slices into a fresh buffer.
///
/// # Panics
/// If the lengths differ. Fallible callers go through `value::checked_lerp`.
pub(crate) fn lerp_slice(a: &[f32], b: &[f32], t: f32) -> Vec<f32> {
    assert_eq!(a.len(), b.len(), "lerp inputs differ in length");
    a.iter().zip(b).map(|(&x, &y)| lerp_f32(x, y, t)).collect()
}

/// Hermite blend of four equal-length slices into a fresh buffer.
///
/// # Panics
/// If the lengths differ. Fallible callers go through `value::checked_hermite`.
pub(crate) fn hermite_slice(
    p0: &[f32],
    out0: &[f32],
    p1: &[f32],
    in1: &[f32],
    w: &HermiteWeights,
) -> Vec<f32> {
    assert!(
        out0.len() == p0.len() && p1.len() == p0.len() && in1.len() == p0.len(),
        "hermite inputs differ in length"
    );
    (0..p0.len())
        .map(|i| hermite_f32(p0[i], out0[i], p1[i], in1[i], w))
        .collect()
}

#[inline]
pub fn dot4(a: &[f32; 4], b: &[f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

/// Scale to unit length; a zero quaternion is returned unchanged.
#[inline]
pub fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = dot4(&q, &q);
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        for c in &mut q {
            *c *= inv_len;
        }
    }
    q
}

/// Spherical interpolation between quaternions (x, y, z, w) along the
/// shortest arc. If dot < 0 the second quaternion is negated first.
pub fn slerp_quat(a: &[f32; 4], b: &[f32; 4], t: f32) -> [f32; 4] {
    let mut b = *b;
    let mut d = dot4(a, &b);
    if d < 0.0 {
        b = [-b[0], -b[1], -b[2], -b[3]];
        d = -d;
    }
    if d > SLERP_NLERP_THRESHOLD {
        return normalize4(lerp_array(a, &b, t));
    }
    let theta = d.min(1.0).acos();
    let sin_theta = theta.sin();
    let wa = ((1.0 - t) * theta).sin() / sin_theta;
    let wb = (t * theta).sin() / sin_theta;
    normalize4(std::array::from_fn(|i| a[i] * wa + b[i] * wb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::create_hermite_point_weights;

    fn len4(q: &[f32; 4]) -> f32 {
        dot4(q, q).sqrt()
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        assert_eq!(lerp_f32(3.25, -8.5, 0.0), 3.25);
        assert_eq!(lerp_f32(3.25, -8.5, 1.0), -8.5);
        assert_eq!(lerp_array(&[0.0, 2.0], &[10.0, 4.0], 0.5), [5.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn slice_lerp_never_truncates() {
        lerp_slice(&[0.0, 1.0], &[1.0], 0.5);
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn slice_hermite_never_truncates() {
        let w = create_hermite_point_weights(0.5);
        hermite_slice(&[0.0, 1.0], &[0.0, 0.0], &[1.0, 1.0], &[0.0], &w);
    }

    #[test]
    fn hermite_with_zero_tangents_matches_smoothstep() {
        let w = create_hermite_point_weights(0.25);
        let v = hermite_f32(0.0, 0.0, 1.0, 0.0, &w);
        assert!((v - 0.15625).abs() < 1e-6);
    }

    #[test]
    fn slerp_quarter_turn_midpoint() {
        let half = std::f32::consts::FRAC_1_SQRT_2;
        let a = [0.0, 0.0, 0.0, 1.0];
        let b = [0.0, 0.0, half, half]; // 90 degrees about z
        let q = slerp_quat(&a, &b, 0.5);
        let eighth = std::f32::consts::PI / 8.0;
        let expected = [0.0, 0.0, eighth.sin(), eighth.cos()];
        for i in 0..4 {
            assert!((q[i] - expected[i]).abs() < 1e-5, "{q:?}");
        }
        assert!((len4(&q) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn slerp_takes_shortest_arc() {
        let a = [0.0, 0.0, 0.0, 1.0];
        let b = [0.0, 0.0, -0.2588190, -0.9659258]; // -q(30 deg about z)
        let q = slerp_quat(&a, &b, 0.5);
        assert!(q[3] > 0.0, "{q:?}");
        assert!((q[2] - 0.1305262).abs() < 1e-4, "{q:?}");
    }

    #[test]
    fn slerp_nearly_equal_inputs() {
        let a = [0.0, 0.0, 0.0, 1.0];
        let b = normalize4([0.0, 0.0, 1e-4, 1.0]);
        let q = slerp_quat(&a, &b, 0.5);
        assert!((len4(&q) - 1.0).abs() < 1e-5);
    }
}
