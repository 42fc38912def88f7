//! Cubic Hermite basis weights.

/// Blend weights for the two endpoint values and the two endpoint tangents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HermiteWeights {
    pub p0: f32,
    pub p1: f32,
    pub t0: f32,
    pub t1: f32,
}

/// Hermite basis at `t`. `t` is clamped into [0, 1] so out-of-range input
/// evaluates at the nearest segment end instead of extrapolating.
#[inline]
pub fn create_hermite_point_weights(t: f32) -> HermiteWeights {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let t2 = t * t;
    let t3 = t2 * t;
    let p1 = 3.0 * t2 - 2.0 * t3;
    let t1 = t3 - t2;
    HermiteWeights {
        p0: 1.0 - p1,
        p1,
        t0: t1 - t2 + t,
        t1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_select_values_only() {
        let w = create_hermite_point_weights(0.0);
        assert_eq!(
            w,
            HermiteWeights {
                p0: 1.0,
                p1: 0.0,
                t0: 0.0,
                t1: 0.0
            }
        );
        let w = create_hermite_point_weights(1.0);
        assert_eq!(w.p0, 0.0);
        assert_eq!(w.p1, 1.0);
        assert_eq!(w.t0, 0.0);
        assert_eq!(w.t1, 0.0);
    }

    #[test]
    fn midpoint_weights() {
        let w = create_hermite_point_weights(0.5);
        assert!((w.p0 - 0.5).abs() < 1e-6);
        assert!((w.p1 - 0.5).abs() < 1e-6);
        assert!((w.t0 - 0.125).abs() < 1e-6);
        assert!((w.t1 + 0.125).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_clamps() {
        assert_eq!(
            create_hermite_point_weights(-2.0),
            create_hermite_point_weights(0.0)
        );
        assert_eq!(
            create_hermite_point_weights(7.5),
            create_hermite_point_weights(1.0)
        );
        assert_eq!(
            create_hermite_point_weights(f32::NAN),
            create_hermite_point_weights(0.0)
        );
    }
}
