use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CurveValue;
use crate::error::CurveError;
use crate::interp::create_hermite_point_weights;
use crate::interp::functions::{hermite_slice, lerp_slice};

#[inline]
fn check_len(expected: usize, actual: usize) -> Result<(), CurveError> {
    if expected == actual {
        Ok(())
    } else {
        Err(CurveError::LengthMismatch { expected, actual })
    }
}

/// Lerp two float arrays, rejecting mismatched lengths.
pub fn checked_lerp(a: &[f32], b: &[f32], t: f32) -> Result<Vec<f32>, CurveError> {
    check_len(a.len(), b.len())?;
    Ok(lerp_slice(a, b, t))
}

/// Hermite-blend four float arrays, rejecting mismatched lengths.
pub fn checked_hermite(
    p0: &[f32],
    out0: &[f32],
    p1: &[f32],
    in1: &[f32],
    t: f32,
) -> Result<Vec<f32>, CurveError> {
    for other in [out0, p1, in1] {
        check_len(p0.len(), other.len())?;
    }
    Ok(hermite_slice(
        p0,
        out0,
        p1,
        in1,
        &create_hermite_point_weights(t),
    ))
}

/// Float arrays (morph weight vectors, material parameter blocks).
/// Every blend allocates a new buffer. Blending arrays of different lengths
/// panics; samplers reject such keys when they are built.
impl CurveValue for Vec<f32> {
    #[inline]
    fn check_compatible(&self, other: &Self) -> Result<(), CurveError> {
        check_len(self.len(), other.len())
    }

    #[inline]
    fn zeroed(&self) -> Self {
        vec![0.0; self.len()]
    }

    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        lerp_slice(a, b, t)
    }

    #[inline]
    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        hermite_slice(p0, out0, p1, in1, &create_hermite_point_weights(t))
    }
}

/// A window into a shared float buffer, e.g. one key's slice of a decoded
/// accessor. `Clone` shares the buffer; [`CurveValue::clone_value`] and every
/// blend produce a compact, privately owned buffer.
#[derive(Clone, Debug)]
pub struct Segment {
    buffer: Arc<[f32]>,
    offset: usize,
    len: usize,
}

impl Segment {
    pub fn new(buffer: Arc<[f32]>, offset: usize, len: usize) -> Result<Self, CurveError> {
        if offset.checked_add(len).map_or(true, |end| end > buffer.len()) {
            return Err(CurveError::SegmentOutOfBounds {
                offset,
                len,
                buffer_len: buffer.len(),
            });
        }
        Ok(Self {
            buffer,
            offset,
            len,
        })
    }

    /// Segment covering the whole of `values`.
    pub fn from_vec(values: Vec<f32>) -> Self {
        let len = values.len();
        Self {
            buffer: Arc::from(values),
            offset: 0,
            len,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.buffer[self.offset..self.offset + self.len]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `self` and `other` view the same backing buffer.
    #[inline]
    pub fn shares_buffer_with(&self, other: &Segment) -> bool {
        Arc::ptr_eq(&self.buffer, &other.buffer)
    }

    pub fn checked_lerp(a: &Segment, b: &Segment, t: f32) -> Result<Segment, CurveError> {
        checked_lerp(a.as_slice(), b.as_slice(), t).map(Segment::from_vec)
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Segment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<f32>::deserialize(deserializer).map(Segment::from_vec)
    }
}

impl CurveValue for Segment {
    #[inline]
    fn clone_value(&self) -> Self {
        Segment::from_vec(self.as_slice().to_vec())
    }

    #[inline]
    fn check_compatible(&self, other: &Self) -> Result<(), CurveError> {
        check_len(self.len, other.len)
    }

    #[inline]
    fn zeroed(&self) -> Self {
        Segment::from_vec(vec![0.0; self.len])
    }

    #[inline]
    fn interpolate_linear(a: &Self, b: &Self, t: f32) -> Self {
        Segment::from_vec(lerp_slice(a.as_slice(), b.as_slice(), t))
    }

    #[inline]
    fn interpolate_cubic(p0: &Self, out0: &Self, p1: &Self, in1: &Self, t: f32) -> Self {
        Segment::from_vec(hermite_slice(
            p0.as_slice(),
            out0.as_slice(),
            p1.as_slice(),
            in1.as_slice(),
            &create_hermite_point_weights(t),
        ))
    }
}
