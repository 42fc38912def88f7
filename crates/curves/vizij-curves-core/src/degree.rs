//! Interpolation degree of a curve.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interpolation class of a sampler: 0 (step), 1 (linear) or 3 (cubic Hermite).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Degree {
    Step,
    Linear,
    Cubic,
}

impl Degree {
    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            Degree::Step => 0,
            Degree::Linear => 1,
            Degree::Cubic => 3,
        }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            Degree::Step => "step",
            Degree::Linear => "linear",
            Degree::Cubic => "cubic",
        }
    }

    /// Export accessor that is lossless for curves of this degree.
    #[inline]
    pub fn accessor_name(self) -> &'static str {
        match self {
            Degree::Step => "to_step_keys",
            Degree::Linear => "to_linear_keys",
            Degree::Cubic => "to_spline_keys",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Degree {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Degree::Step),
            1 => Ok(Degree::Linear),
            3 => Ok(Degree::Cubic),
            other => Err(other),
        }
    }
}
