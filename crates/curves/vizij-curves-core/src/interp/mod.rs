//! Interpolation math shared by every sampler: Hermite basis weights, the
//! keyframe bracket search, and the point-wise blend primitives.

pub mod functions;
pub mod hermite;
pub mod range;

pub use hermite::{create_hermite_point_weights, HermiteWeights};
pub use range::{find_range_containing_offset, KeyRange};
