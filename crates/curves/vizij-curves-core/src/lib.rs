//! Vizij Curves Core (engine-agnostic)
//!
//! Samples keyframed animation curves (translations, rotations, scales,
//! morph weights, material parameters, visibility) at arbitrary times.
//! Curves are built once from an ascending keyframe sequence and queried
//! every frame with [`Sampler::get_point`].
//!
//! Building picks a sampler by key count and degree: no keys gives no
//! sampler, one key a constant [`FixedSampler`], otherwise [`StepSampler`],
//! [`LinearSampler`] or [`CubicSampler`]. Long curves are split into
//! one-second buckets by [`ChunkedSampler`] so a query only scans the keys of
//! its own second.
//!
//! ```
//! use vizij_curves_core::{build_sampler, KeyframeSequence, Sampler, SamplerConfig};
//!
//! let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 10.0), (2.0, 20.0)]);
//! let sampler = build_sampler(keys, true, &SamplerConfig::default())
//!     .unwrap()
//!     .expect("non-empty sequence");
//! assert_eq!(sampler.get_point(0.5), 5.0);
//! assert_eq!(sampler.get_point(5.0), 20.0);
//! ```

pub mod config;
pub mod curve;
pub mod degree;
pub mod error;
pub mod interp;
pub mod keyframe;
pub mod sampler;
pub mod value;

// Re-exports for consumers (template builders, export tooling)
pub use config::SamplerConfig;
pub use curve::{CurveConversion, CurveExport};
pub use degree::Degree;
pub use error::CurveError;
pub use interp::{create_hermite_point_weights, find_range_containing_offset, HermiteWeights, KeyRange};
pub use keyframe::{CubicKey, Keyframe, KeyframeSequence};
pub use sampler::{
    build_cubic_sampler, build_sampler, ChunkedSampler, CubicSampler, CurveSampler, FixedSampler,
    LinearSampler, Sampler, StepSampler, BUCKET_SECONDS, MAX_BUCKETS,
};
pub use value::{CurveValue, Quat, Scalar, Segment, SparseWeights, Vector2, Vector3, Vector4};

/// Curve construction/export result type
pub type Result<T> = core::result::Result<T, CurveError>;
