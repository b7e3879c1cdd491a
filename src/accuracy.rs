//! Error bounds of the approximated operations.
//!
//! Absolute bounds unless noted. They hold on every backend, including `neon64` where
//! the polynomial steps are fused.

/// `vector_sin`/`vector_cos` over [-4π, 4π].
pub const SIN_COS_MAX_ERROR: f32 = 0.00001;

/// `vector_asin`/`vector_acos` over [-1, 1].
pub const ASIN_ACOS_MAX_ERROR: f32 = 0.00001;

/// `vector_atan`/`vector_atan2` over all finite inputs.
pub const ATAN_MAX_ERROR: f32 = 0.00001;

/// Relative bound of `vector_reciprocal`, `vector_sqrt_reciprocal` and their scalar
/// counterparts, for inputs where both `d` and the result are normal floats.
///
/// Outside that range the hardware estimate is flushed to ±0 or ±∞, and those lanes fall
/// back to a correctly rounded division. The result then equals the IEEE quotient.
pub const RECIPROCAL_MAX_RELATIVE_ERROR: f32 = 0.000001;
