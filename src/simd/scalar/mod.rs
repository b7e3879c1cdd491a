//! Portable per-lane implementation of the vector kernel.
//!
//! Selected when the build targets neither SSE2 nor NEON (or when
//! `SIMDLY_VEC4_BACKEND=scalar` is set). It is compiled on every target so tests can
//! compare the active backend against it lane by lane.

#[allow(clippy::excessive_precision)]
pub mod math;

pub mod f32x4;

pub use f32x4::{F32x4, Mask4i, Scalarf};
