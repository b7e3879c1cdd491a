//! ARM NEON implementations of the 4-lane kernel.
//!
//! Two tiers share this module. The build script emits `neon64` for AArch64 targets
//! with NEON; `neon32` restricts the code to the ARMv7 NEON subset (no vector divide or
//! square root, no fused multiply-add, no directed rounding instructions) and is only
//! chosen through `SIMDLY_VEC4_BACKEND=neon32`.
//!
//! # Platform Support
//!
//! - **Apple Silicon**: M1 and later (macOS, iOS)
//! - **AWS Graviton**: Graviton2 and later
//! - **Mobile**: AArch64 Android and iOS devices
//!
//! # Differences From SSE
//!
//! `neon64` fuses the multiply-add steps of the polynomials, so transcendental results
//! differ from the SSE and scalar backends in the last bits. Everything else, including
//! NaN handling of `min`/`max`, matches lane for lane.

#[allow(clippy::excessive_precision)]
pub mod math;

pub mod f32x4;

pub use f32x4::{F32x4, Mask4i, Scalarf};
