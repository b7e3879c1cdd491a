//! SSE2 and SSE4.1 implementations of the 4-lane kernel.
//!
//! The build script emits the `sse2` cfg when the target enables SSE2 and `sse4` when
//! it also enables SSE4.1 (for example with `-C target-cpu=native` on any recent x86
//! CPU). Both tiers share this module; SSE4.1-only instructions sit behind
//! `#[cfg(sse4)]` next to their SSE2 equivalent.
//!
//! # Platform Support
//!
//! - **x86_64**: SSE2 is part of the baseline, so this backend is the default
//! - **x86**: requires a target with SSE2 enabled (i686 and later)

#[allow(clippy::excessive_precision)]
pub mod math;

pub mod f32x4;

pub use f32x4::{F32x4, Mask4i, Scalarf};
