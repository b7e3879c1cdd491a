//! Instruction-set backends and the build-time selection between them.
//!
//! `build.rs` emits exactly one of the `sse4`, `sse2`, `neon64`, `neon32` or
//! `fallback` cfg flags. The matching module provides the concrete [`Vector4f`],
//! [`Scalarf`] and [`Mask4i`] types; the scalar backend is compiled everywhere as the
//! reference implementation.
//!
//! `neon32` is only built on aarch64 when `SIMDLY_VEC4_BACKEND=neon32` asks for it;
//! 32-bit ARM targets use the scalar backend.

pub mod mix;
pub mod scalar;
pub mod traits;

#[cfg(any(sse2, sse4))]
pub mod sse;

#[cfg(any(neon32, neon64))]
pub mod neon;

#[cfg(any(sse2, sse4))]
pub use sse::{F32x4 as Vector4f, Mask4i, Scalarf};

#[cfg(any(neon32, neon64))]
pub use neon::{F32x4 as Vector4f, Mask4i, Scalarf};

#[cfg(not(any(sse2, sse4, neon32, neon64)))]
pub use scalar::{F32x4 as Vector4f, Mask4i, Scalarf};

/// Instruction set the crate was built for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Sse4,
    Sse2,
    Neon64,
    Neon32,
    Scalar,
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Sse4 => "sse4",
            Backend::Sse2 => "sse2",
            Backend::Neon64 => "neon64",
            Backend::Neon32 => "neon32",
            Backend::Scalar => "scalar",
        }
    }

    /// Whether the backend evaluates `mul_add` with a single rounding.
    pub const fn has_fused_multiply_add(self) -> bool {
        matches!(self, Backend::Neon64)
    }
}

#[cfg(sse4)]
pub const BACKEND: Backend = Backend::Sse4;

#[cfg(sse2)]
pub const BACKEND: Backend = Backend::Sse2;

#[cfg(neon64)]
pub const BACKEND: Backend = Backend::Neon64;

#[cfg(neon32)]
pub const BACKEND: Backend = Backend::Neon32;

#[cfg(not(any(sse2, sse4, neon32, neon64)))]
pub const BACKEND: Backend = Backend::Scalar;

/// Name of the active backend, for logging.
pub const fn backend_name() -> &'static str {
    BACKEND.name()
}
