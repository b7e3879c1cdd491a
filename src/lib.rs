//! SIMD 4-lane `f32` vector kernel for real-time graphics and animation math.
//!
//! The instruction set is picked once by `build.rs`. Every backend exposes the same
//! observable behavior: plain arithmetic, comparisons, rounding, selects and mixes agree
//! bit for bit, and the polynomial approximations stay inside the bounds in [`accuracy`].
//!
//! # Backends
//!
//! | Name | Selected on |
//! |------------|-----------------------------------------------------------------|
//! | `sse4` | x86/x86_64 with `sse4.1` enabled |
//! | `sse2` | x86/x86_64 otherwise |
//! | `neon64` | aarch64 |
//! | `neon32` | aarch64 only, and only with `SIMDLY_VEC4_BACKEND=neon32` |
//! | `fallback` | every other target, including 32-bit ARM (armv7) |
//!
//! `neon32` restricts itself to the ARMv7 NEON instruction subset (no vector divide, no
//! fused multiply-add, no rounding instructions) but is built with the aarch64
//! intrinsics, so it runs on aarch64 hardware. armv7 targets get the portable scalar
//! backend. `SIMDLY_VEC4_BACKEND` can only pick a backend the target supports.
//!
//! # Modules
//!
//! - [`vector4f`]: free functions over [`Vector4f`] (`vector_add`, `vector_sin`, ...)
//! - [`scalarf`]: 1-lane operations over [`Scalarf`]
//! - [`mask4i`]: lane mask helpers over [`Mask4i`]
//! - [`batch`]: the kernel applied over packed `xyzw` slices, optionally with rayon
//! - [`simd`]: backends, the shared trait set and the mix engine
//!
//! # Example
//!
//! ```
//! use simdly_vec4::{vector4f::*, vector_mix};
//!
//! let a = vector_set(1.0, 2.0, 3.0, 4.0);
//! let b = vector_set(5.0, 6.0, 7.0, 8.0);
//!
//! assert_eq!(vector_dot(a, b), 70.0);
//! assert_eq!(vector_to_array(vector_mix!(a, b, X, A, Y, B)), [1.0, 5.0, 2.0, 6.0]);
//! ```

pub mod accuracy;
pub mod batch;
pub mod error;
pub mod mask4i;
pub mod scalarf;
pub mod simd;
pub mod vector4f;

pub use simd::mix::{mix_selector, mix_shuffle_mask, Mix4};
pub use simd::{backend_name, Backend, Mask4i, Scalarf, Vector4f, BACKEND};
pub use vector4f::vector_mix;

/// Default `threshold` of the `vector_*_near_equal*` family.
pub const DEFAULT_NEAR_EQUAL_THRESHOLD: f32 = 0.00001;

/// Default squared length below which `vector_normalize3` returns its fallback.
pub const DEFAULT_NORMALIZE_THRESHOLD: f32 = 0.00000001;

/// Permutes lanes of two vectors by name.
///
/// `X`, `Y`, `Z`, `W` name the lanes of the first input and `A`, `B`, `C`, `D` the
/// lanes of the second. Both const parameters of [`vector_mix`] are computed at compile
/// time, so every lane pattern compiles to its dedicated permute.
///
/// ```
/// use simdly_vec4::{vector4f::*, vector_mix};
///
/// let a = vector_set(0.0, 1.0, 2.0, 3.0);
/// let b = vector_set(4.0, 5.0, 6.0, 7.0);
///
/// assert_eq!(vector_to_array(vector_mix!(a, b, W, C, X, X)), [3.0, 6.0, 0.0, 0.0]);
/// ```
#[macro_export]
macro_rules! vector_mix {
    ($input0:expr, $input1:expr, $c0:ident, $c1:ident, $c2:ident, $c3:ident) => {
        $crate::vector_mix::<
            {
                $crate::mix_selector(
                    $crate::Mix4::$c0,
                    $crate::Mix4::$c1,
                    $crate::Mix4::$c2,
                    $crate::Mix4::$c3,
                )
            },
            {
                $crate::mix_shuffle_mask(
                    $crate::Mix4::$c0,
                    $crate::Mix4::$c1,
                    $crate::Mix4::$c2,
                    $crate::Mix4::$c3,
                )
            },
        >($input0, $input1)
    };
}
