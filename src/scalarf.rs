//! 1-lane operations over [`Scalarf`].
//!
//! On SSE a `Scalarf` stays in lane 0 of an XMM register, so chains such as
//! `scalar_sqrt(vector_dot_as_scalar(a, b))` never round trip through memory.

use crate::simd::traits::SimdScalar;
use crate::Scalarf;

#[inline(always)]
pub fn scalar_set(value: f32) -> Scalarf {
    Scalarf::set(value)
}

#[inline(always)]
pub fn scalar_cast(input: Scalarf) -> f32 {
    input.cast()
}

#[inline(always)]
pub fn scalar_add(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs + rhs
}

#[inline(always)]
pub fn scalar_sub(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs - rhs
}

#[inline(always)]
pub fn scalar_mul(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs * rhs
}

#[inline(always)]
pub fn scalar_div(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs / rhs
}

/// `s2 + s0 * s1`. Fused on `neon64`.
#[inline(always)]
pub fn scalar_mul_add(s0: Scalarf, s1: Scalarf, s2: Scalarf) -> Scalarf {
    s0.mul_add(s1, s2)
}

#[inline(always)]
pub fn scalar_min(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs.min(rhs)
}

#[inline(always)]
pub fn scalar_max(lhs: Scalarf, rhs: Scalarf) -> Scalarf {
    lhs.max(rhs)
}

#[inline(always)]
pub fn scalar_abs(input: Scalarf) -> Scalarf {
    input.abs()
}

#[inline(always)]
pub fn scalar_neg(input: Scalarf) -> Scalarf {
    -input
}

#[inline(always)]
pub fn scalar_sqrt(input: Scalarf) -> Scalarf {
    input.sqrt()
}

/// `1 / sqrt(input)`: hardware estimate plus exactly two Newton-Raphson steps on
/// SSE and NEON, a full-precision division on the scalar backend.
#[inline(always)]
pub fn scalar_sqrt_reciprocal(input: Scalarf) -> Scalarf {
    input.sqrt_reciprocal()
}

#[inline(always)]
pub fn scalar_reciprocal(input: Scalarf) -> Scalarf {
    input.reciprocal()
}
