//! SSE2 / SSE4.1 kernels for rounding, refined reciprocals and transcendental functions.
//!
//! Every function operates on 4 packed single-precision values held in an `__m128`.
//! Functions whose fastest instruction sequence needs SSE4.1 (`roundps`, `blendvps`)
//! carry an SSE2 alternative compiled when the `sse4` cfg is not set; both sequences
//! return bit-identical results.
//!
//! The polynomial coefficients and range reduction are shared with
//! [`crate::simd::scalar::math`], and the Horner steps multiply then add as two
//! separately rounded operations, exactly like the scalar reference.
//!
//! # Function Reference
//!
//! | Function | Domain | Range | Max abs error |
//! |----------|--------|-------|---------------|
//! | `_mm_sin_ps` | [-4π, 4π] | [-1, 1] | 1e-5 |
//! | `_mm_cos_ps` | [-4π, 4π] | [-1, 1] | 1e-5 |
//! | `_mm_asin_ps` | [-1, 1] | [-π/2, π/2] | 1e-5 |
//! | `_mm_acos_ps` | [-1, 1] | [0, π] | 1e-5 |
//! | `_mm_atan_ps` | All reals | [-π/2, π/2] | 1e-5 |
//! | `_mm_atan2_ps` | All reals × All reals | [-π, π] | 1e-5 |
//! | `_mm_reciprocal_ps` | All reals | All reals | 1e-6 relative |
//! | `_mm_ceilf_ps`, `_mm_floorf_ps` | All reals | All reals | Exact |
//! | `_mm_roundf_ps`, `_mm_rintf_ps` | All reals | All reals | Exact |
//!
//! # Safety
//!
//! All functions require SSE2, which the build script only selects when the target
//! enables it.

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::f32::consts::{FRAC_PI_2, PI};

use crate::simd::scalar::math::{
    ASIN_COEFF_0, ASIN_COEFF_1, ASIN_COEFF_2, ASIN_COEFF_3, ASIN_COEFF_4,
    ASIN_COEFF_5, ASIN_COEFF_6, ASIN_COEFF_7, ATAN_COEFF_0, ATAN_COEFF_1, ATAN_COEFF_2,
    ATAN_COEFF_3, ATAN_COEFF_4, ATAN_COEFF_5, COS_COEFF_0, COS_COEFF_1, COS_COEFF_2,
    COS_COEFF_3, COS_COEFF_4, FRACTIONLESS_THRESHOLD, INV_TWO_PI, ROUND_SYMMETRIC_BIAS,
    SIN_COEFF_0, SIN_COEFF_1, SIN_COEFF_2, SIN_COEFF_3, SIN_COEFF_4, TWO_PI,
};

/// All lanes set to `-0.0`, i.e. only the sign bit.
#[inline(always)]
pub unsafe fn _mm_sign_mask_ps() -> __m128 {
    _mm_set1_ps(-0.0)
}

/// All lanes set to `0xFFFF_FFFF`.
#[inline(always)]
pub unsafe fn _mm_true_mask_ps() -> __m128 {
    _mm_castsi128_ps(_mm_set1_epi32(-1))
}

/// Clears the sign bit of each lane.
#[inline(always)]
pub unsafe fn _mm_abs_ps(a: __m128) -> __m128 {
    _mm_andnot_ps(_mm_sign_mask_ps(), a)
}

/// Magnitude of `value` with the sign bit of `sign`.
#[inline(always)]
pub unsafe fn _mm_copysign_ps(value: __m128, sign: __m128) -> __m128 {
    let sign_mask = _mm_sign_mask_ps();
    _mm_or_ps(_mm_andnot_ps(sign_mask, value), _mm_and_ps(sign_mask, sign))
}

/// Lanes of `if_true` where `mask` is set, `if_false` elsewhere.
///
/// `mask` lanes must be all-ones or all-zeros.
#[inline(always)]
pub unsafe fn _mm_select_ps(mask: __m128, if_true: __m128, if_false: __m128) -> __m128 {
    #[cfg(sse4)]
    {
        _mm_blendv_ps(if_false, if_true, mask)
    }

    #[cfg(not(sse4))]
    {
        _mm_or_ps(_mm_and_ps(mask, if_true), _mm_andnot_ps(mask, if_false))
    }
}

/// `a * b + c`, rounded after the multiply and after the add.
#[inline(always)]
unsafe fn mul_add_ps(a: __m128, b: __m128, c: f32) -> __m128 {
    _mm_add_ps(_mm_mul_ps(a, b), _mm_set1_ps(c))
}

/// Lanes holding NaN, ±∞ or a magnitude of at least 2²³.
#[inline(always)]
pub unsafe fn _mm_fractionless_mask_ps(a: __m128) -> __m128 {
    // "not less than" is also true for unordered lanes
    _mm_cmpnlt_ps(_mm_abs_ps(a), _mm_set1_ps(FRACTIONLESS_THRESHOLD))
}

/// Refined reciprocal: `rcpps` estimate followed by exactly two Newton-Raphson steps
/// `x1 = x0 * (2 - d * x0)`.
///
/// `rcpps` returns ±0 or ±∞ for inputs of ±∞ or ±0, and also where `d` or `1/d` falls
/// outside the normal range. Those lanes take a true `1 / d` instead, so `reciprocal(±0)`
/// is ±∞, `reciprocal(±∞)` is ±0 and the extremes stay finite.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_reciprocal_ps(d: __m128) -> __m128 {
    let two = _mm_set1_ps(2.0);

    let x0 = _mm_rcp_ps(d);
    let x1 = _mm_mul_ps(x0, _mm_sub_ps(two, _mm_mul_ps(d, x0)));
    let x2 = _mm_mul_ps(x1, _mm_sub_ps(two, _mm_mul_ps(d, x1)));

    let is_flushed = _mm_flushed_estimate_mask_ps(x0);
    if _mm_movemask_ps(is_flushed) == 0 {
        return x2;
    }

    _mm_select_ps(is_flushed, _mm_div_ps(_mm_set1_ps(1.0), d), x2)
}

/// Lanes where a `rcpps`/`rsqrtps` estimate came out as ±0 or ±∞.
#[inline(always)]
unsafe fn _mm_flushed_estimate_mask_ps(x0: __m128) -> __m128 {
    let is_zero = _mm_cmpeq_ps(x0, _mm_setzero_ps());
    let is_infinite = _mm_cmpeq_ps(_mm_abs_ps(x0), _mm_set1_ps(f32::INFINITY));
    _mm_or_ps(is_zero, is_infinite)
}

/// Refined reciprocal square root of the low lane: `rsqrtss` estimate followed by
/// exactly two Newton-Raphson steps `x1 = x0 + x0 * (0.5 - 0.5 * d * x0²)`.
///
/// The upper lanes of the result are unspecified.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_sqrt_reciprocal_ss(d: __m128) -> __m128 {
    let half = _mm_set_ss(0.5);
    let input_half = _mm_mul_ss(d, half);

    let x0 = _mm_rsqrt_ss(d);

    let x1_squared = _mm_mul_ss(x0, x0);
    let x1 = _mm_add_ss(
        x0,
        _mm_mul_ss(x0, _mm_sub_ss(half, _mm_mul_ss(input_half, x1_squared))),
    );

    let x2_squared = _mm_mul_ss(x1, x1);
    let x2 = _mm_add_ss(
        x1,
        _mm_mul_ss(x1, _mm_sub_ss(half, _mm_mul_ss(input_half, x2_squared))),
    );

    // subnormal inputs, ±0 and +∞ go through a true square root and divide
    if _mm_movemask_ps(_mm_flushed_estimate_mask_ps(x0)) & 1 != 0 {
        return _mm_div_ss(_mm_set_ss(1.0), _mm_sqrt_ss(d));
    }

    x2
}

/// Rounds toward +∞. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_ceilf_ps(a: __m128) -> __m128 {
    let is_special = _mm_fractionless_mask_ps(a);

    #[cfg(sse4)]
    let result = _mm_ceil_ps(a);

    #[cfg(not(sse4))]
    let result = {
        // Nearest-even conversion, then step up where the candidate is below the input
        let candidate = _mm_cvtepi32_ps(_mm_cvtps_epi32(a));
        let is_below = _mm_cmplt_ps(candidate, a);
        // mask lanes are -1 as integers
        let bias = _mm_cvtepi32_ps(_mm_castps_si128(is_below));
        let candidate = _mm_sub_ps(candidate, bias);

        _mm_or_ps(candidate, _mm_and_ps(a, _mm_sign_mask_ps()))
    };

    _mm_select_ps(is_special, a, result)
}

/// Rounds toward -∞. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_floorf_ps(a: __m128) -> __m128 {
    let is_special = _mm_fractionless_mask_ps(a);

    #[cfg(sse4)]
    let result = _mm_floor_ps(a);

    #[cfg(not(sse4))]
    let result = {
        let candidate = _mm_cvtepi32_ps(_mm_cvtps_epi32(a));
        let is_above = _mm_cmpgt_ps(candidate, a);
        let bias = _mm_cvtepi32_ps(_mm_castps_si128(is_above));
        let candidate = _mm_add_ps(candidate, bias);

        _mm_or_ps(candidate, _mm_and_ps(a, _mm_sign_mask_ps()))
    };

    _mm_select_ps(is_special, a, result)
}

/// Rounds half away from zero. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// The input is biased by the largest float below one half, then truncated, so
/// `0.49999997` rounds to zero.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_roundf_ps(a: __m128) -> __m128 {
    let is_special = _mm_fractionless_mask_ps(a);
    let sign = _mm_and_ps(a, _mm_sign_mask_ps());
    let biased = _mm_add_ps(a, _mm_or_ps(sign, _mm_set1_ps(ROUND_SYMMETRIC_BIAS)));

    #[cfg(sse4)]
    let result = _mm_round_ps::<{ _MM_FROUND_TO_ZERO | _MM_FROUND_NO_EXC }>(biased);

    #[cfg(not(sse4))]
    let result = _mm_or_ps(_mm_cvtepi32_ps(_mm_cvttps_epi32(biased)), sign);

    _mm_select_ps(is_special, a, result)
}

/// Rounds half to even. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// The SSE2 sequence adds and subtracts a same-signed 2²³ so the addition itself
/// rounds to the nearest even integer.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_rintf_ps(a: __m128) -> __m128 {
    let is_special = _mm_fractionless_mask_ps(a);

    #[cfg(sse4)]
    let result = _mm_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(a);

    #[cfg(not(sse4))]
    let result = {
        let sign = _mm_and_ps(a, _mm_sign_mask_ps());
        let bias = _mm_or_ps(sign, _mm_set1_ps(FRACTIONLESS_THRESHOLD));
        let rounded = _mm_sub_ps(_mm_add_ps(a, bias), bias);

        _mm_or_ps(rounded, sign)
    };

    _mm_select_ps(is_special, a, result)
}

/// Maps `angle` into [-π/2, π/2]: subtract the nearest multiple of 2π, then reflect
/// around ±π where |x| > π/2. The mask is set on lanes that were not reflected.
#[inline(always)]
unsafe fn reduce_angle_ps(angle: __m128) -> (__m128, __m128) {
    let quotient = _mm_mul_ps(
        _mm_rintf_ps(_mm_mul_ps(angle, _mm_set1_ps(INV_TWO_PI))),
        _mm_set1_ps(TWO_PI),
    );
    let value = _mm_sub_ps(angle, quotient);

    let reference = _mm_copysign_ps(_mm_set1_ps(PI), value);
    let reflection = _mm_sub_ps(reference, value);

    let is_within = _mm_cmple_ps(_mm_abs_ps(value), _mm_set1_ps(FRAC_PI_2));

    (_mm_select_ps(is_within, value, reflection), is_within)
}

/// Computes the sine of 4 packed single-precision floating-point values.
///
/// # Algorithm Overview
/// 1. Range reduction into [-π, π] with a round-to-even quotient of 2π
/// 2. Reflection around ±π into [-π/2, π/2]
/// 3. Degree 11 odd minimax polynomial evaluated in x²
///
/// # Special Values
/// | Input | Output |
/// |-------|--------|
/// | ±0.0 | ±0.0 |
/// | ±∞ | NaN |
/// | NaN | NaN |
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_sin_ps(angle: __m128) -> __m128 {
    let (x, _) = reduce_angle_ps(angle);
    let x2 = _mm_mul_ps(x, x);

    let mut result = mul_add_ps(_mm_set1_ps(SIN_COEFF_0), x2, SIN_COEFF_1);
    result = mul_add_ps(result, x2, SIN_COEFF_2);
    result = mul_add_ps(result, x2, SIN_COEFF_3);
    result = mul_add_ps(result, x2, SIN_COEFF_4);
    result = mul_add_ps(result, x2, 1.0);

    _mm_mul_ps(result, x)
}

/// Computes the cosine of 4 packed single-precision floating-point values.
///
/// Shares the sine range reduction; the degree 10 even polynomial is negated on
/// lanes that were reflected around ±π.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_cos_ps(angle: __m128) -> __m128 {
    let (x, is_within) = reduce_angle_ps(angle);
    let x2 = _mm_mul_ps(x, x);

    let mut result = mul_add_ps(_mm_set1_ps(COS_COEFF_0), x2, COS_COEFF_1);
    result = mul_add_ps(result, x2, COS_COEFF_2);
    result = mul_add_ps(result, x2, COS_COEFF_3);
    result = mul_add_ps(result, x2, COS_COEFF_4);
    result = mul_add_ps(result, x2, 1.0);

    _mm_or_ps(result, _mm_andnot_ps(is_within, _mm_sign_mask_ps()))
}

/// `poly(|x|) * sqrt(1 - |x|)`
#[inline(always)]
unsafe fn asin_core_ps(abs_value: __m128) -> __m128 {
    let mut result = mul_add_ps(_mm_set1_ps(ASIN_COEFF_0), abs_value, ASIN_COEFF_1);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_2);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_3);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_4);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_5);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_6);
    result = mul_add_ps(result, abs_value, ASIN_COEFF_7);

    _mm_mul_ps(result, _mm_sqrt_ps(_mm_sub_ps(_mm_set1_ps(1.0), abs_value)))
}

/// Computes the arcsine of 4 packed single-precision floating-point values.
///
/// Degree 7 polynomial in |x| scaled by √(1 − |x|), recombined as
/// `copysign(π/2, x) - copysign(p, x)`. Inputs outside [-1, 1] produce NaN.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_asin_ps(value: __m128) -> __m128 {
    let sign_mask = _mm_sign_mask_ps();
    let input_sign = _mm_and_ps(value, sign_mask);

    let result = asin_core_ps(_mm_abs_ps(value));

    let offset = _mm_or_ps(input_sign, _mm_set1_ps(FRAC_PI_2));
    let result = _mm_xor_ps(result, _mm_xor_ps(input_sign, sign_mask));

    _mm_add_ps(offset, result)
}

/// Computes the arccosine of 4 packed single-precision floating-point values.
///
/// Same polynomial as [`_mm_asin_ps`], recombined as `(x < 0 ? π : 0) + copysign(p, x)`.
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_acos_ps(value: __m128) -> __m128 {
    let input_sign = _mm_and_ps(value, _mm_sign_mask_ps());

    let result = asin_core_ps(_mm_abs_ps(value));

    let is_negative = _mm_cmplt_ps(value, _mm_setzero_ps());
    let offset = _mm_and_ps(is_negative, _mm_set1_ps(PI));
    let result = _mm_or_ps(result, input_sign);

    _mm_add_ps(offset, result)
}

/// Computes the arctangent of 4 packed single-precision floating-point values.
///
/// Arguments with |x| > 1 are inverted through [`_mm_reciprocal_ps`] and the result
/// mapped back with atan(x) = π/2 − atan(1/x). Degree 13 odd polynomial in x².
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_atan_ps(value: __m128) -> __m128 {
    let abs_value = _mm_abs_ps(value);
    let is_large = _mm_cmpgt_ps(abs_value, _mm_set1_ps(1.0));

    let x = _mm_select_ps(is_large, _mm_reciprocal_ps(abs_value), abs_value);
    let x2 = _mm_mul_ps(x, x);

    let mut result = mul_add_ps(_mm_set1_ps(ATAN_COEFF_0), x2, ATAN_COEFF_1);
    result = mul_add_ps(result, x2, ATAN_COEFF_2);
    result = mul_add_ps(result, x2, ATAN_COEFF_3);
    result = mul_add_ps(result, x2, ATAN_COEFF_4);
    result = mul_add_ps(result, x2, ATAN_COEFF_5);
    result = mul_add_ps(result, x2, 1.0);
    result = _mm_mul_ps(result, x);

    let remapped = _mm_sub_ps(_mm_set1_ps(FRAC_PI_2), result);
    let result = _mm_select_ps(is_large, remapped, result);

    _mm_or_ps(result, _mm_and_ps(value, _mm_sign_mask_ps()))
}

/// Computes the four-quadrant arctangent of `y / x` for 4 packed lanes.
///
/// # Special Values
/// | y | x | Output |
/// |---|---|--------|
/// | ≠ 0 | ±0 | ±π/2 (sign of y) |
/// | ±0 | ±0 | +0 |
/// | any | < 0 | atan(y/x) ± π (sign of y) |
///
/// # Safety
/// Requires SSE2.
#[inline(always)]
pub unsafe fn _mm_atan2_ps(y: __m128, x: __m128) -> __m128 {
    let zero = _mm_setzero_ps();

    let is_x_zero = _mm_cmpeq_ps(x, zero);
    let is_y_zero = _mm_cmpeq_ps(y, zero);
    let are_inputs_zero = _mm_and_ps(is_x_zero, is_y_zero);
    let is_x_positive = _mm_cmpgt_ps(x, zero);

    let y_sign = _mm_and_ps(y, _mm_sign_mask_ps());
    let offset = _mm_select_ps(is_x_zero, _mm_set1_ps(FRAC_PI_2), _mm_set1_ps(PI));
    let offset = _mm_or_ps(offset, y_sign);
    let offset = _mm_andnot_ps(is_x_positive, offset);
    let offset = _mm_andnot_ps(are_inputs_zero, offset);

    let value = _mm_atan_ps(_mm_div_ps(y, x));
    let value = _mm_andnot_ps(is_x_zero, value);

    _mm_add_ps(value, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn lanes(v: __m128) -> [f32; 4] {
        let mut out = [0.0f32; 4];
        _mm_storeu_ps(out.as_mut_ptr(), v);
        out
    }

    #[test]
    fn test_reciprocal_special_estimates() {
        unsafe {
            let input = _mm_setr_ps(0.0, -0.0, f32::INFINITY, 4.0);
            let [a, b, c, d] = lanes(_mm_reciprocal_ps(input));
            assert_eq!(a, f32::INFINITY);
            assert_eq!(b, f32::NEG_INFINITY);
            assert_eq!(c.to_bits(), 0.0f32.to_bits());
            assert!((d - 0.25).abs() <= 0.25 * 1e-6);
        }
    }

    #[test]
    fn test_rounding_signed_zero() {
        unsafe {
            let input = _mm_setr_ps(-0.5, -0.2, -0.3, 0.7);
            let [ceil, ..] = lanes(_mm_ceilf_ps(input));
            let [_, bankers, ..] = lanes(_mm_rintf_ps(input));
            let [_, _, symmetric, _] = lanes(_mm_roundf_ps(input));
            let [.., floor] = lanes(_mm_floorf_ps(input));

            assert_eq!(ceil.to_bits(), (-0.0f32).to_bits());
            assert_eq!(bankers.to_bits(), (-0.0f32).to_bits());
            assert_eq!(symmetric.to_bits(), (-0.0f32).to_bits());
            assert_eq!(floor.to_bits(), 0.0f32.to_bits());
        }
    }

    #[test]
    fn test_sqrt_reciprocal_ss() {
        unsafe {
            let four = _mm_cvtss_f32(_mm_sqrt_reciprocal_ss(_mm_set_ss(4.0)));
            assert!((four - 0.5).abs() <= 0.5 * 1e-6);

            let zero = _mm_cvtss_f32(_mm_sqrt_reciprocal_ss(_mm_set_ss(0.0)));
            assert_eq!(zero, f32::INFINITY);
        }
    }
}
