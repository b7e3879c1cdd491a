//! ARM NEON kernels for rounding, refined reciprocals and transcendental functions.
//!
//! Two instruction tiers share this module:
//!
//! - **`neon64`**: full AArch64 Advanced SIMD. Native `vdivq_f32`/`vsqrtq_f32`,
//!   fused multiply-add in the polynomial steps and the `vrnd*` rounding family.
//! - **`neon32`**: the ARMv7 NEON subset. Division goes through the refined reciprocal,
//!   multiply-accumulate is not fused, and rounding uses integer conversions.
//!
//! Coefficients and range reduction are shared with [`crate::simd::scalar::math`].
//! With fused multiply-add the `neon64` polynomials differ from the scalar reference in
//! the last bits; the results stay inside the documented error bounds.
//!
//! # Function Reference
//!
//! | Function | Domain | Range | Max abs error |
//! |----------|--------|-------|---------------|
//! | `vsinq_f32` | [-4π, 4π] | [-1, 1] | 1e-5 |
//! | `vcosq_f32` | [-4π, 4π] | [-1, 1] | 1e-5 |
//! | `vasinq_f32` | [-1, 1] | [-π/2, π/2] | 1e-5 |
//! | `vacosq_f32` | [-1, 1] | [0, π] | 1e-5 |
//! | `vatanq_f32` | All reals | [-π/2, π/2] | 1e-5 |
//! | `vatan2q_f32` | All reals × All reals | [-π, π] | 1e-5 |
//! | `vreciprocalq_f32` | All reals | All reals | 1e-6 relative |
//! | `vceilq_f32`, `vfloorq_f32` | All reals | All reals | Exact |
//! | `vround_symmetricq_f32`, `vround_bankersq_f32` | All reals | All reals | Exact |

use std::arch::aarch64::*;

use std::f32::consts::{FRAC_PI_2, PI};

use crate::simd::scalar::math::{
    ASIN_COEFF_0, ASIN_COEFF_1, ASIN_COEFF_2, ASIN_COEFF_3, ASIN_COEFF_4, ASIN_COEFF_5,
    ASIN_COEFF_6, ASIN_COEFF_7, ATAN_COEFF_0, ATAN_COEFF_1, ATAN_COEFF_2, ATAN_COEFF_3,
    ATAN_COEFF_4, ATAN_COEFF_5, COS_COEFF_0, COS_COEFF_1, COS_COEFF_2, COS_COEFF_3,
    COS_COEFF_4, FRACTIONLESS_THRESHOLD, INV_TWO_PI, SIN_COEFF_0, SIN_COEFF_1, SIN_COEFF_2,
    SIN_COEFF_3, SIN_COEFF_4, TWO_PI,
};
#[cfg(neon32)]
use crate::simd::scalar::math::ROUND_SYMMETRIC_BIAS;
use crate::simd::traits::SIGN_BIT;

/// All lanes set to the sign bit.
#[inline(always)]
pub unsafe fn vsign_maskq_u32() -> uint32x4_t {
    vdupq_n_u32(SIGN_BIT)
}

/// Sign bits of `a`.
#[inline(always)]
unsafe fn vsignq_u32(a: float32x4_t) -> uint32x4_t {
    vandq_u32(vreinterpretq_u32_f32(a), vsign_maskq_u32())
}

/// Sets the bits of `sign` in `a`.
#[inline(always)]
unsafe fn vor_signq_f32(a: float32x4_t, sign: uint32x4_t) -> float32x4_t {
    vreinterpretq_f32_u32(vorrq_u32(vreinterpretq_u32_f32(a), sign))
}

/// Magnitude of `value` with the sign bit of `sign`.
#[inline(always)]
pub unsafe fn vcopysignq_f32(value: float32x4_t, sign: float32x4_t) -> float32x4_t {
    vbslq_f32(vsign_maskq_u32(), sign, value)
}

/// `c + a * b`: fused on `neon64`, two roundings on `neon32`.
#[inline(always)]
pub unsafe fn vmul_addq_f32(a: float32x4_t, b: float32x4_t, c: float32x4_t) -> float32x4_t {
    #[cfg(neon32)]
    {
        vmlaq_f32(c, a, b)
    }

    #[cfg(not(neon32))]
    {
        vfmaq_f32(c, a, b)
    }
}

/// `c - a * b`: fused on `neon64`, two roundings on `neon32`.
#[inline(always)]
pub unsafe fn vneg_mul_subq_f32(a: float32x4_t, b: float32x4_t, c: float32x4_t) -> float32x4_t {
    #[cfg(neon32)]
    {
        vmlsq_f32(c, a, b)
    }

    #[cfg(not(neon32))]
    {
        vfmsq_f32(c, a, b)
    }
}

/// Horner step `a * b + c` with a broadcast constant.
#[inline(always)]
unsafe fn horner_step(a: float32x4_t, b: float32x4_t, c: f32) -> float32x4_t {
    vmul_addq_f32(a, b, vdupq_n_f32(c))
}

/// Lanes where an estimate is ±0, ±∞ or subnormal. These come from inputs of ±0 or ±∞,
/// or from inputs whose reciprocal is outside the normal range.
#[inline(always)]
unsafe fn vflushed_estimate_maskq_f32(x0: float32x4_t) -> uint32x4_t {
    let abs = vabsq_f32(x0);
    let is_tiny = vcltq_f32(abs, vdupq_n_f32(f32::MIN_POSITIVE));
    let is_infinite = vceqq_f32(abs, vdupq_n_f32(f32::INFINITY));
    vorrq_u32(is_tiny, is_infinite)
}

#[inline(always)]
unsafe fn vany_lane_setq_u32(mask: uint32x4_t) -> bool {
    let halves = vorr_u32(vget_low_u32(mask), vget_high_u32(mask));
    vget_lane_u32::<0>(vpmax_u32(halves, halves)) != 0
}

/// Correctly rounded `1 / d`: native divide on `neon64`, the scalar unit lane by lane on
/// `neon32`.
#[inline(always)]
unsafe fn vexact_reciprocalq_f32(d: float32x4_t) -> float32x4_t {
    #[cfg(neon32)]
    {
        let mut lanes = [0.0f32; 4];
        vst1q_f32(lanes.as_mut_ptr(), d);
        let lanes = lanes.map(|value| 1.0 / value);
        vld1q_f32(lanes.as_ptr())
    }

    #[cfg(not(neon32))]
    {
        vdivq_f32(vdupq_n_f32(1.0), d)
    }
}

/// Refined reciprocal: `vrecpeq_f32` estimate followed by exactly two Newton-Raphson
/// steps `x1 = x0 * (2 - d * x0)` through `vrecpsq_f32`.
///
/// Lanes whose estimate is ±0, ±∞ or subnormal take a true `1 / d`, so
/// `reciprocal(±0)` is ±∞, `reciprocal(±∞)` is ±0 and the extremes stay finite.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vreciprocalq_f32(d: float32x4_t) -> float32x4_t {
    let x0 = vrecpeq_f32(d);
    let x1 = vmulq_f32(x0, vrecpsq_f32(d, x0));
    let x2 = vmulq_f32(x1, vrecpsq_f32(d, x1));

    let is_flushed = vflushed_estimate_maskq_f32(x0);
    if !vany_lane_setq_u32(is_flushed) {
        return x2;
    }

    vbslq_f32(is_flushed, vexact_reciprocalq_f32(d), x2)
}

/// Lane-wise division: native on `neon64`, `lhs * reciprocal(rhs)` on `neon32`.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vdivideq_f32(lhs: float32x4_t, rhs: float32x4_t) -> float32x4_t {
    #[cfg(neon32)]
    {
        vmulq_f32(lhs, vreciprocalq_f32(rhs))
    }

    #[cfg(not(neon32))]
    {
        vdivq_f32(lhs, rhs)
    }
}

/// Lane-wise square root. ARMv7 NEON has no vector square root, so `neon32` uses the
/// scalar unit lane by lane.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vsquare_rootq_f32(a: float32x4_t) -> float32x4_t {
    #[cfg(neon32)]
    {
        let mut lanes = [0.0f32; 4];
        vst1q_f32(lanes.as_mut_ptr(), a);
        let lanes = lanes.map(f32::sqrt);
        vld1q_f32(lanes.as_ptr())
    }

    #[cfg(not(neon32))]
    {
        vsqrtq_f32(a)
    }
}

/// Refined reciprocal square root of one value: `vrsqrte_f32` estimate followed by
/// exactly two Newton-Raphson steps through `vrsqrts_f32`.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vsqrt_reciprocal_f32(value: f32) -> f32 {
    let d = vdup_n_f32(value);

    let x0 = vrsqrte_f32(d);
    let x1 = vmul_f32(x0, vrsqrts_f32(vmul_f32(x0, d), x0));
    let x2 = vmul_f32(x1, vrsqrts_f32(vmul_f32(x1, d), x1));

    let x0 = vget_lane_f32::<0>(x0);
    if x0.abs() < f32::MIN_POSITIVE || x0.abs() == f32::INFINITY {
        1.0 / value.sqrt()
    } else {
        vget_lane_f32::<0>(x2)
    }
}

/// Lanes holding NaN, ±∞ or a magnitude of at least 2²³.
#[inline(always)]
pub unsafe fn vfractionless_maskq_f32(a: float32x4_t) -> uint32x4_t {
    let is_small = vcltq_f32(vabsq_f32(a), vdupq_n_f32(FRACTIONLESS_THRESHOLD));
    vmvnq_u32(is_small)
}

/// Truncation toward zero through the integer unit; exact for |a| < 2²³.
#[cfg(neon32)]
#[inline(always)]
unsafe fn vtruncateq_f32(a: float32x4_t) -> float32x4_t {
    vcvtq_f32_s32(vcvtq_s32_f32(a))
}

/// Rounds toward +∞. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vceilq_f32(a: float32x4_t) -> float32x4_t {
    let is_special = vfractionless_maskq_f32(a);

    #[cfg(neon32)]
    let result = {
        let truncated = vtruncateq_f32(a);
        let is_below = vcltq_f32(truncated, a);
        let candidate = vbslq_f32(is_below, vaddq_f32(truncated, vdupq_n_f32(1.0)), truncated);
        vor_signq_f32(candidate, vsignq_u32(a))
    };

    #[cfg(not(neon32))]
    let result = vrndpq_f32(a);

    vbslq_f32(is_special, a, result)
}

/// Rounds toward -∞. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vfloorq_f32(a: float32x4_t) -> float32x4_t {
    let is_special = vfractionless_maskq_f32(a);

    #[cfg(neon32)]
    let result = {
        let truncated = vtruncateq_f32(a);
        let is_above = vcgtq_f32(truncated, a);
        let candidate = vbslq_f32(is_above, vsubq_f32(truncated, vdupq_n_f32(1.0)), truncated);
        vor_signq_f32(candidate, vsignq_u32(a))
    };

    #[cfg(not(neon32))]
    let result = vrndmq_f32(a);

    vbslq_f32(is_special, a, result)
}

/// Rounds half away from zero. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vround_symmetricq_f32(a: float32x4_t) -> float32x4_t {
    let is_special = vfractionless_maskq_f32(a);

    #[cfg(neon32)]
    let result = {
        let sign = vsignq_u32(a);
        let bias = vor_signq_f32(vdupq_n_f32(ROUND_SYMMETRIC_BIAS), sign);
        vor_signq_f32(vtruncateq_f32(vaddq_f32(a, bias)), sign)
    };

    #[cfg(not(neon32))]
    let result = vrndaq_f32(a);

    vbslq_f32(is_special, a, result)
}

/// Rounds half to even. NaN, ±∞ and |x| ≥ 2²³ are returned unchanged.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vround_bankersq_f32(a: float32x4_t) -> float32x4_t {
    let is_special = vfractionless_maskq_f32(a);

    #[cfg(neon32)]
    let result = {
        let sign = vsignq_u32(a);
        let bias = vor_signq_f32(vdupq_n_f32(FRACTIONLESS_THRESHOLD), sign);
        let rounded = vsubq_f32(vaddq_f32(a, bias), bias);
        vor_signq_f32(rounded, sign)
    };

    #[cfg(not(neon32))]
    let result = vrndnq_f32(a);

    vbslq_f32(is_special, a, result)
}

/// Maps `angle` into [-π/2, π/2]. The mask is set on lanes that were not reflected.
#[inline(always)]
unsafe fn vreduce_angleq_f32(angle: float32x4_t) -> (float32x4_t, uint32x4_t) {
    let quotient = vmulq_f32(
        vround_bankersq_f32(vmulq_f32(angle, vdupq_n_f32(INV_TWO_PI))),
        vdupq_n_f32(TWO_PI),
    );
    let value = vsubq_f32(angle, quotient);

    let reference = vcopysignq_f32(vdupq_n_f32(PI), value);
    let reflection = vsubq_f32(reference, value);

    let is_within = vcleq_f32(vabsq_f32(value), vdupq_n_f32(FRAC_PI_2));

    (vbslq_f32(is_within, value, reflection), is_within)
}

/// Computes the sine of 4 packed single-precision floating-point values.
///
/// # Algorithm Overview
/// 1. Range reduction into [-π, π] with a round-to-even quotient of 2π
/// 2. Reflection around ±π into [-π/2, π/2]
/// 3. Degree 11 odd minimax polynomial evaluated in x²
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vsinq_f32(angle: float32x4_t) -> float32x4_t {
    let (x, _) = vreduce_angleq_f32(angle);
    let x2 = vmulq_f32(x, x);

    let mut result = horner_step(vdupq_n_f32(SIN_COEFF_0), x2, SIN_COEFF_1);
    result = horner_step(result, x2, SIN_COEFF_2);
    result = horner_step(result, x2, SIN_COEFF_3);
    result = horner_step(result, x2, SIN_COEFF_4);
    result = horner_step(result, x2, 1.0);

    vmulq_f32(result, x)
}

/// Computes the cosine of 4 packed single-precision floating-point values.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vcosq_f32(angle: float32x4_t) -> float32x4_t {
    let (x, is_within) = vreduce_angleq_f32(angle);
    let x2 = vmulq_f32(x, x);

    let mut result = horner_step(vdupq_n_f32(COS_COEFF_0), x2, COS_COEFF_1);
    result = horner_step(result, x2, COS_COEFF_2);
    result = horner_step(result, x2, COS_COEFF_3);
    result = horner_step(result, x2, COS_COEFF_4);
    result = horner_step(result, x2, 1.0);

    let reflected_sign = vbicq_u32(vsign_maskq_u32(), is_within);
    vor_signq_f32(result, reflected_sign)
}

#[inline(always)]
unsafe fn vasin_coreq_f32(abs_value: float32x4_t) -> float32x4_t {
    let mut result = horner_step(vdupq_n_f32(ASIN_COEFF_0), abs_value, ASIN_COEFF_1);
    result = horner_step(result, abs_value, ASIN_COEFF_2);
    result = horner_step(result, abs_value, ASIN_COEFF_3);
    result = horner_step(result, abs_value, ASIN_COEFF_4);
    result = horner_step(result, abs_value, ASIN_COEFF_5);
    result = horner_step(result, abs_value, ASIN_COEFF_6);
    result = horner_step(result, abs_value, ASIN_COEFF_7);

    vmulq_f32(
        result,
        vsquare_rootq_f32(vsubq_f32(vdupq_n_f32(1.0), abs_value)),
    )
}

/// Computes the arcsine of 4 packed single-precision floating-point values.
///
/// Inputs outside [-1, 1] produce NaN.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vasinq_f32(value: float32x4_t) -> float32x4_t {
    let input_sign = vsignq_u32(value);

    let result = vasin_coreq_f32(vabsq_f32(value));

    let offset = vor_signq_f32(vdupq_n_f32(FRAC_PI_2), input_sign);
    let flip = veorq_u32(input_sign, vsign_maskq_u32());
    let result = vreinterpretq_f32_u32(veorq_u32(vreinterpretq_u32_f32(result), flip));

    vaddq_f32(offset, result)
}

/// Computes the arccosine of 4 packed single-precision floating-point values.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vacosq_f32(value: float32x4_t) -> float32x4_t {
    let input_sign = vsignq_u32(value);

    let result = vasin_coreq_f32(vabsq_f32(value));

    let is_negative = vcltq_f32(value, vdupq_n_f32(0.0));
    let offset = vreinterpretq_f32_u32(vandq_u32(
        is_negative,
        vreinterpretq_u32_f32(vdupq_n_f32(PI)),
    ));
    let result = vor_signq_f32(result, input_sign);

    vaddq_f32(offset, result)
}

/// Computes the arctangent of 4 packed single-precision floating-point values.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vatanq_f32(value: float32x4_t) -> float32x4_t {
    let abs_value = vabsq_f32(value);
    let is_large = vcgtq_f32(abs_value, vdupq_n_f32(1.0));

    let x = vbslq_f32(is_large, vreciprocalq_f32(abs_value), abs_value);
    let x2 = vmulq_f32(x, x);

    let mut result = horner_step(vdupq_n_f32(ATAN_COEFF_0), x2, ATAN_COEFF_1);
    result = horner_step(result, x2, ATAN_COEFF_2);
    result = horner_step(result, x2, ATAN_COEFF_3);
    result = horner_step(result, x2, ATAN_COEFF_4);
    result = horner_step(result, x2, ATAN_COEFF_5);
    result = horner_step(result, x2, 1.0);
    result = vmulq_f32(result, x);

    let remapped = vsubq_f32(vdupq_n_f32(FRAC_PI_2), result);
    let result = vbslq_f32(is_large, remapped, result);

    vor_signq_f32(result, vsignq_u32(value))
}

/// Computes the four-quadrant arctangent of `y / x` for 4 packed lanes.
///
/// # Safety
/// Requires NEON.
#[inline(always)]
pub unsafe fn vatan2q_f32(y: float32x4_t, x: float32x4_t) -> float32x4_t {
    let zero = vdupq_n_f32(0.0);

    let is_x_zero = vceqq_f32(x, zero);
    let is_y_zero = vceqq_f32(y, zero);
    let are_inputs_zero = vandq_u32(is_x_zero, is_y_zero);
    let is_x_positive = vcgtq_f32(x, zero);

    let offset = vbslq_f32(is_x_zero, vdupq_n_f32(FRAC_PI_2), vdupq_n_f32(PI));
    let offset = vreinterpretq_u32_f32(vor_signq_f32(offset, vsignq_u32(y)));
    let offset = vbicq_u32(offset, vorrq_u32(is_x_positive, are_inputs_zero));

    let value = vatanq_f32(vdivideq_f32(y, x));
    let value = vbicq_u32(vreinterpretq_u32_f32(value), is_x_zero);

    vaddq_f32(vreinterpretq_f32_u32(value), vreinterpretq_f32_u32(offset))
}
