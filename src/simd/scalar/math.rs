//! Per-lane reference implementations of the rounding and transcendental kernels.
//!
//! Each function reproduces, one `f32` at a time, the exact operation sequence the
//! register backends run on four lanes: same range reduction, same coefficients, same
//! Horner order, multiply and add rounded separately. On SSE targets this makes the
//! fallback bit-identical to the vector code for everything except the refined
//! reciprocal estimates.
//!
//! # Special values
//!
//! | Function | NaN | ±∞ | \|x\| ≥ 2²³ | signed zero |
//! |----------|-----|----|-------------|-------------|
//! | `ceil`, `floor`, `round_*` | unchanged | unchanged | unchanged | preserved |
//! | `sin`, `cos`, `tan` | NaN | NaN | reduced (low accuracy) | `sin(-0) = -0` |
//! | `asin`, `acos` | NaN | NaN | NaN | `asin(-0) = -0` |
//! | `atan` | NaN | ±π/2 | ≈ ±π/2 | `atan(-0) = -0` |

use std::f32::consts::{FRAC_PI_2, PI};

use crate::simd::traits::SIGN_BIT;

/// Smallest magnitude with no representable fractional part.
pub const FRACTIONLESS_THRESHOLD: f32 = 8_388_608.0; // 2^23

/// Largest `f32` below one half.
pub const ROUND_SYMMETRIC_BIAS: f32 = 0.499_999_97;

pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const INV_TWO_PI: f32 = 1.0 / std::f32::consts::TAU;

// Degree 11 sine, odd polynomial in x evaluated in x²
pub const SIN_COEFF_0: f32 = -2.382_854_469_296_091_8e-8;
pub const SIN_COEFF_1: f32 = 2.752_155_777_052_678_3e-6;
pub const SIN_COEFF_2: f32 = -1.984_078_218_425_031_4e-4;
pub const SIN_COEFF_3: f32 = 8.333_330_318_352_594_2e-3;
pub const SIN_COEFF_4: f32 = -1.666_666_660_172_126_9e-1;

// Degree 10 cosine, even polynomial evaluated in x²
pub const COS_COEFF_0: f32 = -2.605_161_546_487_266_8e-7;
pub const COS_COEFF_1: f32 = 2.476_049_508_892_685_9e-5;
pub const COS_COEFF_2: f32 = -1.388_837_766_103_989_7e-3;
pub const COS_COEFF_3: f32 = 4.166_663_886_533_861_2e-2;
pub const COS_COEFF_4: f32 = -4.999_999_950_869_586_9e-1;

// Degree 7 arcsine/arccosine polynomial in |x|
pub const ASIN_COEFF_0: f32 = -1.269_061_433_958_995_6e-3;
pub const ASIN_COEFF_1: f32 = 6.707_230_467_668_523_5e-3;
pub const ASIN_COEFF_2: f32 = -1.716_203_118_439_807_4e-2;
pub const ASIN_COEFF_3: f32 = 3.096_159_497_761_163_9e-2;
pub const ASIN_COEFF_4: f32 = -5.020_784_305_284_564_7e-2;
pub const ASIN_COEFF_5: f32 = 8.898_694_657_334_616_0e-2;
pub const ASIN_COEFF_6: f32 = -2.145_996_007_692_982_9e-1;
pub const ASIN_COEFF_7: f32 = FRAC_PI_2;

// Degree 13 arctangent, odd polynomial in x evaluated in x²
pub const ATAN_COEFF_0: f32 = 7.212_885_363_344_412_3e-3;
pub const ATAN_COEFF_1: f32 = -3.505_968_083_641_164_4e-2;
pub const ATAN_COEFF_2: f32 = 8.167_588_285_994_043_0e-2;
pub const ATAN_COEFF_3: f32 = -1.337_465_732_545_126_7e-1;
pub const ATAN_COEFF_4: f32 = 1.985_656_350_571_716_2e-1;
pub const ATAN_COEFF_5: f32 = -3.332_499_857_920_217_0e-1;

#[inline(always)]
fn or_sign(value: f32, sign: u32) -> f32 {
    f32::from_bits(value.to_bits() | sign)
}

#[inline(always)]
fn sign_bits(value: f32) -> u32 {
    value.to_bits() & SIGN_BIT
}

/// Magnitude of `value` with the sign bit of `sign`.
#[inline(always)]
pub fn copy_sign(value: f32, sign: f32) -> f32 {
    f32::from_bits((value.to_bits() & !SIGN_BIT) | sign_bits(sign))
}

#[inline(always)]
pub fn abs(value: f32) -> f32 {
    f32::from_bits(value.to_bits() & !SIGN_BIT)
}

/// `lhs < rhs ? lhs : rhs`, NaN in either operand yields `rhs`.
#[inline(always)]
pub fn min(lhs: f32, rhs: f32) -> f32 {
    if lhs < rhs {
        lhs
    } else {
        rhs
    }
}

/// `lhs > rhs ? lhs : rhs`, NaN in either operand yields `rhs`.
#[inline(always)]
pub fn max(lhs: f32, rhs: f32) -> f32 {
    if lhs > rhs {
        lhs
    } else {
        rhs
    }
}

/// NaN, ±∞ and magnitudes of at least 2²³ go through rounding unchanged.
#[inline(always)]
pub fn is_fractionless(value: f32) -> bool {
    !(abs(value) < FRACTIONLESS_THRESHOLD)
}

#[inline(always)]
pub fn ceil(value: f32) -> f32 {
    if is_fractionless(value) {
        return value;
    }

    // |value| < 2^23 so the conversion is exact
    let truncated = value as i32 as f32;
    let candidate = if truncated < value {
        truncated + 1.0
    } else {
        truncated
    };

    or_sign(candidate, sign_bits(value))
}

#[inline(always)]
pub fn floor(value: f32) -> f32 {
    if is_fractionless(value) {
        return value;
    }

    let truncated = value as i32 as f32;
    let candidate = if truncated > value {
        truncated - 1.0
    } else {
        truncated
    };

    or_sign(candidate, sign_bits(value))
}

#[inline(always)]
pub fn round_symmetric(value: f32) -> f32 {
    if is_fractionless(value) {
        return value;
    }

    let biased = value + copy_sign(ROUND_SYMMETRIC_BIAS, value);
    or_sign(biased as i32 as f32, sign_bits(value))
}

#[inline(always)]
pub fn round_bankers(value: f32) -> f32 {
    if is_fractionless(value) {
        return value;
    }

    // The addition rounds to the nearest even integer
    let bias = copy_sign(FRACTIONLESS_THRESHOLD, value);
    let rounded = (value + bias) - bias;

    or_sign(rounded, sign_bits(value))
}

/// Maps `angle` into [-π/2, π/2]; the flag reports a reflection around ±π.
#[inline(always)]
fn reduce_angle(angle: f32) -> (f32, bool) {
    let quotient = round_bankers(angle * INV_TWO_PI) * TWO_PI;
    let value = angle - quotient;

    let reference = copy_sign(PI, value);
    let reflection = reference - value;

    if abs(value) <= FRAC_PI_2 {
        (value, false)
    } else {
        (reflection, true)
    }
}

#[inline(always)]
pub fn sin(angle: f32) -> f32 {
    let (x, _) = reduce_angle(angle);
    let x2 = x * x;

    let mut result = SIN_COEFF_0 * x2 + SIN_COEFF_1;
    result = result * x2 + SIN_COEFF_2;
    result = result * x2 + SIN_COEFF_3;
    result = result * x2 + SIN_COEFF_4;
    result = result * x2 + 1.0;
    result * x
}

#[inline(always)]
pub fn cos(angle: f32) -> f32 {
    let (x, is_reflected) = reduce_angle(angle);
    let x2 = x * x;

    let mut result = COS_COEFF_0 * x2 + COS_COEFF_1;
    result = result * x2 + COS_COEFF_2;
    result = result * x2 + COS_COEFF_3;
    result = result * x2 + COS_COEFF_4;
    result = result * x2 + 1.0;

    if is_reflected {
        or_sign(result, SIGN_BIT)
    } else {
        result
    }
}

#[inline(always)]
pub fn tan(angle: f32) -> f32 {
    let cos = cos(angle);

    if cos == 0.0 {
        return copy_sign(f32::INFINITY, angle);
    }

    sin(angle) / cos
}

/// `poly(|x|) * sqrt(1 - |x|)`, shared by `asin` and `acos`.
#[inline(always)]
fn asin_core(abs_value: f32) -> f32 {
    let mut result = ASIN_COEFF_0 * abs_value + ASIN_COEFF_1;
    result = result * abs_value + ASIN_COEFF_2;
    result = result * abs_value + ASIN_COEFF_3;
    result = result * abs_value + ASIN_COEFF_4;
    result = result * abs_value + ASIN_COEFF_5;
    result = result * abs_value + ASIN_COEFF_6;
    result = result * abs_value + ASIN_COEFF_7;

    result * (1.0 - abs_value).sqrt()
}

#[inline(always)]
pub fn asin(value: f32) -> f32 {
    let result = asin_core(abs(value));

    // asin(x) = π/2 - acos(x): the polynomial term takes the opposite sign
    let offset = copy_sign(FRAC_PI_2, value);
    let result = f32::from_bits(result.to_bits() ^ (sign_bits(value) ^ SIGN_BIT));

    offset + result
}

#[inline(always)]
pub fn acos(value: f32) -> f32 {
    let result = asin_core(abs(value));

    let offset = if value < 0.0 { PI } else { 0.0 };
    let result = or_sign(result, sign_bits(value));

    offset + result
}

#[inline(always)]
pub fn atan(value: f32) -> f32 {
    let abs_value = abs(value);
    let is_large = abs_value > 1.0;

    let x = if is_large { 1.0 / abs_value } else { abs_value };
    let x2 = x * x;

    let mut result = ATAN_COEFF_0 * x2 + ATAN_COEFF_1;
    result = result * x2 + ATAN_COEFF_2;
    result = result * x2 + ATAN_COEFF_3;
    result = result * x2 + ATAN_COEFF_4;
    result = result * x2 + ATAN_COEFF_5;
    result = result * x2 + 1.0;
    result *= x;

    let result = if is_large {
        FRAC_PI_2 - result
    } else {
        result
    };

    or_sign(result, sign_bits(value))
}

#[inline(always)]
pub fn atan2(y: f32, x: f32) -> f32 {
    let is_x_zero = x == 0.0;
    let is_y_zero = y == 0.0;
    let are_inputs_zero = is_x_zero && is_y_zero;

    let offset = if is_x_zero { FRAC_PI_2 } else { PI };
    let offset = or_sign(offset, sign_bits(y));
    let offset = if x > 0.0 || are_inputs_zero {
        0.0
    } else {
        offset
    };

    let value = if is_x_zero { 0.0 } else { atan(y / x) };

    value + offset
}
