//! Free-function API over [`Vector4f`].
//!
//! Every function is a thin `#[inline(always)]` wrapper over the active backend's
//! [`SimdVector4`] implementation, so the names read the same on every target and
//! calls compile down to the backend instruction sequence.
//!
//! Lane order is (x, y, z, w). Partial reductions suffixed `2`/`3` only look at the
//! first two/three lanes; the remaining lanes never influence the result.

use crate::simd::mix::Mix4;
use crate::simd::traits::{SimdMask4, SimdScalar, SimdVector4};
use crate::{Mask4i, Scalarf, Vector4f};

const XY_BITS: u32 = 0b0011;
const XYZ_BITS: u32 = 0b0111;
const XYZW_BITS: u32 = 0b1111;

// ---------------------------------------------------------------------------
// Construction, loads and stores
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn vector_set(x: f32, y: f32, z: f32, w: f32) -> Vector4f {
    Vector4f::set(x, y, z, w)
}

/// Broadcasts `value` into all four lanes.
#[inline(always)]
pub fn vector_splat(value: f32) -> Vector4f {
    Vector4f::splat(value)
}

#[inline(always)]
pub fn vector_splat_scalar(value: Scalarf) -> Vector4f {
    Vector4f::splat_scalar(value)
}

#[inline(always)]
pub fn vector_zero() -> Vector4f {
    Vector4f::zero()
}

#[inline(always)]
pub fn vector_from_array(lanes: [f32; 4]) -> Vector4f {
    Vector4f::from_array(lanes)
}

#[inline(always)]
pub fn vector_to_array(input: Vector4f) -> [f32; 4] {
    input.to_array()
}

#[inline(always)]
pub fn vector_load(input: &[f32; 4]) -> Vector4f {
    unsafe { Vector4f::load_ptr(input.as_ptr()) }
}

/// Loads x, the remaining lanes are zero.
#[inline(always)]
pub fn vector_load1(input: &[f32; 1]) -> Vector4f {
    unsafe { Vector4f::load1_ptr(input.as_ptr()) }
}

/// Loads x and y, the remaining lanes are zero.
#[inline(always)]
pub fn vector_load2(input: &[f32; 2]) -> Vector4f {
    unsafe { Vector4f::load2_ptr(input.as_ptr()) }
}

/// Loads x, y and z, w is zero.
#[inline(always)]
pub fn vector_load3(input: &[f32; 3]) -> Vector4f {
    unsafe { Vector4f::load3_ptr(input.as_ptr()) }
}

/// Loads four lanes from unaligned memory.
///
/// # Safety
///
/// `ptr` must be valid for reading 4 consecutive `f32`.
#[inline(always)]
pub unsafe fn vector_load_ptr(ptr: *const f32) -> Vector4f {
    Vector4f::load_ptr(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reading 1 `f32`.
#[inline(always)]
pub unsafe fn vector_load1_ptr(ptr: *const f32) -> Vector4f {
    Vector4f::load1_ptr(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reading 2 consecutive `f32`.
#[inline(always)]
pub unsafe fn vector_load2_ptr(ptr: *const f32) -> Vector4f {
    Vector4f::load2_ptr(ptr)
}

/// # Safety
///
/// `ptr` must be valid for reading 3 consecutive `f32`.
#[inline(always)]
pub unsafe fn vector_load3_ptr(ptr: *const f32) -> Vector4f {
    Vector4f::load3_ptr(ptr)
}

/// Loads `input` into all four lanes.
#[inline(always)]
pub fn vector_broadcast(input: &f32) -> Vector4f {
    Vector4f::splat(*input)
}

#[inline(always)]
pub fn vector_store(input: Vector4f, output: &mut [f32; 4]) {
    *output = input.to_array();
}

#[inline(always)]
pub fn vector_store1(input: Vector4f, output: &mut [f32; 1]) {
    output[0] = input.get_x();
}

#[inline(always)]
pub fn vector_store2(input: Vector4f, output: &mut [f32; 2]) {
    let [x, y, _, _] = input.to_array();
    *output = [x, y];
}

#[inline(always)]
pub fn vector_store3(input: Vector4f, output: &mut [f32; 3]) {
    let [x, y, z, _] = input.to_array();
    *output = [x, y, z];
}

#[inline(always)]
fn store_lane_bytes(input: Vector4f, output: &mut [u8]) {
    for (chunk, lane) in output.chunks_exact_mut(4).zip(input.to_array()) {
        chunk.copy_from_slice(&lane.to_ne_bytes());
    }
}

/// Writes the four lanes in native byte order.
#[inline(always)]
pub fn vector_store_bytes(input: Vector4f, output: &mut [u8; 16]) {
    store_lane_bytes(input, output);
}

#[inline(always)]
pub fn vector_store1_bytes(input: Vector4f, output: &mut [u8; 4]) {
    store_lane_bytes(input, output);
}

#[inline(always)]
pub fn vector_store2_bytes(input: Vector4f, output: &mut [u8; 8]) {
    store_lane_bytes(input, output);
}

#[inline(always)]
pub fn vector_store3_bytes(input: Vector4f, output: &mut [u8; 12]) {
    store_lane_bytes(input, output);
}

// ---------------------------------------------------------------------------
// Lane accessors
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn vector_get_x(input: Vector4f) -> f32 {
    input.get_x()
}

#[inline(always)]
pub fn vector_get_y(input: Vector4f) -> f32 {
    input.get_y()
}

#[inline(always)]
pub fn vector_get_z(input: Vector4f) -> f32 {
    input.get_z()
}

#[inline(always)]
pub fn vector_get_w(input: Vector4f) -> f32 {
    input.get_w()
}

/// Reads x without leaving the vector register file.
#[inline(always)]
pub fn vector_get_x_as_scalar(input: Vector4f) -> Scalarf {
    input.get_x_scalar()
}

#[inline(always)]
pub fn vector_get_y_as_scalar(input: Vector4f) -> Scalarf {
    input.get_y_scalar()
}

#[inline(always)]
pub fn vector_get_z_as_scalar(input: Vector4f) -> Scalarf {
    input.get_z_scalar()
}

#[inline(always)]
pub fn vector_get_w_as_scalar(input: Vector4f) -> Scalarf {
    input.get_w_scalar()
}

/// Reads the lane named by `component`; `A..D` alias `X..W`.
#[inline(always)]
pub fn vector_get_component(input: Vector4f, component: Mix4) -> f32 {
    match component.lane() {
        0 => input.get_x(),
        1 => input.get_y(),
        2 => input.get_z(),
        _ => input.get_w(),
    }
}

/// Returns a copy of `input` with x replaced; the other lanes keep their exact bits.
#[inline(always)]
pub fn vector_set_x(input: Vector4f, value: f32) -> Vector4f {
    input.set_x(value)
}

#[inline(always)]
pub fn vector_set_y(input: Vector4f, value: f32) -> Vector4f {
    input.set_y(value)
}

#[inline(always)]
pub fn vector_set_z(input: Vector4f, value: f32) -> Vector4f {
    input.set_z(value)
}

#[inline(always)]
pub fn vector_set_w(input: Vector4f, value: f32) -> Vector4f {
    input.set_w(value)
}

#[inline(always)]
pub fn vector_set_x_scalar(input: Vector4f, value: Scalarf) -> Vector4f {
    input.set_x_scalar(value)
}

#[inline(always)]
pub fn vector_set_y_scalar(input: Vector4f, value: Scalarf) -> Vector4f {
    input.set_y_scalar(value)
}

#[inline(always)]
pub fn vector_set_z_scalar(input: Vector4f, value: Scalarf) -> Vector4f {
    input.set_z_scalar(value)
}

#[inline(always)]
pub fn vector_set_w_scalar(input: Vector4f, value: Scalarf) -> Vector4f {
    input.set_w_scalar(value)
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn vector_add(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs + rhs
}

#[inline(always)]
pub fn vector_sub(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs - rhs
}

#[inline(always)]
pub fn vector_mul(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs * rhs
}

#[inline(always)]
pub fn vector_mul_scalar(lhs: Vector4f, rhs: f32) -> Vector4f {
    lhs * Vector4f::splat(rhs)
}

#[inline(always)]
pub fn vector_mul_scalarf(lhs: Vector4f, rhs: Scalarf) -> Vector4f {
    lhs.mul_scalar(rhs)
}

/// On `neon32` the division goes through the refined reciprocal of `rhs`.
#[inline(always)]
pub fn vector_div(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs / rhs
}

/// `lhs < rhs ? lhs : rhs` per lane, so a NaN in either operand yields `rhs`.
#[inline(always)]
pub fn vector_min(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs.min(rhs)
}

/// `lhs > rhs ? lhs : rhs` per lane.
#[inline(always)]
pub fn vector_max(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    lhs.max(rhs)
}

#[inline(always)]
pub fn vector_abs(input: Vector4f) -> Vector4f {
    input.abs()
}

#[inline(always)]
pub fn vector_neg(input: Vector4f) -> Vector4f {
    -input
}

/// `1 / input` through the hardware estimate and exactly two Newton-Raphson steps.
///
/// `±0` maps to `±∞` and `±∞` to `±0` on every backend.
#[inline(always)]
pub fn vector_reciprocal(input: Vector4f) -> Vector4f {
    input.reciprocal()
}

#[inline(always)]
pub fn vector_sqrt(input: Vector4f) -> Vector4f {
    input.sqrt()
}

#[inline(always)]
pub fn vector_sqrt_reciprocal(input: Vector4f) -> Vector4f {
    input.sqrt_reciprocal()
}

/// `v2 + v0 * v1`. Fused on `neon64`, two roundings elsewhere.
#[inline(always)]
pub fn vector_mul_add(v0: Vector4f, v1: Vector4f, v2: Vector4f) -> Vector4f {
    v0.mul_add(v1, v2)
}

#[inline(always)]
pub fn vector_mul_add_scalar(v0: Vector4f, s1: f32, v2: Vector4f) -> Vector4f {
    v0.mul_add(Vector4f::splat(s1), v2)
}

#[inline(always)]
pub fn vector_mul_add_scalarf(v0: Vector4f, s1: Scalarf, v2: Vector4f) -> Vector4f {
    v0.mul_add(Vector4f::splat_scalar(s1), v2)
}

/// `v2 - v0 * v1`. Fused on `neon64`, two roundings elsewhere.
#[inline(always)]
pub fn vector_neg_mul_sub(v0: Vector4f, v1: Vector4f, v2: Vector4f) -> Vector4f {
    v0.neg_mul_sub(v1, v2)
}

#[inline(always)]
pub fn vector_neg_mul_sub_scalar(v0: Vector4f, s1: f32, v2: Vector4f) -> Vector4f {
    v0.neg_mul_sub(Vector4f::splat(s1), v2)
}

#[inline(always)]
pub fn vector_neg_mul_sub_scalarf(v0: Vector4f, s1: Scalarf, v2: Vector4f) -> Vector4f {
    v0.neg_mul_sub(Vector4f::splat_scalar(s1), v2)
}

/// Magnitude of `input` with the sign bit of `sign`.
#[inline(always)]
pub fn vector_copy_sign(input: Vector4f, sign: Vector4f) -> Vector4f {
    input.copy_sign(sign)
}

/// `±1.0` from the sign bit of each lane; `-0.0` maps to `-1.0`.
#[inline(always)]
pub fn vector_sign(input: Vector4f) -> Vector4f {
    input.sign()
}

// ---------------------------------------------------------------------------
// Rounding
// ---------------------------------------------------------------------------
//
// NaN (payload included), ±∞ and magnitudes of at least 2²³ pass through unchanged.

#[inline(always)]
pub fn vector_ceil(input: Vector4f) -> Vector4f {
    input.ceil()
}

#[inline(always)]
pub fn vector_floor(input: Vector4f) -> Vector4f {
    input.floor()
}

/// Rounds half away from zero: `1.5 → 2`, `-1.5 → -2`, `0.49999997 → 0`.
#[inline(always)]
pub fn vector_round_symmetric(input: Vector4f) -> Vector4f {
    input.round_symmetric()
}

/// Rounds half to even: `2.5 → 2`, `1.5 → 2`, `-2.5 → -2`.
#[inline(always)]
pub fn vector_round_bankers(input: Vector4f) -> Vector4f {
    input.round_bankers()
}

/// `input - floor(input)`.
#[inline(always)]
pub fn vector_fraction(input: Vector4f) -> Vector4f {
    input - input.floor()
}

// ---------------------------------------------------------------------------
// Transcendental functions
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn vector_sin(angle: Vector4f) -> Vector4f {
    angle.sin()
}

#[inline(always)]
pub fn vector_cos(angle: Vector4f) -> Vector4f {
    angle.cos()
}

/// `sin / cos`; lanes where the cosine is exactly zero return an infinity with the
/// angle's sign.
#[inline(always)]
pub fn vector_tan(angle: Vector4f) -> Vector4f {
    angle.tan()
}

/// NaN outside [-1, 1].
#[inline(always)]
pub fn vector_asin(value: Vector4f) -> Vector4f {
    value.asin()
}

/// NaN outside [-1, 1].
#[inline(always)]
pub fn vector_acos(value: Vector4f) -> Vector4f {
    value.acos()
}

#[inline(always)]
pub fn vector_atan(value: Vector4f) -> Vector4f {
    value.atan()
}

/// Four-quadrant arctangent of `y / x`.
///
/// `atan2(0, 0) = 0`, `atan2(±y, 0) = ±π/2`.
#[inline(always)]
pub fn vector_atan2(y: Vector4f, x: Vector4f) -> Vector4f {
    y.atan2(x)
}

// ---------------------------------------------------------------------------
// Comparisons
// ---------------------------------------------------------------------------

#[inline(always)]
pub fn vector_equal(lhs: Vector4f, rhs: Vector4f) -> Mask4i {
    lhs.eq_elements(rhs)
}

#[inline(always)]
pub fn vector_less_than(lhs: Vector4f, rhs: Vector4f) -> Mask4i {
    lhs.lt_elements(rhs)
}

#[inline(always)]
pub fn vector_less_equal(lhs: Vector4f, rhs: Vector4f) -> Mask4i {
    lhs.le_elements(rhs)
}

#[inline(always)]
pub fn vector_greater_than(lhs: Vector4f, rhs: Vector4f) -> Mask4i {
    lhs.gt_elements(rhs)
}

#[inline(always)]
pub fn vector_greater_equal(lhs: Vector4f, rhs: Vector4f) -> Mask4i {
    lhs.ge_elements(rhs)
}

macro_rules! impl_mask_reductions {
    ($compare:ident, $bits:expr, $all:ident, $any:ident) => {
        #[inline(always)]
        pub fn $all(lhs: Vector4f, rhs: Vector4f) -> bool {
            lhs.$compare(rhs).bitmask() & $bits == $bits
        }

        #[inline(always)]
        pub fn $any(lhs: Vector4f, rhs: Vector4f) -> bool {
            lhs.$compare(rhs).bitmask() & $bits != 0
        }
    };
}

impl_mask_reductions!(lt_elements, XYZW_BITS, vector_all_less_than, vector_any_less_than);
impl_mask_reductions!(lt_elements, XY_BITS, vector_all_less_than2, vector_any_less_than2);
impl_mask_reductions!(lt_elements, XYZ_BITS, vector_all_less_than3, vector_any_less_than3);

impl_mask_reductions!(le_elements, XYZW_BITS, vector_all_less_equal, vector_any_less_equal);
impl_mask_reductions!(le_elements, XY_BITS, vector_all_less_equal2, vector_any_less_equal2);
impl_mask_reductions!(le_elements, XYZ_BITS, vector_all_less_equal3, vector_any_less_equal3);

impl_mask_reductions!(
    ge_elements,
    XYZW_BITS,
    vector_all_greater_equal,
    vector_any_greater_equal
);
impl_mask_reductions!(
    ge_elements,
    XY_BITS,
    vector_all_greater_equal2,
    vector_any_greater_equal2
);
impl_mask_reductions!(
    ge_elements,
    XYZ_BITS,
    vector_all_greater_equal3,
    vector_any_greater_equal3
);

impl_mask_reductions!(eq_elements, XYZW_BITS, vector_all_equal, vector_any_equal);
impl_mask_reductions!(eq_elements, XY_BITS, vector_all_equal2, vector_any_equal2);
impl_mask_reductions!(eq_elements, XYZ_BITS, vector_all_equal3, vector_any_equal3);

#[inline(always)]
fn near_equal_bits(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> u32 {
    (lhs - rhs)
        .abs()
        .le_elements(Vector4f::splat(threshold))
        .bitmask()
}

/// `|lhs - rhs| <= threshold` on all four lanes. See
/// [`crate::DEFAULT_NEAR_EQUAL_THRESHOLD`] for the customary threshold.
#[inline(always)]
pub fn vector_all_near_equal(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) == XYZW_BITS
}

#[inline(always)]
pub fn vector_all_near_equal2(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) & XY_BITS == XY_BITS
}

#[inline(always)]
pub fn vector_all_near_equal3(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) & XYZ_BITS == XYZ_BITS
}

#[inline(always)]
pub fn vector_any_near_equal(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) != 0
}

#[inline(always)]
pub fn vector_any_near_equal2(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) & XY_BITS != 0
}

#[inline(always)]
pub fn vector_any_near_equal3(lhs: Vector4f, rhs: Vector4f, threshold: f32) -> bool {
    near_equal_bits(lhs, rhs, threshold) & XYZ_BITS != 0
}

#[inline(always)]
fn finite_bits(input: Vector4f) -> u32 {
    input
        .abs()
        .lt_elements(Vector4f::splat(f32::INFINITY))
        .bitmask()
}

/// `false` if any lane is NaN or ±∞.
#[inline(always)]
pub fn vector_is_finite(input: Vector4f) -> bool {
    finite_bits(input) == XYZW_BITS
}

#[inline(always)]
pub fn vector_is_finite2(input: Vector4f) -> bool {
    finite_bits(input) & XY_BITS == XY_BITS
}

#[inline(always)]
pub fn vector_is_finite3(input: Vector4f) -> bool {
    finite_bits(input) & XYZ_BITS == XYZ_BITS
}

/// Bitwise blend: `if_true` lanes where `mask` is set, `if_false` elsewhere.
#[inline(always)]
pub fn vector_select(mask: Mask4i, if_true: Vector4f, if_false: Vector4f) -> Vector4f {
    Vector4f::select(mask, if_true, if_false)
}

// ---------------------------------------------------------------------------
// Swizzles
// ---------------------------------------------------------------------------

/// Lane permutation of `input0` (X..W) and `input1` (A..D).
///
/// The const parameters are easiest to build with the [`crate::vector_mix!`] macro.
/// A `SHUFFLE` that does not match `SELECTOR` fails to compile.
#[inline(always)]
pub fn vector_mix<const SELECTOR: u32, const SHUFFLE: i32>(
    input0: Vector4f,
    input1: Vector4f,
) -> Vector4f {
    input0.mix::<SELECTOR, SHUFFLE>(input1)
}

#[inline(always)]
pub fn vector_dup_x(input: Vector4f) -> Vector4f {
    crate::vector_mix!(input, input, X, X, X, X)
}

#[inline(always)]
pub fn vector_dup_y(input: Vector4f) -> Vector4f {
    crate::vector_mix!(input, input, Y, Y, Y, Y)
}

#[inline(always)]
pub fn vector_dup_z(input: Vector4f) -> Vector4f {
    crate::vector_mix!(input, input, Z, Z, Z, Z)
}

#[inline(always)]
pub fn vector_dup_w(input: Vector4f) -> Vector4f {
    crate::vector_mix!(input, input, W, W, W, W)
}

// ---------------------------------------------------------------------------
// Reductions
// ---------------------------------------------------------------------------

/// 4-lane dot product, summed as `(x + z) + (y + w)` on every backend.
#[inline(always)]
pub fn vector_dot(lhs: Vector4f, rhs: Vector4f) -> f32 {
    lhs.dot(rhs).cast()
}

#[inline(always)]
pub fn vector_dot_as_scalar(lhs: Vector4f, rhs: Vector4f) -> Scalarf {
    lhs.dot(rhs)
}

#[inline(always)]
pub fn vector_dot_as_vector(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    Vector4f::splat_scalar(lhs.dot(rhs))
}

/// 3-lane dot product, summed as `(x + y) + z`.
#[inline(always)]
pub fn vector_dot3(lhs: Vector4f, rhs: Vector4f) -> f32 {
    lhs.dot3(rhs).cast()
}

#[inline(always)]
pub fn vector_dot3_as_scalar(lhs: Vector4f, rhs: Vector4f) -> Scalarf {
    lhs.dot3(rhs)
}

#[inline(always)]
pub fn vector_dot3_as_vector(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    Vector4f::splat_scalar(lhs.dot3(rhs))
}

#[inline(always)]
pub fn vector_length_squared(input: Vector4f) -> f32 {
    vector_dot(input, input)
}

#[inline(always)]
pub fn vector_length_squared3(input: Vector4f) -> f32 {
    vector_dot3(input, input)
}

#[inline(always)]
pub fn vector_length(input: Vector4f) -> f32 {
    input.dot(input).sqrt().cast()
}

#[inline(always)]
pub fn vector_length3(input: Vector4f) -> f32 {
    input.dot3(input).sqrt().cast()
}

#[inline(always)]
pub fn vector_length_reciprocal(input: Vector4f) -> f32 {
    input.dot(input).sqrt_reciprocal().cast()
}

#[inline(always)]
pub fn vector_length_reciprocal3(input: Vector4f) -> f32 {
    input.dot3(input).sqrt_reciprocal().cast()
}

#[inline(always)]
pub fn vector_distance3(lhs: Vector4f, rhs: Vector4f) -> f32 {
    vector_length3(rhs - lhs)
}

#[inline(always)]
pub fn vector_min_component(input: Vector4f) -> f32 {
    let zwzw = crate::vector_mix!(input, input, Z, W, Z, W);
    let xz_yw = input.min(zwzw);
    xz_yw.min(vector_dup_y(xz_yw)).get_x()
}

#[inline(always)]
pub fn vector_max_component(input: Vector4f) -> f32 {
    let zwzw = crate::vector_mix!(input, input, Z, W, Z, W);
    let xz_yw = input.max(zwzw);
    xz_yw.max(vector_dup_y(xz_yw)).get_x()
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// 3D cross product of the xyz lanes; w is zero.
#[inline(always)]
pub fn vector_cross3(lhs: Vector4f, rhs: Vector4f) -> Vector4f {
    let lhs_yzx = crate::vector_mix!(lhs, lhs, Y, Z, X, W);
    let lhs_zxy = crate::vector_mix!(lhs, lhs, Z, X, Y, W);
    let rhs_yzx = crate::vector_mix!(rhs, rhs, Y, Z, X, W);
    let rhs_zxy = crate::vector_mix!(rhs, rhs, Z, X, Y, W);

    let cross = lhs_zxy.neg_mul_sub(rhs_yzx, lhs_yzx * rhs_zxy);
    cross.set_w(0.0)
}

/// `start + (end - start) * alpha`, evaluated as
/// `(start - start * alpha) + end * alpha` so `alpha = 1` returns `end` exactly.
#[inline(always)]
pub fn vector_lerp(start: Vector4f, end: Vector4f, alpha: f32) -> Vector4f {
    let alpha = Vector4f::splat(alpha);
    end.mul_add(alpha, start.neg_mul_sub(alpha, start))
}

#[inline(always)]
pub fn vector_lerp_scalarf(start: Vector4f, end: Vector4f, alpha: Scalarf) -> Vector4f {
    let alpha = Vector4f::splat_scalar(alpha);
    end.mul_add(alpha, start.neg_mul_sub(alpha, start))
}

#[inline(always)]
pub fn vector_clamp(input: Vector4f, min: Vector4f, max: Vector4f) -> Vector4f {
    max.min(min.max(input))
}

/// Scales the xyz length of `input` to one.
///
/// Returns `fallback` when the squared xyz length is below `threshold` or NaN. The
/// customary threshold is [`crate::DEFAULT_NORMALIZE_THRESHOLD`].
#[inline(always)]
pub fn vector_normalize3(input: Vector4f, fallback: Vector4f, threshold: f32) -> Vector4f {
    let length_squared = input.dot3(input);

    if length_squared.cast() >= threshold {
        input.mul_scalar(length_squared.sqrt_reciprocal())
    } else {
        fallback
    }
}

/// [`vector_normalize3`] with [`crate::DEFAULT_NORMALIZE_THRESHOLD`].
#[inline(always)]
pub fn vector_normalize3_default(input: Vector4f, fallback: Vector4f) -> Vector4f {
    vector_normalize3(input, fallback, crate::DEFAULT_NORMALIZE_THRESHOLD)
}

/// Scales all four lanes by the reciprocal xyz length, with no zero-length check.
///
/// A zero xyz length scales by `+∞`, so zero lanes become NaN and the rest infinite.
#[inline(always)]
pub fn vector_normalize3_unchecked(input: Vector4f) -> Vector4f {
    input.mul_scalar(input.dot3(input).sqrt_reciprocal())
}
