//! Backend-independent operation set for 4-lane vectors, 1-lane scalars and lane masks.
//!
//! Every backend (`sse`, `neon`, `scalar`) implements these traits for its own
//! register types. The active backend is fixed at build time; the traits only exist so
//! the backends share one contract and so tests can drive the scalar reference
//! implementation side by side with the accelerated one.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Sign bit of an IEEE754 single-precision float.
pub const SIGN_BIT: u32 = 0x8000_0000;

/// Lane value of a `true` mask lane.
pub const MASK_TRUE: u32 = 0xFFFF_FFFF;

/// A 4-lane boolean where each lane is all-bits-set or all-bits-clear.
pub trait SimdMask4: Copy + Send + Sync + Debug {
    /// Builds a mask from four booleans (x, y, z, w).
    fn from_bools(x: bool, y: bool, z: bool, w: bool) -> Self;

    /// Raw lane bit patterns.
    fn to_lanes(self) -> [u32; 4];

    /// Packs the top bit of each lane into bits 0..4 (x is bit 0).
    fn bitmask(self) -> u32;

    fn and(self, rhs: Self) -> Self;

    fn or(self, rhs: Self) -> Self;

    fn xor(self, rhs: Self) -> Self;

    fn not(self) -> Self;
}

/// A single active lane kept in the backend's native register form.
///
/// Chaining scalar-producing operations through this type (a dot product feeding a
/// multiply, a lane read feeding a lane write) avoids round trips through `f32`.
pub trait SimdScalar:
    Copy
    + Send
    + Sync
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    fn set(value: f32) -> Self;

    fn cast(self) -> f32;

    fn abs(self) -> Self;

    fn min(self, rhs: Self) -> Self;

    fn max(self, rhs: Self) -> Self;

    /// `v2 + self * v1`
    fn mul_add(self, v1: Self, v2: Self) -> Self;

    fn sqrt(self) -> Self;

    /// `1 / sqrt(self)`; register backends refine the hardware estimate with exactly
    /// two Newton-Raphson steps.
    fn sqrt_reciprocal(self) -> Self;

    fn reciprocal(self) -> Self;
}

/// Four packed `f32` lanes in (x, y, z, w) order.
pub trait SimdVector4:
    Copy
    + Send
    + Sync
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    type Mask: SimdMask4;
    type Scalar: SimdScalar;

    fn set(x: f32, y: f32, z: f32, w: f32) -> Self;

    fn splat(value: f32) -> Self;

    fn splat_scalar(value: Self::Scalar) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::splat(0.0)
    }

    /// Loads four lanes from unaligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 4 consecutive `f32`.
    unsafe fn load_ptr(ptr: *const f32) -> Self;

    /// Loads the x lane, the remaining lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 1 `f32`.
    unsafe fn load1_ptr(ptr: *const f32) -> Self;

    /// Loads the x and y lanes, the remaining lanes are zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 2 consecutive `f32`.
    unsafe fn load2_ptr(ptr: *const f32) -> Self;

    /// Loads the x, y and z lanes, w is zero.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading 3 consecutive `f32`.
    unsafe fn load3_ptr(ptr: *const f32) -> Self;

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        unsafe { Self::load_ptr(lanes.as_ptr()) }
    }

    fn to_array(self) -> [f32; 4];

    fn get_x(self) -> f32;
    fn get_y(self) -> f32;
    fn get_z(self) -> f32;
    fn get_w(self) -> f32;

    fn get_x_scalar(self) -> Self::Scalar;
    fn get_y_scalar(self) -> Self::Scalar;
    fn get_z_scalar(self) -> Self::Scalar;
    fn get_w_scalar(self) -> Self::Scalar;

    fn set_x_scalar(self, value: Self::Scalar) -> Self;
    fn set_y_scalar(self, value: Self::Scalar) -> Self;
    fn set_z_scalar(self, value: Self::Scalar) -> Self;
    fn set_w_scalar(self, value: Self::Scalar) -> Self;

    #[inline(always)]
    fn set_x(self, value: f32) -> Self {
        self.set_x_scalar(Self::Scalar::set(value))
    }

    #[inline(always)]
    fn set_y(self, value: f32) -> Self {
        self.set_y_scalar(Self::Scalar::set(value))
    }

    #[inline(always)]
    fn set_z(self, value: f32) -> Self {
        self.set_z_scalar(Self::Scalar::set(value))
    }

    #[inline(always)]
    fn set_w(self, value: f32) -> Self {
        self.set_w_scalar(Self::Scalar::set(value))
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Self::Scalar) -> Self {
        self * Self::splat_scalar(rhs)
    }

    /// `1 / self` refined with exactly two Newton-Raphson iterations on register
    /// backends. Lanes whose estimate is flushed to ±0/±∞ (inputs of ±0 or ±∞, or a
    /// reciprocal outside the normal range) use a true division instead.
    fn reciprocal(self) -> Self;

    fn sqrt(self) -> Self;

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        self.sqrt().reciprocal()
    }

    /// Clears the sign bit.
    fn abs(self) -> Self;

    /// `self < rhs ? self : rhs` per lane.
    fn min(self, rhs: Self) -> Self;

    /// `self > rhs ? self : rhs` per lane.
    fn max(self, rhs: Self) -> Self;

    /// `v2 + self * v1`
    fn mul_add(self, v1: Self, v2: Self) -> Self;

    /// `v2 - self * v1`
    fn neg_mul_sub(self, v1: Self, v2: Self) -> Self;

    /// Magnitude of `self` with the sign bit of `sign`.
    fn copy_sign(self, sign: Self) -> Self;

    /// `±1.0` taken from the sign bit, so `-0.0` maps to `-1.0`.
    #[inline(always)]
    fn sign(self) -> Self {
        Self::splat(1.0).copy_sign(self)
    }

    fn ceil(self) -> Self;

    fn floor(self) -> Self;

    /// Rounds half away from zero.
    fn round_symmetric(self) -> Self;

    /// Rounds half to even.
    fn round_bankers(self) -> Self;

    fn eq_elements(self, rhs: Self) -> Self::Mask;

    fn lt_elements(self, rhs: Self) -> Self::Mask;

    fn le_elements(self, rhs: Self) -> Self::Mask;

    fn gt_elements(self, rhs: Self) -> Self::Mask;

    fn ge_elements(self, rhs: Self) -> Self::Mask;

    /// Bitwise blend: lanes of `if_true` where `mask` is set, `if_false` elsewhere.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// 4-lane dot product reduced as `(x + z) + (y + w)`.
    fn dot(self, rhs: Self) -> Self::Scalar;

    /// 3-lane dot product reduced as `(x + y) + z`.
    fn dot3(self, rhs: Self) -> Self::Scalar;

    /// Lane permutation across `self` (lanes X..W) and `input1` (lanes A..D).
    ///
    /// `SELECTOR` and `SHUFFLE` come from [`crate::simd::mix::mix_selector`] and
    /// [`crate::simd::mix::mix_shuffle_mask`]; the `vector_mix!` macro computes both.
    fn mix<const SELECTOR: u32, const SHUFFLE: i32>(self, input1: Self) -> Self;

    fn sin(self) -> Self;

    fn cos(self) -> Self;

    /// `sin / cos`, with `cos == 0` mapped to an infinity carrying the angle's sign.
    #[inline(always)]
    fn tan(self) -> Self {
        let sin = self.sin();
        let cos = self.cos();

        let is_cos_zero = cos.eq_elements(Self::zero());
        let signed_infinity = Self::splat(f32::INFINITY).copy_sign(self);

        Self::select(is_cos_zero, signed_infinity, sin / cos)
    }

    fn asin(self) -> Self;

    fn acos(self) -> Self;

    fn atan(self) -> Self;

    /// Four-quadrant arctangent of `self / x`.
    fn atan2(self, x: Self) -> Self;
}

/// Implements `Debug`, `PartialEq` and array conversions for a backend vector type
/// in terms of its [`SimdVector4`] implementation.
macro_rules! impl_vector4_conversions {
    ($vector:ty) => {
        impl ::std::fmt::Debug for $vector {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let [x, y, z, w] = $crate::simd::traits::SimdVector4::to_array(*self);
                f.debug_tuple(stringify!($vector))
                    .field(&x)
                    .field(&y)
                    .field(&z)
                    .field(&w)
                    .finish()
            }
        }

        impl PartialEq for $vector {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $crate::simd::traits::SimdVector4::to_array(*self)
                    == $crate::simd::traits::SimdVector4::to_array(*other)
            }
        }

        impl From<[f32; 4]> for $vector {
            #[inline(always)]
            fn from(lanes: [f32; 4]) -> Self {
                <$vector as $crate::simd::traits::SimdVector4>::from_array(lanes)
            }
        }

        impl From<$vector> for [f32; 4] {
            #[inline(always)]
            fn from(vector: $vector) -> Self {
                $crate::simd::traits::SimdVector4::to_array(vector)
            }
        }

        impl ::std::ops::AddAssign for $vector {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::std::ops::SubAssign for $vector {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::std::ops::MulAssign for $vector {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl ::std::ops::DivAssign for $vector {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }
    };
}

/// Implements `Debug` and the `&`, `|`, `^`, `!` operators for a backend mask type.
macro_rules! impl_mask4_operators {
    ($mask:ty) => {
        impl ::std::fmt::Debug for $mask {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let lanes = $crate::simd::traits::SimdMask4::to_lanes(*self);
                f.debug_tuple(stringify!($mask))
                    .field(&(lanes[0] != 0))
                    .field(&(lanes[1] != 0))
                    .field(&(lanes[2] != 0))
                    .field(&(lanes[3] != 0))
                    .finish()
            }
        }

        impl PartialEq for $mask {
            #[inline(always)]
            fn eq(&self, other: &Self) -> bool {
                $crate::simd::traits::SimdMask4::to_lanes(*self)
                    == $crate::simd::traits::SimdMask4::to_lanes(*other)
            }
        }

        impl Eq for $mask {}

        impl ::std::ops::BitAnd for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitand(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdMask4::and(self, rhs)
            }
        }

        impl ::std::ops::BitOr for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitor(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdMask4::or(self, rhs)
            }
        }

        impl ::std::ops::BitXor for $mask {
            type Output = Self;

            #[inline(always)]
            fn bitxor(self, rhs: Self) -> Self {
                $crate::simd::traits::SimdMask4::xor(self, rhs)
            }
        }

        impl ::std::ops::Not for $mask {
            type Output = Self;

            #[inline(always)]
            fn not(self) -> Self {
                $crate::simd::traits::SimdMask4::not(self)
            }
        }
    };
}

pub(crate) use impl_mask4_operators;
pub(crate) use impl_vector4_conversions;
