use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::simd::{
    mix::{is_consistent, mix_lanes, selector_indices},
    scalar::math,
    traits::{
        impl_mask4_operators, impl_vector4_conversions, SimdMask4, SimdScalar, SimdVector4,
        MASK_TRUE, SIGN_BIT,
    },
};

pub const LANE_COUNT: usize = 4;

/// Four `f32` lanes stored as a plain array.
#[derive(Copy, Clone)]
pub struct F32x4 {
    elements: [f32; LANE_COUNT],
}

/// Lane mask stored as raw `u32` patterns.
#[derive(Copy, Clone)]
pub struct Mask4i {
    elements: [u32; LANE_COUNT],
}

/// A single `f32`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scalarf {
    value: f32,
}

#[inline(always)]
fn lane_mask(condition: bool) -> u32 {
    if condition {
        MASK_TRUE
    } else {
        0
    }
}

impl F32x4 {
    #[inline(always)]
    fn map(self, op: impl Fn(f32) -> f32) -> Self {
        let [x, y, z, w] = self.elements;
        Self {
            elements: [op(x), op(y), op(z), op(w)],
        }
    }

    #[inline(always)]
    fn zip(self, rhs: Self, op: impl Fn(f32, f32) -> f32) -> Self {
        let lhs = self.elements;
        let rhs = rhs.elements;
        Self {
            elements: [
                op(lhs[0], rhs[0]),
                op(lhs[1], rhs[1]),
                op(lhs[2], rhs[2]),
                op(lhs[3], rhs[3]),
            ],
        }
    }

    #[inline(always)]
    fn compare(self, rhs: Self, op: impl Fn(f32, f32) -> bool) -> Mask4i {
        let lhs = self.elements;
        let rhs = rhs.elements;
        Mask4i {
            elements: [
                lane_mask(op(lhs[0], rhs[0])),
                lane_mask(op(lhs[1], rhs[1])),
                lane_mask(op(lhs[2], rhs[2])),
                lane_mask(op(lhs[3], rhs[3])),
            ],
        }
    }

    #[inline(always)]
    fn with_lane(self, lane: usize, value: f32) -> Self {
        let mut elements = self.elements;
        elements[lane] = value;
        Self { elements }
    }
}

impl SimdMask4 for Mask4i {
    #[inline(always)]
    fn from_bools(x: bool, y: bool, z: bool, w: bool) -> Self {
        Self {
            elements: [lane_mask(x), lane_mask(y), lane_mask(z), lane_mask(w)],
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u32; 4] {
        self.elements
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        self.elements
            .iter()
            .enumerate()
            .fold(0, |bits, (lane, &value)| bits | ((value >> 31) << lane))
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.elements;
        let rhs = rhs.elements;
        Self {
            elements: [x & rhs[0], y & rhs[1], z & rhs[2], w & rhs[3]],
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.elements;
        let rhs = rhs.elements;
        Self {
            elements: [x | rhs[0], y | rhs[1], z | rhs[2], w | rhs[3]],
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.elements;
        let rhs = rhs.elements;
        Self {
            elements: [x ^ rhs[0], y ^ rhs[1], z ^ rhs[2], w ^ rhs[3]],
        }
    }

    #[inline(always)]
    fn not(self) -> Self {
        let [x, y, z, w] = self.elements;
        Self {
            elements: [!x, !y, !z, !w],
        }
    }
}

impl SimdScalar for Scalarf {
    #[inline(always)]
    fn set(value: f32) -> Self {
        Self { value }
    }

    #[inline(always)]
    fn cast(self) -> f32 {
        self.value
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::set(math::abs(self.value))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self::set(math::min(self.value, rhs.value))
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self::set(math::max(self.value, rhs.value))
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        Self::set(self.value * v1.value + v2.value)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self::set(self.value.sqrt())
    }

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        Self::set(1.0 / self.value.sqrt())
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        Self::set(1.0 / self.value)
    }
}

impl SimdVector4 for F32x4 {
    type Mask = Mask4i;
    type Scalar = Scalarf;

    #[inline(always)]
    fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            elements: [x, y, z, w],
        }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: [value; LANE_COUNT],
        }
    }

    #[inline(always)]
    fn splat_scalar(value: Scalarf) -> Self {
        Self::splat(value.value)
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f32) -> Self {
        Self {
            elements: std::ptr::read_unaligned(ptr as *const [f32; LANE_COUNT]),
        }
    }

    #[inline(always)]
    unsafe fn load1_ptr(ptr: *const f32) -> Self {
        Self::set(ptr.read_unaligned(), 0.0, 0.0, 0.0)
    }

    #[inline(always)]
    unsafe fn load2_ptr(ptr: *const f32) -> Self {
        Self::set(ptr.read_unaligned(), ptr.add(1).read_unaligned(), 0.0, 0.0)
    }

    #[inline(always)]
    unsafe fn load3_ptr(ptr: *const f32) -> Self {
        Self::set(
            ptr.read_unaligned(),
            ptr.add(1).read_unaligned(),
            ptr.add(2).read_unaligned(),
            0.0,
        )
    }

    #[inline(always)]
    fn from_array(lanes: [f32; 4]) -> Self {
        Self { elements: lanes }
    }

    #[inline(always)]
    fn to_array(self) -> [f32; 4] {
        self.elements
    }

    #[inline(always)]
    fn get_x(self) -> f32 {
        self.elements[0]
    }

    #[inline(always)]
    fn get_y(self) -> f32 {
        self.elements[1]
    }

    #[inline(always)]
    fn get_z(self) -> f32 {
        self.elements[2]
    }

    #[inline(always)]
    fn get_w(self) -> f32 {
        self.elements[3]
    }

    #[inline(always)]
    fn get_x_scalar(self) -> Scalarf {
        Scalarf::set(self.elements[0])
    }

    #[inline(always)]
    fn get_y_scalar(self) -> Scalarf {
        Scalarf::set(self.elements[1])
    }

    #[inline(always)]
    fn get_z_scalar(self) -> Scalarf {
        Scalarf::set(self.elements[2])
    }

    #[inline(always)]
    fn get_w_scalar(self) -> Scalarf {
        Scalarf::set(self.elements[3])
    }

    #[inline(always)]
    fn set_x_scalar(self, value: Scalarf) -> Self {
        self.with_lane(0, value.value)
    }

    #[inline(always)]
    fn set_y_scalar(self, value: Scalarf) -> Self {
        self.with_lane(1, value.value)
    }

    #[inline(always)]
    fn set_z_scalar(self, value: Scalarf) -> Self {
        self.with_lane(2, value.value)
    }

    #[inline(always)]
    fn set_w_scalar(self, value: Scalarf) -> Self {
        self.with_lane(3, value.value)
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        self.map(|value| 1.0 / value)
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        self.map(f32::sqrt)
    }

    #[inline(always)]
    fn abs(self) -> Self {
        self.map(math::abs)
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, math::min)
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        self.zip(rhs, math::max)
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        (self * v1) + v2
    }

    #[inline(always)]
    fn neg_mul_sub(self, v1: Self, v2: Self) -> Self {
        v2 - (self * v1)
    }

    #[inline(always)]
    fn copy_sign(self, sign: Self) -> Self {
        self.zip(sign, math::copy_sign)
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        self.map(math::ceil)
    }

    #[inline(always)]
    fn floor(self) -> Self {
        self.map(math::floor)
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        self.map(math::round_symmetric)
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        self.map(math::round_bankers)
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Mask4i {
        self.compare(rhs, |lhs, rhs| lhs == rhs)
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Mask4i {
        self.compare(rhs, |lhs, rhs| lhs < rhs)
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Mask4i {
        self.compare(rhs, |lhs, rhs| lhs <= rhs)
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4i {
        self.compare(rhs, |lhs, rhs| lhs > rhs)
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Mask4i {
        self.compare(rhs, |lhs, rhs| lhs >= rhs)
    }

    #[inline(always)]
    fn select(mask: Mask4i, if_true: Self, if_false: Self) -> Self {
        let mut elements = [0.0; LANE_COUNT];
        for (lane, output) in elements.iter_mut().enumerate() {
            let lane_bits = mask.elements[lane];
            let bits = (if_true.elements[lane].to_bits() & lane_bits)
                | (if_false.elements[lane].to_bits() & !lane_bits);
            *output = f32::from_bits(bits);
        }
        Self { elements }
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> Scalarf {
        let [x, y, z, w] = (self * rhs).elements;
        Scalarf::set((x + z) + (y + w))
    }

    #[inline(always)]
    fn dot3(self, rhs: Self) -> Scalarf {
        let [x, y, z, _] = (self * rhs).elements;
        Scalarf::set((x + y) + z)
    }

    #[inline(always)]
    fn mix<const SELECTOR: u32, const SHUFFLE: i32>(self, input1: Self) -> Self {
        let indices = const {
            assert!(
                is_consistent(SELECTOR, SHUFFLE),
                "mix shuffle immediate does not match its selector"
            );
            selector_indices(SELECTOR)
        };

        Self {
            elements: mix_lanes(indices, self.elements, input1.elements),
        }
    }

    #[inline(always)]
    fn sign(self) -> Self {
        self.map(|value| f32::from_bits(1.0f32.to_bits() | (value.to_bits() & SIGN_BIT)))
    }

    #[inline(always)]
    fn sin(self) -> Self {
        self.map(math::sin)
    }

    #[inline(always)]
    fn cos(self) -> Self {
        self.map(math::cos)
    }

    #[inline(always)]
    fn tan(self) -> Self {
        self.map(math::tan)
    }

    #[inline(always)]
    fn asin(self) -> Self {
        self.map(math::asin)
    }

    #[inline(always)]
    fn acos(self) -> Self {
        self.map(math::acos)
    }

    #[inline(always)]
    fn atan(self) -> Self {
        self.map(math::atan)
    }

    #[inline(always)]
    fn atan2(self, x: Self) -> Self {
        self.zip(x, math::atan2)
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |lhs, rhs| lhs + rhs)
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |lhs, rhs| lhs - rhs)
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |lhs, rhs| lhs * rhs)
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |lhs, rhs| lhs / rhs)
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        self.map(|value| -value)
    }
}

impl Add for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self::set(self.value + rhs.value)
    }
}

impl Sub for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self::set(self.value - rhs.value)
    }
}

impl Mul for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self::set(self.value * rhs.value)
    }
}

impl Div for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self::set(self.value / rhs.value)
    }
}

impl Neg for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::set(-self.value)
    }
}

impl_vector4_conversions!(F32x4);
impl_mask4_operators!(Mask4i);
