use std::arch::aarch64::*;

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::simd::{
    mix::{is_consistent, mix_lanes, selector_indices, MixPattern},
    neon::math::{
        vacosq_f32, vasinq_f32, vatan2q_f32, vatanq_f32, vceilq_f32, vcopysignq_f32, vcosq_f32,
        vdivideq_f32, vfloorq_f32, vmul_addq_f32, vneg_mul_subq_f32, vreciprocalq_f32,
        vround_bankersq_f32, vround_symmetricq_f32, vsinq_f32, vsqrt_reciprocal_f32,
        vsquare_rootq_f32,
    },
    scalar::math,
    traits::{impl_mask4_operators, impl_vector4_conversions, SimdMask4, SimdScalar, SimdVector4},
};

pub const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone)]
pub struct F32x4 {
    elements: float32x4_t,
}

/// Lane mask held in a `uint32x4_t`, each lane all-ones or all-zeros.
#[derive(Copy, Clone)]
pub struct Mask4i {
    elements: uint32x4_t,
}

/// NEON keeps scalars in the general floating point unit.
#[derive(Copy, Clone, Debug)]
pub struct Scalarf {
    value: f32,
}

/// How a mix selector maps onto NEON permutes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NeonMix {
    Identity { from_input1: bool },
    Broadcast { from_input1: bool, lane: usize },
    Combine { low_from_input1: bool, low_high: bool, high_high: bool },
    ZipLow { swapped: bool },
    ZipHigh { swapped: bool },
    General,
}

/// `Some(true)` for lanes (2, 3), `Some(false)` for lanes (0, 1) of one input.
const fn aligned_half(first: usize, second: usize) -> Option<bool> {
    match (first % 4, second % 4) {
        (0, 1) => Some(false),
        (2, 3) => Some(true),
        _ => None,
    }
}

impl NeonMix {
    const fn plan(selector: u32) -> NeonMix {
        let [a, b, c, d] = selector_indices(selector);

        match MixPattern::classify(selector) {
            MixPattern::Input0 | MixPattern::Input1 => {
                let from_input1 = a >= 4;
                let (a, b, c, d) = (a % 4, b % 4, c % 4, d % 4);

                if a == 0 && b == 1 && c == 2 && d == 3 {
                    NeonMix::Identity { from_input1 }
                } else if a == b && b == c && c == d {
                    NeonMix::Broadcast {
                        from_input1,
                        lane: a,
                    }
                } else {
                    NeonMix::General
                }
            }
            MixPattern::Input0Input1 | MixPattern::Input1Input0 => {
                match (aligned_half(a, b), aligned_half(c, d)) {
                    (Some(low_high), Some(high_high)) => NeonMix::Combine {
                        low_from_input1: a >= 4,
                        low_high,
                        high_high,
                    },
                    _ => NeonMix::General,
                }
            }
            MixPattern::InterleaveLow => NeonMix::ZipLow { swapped: false },
            MixPattern::InterleaveLowSwapped => NeonMix::ZipLow { swapped: true },
            MixPattern::InterleaveHigh => NeonMix::ZipHigh { swapped: false },
            MixPattern::InterleaveHighSwapped => NeonMix::ZipHigh { swapped: true },
            MixPattern::General => NeonMix::General,
        }
    }
}

impl F32x4 {
    /// Wraps a raw register.
    #[inline(always)]
    pub fn from_float32x4(elements: float32x4_t) -> Self {
        Self { elements }
    }

    /// The raw register.
    #[inline(always)]
    pub fn as_float32x4(self) -> float32x4_t {
        self.elements
    }

    #[inline(always)]
    fn broadcast_lane(self, lane: usize) -> Self {
        #[cfg(not(neon32))]
        let elements = unsafe {
            match lane {
                0 => vdupq_laneq_f32::<0>(self.elements),
                1 => vdupq_laneq_f32::<1>(self.elements),
                2 => vdupq_laneq_f32::<2>(self.elements),
                _ => vdupq_laneq_f32::<3>(self.elements),
            }
        };

        #[cfg(neon32)]
        let elements = unsafe {
            match lane {
                0 => vdupq_lane_f32::<0>(vget_low_f32(self.elements)),
                1 => vdupq_lane_f32::<1>(vget_low_f32(self.elements)),
                2 => vdupq_lane_f32::<0>(vget_high_f32(self.elements)),
                _ => vdupq_lane_f32::<1>(vget_high_f32(self.elements)),
            }
        };

        Self { elements }
    }

    #[inline(always)]
    fn half(self, high: bool) -> float32x2_t {
        unsafe {
            if high {
                vget_high_f32(self.elements)
            } else {
                vget_low_f32(self.elements)
            }
        }
    }

    #[inline(always)]
    fn mix_general<const SELECTOR: u32>(self, input1: Self) -> Self {
        let indices = const { selector_indices(SELECTOR) };
        Self::from_array(mix_lanes(indices, self.to_array(), input1.to_array()))
    }
}

impl SimdMask4 for Mask4i {
    #[inline(always)]
    fn from_bools(x: bool, y: bool, z: bool, w: bool) -> Self {
        let lane = |value: bool| if value { u32::MAX } else { 0 };
        let lanes = [lane(x), lane(y), lane(z), lane(w)];
        Self {
            elements: unsafe { vld1q_u32(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u32; 4] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe { vst1q_u32(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        let shifts: [i32; 4] = [0, 1, 2, 3];

        unsafe {
            let bits = vshlq_u32(vshrq_n_u32::<31>(self.elements), vld1q_s32(shifts.as_ptr()));

            #[cfg(not(neon32))]
            let total = vaddvq_u32(bits);

            #[cfg(neon32)]
            let total = {
                let pair = vadd_u32(vget_low_u32(bits), vget_high_u32(bits));
                vget_lane_u32::<0>(vpadd_u32(pair, pair))
            };

            total
        }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vandq_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vorrq_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { veorq_u32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { vmvnq_u32(self.elements) },
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
        Self {
            value: self.value.abs(),
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            value: math::min(self.value, rhs.value),
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            value: math::max(self.value, rhs.value),
        }
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        #[cfg(not(neon32))]
        let value = self.value.mul_add(v1.value, v2.value);

        #[cfg(neon32)]
        let value = self.value * v1.value + v2.value;

        Self { value }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            value: self.value.sqrt(),
        }
    }

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        Self {
            value: unsafe { vsqrt_reciprocal_f32(self.value) },
        }
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        Self {
            value: 1.0 / self.value,
        }
    }
}

impl SimdVector4 for F32x4 {
    type Mask = Mask4i;
    type Scalar = Scalarf;

    #[inline(always)]
    fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        let lanes = [x, y, z, w];
        Self {
            elements: unsafe { vld1q_f32(lanes.as_ptr()) },
        }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn splat_scalar(value: Scalarf) -> Self {
        Self::splat(value.value)
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
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
    fn to_array(self) -> [f32; 4] {
        let mut lanes = [0.0f32; LANE_COUNT];
        unsafe { vst1q_f32(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    fn get_x(self) -> f32 {
        unsafe { vgetq_lane_f32::<0>(self.elements) }
    }

    #[inline(always)]
    fn get_y(self) -> f32 {
        unsafe { vgetq_lane_f32::<1>(self.elements) }
    }

    #[inline(always)]
    fn get_z(self) -> f32 {
        unsafe { vgetq_lane_f32::<2>(self.elements) }
    }

    #[inline(always)]
    fn get_w(self) -> f32 {
        unsafe { vgetq_lane_f32::<3>(self.elements) }
    }

    #[inline(always)]
    fn get_x_scalar(self) -> Scalarf {
        Scalarf { value: self.get_x() }
    }

    #[inline(always)]
    fn get_y_scalar(self) -> Scalarf {
        Scalarf { value: self.get_y() }
    }

    #[inline(always)]
    fn get_z_scalar(self) -> Scalarf {
        Scalarf { value: self.get_z() }
    }

    #[inline(always)]
    fn get_w_scalar(self) -> Scalarf {
        Scalarf { value: self.get_w() }
    }

    #[inline(always)]
    fn set_x_scalar(self, value: Scalarf) -> Self {
        Self {
            elements: unsafe { vsetq_lane_f32::<0>(value.value, self.elements) },
        }
    }

    #[inline(always)]
    fn set_y_scalar(self, value: Scalarf) -> Self {
        Self {
            elements: unsafe { vsetq_lane_f32::<1>(value.value, self.elements) },
        }
    }

    #[inline(always)]
    fn set_z_scalar(self, value: Scalarf) -> Self {
        Self {
            elements: unsafe { vsetq_lane_f32::<2>(value.value, self.elements) },
        }
    }

    #[inline(always)]
    fn set_w_scalar(self, value: Scalarf) -> Self {
        Self {
            elements: unsafe { vsetq_lane_f32::<3>(value.value, self.elements) },
        }
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Scalarf) -> Self {
        Self {
            elements: unsafe { vmulq_n_f32(self.elements, rhs.value) },
        }
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        Self {
            elements: unsafe { vreciprocalq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsquare_rootq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { vabsq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        // vminq_f32 propagates NaN and orders signed zeros; keep the compare-select form
        Self {
            elements: unsafe {
                vbslq_f32(
                    vcltq_f32(self.elements, rhs.elements),
                    self.elements,
                    rhs.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe {
                vbslq_f32(
                    vcgtq_f32(self.elements, rhs.elements),
                    self.elements,
                    rhs.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        Self {
            elements: unsafe { vmul_addq_f32(self.elements, v1.elements, v2.elements) },
        }
    }

    #[inline(always)]
    fn neg_mul_sub(self, v1: Self, v2: Self) -> Self {
        Self {
            elements: unsafe { vneg_mul_subq_f32(self.elements, v1.elements, v2.elements) },
        }
    }

    #[inline(always)]
    fn copy_sign(self, sign: Self) -> Self {
        Self {
            elements: unsafe { vcopysignq_f32(self.elements, sign.elements) },
        }
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self {
            elements: unsafe { vceilq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { vfloorq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        Self {
            elements: unsafe { vround_symmetricq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        Self {
            elements: unsafe { vround_bankersq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { vceqq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { vcltq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { vcleq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { vcgtq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { vcgeq_f32(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn select(mask: Mask4i, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f32(mask.elements, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> Scalarf {
        let value = unsafe {
            let x2_y2_z2_w2 = vmulq_f32(self.elements, rhs.elements);
            let x2_y2 = vget_low_f32(x2_y2_z2_w2);
            let z2_w2 = vget_high_f32(x2_y2_z2_w2);
            let x2z2_y2w2 = vadd_f32(x2_y2, z2_w2);
            vget_lane_f32::<0>(vpadd_f32(x2z2_y2w2, x2z2_y2w2))
        };

        Scalarf { value }
    }

    #[inline(always)]
    fn dot3(self, rhs: Self) -> Scalarf {
        let value = unsafe {
            let x2_y2_z2_w2 = vmulq_f32(self.elements, rhs.elements);
            let x2_y2 = vget_low_f32(x2_y2_z2_w2);
            let x2y2 = vget_lane_f32::<0>(vpadd_f32(x2_y2, x2_y2));
            x2y2 + vgetq_lane_f32::<2>(x2_y2_z2_w2)
        };

        Scalarf { value }
    }

    #[inline(always)]
    fn mix<const SELECTOR: u32, const SHUFFLE: i32>(self, input1: Self) -> Self {
        let plan = const {
            assert!(
                is_consistent(SELECTOR, SHUFFLE),
                "mix shuffle immediate does not match its selector"
            );
            NeonMix::plan(SELECTOR)
        };

        let pick = |from_input1: bool| if from_input1 { input1 } else { self };

        match plan {
            NeonMix::Identity { from_input1 } => pick(from_input1),
            NeonMix::Broadcast { from_input1, lane } => pick(from_input1).broadcast_lane(lane),
            NeonMix::Combine {
                low_from_input1,
                low_high,
                high_high,
            } => {
                let low = pick(low_from_input1).half(low_high);
                let high = pick(!low_from_input1).half(high_high);
                Self {
                    elements: unsafe { vcombine_f32(low, high) },
                }
            }
            NeonMix::ZipLow { swapped } => {
                let (first, second) = if swapped { (input1, self) } else { (self, input1) };

                #[cfg(not(neon32))]
                let elements = unsafe { vzip1q_f32(first.elements, second.elements) };

                #[cfg(neon32)]
                let elements = unsafe { vzipq_f32(first.elements, second.elements).0 };

                Self { elements }
            }
            NeonMix::ZipHigh { swapped } => {
                let (first, second) = if swapped { (input1, self) } else { (self, input1) };

                #[cfg(not(neon32))]
                let elements = unsafe { vzip2q_f32(first.elements, second.elements) };

                #[cfg(neon32)]
                let elements = unsafe { vzipq_f32(first.elements, second.elements).1 };

                Self { elements }
            }
            NeonMix::General => self.mix_general::<SELECTOR>(input1),
        }
    }

    #[inline(always)]
    fn sin(self) -> Self {
        Self {
            elements: unsafe { vsinq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn cos(self) -> Self {
        Self {
            elements: unsafe { vcosq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn asin(self) -> Self {
        Self {
            elements: unsafe { vasinq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn acos(self) -> Self {
        Self {
            elements: unsafe { vacosq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn atan(self) -> Self {
        Self {
            elements: unsafe { vatanq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn atan2(self, x: Self) -> Self {
        Self {
            elements: unsafe { vatan2q_f32(self.elements, x.elements) },
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vaddq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vsubq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vmulq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { vdivideq_f32(self.elements, rhs.elements) },
        }
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { vnegq_f32(self.elements) },
        }
    }
}

impl Add for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: self.value + rhs.value,
        }
    }
}

impl Sub for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: self.value - rhs.value,
        }
    }
}

impl Mul for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: self.value * rhs.value,
        }
    }
}

impl Div for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            value: self.value / rhs.value,
        }
    }
}

impl Neg for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self { value: -self.value }
    }
}

impl_vector4_conversions!(F32x4);
impl_mask4_operators!(Mask4i);
