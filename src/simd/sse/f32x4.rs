#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::simd::{
    mix::{is_consistent, mix_lanes, selector_indices, MixPattern},
    sse::math::{
        _mm_abs_ps, _mm_acos_ps, _mm_asin_ps, _mm_atan2_ps, _mm_atan_ps, _mm_ceilf_ps,
        _mm_copysign_ps, _mm_cos_ps, _mm_floorf_ps, _mm_reciprocal_ps, _mm_rintf_ps,
        _mm_roundf_ps, _mm_select_ps, _mm_sign_mask_ps, _mm_sin_ps, _mm_sqrt_reciprocal_ss,
        _mm_true_mask_ps,
    },
    traits::{impl_mask4_operators, impl_vector4_conversions, SimdMask4, SimdScalar, SimdVector4},
};

pub const LANE_COUNT: usize = 4;

// _MM_SHUFFLE immediates
const SHUFFLE_XXXX: i32 = 0b00_00_00_00;
const SHUFFLE_YYYY: i32 = 0b01_01_01_01;
const SHUFFLE_ZZZZ: i32 = 0b10_10_10_10;
const SHUFFLE_WWWW: i32 = 0b11_11_11_11;

// Lane swaps used to route a value through lane 0 without SSE4.1 `insertps`
#[cfg(not(sse4))]
const SWAP_XY: i32 = 0b11_10_00_01;
#[cfg(not(sse4))]
const SWAP_XZ: i32 = 0b11_00_01_10;
#[cfg(not(sse4))]
const SWAP_XW: i32 = 0b00_10_01_11;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone)]
pub struct F32x4 {
    elements: __m128,
}

/// Lane mask held in an `__m128`, each lane all-ones or all-zeros.
#[derive(Copy, Clone)]
pub struct Mask4i {
    elements: __m128,
}

/// Scalar value in lane 0 of an `__m128`; the other lanes are unspecified.
#[derive(Copy, Clone, Debug)]
pub struct Scalarf {
    value: __m128,
}

impl F32x4 {
    /// Wraps a raw register.
    #[inline(always)]
    pub fn from_m128(elements: __m128) -> Self {
        Self { elements }
    }

    /// The raw register.
    #[inline(always)]
    pub fn as_m128(self) -> __m128 {
        self.elements
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
        let lane = |value: bool| -(value as i32);
        Self {
            elements: unsafe { _mm_castsi128_ps(_mm_set_epi32(lane(w), lane(z), lane(y), lane(x))) },
        }
    }

    #[inline(always)]
    fn to_lanes(self) -> [u32; 4] {
        let mut lanes = [0u32; LANE_COUNT];
        unsafe {
            _mm_storeu_si128(
                lanes.as_mut_ptr() as *mut __m128i,
                _mm_castps_si128(self.elements),
            );
        }
        lanes
    }

    #[inline(always)]
    fn bitmask(self) -> u32 {
        unsafe { _mm_movemask_ps(self.elements) as u32 }
    }

    #[inline(always)]
    fn and(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_and_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn or(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_or_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn xor(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn not(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, _mm_true_mask_ps()) },
        }
    }
}

impl SimdScalar for Scalarf {
    #[inline(always)]
    fn set(value: f32) -> Self {
        Self {
            value: unsafe { _mm_set_ss(value) },
        }
    }

    #[inline(always)]
    fn cast(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.value) }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            value: unsafe { _mm_abs_ps(self.value) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_min_ss(self.value, rhs.value) },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_max_ss(self.value, rhs.value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        Self {
            value: unsafe { _mm_add_ss(_mm_mul_ss(self.value, v1.value), v2.value) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            value: unsafe { _mm_sqrt_ss(self.value) },
        }
    }

    #[inline(always)]
    fn sqrt_reciprocal(self) -> Self {
        Self {
            value: unsafe { _mm_sqrt_reciprocal_ss(self.value) },
        }
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        Self {
            value: unsafe { _mm_div_ss(_mm_set_ss(1.0), self.value) },
        }
    }
}

impl SimdVector4 for F32x4 {
    type Mask = Mask4i;
    type Scalar = Scalarf;

    #[inline(always)]
    fn set(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self {
            elements: unsafe { _mm_set_ps(w, z, y, x) },
        }
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn splat_scalar(value: Scalarf) -> Self {
        Self {
            elements: unsafe { _mm_shuffle_ps::<SHUFFLE_XXXX>(value.value, value.value) },
        }
    }

    #[inline(always)]
    unsafe fn load_ptr(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn load1_ptr(ptr: *const f32) -> Self {
        Self {
            elements: _mm_set_ss(ptr.read_unaligned()),
        }
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
        unsafe { _mm_storeu_ps(lanes.as_mut_ptr(), self.elements) };
        lanes
    }

    #[inline(always)]
    fn get_x(self) -> f32 {
        unsafe { _mm_cvtss_f32(self.elements) }
    }

    #[inline(always)]
    fn get_y(self) -> f32 {
        self.get_y_scalar().cast()
    }

    #[inline(always)]
    fn get_z(self) -> f32 {
        self.get_z_scalar().cast()
    }

    #[inline(always)]
    fn get_w(self) -> f32 {
        self.get_w_scalar().cast()
    }

    #[inline(always)]
    fn get_x_scalar(self) -> Scalarf {
        Scalarf {
            value: self.elements,
        }
    }

    #[inline(always)]
    fn get_y_scalar(self) -> Scalarf {
        Scalarf {
            value: unsafe { _mm_shuffle_ps::<SHUFFLE_YYYY>(self.elements, self.elements) },
        }
    }

    #[inline(always)]
    fn get_z_scalar(self) -> Scalarf {
        Scalarf {
            value: unsafe { _mm_shuffle_ps::<SHUFFLE_ZZZZ>(self.elements, self.elements) },
        }
    }

    #[inline(always)]
    fn get_w_scalar(self) -> Scalarf {
        Scalarf {
            value: unsafe { _mm_shuffle_ps::<SHUFFLE_WWWW>(self.elements, self.elements) },
        }
    }

    #[inline(always)]
    fn set_x_scalar(self, value: Scalarf) -> Self {
        Self {
            elements: unsafe { _mm_move_ss(self.elements, value.value) },
        }
    }

    #[inline(always)]
    fn set_y_scalar(self, value: Scalarf) -> Self {
        #[cfg(sse4)]
        let elements = unsafe { _mm_insert_ps::<0x10>(self.elements, value.value) };

        #[cfg(not(sse4))]
        let elements = unsafe {
            let yxzw = _mm_shuffle_ps::<SWAP_XY>(self.elements, self.elements);
            let vxzw = _mm_move_ss(yxzw, value.value);
            _mm_shuffle_ps::<SWAP_XY>(vxzw, vxzw)
        };

        Self { elements }
    }

    #[inline(always)]
    fn set_z_scalar(self, value: Scalarf) -> Self {
        #[cfg(sse4)]
        let elements = unsafe { _mm_insert_ps::<0x20>(self.elements, value.value) };

        #[cfg(not(sse4))]
        let elements = unsafe {
            let zyxw = _mm_shuffle_ps::<SWAP_XZ>(self.elements, self.elements);
            let vyxw = _mm_move_ss(zyxw, value.value);
            _mm_shuffle_ps::<SWAP_XZ>(vyxw, vyxw)
        };

        Self { elements }
    }

    #[inline(always)]
    fn set_w_scalar(self, value: Scalarf) -> Self {
        #[cfg(sse4)]
        let elements = unsafe { _mm_insert_ps::<0x30>(self.elements, value.value) };

        #[cfg(not(sse4))]
        let elements = unsafe {
            let wyzx = _mm_shuffle_ps::<SWAP_XW>(self.elements, self.elements);
            let vyzx = _mm_move_ss(wyzx, value.value);
            _mm_shuffle_ps::<SWAP_XW>(vyzx, vyzx)
        };

        Self { elements }
    }

    #[inline(always)]
    fn mul_scalar(self, rhs: Scalarf) -> Self {
        Self {
            elements: unsafe {
                _mm_mul_ps(
                    self.elements,
                    _mm_shuffle_ps::<SHUFFLE_XXXX>(rhs.value, rhs.value),
                )
            },
        }
    }

    #[inline(always)]
    fn reciprocal(self) -> Self {
        Self {
            elements: unsafe { _mm_reciprocal_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm_abs_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn max(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn mul_add(self, v1: Self, v2: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_ps(_mm_mul_ps(self.elements, v1.elements), v2.elements) },
        }
    }

    #[inline(always)]
    fn neg_mul_sub(self, v1: Self, v2: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_ps(v2.elements, _mm_mul_ps(self.elements, v1.elements)) },
        }
    }

    #[inline(always)]
    fn copy_sign(self, sign: Self) -> Self {
        Self {
            elements: unsafe { _mm_copysign_ps(self.elements, sign.elements) },
        }
    }

    #[inline(always)]
    fn sign(self) -> Self {
        Self {
            elements: unsafe {
                _mm_or_ps(
                    _mm_and_ps(self.elements, _mm_sign_mask_ps()),
                    _mm_set1_ps(1.0),
                )
            },
        }
    }

    #[inline(always)]
    fn ceil(self) -> Self {
        Self {
            elements: unsafe { _mm_ceilf_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { _mm_floorf_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn round_symmetric(self) -> Self {
        Self {
            elements: unsafe { _mm_roundf_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn round_bankers(self) -> Self {
        Self {
            elements: unsafe { _mm_rintf_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn eq_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { _mm_cmpeq_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn lt_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { _mm_cmplt_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn le_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { _mm_cmple_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn gt_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { _mm_cmpgt_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn ge_elements(self, rhs: Self) -> Mask4i {
        Mask4i {
            elements: unsafe { _mm_cmpge_ps(self.elements, rhs.elements) },
        }
    }

    #[inline(always)]
    fn select(mask: Mask4i, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm_select_ps(mask.elements, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn dot(self, rhs: Self) -> Scalarf {
        // dpps stays unused, the shuffle/add reduction is more precise
        let value = unsafe {
            let x2_y2_z2_w2 = _mm_mul_ps(self.elements, rhs.elements);
            let z2_w2_0_0 = _mm_shuffle_ps::<0b00_00_11_10>(x2_y2_z2_w2, x2_y2_z2_w2);
            let x2z2_y2w2_0_0 = _mm_add_ps(x2_y2_z2_w2, z2_w2_0_0);
            let y2w2_0_0_0 = _mm_shuffle_ps::<0b00_00_00_01>(x2z2_y2w2_0_0, x2z2_y2w2_0_0);
            _mm_add_ps(x2z2_y2w2_0_0, y2w2_0_0_0)
        };

        Scalarf { value }
    }

    #[inline(always)]
    fn dot3(self, rhs: Self) -> Scalarf {
        let value = unsafe {
            let x2_y2_z2_w2 = _mm_mul_ps(self.elements, rhs.elements);
            let y2 = _mm_shuffle_ps::<SHUFFLE_YYYY>(x2_y2_z2_w2, x2_y2_z2_w2);
            let x2y2 = _mm_add_ss(x2_y2_z2_w2, y2);
            let z2 = _mm_shuffle_ps::<SHUFFLE_ZZZZ>(x2_y2_z2_w2, x2_y2_z2_w2);
            _mm_add_ss(x2y2, z2)
        };

        Scalarf { value }
    }

    #[inline(always)]
    fn mix<const SELECTOR: u32, const SHUFFLE: i32>(self, input1: Self) -> Self {
        let pattern = const {
            assert!(
                is_consistent(SELECTOR, SHUFFLE),
                "mix shuffle immediate does not match its selector"
            );
            MixPattern::classify(SELECTOR)
        };

        let input0 = self.elements;
        let input1_elements = input1.elements;

        let elements = unsafe {
            match pattern {
                MixPattern::Input0 => _mm_shuffle_ps::<SHUFFLE>(input0, input0),
                MixPattern::Input1 => _mm_shuffle_ps::<SHUFFLE>(input1_elements, input1_elements),
                MixPattern::Input0Input1 => _mm_shuffle_ps::<SHUFFLE>(input0, input1_elements),
                MixPattern::Input1Input0 => _mm_shuffle_ps::<SHUFFLE>(input1_elements, input0),
                MixPattern::InterleaveLow => _mm_unpacklo_ps(input0, input1_elements),
                MixPattern::InterleaveLowSwapped => _mm_unpacklo_ps(input1_elements, input0),
                MixPattern::InterleaveHigh => _mm_unpackhi_ps(input0, input1_elements),
                MixPattern::InterleaveHighSwapped => _mm_unpackhi_ps(input1_elements, input0),
                MixPattern::General => return self.mix_general::<SELECTOR>(input1),
            }
        };

        Self { elements }
    }

    #[inline(always)]
    fn sin(self) -> Self {
        Self {
            elements: unsafe { _mm_sin_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn cos(self) -> Self {
        Self {
            elements: unsafe { _mm_cos_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn asin(self) -> Self {
        Self {
            elements: unsafe { _mm_asin_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn acos(self) -> Self {
        Self {
            elements: unsafe { _mm_acos_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn atan(self) -> Self {
        Self {
            elements: unsafe { _mm_atan_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn atan2(self, x: Self) -> Self {
        Self {
            elements: unsafe { _mm_atan2_ps(self.elements, x.elements) },
        }
    }
}

impl Add for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_add_ps(self.elements, rhs.elements) },
        }
    }
}

impl Sub for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_sub_ps(self.elements, rhs.elements) },
        }
    }
}

impl Mul for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_mul_ps(self.elements, rhs.elements) },
        }
    }
}

impl Div for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            elements: unsafe { _mm_div_ps(self.elements, rhs.elements) },
        }
    }
}

impl Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, _mm_sign_mask_ps()) },
        }
    }
}

impl Add for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_add_ss(self.value, rhs.value) },
        }
    }
}

impl Sub for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_sub_ss(self.value, rhs.value) },
        }
    }
}

impl Mul for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_mul_ss(self.value, rhs.value) },
        }
    }
}

impl Div for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn div(self, rhs: Self) -> Self {
        Self {
            value: unsafe { _mm_div_ss(self.value, rhs.value) },
        }
    }
}

impl Neg for Scalarf {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            value: unsafe { _mm_xor_ps(self.value, _mm_sign_mask_ps()) },
        }
    }
}

impl_vector4_conversions!(F32x4);
impl_mask4_operators!(Mask4i);
