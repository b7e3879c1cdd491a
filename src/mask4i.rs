//! Helpers over [`Mask4i`], the 4-lane result of vector comparisons.

use crate::simd::traits::SimdMask4;
use crate::Mask4i;

#[inline(always)]
pub fn mask_set(x: bool, y: bool, z: bool, w: bool) -> Mask4i {
    Mask4i::from_bools(x, y, z, w)
}

#[inline(always)]
pub fn mask_get_x(input: Mask4i) -> bool {
    input.bitmask() & 0b0001 != 0
}

#[inline(always)]
pub fn mask_get_y(input: Mask4i) -> bool {
    input.bitmask() & 0b0010 != 0
}

#[inline(always)]
pub fn mask_get_z(input: Mask4i) -> bool {
    input.bitmask() & 0b0100 != 0
}

#[inline(always)]
pub fn mask_get_w(input: Mask4i) -> bool {
    input.bitmask() & 0b1000 != 0
}

/// Packs lane x into bit 0 through lane w into bit 3.
#[inline(always)]
pub fn mask_bits(input: Mask4i) -> u32 {
    input.bitmask()
}

/// Raw lane bit patterns, `0xFFFF_FFFF` or `0`.
#[inline(always)]
pub fn mask_to_lanes(input: Mask4i) -> [u32; 4] {
    input.to_lanes()
}

#[inline(always)]
pub fn mask_all_true(input: Mask4i) -> bool {
    input.bitmask() == 0b1111
}

#[inline(always)]
pub fn mask_all_true2(input: Mask4i) -> bool {
    input.bitmask() & 0b0011 == 0b0011
}

#[inline(always)]
pub fn mask_all_true3(input: Mask4i) -> bool {
    input.bitmask() & 0b0111 == 0b0111
}

#[inline(always)]
pub fn mask_any_true(input: Mask4i) -> bool {
    input.bitmask() != 0
}

#[inline(always)]
pub fn mask_any_true2(input: Mask4i) -> bool {
    input.bitmask() & 0b0011 != 0
}

#[inline(always)]
pub fn mask_any_true3(input: Mask4i) -> bool {
    input.bitmask() & 0b0111 != 0
}

#[inline(always)]
pub fn mask_and(lhs: Mask4i, rhs: Mask4i) -> Mask4i {
    lhs.and(rhs)
}

#[inline(always)]
pub fn mask_or(lhs: Mask4i, rhs: Mask4i) -> Mask4i {
    lhs.or(rhs)
}

#[inline(always)]
pub fn mask_xor(lhs: Mask4i, rhs: Mask4i) -> Mask4i {
    lhs.xor(rhs)
}

#[inline(always)]
pub fn mask_not(input: Mask4i) -> Mask4i {
    input.not()
}
