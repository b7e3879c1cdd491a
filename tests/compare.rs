//! Comparison, reduction, near-equality, finiteness and select tests.

use simdly_vec4::mask4i::*;
use simdly_vec4::vector4f::*;
use simdly_vec4::DEFAULT_NEAR_EQUAL_THRESHOLD;

#[test]
fn test_lane_comparisons() {
    let a = vector_set(1.0, 2.0, 3.0, f32::NAN);
    let b = vector_set(2.0, 2.0, 1.0, f32::NAN);

    assert_eq!(mask_bits(vector_equal(a, b)), 0b0010);
    assert_eq!(mask_bits(vector_less_than(a, b)), 0b0001);
    assert_eq!(mask_bits(vector_less_equal(a, b)), 0b0011);
    assert_eq!(mask_bits(vector_greater_than(a, b)), 0b0100);
    assert_eq!(mask_bits(vector_greater_equal(a, b)), 0b0110);
}

#[test]
fn test_mask_lanes_are_all_bits() {
    let mask = vector_less_than(vector_set(0.0, 1.0, 0.0, 1.0), vector_splat(0.5));
    assert_eq!(mask_to_lanes(mask), [u32::MAX, 0, u32::MAX, 0]);
}

#[test]
fn test_partial_reductions_ignore_remaining_lanes() {
    let test_cases = [
        // (lhs, rhs) differing only in w
        (vector_set(1.0, 1.0, 1.0, 9.0), vector_set(2.0, 2.0, 2.0, 0.0)),
        (vector_set(1.0, 1.0, 1.0, f32::NAN), vector_set(2.0, 2.0, 2.0, 0.0)),
    ];

    for (i, (lhs, rhs)) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?} vs {:?}", i + 1, lhs, rhs);

        assert!(vector_all_less_than3(*lhs, *rhs));
        assert!(vector_all_less_than2(*lhs, *rhs));
        assert!(!vector_all_less_than(*lhs, *rhs));

        assert!(vector_all_less_equal3(*lhs, *rhs));
        assert!(!vector_all_less_equal(*lhs, *rhs));

        assert!(!vector_any_greater_equal3(*lhs, *rhs));
        assert!(!vector_any_greater_equal2(*lhs, *rhs));
        assert!(!vector_any_equal3(*lhs, *rhs));
    }
}

#[test]
fn test_any_and_all_equal() {
    let a = vector_set(1.0, 2.0, 3.0, 4.0);
    let b = vector_set(1.0, 2.0, 0.0, 4.0);

    assert!(vector_all_equal2(a, b));
    assert!(!vector_all_equal3(a, b));
    assert!(!vector_all_equal(a, b));
    assert!(vector_any_equal(a, b));
    assert!(vector_any_equal2(a, b));

    assert!(vector_any_less_than(b, a));
    assert!(!vector_any_less_than2(b, a));
    assert!(vector_any_less_than3(b, a));
    assert!(vector_any_less_equal2(a, b));
    assert!(vector_any_less_equal3(a, b));
    assert!(vector_any_less_equal(a, b));
    assert!(vector_all_greater_equal(a, b));
    assert!(vector_all_greater_equal2(a, b));
    assert!(vector_all_greater_equal3(a, b));
}

#[test]
fn test_near_equal() {
    let a = vector_set(1.0, 2.0, 3.0, 4.0);
    let b = vector_set(1.000_001, 2.0, 3.0, 5.0);

    assert!(vector_all_near_equal3(a, b, DEFAULT_NEAR_EQUAL_THRESHOLD));
    assert!(vector_all_near_equal2(a, b, DEFAULT_NEAR_EQUAL_THRESHOLD));
    assert!(!vector_all_near_equal(a, b, DEFAULT_NEAR_EQUAL_THRESHOLD));
    assert!(vector_all_near_equal(a, b, 1.0));

    let far = vector_set(5.0, 5.0, 5.0, 4.0);
    assert!(vector_any_near_equal(a, far, DEFAULT_NEAR_EQUAL_THRESHOLD));
    assert!(!vector_any_near_equal3(a, far, DEFAULT_NEAR_EQUAL_THRESHOLD));
    assert!(!vector_any_near_equal2(a, far, DEFAULT_NEAR_EQUAL_THRESHOLD));
}

#[test]
fn test_is_finite() {
    let test_cases = [
        ([1.0f32, 2.0, 3.0, 4.0], [true, true, true]),
        ([1.0f32, 2.0, 3.0, f32::NAN], [false, true, true]),
        ([1.0f32, 2.0, f32::INFINITY, 0.0], [false, false, true]),
        ([1.0f32, f32::NEG_INFINITY, 0.0, 0.0], [false, false, false]),
        ([f32::NAN, 0.0, 0.0, 0.0], [false, false, false]),
        ([f32::MAX, -f32::MAX, f32::MIN_POSITIVE, -0.0], [true, true, true]),
    ];

    for (i, (input, expected)) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, input);

        let v = vector_from_array(*input);
        assert_eq!(
            [vector_is_finite(v), vector_is_finite3(v), vector_is_finite2(v)],
            *expected
        );
    }
}

#[test]
fn test_select_all_mask_patterns() {
    let if_true = vector_set(1.0, 2.0, 3.0, 4.0);
    let if_false = vector_set(-1.0, -2.0, -3.0, -4.0);

    for pattern in 0u32..16 {
        let lanes = [0, 1, 2, 3].map(|lane| pattern & (1 << lane) != 0);
        let mask = mask_set(lanes[0], lanes[1], lanes[2], lanes[3]);
        assert_eq!(mask_bits(mask), pattern);

        let output = vector_to_array(vector_select(mask, if_true, if_false));
        let expected: [f32; 4] = std::array::from_fn(|lane| {
            if lanes[lane] {
                vector_to_array(if_true)[lane]
            } else {
                vector_to_array(if_false)[lane]
            }
        });

        assert_eq!(output, expected, "mask pattern {pattern:04b}");
    }
}

#[test]
fn test_select_is_bitwise() {
    let nan = f32::from_bits(0x7FC0_5555);
    let mask = mask_set(true, false, true, false);

    let output = vector_to_array(vector_select(mask, vector_splat(nan), vector_splat(-0.0)));
    assert_eq!(output[0].to_bits(), nan.to_bits());
    assert_eq!(output[1].to_bits(), (-0.0f32).to_bits());
    assert_eq!(output[2].to_bits(), nan.to_bits());
    assert_eq!(output[3].to_bits(), (-0.0f32).to_bits());
}
