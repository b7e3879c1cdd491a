//! Rounding tests for `vector_ceil`, `vector_floor`, `vector_round_symmetric` and
//! `vector_round_bankers`.
//!
//! Results must be bit-exact: the expected values come from the standard library
//! (`ceil`, `floor`, `round`, `round_ties_even`), including signed zeros, and the
//! special inputs (NaN, ±∞, |x| ≥ 2²³) must pass through with their bits intact.

use simdly_vec4::vector4f::*;
use simdly_vec4::Vector4f;

const TWO_POW_23: f32 = 8_388_608.0;

fn check_bits(name: &str, input: [f32; 4], actual: Vector4f, reference: fn(f32) -> f32) {
    for (&value, actual) in input.iter().zip(vector_to_array(actual)) {
        let expected = reference(value);

        println!("  {name}({value:?}) = {actual:?}, expected {expected:?}");

        if expected.is_nan() {
            assert!(actual.is_nan(), "{name}({value}) should be NaN, got {actual}");
        } else {
            assert_eq!(
                actual.to_bits(),
                expected.to_bits(),
                "{name}({value:?}) = {actual:?}, expected {expected:?}"
            );
        }
    }
}

const TEST_CASES: [[f32; 4]; 12] = [
    // Small positive values
    [0.0, 0.1, 0.5, 0.9],
    // Values around 1
    [0.9, 1.0, 1.1, 1.9],
    // Halfway points
    [0.5, 1.5, 2.5, 3.5],
    [-0.5, -1.5, -2.5, -3.5],
    // Small negative values, signed zero results
    [-0.1, -0.5, -0.9, -0.0],
    // Values around -1
    [-0.9, -1.0, -1.1, -1.9],
    // Larger values
    [10.1, -10.5, 100.5, -100.5],
    // Very small fractional parts
    [1.0001, 1.9999, -1.0001, -1.9999],
    // Largest float below one half
    [0.499_999_97, -0.499_999_97, 0.500_000_06, -0.500_000_06],
    // Around 2²²
    [4_194_303.5, 4_194_304.5, -4_194_303.5, -4_194_304.5],
    // Just below 2²³
    [8_388_607.0, 8_388_607.5, -8_388_607.5, 7_340_032.5],
    // Already fractionless
    [TWO_POW_23, -TWO_POW_23, 16_777_216.0, 1.0e30],
];

#[test]
fn test_ceil_matches_std() {
    for (i, test_case) in TEST_CASES.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let output = vector_ceil(vector_from_array(*test_case));
        check_bits("ceil", *test_case, output, f32::ceil);
    }
}

#[test]
fn test_floor_matches_std() {
    for (i, test_case) in TEST_CASES.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let output = vector_floor(vector_from_array(*test_case));
        check_bits("floor", *test_case, output, f32::floor);
    }
}

#[test]
fn test_round_symmetric_matches_std() {
    for (i, test_case) in TEST_CASES.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let output = vector_round_symmetric(vector_from_array(*test_case));
        check_bits("round_symmetric", *test_case, output, f32::round);
    }
}

#[test]
fn test_round_bankers_matches_std() {
    for (i, test_case) in TEST_CASES.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);
        let output = vector_round_bankers(vector_from_array(*test_case));
        check_bits("round_bankers", *test_case, output, f32::round_ties_even);
    }
}

#[test]
fn test_documented_halfway_results() {
    let bankers = vector_to_array(vector_round_bankers(vector_set(2.5, 1.5, -2.5, -0.2)));
    assert_eq!(bankers[0], 2.0);
    assert_eq!(bankers[1], 2.0);
    assert_eq!(bankers[2], -2.0);
    assert_eq!(bankers[3].to_bits(), (-0.0f32).to_bits());

    let symmetric = vector_to_array(vector_round_symmetric(vector_set(1.5, -1.5, 0.499_999_97, -2.5)));
    assert_eq!(symmetric, [2.0, -2.0, 0.0, -3.0]);

    let ceil = vector_get_x(vector_ceil(vector_set(-0.5, 0.0, 0.0, 0.0)));
    assert_eq!(ceil.to_bits(), (-0.0f32).to_bits());
}

#[test]
fn test_special_values_pass_through() {
    let nan = f32::from_bits(0x7FC0_1234);
    let input = vector_set(nan, f32::INFINITY, f32::NEG_INFINITY, -3.0e9);
    let input_bits = vector_to_array(input).map(f32::to_bits);

    for output in [
        vector_ceil(input),
        vector_floor(input),
        vector_round_symmetric(input),
        vector_round_bankers(input),
    ] {
        assert_eq!(vector_to_array(output).map(f32::to_bits), input_bits);
    }
}

#[test]
fn test_ceil_floor_idempotent_random() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(4242);

    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1.0e7f32..=1.0e7));
        let v = vector_from_array(input);

        let ceil = vector_ceil(v);
        let floor = vector_floor(v);

        assert_eq!(vector_ceil(ceil), ceil);
        assert_eq!(vector_floor(floor), floor);
        check_bits("ceil", input, ceil, f32::ceil);
        check_bits("floor", input, floor, f32::floor);
    }
}

#[test]
fn test_fraction() {
    let output = vector_to_array(vector_fraction(vector_set(1.25, -1.25, 3.0, 0.5)));
    assert_eq!(output, [0.25, 0.75, 0.0, 0.5]);
}
