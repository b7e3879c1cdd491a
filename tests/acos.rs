//! Precision tests of `vector_acos` against the standard library.

use std::f32::consts::{FRAC_PI_2, PI};

use simdly_vec4::accuracy::ASIN_ACOS_MAX_ERROR;
use simdly_vec4::vector4f::*;

#[test]
fn test_acos_precision_comparison() {
    let test_cases = [
        [-1.0f32, 0.0, 1.0, -0.0],
        [0.01f32, -0.01, 0.1, -0.1],
        [0.5f32, -0.5, 0.707_106_77, -0.707_106_77],
        [0.9f32, -0.9, 0.999, -0.999],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let output = vector_to_array(vector_acos(vector_from_array(*test_case)));

        for (&value, &actual) in test_case.iter().zip(output.iter()) {
            let expected = value.acos();
            let absolute_error = (expected - actual).abs();

            println!(
                "  Input: {value:.6}, Expected: {expected:.8}, Actual: {actual:.8}, Abs Error: {absolute_error:.2e}"
            );

            assert!(
                absolute_error <= ASIN_ACOS_MAX_ERROR,
                "acos({value}) = {actual}, expected {expected}"
            );
        }
    }
}

#[test]
fn test_acos_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(13579);

    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1.0f32..=1.0));
        let output = vector_to_array(vector_acos(vector_from_array(input)));

        for (&value, &actual) in input.iter().zip(output.iter()) {
            let absolute_error = (value.acos() - actual).abs();
            assert!(
                absolute_error <= ASIN_ACOS_MAX_ERROR,
                "acos({value}) = {actual}, abs error {absolute_error:.2e}"
            );
        }
    }
}

#[test]
fn test_acos_range_and_complement() {
    let values = vector_set(-0.8, -0.2, 0.3, 0.95);

    let acos = vector_acos(values);
    assert!(vector_all_greater_equal(acos, vector_zero()));
    assert!(vector_all_less_equal(acos, vector_splat(PI)));

    // asin + acos = π/2
    let sum = vector_add(vector_asin(values), acos);
    assert!(vector_all_near_equal(
        sum,
        vector_splat(FRAC_PI_2),
        2.0 * ASIN_ACOS_MAX_ERROR
    ));
}
