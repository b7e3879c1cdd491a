//! Precision tests of `vector_atan` against the standard library.

use std::f32::consts::FRAC_PI_2;

use simdly_vec4::accuracy::ATAN_MAX_ERROR;
use simdly_vec4::vector4f::*;

#[test]
fn test_atan_precision_comparison() {
    let test_cases = [
        // Around zero
        [0.0f32, -0.0, 0.1, -0.1],
        // The |x| = 1 switch to the reciprocal form
        [0.999f32, 1.0, 1.001, -1.0],
        // Large magnitudes
        [10.0f32, -10.0, 1000.0, -1.0e6],
        // Mixed
        [0.5f32, -2.5, 3.7, -0.3],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let output = vector_to_array(vector_atan(vector_from_array(*test_case)));

        for (&value, &actual) in test_case.iter().zip(output.iter()) {
            let expected = value.atan();
            let absolute_error = (expected - actual).abs();

            println!(
                "  Input: {value:.6}, Expected: {expected:.8}, Actual: {actual:.8}, Abs Error: {absolute_error:.2e}"
            );

            assert!(
                absolute_error <= ATAN_MAX_ERROR,
                "atan({value}) = {actual}, expected {expected}"
            );
        }
    }
}

#[test]
fn test_atan_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(24680);

    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0f32..=100.0));
        let output = vector_to_array(vector_atan(vector_from_array(input)));

        for (&value, &actual) in input.iter().zip(output.iter()) {
            let absolute_error = (value.atan() - actual).abs();
            assert!(
                absolute_error <= ATAN_MAX_ERROR,
                "atan({value}) = {actual}, abs error {absolute_error:.2e}"
            );
        }
    }
}

#[test]
fn test_atan_infinities() {
    let output = vector_to_array(vector_atan(vector_set(
        f32::INFINITY,
        f32::NEG_INFINITY,
        0.0,
        -0.0,
    )));

    assert!((output[0] - FRAC_PI_2).abs() <= ATAN_MAX_ERROR);
    assert!((output[1] + FRAC_PI_2).abs() <= ATAN_MAX_ERROR);
    assert_eq!(output[2].to_bits(), 0.0f32.to_bits());
    assert_eq!(output[3].to_bits(), (-0.0f32).to_bits());
}
