//! Precision tests of `vector_asin` against the standard library.

use simdly_vec4::accuracy::ASIN_ACOS_MAX_ERROR;
use simdly_vec4::vector4f::*;

#[test]
fn test_asin_precision_comparison() {
    let test_cases = [
        // Domain endpoints and zero
        [-1.0f32, 0.0, 1.0, -0.0],
        // Small values
        [0.01f32, -0.01, 0.1, -0.1],
        // Mid range
        [0.5f32, -0.5, 0.707_106_77, -0.707_106_77],
        // Close to the endpoints
        [0.9f32, -0.9, 0.999, -0.999],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let output = vector_to_array(vector_asin(vector_from_array(*test_case)));

        for (&value, &actual) in test_case.iter().zip(output.iter()) {
            let expected = value.asin();
            let absolute_error = (expected - actual).abs();

            println!(
                "  Input: {value:.6}, Expected: {expected:.8}, Actual: {actual:.8}, Abs Error: {absolute_error:.2e}"
            );

            assert!(
                absolute_error <= ASIN_ACOS_MAX_ERROR,
                "asin({value}) = {actual}, expected {expected}"
            );
        }
    }
}

#[test]
fn test_asin_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(98765);

    let mut max_error = 0.0f32;
    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1.0f32..=1.0));
        let output = vector_to_array(vector_asin(vector_from_array(input)));

        for (&value, &actual) in input.iter().zip(output.iter()) {
            let absolute_error = (value.asin() - actual).abs();
            max_error = max_error.max(absolute_error);
            assert!(
                absolute_error <= ASIN_ACOS_MAX_ERROR,
                "asin({value}) = {actual}, abs error {absolute_error:.2e}"
            );
        }
    }

    println!("Maximum absolute error over 4000 lanes: {max_error:.2e}");
}

#[test]
fn test_asin_outside_domain_is_nan() {
    let output = vector_to_array(vector_asin(vector_set(1.5, -1.5, 2.0, f32::NAN)));

    for value in output {
        assert!(value.is_nan(), "expected NaN, got {value}");
    }
}
