//! Square root and reciprocal square root tests.

use simdly_vec4::accuracy::RECIPROCAL_MAX_RELATIVE_ERROR;
use simdly_vec4::scalarf::*;
use simdly_vec4::vector4f::*;

#[test]
fn test_sqrt_precision_comparison() {
    let test_cases = [
        [0.0f32, 1.0, 4.0, 9.0],
        [0.25f32, 2.0, 3.0, 10.0],
        [1.0e-6f32, 1.0e-3, 1.0e3, 1.0e6],
        [123.456f32, 0.5, 65536.0, 1.0e20],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let output = vector_to_array(vector_sqrt(vector_from_array(*test_case)));

        for (&value, &actual) in test_case.iter().zip(output.iter()) {
            let expected = value.sqrt();
            println!("  Input: {value:e}, Expected: {expected:e}, Actual: {actual:e}");
            assert_eq!(actual, expected, "sqrt({value})");
        }
    }
}

#[test]
fn test_sqrt_special_values() {
    let output = vector_to_array(vector_sqrt(vector_set(-1.0, f32::INFINITY, -0.0, f32::NAN)));

    assert!(output[0].is_nan());
    assert_eq!(output[1], f32::INFINITY);
    assert_eq!(output[2].to_bits(), (-0.0f32).to_bits());
    assert!(output[3].is_nan());
}

#[test]
fn test_sqrt_reciprocal_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(8080);

    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(1.0e-4f32..=1.0e4));
        let output = vector_to_array(vector_sqrt_reciprocal(vector_from_array(input)));

        for (&value, &actual) in input.iter().zip(output.iter()) {
            let expected = 1.0 / value.sqrt();
            let relative_error = ((actual - expected) / expected).abs();
            assert!(
                relative_error <= RECIPROCAL_MAX_RELATIVE_ERROR,
                "sqrt_reciprocal({value}) = {actual}, expected {expected}"
            );

            let scalar = scalar_cast(scalar_sqrt_reciprocal(scalar_set(value)));
            let scalar_error = ((scalar - expected) / expected).abs();
            assert!(
                scalar_error <= RECIPROCAL_MAX_RELATIVE_ERROR,
                "scalar_sqrt_reciprocal({value}) = {scalar}, expected {expected}"
            );
        }
    }
}

#[test]
fn test_scalar_sqrt_reciprocal_special_values() {
    assert_eq!(
        scalar_cast(scalar_sqrt_reciprocal(scalar_set(0.0))),
        f32::INFINITY
    );
    assert_eq!(
        scalar_cast(scalar_sqrt_reciprocal(scalar_set(f32::INFINITY))),
        0.0
    );
}

#[test]
fn test_sqrt_reciprocal_subnormal_inputs() {
    let inputs = [3.0e-39f32, 1.0e-45, 1.0e-40, f32::MIN_POSITIVE];

    let output = vector_to_array(vector_sqrt_reciprocal(vector_from_array(inputs)));

    for (&value, &actual) in inputs.iter().zip(output.iter()) {
        let expected = 1.0 / value.sqrt();
        assert!(
            ((actual - expected) / expected).abs() <= RECIPROCAL_MAX_RELATIVE_ERROR,
            "sqrt_reciprocal({value:e}) = {actual:e}, expected {expected:e}"
        );

        let scalar = scalar_cast(scalar_sqrt_reciprocal(scalar_set(value)));
        assert!(
            ((scalar - expected) / expected).abs() <= RECIPROCAL_MAX_RELATIVE_ERROR,
            "scalar_sqrt_reciprocal({value:e}) = {scalar:e}, expected {expected:e}"
        );
    }
}

#[test]
fn test_length_reciprocal() {
    let input = vector_set(3.0, 4.0, 0.0, 0.0);

    let actual = vector_length_reciprocal3(input);
    assert!((actual - 0.2).abs() <= 0.2 * RECIPROCAL_MAX_RELATIVE_ERROR);
    assert_eq!(vector_length3(input), 5.0);
    assert_eq!(vector_length(input), 5.0);
}
