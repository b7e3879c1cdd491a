//! Precision tests of `vector_tan`.
//!
//! Tangent is `sin / cos`, so the error grows near the poles; the sweeps stay in
//! [-1.3, 1.3] and compare with a relative bound there.

use simdly_vec4::vector4f::*;

fn assert_close(angle: f32, actual: f32) {
    let expected = angle.tan();
    let absolute_error = (expected - actual).abs();
    let relative_error = if expected != 0.0 {
        absolute_error / expected.abs()
    } else {
        absolute_error
    };

    println!(
        "  Input: {angle:.6}, Expected: {expected:.8}, Actual: {actual:.8}, Abs Error: {absolute_error:.2e}, Rel Error: {relative_error:.2e}"
    );

    assert!(
        absolute_error < 1e-5 || relative_error < 1e-5,
        "tan({angle}) = {actual}, expected {expected}"
    );
}

#[test]
fn test_tangent_precision_comparison() {
    let test_cases = [
        [0.0f32, 0.1, 0.2, 0.3],
        [0.5f32, 0.75, 1.0, 1.25],
        [-0.5f32, -0.75, -1.0, -1.25],
        [3.0f32, 3.5, -3.0, -3.5],
    ];

    for (i, test_case) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, test_case);

        let output = vector_to_array(vector_tan(vector_from_array(*test_case)));
        for (&angle, &actual) in test_case.iter().zip(output.iter()) {
            assert_close(angle, actual);
        }
    }
}

#[test]
fn test_tangent_precision_random_inputs() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..500 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-1.3f32..=1.3));
        let output = vector_to_array(vector_tan(vector_from_array(input)));

        for (&angle, &actual) in input.iter().zip(output.iter()) {
            assert_close(angle, actual);
        }
    }
}

#[test]
fn test_tangent_is_odd() {
    let angles = vector_set(0.2, 0.6, 1.1, 1.2);
    let positive = vector_tan(angles);
    let negative = vector_tan(vector_neg(angles));

    assert!(vector_all_near_equal(positive, vector_neg(negative), 1e-6));
}
