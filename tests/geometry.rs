//! Dot products, lengths, cross product, interpolation, clamping and normalization.

use simdly_vec4::accuracy::RECIPROCAL_MAX_RELATIVE_ERROR;
use simdly_vec4::scalarf::*;
use simdly_vec4::vector4f::*;
use simdly_vec4::DEFAULT_NORMALIZE_THRESHOLD;

#[test]
fn test_dot_products() {
    let a = vector_set(1.0, 2.0, 3.0, 4.0);
    let b = vector_set(5.0, 6.0, 7.0, 8.0);

    assert_eq!(vector_dot(a, b), 70.0);
    assert_eq!(vector_dot3(a, b), 38.0);
    assert_eq!(scalar_cast(vector_dot_as_scalar(a, b)), 70.0);
    assert_eq!(scalar_cast(vector_dot3_as_scalar(a, b)), 38.0);
    assert_eq!(vector_to_array(vector_dot_as_vector(a, b)), [70.0; 4]);
    assert_eq!(vector_to_array(vector_dot3_as_vector(a, b)), [38.0; 4]);
}

#[test]
fn test_dot_summation_order() {
    // (x + z) + (y + w) keeps the large terms together
    let a = vector_set(1.0e8, 1.0, -1.0e8, 1.0);
    let ones = vector_splat(1.0);
    assert_eq!(vector_dot(a, ones), 2.0);

    // (x + y) + z
    let b = vector_set(1.0e8, -1.0e8, 1.0, 0.0);
    assert_eq!(vector_dot3(b, ones), 1.0);
}

#[test]
fn test_lengths() {
    let input = vector_set(2.0, 3.0, 6.0, 9.0);

    assert_eq!(vector_length_squared3(input), 49.0);
    assert_eq!(vector_length3(input), 7.0);
    assert_eq!(vector_length_squared(input), 130.0);
    assert_eq!(vector_length_squared(input), vector_dot(input, input));
    assert_eq!(vector_length(input), 130.0f32.sqrt());

    let reciprocal = vector_length_reciprocal(input);
    let expected = 1.0 / 130.0f32.sqrt();
    assert!(((reciprocal - expected) / expected).abs() <= RECIPROCAL_MAX_RELATIVE_ERROR);

    let from = vector_set(1.0, 1.0, 1.0, 100.0);
    let to = vector_set(4.0, 5.0, 1.0, -100.0);
    assert_eq!(vector_distance3(from, to), 5.0);
}

#[test]
fn test_min_max_component() {
    let test_cases = [
        ([1.0f32, 2.0, 3.0, 4.0], 1.0, 4.0),
        ([4.0f32, 3.0, 2.0, 1.0], 1.0, 4.0),
        ([0.0f32, -7.5, 3.0, 2.0], -7.5, 3.0),
        ([5.0f32, 5.0, 5.0, 5.0], 5.0, 5.0),
        ([-1.0f32, 9.0, -2.0, 8.0], -2.0, 9.0),
    ];

    for (i, (input, min, max)) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, input);

        let v = vector_from_array(*input);
        assert_eq!(vector_min_component(v), *min);
        assert_eq!(vector_max_component(v), *max);
    }
}

#[test]
fn test_cross3() {
    let x = vector_set(1.0, 0.0, 0.0, 5.0);
    let y = vector_set(0.0, 1.0, 0.0, 7.0);

    assert_eq!(vector_to_array(vector_cross3(x, y)), [0.0, 0.0, 1.0, 0.0]);
    assert_eq!(vector_to_array(vector_cross3(y, x)), [0.0, 0.0, -1.0, 0.0]);

    let a = vector_set(1.0, 2.0, 3.0, 1.0);
    let b = vector_set(4.0, 5.0, 6.0, 1.0);
    assert_eq!(vector_to_array(vector_cross3(a, b)), [-3.0, 6.0, -3.0, 0.0]);

    // orthogonal to both operands
    let cross = vector_cross3(a, b);
    assert_eq!(vector_dot3(cross, a), 0.0);
    assert_eq!(vector_dot3(cross, b), 0.0);
}

#[test]
fn test_lerp_endpoints() {
    let start = vector_set(1.0, -2.0, 3.5, 100.0);
    let end = vector_set(-4.0, 8.0, 0.25, -100.0);

    assert_eq!(vector_lerp(start, end, 0.0), start);
    assert_eq!(vector_lerp(start, end, 1.0), end);
    assert_eq!(
        vector_to_array(vector_lerp(start, end, 0.5)),
        [-1.5, 3.0, 1.875, 0.0]
    );
    assert_eq!(
        vector_lerp_scalarf(start, end, scalar_set(0.5)),
        vector_lerp(start, end, 0.5)
    );
}

#[test]
fn test_clamp() {
    let min = vector_splat(-1.0);
    let max = vector_splat(1.0);
    let input = vector_set(-5.0, 0.25, 5.0, -1.0);

    assert_eq!(
        vector_to_array(vector_clamp(input, min, max)),
        [-1.0, 0.25, 1.0, -1.0]
    );
}

#[test]
fn test_normalize3() {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(3030);
    let fallback = vector_set(0.0, 0.0, 1.0, 0.0);

    for _ in 0..1000 {
        let input: [f32; 4] = std::array::from_fn(|_| rng.random_range(-100.0f32..=100.0));
        let v = vector_from_array(input);
        if vector_length_squared3(v) < 1.0e-3 {
            continue;
        }

        let normalized = vector_normalize3(v, fallback, DEFAULT_NORMALIZE_THRESHOLD);
        let length = vector_length3(normalized);
        assert!(
            (length - 1.0).abs() <= 1.0e-5,
            "normalize3({input:?}) has length {length}"
        );

        // direction is kept
        let cross = vector_cross3(normalized, v);
        assert!(vector_length3(cross) <= 1.0e-3 * vector_length3(v));
    }
}

#[test]
fn test_normalize3_fallback() {
    let fallback = vector_set(0.0, 1.0, 0.0, 9.0);
    let test_cases = [
        [0.0f32, 0.0, 0.0, 5.0],
        [1.0e-5f32, 0.0, 0.0, 0.0],
        [f32::NAN, 1.0, 1.0, 1.0],
        [0.0f32, -0.0, 0.0, 1.0e20],
    ];

    for (i, input) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, input);

        let output = vector_normalize3(
            vector_from_array(*input),
            fallback,
            DEFAULT_NORMALIZE_THRESHOLD,
        );
        assert_eq!(vector_to_array(output), vector_to_array(fallback));
    }
}

#[test]
fn test_normalize3_ignores_w() {
    let input = vector_set(3.0, 0.0, 4.0, 12.0);
    let output = vector_to_array(vector_normalize3(
        input,
        vector_zero(),
        DEFAULT_NORMALIZE_THRESHOLD,
    ));

    assert!((output[0] - 0.6).abs() <= 1.0e-6);
    assert_eq!(output[1], 0.0);
    assert!((output[2] - 0.8).abs() <= 1.0e-6);
    assert!((output[3] - 2.4).abs() <= 1.0e-5);
}

#[test]
fn test_normalize3_default_threshold() {
    let fallback = vector_set(1.0, 0.0, 0.0, 0.0);
    let test_cases = [
        [3.0f32, 0.0, 4.0, 1.0],
        [1.0e-4f32, 0.0, 0.0, 0.0],
        [5.0e-5f32, 0.0, 0.0, 0.0],
        [0.0f32, 0.0, 0.0, 0.0],
    ];

    for (i, input) in test_cases.iter().enumerate() {
        println!("Testing case {}: {:?}", i + 1, input);

        let v = vector_from_array(*input);
        assert_eq!(
            vector_to_array(vector_normalize3_default(v, fallback)),
            vector_to_array(vector_normalize3(v, fallback, DEFAULT_NORMALIZE_THRESHOLD))
        );
    }

    let output = vector_to_array(vector_normalize3_default(
        vector_set(0.0, 2.0e-4, 0.0, 0.0),
        fallback,
    ));
    assert!((output[1] - 1.0).abs() <= 1.0e-5);

    let output = vector_normalize3_default(vector_set(0.0, 5.0e-5, 0.0, 0.0), fallback);
    assert_eq!(vector_to_array(output), vector_to_array(fallback));
}

#[test]
fn test_normalize3_unchecked() {
    let input = vector_set(3.0, 0.0, 4.0, 12.0);
    let output = vector_to_array(vector_normalize3_unchecked(input));
    let guarded = vector_to_array(vector_normalize3(
        input,
        vector_zero(),
        DEFAULT_NORMALIZE_THRESHOLD,
    ));
    assert_eq!(output, guarded);

    // zero length scales by +inf
    let output = vector_to_array(vector_normalize3_unchecked(vector_zero()));
    assert!(output.iter().all(|lane| lane.is_nan()), "{output:?}");

    let output = vector_to_array(vector_normalize3_unchecked(vector_set(0.0, -0.0, 0.0, 7.0)));
    assert!(output[0].is_nan());
    assert!(output[1].is_nan());
    assert!(output[2].is_nan());
    assert_eq!(output[3], f32::INFINITY);

    // below the default threshold the unchecked path still scales up
    let output = vector_to_array(vector_normalize3_unchecked(vector_set(
        1.0e-6, 0.0, 0.0, 0.0,
    )));
    assert!((output[0] - 1.0).abs() <= 1.0e-5);
}
