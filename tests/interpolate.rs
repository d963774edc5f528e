use approx::assert_abs_diff_eq;
use poly_interpolate::fixtures::{known_points, ARBITRARY_POINTS, KNOWN_COEFFICIENTS};
use poly_interpolate::{
    interpolate, interpolate_json, interpolate_rows, InterpolationError, Interpolator,
    InterpolatorConfig, Point, PointDefect, SolverKind,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::json;

// highest power first
fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, c| acc * x + c)
}

// distinct integer x-values in [-x_max, x_max] with random y-values
fn generate_points(rng: &mut StdRng, num_points: usize, x_max: i32, y_max: f64) -> Vec<Point> {
    let mut x_values: Vec<f64> = Vec::new();
    while x_values.len() < num_points {
        let x = rng.gen_range(-x_max..=x_max) as f64;
        if !x_values.contains(&x) {
            x_values.push(x);
        }
    }

    x_values
        .into_iter()
        .map(|x| (x, rng.gen_range(-y_max..y_max)))
        .collect()
}

#[test]
fn test_reproduces_every_point() {
    let mut rng = StdRng::seed_from_u64(7);

    for num_points in 1..=8 {
        let points = generate_points(&mut rng, num_points, 10, 50.0);
        let coefficients = interpolate(&points).unwrap();

        assert_eq!(coefficients.len(), num_points);
        for (x, y) in points {
            assert_abs_diff_eq!(evaluate(&coefficients, x), y, epsilon = 1e-6 * y.abs().max(1.0));
        }
    }
}

#[test]
fn test_recovers_known_coefficients() {
    let coefficients = interpolate(&known_points()).unwrap();

    assert_eq!(coefficients.len(), KNOWN_COEFFICIENTS.len());
    for (got, expected) in coefficients.iter().zip(KNOWN_COEFFICIENTS) {
        assert_abs_diff_eq!(*got, expected, epsilon = 1e-4);
    }
}

fn both_solvers() -> (Interpolator, Interpolator) {
    let inverse = Interpolator::new(InterpolatorConfig {
        solver: SolverKind::Inverse,
        ..Default::default()
    });
    (Interpolator::default(), inverse)
}

#[test]
fn test_solvers_agree() {
    let (lu, inverse) = both_solvers();

    let a = lu.interpolate(&ARBITRARY_POINTS).unwrap();
    let b = inverse.interpolate(&ARBITRARY_POINTS).unwrap();
    for (a, b) in a.iter().zip(&b) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-9);
    }

    for (x, y) in ARBITRARY_POINTS {
        assert_abs_diff_eq!(evaluate(&a, x), y, epsilon = 1e-9);
    }
}

#[test]
fn test_solvers_agree_on_known_coefficients() {
    let (lu, inverse) = both_solvers();
    let points = known_points();

    let a = lu.interpolate(&points).unwrap();
    let b = inverse.interpolate(&points).unwrap();
    assert_eq!(b.len(), KNOWN_COEFFICIENTS.len());
    for ((a, b), expected) in a.iter().zip(&b).zip(KNOWN_COEFFICIENTS) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-3);
        assert_abs_diff_eq!(*b, expected, epsilon = 1e-3);
    }
}

#[test]
fn test_more_points_than_the_fixture() {
    // x^2 through x = 0..11
    let points: Vec<Point> = (0..12).map(|i| (i as f64, (i * i) as f64)).collect();

    let coefficients = interpolate(&points).unwrap();
    assert_eq!(coefficients.len(), 12);
    assert_abs_diff_eq!(coefficients[9], 1.0, epsilon = 1e-6);
    for (x, y) in points {
        assert_abs_diff_eq!(evaluate(&coefficients, x), y, epsilon = 1e-6 * y.max(1.0));
    }
}

#[test]
fn test_x_values_far_from_origin() {
    let points = [(2020.0, 1.0), (2021.0, 3.0), (2022.0, 2.0), (2023.0, 5.0)];
    let coefficients = interpolate(&points).unwrap();

    assert_eq!(coefficients.len(), 4);
    for (x, y) in points {
        assert_abs_diff_eq!(evaluate(&coefficients, x), y, epsilon = 1e-2);
    }
}

#[test]
fn test_point_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(42);
    let expected = interpolate(&ARBITRARY_POINTS).unwrap();

    for _ in 0..5 {
        let mut shuffled = ARBITRARY_POINTS.to_vec();
        shuffled.shuffle(&mut rng);

        let got = interpolate(&shuffled).unwrap();
        for (got, expected) in got.iter().zip(&expected) {
            assert_abs_diff_eq!(*got, *expected, epsilon = 1e-9);
        }
    }
}

#[test]
fn test_failure_kinds() {
    assert!(matches!(
        interpolate_json(&json!("not a list")),
        Err(InterpolationError::TypeMismatch { .. })
    ));

    let err = interpolate_rows(&[vec![1.0, 2.0, 3.0]]).unwrap_err();
    assert_eq!(
        err,
        InterpolationError::InvalidPoint {
            index: 0,
            defect: PointDefect::Arity(3)
        }
    );
    assert_eq!(err.to_string(), "length of point at index 0 is not 2");

    let err = interpolate(&[(1.0, 2.0), (1.0, 5.0)]).unwrap_err();
    assert!(err.is_singular());

    // duplicate hidden between distinct points
    let err = interpolate_json(&json!([[0, 1], [2, 3], [4, 5], [2, 9]])).unwrap_err();
    assert!(err.is_singular());
}
