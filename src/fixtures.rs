//! Point sets used by the demo binary and the regression tests.

use crate::point::Point;

/// 4x^9 + 2x^8 + 6x^7 + 2x^6 - 2x^5 - x^4 - 6x^3 + 7x^2 + 9x + 4
pub const KNOWN_COEFFICIENTS: [f64; 10] = [4.0, 2.0, 6.0, 2.0, -2.0, -1.0, -6.0, 7.0, 9.0, 4.0];

/// Four arbitrary points with unsorted x-values.
pub const ARBITRARY_POINTS: [Point; 4] = [(10.0, 4.0), (15.0, 8.0), (6.0, 4.0), (4.7, 9.0)];

/// Samples the polynomial with the given coefficients (highest power first) at
/// x = 0, 1, ..., len - 1, summing each power term separately.
pub fn points_from_coefficients(coefficients: &[f64]) -> Vec<Point> {
    let degree = coefficients.len().saturating_sub(1);
    (0..coefficients.len())
        .map(|x| {
            let x = x as f64;
            let y = coefficients
                .iter()
                .enumerate()
                .map(|(power, c)| c * x.powi((degree - power) as i32))
                .sum::<f64>();
            (x, y)
        })
        .collect()
}

/// [`KNOWN_COEFFICIENTS`] sampled at x = 0..9.
pub fn known_points() -> Vec<Point> {
    points_from_coefficients(&KNOWN_COEFFICIENTS)
}
