/*
    Coefficients come highest power first, so Horner's rule runs straight through them.
    2x^2 + 3x + 1 => [2, 3, 1]; at x = 2: (2 * 2 + 3) * 2 + 1 = 15
*/
pub(crate) fn dense_repr(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().fold(0.0, |acc, curr| acc * x + curr)
}

// sum of |c_k x^k| over all terms, the size rounding error scales with
pub(crate) fn dense_magnitude(x: f64, coefficients: &[f64]) -> f64 {
    coefficients
        .iter()
        .fold(0.0, |acc, curr| acc * x.abs() + curr.abs())
}
