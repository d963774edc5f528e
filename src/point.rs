use serde_json::Value;

use crate::error::{InterpolationError, PointDefect, Result};

/// An (x, y) sample the polynomial has to pass through.
pub type Point = (f64, f64);

// splits the points into xs and ys, keeping the input order
pub fn split_points(points: &[Point]) -> Result<(Vec<f64>, Vec<f64>)> {
    if points.is_empty() {
        return Err(InterpolationError::Empty);
    }

    let mut xs = Vec::with_capacity(points.len());
    let mut ys = Vec::with_capacity(points.len());

    for (index, &(x, y)) in points.iter().enumerate() {
        if !x.is_finite() || !y.is_finite() {
            return Err(InterpolationError::InvalidPoint {
                index,
                defect: PointDefect::NonFinite,
            });
        }
        xs.push(x);
        ys.push(y);
    }

    Ok((xs, ys))
}

/// Turns untyped rows into points. Every row must hold exactly an x and a y.
pub fn points_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<Point>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.as_ref() {
            [x, y] => Ok((*x, *y)),
            other => Err(InterpolationError::InvalidPoint {
                index,
                defect: PointDefect::Arity(other.len()),
            }),
        })
        .collect()
}

/// Reads points out of a JSON value of the form `[[x, y], ...]`.
///
/// Anything other than an array is a type mismatch. Elements that are not
/// two-element arrays of numbers are reported with their index.
pub fn points_from_json(value: &Value) -> Result<Vec<Point>> {
    let elements = value.as_array().ok_or(InterpolationError::TypeMismatch {
        found: kind_of(value),
    })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let pair = match element.as_array() {
                Some(pair) if pair.len() == 2 => pair,
                Some(other) => {
                    return Err(InterpolationError::InvalidPoint {
                        index,
                        defect: PointDefect::Arity(other.len()),
                    })
                }
                // a scalar has no components at all
                None => {
                    return Err(InterpolationError::InvalidPoint {
                        index,
                        defect: PointDefect::Arity(0),
                    })
                }
            };

            match (pair[0].as_f64(), pair[1].as_f64()) {
                (Some(x), Some(y)) => Ok((x, y)),
                _ => Err(InterpolationError::InvalidPoint {
                    index,
                    defect: PointDefect::NonNumeric,
                }),
            }
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
