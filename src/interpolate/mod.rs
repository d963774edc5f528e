pub mod interpolate;
pub mod matrix;
pub mod solve;
