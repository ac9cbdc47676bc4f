//! Small dense linear-algebra engine backing the homography solver.
//!
//! [`Matrix`] is a row-major `f64` buffer with products, transpose and a
//! Gauss-Jordan inverse; [`lls_solve`] solves overdetermined systems through
//! the normal equations. Singular systems surface as `None`.

mod matrix;
mod solve;

pub use matrix::Matrix;
pub use solve::lls_solve;
