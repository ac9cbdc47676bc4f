//! Planar homographies: DLT fitting from matches, projection and inlier
//! partitioning.
mod solver;

pub use solver::{compute_homography, model_inliers};

use crate::linalg::Matrix;
use crate::types::Point;
use nalgebra::{Matrix3, Vector3};

/// 3×3 projective transform acting on homogeneous image coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Homography(pub Matrix3<f64>);

impl Homography {
    pub fn identity() -> Self {
        Self(Matrix3::identity())
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self(Matrix3::new(1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0))
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.0
    }

    /// Map `p` through the transform, dividing by the homogeneous coordinate.
    ///
    /// Points sent to infinity come back non-finite.
    pub fn project(&self, p: &Point) -> Point {
        let v = self.0 * Vector3::new(p.x as f64, p.y as f64, 1.0);
        Point::new((v[0] / v[2]) as f32, (v[1] / v[2]) as f32)
    }

    pub fn inverse(&self) -> Option<Homography> {
        let inv = self.to_matrix().invert()?;
        Homography::from_matrix(&inv)
    }

    /// `self ∘ other`: apply `other` first, then `self`.
    pub fn compose(&self, other: &Homography) -> Homography {
        Homography(self.0 * other.0)
    }

    /// Rows of the matrix, for serialization and display.
    pub fn rows(&self) -> [[f64; 3]; 3] {
        let m = &self.0;
        [
            [m[(0, 0)], m[(0, 1)], m[(0, 2)]],
            [m[(1, 0)], m[(1, 1)], m[(1, 2)]],
            [m[(2, 0)], m[(2, 1)], m[(2, 2)]],
        ]
    }

    pub fn to_matrix(&self) -> Matrix {
        // nalgebra stores columns; the transpose's storage is our row order
        Matrix::from_row_slice(3, 3, self.0.transpose().as_slice())
    }

    /// `None` unless `m` is 3×3.
    pub fn from_matrix(m: &Matrix) -> Option<Homography> {
        if m.rows() != 3 || m.cols() != 3 {
            return None;
        }
        Some(Homography(Matrix3::from_row_slice(m.as_slice())))
    }
}

impl Default for Homography {
    fn default() -> Self {
        Self::identity()
    }
}
