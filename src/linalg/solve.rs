use super::Matrix;

/// Least-squares solution of `m · a ≈ b` via the normal equations.
///
/// Computes `a = (mᵀm)⁻¹ mᵀ b`. `b` has one row per row of `m` and may carry
/// several right-hand-side columns. Returns `None` when `mᵀm` is singular.
pub fn lls_solve(m: &Matrix, b: &Matrix) -> Option<Matrix> {
    assert_eq!(
        m.rows(),
        b.rows(),
        "system has {} equations but {} targets",
        m.rows(),
        b.rows()
    );
    let mt = m.transpose();
    let mtm = Matrix::mmult(&mt, m);
    let mtm_inv = mtm.invert()?;
    let pseudo_inverse = Matrix::mmult(&mtm_inv, &mt);
    Some(Matrix::mmult(&pseudo_inverse, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn exact_square_system() {
        let m = Matrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
        let b = Matrix::column(&[3.0, 5.0]);
        let a = lls_solve(&m, &b).expect("system is regular");
        assert_relative_eq!(a[(0, 0)], 0.8, epsilon = 1e-12);
        assert_relative_eq!(a[(1, 0)], 1.4, epsilon = 1e-12);
    }

    #[test]
    fn overdetermined_line_fit() {
        // y = 2x + 1 sampled with symmetric noise that cancels in the fit.
        let xs = [0.0, 1.0, 2.0, 3.0];
        let noise = [0.1, -0.1, -0.1, 0.1];
        let mut rows = Vec::new();
        let mut ys = Vec::new();
        for (x, n) in xs.iter().zip(noise) {
            rows.extend_from_slice(&[*x, 1.0]);
            ys.push(2.0 * x + 1.0 + n);
        }
        let m = Matrix::from_row_slice(4, 2, &rows);
        let a = lls_solve(&m, &Matrix::column(&ys)).expect("full column rank");
        assert_relative_eq!(a[(0, 0)], 2.0, epsilon = 1e-9);
        assert_relative_eq!(a[(1, 0)], 1.0, epsilon = 1e-9);
    }

    #[test]
    fn rank_deficient_system_fails() {
        let m = Matrix::from_row_slice(3, 2, &[1.0, 2.0, 2.0, 4.0, 3.0, 6.0]);
        let b = Matrix::column(&[1.0, 2.0, 3.0]);
        assert!(lls_solve(&m, &b).is_none());
    }
}
