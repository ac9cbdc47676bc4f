use std::fmt;
use std::ops::{Index, IndexMut};

/// Dense row-major `f64` matrix addressed as `(row, col)`.
///
/// Failures of numerical operations are reported through `Option`; shape
/// mismatches in products are programmer errors and panic.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Rectangular identity: ones on the main diagonal, zeros elsewhere.
    pub fn identity(rows: usize, cols: usize) -> Self {
        let mut m = Self::zeros(rows, cols);
        for i in 0..rows.min(cols) {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build from a row-major slice. Panics if the length is not `rows * cols`.
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            rows * cols,
            "expected {rows}x{cols} values, got {}",
            values.len()
        );
        Self {
            rows,
            cols,
            data: values.to_vec(),
        }
    }

    /// Single-column matrix holding `values`.
    pub fn column(values: &[f64]) -> Self {
        Self::from_row_slice(values.len(), 1, values)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Matrix product `a · b`.
    pub fn mmult(a: &Matrix, b: &Matrix) -> Matrix {
        assert_eq!(
            a.cols, b.rows,
            "cannot multiply {}x{} by {}x{}",
            a.rows, a.cols, b.rows, b.cols
        );
        let mut p = Matrix::zeros(a.rows, b.cols);
        for i in 0..a.rows {
            for k in 0..a.cols {
                let aik = a[(i, k)];
                if aik == 0.0 {
                    continue;
                }
                let b_row = b.row(k);
                let p_row = &mut p.data[i * b.cols..(i + 1) * b.cols];
                for (out, &bkj) in p_row.iter_mut().zip(b_row) {
                    *out += aik * bkj;
                }
            }
        }
        p
    }

    /// Matrix-vector product `a · v`.
    pub fn vmult(a: &Matrix, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            a.cols,
            v.len(),
            "cannot multiply {}x{} by vector of length {}",
            a.rows,
            a.cols,
            v.len()
        );
        (0..a.rows)
            .map(|i| a.row(i).iter().zip(v).map(|(x, y)| x * y).sum())
            .collect()
    }

    /// Elementwise difference `a − b`.
    pub fn sub(a: &Matrix, b: &Matrix) -> Matrix {
        assert!(
            a.rows == b.rows && a.cols == b.cols,
            "cannot subtract {}x{} and {}x{}",
            a.rows,
            a.cols,
            b.rows,
            b.cols
        );
        Matrix {
            rows: a.rows,
            cols: a.cols,
            data: a.data.iter().zip(&b.data).map(|(x, y)| x - y).collect(),
        }
    }

    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                t[(j, i)] = self[(i, j)];
            }
        }
        t
    }

    /// `[self | I]`: the matrix followed by a `rows × rows` identity block.
    pub fn augment(&self) -> Matrix {
        let width = self.cols + self.rows;
        let mut c = Matrix::zeros(self.rows, width);
        for i in 0..self.rows {
            c.data[i * width..i * width + self.cols].copy_from_slice(self.row(i));
            c[(i, self.cols + i)] = 1.0;
        }
        c
    }

    /// Inverse by Gauss-Jordan elimination with partial pivoting.
    ///
    /// Returns `None` for non-square input or when no usable pivot remains in
    /// some column (magnitude at or below `max|a_ij| · n · ε`).
    pub fn invert(&self) -> Option<Matrix> {
        if !self.is_square() || self.rows == 0 {
            return None;
        }
        let n = self.rows;
        let scale = self.data.iter().fold(0.0f64, |m, v| m.max(v.abs()));
        if scale == 0.0 || !scale.is_finite() {
            return None;
        }
        let tol = scale * n as f64 * f64::EPSILON;

        let mut c = self.augment();
        let width = c.cols;
        for k in 0..n {
            let mut pivot_row = k;
            let mut pivot_abs = 0.0f64;
            for i in k..n {
                let val = c[(i, k)].abs();
                if val > pivot_abs {
                    pivot_abs = val;
                    pivot_row = i;
                }
            }
            if pivot_abs <= tol {
                return None;
            }
            if pivot_row != k {
                c.swap_rows(pivot_row, k);
            }

            let pivot = c[(k, k)];
            for j in k..width {
                c[(k, j)] /= pivot;
            }
            for i in 0..n {
                if i == k {
                    continue;
                }
                let factor = c[(i, k)];
                if factor == 0.0 {
                    continue;
                }
                for j in k..width {
                    let v = c[(k, j)];
                    c[(i, j)] -= factor * v;
                }
            }
        }

        let mut inv = Matrix::zeros(n, n);
        for i in 0..n {
            inv.data[i * n..(i + 1) * n].copy_from_slice(&c.row(i)[n..]);
        }
        Some(inv)
    }

    /// Shape-checked elementwise comparison with absolute tolerance `eps`.
    pub fn approx_eq(&self, other: &Matrix, eps: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= eps)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            self.data.swap(a * self.cols + j, b * self.cols + j);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &f64 {
        debug_assert!(r < self.rows && c < self.cols);
        &self.data[r * self.cols + c]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut f64 {
        debug_assert!(r < self.rows && c < self.cols);
        &mut self.data[r * self.cols + c]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.rows, self.cols)?;
        for r in 0..self.rows {
            let cells: Vec<String> = self.row(r).iter().map(|v| format!("{v:.2}")).collect();
            writeln!(f, "{}", cells.join(", "))?;
        }
        Ok(())
    }
}
