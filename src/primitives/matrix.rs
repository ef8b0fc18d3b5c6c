//! Matrix type for 2D numeric data.

use crate::error::{ReconocerError, Result};
use serde::{Deserialize, Serialize};

/// A 2D matrix of f32 values (row-major storage).
///
/// Every operation is pure: it allocates and returns a new `Matrix`,
/// leaving its operands untouched. Shape is fixed at construction.
///
/// # Examples
///
/// ```
/// use reconocer::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(ReconocerError::DimensionMismatch {
                expected: format!("{rows}x{cols} ({} elements)", rows * cols),
                actual: format!("{} elements", data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying data as a slice (row-major).
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Adds a scalar to every element.
    #[must_use]
    pub fn add_scalar(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x + scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Multiplies every element by a scalar.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Divides every element by a scalar.
    #[must_use]
    pub fn div_scalar(&self, scalar: f32) -> Self {
        Self {
            data: self.data.iter().map(|x| x / scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Matrix-matrix multiplication.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` unless `self.cols == other.rows`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(ReconocerError::DimensionMismatch {
                expected: format!("{} rows (inner dimension)", self.cols),
                actual: format!("{}x{}", other.rows, other.cols),
            });
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Adds another matrix element-wise, broadcasting vector operands.
    ///
    /// When shapes match exactly the sum is plain element-wise. When one
    /// operand is a row vector (`rows == 1`, columns agree) or a column
    /// vector (`cols == 1`, rows agree) it is replicated along the
    /// mismatched axis before the add.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` for any other shape combination.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.shape() == other.shape() {
            return Ok(self.add_elementwise(other));
        }
        if other.cols == 1 && other.rows == self.rows {
            return Ok(self.add_elementwise(&other.broadcast(self.cols)?));
        }
        if other.rows == 1 && other.cols == self.cols {
            return Ok(self.add_elementwise(&other.broadcast(self.rows)?));
        }
        if self.cols == 1 && self.rows == other.rows {
            return Ok(self.broadcast(other.cols)?.add_elementwise(other));
        }
        if self.rows == 1 && self.cols == other.cols {
            return Ok(self.broadcast(other.rows)?.add_elementwise(other));
        }
        Err(ReconocerError::shape_mismatch(self.shape(), other.shape()))
    }

    fn add_elementwise(&self, other: &Self) -> Self {
        let data: Vec<f32> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Self {
            data,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Expands a row or column vector to length `n` along its unit axis.
    ///
    /// A `1xc` row becomes `nxc`; an `rx1` column becomes `rxn`. The source
    /// is wrap-indexed (`index % source_len`) along both axes.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when neither axis has size 1.
    pub fn broadcast(&self, n: usize) -> Result<Self> {
        let (rows, cols) = if self.cols == 1 {
            (self.rows, n)
        } else if self.rows == 1 {
            (n, self.cols)
        } else {
            return Err(ReconocerError::DimensionMismatch {
                expected: "a row or column vector".to_string(),
                actual: format!("{}x{}", self.rows, self.cols),
            });
        };

        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            for j in 0..cols {
                data[i * cols + j] = self.data[(i % self.rows) * self.cols + (j % self.cols)];
            }
        }
        Ok(Self { data, rows, cols })
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Returns the submatrix with row `i` and column `j` removed.
    ///
    /// Relative order of the remaining rows and columns is preserved.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input.
    pub fn minor(&self, i: usize, j: usize) -> Result<Self> {
        self.require_square("minor")?;
        if self.rows == 0 {
            return Err(ReconocerError::DimensionMismatch {
                expected: "a non-empty square matrix".to_string(),
                actual: "0x0".to_string(),
            });
        }

        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for r in 0..n {
            if r == i {
                continue;
            }
            for c in 0..n {
                if c == j {
                    continue;
                }
                data.push(self.data[r * n + c]);
            }
        }
        Ok(Self {
            data,
            rows: n - 1,
            cols: n - 1,
        })
    }

    /// Computes the determinant by cofactor expansion along row 0.
    ///
    /// Base cases: `0x0 -> 1`, `1x1 -> element`, `2x2 -> ad - bc`. The
    /// recursive expansion is exponential-time; matrices here are at most
    /// 3x3 in practice.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input.
    pub fn determinant(&self) -> Result<f32> {
        self.require_square("determinant")?;

        match self.rows {
            0 => Ok(1.0),
            1 => Ok(self.data[0]),
            2 => Ok(self.data[0] * self.data[3] - self.data[1] * self.data[2]),
            n => {
                let mut det = 0.0;
                for j in 0..n {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += self.data[j] * sign * self.minor(0, j)?.determinant()?;
                }
                Ok(det)
            }
        }
    }

    /// Computes the cofactor matrix: `C[i][j] = minor(i,j).det() * (-1)^(i+j)`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input.
    pub fn cofactors(&self) -> Result<Self> {
        self.require_square("cofactors")?;

        let n = self.rows;
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                data[i * n + j] = self.minor(i, j)?.determinant()? * sign;
            }
        }
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// Inverts the matrix via the adjugate: `cofactors^T / det`.
    ///
    /// # Errors
    ///
    /// Returns `NotSquare` for non-square input and `SingularMatrix` when
    /// the determinant is zero.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(ReconocerError::SingularMatrix { det });
        }
        Ok(self.cofactors()?.transpose().div_scalar(det))
    }

    /// Applies the hyperbolic tangent element-wise.
    #[must_use]
    pub fn tanh(&self) -> Self {
        Self {
            data: self.data.iter().map(|x| x.tanh()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Max-subtracted softmax over the entire flat buffer.
    ///
    /// Equation: softmax(x)\_i = exp(x\_i - max) / sum\_j exp(x\_j - max)
    ///
    /// Normalization runs over every element, not per row; that equals a
    /// per-row softmax only for single-row matrices, the only shape this
    /// is invoked on by the inference pipeline.
    #[must_use]
    pub fn softmax(&self) -> Self {
        let max = self.data.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let exp: Vec<f32> = self.data.iter().map(|&x| (x - max).exp()).collect();
        let sum: f32 = exp.iter().sum();
        Self {
            data: exp.iter().map(|&x| x / sum).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn require_square(&self, op: &'static str) -> Result<()> {
        if self.rows != self.cols {
            return Err(ReconocerError::NotSquare {
                op,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
