/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/


use crate::error::MatrixError;
use crate::traits::Numberish;
use crate::{Float, PIVOT_TOLERANCE};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The main Structure in this library: an `n` by `n` matrix.
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "RawSquareMatrix<T>",
    bound(deserialize = "T: Numberish + Deserialize<'de>")
)]
pub struct SquareMatrix<T: Numberish> {
    pub(crate) n: usize,

    // Contains the data ordered by row,
    // Going left to right, and up and down.
    pub(crate) data: Vec<T>,
}

/// What gets read from a serialized matrix before its size is validated
#[derive(Deserialize)]
struct RawSquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T: Numberish> TryFrom<RawSquareMatrix<T>> for SquareMatrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawSquareMatrix<T>) -> Result<Self, Self::Error> {
        Self::from_data(raw.n, raw.data)
    }
}

impl<T: Numberish> std::fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.chunks_exact(self.n.max(1)) {
            write!(f, "|")?;
            for (col, v) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f, "|")?;
        }
        Ok(())
    }
}

impl<T: Numberish> SquareMatrix<T> {
    /// Creates a `SquareMatrix` of `n` rows and `n` columns full of values `v`
    #[must_use]
    pub fn new(v: T, n: usize) -> Self {
        Self {
            n,
            data: vec![v; n * n],
        }
    }

    /// Creates a `SquareMatrix` of size `n` full of zeroes
    #[must_use]
    pub fn zeroes(n: usize) -> Self {
        Self::new(T::zero(), n)
    }

    /// Creates a `SquareMatrix` from a vector containing the elements of the
    /// matrix, ordered by row.
    ///
    /// Returns [`MatrixError::ConstructionSizeMismatch`] if `data` does not
    /// contain exactly `n*n` elements, or if `n*n` does not fit in a `usize`.
    pub fn from_data(n: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(MatrixError::ConstructionSizeMismatch {
                n,
                expected: n.saturating_mul(n),
                found: data.len(),
            });
        }
        Ok(Self { n, data })
    }

    /// Creates an Identity matrix of size NxN
    #[must_use]
    pub fn identity(n: usize) -> Self {
        Self {
            n,
            data: (0..(n * n))
                .map(|i| if i % (n + 1) == 0 { T::one() } else { T::zero() })
                .collect(),
        }
    }

    /// Creates a squared matrix with the elements of `data`
    /// in the diagonal
    #[must_use]
    pub fn diag(data: Vec<T>) -> Self {
        let n = data.len();
        let mut ret = Self::zeroes(n);
        for (i, value) in data.into_iter().enumerate() {
            ret[(i, i)] = value;
        }
        ret
    }

    /// Returns the number of rows (which is also the number of columns)
    pub fn size(&self) -> usize {
        self.n
    }

    /// Checks whether the matrix is 0x0
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The elements of the matrix, ordered by row
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Gets the index of an element within the `data` array of the Matrix
    ///
    /// # Panics
    /// Panics if `row` or `col` are not smaller than `n`
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.n && col < self.n,
            "element ({}, {}) is out of bounds for a {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        self.n * row + col
    }

    /// Gets an element from the matrix
    ///
    /// # Panics
    /// Panics if `row` or `col` are out of bounds
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.offset(row, col)]
    }

    /// Sets an element into the matrix
    ///
    /// # Panics
    /// Panics if `row` or `col` are out of bounds
    pub fn set(&mut self, row: usize, col: usize, v: T) {
        let i = self.offset(row, col);
        self.data[i] = v;
    }

    fn check_same_size(&self, other: &Self) -> Result<(), MatrixError> {
        if self.n != other.n {
            return Err(MatrixError::SizeMismatch {
                expected: self.n,
                found: other.n,
            });
        }
        Ok(())
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for col in 0..self.n {
            let (i, j) = (self.offset(a, col), self.offset(b, col));
            self.data.swap(i, j);
        }
    }

    /* ARITHMETIC OPERATION */

    /// Adds `self` with `other`, puting the result in `into`
    pub fn add_into(&self, other: &Self, into: &mut Self) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.check_same_size(into)?;

        std::iter::zip(
            std::iter::zip(self.data.iter(), other.data.iter()),
            into.data.iter_mut(),
        )
        .for_each(|((x, y), res)| *res = *x + *y);

        Ok(())
    }

    /// Substracts `other` from `self`, puting the result in `into`
    pub fn sub_into(&self, other: &Self, into: &mut Self) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.check_same_size(into)?;

        std::iter::zip(
            std::iter::zip(self.data.iter(), other.data.iter()),
            into.data.iter_mut(),
        )
        .for_each(|((x, y), res)| *res = *x - *y);

        Ok(())
    }

    /// Returns `self + other`
    pub fn add(&self, other: &Self) -> Result<Self, MatrixError> {
        let mut ret = Self::zeroes(self.n);
        self.add_into(other, &mut ret)?;
        Ok(ret)
    }

    /// Returns `self - other`
    pub fn subtract(&self, other: &Self) -> Result<Self, MatrixError> {
        let mut ret = Self::zeroes(self.n);
        self.sub_into(other, &mut ret)?;
        Ok(ret)
    }

    /// Adds `other` to `self`, element by element.
    ///
    /// `self` is left untouched if the sizes do not match.
    pub fn add_assign(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a += *b);
        Ok(())
    }

    /// Substracts `other` from `self`, element by element.
    ///
    /// `self` is left untouched if the sizes do not match.
    pub fn sub_assign(&mut self, other: &Self) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.data
            .iter_mut()
            .zip(&other.data)
            .for_each(|(a, b)| *a -= *b);
        Ok(())
    }

    /// Returns a copy of `self` with every element multiplied by `s`
    #[must_use]
    pub fn scale(&self, s: T) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|a| *a * s).collect(),
        }
    }

    /// Returns a copy of `self` with every element divided by `s`. Dividing by
    /// zero does whatever `T` does (e.g., infinities for floats, a panic
    /// for integers)
    #[must_use]
    pub fn unscale(&self, s: T) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|a| *a / s).collect(),
        }
    }

    /// Multiplies every element of `self` by `s`
    pub fn scale_assign(&mut self, s: T) {
        self.data.iter_mut().for_each(|a| *a *= s);
    }

    /// Divides every element of `self` by `s`
    pub fn unscale_assign(&mut self, s: T) {
        self.data.iter_mut().for_each(|a| *a /= s);
    }

    /// Multiplies a matrix by `other`, putting the result into `into`
    pub fn prod_into(&self, other: &Self, into: &mut Self) -> Result<(), MatrixError> {
        self.check_same_size(other)?;
        self.check_same_size(into)?;
        let n = self.n;
        if n == 0 {
            return Ok(());
        }

        #[cfg(not(feature = "parallel"))]
        let rows = self
            .data
            .chunks_exact(n)
            .zip(into.data.chunks_exact_mut(n));
        #[cfg(feature = "parallel")]
        let rows = self
            .data
            .par_chunks_exact(n)
            .zip(into.data.par_chunks_exact_mut(n));

        rows.for_each(|(row_data, into_data)| {
            for (col, item) in into_data.iter_mut().enumerate() {
                let coldata = other.data.iter().skip(col).step_by(n);
                *item = row_data
                    .iter()
                    .zip(coldata)
                    .map(|(a, b)| *a * *b)
                    .fold(T::zero(), |acc, val| acc + val);
            }
        });

        Ok(())
    }

    /// Returns the matrix product `self * other`
    pub fn multiply(&self, other: &Self) -> Result<Self, MatrixError> {
        let mut ret = Self::zeroes(self.n);
        self.prod_into(other, &mut ret)?;
        Ok(ret)
    }

    /// Returns `self * other.inverse()`
    pub fn divide(&self, other: &Self) -> Result<Self, MatrixError> {
        self.check_same_size(other)?;
        self.multiply(&other.inverse()?)
    }

    /// Multiplies `self` by the column vector `v`, returning $`A \times v`$
    pub fn mul_vec(&self, v: &[T]) -> Result<Vec<T>, MatrixError> {
        if v.len() != self.n {
            return Err(MatrixError::SizeMismatch {
                expected: self.n,
                found: v.len(),
            });
        }
        let ret = (0..self.n)
            .map(|row| {
                (0..self.n).fold(T::zero(), |acc, col| acc + self[(row, col)] * v[col])
            })
            .collect();
        Ok(ret)
    }

    /// Multiplies the row vector `v` by `self`, returning $`v \times A`$
    pub fn vec_mul(&self, v: &[T]) -> Result<Vec<T>, MatrixError> {
        if v.len() != self.n {
            return Err(MatrixError::SizeMismatch {
                expected: self.n,
                found: v.len(),
            });
        }
        let ret = (0..self.n)
            .map(|col| {
                (0..self.n).fold(T::zero(), |acc, row| acc + v[row] * self[(row, col)])
            })
            .collect();
        Ok(ret)
    }

    /// Returns the transpose of `self`
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut ret = Self::zeroes(self.n);
        for row in 0..self.n {
            for col in 0..self.n {
                ret[(col, row)] = self[(row, col)];
            }
        }
        ret
    }

    /// Calculates the determinant through [Gaussian Elimination](https://en.wikipedia.org/wiki/Gaussian_elimination)
    /// with partial pivoting, on a copy of `self`.
    ///
    /// If no pivot larger than [`PIVOT_TOLERANCE`] can be found for a column,
    /// the matrix is considered singular and zero is returned. This differs
    /// from [`SquareMatrix::inverse`], which reports an error instead.
    ///
    /// Elimination is done in `T`, so for integer types every row factor is
    /// truncated and the result is generally not the exact determinant
    /// (e.g., `[[2, 1], [1, 2]]` gives 4 instead of 3).
    pub fn determinant(&self) -> T {
        let n = self.n;
        let mut temp = self.clone();
        let mut det = T::one();

        for i in 0..n {
            // Find the largest element in column i, at or below row i
            let mut pivot_row = i;
            for k in (i + 1)..n {
                if temp[(k, i)].magnitude() > temp[(pivot_row, i)].magnitude() {
                    pivot_row = k;
                }
            }
            let pivot = temp[(pivot_row, i)];
            if pivot.magnitude() < PIVOT_TOLERANCE {
                log::debug!(
                    "no usable pivot in column {} (|pivot| = {}); determinant is zero",
                    i,
                    pivot.magnitude()
                );
                return T::zero();
            }

            if pivot_row != i {
                temp.swap_rows(i, pivot_row);
                det = -det;
            }
            det *= pivot;

            for k in (i + 1)..n {
                let factor = temp[(k, i)] / pivot;
                for j in 0..n {
                    let aux = temp[(i, j)];
                    temp[(k, j)] -= factor * aux;
                }
            }
        }
        det
    }

    /// Calculates the inverse of `self` through [Gauss-Jordan elimination](https://en.wikipedia.org/wiki/Gaussian_elimination#Finding_the_inverse_of_a_matrix).
    ///
    /// Rows are not swapped, so the pivots are the diagonal elements as
    /// elimination reaches them. Returns [`MatrixError::Singular`] when one of
    /// them is smaller than [`PIVOT_TOLERANCE`], even if a row swap would have
    /// made the matrix invertible.
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let n = self.n;
        let mut a = self.clone();
        let mut inv = Self::identity(n);

        for i in 0..n {
            let pivot = a[(i, i)];
            if pivot.magnitude() < PIVOT_TOLERANCE {
                log::debug!(
                    "pivot in row {} is too small (|pivot| = {}); matrix is singular",
                    i,
                    pivot.magnitude()
                );
                return Err(MatrixError::Singular {
                    row: i,
                    pivot: pivot.magnitude(),
                });
            }

            // Make the pivot equal to 1.
            for j in 0..n {
                a[(i, j)] /= pivot;
                inv[(i, j)] /= pivot;
            }

            // Clear column i in every other row
            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = a[(k, i)];
                for j in 0..n {
                    let (a_ij, inv_ij) = (a[(i, j)], inv[(i, j)]);
                    a[(k, j)] -= factor * a_ij;
                    inv[(k, j)] -= factor * inv_ij;
                }
            }
        }

        Ok(inv)
    }

    /// Calculates the [Kronecker product](https://en.wikipedia.org/wiki/Kronecker_product)
    /// $`A \otimes B`$ of `self` (of size `n1`) and `other` (of size `n2`).
    ///
    /// The sizes of both matrices are independent, and the result has size `n1 * n2`.
    #[must_use]
    pub fn tensor(&self, other: &Self) -> Self {
        let (n1, n2) = (self.n, other.n);
        log::trace!("allocating a {0}x{0} Kronecker product", n1 * n2);

        let mut ret = Self::zeroes(n1 * n2);
        for i in 0..n1 {
            for j in 0..n1 {
                let a = self[(i, j)];
                for k in 0..n2 {
                    for l in 0..n2 {
                        ret[(i * n2 + k, j * n2 + l)] = a * other[(k, l)];
                    }
                }
            }
        }
        ret
    }

    /// Checks if two matrices are exactly the same (as in `element == other_element`... beware Floats).
    pub fn compare(&self, other: &Self) -> bool {
        self.n == other.n && self.data == other.data
    }

    /// Checks if two matrices have the same size and every pair of elements
    /// differs by no more than `tolerance`
    pub fn compare_within(&self, other: &Self, tolerance: Float) -> bool {
        self.n == other.n
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a.as_float() - b.as_float()).abs() <= tolerance)
    }
}

impl<T: Numberish> std::ops::Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[self.offset(row, col)]
    }
}

impl<T: Numberish> std::ops::IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let i = self.offset(row, col);
        &mut self.data[i]
    }
}

impl<T: Numberish> std::ops::Mul<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, s: T) -> Self::Output {
        self.scale(s)
    }
}

impl<T: Numberish> std::ops::MulAssign<T> for SquareMatrix<T> {
    fn mul_assign(&mut self, s: T) {
        self.scale_assign(s)
    }
}

impl<T: Numberish> std::ops::Div<T> for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn div(self, s: T) -> Self::Output {
        self.unscale(s)
    }
}

impl<T: Numberish> std::ops::DivAssign<T> for SquareMatrix<T> {
    fn div_assign(&mut self, s: T) {
        self.unscale_assign(s)
    }
}
