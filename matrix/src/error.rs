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


use crate::Float;
use thiserror::Error;

/// The errors that the operations on a [`SquareMatrix`](crate::SquareMatrix)
/// may report.
///
/// # Example
///
/// ```
/// use matrix::{Matrix, MatrixError};
///
/// let a = Matrix::new(1.0, 3);
/// let b = Matrix::new(2.0, 2);
/// assert!(matches!(a.add(&b), Err(MatrixError::SizeMismatch { .. })));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// Two operands (matrix and matrix, or matrix and vector) that must
    /// share the same dimension do not
    #[error("matrix size mismatch: expected dimension {expected}, found {found}")]
    SizeMismatch {
        /// The dimension of the receiver
        expected: usize,
        /// The dimension of the other operand
        found: usize,
    },

    /// The number of values given to build an `n` by `n` matrix is not `n*n`
    #[error("cannot build a {n}x{n} matrix from {found} values (expected {expected})")]
    ConstructionSizeMismatch {
        /// The requested dimension
        n: usize,
        /// `n * n`, or `usize::MAX` if that overflows
        expected: usize,
        /// The number of values received
        found: usize,
    },

    /// A pivot smaller than [`PIVOT_TOLERANCE`](crate::PIVOT_TOLERANCE) was
    /// found while eliminating
    #[error("matrix is singular: pivot in row {row} has magnitude {pivot}")]
    Singular {
        /// The row being eliminated
        row: usize,
        /// The magnitude of the offending pivot
        pivot: Float,
    },
}
