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


#![deny(missing_docs)]

//! A Library for square Matrix operations.
//!
//! It is built generically (i.e., `SquareMatrix<T: Numberish>` where `Numberish` is a
//! basic numeric Trait) so that the same library can be used for defining Matrices
//! over `i32`, `i64`, `f32` and `f64`.
//!
//! ```
//! use matrix::Matrix;
//!
//! let a = Matrix::from_data(2, vec![1., 2., 3., 4.]).unwrap();
//! let b = Matrix::from_data(2, vec![2., 0., 1., 2.]).unwrap();
//! let c = a.multiply(&b).unwrap();
//! assert!(c.compare(&Matrix::from_data(2, vec![4., 4., 10., 8.]).unwrap()));
//! ```

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(feature = "float")]
pub type Float = f32;

/// The kind of Floating point number used in the
/// library... the `"float"` feature means it becomes `f32`
/// and `f64` is used otherwise.
#[cfg(not(feature = "float"))]
pub type Float = f64;

/// Pivots whose magnitude is below this value are treated as zero
/// by [`SquareMatrix::determinant`] and [`SquareMatrix::inverse`]
pub const PIVOT_TOLERANCE: Float = 1e-12;

/// The errors reported by matrix operations
pub mod error;
pub use error::MatrixError;

/// The requirements for the elements of a matrix
pub mod traits;
pub use traits::{Magnitude, Numberish, OneZero};

/// The square matrix itself
pub mod square_matrix;
pub use square_matrix::SquareMatrix;

/// A shorthand for `SquareMatrix<Float>`; i.e., a normal
/// matrix. Note that `Float` is defined as `f32` if the feature `float`
/// is utilized; otherwise, it defauts to `f64`.
pub type Matrix = SquareMatrix<Float>;
