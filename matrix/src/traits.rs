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

/// A simple trait required for initializing some matrices (e.g., the
/// identity matrix)
pub trait OneZero {
    /// Returns an element considered to be 0.
    fn zero() -> Self;

    /// Returns an element considered to be 1.
    fn one() -> Self;
}

/// The absolute value of an element, expressed as a `Float`.
///
/// Elimination algorithms use this both to choose pivots and to
/// decide whether a pivot is too small to divide by, so it has to be
/// comparable across element types (e.g., `i32` and `f64`).
pub trait Magnitude {
    /// Returns the element as a `Float` (rounded, for large integers)
    fn as_float(&self) -> Float;

    /// Returns $`|x|`$
    fn magnitude(&self) -> Float {
        self.as_float().abs()
    }
}

macro_rules! impl_number {
    ( $( $t : ty ),* ) => {
        $(
            impl OneZero for $t {
                fn zero() -> Self {
                    0 as $t
                }
                fn one() -> Self {
                    1 as $t
                }
            }

            impl Magnitude for $t {
                fn as_float(&self) -> Float {
                    *self as Float
                }
            }
        )*
    };
}

impl_number!(f32, f64, i8, i16, i32, i64, i128, isize);

/// Define the basic algebraic requirements for T
pub trait Numberish:
    Copy
    + Clone
    + OneZero
    + Magnitude
    + PartialEq
    + Sized
    + std::fmt::Display
    + std::fmt::Debug
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Neg<Output = Self>
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::ops::Mul<Output = Self>
    + std::ops::MulAssign
    + std::ops::Div<Output = Self>
    + std::ops::DivAssign
    + Sync
    + Send
{
}
impl<
        T: OneZero
            + Magnitude
            + Copy
            + Clone
            + PartialEq
            + Sized
            + std::fmt::Display
            + std::fmt::Debug
            + std::ops::Add<Output = Self>
            + std::ops::Sub<Output = Self>
            + std::ops::Neg<Output = Self>
            + std::ops::AddAssign
            + std::ops::SubAssign
            + std::ops::Mul<Output = Self>
            + std::ops::MulAssign
            + std::ops::Div<Output = Self>
            + std::ops::DivAssign
            + Sync
            + Send,
    > Numberish for T
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_zero() {
        assert_eq!(<f64 as OneZero>::zero(), 0.0);
        assert_eq!(<f64 as OneZero>::one(), 1.0);
        assert_eq!(<i32 as OneZero>::zero(), 0);
        assert_eq!(<i32 as OneZero>::one(), 1);
    }

    #[test]
    fn test_magnitude() {
        assert_eq!((-3i32).magnitude(), 3.0);
        assert_eq!(2.5f32.magnitude(), 2.5);
        assert_eq!((-4.0f64).magnitude(), 4.0);
        assert_eq!(i32::MIN.magnitude(), 2147483648.0);
    }
}
