// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # The Calculator
//!
//! The `Calculator<T>` value type: a stateless, zero-sized object providing
//! the four integer operations. Being stateless, a calculator is `Copy` and
//! trivially shareable; creating one allocates nothing.
//!
//! ## Semantics
//!
//! * `add`, `subtract`, `multiply`: two's-complement wraparound at the type
//!   boundary, matching the intrinsic `wrapping_*` methods.
//! * `divide`: truncating integer division; a zero divisor yields `T::zero()`
//!   instead of signaling an error. This silent sentinel is a documented
//!   compatibility quirk of the exported contract and must not be changed to
//!   a panic or a `Result`.

use crate::num::ops::{
    checked_arithmetic::CheckedDivVal,
    wrapping_arithmetic::{WrappingAddVal, WrappingMulVal, WrappingSubVal},
};
use num_traits::{PrimInt, Signed};
use std::marker::PhantomData;

/// A stateless integer calculator over a signed integer type `T`.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::calculator::Calculator;
/// let calculator = Calculator::<i32>::new();
/// assert_eq!(calculator.add(2, 3), 5);
/// assert_eq!(calculator.divide(10, 0), 0); // Silent zero sentinel
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator<T> {
    _marker: PhantomData<T>,
}

impl<T> Calculator<T>
where
    T: PrimInt + Signed + WrappingAddVal + WrappingSubVal + WrappingMulVal + CheckedDivVal,
{
    /// Creates a new `Calculator` instance.
    #[inline(always)]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Returns the sum of `a` and `b`, wrapping around at the type boundary.
    #[inline(always)]
    pub fn add(&self, a: T, b: T) -> T {
        a.wrapping_add_val(b)
    }

    /// Returns the difference of `a` and `b`, wrapping around at the type boundary.
    #[inline(always)]
    pub fn subtract(&self, a: T, b: T) -> T {
        a.wrapping_sub_val(b)
    }

    /// Returns the product of `a` and `b`, wrapping around at the type boundary.
    #[inline(always)]
    pub fn multiply(&self, a: T, b: T) -> T {
        a.wrapping_mul_val(b)
    }

    /// Returns the truncating quotient of `a` and `b`.
    ///
    /// A zero divisor yields `T::zero()`. No error is raised or reported; the
    /// sentinel is indistinguishable from a genuine zero quotient.
    #[inline(always)]
    pub fn divide(&self, a: T, b: T) -> T {
        a.checked_div_val(b).unwrap_or_else(T::zero)
    }
}

impl<T> std::fmt::Display for Calculator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Calculator")
    }
}

#[cfg(test)]
mod tests {
    use super::Calculator;

    #[test]
    fn test_add_basic() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.add(2, 3), 5);
        assert_eq!(calculator.add(-2, 3), 1);
    }

    #[test]
    fn test_subtract_basic() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.subtract(5, 9), -4);
        assert_eq!(calculator.subtract(9, 5), 4);
    }

    #[test]
    fn test_multiply_basic() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.multiply(-3, 4), -12);
        assert_eq!(calculator.multiply(0, 12345), 0);
    }

    #[test]
    fn test_divide_truncates_toward_zero() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.divide(7, 2), 3);
        assert_eq!(calculator.divide(-7, 2), -3);
        assert_eq!(calculator.divide(7, -2), -3);
    }

    #[test]
    fn test_divide_by_zero_returns_zero() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.divide(10, 0), 0);
        assert_eq!(calculator.divide(0, 0), 0);
        assert_eq!(calculator.divide(i32::MIN, 0), 0);
    }

    #[test]
    fn test_add_wraps_at_boundary() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.add(i32::MAX, 1), i32::MIN);
        assert_eq!(calculator.add(i32::MIN, -1), i32::MAX);
    }

    #[test]
    fn test_multiply_wraps_at_boundary() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(calculator.multiply(i32::MAX, 2), -2);
    }

    #[test]
    fn test_generic_over_integer_width() {
        let calculator = Calculator::<i64>::new();
        assert_eq!(calculator.add(i32::MAX as i64, 1), i32::MAX as i64 + 1);
        assert_eq!(calculator.divide(10, 0), 0);
    }

    #[test]
    fn test_calculator_correct_display() {
        let calculator = Calculator::<i32>::new();
        assert_eq!(format!("{}", calculator), "Calculator");
    }
}
