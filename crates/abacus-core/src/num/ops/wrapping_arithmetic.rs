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

use core::ops::{Add, Mul, Sub};

/// A trait for types that support wrapping addition by value (no references).
///
/// This mirrors the semantics of primitive integer `wrapping_add`, but provides
/// a trait-based API that does not take references (unlike some num_traits APIs).
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::wrapping_arithmetic::WrappingAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.wrapping_add_val(b), 44); // Wraps around modulo 256
/// let c: u8 = 50;
/// assert_eq!(a.wrapping_add_val(c), 250); // No wraparound
/// ```
pub trait WrappingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value, wrapping around at the boundary of the type.
    fn wrapping_add_val(self, v: Self) -> Self;
}

macro_rules! wrapping_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                <$t>::$src_method(self, v)
            }
        }
    };
}

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u8, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u16, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u32, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u64, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, usize, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, u128, wrapping_add);

wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i8, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i16, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i32, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i64, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, isize, wrapping_add);
wrapping_impl_val!(WrappingAddVal, wrapping_add_val, i128, wrapping_add);

/// A trait for types that support wrapping subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::wrapping_arithmetic::WrappingSubVal;
///
/// let a: u8 = 50;
/// let b: u8 = 100;
/// assert_eq!(a.wrapping_sub_val(b), 206); // Wraps around modulo 256
/// let c: u8 = 20;
/// assert_eq!(a.wrapping_sub_val(c), 30); // No wraparound
/// ```
pub trait WrappingSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs wrapping subtraction by value, wrapping around at the boundary of the type.
    fn wrapping_sub_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u8, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u16, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u32, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u64, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, usize, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, u128, wrapping_sub);

wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i8, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i16, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i32, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i64, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, isize, wrapping_sub);
wrapping_impl_val!(WrappingSubVal, wrapping_sub_val, i128, wrapping_sub);

/// A trait for types that support wrapping multiplication by value (no references).
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::wrapping_arithmetic::WrappingMulVal;
///
/// let a: u8 = 20;
/// let b: u8 = 10;
/// assert_eq!(a.wrapping_mul_val(b), 200); // No wraparound
/// let c: u8 = 20;
/// assert_eq!(a.wrapping_mul_val(c), 144); // 400 mod 256 = 144
/// ```
pub trait WrappingMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs wrapping multiplication by value, wrapping around at the boundary of the type.
    fn wrapping_mul_val(self, v: Self) -> Self;
}

wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, u8, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, u16, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, u32, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, u64, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, usize, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, u128, wrapping_mul);

wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, i8, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, i16, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, i32, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, i64, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, isize, wrapping_mul);
wrapping_impl_val!(WrappingMulVal, wrapping_mul_val, i128, wrapping_mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_add_signed_boundary() {
        assert_eq!(i32::MAX.wrapping_add_val(1), i32::MIN);
        assert_eq!(i32::MIN.wrapping_add_val(-1), i32::MAX);
    }

    #[test]
    fn test_wrapping_sub_signed_boundary() {
        assert_eq!(i32::MIN.wrapping_sub_val(1), i32::MAX);
    }

    #[test]
    fn test_wrapping_mul_signed_boundary() {
        assert_eq!(i32::MIN.wrapping_mul_val(-1), i32::MIN);
        assert_eq!(2i32.wrapping_mul_val(i32::MAX), -2);
    }
}
