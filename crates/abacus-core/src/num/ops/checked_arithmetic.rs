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

use core::ops::Div;

/// A trait for types that support checked division by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_div` (truncating
/// division), but provides a trait-based API that does not take references
/// (unlike some num_traits APIs).
///
/// # Examples
///
/// ```rust
/// # use abacus_core::num::ops::checked_arithmetic::CheckedDivVal;
///
/// let a: i32 = 100;
/// let b: i32 = 0;
/// assert_eq!(a.checked_div_val(b), None); // Division by zero
/// let c: i32 = 4;
/// assert_eq!(a.checked_div_val(c), Some(25)); // No division by zero
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Performs checked division by value, returning `None` if division by zero occurs.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_method:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> Option<$t> {
                <$t>::$src_method(self, v)
            }
        }
    };
}

checked_impl_val!(CheckedDivVal, checked_div_val, u8, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u16, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u32, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u64, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, usize, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, u128, checked_div);

checked_impl_val!(CheckedDivVal, checked_div_val, i8, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i16, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i32, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i64, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, isize, checked_div);
checked_impl_val!(CheckedDivVal, checked_div_val, i128, checked_div);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_div_truncates_toward_zero() {
        assert_eq!(7i32.checked_div_val(2), Some(3));
        assert_eq!((-7i32).checked_div_val(2), Some(-3));
        assert_eq!(7i32.checked_div_val(-2), Some(-3));
    }

    #[test]
    fn test_checked_div_zero_divisor_is_none() {
        assert_eq!(10i32.checked_div_val(0), None);
        assert_eq!(0i32.checked_div_val(0), None);
    }

    #[test]
    fn test_checked_div_overflow_is_none() {
        // The one signed case where the quotient does not fit.
        assert_eq!(i32::MIN.checked_div_val(-1), None);
    }
}
