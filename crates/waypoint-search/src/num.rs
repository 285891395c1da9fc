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

use num_traits::{FromPrimitive, PrimInt, Signed};
use waypoint_core::num::{
    constants::{PlusOne, Zero},
    ops::{
        checked_arithmetic::CheckedShlVal,
        saturating_arithmetic::{SaturatingAddVal, SaturatingSubVal},
    },
};

/// A trait alias for numeric types that can carry costs and evaluation
/// values in the search engines. These are usually the signed integer types
/// `i16`, `i32`, `i64` and `isize`.
///
/// Costs are non-negative by the task contract; the maximum value of the
/// type serves as the `∞` sentinel for dead ends and open upper bounds.
/// All `f = g + h` arithmetic saturates, so `g + ∞ = ∞`.
///
/// # Note
///
/// `i128` is intentionally not recommended for performance reasons, as it
/// is significantly slower on many platforms, though it satisfies the
/// bounds.
pub trait SearchNumeric:
    PrimInt
    + Signed
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + PlusOne
    + SaturatingAddVal
    + SaturatingSubVal
    + CheckedShlVal
    + Send
    + Sync
{
    /// The `∞` sentinel: the maximum value of the type.
    #[inline(always)]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns `true` if `self` is the `∞` sentinel.
    #[inline(always)]
    fn is_infinite(self) -> bool {
        self == Self::max_value()
    }
}

impl<T> SearchNumeric for T where
    T: PrimInt
        + Signed
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + PlusOne
        + SaturatingAddVal
        + SaturatingSubVal
        + CheckedShlVal
        + Send
        + Sync
{
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinity_sentinel() {
        assert_eq!(<i64 as SearchNumeric>::infinity(), i64::MAX);
        assert!(i64::MAX.is_infinite());
        assert!(!0i64.is_infinite());
    }

    #[test]
    fn test_saturating_addition_preserves_infinity() {
        let g = 5i64;
        let h = <i64 as SearchNumeric>::infinity();
        assert_eq!(g.saturating_add_val(h), <i64 as SearchNumeric>::infinity());
    }

    #[test]
    fn test_alias_covers_common_types() {
        fn assert_search_numeric<T: SearchNumeric>() {}
        assert_search_numeric::<i16>();
        assert_search_numeric::<i32>();
        assert_search_numeric::<i64>();
        assert_search_numeric::<isize>();
    }
}
