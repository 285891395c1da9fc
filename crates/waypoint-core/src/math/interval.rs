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

use num_traits::PrimInt;
use std::{
    cmp::{max, min},
    ops::BitAnd,
};

/// A closed interval `[lo, hi]` defined by two inclusive bounds.
///
/// This struct represents a contiguous, non-empty set of integers. The search
/// engines use it to bracket the optimal plan cost: `lo` is a certified lower
/// bound and `hi` an upper bound, with `lo == hi` meaning the bracket has
/// collapsed to a proven value.
///
/// # Invariants
/// `lo` must always be less than or equal to `hi`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    lo: T,
    hi: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(3, 10);
    /// assert_eq!(iv.lo(), 3);
    /// assert_eq!(iv.hi(), 10);
    /// ```
    #[inline]
    pub fn new(lo: T, hi: T) -> Self {
        assert!(
            lo <= hi,
            "Invalid interval: lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `lo > hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(lo: T, hi: T) -> Option<Self> {
        if lo <= hi { Some(Self { lo, hi }) } else { None }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release
    /// builds.
    ///
    /// # Safety
    ///
    /// The caller must ensure `lo <= hi`. This function contains a
    /// `debug_assert!` to catch errors during development.
    #[inline]
    pub fn new_unchecked(lo: T, hi: T) -> Self {
        debug_assert!(
            lo <= hi,
            "Invalid interval: lo must be less than or equal to hi"
        );
        Self { lo, hi }
    }

    /// Creates the degenerate interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::point(7);
    /// assert!(iv.is_point());
    /// assert_eq!(iv.lo(), 7);
    /// ```
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            lo: value,
            hi: value,
        }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub const fn lo(&self) -> T {
        self.lo
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub const fn hi(&self) -> T {
        self.hi
    }

    /// Returns `true` if the interval has collapsed to a single value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::new(5, 5).is_point());
    /// assert!(!ClosedInterval::new(5, 6).is_point());
    /// ```
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }

    /// Returns the width of the interval (`hi - lo`).
    ///
    /// A point interval has width zero.
    #[inline]
    pub fn width(&self) -> T {
        self.hi - self.lo
    }

    /// Returns `true` if `value` lies in `[lo, hi]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert!(iv.contains_point(0));
    /// assert!(iv.contains_point(10));
    /// assert!(!iv.contains_point(11));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals are disjoint. Two closed intervals
    /// sharing a single boundary value intersect in that value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    ///
    /// let c = ClosedInterval::new(10, 20);
    /// assert_eq!(a.intersection(c), Some(ClosedInterval::new(10, 10)));
    ///
    /// let d = ClosedInterval::new(11, 20);
    /// assert_eq!(a.intersection(d), None);
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let new_lo = max(self.lo, other.lo);
        let new_hi = min(self.hi, other.hi);

        if new_lo <= new_hi {
            Some(Self::new_unchecked(new_lo, new_hi))
        } else {
            None
        }
    }

    /// Calculates the midpoint of the interval.
    ///
    /// The calculation is robust against integer overflow.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use waypoint_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.midpoint(), 5);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        let width = self.hi - self.lo;
        self.lo + (width >> 1)
    }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: PrimInt,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: PrimInt,
{
    #[inline]
    fn default() -> Self {
        Self {
            lo: T::zero(),
            hi: T::zero(),
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("lo", &self.lo)
            .field("hi", &self.hi)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(10, 20);
        assert_eq!(iv.lo(), 10);
        assert_eq!(iv.hi(), 20);
        assert_eq!(iv.width(), 10);
        assert!(!iv.is_point());
    }

    #[test]
    fn test_construction_point() {
        let iv = ClosedInterval::new(10, 10);
        assert_eq!(iv.lo(), 10);
        assert_eq!(iv.hi(), 10);
        assert_eq!(iv.width(), 0);
        assert!(iv.is_point());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        // Invalid: lo > hi
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_point_constructor() {
        let iv = ClosedInterval::point(42);
        assert!(iv.is_point());
        assert_eq!(iv.lo(), 42);
        assert_eq!(iv.hi(), 42);
    }

    #[test]
    fn test_default() {
        let iv: ClosedInterval<i32> = Default::default();
        assert!(iv.is_point());
        assert_eq!(iv.lo(), 0);
        assert_eq!(iv.hi(), 0);
    }

    #[test]
    fn test_contains_point() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.contains_point(0)); // Inclusive lo
        assert!(a.contains_point(5));
        assert!(a.contains_point(10)); // Inclusive hi
        assert!(!a.contains_point(-1));
        assert!(!a.contains_point(11));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(0, 10);

        // Standard overlap
        let b = ClosedInterval::new(5, 15);
        assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));

        // Subset
        let c = ClosedInterval::new(2, 8);
        assert_eq!(a.intersection(c), Some(c));

        // Shared boundary: closed intervals meet in a single point
        let d = ClosedInterval::new(10, 20);
        assert_eq!(a.intersection(d), Some(ClosedInterval::point(10)));

        // Disjoint
        let e = ClosedInterval::new(11, 20);
        assert_eq!(a.intersection(e), None);

        // Commutativity
        assert_eq!(a.intersection(b), b.intersection(a));
    }

    #[test]
    fn test_intersection_with_max_bound() {
        // The engines run with hi = T::max_value() as the open upper bound.
        let open = ClosedInterval::new(3, i64::MAX);
        let probe = ClosedInterval::new(5, i64::MAX);
        assert_eq!(
            open.intersection(probe),
            Some(ClosedInterval::new(5, i64::MAX))
        );

        let closed = ClosedInterval::new(0, 7);
        assert_eq!(open.intersection(closed), Some(ClosedInterval::new(3, 7)));
    }

    #[test]
    fn test_bitand_operator() {
        let a = ClosedInterval::new(0, 10);
        let b = ClosedInterval::new(5, 15);
        assert_eq!(a & b, Some(ClosedInterval::new(5, 10)));

        let c = ClosedInterval::new(20, 30);
        assert_eq!(a & c, None);
    }

    #[test]
    fn test_midpoint() {
        // Even width
        let a = ClosedInterval::new(0, 10);
        assert_eq!(a.midpoint(), 5);

        // Odd width (truncation)
        let b = ClosedInterval::new(0, 3);
        assert_eq!(b.midpoint(), 1);

        // Overflow safety (u8)
        let c: ClosedInterval<u8> = ClosedInterval::new(250, 254);
        // (250+254)/2 = 252. Naive add would panic.
        assert_eq!(c.midpoint(), 252);

        // Overflow safety near the infinity sentinel
        let d = ClosedInterval::new(0, i64::MAX);
        assert_eq!(d.midpoint(), i64::MAX / 2);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = ClosedInterval::new(10, 20);
        assert_eq!(format!("{}", a), "[10, 20]");
        assert_eq!(format!("{:?}", a), "ClosedInterval { lo: 10, hi: 20 }");
    }
}
