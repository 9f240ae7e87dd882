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

use num_traits::{NumCast, PrimInt};

/// A trait for integers that can be converted by value into another integer
/// type, returning `None` if the value is not representable in the target.
///
/// Unlike an `as` cast this never truncates or wraps.
///
/// # Examples
///
/// ```rust
/// # use eigenbridge_core::num::narrow::CheckedNarrow;
/// let fits: i64 = 42;
/// assert_eq!(CheckedNarrow::<i32>::checked_narrow(fits), Some(42_i32));
///
/// let too_big: i64 = i64::from(i32::MAX) + 1;
/// assert_eq!(CheckedNarrow::<i32>::checked_narrow(too_big), None);
///
/// let negative: i64 = -1;
/// assert_eq!(CheckedNarrow::<usize>::checked_narrow(negative), None);
/// ```
pub trait CheckedNarrow<D>: Sized {
    /// Converts `self` into `D`, returning `None` if it does not fit.
    fn checked_narrow(self) -> Option<D>;
}

impl<S, D> CheckedNarrow<D> for S
where
    S: PrimInt,
    D: PrimInt,
{
    #[inline(always)]
    fn checked_narrow(self) -> Option<D> {
        <D as NumCast>::from(self)
    }
}
