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

//! # Strongly Typed Indices (Zero-Cost)
//!
//! Phantom-typed wrappers around `usize` that keep index spaces apart and make
//! the 1-based positions used by Fortran-style callers explicit. A
//! `TypedIndex<T>` always stores the 0-based offset; the conversion from a
//! caller's 1-based position happens once, in `TypedIndex::from_one_based`,
//! and rejects positions below 1 instead of wrapping.
//!
//! ## Usage
//!
//! ```rust
//! use eigenbridge_core::utils::index::{TypedIndex, TypedIndexTag};
//!
//! #[derive(Clone)]
//! struct ShiftTag;
//! impl TypedIndexTag for ShiftTag { const NAME: &'static str = "ShiftIndex"; }
//!
//! type ShiftIndex = TypedIndex<ShiftTag>;
//! let s = ShiftIndex::from_one_based(3).unwrap();
//! assert_eq!(s.get(), 2);
//! assert_eq!(format!("{}", s), "ShiftIndex(2)");
//! ```

/// A trait to tag typed indices with a name for debugging and display purposes.
pub trait TypedIndexTag: Clone {
    const NAME: &'static str;
}

/// A strongly typed, 0-based index associated with a tag type `T`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypedIndex<T> {
    index: usize,
    _marker: std::marker::PhantomData<T>,
}

impl<T> TypedIndex<T> {
    /// Creates a new `TypedIndex` from a 0-based offset.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: std::marker::PhantomData,
        }
    }

    /// Creates a `TypedIndex` from a 1-based position.
    ///
    /// Returns `None` if `position` is smaller than 1 or does not fit
    /// into `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use eigenbridge_core::utils::index::{TypedIndex, TypedIndexTag};
    /// #[derive(Clone)]
    /// struct MyTag;
    /// impl TypedIndexTag for MyTag { const NAME: &'static str = "MyIndex"; }
    ///
    /// assert_eq!(TypedIndex::<MyTag>::from_one_based(1).map(|i| i.get()), Some(0));
    /// assert!(TypedIndex::<MyTag>::from_one_based(0).is_none());
    /// assert!(TypedIndex::<MyTag>::from_one_based(-4).is_none());
    /// ```
    #[inline]
    pub fn from_one_based(position: i64) -> Option<Self> {
        let offset = position.checked_sub(1)?;
        usize::try_from(offset).ok().map(Self::new)
    }

    /// Returns the underlying 0-based offset.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.index
    }
}

impl<T> std::fmt::Debug for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}

impl<T> std::fmt::Display for TypedIndex<T>
where
    T: TypedIndexTag,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", T::NAME, self.index)
    }
}
