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

//! Owning handle to a configuration record.
//!
//! Two kinds of references reach a record:
//!
//! * The driver that created the record holds a [`ParamsHandle`], which owns
//!   the heap allocation.
//! * Callbacks invoked by the solver receive a plain `&EigenParams` (or
//!   `*mut EigenParams` across the C boundary) borrowed from the solver.
//!
//! The accessors on `ParamsHandle` dereference once and delegate, so both
//! kinds observe identical values.

use crate::error::Result;
use crate::field::FieldTag;
use crate::params::EigenParams;
use crate::value::FieldValue;

/// Owns a heap-allocated [`EigenParams`].
#[derive(Debug, Clone, Default)]
pub struct ParamsHandle {
    inner: Box<EigenParams>,
}

impl ParamsHandle {
    /// Allocates a record initialized to its defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Box::new(EigenParams::new()),
        }
    }

    /// Borrows the record, as a callback would see it.
    #[inline]
    pub fn params(&self) -> &EigenParams {
        &self.inner
    }

    #[inline]
    pub fn params_mut(&mut self) -> &mut EigenParams {
        &mut self.inner
    }

    #[inline]
    pub fn set_member(&mut self, label: i32, value: FieldValue) -> Result<()> {
        self.inner.set_member(label, value)
    }

    #[inline]
    pub fn get_member(&self, label: i32) -> Result<FieldValue> {
        self.inner.get_member(label)
    }

    #[inline]
    pub fn get_field(&self, tag: FieldTag) -> Result<FieldValue> {
        self.inner.get_field(tag)
    }

    #[inline]
    pub fn preconditioner_shift(&self, position: i64) -> Result<f64> {
        self.inner.preconditioner_shift(position)
    }

    /// Releases ownership and returns the raw record pointer.
    ///
    /// The pointer must eventually be passed to [`ParamsHandle::from_raw`]
    /// to free the record.
    #[inline]
    pub fn into_raw(self) -> *mut EigenParams {
        Box::into_raw(self.inner)
    }

    /// Retakes ownership of a record released by [`ParamsHandle::into_raw`].
    ///
    /// # Safety
    ///
    /// `ptr` must come from `ParamsHandle::into_raw` and must not be used
    /// afterwards through any other path.
    #[inline]
    pub unsafe fn from_raw(ptr: *mut EigenParams) -> Self {
        Self {
            inner: Box::from_raw(ptr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParamsError;

    fn populated_handle() -> ParamsHandle {
        let mut handle = ParamsHandle::new();
        handle
            .set_member(FieldTag::NumEvals.as_raw(), FieldValue::Int(3))
            .unwrap();
        handle
            .set_member(FieldTag::Iseed.as_raw(), FieldValue::Seed([9, 8, 7, 6]))
            .unwrap();
        handle
            .params_mut()
            .set_preconditioner_shifts(vec![1.25, -0.5]);
        handle
    }

    #[test]
    fn test_handle_and_borrowed_reference_agree() {
        let handle = populated_handle();
        let borrowed: &EigenParams = handle.params();

        for tag in FieldTag::ALL {
            assert_eq!(
                handle.get_member(tag.as_raw()),
                borrowed.get_member(tag.as_raw()),
                "mismatch for `{}`",
                tag
            );
        }
        for position in -1..=3 {
            assert_eq!(
                handle.preconditioner_shift(position),
                borrowed.preconditioner_shift(position)
            );
        }
    }

    #[test]
    fn test_handle_reports_errors_like_direct_access() {
        let handle = populated_handle();
        assert_eq!(
            handle.get_member(0),
            Err(ParamsError::UnknownField { label: 0 })
        );
        assert_eq!(
            handle.preconditioner_shift(3),
            Err(ParamsError::ShiftIndexOutOfRange { index: 3, len: 2 })
        );
    }

    #[test]
    fn test_raw_round_trip_keeps_contents() {
        let handle = populated_handle();
        let raw = handle.into_raw();
        assert!(!raw.is_null());

        let handle = unsafe { ParamsHandle::from_raw(raw) };
        assert_eq!(handle.params().num_evals, 3);
        assert_eq!(handle.get_field(FieldTag::Iseed), Ok(FieldValue::Seed([9, 8, 7, 6])));
    }
}
