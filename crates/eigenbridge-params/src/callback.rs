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

//! Callback signatures and opaque resource handles stored in the record.
//!
//! The record only stores these values; it never calls the callbacks and
//! never dereferences the handles.

use crate::params::EigenParams;
use libc::{c_int, c_void};

/// Applies an operator (matrix, mass matrix or preconditioner) to a block of
/// `block_size` vectors: `y = Op * x`.
pub type MatrixOperatorFn = unsafe extern "C" fn(
    x: *mut c_void,
    ldx: *mut i64,
    y: *mut c_void,
    ldy: *mut i64,
    block_size: *mut c_int,
    params: *mut EigenParams,
    ierr: *mut c_int,
);

/// Global reduction of `count` reals across all processes.
pub type GlobalSumFn = unsafe extern "C" fn(
    send_buf: *mut c_void,
    recv_buf: *mut c_void,
    count: *mut c_int,
    params: *mut EigenParams,
    ierr: *mut c_int,
);

/// User-supplied convergence test for one eigenpair.
pub type ConvergenceTestFn = unsafe extern "C" fn(
    eval: *mut f64,
    evec: *mut c_void,
    r_norm: *mut f64,
    is_conv: *mut c_int,
    params: *mut EigenParams,
    ierr: *mut c_int,
);

/// An untyped pointer owned by the caller (matrix data, communicator,
/// work arrays).
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueHandle(*mut c_void);

impl OpaqueHandle {
    /// The null handle.
    pub const NULL: Self = Self(std::ptr::null_mut());

    #[inline]
    pub const fn new(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    #[inline]
    pub const fn as_ptr(&self) -> *mut c_void {
        self.0
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl Default for OpaqueHandle {
    fn default() -> Self {
        Self::NULL
    }
}

impl From<*mut c_void> for OpaqueHandle {
    fn from(ptr: *mut c_void) -> Self {
        Self(ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_handle_is_null() {
        let handle = OpaqueHandle::default();
        assert!(handle.is_null());
        assert_eq!(handle, OpaqueHandle::NULL);
    }

    #[test]
    fn test_handle_preserves_address() {
        let mut data = 17_u64;
        let ptr = (&mut data as *mut u64).cast::<c_void>();
        let handle = OpaqueHandle::from(ptr);
        assert!(!handle.is_null());
        assert_eq!(handle.as_ptr(), ptr);
    }
}
