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

//! # Record Lifecycle
//!
//! Allocation, release, preset configuration and reporting of the
//! configuration record.
//!
//! ## Usage Lifecycle
//!
//! 1.  **Instantiation**: `eigenbridge_params_initialize` writes a new record
//!     holding the defaults into the caller's pointer slot.
//! 2.  **Configuration**: `eigenbridge_set_member` per field, optionally
//!     preceded by `eigenbridge_params_set_method`.
//! 3.  **Solving**: The record is handed to the solver, which passes it to
//!     every callback.
//! 4.  **Cleanup**: `eigenbridge_params_free` releases the record and nulls the
//!     slot.
//!
//! ## Safety
//!
//! * Record pointers must be allocated by `eigenbridge_params_initialize`.
//! * Passing a null pointer slot results in a panic.

use crate::status::status_of;
use eigenbridge_params::field::FieldTag;
use eigenbridge_params::handle::ParamsHandle;
use eigenbridge_params::method::PresetMethod;
use eigenbridge_params::params::EigenParams;
use libc::{c_int, c_void};
use std::io::Write;

/// Allocates a record holding the defaults and stores it in `*out`.
///
/// # Safety
///
/// `out` must be valid for writes. A record previously stored in `*out` is
/// not freed.
///
/// # Panics
///
/// Panics if `out` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_params_initialize(out: *mut *mut EigenParams) {
    assert!(
        !out.is_null(),
        "called `eigenbridge_params_initialize` with null pointer"
    );
    *out = ParamsHandle::new().into_raw();
}

/// Frees the record stored in `*pp` and sets `*pp` to null.
///
/// A null `*pp` is a no-op.
///
/// # Safety
///
/// `*pp` must be null or a record allocated by `eigenbridge_params_initialize`
/// that has not been freed.
///
/// # Panics
///
/// Panics if `pp` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_params_free(pp: *mut *mut EigenParams) {
    assert!(
        !pp.is_null(),
        "called `eigenbridge_params_free` with null pointer"
    );
    let ptr = *pp;
    if !ptr.is_null() {
        drop(ParamsHandle::from_raw(ptr));
        *pp = std::ptr::null_mut();
    }
}

/// Configures the record for the preset `method` and fills in unset sizes.
///
/// Returns `EIGENBRIDGE_ERR_UNKNOWN_ENUMERANT` for an unknown method; the
/// record is then unchanged.
///
/// # Safety
///
/// `pp` and `*pp` must be valid; `*pp` must come from
/// `eigenbridge_params_initialize`.
///
/// # Panics
///
/// Panics if `pp` or `*pp` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_params_set_method(
    pp: *mut *mut EigenParams,
    method: c_int,
) -> c_int {
    assert!(
        !pp.is_null() && !(*pp).is_null(),
        "called `eigenbridge_params_set_method` with null pointer"
    );
    let params = &mut **pp;

    status_of(PresetMethod::try_from(method).map(|method| params.set_method(method)))
}

/// Writes the parameter report to the record's `output_file`, or to standard
/// output when it is null.
///
/// # Safety
///
/// `pp` and `*pp` must be valid. A non-null `output_file` must be an open
/// stream.
///
/// # Panics
///
/// Panics if `pp` or `*pp` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_params_display(pp: *const *const EigenParams) {
    assert!(
        !pp.is_null() && !(*pp).is_null(),
        "called `eigenbridge_params_display` with null pointer"
    );
    let params = &**pp;
    let rendered = params.report().to_string();

    // The report is best effort: a failing stream has nowhere to report to,
    // so write results are ignored on both branches.
    if params.output_file.is_null() {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(rendered.as_bytes());
        let _ = stdout.flush();
    } else {
        let _ = libc::fwrite(
            rendered.as_ptr().cast::<c_void>(),
            1,
            rendered.len(),
            params.output_file,
        );
        let _ = libc::fflush(params.output_file);
    }
}

/// Returns the value kind expected by `label`, or `-1` for an unknown label.
#[no_mangle]
pub extern "C" fn eigenbridge_field_kind(label: c_int) -> c_int {
    FieldTag::try_from(label).map_or(-1, |tag| tag.kind() as c_int)
}
