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

//! # Tagged Field Access
//!
//! The C entry points of the accessor protocol. Every function returns a
//! status code (`EIGENBRIDGE_SUCCESS` or one of the `EIGENBRIDGE_ERR_*`
//! codes). On failure the record is unchanged and the output slot is not
//! written.
//!
//! ## Reference Kinds
//!
//! * `eigenbridge_set_member` takes the owning pointer slot
//!   (`EigenParams **`) held by the driver.
//! * `eigenbridge_get_member` and `eigenbridge_get_prec_shift` take the
//!   record pointer a callback receives.
//! * `eigenbridge_top_get_member` and `eigenbridge_top_get_prec_shift` take
//!   the owning pointer slot, dereference it once and delegate.
//!
//! ## Exported API
//!
//! * `eigenbridge_set_member`
//! * `eigenbridge_get_member`
//! * `eigenbridge_get_prec_shift`
//! * `eigenbridge_top_get_member`
//! * `eigenbridge_top_get_prec_shift`

use crate::status::{status_of, EIGENBRIDGE_SUCCESS};
use crate::value::{decode, encode, FfiFieldSlot, FfiFieldValue};
use eigenbridge_params::error::Result;
use eigenbridge_params::field::FieldTag;
use eigenbridge_params::params::EigenParams;
use libc::c_int;

unsafe fn set_member_checked(
    params: &mut EigenParams,
    label: c_int,
    value: &FfiFieldValue,
) -> Result<()> {
    let tag = FieldTag::try_from(label)?;
    let value = decode(tag, value, params)?;
    params.set_field(tag, value)
}

/// Writes the field `label` of the record from `value`.
///
/// For `EIGENBRIDGE_FIELD_TARGET_SHIFTS`, exactly `num_target_shifts`
/// elements are read from `value.double_array`, using the count stored at
/// call time.
///
/// # Safety
///
/// `pp` and `*pp` must be valid. The member of `value` matching the field's
/// kind must be initialized, and array pointers must reference enough
/// elements.
///
/// # Panics
///
/// Panics if `pp` or `*pp` is null, or if an array pointer is null while
/// elements must be read from it.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_set_member(
    pp: *mut *mut EigenParams,
    label: c_int,
    value: FfiFieldValue,
) -> c_int {
    assert!(
        !pp.is_null() && !(*pp).is_null(),
        "called `eigenbridge_set_member` with null pointer"
    );
    let params = &mut **pp;

    status_of(set_member_checked(params, label, &value))
}

/// Reads the field `label` of the record into `out`.
///
/// Arrays are written contiguously starting at `out`: 4 integers for the
/// seed, `num_target_shifts` reals for the target shifts.
///
/// # Safety
///
/// `p` must be a valid record. `out` must be valid for writes of the field's
/// value, including every array element.
///
/// # Panics
///
/// Panics if `p` or `out` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_get_member(
    p: *const EigenParams,
    label: c_int,
    out: *mut FfiFieldSlot,
) -> c_int {
    assert!(
        !p.is_null(),
        "called `eigenbridge_get_member` with null pointer"
    );
    assert!(
        !out.is_null(),
        "called `eigenbridge_get_member` with null output slot"
    );
    let params = &*p;

    match params.get_member(label) {
        Ok(value) => {
            encode(&value, out);
            EIGENBRIDGE_SUCCESS
        }
        Err(e) => e.status_code(),
    }
}

/// Reads the preconditioner shift at the 1-based `index` into `*shift`.
///
/// # Safety
///
/// `p` must be a valid record and `shift` valid for writes.
///
/// # Panics
///
/// Panics if `p` or `shift` is null.
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_get_prec_shift(
    p: *const EigenParams,
    index: c_int,
    shift: *mut f64,
) -> c_int {
    assert!(
        !p.is_null(),
        "called `eigenbridge_get_prec_shift` with null pointer"
    );
    assert!(
        !shift.is_null(),
        "called `eigenbridge_get_prec_shift` with null output pointer"
    );
    let params = &*p;

    match params.preconditioner_shift(i64::from(index)) {
        Ok(value) => {
            *shift = value;
            EIGENBRIDGE_SUCCESS
        }
        Err(e) => e.status_code(),
    }
}

/// Same as [`eigenbridge_get_member`], through the owning pointer slot.
///
/// # Safety
///
/// `pp` must be valid; the requirements of [`eigenbridge_get_member`] apply
/// to `*pp` and `out`.
///
/// # Panics
///
/// Panics if `pp` is null, or as [`eigenbridge_get_member`].
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_top_get_member(
    pp: *const *const EigenParams,
    label: c_int,
    out: *mut FfiFieldSlot,
) -> c_int {
    assert!(
        !pp.is_null(),
        "called `eigenbridge_top_get_member` with null pointer"
    );
    eigenbridge_get_member(*pp, label, out)
}

/// Same as [`eigenbridge_get_prec_shift`], through the owning pointer slot.
///
/// # Safety
///
/// `pp` must be valid; the requirements of [`eigenbridge_get_prec_shift`]
/// apply to `*pp` and `shift`.
///
/// # Panics
///
/// Panics if `pp` is null, or as [`eigenbridge_get_prec_shift`].
#[no_mangle]
pub unsafe extern "C" fn eigenbridge_top_get_prec_shift(
    pp: *const *const EigenParams,
    index: c_int,
    shift: *mut f64,
) -> c_int {
    assert!(
        !pp.is_null(),
        "called `eigenbridge_top_get_prec_shift` with null pointer"
    );
    eigenbridge_get_prec_shift(*pp, index, shift)
}
