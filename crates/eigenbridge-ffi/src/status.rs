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

//! Status codes returned by every fallible `eigenbridge_*` function.
//!
//! `0` is success. The nonzero codes equal
//! [`ParamsError::status_code`](eigenbridge_params::error::ParamsError::status_code).

use eigenbridge_params::error::Result;
use libc::c_int;

pub const EIGENBRIDGE_SUCCESS: c_int = 0;
pub const EIGENBRIDGE_ERR_UNKNOWN_FIELD: c_int = 1;
pub const EIGENBRIDGE_ERR_RANGE_OVERFLOW: c_int = 2;
pub const EIGENBRIDGE_ERR_TYPE_MISMATCH: c_int = 3;
pub const EIGENBRIDGE_ERR_ARRAY_LENGTH: c_int = 4;
pub const EIGENBRIDGE_ERR_SHIFT_INDEX: c_int = 5;
pub const EIGENBRIDGE_ERR_UNKNOWN_ENUMERANT: c_int = 6;

/// Collapses a result into the status code reported across the boundary.
#[inline]
pub fn status_of<T>(result: Result<T>) -> c_int {
    match result {
        Ok(_) => EIGENBRIDGE_SUCCESS,
        Err(e) => e.status_code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eigenbridge_params::error::ParamsError;
    use eigenbridge_params::field::{FieldKind, FieldTag};

    #[test]
    fn test_constants_match_error_codes() {
        let cases = [
            (
                ParamsError::UnknownField { label: -3 },
                EIGENBRIDGE_ERR_UNKNOWN_FIELD,
            ),
            (
                ParamsError::RangeOverflow {
                    field: FieldTag::MaxBasisSize,
                    value: i64::MIN,
                },
                EIGENBRIDGE_ERR_RANGE_OVERFLOW,
            ),
            (
                ParamsError::TypeMismatch {
                    field: FieldTag::Iseed,
                    expected: FieldKind::Seed,
                    got: FieldKind::Int,
                },
                EIGENBRIDGE_ERR_TYPE_MISMATCH,
            ),
            (
                ParamsError::ArrayLength {
                    field: FieldTag::TargetShifts,
                    expected: 2,
                    got: 0,
                },
                EIGENBRIDGE_ERR_ARRAY_LENGTH,
            ),
            (
                ParamsError::ShiftIndexOutOfRange { index: 0, len: 0 },
                EIGENBRIDGE_ERR_SHIFT_INDEX,
            ),
            (
                ParamsError::UnknownEnumerant {
                    kind: "PresetMethod",
                    value: 77,
                },
                EIGENBRIDGE_ERR_UNKNOWN_ENUMERANT,
            ),
        ];

        for (error, code) in cases {
            assert_eq!(status_of::<()>(Err(error)), code);
        }
        assert_eq!(status_of(Ok(5)), EIGENBRIDGE_SUCCESS);
    }
}
