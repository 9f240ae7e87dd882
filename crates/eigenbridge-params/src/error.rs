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

use crate::field::{FieldKind, FieldTag};
use thiserror::Error;

/// Result type alias using the accessor's error.
pub type Result<T> = std::result::Result<T, ParamsError>;

/// Errors reported by the tagged accessor protocol.
///
/// Every variant maps to a stable, nonzero status code (see
/// [`ParamsError::status_code`]) so foreign callers can branch on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    /// The integer label does not name any field.
    #[error("unknown field label {label}")]
    UnknownField {
        /// The rejected label.
        label: i32,
    },

    /// The supplied integer does not fit the destination field's storage.
    #[error("value {value} does not fit into field `{field}`")]
    RangeOverflow {
        /// The destination field.
        field: FieldTag,
        /// The rejected value.
        value: i64,
    },

    /// The value slot carries a different kind than the field stores.
    #[error("field `{field}` expects a {expected} value but got {got}")]
    TypeMismatch {
        /// The addressed field.
        field: FieldTag,
        /// The kind stored by the field.
        expected: FieldKind,
        /// The kind carried by the slot.
        got: FieldKind,
    },

    /// An array field and its companion length field disagree.
    #[error("field `{field}` needs {expected} elements but {got} are available")]
    ArrayLength {
        /// The array field.
        field: FieldTag,
        /// Element count demanded by the length field.
        expected: usize,
        /// Element count actually available.
        got: usize,
    },

    /// A 1-based shift index outside the stored shifts.
    #[error("preconditioner shift index {index} is out of bounds: the len is {len}")]
    ShiftIndexOutOfRange {
        /// The rejected 1-based index.
        index: i64,
        /// Number of stored shifts.
        len: usize,
    },

    /// An integer that does not name a variant of an enumerated parameter.
    #[error("unknown {kind} enumerant {value}")]
    UnknownEnumerant {
        /// Name of the enumeration.
        kind: &'static str,
        /// The rejected integer.
        value: i32,
    },
}

impl ParamsError {
    /// Returns the status code reported across the C boundary.
    #[inline]
    pub const fn status_code(&self) -> i32 {
        match self {
            Self::UnknownField { .. } => 1,
            Self::RangeOverflow { .. } => 2,
            Self::TypeMismatch { .. } => 3,
            Self::ArrayLength { .. } => 4,
            Self::ShiftIndexOutOfRange { .. } => 5,
            Self::UnknownEnumerant { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_are_distinct_and_nonzero() {
        let errors = [
            ParamsError::UnknownField { label: 999 },
            ParamsError::RangeOverflow {
                field: FieldTag::NumEvals,
                value: i64::MAX,
            },
            ParamsError::TypeMismatch {
                field: FieldTag::Eps,
                expected: FieldKind::Real,
                got: FieldKind::Int,
            },
            ParamsError::ArrayLength {
                field: FieldTag::TargetShifts,
                expected: 3,
                got: 1,
            },
            ParamsError::ShiftIndexOutOfRange { index: 0, len: 2 },
            ParamsError::UnknownEnumerant {
                kind: "Target",
                value: 42,
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.status_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_names_the_field() {
        let err = ParamsError::RangeOverflow {
            field: FieldTag::CorrectionParamsProjectorsLeftX,
            value: 1 << 40,
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("correction_params.projectors.left_x"));
        assert!(rendered.contains(&(1_i64 << 40).to_string()));
    }

    #[test]
    fn test_display_type_mismatch_names_both_kinds() {
        let err = ParamsError::TypeMismatch {
            field: FieldTag::Target,
            expected: FieldKind::Target,
            got: FieldKind::Real,
        };
        let rendered = format!("{}", err);
        assert_eq!(
            rendered,
            "field `target` expects a target value but got real"
        );
    }
}
