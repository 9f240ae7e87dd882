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

//! # Eigenbridge FFI
//!
//! **C-Compatible Bindings for the Eigensolver Configuration Record.**
//!
//! This crate exposes the tagged accessor protocol of `eigenbridge_params` to
//! C, C++, Fortran and any other host that can call a C ABI. The record is an
//! **Opaque Pointer**: hosts never touch its layout and address fields only
//! through the integer labels published in `include/eigenbridge.h`.
//!
//! ## Core Design Principles
//!
//! 1.  **Opaque Handles**: `EigenParams` lives on the Rust heap. The host holds
//!     an `EigenParams *` in a slot it owns and passes the slot's address to
//!     lifecycle functions.
//! 2.  **Explicit Lifecycle**: Every `eigenbridge_params_initialize` must be
//!     paired with an `eigenbridge_params_free`.
//! 3.  **Status Codes**: Recoverable failures (unknown label, overflow,
//!     mismatched kind, bad length or index) return a nonzero status and
//!     leave the record unchanged.
//! 4.  **Fail-Fast Safety**: Null record pointers are contract violations and
//!     abort with a descriptive panic instead of undefined behavior.

pub mod access;
pub mod params;
pub mod status;
pub mod value;

#[cfg(test)]
mod tests {
    use eigenbridge_params::field::{FieldKind, FieldTag};
    use eigenbridge_params::method::{
        ConvergenceTest, InitBasisMode, PresetMethod, Projection, RestartScheme, Target,
    };

    const HEADER: &str = include_str!("../include/eigenbridge.h");

    fn assert_defined(name: &str, value: i32) {
        let line = format!("#define {} {}", name, value);
        assert!(
            HEADER.lines().any(|l| l.trim() == line),
            "header is missing `{}`",
            line
        );
    }

    fn constant_name(prefix: &str, text: &str) -> String {
        format!(
            "EIGENBRIDGE_{}_{}",
            prefix,
            text.replace(' ', "_").to_ascii_uppercase()
        )
    }

    #[test]
    fn test_header_defines_every_field() {
        for tag in FieldTag::ALL {
            assert_defined(&tag.c_name(), tag.as_raw());
        }
        let defined = HEADER
            .lines()
            .filter(|l| l.starts_with("#define EIGENBRIDGE_FIELD_"))
            .count();
        assert_eq!(defined, FieldTag::ALL.len());
    }

    #[test]
    fn test_header_defines_every_enumerant() {
        for v in Target::ALL {
            assert_defined(&constant_name("TARGET", v.as_str()), v.as_raw());
        }
        for v in InitBasisMode::ALL {
            assert_defined(&constant_name("INIT_BASIS", v.as_str()), v.as_raw());
        }
        for v in Projection::ALL {
            assert_defined(&constant_name("PROJECTION", v.as_str()), v.as_raw());
        }
        for v in RestartScheme::ALL {
            assert_defined(&constant_name("RESTART", v.as_str()), v.as_raw());
        }
        for v in ConvergenceTest::ALL {
            assert_defined(&constant_name("CONV_TEST", v.as_str()), v.as_raw());
        }
        for v in PresetMethod::ALL {
            assert_defined(&constant_name("METHOD", v.as_str()), v.as_raw());
        }
    }

    #[test]
    fn test_header_defines_kinds_and_status_codes() {
        let kinds = [
            FieldKind::Int,
            FieldKind::Real,
            FieldKind::Seed,
            FieldKind::RealArray,
            FieldKind::MatrixOperator,
            FieldKind::GlobalSum,
            FieldKind::ConvergenceTestFn,
            FieldKind::Handle,
            FieldKind::File,
            FieldKind::Target,
            FieldKind::InitBasisMode,
            FieldKind::Projection,
            FieldKind::RestartScheme,
            FieldKind::ConvergenceTest,
        ];
        for kind in kinds {
            assert_defined(&constant_name("KIND", kind.as_str()), kind as i32);
        }

        assert_defined("EIGENBRIDGE_SUCCESS", crate::status::EIGENBRIDGE_SUCCESS);
        assert_defined(
            "EIGENBRIDGE_ERR_UNKNOWN_FIELD",
            crate::status::EIGENBRIDGE_ERR_UNKNOWN_FIELD,
        );
        assert_defined(
            "EIGENBRIDGE_ERR_UNKNOWN_ENUMERANT",
            crate::status::EIGENBRIDGE_ERR_UNKNOWN_ENUMERANT,
        );
    }
}
