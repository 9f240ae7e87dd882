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

//! # Generic Value Slot
//!
//! `FieldValue` carries the value of any one field. Its variant must match the
//! [`FieldKind`] of the addressed tag; the accessors report a mismatch as
//! [`ParamsError::TypeMismatch`](crate::error::ParamsError::TypeMismatch)
//! instead of reinterpreting the slot.

use crate::callback::{ConvergenceTestFn, GlobalSumFn, MatrixOperatorFn, OpaqueHandle};
use crate::field::FieldKind;
use crate::method::{ConvergenceTest, InitBasisMode, Projection, RestartScheme, Target};

/// A value of one field of the configuration record.
#[derive(Debug, Clone)]
pub enum FieldValue {
    /// Any integer field. Narrow fields are range checked on write.
    Int(i64),
    Real(f64),
    /// The 4-element random seed.
    Seed([i64; 4]),
    /// The target shifts; its length is governed by `num_target_shifts`.
    RealArray(Vec<f64>),
    MatrixOperator(Option<MatrixOperatorFn>),
    GlobalSum(Option<GlobalSumFn>),
    ConvergenceTestFn(Option<ConvergenceTestFn>),
    Handle(OpaqueHandle),
    File(*mut libc::FILE),
    Target(Target),
    InitBasisMode(InitBasisMode),
    Projection(Projection),
    RestartScheme(RestartScheme),
    ConvergenceTest(ConvergenceTest),
}

impl FieldValue {
    /// Returns the kind of the active variant.
    #[inline]
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Int(_) => FieldKind::Int,
            Self::Real(_) => FieldKind::Real,
            Self::Seed(_) => FieldKind::Seed,
            Self::RealArray(_) => FieldKind::RealArray,
            Self::MatrixOperator(_) => FieldKind::MatrixOperator,
            Self::GlobalSum(_) => FieldKind::GlobalSum,
            Self::ConvergenceTestFn(_) => FieldKind::ConvergenceTestFn,
            Self::Handle(_) => FieldKind::Handle,
            Self::File(_) => FieldKind::File,
            Self::Target(_) => FieldKind::Target,
            Self::InitBasisMode(_) => FieldKind::InitBasisMode,
            Self::Projection(_) => FieldKind::Projection,
            Self::RestartScheme(_) => FieldKind::RestartScheme,
            Self::ConvergenceTest(_) => FieldKind::ConvergenceTest,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_real_array(&self) -> Option<&[f64]> {
        match self {
            Self::RealArray(v) => Some(v),
            _ => None,
        }
    }
}

// Function pointers are compared by address.
fn same_fn<F: Copy>(a: Option<F>, b: Option<F>, addr: fn(F) -> usize) -> bool {
    a.map(addr) == b.map(addr)
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Real(a), Self::Real(b)) => a == b,
            (Self::Seed(a), Self::Seed(b)) => a == b,
            (Self::RealArray(a), Self::RealArray(b)) => a == b,
            (Self::MatrixOperator(a), Self::MatrixOperator(b)) => {
                same_fn(*a, *b, |f: MatrixOperatorFn| f as usize)
            }
            (Self::GlobalSum(a), Self::GlobalSum(b)) => same_fn(*a, *b, |f: GlobalSumFn| f as usize),
            (Self::ConvergenceTestFn(a), Self::ConvergenceTestFn(b)) => {
                same_fn(*a, *b, |f: ConvergenceTestFn| f as usize)
            }
            (Self::Handle(a), Self::Handle(b)) => a == b,
            (Self::File(a), Self::File(b)) => a == b,
            (Self::Target(a), Self::Target(b)) => a == b,
            (Self::InitBasisMode(a), Self::InitBasisMode(b)) => a == b,
            (Self::Projection(a), Self::Projection(b)) => a == b,
            (Self::RestartScheme(a), Self::RestartScheme(b)) => a == b,
            (Self::ConvergenceTest(a), Self::ConvergenceTest(b)) => a == b,
            _ => false,
        }
    }
}

fn presence(set: bool) -> &'static str {
    if set {
        "<set>"
    } else {
        "<null>"
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Real(v) => write!(f, "{:e}", v),
            Self::Seed(seed) => write!(f, "{} {} {} {}", seed[0], seed[1], seed[2], seed[3]),
            Self::RealArray(values) => {
                let rendered: Vec<String> = values.iter().map(|v| format!("{:e}", v)).collect();
                f.write_str(&rendered.join(" "))
            }
            Self::MatrixOperator(op) => f.write_str(presence(op.is_some())),
            Self::GlobalSum(op) => f.write_str(presence(op.is_some())),
            Self::ConvergenceTestFn(op) => f.write_str(presence(op.is_some())),
            Self::Handle(h) => f.write_str(presence(!h.is_null())),
            Self::File(file) => {
                if file.is_null() {
                    f.write_str("<stdout>")
                } else {
                    f.write_str("<set>")
                }
            }
            Self::Target(v) => write!(f, "{}", v),
            Self::InitBasisMode(v) => write!(f, "{}", v),
            Self::Projection(v) => write!(f, "{}", v),
            Self::RestartScheme(v) => write!(f, "{}", v),
            Self::ConvergenceTest(v) => write!(f, "{}", v),
        }
    }
}

macro_rules! impl_from_for_value {
    ($t:ty, $variant:ident) => {
        impl From<$t> for FieldValue {
            #[inline]
            fn from(value: $t) -> Self {
                FieldValue::$variant(value)
            }
        }
    };
}

impl_from_for_value!(i64, Int);
impl_from_for_value!(f64, Real);
impl_from_for_value!([i64; 4], Seed);
impl_from_for_value!(Vec<f64>, RealArray);
impl_from_for_value!(OpaqueHandle, Handle);
impl_from_for_value!(Target, Target);
impl_from_for_value!(InitBasisMode, InitBasisMode);
impl_from_for_value!(Projection, Projection);
impl_from_for_value!(RestartScheme, RestartScheme);
impl_from_for_value!(ConvergenceTest, ConvergenceTest);

impl From<i32> for FieldValue {
    #[inline]
    fn from(value: i32) -> Self {
        FieldValue::Int(value.into())
    }
}

impl From<&[f64]> for FieldValue {
    #[inline]
    fn from(value: &[f64]) -> Self {
        FieldValue::RealArray(value.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libc::{c_int, c_void};

    unsafe extern "C" fn op_a(
        _x: *mut c_void,
        _ldx: *mut i64,
        _y: *mut c_void,
        _ldy: *mut i64,
        _block_size: *mut c_int,
        _params: *mut crate::params::EigenParams,
        _ierr: *mut c_int,
    ) {
    }

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(FieldValue::from(3_i64).kind(), FieldKind::Int);
        assert_eq!(FieldValue::from(3_i32).kind(), FieldKind::Int);
        assert_eq!(FieldValue::from(0.5).kind(), FieldKind::Real);
        assert_eq!(FieldValue::from([1, 2, 3, 4]).kind(), FieldKind::Seed);
        assert_eq!(FieldValue::from(vec![1.0]).kind(), FieldKind::RealArray);
        assert_eq!(FieldValue::from(Target::Largest).kind(), FieldKind::Target);
        assert_eq!(
            FieldValue::File(std::ptr::null_mut()).kind(),
            FieldKind::File
        );
    }

    #[test]
    fn test_equality_of_function_pointers() {
        let a = FieldValue::MatrixOperator(Some(op_a));
        let b = FieldValue::MatrixOperator(Some(op_a));
        let none = FieldValue::MatrixOperator(None);
        assert_eq!(a, b);
        assert_ne!(a, none);
        assert_eq!(none, FieldValue::MatrixOperator(None));
    }

    #[test]
    fn test_different_variants_are_not_equal() {
        assert_ne!(FieldValue::Int(1), FieldValue::Real(1.0));
        assert_ne!(
            FieldValue::Target(Target::Smallest),
            FieldValue::Int(Target::Smallest.as_raw().into())
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::Int(9).as_int(), Some(9));
        assert_eq!(FieldValue::Int(9).as_real(), None);
        assert_eq!(FieldValue::Real(2.0).as_real(), Some(2.0));
        let shifts = FieldValue::from(&[1.0, 2.0][..]);
        assert_eq!(shifts.as_real_array(), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", FieldValue::Int(-4)), "-4");
        assert_eq!(format!("{}", FieldValue::Seed([1, 2, 3, 4])), "1 2 3 4");
        assert_eq!(format!("{}", FieldValue::MatrixOperator(None)), "<null>");
        assert_eq!(format!("{}", FieldValue::MatrixOperator(Some(op_a))), "<set>");
        assert_eq!(format!("{}", FieldValue::Handle(OpaqueHandle::NULL)), "<null>");
        assert_eq!(
            format!("{}", FieldValue::File(std::ptr::null_mut())),
            "<stdout>"
        );
        assert_eq!(
            format!("{}", FieldValue::RestartScheme(RestartScheme::Dtr)),
            "dtr"
        );
    }
}
