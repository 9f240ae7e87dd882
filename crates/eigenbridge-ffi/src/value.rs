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

//! # C Value Slots
//!
//! Two `#[repr(C)]` unions carry field values across the boundary:
//!
//! * [`FfiFieldValue`] is passed **by value** into `eigenbridge_set_member`.
//!   Scalars are stored inline; the seed and the target shifts are passed as
//!   pointers to caller-owned arrays.
//! * [`FfiFieldSlot`] is written **in place** by `eigenbridge_get_member`.
//!   Scalars occupy the slot itself. Arrays are written contiguously starting
//!   at the slot address, so the caller must supply storage for 4 integers
//!   (seed) or `num_target_shifts` reals (target shifts).
//!
//! Which member is read or written is decided by the
//! [`FieldKind`](eigenbridge_params::field::FieldKind) of the tag.

use eigenbridge_params::callback::{
    ConvergenceTestFn, GlobalSumFn, MatrixOperatorFn, OpaqueHandle,
};
use eigenbridge_params::error::Result;
use eigenbridge_params::field::{FieldKind, FieldTag};
use eigenbridge_params::method::{
    ConvergenceTest, InitBasisMode, Projection, RestartScheme, Target,
};
use eigenbridge_params::params::EigenParams;
use eigenbridge_params::value::FieldValue;
use libc::{c_int, c_void, FILE};

/// Input value of `eigenbridge_set_member`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union FfiFieldValue {
    pub int_v: i64,
    pub double_v: f64,
    /// Points to the 4 seed integers.
    pub int_array: *const i64,
    /// Points to at least `num_target_shifts` reals.
    pub double_array: *const f64,
    pub mat_fn: Option<MatrixOperatorFn>,
    pub global_sum_fn: Option<GlobalSumFn>,
    pub conv_test_fn: Option<ConvergenceTestFn>,
    pub ptr_v: *mut c_void,
    pub file_v: *mut FILE,
    pub enum_v: c_int,
}

impl FfiFieldValue {
    #[inline]
    pub fn from_int(value: i64) -> Self {
        Self { int_v: value }
    }

    #[inline]
    pub fn from_real(value: f64) -> Self {
        Self { double_v: value }
    }

    #[inline]
    pub fn from_int_array(values: *const i64) -> Self {
        Self { int_array: values }
    }

    #[inline]
    pub fn from_real_array(values: *const f64) -> Self {
        Self {
            double_array: values,
        }
    }

    #[inline]
    pub fn from_matrix_operator(op: Option<MatrixOperatorFn>) -> Self {
        Self { mat_fn: op }
    }

    #[inline]
    pub fn from_global_sum(op: Option<GlobalSumFn>) -> Self {
        Self { global_sum_fn: op }
    }

    #[inline]
    pub fn from_convergence_test(op: Option<ConvergenceTestFn>) -> Self {
        Self { conv_test_fn: op }
    }

    #[inline]
    pub fn from_ptr(ptr: *mut c_void) -> Self {
        Self { ptr_v: ptr }
    }

    #[inline]
    pub fn from_file(file: *mut FILE) -> Self {
        Self { file_v: file }
    }

    #[inline]
    pub fn from_enum(value: c_int) -> Self {
        Self { enum_v: value }
    }
}

/// Output slot of `eigenbridge_get_member`.
#[repr(C)]
#[derive(Clone, Copy)]
pub union FfiFieldSlot {
    pub int_v: i64,
    pub double_v: f64,
    pub mat_fn: Option<MatrixOperatorFn>,
    pub global_sum_fn: Option<GlobalSumFn>,
    pub conv_test_fn: Option<ConvergenceTestFn>,
    pub ptr_v: *mut c_void,
    pub file_v: *mut FILE,
    pub enum_v: c_int,
}

impl FfiFieldSlot {
    /// A zeroed slot.
    #[inline]
    pub fn zeroed() -> Self {
        Self { int_v: 0 }
    }
}

/// Reads the member of `value` selected by the kind of `tag`.
///
/// The length of the target shifts is taken from `params.num_target_shifts`
/// at call time.
///
/// # Safety
///
/// The member selected by the tag's kind must be the one the caller
/// initialized. Array pointers must reference enough elements.
///
/// # Panics
///
/// Panics if an array pointer is null while elements must be read from it.
pub unsafe fn decode(
    tag: FieldTag,
    value: &FfiFieldValue,
    params: &EigenParams,
) -> Result<FieldValue> {
    let decoded = match tag.kind() {
        FieldKind::Int => FieldValue::Int(value.int_v),
        FieldKind::Real => FieldValue::Real(value.double_v),
        FieldKind::Seed => {
            assert!(
                !value.int_array.is_null(),
                "called `decode` with null seed array for field `{}`",
                tag
            );
            let mut seed = [0_i64; 4];
            seed.copy_from_slice(std::slice::from_raw_parts(value.int_array, 4));
            FieldValue::Seed(seed)
        }
        FieldKind::RealArray => {
            let count = params.target_shift_count();
            if count == 0 {
                FieldValue::RealArray(Vec::new())
            } else {
                assert!(
                    !value.double_array.is_null(),
                    "called `decode` with null array for field `{}` expecting {} elements",
                    tag,
                    count
                );
                FieldValue::RealArray(
                    std::slice::from_raw_parts(value.double_array, count).to_vec(),
                )
            }
        }
        FieldKind::MatrixOperator => FieldValue::MatrixOperator(value.mat_fn),
        FieldKind::GlobalSum => FieldValue::GlobalSum(value.global_sum_fn),
        FieldKind::ConvergenceTestFn => FieldValue::ConvergenceTestFn(value.conv_test_fn),
        FieldKind::Handle => FieldValue::Handle(OpaqueHandle::new(value.ptr_v)),
        FieldKind::File => FieldValue::File(value.file_v),
        FieldKind::Target => FieldValue::Target(Target::try_from(value.enum_v)?),
        FieldKind::InitBasisMode => {
            FieldValue::InitBasisMode(InitBasisMode::try_from(value.enum_v)?)
        }
        FieldKind::Projection => FieldValue::Projection(Projection::try_from(value.enum_v)?),
        FieldKind::RestartScheme => {
            FieldValue::RestartScheme(RestartScheme::try_from(value.enum_v)?)
        }
        FieldKind::ConvergenceTest => {
            FieldValue::ConvergenceTest(ConvergenceTest::try_from(value.enum_v)?)
        }
    };
    Ok(decoded)
}

/// Writes `value` into the caller's slot.
///
/// # Safety
///
/// `out` must be valid for writes of the value, including every element of
/// an array value.
pub unsafe fn encode(value: &FieldValue, out: *mut FfiFieldSlot) {
    match value {
        FieldValue::Int(v) => (*out).int_v = *v,
        FieldValue::Real(v) => (*out).double_v = *v,
        FieldValue::Seed(seed) => {
            std::ptr::copy_nonoverlapping(seed.as_ptr(), out.cast::<i64>(), seed.len());
        }
        FieldValue::RealArray(values) => {
            std::ptr::copy_nonoverlapping(values.as_ptr(), out.cast::<f64>(), values.len());
        }
        FieldValue::MatrixOperator(op) => (*out).mat_fn = *op,
        FieldValue::GlobalSum(op) => (*out).global_sum_fn = *op,
        FieldValue::ConvergenceTestFn(op) => (*out).conv_test_fn = *op,
        FieldValue::Handle(handle) => (*out).ptr_v = handle.as_ptr(),
        FieldValue::File(file) => (*out).file_v = *file,
        FieldValue::Target(v) => (*out).enum_v = v.as_raw(),
        FieldValue::InitBasisMode(v) => (*out).enum_v = v.as_raw(),
        FieldValue::Projection(v) => (*out).enum_v = v.as_raw(),
        FieldValue::RestartScheme(v) => (*out).enum_v = v.as_raw(),
        FieldValue::ConvergenceTest(v) => (*out).enum_v = v.as_raw(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eigenbridge_params::error::ParamsError;

    unsafe extern "C" fn sum(
        _send_buf: *mut c_void,
        _recv_buf: *mut c_void,
        _count: *mut c_int,
        _params: *mut EigenParams,
        _ierr: *mut c_int,
    ) {
    }

    unsafe extern "C" fn converged(
        _eval: *mut f64,
        _evec: *mut c_void,
        _r_norm: *mut f64,
        is_conv: *mut c_int,
        _params: *mut EigenParams,
        _ierr: *mut c_int,
    ) {
        *is_conv = 1;
    }

    #[test]
    fn test_decode_callback_members() {
        let params = EigenParams::new();
        unsafe {
            assert_eq!(
                decode(
                    FieldTag::GlobalSumReal,
                    &FfiFieldValue::from_global_sum(Some(sum)),
                    &params
                ),
                Ok(FieldValue::GlobalSum(Some(sum)))
            );
            assert_eq!(
                decode(
                    FieldTag::ConvTestFun,
                    &FfiFieldValue::from_convergence_test(Some(converged)),
                    &params
                ),
                Ok(FieldValue::ConvergenceTestFn(Some(converged)))
            );
            assert_eq!(
                decode(
                    FieldTag::ConvTestFun,
                    &FfiFieldValue::from_convergence_test(None),
                    &params
                ),
                Ok(FieldValue::ConvergenceTestFn(None))
            );
        }
    }

    #[test]
    fn test_slot_is_one_word() {
        assert_eq!(std::mem::size_of::<FfiFieldSlot>(), 8);
        assert_eq!(std::mem::size_of::<FfiFieldValue>(), 8);
    }

    #[test]
    fn test_decode_scalars_by_kind() {
        let params = EigenParams::new();
        unsafe {
            assert_eq!(
                decode(FieldTag::N, &FfiFieldValue::from_int(42), &params),
                Ok(FieldValue::Int(42))
            );
            assert_eq!(
                decode(FieldTag::Eps, &FfiFieldValue::from_real(1e-8), &params),
                Ok(FieldValue::Real(1e-8))
            );
            assert_eq!(
                decode(FieldTag::Target, &FfiFieldValue::from_enum(4), &params),
                Ok(FieldValue::Target(Target::ClosestAbs))
            );
        }
    }

    #[test]
    fn test_decode_rejects_unknown_enumerant() {
        let params = EigenParams::new();
        let result = unsafe {
            decode(
                FieldTag::RestartingParamsScheme,
                &FfiFieldValue::from_enum(9),
                &params,
            )
        };
        assert_eq!(
            result,
            Err(ParamsError::UnknownEnumerant {
                kind: "RestartScheme",
                value: 9
            })
        );
    }

    #[test]
    fn test_decode_reads_count_elements_of_target_shifts() {
        let mut params = EigenParams::new();
        params.num_target_shifts = 2;
        let shifts = [0.5, 1.5, 99.0];
        let decoded = unsafe {
            decode(
                FieldTag::TargetShifts,
                &FfiFieldValue::from_real_array(shifts.as_ptr()),
                &params,
            )
        };
        assert_eq!(decoded, Ok(FieldValue::RealArray(vec![0.5, 1.5])));

        params.num_target_shifts = 0;
        let decoded = unsafe {
            decode(
                FieldTag::TargetShifts,
                &FfiFieldValue::from_real_array(std::ptr::null()),
                &params,
            )
        };
        assert_eq!(decoded, Ok(FieldValue::RealArray(Vec::new())));
    }

    #[test]
    #[should_panic(expected = "null seed array")]
    fn test_decode_null_seed_panics() {
        let params = EigenParams::new();
        unsafe {
            let _ = decode(
                FieldTag::Iseed,
                &FfiFieldValue::from_int_array(std::ptr::null()),
                &params,
            );
        }
    }

    #[test]
    fn test_encode_arrays_contiguously() {
        let mut buffer = [0_i64; 4];
        unsafe {
            encode(
                &FieldValue::Seed([4, 3, 2, 1]),
                buffer.as_mut_ptr().cast::<FfiFieldSlot>(),
            );
        }
        assert_eq!(buffer, [4, 3, 2, 1]);

        let mut reals = [f64::NAN; 3];
        unsafe {
            encode(
                &FieldValue::RealArray(vec![1.0, 2.0]),
                reals.as_mut_ptr().cast::<FfiFieldSlot>(),
            );
        }
        assert_eq!(&reals[..2], &[1.0, 2.0]);
        assert!(reals[2].is_nan());
    }

    #[test]
    fn test_encode_scalars() {
        let mut slot = FfiFieldSlot::zeroed();
        unsafe {
            encode(&FieldValue::Real(2.5), &mut slot);
            assert_eq!(slot.double_v, 2.5);
            encode(&FieldValue::Projection(Projection::Refined), &mut slot);
            assert_eq!(slot.enum_v, 2);
            encode(&FieldValue::Handle(OpaqueHandle::NULL), &mut slot);
            assert!(slot.ptr_v.is_null());
        }
    }
}
