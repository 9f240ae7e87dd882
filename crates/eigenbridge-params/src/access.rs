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

//! # Tagged Accessor Bridge
//!
//! Reads and writes single fields of [`EigenParams`] by [`FieldTag`], moving
//! values through a [`FieldValue`] slot.
//!
//! ## Write rules
//!
//! * The slot's variant must match the tag's [`FieldKind`](crate::field::FieldKind),
//!   otherwise [`ParamsError::TypeMismatch`].
//! * Integers bound for `i32` storage must fit `i32`; `real_work_size` and
//!   `num_target_shifts` must not be negative. Otherwise
//!   [`ParamsError::RangeOverflow`].
//! * `target_shifts` takes exactly `num_target_shifts` elements from the slot,
//!   the count being read at call time. A shorter slot is
//!   [`ParamsError::ArrayLength`].
//!
//! A failed write leaves the record untouched; a successful write changes
//! exactly one field.

use crate::error::{ParamsError, Result};
use crate::field::FieldTag;
use crate::params::EigenParams;
use crate::value::FieldValue;
use eigenbridge_core::num::narrow::CheckedNarrow;

#[inline]
fn narrow(field: FieldTag, value: i64) -> Result<i32> {
    CheckedNarrow::<i32>::checked_narrow(value).ok_or(ParamsError::RangeOverflow { field, value })
}

#[inline]
fn non_negative(field: FieldTag, value: i64) -> Result<i32> {
    if value < 0 {
        return Err(ParamsError::RangeOverflow { field, value });
    }
    narrow(field, value)
}

impl EigenParams {
    /// Writes `value` into the field named by the raw `label`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::UnknownField`] for labels outside the published
    /// enumeration, and any error of [`EigenParams::set_field`].
    #[inline]
    pub fn set_member(&mut self, label: i32, value: FieldValue) -> Result<()> {
        self.set_field(FieldTag::try_from(label)?, value)
    }

    /// Reads the field named by the raw `label`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::UnknownField`] for labels outside the published
    /// enumeration, and any error of [`EigenParams::get_field`].
    #[inline]
    pub fn get_member(&self, label: i32) -> Result<FieldValue> {
        self.get_field(FieldTag::try_from(label)?)
    }

    /// Writes `value` into the field named by `tag`.
    ///
    /// # Errors
    ///
    /// * [`ParamsError::RangeOverflow`] if an integer does not fit the field's
    ///   storage, or is negative for `real_work_size` and `num_target_shifts`.
    /// * [`ParamsError::TypeMismatch`] if the variant of `value` is not the
    ///   field's kind.
    /// * [`ParamsError::ArrayLength`] if `target_shifts` receives fewer than
    ///   `num_target_shifts` elements.
    ///
    /// Unknown raw labels are rejected earlier, with
    /// [`ParamsError::UnknownField`], by [`EigenParams::set_member`].
    pub fn set_field(&mut self, tag: FieldTag, value: FieldValue) -> Result<()> {
        use FieldTag as T;
        use FieldValue as V;

        match (tag, value) {
            (T::N, V::Int(v)) => self.n = v,
            (T::MatrixMatvec, V::MatrixOperator(f)) => self.matrix_matvec = f,
            (T::ApplyPreconditioner, V::MatrixOperator(f)) => self.apply_preconditioner = f,
            (T::NumProcs, V::Int(v)) => self.num_procs = narrow(tag, v)?,
            (T::ProcId, V::Int(v)) => self.proc_id = narrow(tag, v)?,
            (T::CommInfo, V::Handle(h)) => self.comm_info = h,
            (T::NLocal, V::Int(v)) => self.n_local = v,
            (T::GlobalSumReal, V::GlobalSum(f)) => self.global_sum_real = f,
            (T::NumEvals, V::Int(v)) => self.num_evals = narrow(tag, v)?,
            (T::Target, V::Target(t)) => self.target = t,
            (T::NumTargetShifts, V::Int(v)) => self.num_target_shifts = non_negative(tag, v)?,
            (T::TargetShifts, V::RealArray(mut shifts)) => {
                let expected = self.target_shift_count();
                if shifts.len() < expected {
                    return Err(ParamsError::ArrayLength {
                        field: tag,
                        expected,
                        got: shifts.len(),
                    });
                }
                shifts.truncate(expected);
                self.target_shifts = shifts;
            }
            (T::Locking, V::Int(v)) => self.locking = narrow(tag, v)?,
            (T::InitSize, V::Int(v)) => self.init_size = narrow(tag, v)?,
            (T::NumOrthoConst, V::Int(v)) => self.num_ortho_const = narrow(tag, v)?,
            (T::MaxBasisSize, V::Int(v)) => self.max_basis_size = narrow(tag, v)?,
            (T::MinRestartSize, V::Int(v)) => self.min_restart_size = narrow(tag, v)?,
            (T::MaxBlockSize, V::Int(v)) => self.max_block_size = narrow(tag, v)?,
            (T::MaxMatvecs, V::Int(v)) => self.max_matvecs = v,
            (T::MaxOuterIterations, V::Int(v)) => self.max_outer_iterations = v,
            (T::IntWorkSize, V::Int(v)) => self.int_work_size = narrow(tag, v)?,
            (T::RealWorkSize, V::Int(v)) => {
                self.real_work_size = CheckedNarrow::<usize>::checked_narrow(v)
                    .ok_or(ParamsError::RangeOverflow { field: tag, value: v })?;
            }
            (T::Iseed, V::Seed(seed)) => self.iseed = seed,
            (T::IntWork, V::Handle(h)) => self.int_work = h,
            (T::RealWork, V::Handle(h)) => self.real_work = h,
            (T::ANorm, V::Real(v)) => self.a_norm = v,
            (T::Eps, V::Real(v)) => self.eps = v,
            (T::PrintLevel, V::Int(v)) => self.print_level = narrow(tag, v)?,
            (T::OutputFile, V::File(file)) => self.output_file = file,
            (T::Matrix, V::Handle(h)) => self.matrix = h,
            (T::MassMatrixMatvec, V::MatrixOperator(f)) => self.mass_matrix_matvec = f,
            (T::Preconditioner, V::Handle(h)) => self.preconditioner = h,
            (T::InitBasisMode, V::InitBasisMode(m)) => self.init_basis_mode = m,
            (T::ProjectionParamsProjection, V::Projection(p)) => {
                self.projection_params.projection = p
            }
            (T::RestartingParamsScheme, V::RestartScheme(s)) => self.restarting_params.scheme = s,
            (T::RestartingParamsMaxPrevRetain, V::Int(v)) => {
                self.restarting_params.max_prev_retain = narrow(tag, v)?
            }
            (T::CorrectionParamsPrecondition, V::Int(v)) => {
                self.correction_params.precondition = narrow(tag, v)?
            }
            (T::CorrectionParamsRobustShifts, V::Int(v)) => {
                self.correction_params.robust_shifts = narrow(tag, v)?
            }
            (T::CorrectionParamsMaxInnerIterations, V::Int(v)) => {
                self.correction_params.max_inner_iterations = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsLeftQ, V::Int(v)) => {
                self.correction_params.projectors.left_q = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsLeftX, V::Int(v)) => {
                self.correction_params.projectors.left_x = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsRightQ, V::Int(v)) => {
                self.correction_params.projectors.right_q = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsRightX, V::Int(v)) => {
                self.correction_params.projectors.right_x = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsSkewQ, V::Int(v)) => {
                self.correction_params.projectors.skew_q = narrow(tag, v)?
            }
            (T::CorrectionParamsProjectorsSkewX, V::Int(v)) => {
                self.correction_params.projectors.skew_x = narrow(tag, v)?
            }
            (T::CorrectionParamsConvTest, V::ConvergenceTest(c)) => {
                self.correction_params.conv_test = c
            }
            (T::CorrectionParamsRelTolBase, V::Real(v)) => self.correction_params.rel_tol_base = v,
            (T::StatsNumOuterIterations, V::Int(v)) => self.stats.num_outer_iterations = v,
            (T::StatsNumRestarts, V::Int(v)) => self.stats.num_restarts = v,
            (T::StatsNumMatvecs, V::Int(v)) => self.stats.num_matvecs = v,
            (T::StatsNumPreconds, V::Int(v)) => self.stats.num_preconds = v,
            (T::StatsElapsedTime, V::Real(v)) => self.stats.elapsed_time = v,
            (T::StatsEstimateMinEval, V::Real(v)) => self.stats.estimate_min_eval = v,
            (T::StatsEstimateMaxEval, V::Real(v)) => self.stats.estimate_max_eval = v,
            (T::StatsEstimateLargestSval, V::Real(v)) => self.stats.estimate_largest_sval = v,
            (T::StatsMaxConvTol, V::Real(v)) => self.stats.max_conv_tol = v,
            (T::DynamicMethodSwitch, V::Int(v)) => self.dynamic_method_switch = narrow(tag, v)?,
            (T::ConvTestFun, V::ConvergenceTestFn(f)) => self.conv_test_fun = f,
            (T::Ldevecs, V::Int(v)) => self.ldevecs = v,
            (T::LdOps, V::Int(v)) => self.ld_ops = v,
            (tag, value) => {
                return Err(ParamsError::TypeMismatch {
                    field: tag,
                    expected: tag.kind(),
                    got: value.kind(),
                })
            }
        }

        Ok(())
    }

    /// Reads the field named by `tag`.
    ///
    /// # Errors
    ///
    /// `target_shifts` returns exactly `num_target_shifts` elements and fails
    /// with [`ParamsError::ArrayLength`] when fewer are stored.
    pub fn get_field(&self, tag: FieldTag) -> Result<FieldValue> {
        use FieldTag as T;
        use FieldValue as V;

        let c = &self.correction_params;
        let value = match tag {
            T::N => V::Int(self.n),
            T::MatrixMatvec => V::MatrixOperator(self.matrix_matvec),
            T::ApplyPreconditioner => V::MatrixOperator(self.apply_preconditioner),
            T::NumProcs => V::Int(self.num_procs.into()),
            T::ProcId => V::Int(self.proc_id.into()),
            T::CommInfo => V::Handle(self.comm_info),
            T::NLocal => V::Int(self.n_local),
            T::GlobalSumReal => V::GlobalSum(self.global_sum_real),
            T::NumEvals => V::Int(self.num_evals.into()),
            T::Target => V::Target(self.target),
            T::NumTargetShifts => V::Int(self.num_target_shifts.into()),
            T::TargetShifts => {
                let expected = self.target_shift_count();
                let stored = self.target_shifts.get(..expected).ok_or(ParamsError::ArrayLength {
                    field: tag,
                    expected,
                    got: self.target_shifts.len(),
                })?;
                V::RealArray(stored.to_vec())
            }
            T::Locking => V::Int(self.locking.into()),
            T::InitSize => V::Int(self.init_size.into()),
            T::NumOrthoConst => V::Int(self.num_ortho_const.into()),
            T::MaxBasisSize => V::Int(self.max_basis_size.into()),
            T::MinRestartSize => V::Int(self.min_restart_size.into()),
            T::MaxBlockSize => V::Int(self.max_block_size.into()),
            T::MaxMatvecs => V::Int(self.max_matvecs),
            T::MaxOuterIterations => V::Int(self.max_outer_iterations),
            T::IntWorkSize => V::Int(self.int_work_size.into()),
            T::RealWorkSize => V::Int(i64::try_from(self.real_work_size).unwrap_or(i64::MAX)),
            T::Iseed => V::Seed(self.iseed),
            T::IntWork => V::Handle(self.int_work),
            T::RealWork => V::Handle(self.real_work),
            T::ANorm => V::Real(self.a_norm),
            T::Eps => V::Real(self.eps),
            T::PrintLevel => V::Int(self.print_level.into()),
            T::OutputFile => V::File(self.output_file),
            T::Matrix => V::Handle(self.matrix),
            T::MassMatrixMatvec => V::MatrixOperator(self.mass_matrix_matvec),
            T::Preconditioner => V::Handle(self.preconditioner),
            T::InitBasisMode => V::InitBasisMode(self.init_basis_mode),
            T::ProjectionParamsProjection => V::Projection(self.projection_params.projection),
            T::RestartingParamsScheme => V::RestartScheme(self.restarting_params.scheme),
            T::RestartingParamsMaxPrevRetain => {
                V::Int(self.restarting_params.max_prev_retain.into())
            }
            T::CorrectionParamsPrecondition => V::Int(c.precondition.into()),
            T::CorrectionParamsRobustShifts => V::Int(c.robust_shifts.into()),
            T::CorrectionParamsMaxInnerIterations => V::Int(c.max_inner_iterations.into()),
            T::CorrectionParamsProjectorsLeftQ => V::Int(c.projectors.left_q.into()),
            T::CorrectionParamsProjectorsLeftX => V::Int(c.projectors.left_x.into()),
            T::CorrectionParamsProjectorsRightQ => V::Int(c.projectors.right_q.into()),
            T::CorrectionParamsProjectorsRightX => V::Int(c.projectors.right_x.into()),
            T::CorrectionParamsProjectorsSkewQ => V::Int(c.projectors.skew_q.into()),
            T::CorrectionParamsProjectorsSkewX => V::Int(c.projectors.skew_x.into()),
            T::CorrectionParamsConvTest => V::ConvergenceTest(c.conv_test),
            T::CorrectionParamsRelTolBase => V::Real(c.rel_tol_base),
            T::StatsNumOuterIterations => V::Int(self.stats.num_outer_iterations),
            T::StatsNumRestarts => V::Int(self.stats.num_restarts),
            T::StatsNumMatvecs => V::Int(self.stats.num_matvecs),
            T::StatsNumPreconds => V::Int(self.stats.num_preconds),
            T::StatsElapsedTime => V::Real(self.stats.elapsed_time),
            T::StatsEstimateMinEval => V::Real(self.stats.estimate_min_eval),
            T::StatsEstimateMaxEval => V::Real(self.stats.estimate_max_eval),
            T::StatsEstimateLargestSval => V::Real(self.stats.estimate_largest_sval),
            T::StatsMaxConvTol => V::Real(self.stats.max_conv_tol),
            T::DynamicMethodSwitch => V::Int(self.dynamic_method_switch.into()),
            T::ConvTestFun => V::ConvergenceTestFn(self.conv_test_fun),
            T::Ldevecs => V::Int(self.ldevecs),
            T::LdOps => V::Int(self.ld_ops),
        };

        Ok(value)
    }
}
