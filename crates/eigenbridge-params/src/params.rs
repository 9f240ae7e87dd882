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

//! # The Configuration Record
//!
//! `EigenParams` gathers everything an eigensolver run needs from its caller:
//! problem dimensions, callbacks, opaque resources, tuning knobs grouped in
//! nested sub-records, and the statistics the solver writes back.
//!
//! Fields are public so that the solver engine can read them directly. Foreign
//! callers, which cannot see this layout, go through the tagged accessors in
//! [`crate::access`] instead.
//!
//! The record stores raw pointers (callbacks, handles, `FILE*`) and is
//! therefore neither `Send` nor `Sync`; callers that share it must serialize
//! access themselves.

use crate::callback::{ConvergenceTestFn, GlobalSumFn, MatrixOperatorFn, OpaqueHandle};
use crate::error::{ParamsError, Result};
use crate::index::ShiftIndex;
use crate::method::{ConvergenceTest, InitBasisMode, Projection, RestartScheme, Target};

/// Projection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionParams {
    pub projection: Projection,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            projection: Projection::RayleighRitz,
        }
    }
}

/// Restarting settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestartingParams {
    pub scheme: RestartScheme,
    /// Number of previous-iteration vectors kept across a restart.
    pub max_prev_retain: i32,
}

impl Default for RestartingParams {
    fn default() -> Self {
        Self {
            scheme: RestartScheme::Thick,
            max_prev_retain: 1,
        }
    }
}

/// Projector switches of the correction equation (`0` off, `1` on).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Projectors {
    pub left_q: i32,
    pub left_x: i32,
    pub right_q: i32,
    pub right_x: i32,
    pub skew_q: i32,
    pub skew_x: i32,
}

/// Correction equation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionParams {
    pub precondition: i32,
    pub robust_shifts: i32,
    /// `-1` lets the inner solver decide, `0` disables inner iterations.
    pub max_inner_iterations: i32,
    pub projectors: Projectors,
    pub conv_test: ConvergenceTest,
    pub rel_tol_base: f64,
}

impl Default for CorrectionParams {
    fn default() -> Self {
        Self {
            precondition: 0,
            robust_shifts: 0,
            max_inner_iterations: 0,
            projectors: Projectors::default(),
            conv_test: ConvergenceTest::AdaptiveETilde,
            rel_tol_base: 0.0,
        }
    }
}

/// Statistics written by the solver during and after a run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SolverStats {
    pub num_outer_iterations: i64,
    pub num_restarts: i64,
    pub num_matvecs: i64,
    pub num_preconds: i64,
    /// Wall-clock time of the run in seconds.
    pub elapsed_time: f64,
    pub estimate_min_eval: f64,
    pub estimate_max_eval: f64,
    pub estimate_largest_sval: f64,
    pub max_conv_tol: f64,
}

/// The eigensolver configuration record.
#[derive(Debug, Clone)]
pub struct EigenParams {
    // Problem
    pub n: i64,
    pub matrix_matvec: Option<MatrixOperatorFn>,
    pub mass_matrix_matvec: Option<MatrixOperatorFn>,
    pub apply_preconditioner: Option<MatrixOperatorFn>,
    pub matrix: OpaqueHandle,
    pub preconditioner: OpaqueHandle,

    // Parallel context
    pub num_procs: i32,
    pub proc_id: i32,
    pub comm_info: OpaqueHandle,
    pub n_local: i64,
    pub global_sum_real: Option<GlobalSumFn>,

    // Spectrum
    pub num_evals: i32,
    pub target: Target,
    pub num_target_shifts: i32,
    pub target_shifts: Vec<f64>,
    pub a_norm: f64,
    pub eps: f64,
    pub conv_test_fun: Option<ConvergenceTestFn>,

    // Sizes and limits
    pub locking: i32,
    pub init_size: i32,
    pub num_ortho_const: i32,
    pub dynamic_method_switch: i32,
    pub max_basis_size: i32,
    pub min_restart_size: i32,
    pub max_block_size: i32,
    pub max_matvecs: i64,
    pub max_outer_iterations: i64,
    pub ldevecs: i64,
    pub ld_ops: i64,

    // Workspace
    pub int_work_size: i32,
    pub real_work_size: usize,
    pub int_work: OpaqueHandle,
    pub real_work: OpaqueHandle,
    pub iseed: [i64; 4],

    // Output
    pub print_level: i32,
    /// Destination of the parameter report; null means standard output.
    pub output_file: *mut libc::FILE,

    pub init_basis_mode: InitBasisMode,
    pub projection_params: ProjectionParams,
    pub restarting_params: RestartingParams,
    pub correction_params: CorrectionParams,
    pub stats: SolverStats,

    shifts_for_preconditioner: Vec<f64>,
}

impl Default for EigenParams {
    fn default() -> Self {
        Self::new()
    }
}

impl EigenParams {
    /// Creates a record holding the solver's initial defaults.
    pub fn new() -> Self {
        Self {
            n: 0,
            matrix_matvec: None,
            mass_matrix_matvec: None,
            apply_preconditioner: None,
            matrix: OpaqueHandle::NULL,
            preconditioner: OpaqueHandle::NULL,

            num_procs: 1,
            proc_id: 0,
            comm_info: OpaqueHandle::NULL,
            n_local: 0,
            global_sum_real: None,

            num_evals: 1,
            target: Target::Smallest,
            num_target_shifts: 0,
            target_shifts: Vec::new(),
            a_norm: 0.0,
            eps: 1e-12,
            conv_test_fun: None,

            locking: 0,
            init_size: 0,
            num_ortho_const: 0,
            dynamic_method_switch: -1,
            max_basis_size: 0,
            min_restart_size: 0,
            max_block_size: 1,
            max_matvecs: i64::MAX,
            max_outer_iterations: i64::MAX,
            ldevecs: 0,
            ld_ops: 0,

            int_work_size: 0,
            real_work_size: 0,
            int_work: OpaqueHandle::NULL,
            real_work: OpaqueHandle::NULL,
            iseed: [-1; 4],

            print_level: 1,
            output_file: std::ptr::null_mut(),

            init_basis_mode: InitBasisMode::Krylov,
            projection_params: ProjectionParams::default(),
            restarting_params: RestartingParams::default(),
            correction_params: CorrectionParams::default(),
            stats: SolverStats::default(),

            shifts_for_preconditioner: Vec::new(),
        }
    }

    /// Returns `num_target_shifts` as an element count.
    ///
    /// A negative count (only reachable by writing the public field directly)
    /// is treated as zero.
    #[inline]
    pub fn target_shift_count(&self) -> usize {
        usize::try_from(self.num_target_shifts).unwrap_or(0)
    }

    /// Replaces the shifts the solver currently suggests for preconditioning,
    /// one per eigenpair being worked on.
    #[inline]
    pub fn set_preconditioner_shifts<S>(&mut self, shifts: S)
    where
        S: Into<Vec<f64>>,
    {
        self.shifts_for_preconditioner = shifts.into();
    }

    /// Returns all current preconditioner shifts.
    #[inline]
    pub fn preconditioner_shifts(&self) -> &[f64] {
        &self.shifts_for_preconditioner
    }

    /// Returns the preconditioner shift for the eigenpair at the 1-based
    /// `position`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::ShiftIndexOutOfRange`] if `position` is below 1
    /// or past the last stored shift.
    pub fn preconditioner_shift(&self, position: i64) -> Result<f64> {
        let len = self.shifts_for_preconditioner.len();
        ShiftIndex::from_one_based(position)
            .and_then(|index| self.shifts_for_preconditioner.get(index.get()).copied())
            .ok_or(ParamsError::ShiftIndexOutOfRange {
                index: position,
                len,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = EigenParams::new();
        assert_eq!(params.n, 0);
        assert_eq!(params.num_procs, 1);
        assert_eq!(params.num_evals, 1);
        assert_eq!(params.target, Target::Smallest);
        assert_eq!(params.max_block_size, 1);
        assert_eq!(params.dynamic_method_switch, -1);
        assert_eq!(params.max_matvecs, i64::MAX);
        assert_eq!(params.iseed, [-1; 4]);
        assert_eq!(params.eps, 1e-12);
        assert!(params.output_file.is_null());
        assert!(params.matrix_matvec.is_none());
        assert!(params.matrix.is_null());
        assert_eq!(params.restarting_params.max_prev_retain, 1);
        assert_eq!(
            params.correction_params.conv_test,
            ConvergenceTest::AdaptiveETilde
        );
        assert_eq!(params.stats, SolverStats::default());
        assert!(params.preconditioner_shifts().is_empty());
    }

    #[test]
    fn test_preconditioner_shift_is_one_based() {
        let mut params = EigenParams::new();
        params.set_preconditioner_shifts(vec![0.5, 1.5, 2.5]);

        assert_eq!(params.preconditioner_shift(1), Ok(0.5));
        assert_eq!(params.preconditioner_shift(3), Ok(2.5));
    }

    #[test]
    fn test_preconditioner_shift_out_of_range_fails() {
        let mut params = EigenParams::new();
        params.set_preconditioner_shifts([4.0, 8.0]);

        assert_eq!(
            params.preconditioner_shift(0),
            Err(ParamsError::ShiftIndexOutOfRange { index: 0, len: 2 })
        );
        assert_eq!(
            params.preconditioner_shift(3),
            Err(ParamsError::ShiftIndexOutOfRange { index: 3, len: 2 })
        );
        assert_eq!(
            params.preconditioner_shift(-7),
            Err(ParamsError::ShiftIndexOutOfRange { index: -7, len: 2 })
        );
    }

    #[test]
    fn test_preconditioner_shift_without_shifts_fails() {
        let params = EigenParams::new();
        assert_eq!(
            params.preconditioner_shift(1),
            Err(ParamsError::ShiftIndexOutOfRange { index: 1, len: 0 })
        );
    }

    #[test]
    fn test_negative_target_shift_count_reads_as_zero() {
        let mut params = EigenParams::new();
        params.num_target_shifts = -3;
        assert_eq!(params.target_shift_count(), 0);
        params.num_target_shifts = 5;
        assert_eq!(params.target_shift_count(), 5);
    }
}
