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

//! # Field Tags
//!
//! One stable integer per field of [`EigenParams`](crate::params::EigenParams),
//! nested sub-record fields flattened into a single namespace. The dotted
//! path of a tag mirrors the Rust field path, so
//! `correction_params.projectors.left_x` is
//! `FieldTag::CorrectionParamsProjectorsLeftX`, published to C as
//! `EIGENBRIDGE_FIELD_CORRECTION_PARAMS_PROJECTORS_LEFT_X`.
//!
//! The numbers are part of the ABI: never renumber an existing tag, only
//! append new ones.

use crate::error::ParamsError;

/// The kind of value a field stores, and therefore the [`FieldValue`]
/// variant it accepts.
///
/// [`FieldValue`]: crate::value::FieldValue
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Int = 0,
    Real = 1,
    Seed = 2,
    RealArray = 3,
    MatrixOperator = 4,
    GlobalSum = 5,
    ConvergenceTestFn = 6,
    Handle = 7,
    File = 8,
    Target = 9,
    InitBasisMode = 10,
    Projection = 11,
    RestartScheme = 12,
    ConvergenceTest = 13,
}

impl FieldKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Real => "real",
            Self::Seed => "seed",
            Self::RealArray => "real array",
            Self::MatrixOperator => "matrix operator",
            Self::GlobalSum => "global sum",
            Self::ConvergenceTestFn => "convergence test function",
            Self::Handle => "handle",
            Self::File => "file",
            Self::Target => "target",
            Self::InitBasisMode => "init basis mode",
            Self::Projection => "projection",
            Self::RestartScheme => "restart scheme",
            Self::ConvergenceTest => "convergence test",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! field_tags {
    ($($variant:ident = $value:literal => $path:literal, $kind:ident;)+) => {
        /// Identifies one field of the configuration record.
        #[repr(i32)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum FieldTag {
            $($variant = $value,)+
        }

        impl FieldTag {
            /// Every tag, in ascending numeric order.
            pub const ALL: &'static [FieldTag] = &[$(FieldTag::$variant,)+];

            /// Returns the dotted field path, e.g. `restarting_params.scheme`.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $path,)+
                }
            }

            /// Returns the kind of value stored by this field.
            #[inline]
            pub fn kind(&self) -> FieldKind {
                match self {
                    $(Self::$variant => FieldKind::$kind,)+
                }
            }
        }

        impl TryFrom<i32> for FieldTag {
            type Error = ParamsError;

            fn try_from(label: i32) -> Result<Self, Self::Error> {
                match label {
                    $($value => Ok(Self::$variant),)+
                    _ => Err(ParamsError::UnknownField { label }),
                }
            }
        }
    };
}

field_tags! {
    N = 1 => "n", Int;
    MatrixMatvec = 2 => "matrix_matvec", MatrixOperator;
    ApplyPreconditioner = 3 => "apply_preconditioner", MatrixOperator;
    NumProcs = 4 => "num_procs", Int;
    ProcId = 5 => "proc_id", Int;
    CommInfo = 6 => "comm_info", Handle;
    NLocal = 7 => "n_local", Int;
    GlobalSumReal = 8 => "global_sum_real", GlobalSum;
    NumEvals = 9 => "num_evals", Int;
    Target = 10 => "target", Target;
    NumTargetShifts = 11 => "num_target_shifts", Int;
    TargetShifts = 12 => "target_shifts", RealArray;
    Locking = 13 => "locking", Int;
    InitSize = 14 => "init_size", Int;
    NumOrthoConst = 15 => "num_ortho_const", Int;
    MaxBasisSize = 16 => "max_basis_size", Int;
    MinRestartSize = 17 => "min_restart_size", Int;
    MaxBlockSize = 18 => "max_block_size", Int;
    MaxMatvecs = 19 => "max_matvecs", Int;
    MaxOuterIterations = 20 => "max_outer_iterations", Int;
    IntWorkSize = 21 => "int_work_size", Int;
    RealWorkSize = 22 => "real_work_size", Int;
    Iseed = 23 => "iseed", Seed;
    IntWork = 24 => "int_work", Handle;
    RealWork = 25 => "real_work", Handle;
    ANorm = 26 => "a_norm", Real;
    Eps = 27 => "eps", Real;
    PrintLevel = 28 => "print_level", Int;
    OutputFile = 29 => "output_file", File;
    Matrix = 30 => "matrix", Handle;
    MassMatrixMatvec = 31 => "mass_matrix_matvec", MatrixOperator;
    Preconditioner = 32 => "preconditioner", Handle;
    InitBasisMode = 33 => "init_basis_mode", InitBasisMode;
    ProjectionParamsProjection = 34 => "projection_params.projection", Projection;
    RestartingParamsScheme = 35 => "restarting_params.scheme", RestartScheme;
    RestartingParamsMaxPrevRetain = 36 => "restarting_params.max_prev_retain", Int;
    CorrectionParamsPrecondition = 37 => "correction_params.precondition", Int;
    CorrectionParamsRobustShifts = 38 => "correction_params.robust_shifts", Int;
    CorrectionParamsMaxInnerIterations = 39 => "correction_params.max_inner_iterations", Int;
    CorrectionParamsProjectorsLeftQ = 40 => "correction_params.projectors.left_q", Int;
    CorrectionParamsProjectorsLeftX = 41 => "correction_params.projectors.left_x", Int;
    CorrectionParamsProjectorsRightQ = 42 => "correction_params.projectors.right_q", Int;
    CorrectionParamsProjectorsRightX = 43 => "correction_params.projectors.right_x", Int;
    CorrectionParamsProjectorsSkewQ = 44 => "correction_params.projectors.skew_q", Int;
    CorrectionParamsProjectorsSkewX = 45 => "correction_params.projectors.skew_x", Int;
    CorrectionParamsConvTest = 46 => "correction_params.conv_test", ConvergenceTest;
    CorrectionParamsRelTolBase = 47 => "correction_params.rel_tol_base", Real;
    StatsNumOuterIterations = 48 => "stats.num_outer_iterations", Int;
    StatsNumRestarts = 49 => "stats.num_restarts", Int;
    StatsNumMatvecs = 50 => "stats.num_matvecs", Int;
    StatsNumPreconds = 51 => "stats.num_preconds", Int;
    StatsElapsedTime = 52 => "stats.elapsed_time", Real;
    StatsEstimateMinEval = 53 => "stats.estimate_min_eval", Real;
    StatsEstimateMaxEval = 54 => "stats.estimate_max_eval", Real;
    StatsEstimateLargestSval = 55 => "stats.estimate_largest_sval", Real;
    StatsMaxConvTol = 56 => "stats.max_conv_tol", Real;
    DynamicMethodSwitch = 57 => "dynamic_method_switch", Int;
    ConvTestFun = 58 => "conv_test_fun", ConvergenceTestFn;
    Ldevecs = 59 => "ldevecs", Int;
    LdOps = 60 => "ld_ops", Int;
}

impl FieldTag {
    /// Returns the integer published for this tag.
    #[inline]
    pub const fn as_raw(self) -> i32 {
        self as i32
    }

    /// Returns the name of the C preprocessor constant for this tag.
    pub fn c_name(&self) -> String {
        format!(
            "EIGENBRIDGE_FIELD_{}",
            self.as_str().replace('.', "_").to_ascii_uppercase()
        )
    }
}

impl std::fmt::Display for FieldTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
