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

use crate::method::{ConvergenceTest, PresetMethod};
use crate::params::{EigenParams, Projectors};

const fn projectors(
    left_q: i32,
    left_x: i32,
    right_q: i32,
    right_x: i32,
    skew_q: i32,
    skew_x: i32,
) -> Projectors {
    Projectors {
        left_q,
        left_x,
        right_q,
        right_x,
        skew_q,
        skew_x,
    }
}

impl EigenParams {
    /// Configures restarting and correction parameters for `method`, then
    /// fills in basis-size defaults that are still unset (`<= 0`).
    ///
    /// Sizes the caller has already set are kept, except for methods whose
    /// block structure is fixed by the number of eigenvalues (steepest
    /// descent and the LOBPCG variants). Every size is then clamped to the
    /// problem size `n`, and the block and restart sizes are shrunk until
    /// `min_restart_size + max_block_size <= max_basis_size`. A basis of one
    /// vector cannot satisfy that; it gets block and restart size 1.
    pub fn set_method(&mut self, method: PresetMethod) {
        let resolved = match method {
            PresetMethod::DefaultMethod | PresetMethod::DefaultMinTime => PresetMethod::JdqmrETol,
            PresetMethod::DefaultMinMatvecs => PresetMethod::GdOlsenPlusK,
            PresetMethod::Dynamic => {
                self.dynamic_method_switch = 1;
                PresetMethod::JdqmrETol
            }
            other => other,
        };

        self.apply_method(resolved);
        self.apply_basis_defaults();
    }

    // Vectors retained by the +k methods.
    fn plus_k_retain(&self) -> i32 {
        if self.max_block_size <= 1 && self.num_evals > 1 {
            2
        } else {
            self.max_block_size.max(1)
        }
    }

    fn apply_method(&mut self, method: PresetMethod) {
        let retain_k = self.plus_k_retain();
        let num_evals = self.num_evals.max(0);
        let precondition = self.correction_params.precondition;

        let c = &mut self.correction_params;
        let r = &mut self.restarting_params;

        match method {
            PresetMethod::Arnoldi => {
                r.max_prev_retain = 0;
                c.precondition = 0;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 0, 0, 0);
            }
            PresetMethod::Gd => {
                r.max_prev_retain = 0;
                c.robust_shifts = 1;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 0, 0, 0);
            }
            PresetMethod::GdPlusK => {
                r.max_prev_retain = retain_k;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 0, 0, 0);
            }
            PresetMethod::GdOlsenPlusK => {
                r.max_prev_retain = retain_k;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 1, 0, 1);
            }
            PresetMethod::JdOlsenPlusK => {
                r.max_prev_retain = retain_k;
                c.robust_shifts = 1;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 1, 0, 1, 0, 1);
            }
            PresetMethod::Rqi => {
                r.max_prev_retain = 0;
                c.robust_shifts = 1;
                c.max_inner_iterations = -1;
                c.projectors = projectors(1, 1, 1, 1, 1, 1);
                c.conv_test = ConvergenceTest::FullLTolerance;
            }
            PresetMethod::Jdqr => {
                r.max_prev_retain = 1;
                c.robust_shifts = 0;
                c.max_inner_iterations = 10;
                c.projectors = projectors(0, 1, 1, 1, 1, 1);
                c.rel_tol_base = 1.5;
                c.conv_test = ConvergenceTest::FullLTolerance;
            }
            PresetMethod::Jdqmr | PresetMethod::JdqmrETol => {
                r.max_prev_retain = 1;
                c.max_inner_iterations = -1;
                c.projectors = projectors(precondition, 1, 0, 0, 0, 1);
                c.conv_test = if method == PresetMethod::Jdqmr {
                    ConvergenceTest::Adaptive
                } else {
                    ConvergenceTest::AdaptiveETilde
                };
            }
            PresetMethod::SteepestDescent => {
                r.max_prev_retain = 0;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 1, 0, 0);
                self.locking = 1;
                self.max_basis_size = num_evals.saturating_mul(2);
                self.min_restart_size = num_evals;
                self.max_block_size = num_evals;
            }
            PresetMethod::LobpcgOrthoBasis => {
                r.max_prev_retain = num_evals;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 1, 0, 0);
                self.max_basis_size = num_evals.saturating_mul(3);
                self.min_restart_size = num_evals;
                self.max_block_size = num_evals;
            }
            PresetMethod::LobpcgOrthoBasisWindow => {
                let block = self.max_block_size.max(1);
                r.max_prev_retain = block;
                c.robust_shifts = 0;
                c.max_inner_iterations = 0;
                c.projectors = projectors(0, 0, 0, 1, 0, 0);
                self.max_basis_size = block.saturating_mul(3);
                self.min_restart_size = block;
                self.max_block_size = block;
            }
            PresetMethod::DefaultMethod
            | PresetMethod::Dynamic
            | PresetMethod::DefaultMinTime
            | PresetMethod::DefaultMinMatvecs => {
                unreachable!("called `apply_method` with unresolved method `{}`", method)
            }
        }
    }

    // Fills unset sizes and reconciles all three so that a block of new
    // vectors plus the restart vectors fit into the basis. Only a basis of a
    // single vector (`n == 1`) cannot hold both; there all sizes are 1.
    fn apply_basis_defaults(&mut self) {
        let num_evals = self.num_evals.max(0);
        let problem_size = if self.n > 0 {
            i32::try_from(self.n).unwrap_or(i32::MAX)
        } else {
            i32::MAX
        };

        if self.max_block_size <= 0 {
            self.max_block_size = 1;
        }
        let block = self.max_block_size.min(problem_size);

        if self.max_basis_size <= 0 {
            self.max_basis_size = 15.max(block.saturating_add(num_evals).saturating_mul(2));
        }
        let basis = self.max_basis_size.min(problem_size);
        self.max_basis_size = basis;

        if basis == 1 {
            self.max_block_size = 1;
            self.min_restart_size = 1;
        } else {
            let block = block.min(basis - 1);
            let room = basis - block;
            self.max_block_size = block;
            self.min_restart_size = if self.min_restart_size <= 0 {
                let fraction = (0.4 * f64::from(basis)).ceil() as i32;
                num_evals.max(fraction).min(room).max(1)
            } else {
                self.min_restart_size.min(room)
            };
        }

        if self.dynamic_method_switch < 0 {
            self.dynamic_method_switch = 0;
        }
    }
}
