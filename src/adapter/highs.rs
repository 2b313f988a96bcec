//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming
//! solver. This implementation wraps it using the good_lp crate for ergonomic
//! Rust usage.

use good_lp::solvers::highs::highs;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel};

use crate::error::{Result, SolverError};
use crate::ports::{ConstraintSense, MilpProblem, MilpSolution, MilpSolver, SolutionStatus};

/// HiGHS-based MILP solver.
#[derive(Debug, Default, Clone)]
pub struct HighsSolver;

impl HighsSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl MilpSolver for HighsSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &MilpProblem) -> Result<MilpSolution> {
        let n = problem.num_vars();

        // Handle empty problem
        if n == 0 {
            return Ok(MilpSolution {
                values: vec![],
                objective: 0.0,
                status: SolutionStatus::Optimal,
            });
        }

        // Create variables
        let mut vars = variables!();
        let mut var_list = Vec::with_capacity(n);

        for (i, bounds) in problem.bounds.iter().enumerate() {
            let mut v = variable();

            if let Some(lb) = bounds.lower {
                v = v.min(lb);
            }
            if let Some(ub) = bounds.upper {
                v = v.max(ub);
            }

            if problem.integer_vars.contains(&i) {
                v = v.integer();
            }

            var_list.push(vars.add(v));
        }

        // Build objective function
        let objective: Expression = var_list
            .iter()
            .zip(problem.objective.iter())
            .map(|(v, c)| *c * *v)
            .sum();

        let mut model = vars.minimise(&objective).using(highs);

        // Add constraints
        for constr in &problem.constraints {
            let lhs: Expression = var_list
                .iter()
                .zip(constr.coefficients.iter())
                .map(|(v, c)| *c * *v)
                .sum();

            let rhs = constr.rhs;
            match constr.sense {
                ConstraintSense::GreaterEqual => {
                    model = model.with(constraint!(lhs >= rhs));
                }
                ConstraintSense::LessEqual => {
                    model = model.with(constraint!(lhs <= rhs));
                }
                ConstraintSense::Equal => {
                    model = model.with(constraint!(lhs == rhs));
                }
            }
        }

        match model.solve() {
            Ok(solution) => {
                let values: Vec<f64> = var_list.iter().map(|v| solution.value(*v)).collect();

                // Re-evaluate the objective with the solved values
                let objective: f64 = values
                    .iter()
                    .zip(problem.objective.iter())
                    .map(|(v, c)| v * c)
                    .sum();

                Ok(MilpSolution {
                    values,
                    objective,
                    status: SolutionStatus::Optimal,
                })
            }
            Err(ResolutionError::Infeasible) => Ok(MilpSolution {
                values: vec![],
                objective: 0.0,
                status: SolutionStatus::Infeasible,
            }),
            Err(ResolutionError::Unbounded) => Err(SolverError::Unbounded.into()),
            Err(other) => Err(SolverError::Backend(other.to_string()).into()),
        }
    }
}
