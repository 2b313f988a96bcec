//! Solver port for mixed-integer programming.
//!
//! The core depends only on this abstract contract: register variables with
//! objective coefficients and bounds, register linear constraints, solve, and
//! read back a terminal status plus the optimal assignment. The drive loop
//! injects new constraints between invocations, so one call to
//! [`MilpSolver::solve`] corresponds to one round of the branch-and-cut
//! search over the current constraint pool.

use crate::error::Result;

/// A mixed-integer linear programming solver.
///
/// Implementations wrap specific backends (HiGHS, CBC, ...) and must be
/// thread-safe (`Send + Sync`). Solving must not mutate shared state: the
/// driver alone owns and grows the constraint pool between calls.
pub trait MilpSolver: Send + Sync {
    /// Solver name for logging/config.
    fn name(&self) -> &'static str;

    /// Solve: minimize `c*x` subject to the problem's constraints and bounds.
    ///
    /// Returns a solution whose status distinguishes optimality from
    /// infeasibility; backend failures are errors.
    fn solve(&self, problem: &MilpProblem) -> Result<MilpSolution>;
}

/// Mixed-integer linear programming problem definition.
#[derive(Debug, Clone)]
pub struct MilpProblem {
    /// Objective coefficients (minimize c*x).
    pub objective: Vec<f64>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
    /// Variable bounds.
    pub bounds: Vec<VariableBounds>,
    /// Indices of variables that must take integer values.
    pub integer_vars: Vec<usize>,
}

impl MilpProblem {
    /// Create an empty problem over `num_vars` continuous non-negative
    /// variables.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![0.0; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
            integer_vars: Vec::new(),
        }
    }

    /// Create a problem where every variable is binary, with the given
    /// objective coefficients.
    #[must_use]
    pub fn all_binary(objective: Vec<f64>) -> Self {
        let num_vars = objective.len();
        Self {
            objective,
            constraints: Vec::new(),
            bounds: vec![VariableBounds::binary(); num_vars],
            integer_vars: (0..num_vars).collect(),
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// A single constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Coefficients for each variable.
    pub coefficients: Vec<f64>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: f64,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(coefficients: Vec<f64>, rhs: f64) -> Self {
        Self {
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }
}

/// Constraint sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintSense {
    GreaterEqual,
    LessEqual,
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<f64>,
    /// Upper bound (None = +infinity).
    pub upper: Option<f64>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(0.0),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(0.0),
            upper: Some(1.0),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}

/// Solution to a MILP problem.
#[derive(Debug, Clone)]
pub struct MilpSolution {
    /// Variable values of the final assignment (empty unless optimal).
    pub values: Vec<f64>,
    /// Objective value of the final assignment.
    pub objective: f64,
    /// Solver status.
    pub status: SolutionStatus,
}

impl MilpSolution {
    /// Check if the solution is optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }
}

/// Solver terminal status.
///
/// Backend-side time limits are intentionally unmodeled here: the wall-clock
/// budget belongs to the drive loop, which checks it between invocations and
/// reports timeout (with the best incumbent) itself. A backend that exposes
/// its own limit would need a variant added alongside these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found a provably optimal solution.
    Optimal,
    /// No feasible assignment exists.
    Infeasible,
}
