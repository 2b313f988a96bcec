//! Outbound ports: abstract contracts the application layer drives.

pub mod solver;

pub use solver::{
    Constraint, ConstraintSense, MilpProblem, MilpSolution, MilpSolver, SolutionStatus,
    VariableBounds,
};
