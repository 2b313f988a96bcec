//! Application layer: the ILP formulation and the branch-and-cut driver.

mod driver;
mod formulation;

pub use driver::{BranchAndCut, Incumbent, SolveOutcome};
pub use formulation::Formulation;
