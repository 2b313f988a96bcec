//! The branch-and-cut drive loop.
//!
//! Repeatedly invokes the MILP backend over the current constraint pool.
//! Every integer-feasible candidate is handed to the cut generator before it
//! can be accepted: if the candidate decomposes into subtours, the violated
//! cuts join the pool and the backend is invoked again - the pool is
//! monotone, so earlier cuts keep pruning all later invocations. A candidate
//! that survives the connectivity check is the certified optimum, and the
//! ordered tour is reconstructed from its edges.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::SolveConfig;
use crate::domain::error::DomainError;
use crate::domain::{find_violated_cuts, DistanceMatrix, PointId, PointSet, Tour};
use crate::error::Result;
use crate::ports::{MilpSolver, SolutionStatus};

use super::formulation::Formulation;

/// Best integer-feasible assignment seen before a run was cut short.
///
/// The edge set satisfies every degree constraint but may still decompose
/// into subtours; it is never a claimed tour.
#[derive(Debug, Clone)]
pub struct Incumbent {
    /// Selected edges as identifier pairs.
    pub edges: Vec<(PointId, PointId)>,
    /// Objective value of the assignment.
    pub objective: f64,
}

/// Terminal outcome of a branch-and-cut run.
#[derive(Debug)]
pub enum SolveOutcome {
    /// A single cycle over all points, certified optimal by the backend.
    Optimal {
        tour: Tour,
        /// Total tour cost in kilometers; equals the sum of leg distances.
        cost: f64,
    },
    /// The backend proved no feasible assignment exists. Cannot occur for
    /// the degree formulation on a complete graph, but is surfaced rather
    /// than swallowed.
    Infeasible,
    /// The wall-clock budget ran out between solver invocations. Carries the
    /// best incumbent found so far, if any - explicitly not optimal.
    TimedOut { incumbent: Option<Incumbent> },
}

/// Branch-and-cut driver over an abstract MILP backend.
///
/// Each call to [`solve`](Self::solve) owns its formulation, constraint pool
/// and candidate state; nothing is shared between runs.
pub struct BranchAndCut<'s> {
    solver: &'s dyn MilpSolver,
    config: SolveConfig,
}

impl<'s> BranchAndCut<'s> {
    pub fn new(solver: &'s dyn MilpSolver, config: SolveConfig) -> Self {
        Self { solver, config }
    }

    /// Compute the exact minimum-cost closed tour over the instance.
    ///
    /// Fails fast with `DegenerateInstance` for fewer than 3 points, before
    /// the distance matrix is built or the backend is touched.
    pub fn solve(&self, points: &PointSet) -> Result<SolveOutcome> {
        let n = points.len();
        if n < 3 {
            return Err(DomainError::DegenerateInstance { count: n }.into());
        }

        let matrix = DistanceMatrix::build(points);
        let mut formulation = Formulation::new(points, &matrix)?;
        info!(
            points = n,
            vars = formulation.num_vars(),
            solver = self.solver.name(),
            "starting branch-and-cut"
        );

        let started = Instant::now();
        let budget = self.config.time_budget();
        let mut incumbent: Option<Incumbent> = None;
        let mut rounds = 0usize;

        loop {
            if let Some(limit) = budget {
                if started.elapsed() >= limit {
                    warn!(rounds, "wall-clock budget exhausted");
                    return Ok(SolveOutcome::TimedOut { incumbent });
                }
            }

            let solution = self.solver.solve(formulation.problem())?;
            if solution.status == SolutionStatus::Infeasible {
                warn!(rounds, "backend proved the formulation infeasible");
                return Ok(SolveOutcome::Infeasible);
            }

            let edges = formulation.selected_edges(&solution, self.config.integrality_threshold);
            incumbent = Some(Incumbent {
                edges: edges
                    .iter()
                    .map(|&(i, j)| (points.id(i).clone(), points.id(j).clone()))
                    .collect(),
                objective: solution.objective,
            });

            let cuts = find_violated_cuts(&edges, n)?;
            if cuts.is_empty() {
                let tour = Tour::reconstruct(&edges, points)?;
                let cost = tour.cost(&matrix);
                info!(rounds, cost, "single cycle certified optimal");
                return Ok(SolveOutcome::Optimal { tour, cost });
            }

            rounds += 1;
            debug!(
                round = rounds,
                subtours = cuts.len(),
                objective = solution.objective,
                "injecting subtour cuts"
            );
            for cut in &cuts {
                formulation.add_subtour_cut(cut);
            }
        }
    }
}
