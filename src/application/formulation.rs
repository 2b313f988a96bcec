//! Binary edge formulation of the tour problem.
//!
//! One binary variable per unordered point pair, one degree-2 equality per
//! point, objective minimizing total edge weight. The formulation owns
//! variable identity (pair <-> variable index) and the constraint pool; the
//! pool only ever grows, one subtour cut at a time.

use crate::domain::error::DomainError;
use crate::domain::{pair_count, pair_index, DistanceMatrix, Edge, PointSet, SubtourCut};
use crate::error::Result;
use crate::ports::{Constraint, MilpProblem, MilpSolution};

/// The run's ILP model: variables, degree constraints, objective, and the
/// monotonically growing cut pool.
#[derive(Debug, Clone)]
pub struct Formulation {
    n: usize,
    /// Variable index -> the unordered pair it selects.
    pairs: Vec<(usize, usize)>,
    problem: MilpProblem,
}

impl Formulation {
    /// Build degree-2 base formulation over the instance.
    ///
    /// Fails with `DegenerateInstance` for fewer than 3 points, before any
    /// solver interaction.
    pub fn new(points: &PointSet, matrix: &DistanceMatrix) -> Result<Self> {
        let n = points.len();
        if n < 3 {
            return Err(DomainError::DegenerateInstance { count: n }.into());
        }

        let mut objective = vec![0.0; pair_count(n)];
        let mut pairs = vec![(0, 0); pair_count(n)];
        for (i, j, cost) in matrix.pairs() {
            let var = pair_index(n, i, j);
            objective[var] = cost;
            pairs[var] = (i, j);
        }

        let mut problem = MilpProblem::all_binary(objective);
        for point in 0..n {
            let mut coefficients = vec![0.0; pair_count(n)];
            for other in 0..n {
                if other != point {
                    coefficients[pair_index(n, point, other)] = 1.0;
                }
            }
            problem.constraints.push(Constraint::eq(coefficients, 2.0));
        }

        Ok(Self { n, pairs, problem })
    }

    /// The problem in its current state, degree constraints plus every cut
    /// injected so far.
    pub fn problem(&self) -> &MilpProblem {
        &self.problem
    }

    pub fn num_vars(&self) -> usize {
        self.problem.num_vars()
    }

    pub fn constraint_count(&self) -> usize {
        self.problem.constraints.len()
    }

    /// Append a subtour-elimination constraint: at most `|S| - 1` selected
    /// edges with both endpoints inside the subtour `S`.
    pub fn add_subtour_cut(&mut self, cut: &SubtourCut) {
        let mut coefficients = vec![0.0; self.num_vars()];
        let members = cut.members();
        for (k, &a) in members.iter().enumerate() {
            for &b in &members[k + 1..] {
                coefficients[pair_index(self.n, a, b)] = 1.0;
            }
        }
        self.problem
            .constraints
            .push(Constraint::leq(coefficients, cut.max_inner_edges()));
    }

    /// Read the selected edges out of an integer-feasible assignment.
    pub fn selected_edges(&self, solution: &MilpSolution, threshold: f64) -> Vec<Edge> {
        solution
            .values
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value > threshold)
            .map(|(var, _)| self.pairs[var])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{find_violated_cuts, Point};
    use crate::ports::{ConstraintSense, SolutionStatus};

    fn instance(n: usize) -> (PointSet, DistanceMatrix) {
        let points = PointSet::try_new(
            (0..n)
                .map(|k| Point::try_new(format!("p{k}"), k as f64, 0.0).unwrap())
                .collect(),
        )
        .unwrap();
        let matrix = DistanceMatrix::build(&points);
        (points, matrix)
    }

    #[test]
    fn one_variable_per_unordered_pair() {
        let (points, matrix) = instance(5);
        let formulation = Formulation::new(&points, &matrix).unwrap();

        assert_eq!(formulation.num_vars(), 10);
        assert_eq!(formulation.problem().integer_vars.len(), 10);
    }

    #[test]
    fn one_degree_constraint_per_point() {
        let (points, matrix) = instance(4);
        let formulation = Formulation::new(&points, &matrix).unwrap();
        let problem = formulation.problem();

        assert_eq!(problem.constraints.len(), 4);
        for row in &problem.constraints {
            assert_eq!(row.sense, ConstraintSense::Equal);
            assert_eq!(row.rhs, 2.0);
            // Each point touches n - 1 edge variables.
            let touched: f64 = row.coefficients.iter().sum();
            assert_eq!(touched, 3.0);
        }
        // Every edge variable appears in exactly its two endpoints' rows.
        for var in 0..problem.num_vars() {
            let rows = problem
                .constraints
                .iter()
                .filter(|c| c.coefficients[var] == 1.0)
                .count();
            assert_eq!(rows, 2);
        }
    }

    #[test]
    fn objective_carries_the_edge_weights() {
        let (points, matrix) = instance(4);
        let formulation = Formulation::new(&points, &matrix).unwrap();

        for (i, j, cost) in matrix.pairs() {
            assert_eq!(formulation.problem().objective[pair_index(4, i, j)], cost);
        }
    }

    #[test]
    fn degenerate_instance_is_rejected() {
        let (points, matrix) = instance(2);
        let err = Formulation::new(&points, &matrix).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Domain(DomainError::DegenerateInstance { count: 2 })
        ));
    }

    #[test]
    fn subtour_cuts_grow_the_pool_monotonically() {
        let (points, matrix) = instance(6);
        let mut formulation = Formulation::new(&points, &matrix).unwrap();
        let base = formulation.constraint_count();

        // Two disjoint triangles.
        let edges = vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)];
        let cuts = find_violated_cuts(&edges, 6).unwrap();
        assert_eq!(cuts.len(), 2);

        for cut in &cuts {
            formulation.add_subtour_cut(cut);
        }
        assert_eq!(formulation.constraint_count(), base + 2);

        let row = formulation.problem().constraints.last().unwrap();
        assert_eq!(row.sense, ConstraintSense::LessEqual);
        assert_eq!(row.rhs, 2.0);
        // All three inner pairs of {3,4,5} participate.
        let inner: f64 = row.coefficients.iter().sum();
        assert_eq!(inner, 3.0);
    }

    #[test]
    fn selected_edges_reads_the_assignment_back() {
        let (points, matrix) = instance(3);
        let formulation = Formulation::new(&points, &matrix).unwrap();

        let solution = MilpSolution {
            values: vec![1.0, 0.0, 1.0],
            objective: 0.0,
            status: SolutionStatus::Optimal,
        };
        let edges = formulation.selected_edges(&solution, 0.5);
        assert_eq!(edges, vec![(0, 1), (1, 2)]);
    }
}
