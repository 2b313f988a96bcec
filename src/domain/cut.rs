//! Subtour detection on integer-feasible candidates.
//!
//! A candidate that satisfies every degree-2 constraint is a disjoint union
//! of simple cycles. If there is more than one cycle, each is a subtour and
//! yields a violated subtour-elimination inequality: the number of selected
//! edges inside the cycle's point set `S` must not exceed `|S| - 1`.

use crate::error::SolverError;

/// A selected edge of a candidate solution, as a pair of instance indices
/// with the smaller index first.
pub type Edge = (usize, usize);

/// A subtour-elimination inequality over a proper subset of points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtourCut {
    members: Vec<usize>,
}

impl SubtourCut {
    /// Instance indices of the subtour's points, ascending.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Right-hand side of the inequality: at most `|S| - 1` edges inside `S`.
    pub fn max_inner_edges(&self) -> f64 {
        (self.members.len() - 1) as f64
    }
}

/// Find every violated subtour-elimination cut in a candidate edge set.
///
/// The candidate is treated as an undirected graph over all `n` points.
/// Components are discovered by depth-first traversal from ascending instance
/// indices, so the same candidate always yields the same cuts in the same
/// order. A single component spanning all points means the candidate is a
/// valid tour and no cuts are returned; otherwise one cut per component.
///
/// Returns `SolverError::InvariantViolation` if any point does not have
/// degree exactly 2 - the driver must never hand a degree-infeasible
/// candidate to the cut generator.
pub fn find_violated_cuts(edges: &[Edge], n: usize) -> Result<Vec<SubtourCut>, SolverError> {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    for &(i, j) in edges {
        adjacency[i].push(j);
        adjacency[j].push(i);
    }
    for (point, neighbors) in adjacency.iter().enumerate() {
        if neighbors.len() != 2 {
            return Err(SolverError::InvariantViolation {
                point,
                degree: neighbors.len(),
            });
        }
    }

    let mut visited = vec![false; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited[start] = true;
        while let Some(u) = stack.pop() {
            component.push(u);
            for &v in &adjacency[u] {
                if !visited[v] {
                    visited[v] = true;
                    stack.push(v);
                }
            }
        }
        component.sort_unstable();
        components.push(component);
    }

    if components.len() == 1 {
        return Ok(Vec::new());
    }

    Ok(components
        .into_iter()
        .map(|members| SubtourCut { members })
        .collect())
}
