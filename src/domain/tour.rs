//! Ordered tour reconstruction from a selected-edge set.

use super::cut::Edge;
use super::matrix::DistanceMatrix;
use super::point::{PointId, PointSet};
use crate::error::TourError;

/// The final ordered visiting sequence, closing back to its first point.
///
/// Immutable once reconstructed. The cyclic content (the set of consecutive
/// pairs including the closing leg) is the same whatever point the walk had
/// started from; the concrete sequence is pinned down by the deterministic
/// start and direction choice documented on [`Tour::reconstruct`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    sequence: Vec<PointId>,
    order: Vec<usize>,
}

impl Tour {
    /// Walk the edge set into an ordered sequence.
    ///
    /// The walk starts at the lexicographically smallest point identifier
    /// (instance index 0) and leaves it toward the smaller-identifier
    /// neighbor, then repeatedly follows the unique unused edge incident to
    /// the current point, consuming edges, until it returns to the start.
    /// So the single cycle {(a,b), (b,c), (c,d), (d,a)} reconstructs as
    /// `[a, b, c, d]`.
    ///
    /// Fails with [`TourError::NoEdges`] on an empty edge set and with
    /// [`TourError::IncompleteTour`] if the walk closes before visiting every
    /// point - both signal that the edge set was not a single Hamiltonian
    /// cycle, an upstream contract violation that must never be papered over
    /// by truncating the sequence.
    pub fn reconstruct(edges: &[Edge], points: &PointSet) -> Result<Self, TourError> {
        if edges.is_empty() {
            return Err(TourError::NoEdges);
        }

        let n = points.len();
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
        for &(i, j) in edges {
            adjacency[i].push(j);
            adjacency[j].push(i);
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
        }

        let start = 0;
        let mut order = vec![start];
        let mut current = start;
        loop {
            let Some(&next) = adjacency[current].first() else {
                break;
            };
            adjacency[current].retain(|&v| v != next);
            adjacency[next].retain(|&v| v != current);
            if next == start {
                break;
            }
            order.push(next);
            current = next;
        }

        if order.len() != n {
            return Err(TourError::IncompleteTour {
                visited: order.len(),
                expected: n,
            });
        }

        let sequence = order.iter().map(|&i| points.id(i).clone()).collect();
        Ok(Self { sequence, order })
    }

    /// Ordered point identifiers; the closing leg back to the first entry is
    /// implied.
    pub fn sequence(&self) -> &[PointId] {
        &self.sequence
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Consecutive identifier pairs, including the closing leg. This is what
    /// a rendering collaborator draws.
    pub fn legs(&self) -> impl Iterator<Item = (&PointId, &PointId)> {
        let n = self.sequence.len();
        (0..n).map(move |k| (&self.sequence[k], &self.sequence[(k + 1) % n]))
    }

    /// Total cost: the sum of consecutive-pair distances, closing the loop.
    pub fn cost(&self, matrix: &DistanceMatrix) -> f64 {
        let n = self.order.len();
        (0..n)
            .map(|k| matrix.cost(self.order[k], self.order[(k + 1) % n]))
            .sum()
    }
}
