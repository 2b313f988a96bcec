//! Symmetric edge-weight table over all unordered point pairs.

use super::geo::haversine;
use super::point::PointSet;

/// Number of unordered pairs over `n` points.
pub fn pair_count(n: usize) -> usize {
    n * (n - 1) / 2
}

/// Flat index of the unordered pair `{i, j}` in row-major upper-triangular
/// order, so that every pair over `n` points maps to a distinct slot in
/// `0..pair_count(n)`. Argument order does not matter.
///
/// # Panics
///
/// Panics if `i == j`: a point forms no pair with itself, and a self-loop
/// must never be silently mapped to another pair's slot.
pub fn pair_index(n: usize, i: usize, j: usize) -> usize {
    assert_ne!(i, j, "self-loops have no pair index");
    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    lo * n - lo * (lo + 1) / 2 + (hi - lo - 1)
}

/// Great-circle edge weights, computed once per unordered pair.
///
/// Lookup is symmetric: `cost(i, j) == cost(j, i)`, and `cost(i, i)` is zero.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    costs: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute the haversine distance for every unordered pair in the set.
    pub fn build(points: &PointSet) -> Self {
        let n = points.len();
        let mut costs = Vec::with_capacity(pair_count(n));
        for i in 0..n {
            for j in (i + 1)..n {
                costs.push(haversine(points.point(i), points.point(j)));
            }
        }
        Self { n, costs }
    }

    /// Number of points the matrix was built over.
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Edge weight between two instance indices.
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        self.costs[pair_index(self.n, i, j)]
    }

    /// Iterate every unordered pair `(i, j, cost)` with `i < j`, in pair-index
    /// order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n).flat_map(move |i| {
            ((i + 1)..self.n).map(move |j| (i, j, self.costs[pair_index(self.n, i, j)]))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::point::Point;

    fn square() -> PointSet {
        PointSet::try_new(vec![
            Point::try_new("a", 0.0, 0.0).unwrap(),
            Point::try_new("b", 0.0, 1.0).unwrap(),
            Point::try_new("c", 1.0, 1.0).unwrap(),
            Point::try_new("d", 1.0, 0.0).unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn pair_index_covers_the_triangle_exactly_once() {
        let n = 5;
        let mut seen = vec![false; pair_count(n)];
        for i in 0..n {
            for j in (i + 1)..n {
                let idx = pair_index(n, i, j);
                assert!(!seen[idx], "pair ({i},{j}) collided");
                seen[idx] = true;
                assert_eq!(idx, pair_index(n, j, i));
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    #[should_panic(expected = "self-loops have no pair index")]
    fn pair_index_rejects_self_loops() {
        pair_index(4, 2, 2);
    }

    #[test]
    fn lookup_is_symmetric() {
        let matrix = DistanceMatrix::build(&square());
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(matrix.cost(i, j), matrix.cost(j, i));
            }
        }
    }

    #[test]
    fn self_cost_is_zero() {
        let matrix = DistanceMatrix::build(&square());
        for i in 0..4 {
            assert_eq!(matrix.cost(i, i), 0.0);
        }
    }

    #[test]
    fn stores_one_entry_per_pair() {
        let matrix = DistanceMatrix::build(&square());
        assert_eq!(matrix.pairs().count(), pair_count(4));
        assert!(matrix.pairs().all(|(_, _, c)| c > 0.0));
    }
}
