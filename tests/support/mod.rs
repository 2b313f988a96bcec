//! Shared fixtures and assertions for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;

use geotour::adapter::HighsSolver;
use geotour::domain::{Point, PointId, PointSet};
use geotour::ports::{MilpProblem, MilpSolution, MilpSolver};

static INIT: Once = Once::new();

/// Opt-in test logging: `RUST_LOG=geotour=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub fn point(id: &str, lat: f64, lon: f64) -> Point {
    Point::try_new(id, lat, lon).unwrap()
}

/// Four points spanning a 111 x 56 km rectangle near the equator. The
/// perimeter in identifier order a-b-c-d is the unique optimal tour; the two
/// other Hamiltonian cycles each use both diagonals.
pub fn rectangle() -> PointSet {
    PointSet::try_new(vec![
        point("a", 0.0, 0.0),
        point("b", 0.0, 0.5),
        point("c", 1.0, 0.5),
        point("d", 1.0, 0.0),
    ])
    .unwrap()
}

/// Six points in two tight clusters roughly 1570 km apart. The degree-only
/// relaxation answers with one triangle per cluster, so reaching a single
/// cycle requires at least one round of subtour cuts.
pub fn two_clusters() -> PointSet {
    PointSet::try_new(vec![
        point("north-1", 0.0, 0.0),
        point("north-2", 0.0, 0.1),
        point("north-3", 0.1, 0.0),
        point("south-1", 10.0, 10.0),
        point("south-2", 10.0, 10.1),
        point("south-3", 10.1, 10.0),
    ])
    .unwrap()
}

/// HiGHS wrapper that counts backend invocations.
#[derive(Default)]
pub struct CountingSolver {
    inner: HighsSolver,
    calls: AtomicUsize,
}

impl CountingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl MilpSolver for CountingSolver {
    fn name(&self) -> &'static str {
        "highs-counting"
    }

    fn solve(&self, problem: &MilpProblem) -> geotour::Result<MilpSolution> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.solve(problem)
    }
}

/// Assert two tours are the same cycle up to rotation and direction, by
/// comparing their undirected leg sets.
pub fn assert_same_cycle(actual: &[PointId], expected: &[&str]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "tours have different lengths"
    );

    fn legs(ids: &[String]) -> Vec<(String, String)> {
        let n = ids.len();
        let mut legs: Vec<(String, String)> = (0..n)
            .map(|k| {
                let a = ids[k].clone();
                let b = ids[(k + 1) % n].clone();
                if a <= b {
                    (a, b)
                } else {
                    (b, a)
                }
            })
            .collect();
        legs.sort();
        legs
    }

    let actual_ids: Vec<String> = actual.iter().map(|id| id.as_str().to_string()).collect();
    let expected_ids: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        legs(&actual_ids),
        legs(&expected_ids),
        "tours are not the same cycle: {actual_ids:?} vs {expected_ids:?}"
    );
}
