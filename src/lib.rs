//! Geotour - exact traveling-salesman tours over geographic points.
//!
//! This crate computes a minimum-cost closed tour visiting every point of a
//! geographic instance exactly once, using branch-and-cut: a binary edge
//! formulation with degree-2 constraints, iteratively strengthened with
//! subtour-elimination cuts until the optimal integer solution is a single
//! Hamiltonian cycle.
//!
//! # Architecture
//!
//! - **`domain`** - Value types and pure algorithms
//!   - `PointSet` - validated, identifier-ordered geographic points
//!   - `DistanceMatrix` - great-circle edge weights, one per unordered pair
//!   - `find_violated_cuts` - subtour detection on integer candidates
//!   - `Tour` - deterministic reconstruction of the ordered visiting sequence
//!
//! - **`ports`** - MILP solver abstraction the core depends on
//! - **`adapter`** - `HighsSolver`, the open-source HiGHS backend via good_lp
//! - **`application`** - edge formulation and the branch-and-cut drive loop
//!
//! # Example
//!
//! ```no_run
//! use geotour::adapter::HighsSolver;
//! use geotour::application::{BranchAndCut, SolveOutcome};
//! use geotour::config::SolveConfig;
//! use geotour::domain::PointSet;
//!
//! # fn main() -> geotour::Result<()> {
//! let points = PointSet::from_json_str(
//!     r#"{"Berlin": {"lat": 52.52, "long": 13.405},
//!         "Hamburg": {"lat": 53.5511, "long": 9.9937},
//!         "Munich": {"lat": 48.1374, "long": 11.5755}}"#,
//! )?;
//!
//! let solver = HighsSolver::new();
//! let driver = BranchAndCut::new(&solver, SolveConfig::default());
//! match driver.solve(&points)? {
//!     SolveOutcome::Optimal { tour, cost } => {
//!         println!("{:.1} km: {:?}", cost, tour.sequence());
//!     }
//!     other => eprintln!("no tour: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;

pub use error::{Error, Result};
