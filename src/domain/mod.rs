//! Core domain types and algorithms: validated points, edge weights, subtour
//! detection and tour reconstruction.

pub mod error;

mod cut;
mod geo;
mod matrix;
mod point;
mod tour;

pub use cut::{find_violated_cuts, Edge, SubtourCut};
pub use geo::{haversine, EARTH_RADIUS_KM};
pub use matrix::{pair_count, pair_index, DistanceMatrix};
pub use point::{Point, PointId, PointSet};
pub use tour::Tour;
