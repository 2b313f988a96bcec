//! Concrete backends for the outbound ports.

mod highs;

pub use highs::HighsSolver;
