//! A* shortest-path search on 2D obstacle grids.
//!
//! Given a [`navgrid_core::Grid`] snapshot, a start cell, and a goal cell,
//! [`shortest_path`] returns the optimal path by cell count together with
//! the number of cells the search expanded. Two disconnected cells are a
//! normal outcome (an empty path), not an error; only invalid endpoints
//! are rejected, before the search starts.
//!
//! - **A\*** with a Manhattan heuristic and deterministic tie-breaking
//!   ([`SearchEngine`], [`shortest_path`])
//! - **BFS** distance maps for exhaustive reachability queries
//!   ([`DistanceMap`])

mod bfs;
mod distance;
mod engine;
mod explored;
mod frontier;
mod node;
mod path;

pub use bfs::{DistanceMap, UNREACHABLE};
pub use distance::manhattan;
pub use engine::{SearchEngine, SearchError, SearchResult, SearchState, shortest_path};
