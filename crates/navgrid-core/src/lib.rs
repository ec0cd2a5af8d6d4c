//! **navgrid-core** — Obstacle-grid pathfinding (core grid types).
//!
//! This crate provides the foundational types used across the *navgrid*
//! ecosystem: integer cell coordinates and the fixed-size passability grid
//! the search operates on.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Cell, Grid, GridError};
