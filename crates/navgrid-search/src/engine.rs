//! The search engine: a small state machine over one grid snapshot.

use std::fmt;

use navgrid_core::{Grid, Point};

use crate::distance::manhattan;
use crate::explored::Explored;
use crate::frontier::Frontier;
use crate::node::{NO_PARENT, Node};
use crate::path::reconstruct;

/// Lifecycle states of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// The main loop has work left.
    Running,
    /// The goal was finalized; a path exists.
    Found,
    /// The frontier emptied without reaching the goal; no path exists.
    Exhausted,
}

/// Invalid start/goal endpoints, rejected before any cell is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    StartOutOfBounds(Point),
    GoalOutOfBounds(Point),
    StartBlocked(Point),
    GoalBlocked(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "search: start {p} is out of bounds"),
            Self::GoalOutOfBounds(p) => write!(f, "search: goal {p} is out of bounds"),
            Self::StartBlocked(p) => write!(f, "search: start {p} is a wall"),
            Self::GoalBlocked(p) => write!(f, "search: goal {p} is a wall"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Outcome of a completed search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Cells from start to goal inclusive; empty when no path exists.
    pub path: Vec<Point>,
    /// Cells expanded (popped and relaxed) before termination.
    pub expanded: usize,
}

/// A* search over one grid snapshot.
///
/// The engine owns the frontier, the explored set, and the node arena for
/// a single start/goal query; the grid is borrowed read-only for the
/// engine's lifetime, so passability cannot change mid-search. Drive it
/// with [`run`](Self::run) (or repeated [`step`](Self::step) calls) and
/// collect the outcome with [`into_result`](Self::into_result).
#[derive(Debug)]
pub struct SearchEngine<'a> {
    grid: &'a Grid,
    goal: Point,
    goal_idx: usize,
    width: usize,
    state: SearchState,
    nodes: Vec<Node>,
    frontier: Frontier,
    explored: Explored,
    expanded: usize,
    nbuf: Vec<Point>,
}

impl<'a> SearchEngine<'a> {
    /// Set up a search from `start` to `goal`, seeding the frontier with
    /// the start cell.
    ///
    /// Both endpoints must be in bounds and passable; the start is
    /// validated first.
    pub fn new(grid: &'a Grid, start: Point, goal: Point) -> Result<Self, SearchError> {
        if !grid.in_bounds(start) {
            return Err(SearchError::StartOutOfBounds(start));
        }
        if !grid.in_bounds(goal) {
            return Err(SearchError::GoalOutOfBounds(goal));
        }
        if !grid.is_passable(start) {
            return Err(SearchError::StartBlocked(start));
        }
        if !grid.is_passable(goal) {
            return Err(SearchError::GoalBlocked(goal));
        }

        let width = grid.width() as usize;
        let len = width * grid.height() as usize;
        let mut engine = Self {
            grid,
            goal,
            goal_idx: 0,
            width,
            state: SearchState::Running,
            nodes: vec![Node::default(); len],
            frontier: Frontier::new(),
            explored: Explored::new(len),
            expanded: 0,
            nbuf: Vec::with_capacity(4),
        };
        engine.goal_idx = engine.idx(goal);
        let start_idx = engine.idx(start);
        let h = manhattan(start, goal);
        engine
            .frontier
            .insert(&mut engine.nodes, start_idx, 0, h, NO_PARENT);
        log::debug!(
            "search {start} -> {goal} on {}x{} grid",
            grid.width(),
            grid.height()
        );
        Ok(engine)
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Cells expanded so far. Popping the goal itself is not an expansion.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Run one transition of the main loop.
    ///
    /// Pops the best frontier cell, finalizes it, and either detects the
    /// goal or relaxes its neighbours at unit edge cost. Relaxation
    /// accepts cost ties: an equal-cost rediscovery re-points the
    /// predecessor, so the selected path follows the most recent among
    /// tying expansions. Terminal states are absorbing; further calls are
    /// no-ops.
    pub fn step(&mut self) -> SearchState {
        if self.state != SearchState::Running {
            return self.state;
        }

        let Some(ci) = self.frontier.pop_min(&mut self.nodes) else {
            log::debug!("exhausted after {} expansions", self.expanded);
            self.state = SearchState::Exhausted;
            return self.state;
        };

        self.explored.add(ci);

        if ci == self.goal_idx {
            log::debug!(
                "found g={} after {} expansions",
                self.nodes[ci].g,
                self.expanded
            );
            self.state = SearchState::Found;
            return self.state;
        }

        self.expanded += 1;
        let current_g = self.nodes[ci].g;
        let cp = self.point(ci);
        log::trace!(
            "expand {cp} g={current_g} h={} f={} open={}",
            self.nodes[ci].h,
            self.nodes[ci].f,
            self.frontier.len()
        );

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let ni = self.idx(np);
            if self.explored.contains(ni) {
                continue;
            }
            let tentative_g = current_g + 1;
            if !self.frontier.contains(&self.nodes, ni) {
                let h = manhattan(np, self.goal);
                self.frontier
                    .insert(&mut self.nodes, ni, tentative_g, h, ci);
            } else if tentative_g <= self.nodes[ni].g {
                let h = manhattan(np, self.goal);
                self.frontier
                    .decrease_key(&mut self.nodes, ni, tentative_g, h, ci);
            }
        }

        self.nbuf = nbuf;
        self.state
    }

    /// Drive the search to a terminal state.
    pub fn run(&mut self) -> SearchState {
        'search: loop {
            match self.step() {
                SearchState::Running => continue 'search,
                terminal => break 'search terminal,
            }
        }
    }

    /// Finish the search if still running, then produce its result.
    ///
    /// An exhausted search yields an empty path; two disconnected cells
    /// are a normal outcome, not an error.
    pub fn into_result(mut self) -> SearchResult {
        self.run();
        let path = match self.state {
            SearchState::Found => reconstruct(&self.nodes, self.width, self.goal_idx),
            _ => Vec::new(),
        };
        SearchResult {
            path,
            expanded: self.expanded,
        }
    }

    #[inline]
    fn idx(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

/// Search `grid` for a shortest path from `start` to `goal`.
///
/// Returns the optimal path by cell count (both endpoints included) and
/// the number of cells expanded on the way. Endpoints must be in bounds
/// and passable; disconnected endpoints yield an empty path.
pub fn shortest_path(grid: &Grid, start: Point, goal: Point) -> Result<SearchResult, SearchError> {
    Ok(SearchEngine::new(grid, start, goal)?.into_result())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_result_round_trip() {
        let g = Grid::new(2, 2);
        let result = shortest_path(&g, Point::ZERO, Point::new(1, 1)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
