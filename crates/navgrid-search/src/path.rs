//! Path reconstruction over the finalized predecessor chain.

use navgrid_core::Point;

use crate::node::{NO_PARENT, Node};

/// Lazy walk of the predecessor chain, yielding cells goal to start.
///
/// Finite and non-restartable: the chain is acyclic (a finalized cell is
/// never rediscovered), so the walk ends at the start cell's sentinel
/// parent after at most one step per arena cell.
pub(crate) struct PathTrace<'a> {
    nodes: &'a [Node],
    width: usize,
    cur: usize,
}

impl<'a> PathTrace<'a> {
    pub(crate) fn new(nodes: &'a [Node], width: usize, terminal: usize) -> Self {
        Self {
            nodes,
            width,
            cur: terminal,
        }
    }
}

impl Iterator for PathTrace<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cur == NO_PARENT {
            return None;
        }
        let idx = self.cur;
        self.cur = self.nodes[idx].parent;
        let x = (idx % self.width) as i32;
        let y = (idx / self.width) as i32;
        Some(Point::new(x, y))
    }
}

/// Materialize the chain ending at `terminal` in start-to-goal order.
pub(crate) fn reconstruct(nodes: &[Node], width: usize, terminal: usize) -> Vec<Point> {
    let mut path: Vec<Point> = PathTrace::new(nodes, width, terminal).collect();
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_reverses_trace() {
        // Hand-built chain on a 3-wide arena: 0 -> 1 -> 4.
        let mut nodes = vec![Node::default(); 6];
        nodes[1].parent = 0;
        nodes[4].parent = 1;
        let goal_first: Vec<Point> = PathTrace::new(&nodes, 3, 4).collect();
        assert_eq!(
            goal_first,
            vec![Point::new(1, 1), Point::new(1, 0), Point::new(0, 0)]
        );
        assert_eq!(
            reconstruct(&nodes, 3, 4),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)]
        );
    }

    #[test]
    fn single_cell_chain() {
        let nodes = vec![Node::default(); 4];
        assert_eq!(reconstruct(&nodes, 2, 3), vec![Point::new(1, 1)]);
    }
}
