//! The frontier (open set): a lazy-deletion binary heap over arena nodes.
//!
//! Cost relaxations do not remove superseded heap entries; they push a
//! fresh entry and let `pop_min` skip entries whose cell is no longer
//! open. A cell's best entry always sorts before its stale ones, so the
//! open flag alone identifies staleness.

use std::collections::BinaryHeap;

use crate::node::{Node, OpenEntry};

/// The set of discovered-but-unexpanded cells, ordered by total estimated
/// cost `f`. Among equal-`f` cells the earliest-discovered pops first, so
/// identical inputs always select the same path.
///
/// The frontier owns the heap and the discovery counter; the node data
/// lives in the caller's arena, passed into each operation.
#[derive(Debug)]
pub(crate) struct Frontier {
    heap: BinaryHeap<OpenEntry>,
    live: usize,
    next_seq: u32,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            live: 0,
            next_seq: 0,
        }
    }

    /// Add a newly discovered cell. The cell must not already be open.
    pub(crate) fn insert(&mut self, nodes: &mut [Node], idx: usize, g: i32, h: i32, parent: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        let node = &mut nodes[idx];
        node.g = g;
        node.h = h;
        node.f = g + h;
        node.parent = parent;
        node.seq = seq;
        node.open = true;
        self.heap.push(OpenEntry { f: node.f, seq, idx });
        self.live += 1;
    }

    /// Re-point an open cell at a cheaper (or tying) path.
    ///
    /// Keeps the cell's discovery order, so relaxation never perturbs the
    /// equal-cost pop order. Amortized O(log n): the superseded heap entry
    /// stays behind and is skipped when popped.
    pub(crate) fn decrease_key(
        &mut self,
        nodes: &mut [Node],
        idx: usize,
        g: i32,
        h: i32,
        parent: usize,
    ) {
        let node = &mut nodes[idx];
        node.g = g;
        node.h = h;
        node.f = g + h;
        node.parent = parent;
        self.heap.push(OpenEntry {
            f: node.f,
            seq: node.seq,
            idx,
        });
    }

    /// Remove and return the open cell with the smallest `(f, seq)`.
    ///
    /// Returns `None` when no cells are open, which the engine treats as
    /// search exhaustion.
    pub(crate) fn pop_min(&mut self, nodes: &mut [Node]) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        while let Some(entry) = self.heap.pop() {
            let node = &mut nodes[entry.idx];
            if !node.open {
                // Superseded by a later relaxation, or already popped.
                continue;
            }
            node.open = false;
            self.live -= 1;
            return Some(entry.idx);
        }
        None
    }

    /// Whether the cell is currently in the frontier.
    #[inline]
    pub(crate) fn contains(&self, nodes: &[Node], idx: usize) -> bool {
        nodes[idx].open
    }

    /// Number of open cells (not heap entries).
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.live == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NO_PARENT;

    fn arena(n: usize) -> Vec<Node> {
        vec![Node::default(); n]
    }

    #[test]
    fn pops_in_cost_order() {
        let mut nodes = arena(3);
        let mut fr = Frontier::new();
        fr.insert(&mut nodes, 0, 5, 2, NO_PARENT); // f 7
        fr.insert(&mut nodes, 1, 1, 1, NO_PARENT); // f 2
        fr.insert(&mut nodes, 2, 2, 2, NO_PARENT); // f 4
        assert_eq!(fr.pop_min(&mut nodes), Some(1));
        assert_eq!(fr.pop_min(&mut nodes), Some(2));
        assert_eq!(fr.pop_min(&mut nodes), Some(0));
        assert_eq!(fr.pop_min(&mut nodes), None);
    }

    #[test]
    fn equal_cost_pops_earliest_discovered() {
        let mut nodes = arena(3);
        let mut fr = Frontier::new();
        fr.insert(&mut nodes, 2, 2, 2, NO_PARENT);
        fr.insert(&mut nodes, 0, 2, 2, NO_PARENT);
        fr.insert(&mut nodes, 1, 2, 2, NO_PARENT);
        assert_eq!(fr.pop_min(&mut nodes), Some(2));
        assert_eq!(fr.pop_min(&mut nodes), Some(0));
        assert_eq!(fr.pop_min(&mut nodes), Some(1));
    }

    #[test]
    fn decrease_key_reorders_and_skips_stale() {
        let mut nodes = arena(2);
        let mut fr = Frontier::new();
        fr.insert(&mut nodes, 0, 10, 0, NO_PARENT); // f 10
        fr.insert(&mut nodes, 1, 5, 0, NO_PARENT); // f 5
        fr.decrease_key(&mut nodes, 0, 1, 0, 1); // f 1, now best
        assert_eq!(nodes[0].parent, 1);
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.pop_min(&mut nodes), Some(0));
        // The superseded f=10 entry must not surface again.
        assert_eq!(fr.pop_min(&mut nodes), Some(1));
        assert_eq!(fr.pop_min(&mut nodes), None);
        assert!(fr.is_empty());
    }

    #[test]
    fn tying_decrease_key_keeps_pop_order() {
        let mut nodes = arena(2);
        let mut fr = Frontier::new();
        fr.insert(&mut nodes, 0, 2, 2, NO_PARENT);
        fr.insert(&mut nodes, 1, 2, 2, NO_PARENT);
        // Re-point the later cell at an equal-cost path.
        fr.decrease_key(&mut nodes, 1, 2, 2, 0);
        assert_eq!(nodes[1].parent, 0);
        assert_eq!(fr.pop_min(&mut nodes), Some(0));
        assert_eq!(fr.pop_min(&mut nodes), Some(1));
        assert_eq!(fr.pop_min(&mut nodes), None);
    }

    #[test]
    fn contains_and_len_lifecycle() {
        let mut nodes = arena(2);
        let mut fr = Frontier::new();
        assert!(fr.is_empty());
        fr.insert(&mut nodes, 0, 0, 3, NO_PARENT);
        fr.insert(&mut nodes, 1, 1, 2, NO_PARENT);
        assert_eq!(fr.len(), 2);
        assert!(fr.contains(&nodes, 0));
        assert!(fr.contains(&nodes, 1));
        let popped = fr.pop_min(&mut nodes).unwrap();
        assert!(!fr.contains(&nodes, popped));
        assert_eq!(fr.len(), 1);
        fr.pop_min(&mut nodes);
        assert!(fr.is_empty());
    }
}
