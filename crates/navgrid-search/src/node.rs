//! Per-cell search bookkeeping and the frontier heap entry.

/// Sentinel parent index meaning "no predecessor" (the start node).
pub(crate) const NO_PARENT: usize = usize::MAX;

/// One cell's search state, stored in a flat arena keyed by cell index.
///
/// `parent` is an arena index rather than a reference, so the predecessor
/// chain survives arena reallocation and cannot dangle. `seq` is the
/// discovery order, assigned once when the cell first enters the frontier
/// and kept across relaxations.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) seq: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            f: 0,
            parent: NO_PARENT,
            seq: 0,
            open: false,
        }
    }
}

/// Reference into the node arena, ordered by `(f, seq)` for use in
/// `BinaryHeap`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct OpenEntry {
    pub(crate) f: i32,
    pub(crate) seq: u32,
    pub(crate) idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first; among
        // equal f, the earliest-discovered entry wins.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
