//! Breadth-first distance maps, the unit-cost ground truth for A*.

use std::collections::VecDeque;

use navgrid_core::{Grid, Point};

/// Distance value for cells no wave ever reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Exact unit-cost distances from one source to every reachable cell.
///
/// On a unit-cost grid the breadth-first wave and A* agree on
/// shortest-path lengths, which makes this map a handy oracle.
#[derive(Debug, Clone)]
pub struct DistanceMap {
    width: usize,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Flood the grid outward from `source`.
    ///
    /// A blocked or out-of-bounds source floods nothing; every cell then
    /// reads [`UNREACHABLE`].
    pub fn flood(grid: &Grid, source: Point) -> Self {
        let width = grid.width() as usize;
        let mut dist = vec![UNREACHABLE; width * grid.height() as usize];
        let mut queue = VecDeque::new();
        let mut nbuf = Vec::with_capacity(4);

        if grid.is_passable(source) {
            dist[source.y as usize * width + source.x as usize] = 0;
            queue.push_back(source);
        }

        while let Some(p) = queue.pop_front() {
            let d = dist[p.y as usize * width + p.x as usize];
            nbuf.clear();
            grid.neighbors(p, &mut nbuf);
            for &np in nbuf.iter() {
                let ni = np.y as usize * width + np.x as usize;
                if dist[ni] == UNREACHABLE {
                    dist[ni] = d + 1;
                    queue.push_back(np);
                }
            }
        }

        Self { width, dist }
    }

    /// Distance from the source to `p`, or [`UNREACHABLE`].
    pub fn at(&self, p: Point) -> i32 {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width {
            return UNREACHABLE;
        }
        self.dist
            .get(p.y as usize * self.width + p.x as usize)
            .copied()
            .unwrap_or(UNREACHABLE)
    }
}
