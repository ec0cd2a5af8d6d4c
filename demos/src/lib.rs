//! Shared rendering helpers for the pathfinding demos.

pub use render::{format_path, render_to_string};

pub mod render {
    use std::collections::HashSet;

    use navgrid_core::{Grid, Point};

    /// Render the grid as text, overlaying the path and the endpoint markers.
    ///
    /// Precedence per cell: goal `'D'`, then start `'S'`, then path `'*'`,
    /// then the terrain glyph. Every glyph is followed by a single space and
    /// every row ends with a newline.
    pub fn render_to_string(grid: &Grid, start: Point, goal: Point, path: &[Point]) -> String {
        let on_path: HashSet<Point> = path.iter().copied().collect();
        let mut out =
            String::with_capacity((grid.width() as usize * 2 + 1) * grid.height() as usize);
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let p = Point::new(x, y);
                let glyph = if p == goal {
                    'D'
                } else if p == start {
                    'S'
                } else if on_path.contains(&p) {
                    '*'
                } else {
                    grid.at(p).unwrap_or_default().to_char()
                };
                out.push(glyph);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    /// Format a path as one line of `->`-separated cells, start first.
    pub fn format_path(path: &[Point]) -> String {
        let mut out = String::new();
        for (i, p) in path.iter().enumerate() {
            if i > 0 {
                out.push_str(" -> ");
            }
            out.push_str(&p.to_string());
        }
        out
    }
}
