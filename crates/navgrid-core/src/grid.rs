//! The obstacle grid: passability cells with bounds and neighbour queries.
//!
//! [`Grid`] owns a fixed-size rectangle of [`Cell`] values. Dimensions are
//! set at construction; a search borrows the grid read-only for its whole
//! run, so passability never changes underneath it.

use std::fmt;

use crate::geom::Point;

/// A single grid cell: either free ground or an impassable wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Passable ground.
    #[default]
    Free,
    /// An impassable obstacle.
    Wall,
}

impl Cell {
    /// Whether the cell can be entered.
    #[inline]
    pub const fn is_passable(self) -> bool {
        matches!(self, Self::Free)
    }

    /// The character used for this cell in text maps.
    pub const fn to_char(self) -> char {
        match self {
            Self::Free => '.',
            Self::Wall => '|',
        }
    }

    /// Parse a text-map character.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Free),
            '|' => Some(Self::Wall),
            _ => None,
        }
    }
}

/// A fixed-size rectangular grid of [`Cell`] values in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new all-free grid. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let cells = vec![Cell::default(); (width * height) as usize];
        Self {
            width,
            height,
            cells,
        }
    }

    /// Width of the grid in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether `p` is inside the grid and free to enter.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        match self.at(p) {
            Some(cell) => cell.is_passable(),
            None => false,
        }
    }

    /// Get the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.in_bounds(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Set the cell at `p`. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.in_bounds(p) {
            return;
        }
        let idx = self.index(p);
        self.cells[idx] = cell;
    }

    /// Fill the entire grid with the given cell.
    pub fn fill(&mut self, cell: Cell) {
        for c in self.cells.iter_mut() {
            *c = cell;
        }
    }

    /// Count how many cells equal the given cell.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Append the passable cells 4-adjacent to `p` to `buf`, in up, down,
    /// left, right order.
    ///
    /// Out-of-bounds and wall neighbours are skipped. The buffer is not
    /// cleared; that is the caller's business.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for np in p.neighbors4() {
            if self.is_passable(np) {
                buf.push(np);
            }
        }
    }

    /// Parse a grid from ASCII rows separated by `'\n'`.
    ///
    /// Leading and trailing whitespace is trimmed from the whole string.
    /// Every row must have the same width, and every character must be a
    /// map glyph (`'.'` free, `'|'` wall).
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::new();
        let mut width: i32 = -1;
        let mut y: i32 = 0;
        for line in s.split('\n') {
            let mut x: i32 = 0;
            for ch in line.chars() {
                let Some(cell) = Cell::from_char(ch) else {
                    return Err(GridError::InvalidGlyph {
                        ch,
                        pos: Point::new(x, y),
                    });
                };
                cells.push(cell);
                x += 1;
            }
            if width < 0 {
                width = x;
            } else if x != width {
                return Err(GridError::RaggedRow {
                    row: y as usize,
                    width: x as usize,
                    expected: width as usize,
                });
            }
            y += 1;
        }
        Ok(Self {
            width,
            height: y,
            cells,
        })
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            if y > 0 {
                f.write_str("\n")?;
            }
            for x in 0..self.width {
                let cell = self.cells[self.index(Point::new(x, y))];
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input had no rows.
    Empty,
    /// A row's width differed from the first row's.
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// A character that is not a map glyph was found.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: empty input"),
            Self::RaggedRow {
                row,
                width,
                expected,
            } => {
                write!(f, "grid: row {row} has width {width}, expected {expected}")
            }
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "grid: invalid glyph {ch:?} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}
