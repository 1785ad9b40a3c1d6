//! Carve a maze into a wall-filled grid with Randomized Prim's algorithm
//!
//! The grid is treated as a step-2 lattice: cells two apart are joined by
//! carving the single connector cell between them, which leaves one cell
//! wide corridors separated by one cell wide walls.
//!
//! # Examples
//! ```
//! use prim_maze::{Cell, MazeGrid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = MazeGrid::new(9, 7).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let report = grid.generate_maze(&mut rng);
//!
//! assert_eq!(grid.cell(report.start), Cell::Path);
//! let text = grid.render();
//! assert_eq!(text.lines().count(), 7);
//! assert!(text.lines().all(|line| line.chars().count() == 9));
//! ```

use std::fmt;

use itertools::Itertools;

pub mod maze_generator;
pub use maze_generator::{Frontier, GenerationReport, PrimCarver};

/// Grid width used by the `generate-maze` binary
pub const DEFAULT_WIDTH: usize = 30;
/// Grid height used by the `generate-maze` binary
pub const DEFAULT_HEIGHT: usize = 20;

/// State of a single grid square
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Solid, not walkable
    #[default]
    Wall,
    /// Carved passage
    Path,
}

impl Cell {
    pub const WALL_GLYPH: char = '█';
    pub const PATH_GLYPH: char = ' ';

    /// Character used for this cell in the text rendering
    pub fn glyph(self) -> char {
        match self {
            Cell::Wall => Self::WALL_GLYPH,
            Cell::Path => Self::PATH_GLYPH,
        }
    }
}

/// Location in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift by a signed offset, `None` if either coordinate would go negative.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

/// Errors raised when building a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero.
    InvalidDimension {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "invalid maze dimensions {width}x{height}: both must be positive"
                )
            }
        }
    }
}

impl std::error::Error for MazeError {}

/// Wall/path state of a `width` x `height` grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGrid {
    /// Row-major cell states
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl MazeGrid {
    /// Step-2 offsets as (row, col): left, right, up, down
    const LATTICE_STEPS: [(isize, isize); 4] = [(0, -2), (0, 2), (-2, 0), (2, 0)];

    /// Create a grid filled with walls.
    ///
    /// Returns [MazeError::InvalidDimension] if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        Ok(Self {
            cells: vec![Cell::Wall; width * height],
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `pos` lies inside the grid
    pub fn is_in_grid(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    /// Cell state at `pos`.
    ///
    /// # Panics
    /// If `pos` is outside the grid. Callers must check with
    /// [Self::is_in_grid] first.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[self.index_of(pos)]
    }

    /// Overwrite the cell state at `pos`.
    ///
    /// # Panics
    /// If `pos` is outside the grid.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) {
        let idx = self.index_of(pos);
        self.cells[idx] = cell;
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(
            self.is_in_grid(pos),
            "position {pos:?} outside {}x{} grid",
            self.width,
            self.height
        );
        pos.row * self.width + pos.col
    }

    /// In-grid positions two steps away (left, right, up, down) whose state
    /// equals `cell`.
    pub fn frontier_matching(&self, pos: Position, cell: Cell) -> Vec<Position> {
        Self::LATTICE_STEPS
            .iter()
            .filter_map(|&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(|&p| self.is_in_grid(p) && self.cell(p) == cell)
            .collect()
    }

    /// Connector cell between two lattice positions two steps apart.
    ///
    /// Returns `a` if the positions are equal.
    pub fn midpoint_between(a: Position, b: Position) -> Position {
        if a.row != b.row {
            Position::new(a.row.min(b.row) + 1, a.col)
        } else if a.col != b.col {
            Position::new(a.row, a.col.min(b.col) + 1)
        } else {
            a
        }
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Number of carved cells
    pub fn path_count(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Path).count()
    }

    /// Text rendering: one line per row, wall glyph or space per cell
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|c| c.glyph()).join(""))
            .join("\n")
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
