//! Board module - occupancy grid and placement validity
//!
//! The board is a rows x cols grid where each cell is empty or occupied with a
//! color. Uses a flat vector in row-major order for cache locality.
//! Coordinates: (col, row) where col grows left to right and row grows top to bottom.
//!
//! Placement operations are pure: they take `&self` and return a new board.

use serde::Serialize;

use crate::geometry::bounding_size;
use crate::types::{Cell, CellOffset, ColorId, GRID_COLS, GRID_ROWS, MAX_BOARD_DIM};

/// A valid origin for a shape's bounding box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Placement {
    pub col: i32,
    pub row: i32,
}

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// # Panics
    ///
    /// If either dimension is 0 or larger than [`MAX_BOARD_DIM`]. Validate
    /// user-supplied sizes with [`crate::GameConfig::validate`] first.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            (1..=MAX_BOARD_DIM).contains(&rows) && (1..=MAX_BOARD_DIM).contains(&cols),
            "board dimensions {rows}x{cols} out of range"
        );
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at (col, row). Returns None if out of bounds.
    pub fn get(&self, col: i32, row: i32) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if out of bounds.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.rows {
            return false;
        }
        let start = row * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    pub fn is_col_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return false;
        }
        (0..self.rows).all(|row| self.cells[row * self.cols + col].is_some())
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Occupied cells as (col, row, color), row-major
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, ColorId)> + '_ {
        let cols = self.cols;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|color| ((idx % cols) as i32, (idx / cols) as i32, color))
        })
    }

    /// Whether every offset lands in bounds on an empty cell.
    /// Origins so far out that the target overflows `i32` never fit.
    pub fn can_place(&self, cells: &[CellOffset], col: i32, row: i32) -> bool {
        cells.iter().all(|&offset| {
            target(col, row, offset).is_some_and(|(c, r)| self.is_valid(c, r))
        })
    }

    /// Return a new board with every offset cell set to `color`.
    ///
    /// Does not re-validate; call [`Board::can_place`] first. Offsets falling
    /// outside the board are ignored.
    pub fn place(&self, cells: &[CellOffset], col: i32, row: i32, color: ColorId) -> Board {
        let mut out = self.clone();
        for &offset in cells {
            if let Some((c, r)) = target(col, row, offset) {
                out.set(c, r, Some(color));
            }
        }
        out
    }

    /// Every origin where the shape fits, row-major, up to `max_results`
    pub fn find_placements(&self, cells: &[CellOffset], max_results: usize) -> Vec<Placement> {
        let mut out = Vec::new();
        if cells.is_empty() || max_results == 0 {
            return out;
        }
        let (w, h) = bounding_size(cells);
        let last_row = self.rows as i32 - i32::from(h);
        let last_col = self.cols as i32 - i32::from(w);
        for row in 0..=last_row {
            for col in 0..=last_col {
                if self.can_place(cells, col, row) {
                    out.push(Placement { col, row });
                    if out.len() >= max_results {
                        return out;
                    }
                }
            }
        }
        out
    }

    /// Whether the shape fits anywhere on the board
    pub fn can_place_anywhere(&self, cells: &[CellOffset]) -> bool {
        !self.find_placements(cells, 1).is_empty()
    }

    /// Get a reference to the internal cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Cells as rows, for display and tests
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    /// Build from rows of cells.
    ///
    /// # Panics
    ///
    /// If rows are ragged or the dimensions are out of range.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut board = Board::new(height, width);
        assert!(rows.iter().all(|row| row.len() == width), "ragged rows");
        board.cells = rows.into_iter().flatten().collect();
        board
    }
}

/// Absolute (col, row) of an offset from an origin, `None` on overflow
fn target(col: i32, row: i32, (dx, dy): CellOffset) -> Option<(i32, i32)> {
    Some((col.checked_add(i32::from(dx))?, row.checked_add(i32::from(dy))?))
}

impl Default for Board {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS)
    }
}
