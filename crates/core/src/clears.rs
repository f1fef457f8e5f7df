//! Clears module - full-line detection, edge shifts and cascade resolution
//!
//! A row or column is full when every cell in it is occupied. Full lines
//! touching a board edge in an unbroken run from that edge produce an edge
//! shift; everything left on the board then slides by
//! `(right - left, bottom - top)`. Cells pushed past the border are dropped.
//!
//! Every function here is pure and returns a new [`Board`].

use arrayvec::ArrayVec;
use log::trace;
use serde::Serialize;

use crate::board::Board;
use crate::scoring::calculate_clear_score;
use crate::types::MAX_BOARD_DIM;

/// Indices of full rows or full columns, ascending
pub type LineSet = ArrayVec<usize, MAX_BOARD_DIM>;

/// Number of contiguous full lines running inward from each edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EdgeShifts {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl EdgeShifts {
    /// Sum over all four sides (the edge-shift count used for scoring)
    pub fn total(&self) -> u32 {
        self.top + self.bottom + self.left + self.right
    }

    /// Net translation (dx, dy). Opposite sides cancel.
    pub fn displacement(&self) -> (i32, i32) {
        (
            self.right as i32 - self.left as i32,
            self.bottom as i32 - self.top as i32,
        )
    }
}

/// Result of scanning a board for full lines
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ClearScan {
    pub full_rows: LineSet,
    pub full_cols: LineSet,
    pub shifts: EdgeShifts,
}

impl ClearScan {
    /// Full rows plus full columns
    pub fn combo(&self) -> u32 {
        (self.full_rows.len() + self.full_cols.len()) as u32
    }

    pub fn edge_count(&self) -> u32 {
        self.shifts.total()
    }

    pub fn displacement(&self) -> (i32, i32) {
        self.shifts.displacement()
    }

    /// Nothing is full
    pub fn is_empty(&self) -> bool {
        self.full_rows.is_empty() && self.full_cols.is_empty()
    }
}

/// Find full rows and columns, then measure the run of full lines at each edge.
///
/// A full line that does not connect to its edge through other full lines
/// is still cleared but contributes nothing to any shift.
pub fn compute_clears(board: &Board) -> ClearScan {
    let rows = board.rows();
    let cols = board.cols();
    let full_rows: LineSet = (0..rows).filter(|&r| board.is_row_full(r)).collect();
    let full_cols: LineSet = (0..cols).filter(|&c| board.is_col_full(c)).collect();

    let shifts = EdgeShifts {
        top: edge_run(&full_rows, 0..rows),
        bottom: edge_run(&full_rows, (0..rows).rev()),
        left: edge_run(&full_cols, 0..cols),
        right: edge_run(&full_cols, (0..cols).rev()),
    };

    ClearScan {
        full_rows,
        full_cols,
        shifts,
    }
}

fn edge_run(full: &[usize], lines: impl Iterator<Item = usize>) -> u32 {
    lines.take_while(|line| full.contains(line)).count() as u32
}

/// Empty every cell in a full row or a full column; nothing moves
pub fn clear_only(board: &Board, full_rows: &[usize], full_cols: &[usize]) -> Board {
    let mut out = board.clone();
    for &row in full_rows {
        for col in 0..board.cols() {
            out.set(col as i32, row as i32, None);
        }
    }
    for &col in full_cols {
        for row in 0..board.rows() {
            out.set(col as i32, row as i32, None);
        }
    }
    out
}

/// Move every occupied cell by (dx, dy), dropping cells that leave the board
pub fn translate(board: &Board, dx: i32, dy: i32) -> Board {
    if dx == 0 && dy == 0 {
        return board.clone();
    }
    let mut out = Board::new(board.rows(), board.cols());
    for (col, row, color) in board.occupied() {
        // Out-of-bounds writes are rejected by `set`, which is the clipping.
        out.set(col + dx, row + dy, Some(color));
    }
    out
}

/// Clear the scanned lines, then translate by the scan's displacement
pub fn apply_clears_and_shifts(board: &Board, scan: &ClearScan) -> Board {
    let cleared = clear_only(board, &scan.full_rows, &scan.full_cols);
    let (dx, dy) = scan.displacement();
    if dx == 0 && dy == 0 {
        return cleared;
    }
    translate(&cleared, dx, dy)
}

/// Aggregate of one or more clear passes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cascade {
    /// Board after the last pass; has no full lines
    pub board: Board,
    pub rows: u32,
    pub cols: u32,
    pub edge: u32,
    pub score: u32,
    pub max_combo: u32,
    /// Passes that cleared something
    pub passes: u32,
}

impl Cascade {
    pub fn is_empty(&self) -> bool {
        self.passes == 0
    }
}

/// Clear and shift repeatedly until nothing is full.
///
/// Every pass that runs empties at least one full line, so the occupied count
/// strictly decreases and the loop ends within rows + cols passes.
pub fn resolve_all_clears(board: &Board) -> Cascade {
    let mut cascade = Cascade {
        board: board.clone(),
        rows: 0,
        cols: 0,
        edge: 0,
        score: 0,
        max_combo: 0,
        passes: 0,
    };

    loop {
        let scan = compute_clears(&cascade.board);
        if scan.is_empty() {
            break;
        }
        let combo = scan.combo();
        let edge = scan.edge_count();
        let pass_score = calculate_clear_score(combo, edge).total;

        cascade.passes += 1;
        cascade.rows += scan.full_rows.len() as u32;
        cascade.cols += scan.full_cols.len() as u32;
        cascade.edge += edge;
        cascade.score = cascade.score.saturating_add(pass_score);
        cascade.max_combo = cascade.max_combo.max(combo);

        trace!(
            "cascade pass {}: rows={:?} cols={:?} shifts={:?} score={}",
            cascade.passes,
            scan.full_rows,
            scan.full_cols,
            scan.shifts,
            pass_score
        );

        cascade.board = apply_clears_and_shifts(&cascade.board, &scan);
    }

    cascade
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorId, Hue};

    const C: ColorId = ColorId::new(Hue::Sky, 400);

    fn fill_row(board: &mut Board, row: i32) {
        for col in 0..board.cols() as i32 {
            board.set(col, row, Some(C));
        }
    }

    fn fill_col(board: &mut Board, col: i32) {
        for row in 0..board.rows() as i32 {
            board.set(col, row, Some(C));
        }
    }

    #[test]
    fn empty_board_has_no_clears() {
        let scan = compute_clears(&Board::default());
        assert!(scan.is_empty());
        assert_eq!(scan.shifts, EdgeShifts::default());
    }

    #[test]
    fn interior_row_clears_without_shift() {
        let mut board = Board::default();
        fill_row(&mut board, 6);
        let scan = compute_clears(&board);
        assert_eq!(scan.full_rows.as_slice(), &[6]);
        assert!(scan.full_cols.is_empty());
        assert_eq!(scan.shifts, EdgeShifts::default());
        assert_eq!(scan.displacement(), (0, 0));
    }

    #[test]
    fn edge_run_stops_at_first_gap() {
        let mut board = Board::default();
        fill_row(&mut board, 0);
        fill_row(&mut board, 1);
        fill_row(&mut board, 3);
        let scan = compute_clears(&board);
        assert_eq!(scan.full_rows.as_slice(), &[0, 1, 3]);
        assert_eq!(scan.shifts.top, 2);
        assert_eq!(scan.shifts.bottom, 0);
    }

    #[test]
    fn top_left_clear_moves_interior_cell_toward_cleared_edges() {
        let mut board = Board::default();
        fill_row(&mut board, 0);
        fill_col(&mut board, 0);
        board.set(5, 5, Some(C));

        let scan = compute_clears(&board);
        assert_eq!(scan.shifts.top, 1);
        assert_eq!(scan.shifts.left, 1);
        assert_eq!(scan.displacement(), (-1, -1));

        let out = apply_clears_and_shifts(&board, &scan);
        assert!(out.is_occupied(4, 4));
        assert!(!out.is_occupied(5, 5));
        assert_eq!(out.occupied_count(), 1);
    }

    #[test]
    fn opposite_edges_cancel() {
        let mut board = Board::default();
        fill_row(&mut board, 0);
        fill_row(&mut board, 11);
        board.set(3, 5, Some(C));
        let scan = compute_clears(&board);
        assert_eq!((scan.shifts.top, scan.shifts.bottom), (1, 1));
        assert_eq!(scan.displacement().1, 0);
        assert_eq!(scan.combo(), 2);

        let out = apply_clears_and_shifts(&board, &scan);
        assert!(out.is_occupied(3, 5));
        assert_eq!(out.occupied_count(), 1);
    }

    #[test]
    fn translate_clips_instead_of_wrapping() {
        let mut board = Board::default();
        board.set(0, 3, Some(C));
        board.set(3, 0, Some(C));
        board.set(6, 6, Some(C));
        let out = translate(&board, -1, -1);
        assert_eq!(out.occupied_count(), 1);
        assert!(out.is_occupied(5, 5));
        assert!(!out.is_occupied(11, 2));
        assert!(!out.is_occupied(2, 11));
    }

    #[test]
    fn clear_only_handles_crossing_lines_once() {
        let mut board = Board::default();
        fill_row(&mut board, 4);
        fill_col(&mut board, 7);
        board.set(1, 1, Some(C));
        let out = clear_only(&board, &[4], &[7]);
        assert_eq!(out.occupied_count(), 1);
        assert!(out.is_occupied(1, 1));
    }

    #[test]
    fn full_board_clears_everything_in_one_pass() {
        let mut board = Board::new(4, 4);
        for row in 0..4 {
            fill_row(&mut board, row);
        }
        let cascade = resolve_all_clears(&board);
        assert!(cascade.board.is_empty());
        assert_eq!(cascade.passes, 1);
        assert_eq!((cascade.rows, cascade.cols), (4, 4));
        assert_eq!(cascade.max_combo, 8);
    }

    #[test]
    fn left_shift_of_two_columns() {
        let mut board = Board::new(6, 6);
        fill_col(&mut board, 0);
        fill_col(&mut board, 1);
        for row in 0..5 {
            board.set(3, row, Some(C));
        }
        board.set(2, 5, Some(C));

        let cascade = resolve_all_clears(&board);
        assert_eq!(cascade.passes, 1);
        assert_eq!(cascade.cols, 2);
        assert_eq!(cascade.edge, 2);
        // (3, r) -> (1, r) and (2, 5) -> (0, 5)
        assert!(cascade.board.is_occupied(0, 5));
        assert!(cascade.board.is_occupied(1, 0));
        assert!(!cascade.board.is_occupied(1, 5));
        assert_eq!(cascade.board.occupied_count(), 6);
    }

    #[test]
    fn shifted_board_empties_the_trailing_edge() {
        let mut board = Board::new(5, 5);
        fill_row(&mut board, 0);
        for col in 0..4 {
            board.set(col, 4, Some(C));
        }
        let scan = compute_clears(&board);
        let out = apply_clears_and_shifts(&board, &scan);
        // dy = -1: the bottom row is always empty after the slide
        assert!((0..5).all(|col| !out.is_occupied(col, 4)));
        assert!(out.is_occupied(0, 3));
        assert!(compute_clears(&out).is_empty());
    }

    #[test]
    fn crossing_edges_cancel_and_clear_in_one_pass() {
        let mut board = Board::new(3, 3);
        fill_col(&mut board, 0);
        fill_col(&mut board, 2);
        let cascade = resolve_all_clears(&board);
        assert_eq!(cascade.passes, 1);
        assert!(cascade.board.is_empty());
        assert_eq!(cascade.edge, 2);
    }

    #[test]
    fn pass_scoring_matches_clear_formula() {
        let mut board = Board::default();
        fill_row(&mut board, 0);
        fill_row(&mut board, 5);
        let cascade = resolve_all_clears(&board);
        // combo 2, edge 1: 200 + 50 + 50
        assert_eq!(cascade.score, 300);
        assert_eq!(cascade.max_combo, 2);
    }
}
