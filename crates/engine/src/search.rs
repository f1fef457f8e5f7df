use arrayvec::ArrayVec;

use crate::core::clears::compute_clears;
use crate::core::geometry::{apply_orientation, canonical, Cells};
use crate::core::scoring::calculate_move_score;
use crate::core::{Board, GameState, ShapeInstance};
use crate::types::Orientation;

/// A legal placement and the score it would earn immediately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub slot: usize,
    pub orientation: Orientation,
    pub col: i32,
    pub row: i32,
    pub score: u32,
    pub combo: u32,
    pub edge: u32,
}

/// The distinct orientations a shape reaches through the rotate cycle.
///
/// Orientations producing the same cell set as an earlier one are skipped,
/// so a square yields one entry and an L yields eight.
pub fn cycle_orientations(shape: &ShapeInstance) -> ArrayVec<(Orientation, Cells), 8> {
    let mut out: ArrayVec<(Orientation, Cells), 8> = ArrayVec::new();
    let mut seen: ArrayVec<Cells, 8> = ArrayVec::new();
    for index in 0..8 {
        let orientation = Orientation::from_cycle_index(index);
        let cells = apply_orientation(shape.shape.cells, orientation);
        let key = canonical(&cells);
        if !seen.contains(&key) {
            seen.push(key);
            out.push((orientation, cells));
        }
    }
    out
}

/// (score, combo, edge) for placing `cells` at (col, row)
fn score_at(
    board: &Board,
    shape: &ShapeInstance,
    cells: &Cells,
    col: i32,
    row: i32,
) -> (u32, u32, u32) {
    let placed = board.place(cells, col, row, shape.color);
    let scan = compute_clears(&placed);
    let combo = scan.combo();
    let edge = scan.edge_count();
    let score = calculate_move_score(cells.len() as u32, combo, edge).total;
    (score, combo, edge)
}

/// Every legal (slot, orientation, origin) on the current board.
///
/// Ordered by slot, then orientation cycle, then row-major origin. Empty
/// while the controller is busy.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    if state.is_busy() {
        return moves;
    }
    let board = state.board();
    let max = board.rows() * board.cols();
    for (slot, shape) in state.queue().items().iter().enumerate() {
        for (orientation, cells) in cycle_orientations(shape) {
            for origin in board.find_placements(&cells, max) {
                let (score, combo, edge) = score_at(board, shape, &cells, origin.col, origin.row);
                moves.push(Move {
                    slot,
                    orientation,
                    col: origin.col,
                    row: origin.row,
                    score,
                    combo,
                    edge,
                });
            }
        }
    }
    moves
}

/// Whether any queued shape fits anywhere in any orientation
pub fn has_legal_move(state: &GameState) -> bool {
    if state.is_busy() {
        return false;
    }
    let board = state.board();
    state.queue().items().iter().any(|shape| {
        cycle_orientations(shape)
            .iter()
            .any(|(_, cells)| board.can_place_anywhere(cells))
    })
}

/// Highest immediate score; ties go to the lowest slot, then row, then col
pub fn best_move(state: &GameState) -> Option<Move> {
    legal_moves(state).into_iter().min_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.slot.cmp(&b.slot))
            .then(a.row.cmp(&b.row))
            .then(a.col.cmp(&b.col))
    })
}
