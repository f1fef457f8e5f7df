//! Scoring module - move score, clear-pass score and cumulative statistics
//!
//! A placement scores `cells * 1 + combo * 100 + edge * 50 + (combo - 1) * 50`
//! (the last term only when combo > 1), awarded as soon as the shape lands.
//! Cascade passes after the first score the same way without the cell term.

use serde::Serialize;

use crate::clears::{Cascade, ClearScan};
use crate::types::{CELL_POINTS, EDGE_SHIFT_POINTS, LINE_POINTS, MULTI_LINE_BONUS};

/// Score calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreResult {
    /// Points for the placed cells
    pub placement: u32,
    /// Points for the full lines
    pub lines: u32,
    /// Points for the edge-shift count
    pub edge: u32,
    /// Bonus for every line beyond the first
    pub multi_line: u32,
    pub total: u32,
}

/// Bonus for clearing more than one line in a single evaluation
pub fn calculate_multi_line_bonus(combo: u32) -> u32 {
    if combo > 1 {
        (combo - 1) * MULTI_LINE_BONUS
    } else {
        0
    }
}

/// Score of one clear evaluation (no placement term)
pub fn calculate_clear_score(combo: u32, edge: u32) -> ScoreResult {
    let lines = combo * LINE_POINTS;
    let edge = edge * EDGE_SHIFT_POINTS;
    let multi_line = calculate_multi_line_bonus(combo);
    ScoreResult {
        placement: 0,
        lines,
        edge,
        multi_line,
        total: lines + edge + multi_line,
    }
}

/// Immediate score for a placement
pub fn calculate_move_score(placed_cells: u32, combo: u32, edge: u32) -> ScoreResult {
    let clear = calculate_clear_score(combo, edge);
    let placement = placed_cells * CELL_POINTS;
    ScoreResult {
        placement,
        total: clear.total + placement,
        ..clear
    }
}

/// Cumulative statistics for a game.
///
/// Every field only grows until the game is reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub moves: u32,
    pub score: u32,
    pub total_placed_blocks: u32,
    pub lines_cleared_rows: u32,
    pub lines_cleared_cols: u32,
    pub edge_shifts: u32,
    pub max_combo: u32,
}

impl Stats {
    /// Fold a delta in; `max_combo` takes the maximum, everything else adds
    pub fn apply(&mut self, delta: &StatsDelta) {
        self.moves = self.moves.saturating_add(delta.moves);
        self.score = self.score.saturating_add(delta.score);
        self.total_placed_blocks = self.total_placed_blocks.saturating_add(delta.placed_blocks);
        self.lines_cleared_rows = self.lines_cleared_rows.saturating_add(delta.rows);
        self.lines_cleared_cols = self.lines_cleared_cols.saturating_add(delta.cols);
        self.edge_shifts = self.edge_shifts.saturating_add(delta.edge_shifts);
        self.max_combo = self.max_combo.max(delta.max_combo);
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared_rows + self.lines_cleared_cols
    }
}

/// Stat changes contributed by one phase of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsDelta {
    pub moves: u32,
    pub score: u32,
    pub placed_blocks: u32,
    pub rows: u32,
    pub cols: u32,
    pub edge_shifts: u32,
    pub max_combo: u32,
}

impl StatsDelta {
    /// Delta awarded the moment a shape lands
    pub fn for_move(placed_cells: u32, scan: &ClearScan) -> Self {
        let combo = scan.combo();
        let edge = scan.edge_count();
        Self {
            moves: 1,
            score: calculate_move_score(placed_cells, combo, edge).total,
            placed_blocks: placed_cells,
            rows: scan.full_rows.len() as u32,
            cols: scan.full_cols.len() as u32,
            edge_shifts: edge,
            max_combo: combo,
        }
    }

    /// Delta from cascade passes that follow the initial clear
    pub fn for_cascade(cascade: &Cascade) -> Self {
        Self {
            moves: 0,
            score: cascade.score,
            placed_blocks: 0,
            rows: cascade.rows,
            cols: cascade.cols,
            edge_shifts: cascade.edge,
            max_combo: cascade.max_combo,
        }
    }
}
