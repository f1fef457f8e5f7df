//! Board, clear detection and edge-shift scenarios on the canonical 12x12 board

use edge_shift::core::{
    apply_clears_and_shifts, compute_clears, resolve_all_clears, Board, Placement,
};
use edge_shift::types::{ColorId, Hue, GRID_COLS, GRID_ROWS};

const C: ColorId = ColorId::new(Hue::Amber, 500);

fn fill_row(board: &mut Board, row: i32) {
    for col in 0..GRID_COLS as i32 {
        board.set(col, row, Some(C));
    }
}

fn fill_col(board: &mut Board, col: i32) {
    for row in 0..GRID_ROWS as i32 {
        board.set(col, row, Some(C));
    }
}

#[test]
fn test_empty_board() {
    let board = Board::default();
    assert_eq!((board.rows(), board.cols()), (12, 12));
    assert!(board.is_empty());
    for row in 0..12 {
        assert!(!board.is_row_full(row));
    }
}

#[test]
fn test_can_place_rejects_overlap() {
    let mut board = Board::default();
    board.set(4, 4, Some(C));
    let square = [(0, 0), (1, 0), (0, 1), (1, 1)];
    assert!(!board.can_place(&square, 3, 3));
    assert!(!board.can_place(&square, 4, 4));
    assert!(board.can_place(&square, 5, 5));
}

#[test]
fn test_can_place_rejects_out_of_bounds() {
    let board = Board::default();
    let line = [(0, 0), (1, 0), (2, 0)];
    assert!(board.can_place(&line, 9, 11));
    assert!(!board.can_place(&line, 10, 0));
    assert!(!board.can_place(&line, -1, 0));
    assert!(!board.can_place(&line, 0, 12));
}

#[test]
fn test_place_commits_every_cell_or_none() {
    let board = Board::default();
    let corner = [(0, 0), (1, 0), (0, 1)];
    let placed = board.place(&corner, 2, 2, C);
    assert_eq!(placed.occupied_count(), 3);
    assert_eq!(placed.get(3, 2), Some(Some(C)));
    assert_eq!(placed.get(3, 3), Some(None));
}

#[test]
fn test_find_placements_scans_row_major() {
    let mut board = Board::new(3, 3);
    board.set(0, 0, Some(C));
    let line2 = [(0, 0), (1, 0)];
    let found = board.find_placements(&line2, 100);
    assert_eq!(found[0], Placement { col: 1, row: 0 });
    // 3 rows x 2 origins, minus the blocked (0, 0)
    assert_eq!(found.len(), 5);
    assert_eq!(board.find_placements(&line2, 2).len(), 2);
}

#[test]
fn test_can_place_anywhere() {
    let mut board = Board::new(4, 4);
    for row in 0..4 {
        for col in 0..4 {
            if (row, col) != (2, 2) {
                board.set(col, row, Some(C));
            }
        }
    }
    assert!(board.can_place_anywhere(&[(0, 0)]));
    assert!(!board.can_place_anywhere(&[(0, 0), (1, 0)]));
}

#[test]
fn test_internal_row_clear_produces_no_shift() {
    let mut board = Board::default();
    fill_row(&mut board, 5);
    let scan = compute_clears(&board);
    assert_eq!(scan.full_rows.as_slice(), &[5]);
    assert_eq!(scan.shifts.top, 0);
    assert_eq!(scan.shifts.bottom, 0);
    assert_eq!(scan.shifts.left, 0);
    assert_eq!(scan.shifts.right, 0);
}

#[test]
fn test_edge_clear_produces_unit_shift() {
    let mut board = Board::default();
    fill_row(&mut board, 0);
    fill_col(&mut board, 0);
    board.set(5, 5, Some(C));

    let scan = compute_clears(&board);
    assert_eq!(scan.shifts.top, 1);
    assert_eq!(scan.shifts.left, 1);

    let out = apply_clears_and_shifts(&board, &scan);
    assert!(out.is_occupied(4, 4));
    assert!(!out.is_occupied(5, 5));
}

#[test]
fn test_opposite_edge_cancellation() {
    let mut board = Board::default();
    fill_row(&mut board, 0);
    fill_row(&mut board, 11);
    let scan = compute_clears(&board);
    assert_eq!(scan.full_rows.len(), 2);
    assert_eq!(scan.displacement().1, 0);
}

#[test]
fn test_no_wrap_after_top_left_clear() {
    let mut board = Board::default();
    fill_row(&mut board, 0);
    fill_col(&mut board, 0);
    board.set(1, 6, Some(C));
    board.set(6, 1, Some(C));

    let scan = compute_clears(&board);
    assert_eq!(scan.displacement(), (-1, -1));
    let out = apply_clears_and_shifts(&board, &scan);
    assert!(out.is_occupied(0, 5));
    assert!(out.is_occupied(5, 0));
    assert_eq!(out.occupied_count(), 2);
    for i in 0..12 {
        assert!(!out.is_occupied(11, i));
        assert!(!out.is_occupied(i, 11));
    }
}

#[test]
fn test_right_and_bottom_clears_move_content_toward_them() {
    let mut board = Board::default();
    fill_row(&mut board, 11);
    fill_col(&mut board, 11);
    board.set(5, 5, Some(C));
    let out = resolve_all_clears(&board).board;
    assert!(out.is_occupied(6, 6));
    assert_eq!(out.occupied_count(), 1);
}

#[test]
fn test_two_row_edge_run_shifts_two() {
    let mut board = Board::default();
    fill_row(&mut board, 0);
    fill_row(&mut board, 1);
    board.set(3, 8, Some(C));
    let cascade = resolve_all_clears(&board);
    assert_eq!(cascade.edge, 2);
    assert!(cascade.board.is_occupied(3, 6));
}
