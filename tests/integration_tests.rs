//! Integration tests for full turns through the facade

use edge_shift::core::{Board, Catalog, CommandOutcome, GameConfig, GameState, PlayError, Stats};
use edge_shift::engine::{apply_move, best_move, has_legal_move};
use edge_shift::types::{CascadePhase, ColorId, GameCommand, Hue};

const FILL: ColorId = ColorId::new(Hue::Zinc, 500);

fn only(key: &str) -> GameState {
    let def = *Catalog::extended().get(key).unwrap();
    GameState::with_catalog(GameConfig::default(), Catalog::new(vec![def]).unwrap(), 1).unwrap()
}

fn with_row_gap(state: &mut GameState, row: i32, gap: &[i32]) {
    let mut board = state.board().clone();
    for col in 0..12 {
        if !gap.contains(&col) {
            board.set(col, row, Some(FILL));
        }
    }
    state.set_board(board).unwrap();
}

#[test]
fn test_seeded_games_draw_identical_sequences() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for i in 0..1000 {
        let ka = a.queue().items()[0].key();
        let kb = b.queue().items()[0].key();
        assert_eq!(ka, kb, "draw {}", i);
        // An empty board fits every shape at the origin
        a.set_board(Board::default()).unwrap();
        b.set_board(Board::default()).unwrap();
        a.place_at(0, 0, 0).unwrap();
        b.place_at(0, 0, 0).unwrap();
        a.settle();
        b.settle();
    }
}

#[test]
fn test_score_formula_for_interior_line() {
    let mut state = only("line3");
    with_row_gap(&mut state, 4, &[5, 6, 7]);
    let outcome = state.place_at(0, 5, 4).unwrap();
    assert_eq!(outcome.move_score.total, 103);
    state.settle();
    assert_eq!(state.stats().score, 103);
    assert_eq!(state.stats().lines_cleared_rows, 1);
    assert_eq!(state.stats().max_combo, 1);
    assert!(state.board().is_empty());
}

#[test]
fn test_edge_clear_turn_end_to_end() {
    let mut state = only("single");
    let mut board = state.board().clone();
    for i in 1..12 {
        board.set(i, 0, Some(FILL));
        board.set(0, i, Some(FILL));
    }
    board.set(5, 5, Some(FILL));
    state.set_board(board).unwrap();

    let outcome = state.place_at(0, 0, 0).unwrap();
    assert_eq!(outcome.combo(), 2);
    assert_eq!(outcome.edge_count(), 2);
    assert_eq!(outcome.displacement, (-1, -1));
    // 1 + 200 + 100 + 50
    assert_eq!(outcome.move_score.total, 351);
    assert_eq!(
        outcome.clear_kind().map(|k| k.to_string()).as_deref(),
        Some("DOUBLE CLEAR!")
    );

    assert_eq!(state.phase(), CascadePhase::Placed);
    state.advance_phase().unwrap();
    assert_eq!(state.board().occupied_count(), 1);
    state.advance_phase().unwrap();
    assert!(state.board().is_occupied(4, 4));
    assert_eq!(state.stats().edge_shifts, 2);
    assert!(!state.is_busy());
}

#[test]
fn test_queue_refill_is_atomic_through_controller() {
    let mut state = only("single");
    let mut lens = Vec::new();
    for i in 0..8 {
        state.place_at(0, i, 2).unwrap();
        lens.push(state.queue().len());
    }
    assert_eq!(lens, vec![3, 2, 1, 4, 3, 2, 1, 4]);
}

#[test]
fn test_reset_keeps_seed_and_replays_queue() {
    let mut state = GameState::new(99);
    let first: Vec<_> = state.queue().items().iter().map(|s| s.key()).collect();
    state.place_at(0, 0, 0).unwrap();
    state.settle();
    state.reset_keeping_seed();
    let again: Vec<_> = state.queue().items().iter().map(|s| s.key()).collect();
    assert_eq!(first, again);
    assert_eq!(state.seed(), 99);
    assert_eq!(state.stats(), &Stats::default());
}

#[test]
fn test_command_stream() {
    let mut state = only("line2");
    let commands = [
        GameCommand::Select { slot: 2 },
        GameCommand::Rotate { slot: 2 },
        GameCommand::Hover { slot: 2, col: 11, row: 10 },
        GameCommand::Place { slot: 2, col: 11, row: 10 },
    ];
    let mut outcomes = Vec::new();
    for command in commands {
        outcomes.push(state.apply_command(command).unwrap());
    }
    match &outcomes[2] {
        CommandOutcome::Preview(preview) => assert!(preview.valid),
        other => panic!("expected preview, got {:?}", other),
    }
    assert!(state.board().is_occupied(11, 11));
    assert_eq!(state.queue().selected(), 2);
}

#[test]
fn test_busy_flag_blocks_until_settled() {
    let mut state = only("single");
    with_row_gap(&mut state, 6, &[6]);
    state.place_at(0, 6, 6).unwrap();
    assert_eq!(state.place_at(0, 0, 0), Err(PlayError::Busy));
    assert_eq!(
        state.apply_command(GameCommand::Mirror { slot: 0 }),
        Err(PlayError::Busy)
    );
    state.settle();
    assert!(state.place_at(0, 0, 0).is_ok());
}

#[test]
fn test_greedy_autoplay_runs_to_completion() {
    let mut state = GameState::new(7);
    let mut played = 0;
    while played < 300 {
        let Some(mv) = best_move(&state) else {
            assert!(!has_legal_move(&state));
            break;
        };
        apply_move(&mut state, &mv).unwrap();
        state.settle();
        played += 1;
        // Settled boards never keep a full line
        for row in 0..12 {
            assert!(!state.board().is_row_full(row));
        }
    }
    assert_eq!(state.stats().moves, played);
    assert!(state.stats().score >= state.stats().total_placed_blocks);
}

#[test]
fn test_extreme_origins_are_rejected_without_change() {
    let mut state = only("J4");
    let before = state.snapshot();
    for (col, row) in [(i32::MAX, 0), (0, i32::MAX), (i32::MIN, 0), (i32::MAX, i32::MIN)] {
        assert_eq!(
            state.place_at(0, col, row),
            Err(PlayError::InvalidPlacement { col, row })
        );
        let preview = state.hover_preview(0, col, row).unwrap();
        assert!(!preview.valid);
    }

    let hover: GameCommand =
        serde_json::from_str(r#"{"type":"hover","slot":0,"col":2147483647,"row":0}"#).unwrap();
    match state.apply_command(hover).unwrap() {
        CommandOutcome::Preview(preview) => assert!(!preview.valid),
        other => panic!("expected preview, got {:?}", other),
    }
    let place: GameCommand =
        serde_json::from_str(r#"{"type":"place","slot":0,"col":-2147483648,"row":5}"#).unwrap();
    assert_eq!(
        state.apply_command(place),
        Err(PlayError::InvalidPlacement { col: i32::MIN, row: 5 })
    );
    assert_eq!(state.snapshot(), before);
}
