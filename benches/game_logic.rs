use criterion::{black_box, criterion_group, criterion_main, Criterion};
use edge_shift::core::{compute_clears, resolve_all_clears, Board, GameState};
use edge_shift::engine::{best_move, legal_moves};
use edge_shift::types::{ColorId, Hue};

const C: ColorId = ColorId::new(Hue::Amber, 500);

/// Top row and left column full, plus some scattered debris
fn edge_board() -> Board {
    let mut board = Board::default();
    for i in 0..12 {
        board.set(i, 0, Some(C));
        board.set(0, i, Some(C));
    }
    for i in 2..10 {
        board.set(i, 12 - i, Some(C));
    }
    board
}

fn bench_place(c: &mut Criterion) {
    c.bench_function("place_and_settle", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(12345));
            state.place_at(0, 0, 0).ok();
            state.settle();
        })
    });
}

fn bench_compute_clears(c: &mut Criterion) {
    let board = edge_board();
    c.bench_function("compute_clears", |b| b.iter(|| compute_clears(black_box(&board))));
}

fn bench_cascade(c: &mut Criterion) {
    let board = edge_board();
    c.bench_function("resolve_all_clears", |b| {
        b.iter(|| resolve_all_clears(black_box(&board)))
    });
}

fn bench_search(c: &mut Criterion) {
    let state = GameState::new(777);
    c.bench_function("legal_moves_empty_board", |b| {
        b.iter(|| legal_moves(black_box(&state)))
    });
    c.bench_function("best_move_empty_board", |b| {
        b.iter(|| best_move(black_box(&state)))
    });
}

criterion_group!(benches, bench_place, bench_compute_clears, bench_cascade, bench_search);
criterion_main!(benches);
