use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use tictactoe_engine::games::tictactoe::{
    Board, GameOutcome, Mark, evaluate, score_moves, select_best_move,
};

fn bench_self_play_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while evaluate(&board) == GameOutcome::InProgress {
        match select_best_move(&board, current_mark) {
            Ok(position) => {
                if board.apply(position, current_mark).is_err() {
                    break;
                }
                current_mark = current_mark.opponent();
            }
            Err(_) => break,
        }
    }
}

fn bench_single_move_empty_board() {
    let board = Board::new();
    let _ = black_box(select_best_move(black_box(&board), Mark::O));
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [(0, Mark::X), (4, Mark::O), (8, Mark::X)];
    for (position, mark) in moves {
        let _ = board.apply(position, mark);
    }
    let _ = black_box(select_best_move(black_box(&board), Mark::O));
}

fn bench_score_moves_after_opening() {
    let mut board = Board::new();
    let _ = board.apply(4, Mark::X);
    let _ = black_box(score_moves(black_box(&board), Mark::O));
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("self_play_game", |b| b.iter(bench_self_play_game));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("score_moves_after_center_opening", |b| {
        b.iter(bench_score_moves_after_opening)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
