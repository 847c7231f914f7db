use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;
use engine::game::{
    best_moves, calculate_bot_move, check_win, Board, SessionRng, BOT_MARK, HUMAN_MARK,
};

fn bench_search_empty_board() {
    best_moves(&Board::new(), HUMAN_MARK);
}

fn bench_opening_reply() {
    let mut board = Board::new();
    board.place(4, HUMAN_MARK);
    best_moves(&board, BOT_MARK);
}

fn bench_full_round_self_play() {
    let mut rng = SessionRng::new(42);
    let mut board = Board::new();
    let mut to_move = HUMAN_MARK;

    while check_win(&board).is_none() && !board.is_full() {
        let Some(index) = calculate_bot_move(&board, to_move, &mut rng) else {
            break;
        };
        board.place(index, to_move);
        to_move = to_move.opponent();
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("search_empty_board", |b| b.iter(bench_search_empty_board));

    group.bench_function("opening_reply", |b| b.iter(bench_opening_reply));

    group.bench_function("full_round_self_play", |b| b.iter(bench_full_round_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
