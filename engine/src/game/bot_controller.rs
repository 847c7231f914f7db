use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Mark, ScoredMove, BOT_MARK, HUMAN_MARK};
use super::win_detector::has_won;

/// Minimax values, seen from the bot. Exactly these three values: the engine
/// is indifferent to winning sooner rather than later.
pub const BOT_WIN_SCORE: i32 = 10;
pub const BOT_LOSS_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

/// Picks uniformly at random among the equally-best moves for `mark`.
/// The only nondeterminism in the engine.
pub fn calculate_bot_move(board: &Board, mark: Mark, rng: &mut SessionRng) -> Option<usize> {
    let candidates = best_moves(board, mark);
    rng.choose(&candidates).map(|chosen| chosen.index)
}

/// Exhaustive minimax over every legal continuation. Returns ALL moves tied
/// at the extremal score (maximal for the bot, minimal for the human), so the
/// caller can tie-break at random. Empty only when the board has no legal
/// move left.
pub fn best_moves(board: &Board, mark: Mark) -> Vec<ScoredMove> {
    let mut scratch = *board;
    let mut scored = Vec::new();

    for index in board.available_moves() {
        scratch.place(index, mark);
        let score = minimax(&mut scratch, mark.opponent());
        scratch.clear(index);
        scored.push(ScoredMove { index, score });
    }

    let best = if mark == BOT_MARK {
        scored.iter().map(|candidate| candidate.score).max()
    } else {
        scored.iter().map(|candidate| candidate.score).min()
    };
    let Some(best) = best else {
        return scored;
    };

    scored.retain(|candidate| candidate.score == best);
    scored
}

fn minimax(board: &mut Board, to_move: Mark) -> i32 {
    // Terminal checks in fixed priority order: the mover's predecessor may
    // just have completed a line.
    if has_won(board, BOT_MARK) {
        return BOT_WIN_SCORE;
    }
    if has_won(board, HUMAN_MARK) {
        return BOT_LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    if to_move == BOT_MARK {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            board.place(index, to_move);
            let eval = minimax(board, to_move.opponent());
            board.clear(index);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            board.place(index, to_move);
            let eval = minimax(board, to_move.opponent());
            board.clear(index);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
