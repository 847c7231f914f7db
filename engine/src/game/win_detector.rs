use super::board::{Board, WINNING_LINES};
use super::types::{Mark, WinningLine};

/// True iff one of the 8 winning lines is uniformly `mark`. Pure; safe to
/// call on speculative boards mid-search.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|winning| winning.mark)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return Some(WinningLine { mark, line });
            }
        }
    }
    None
}
