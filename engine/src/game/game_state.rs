use super::board::{Board, BOARD_CELLS};
use super::types::{GameStatus, Mark, HUMAN_MARK};
use super::win_detector::check_win;

/// State of the round in progress. The human opens every round; turn
/// alternation, outcome detection and move validation all live here.
#[derive(Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    /// Total marks placed over the whole session; deliberately not reset
    /// between rounds.
    pub turn: u32,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: HUMAN_MARK,
            status: GameStatus::InProgress,
            turn: 0,
            last_move: None,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_mark == HUMAN_MARK
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Round is already over".to_string());
        }

        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }

        if index >= BOARD_CELLS {
            return Err("Cell index out of bounds".to_string());
        }

        if !self.board.is_cell_empty(index) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, mark);
        self.last_move = Some(index);
        self.turn += 1;

        self.check_round_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = self.current_mark.opponent();
    }

    fn check_round_over(&mut self) {
        if let Some(winner) = check_win(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }

    /// Fresh board for the next round. The session-wide turn counter keeps
    /// counting.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_mark = HUMAN_MARK;
        self.status = GameStatus::InProgress;
        self.last_move = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
