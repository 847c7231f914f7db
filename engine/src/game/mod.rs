mod board;
mod bot_controller;
mod broadcaster;
mod game_state;
mod session;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BOARD_CELLS, WINNING_LINES};
pub use bot_controller::{best_moves, calculate_bot_move, BOT_LOSS_SCORE, BOT_WIN_SCORE, DRAW_SCORE};
pub use broadcaster::SessionBroadcaster;
pub use game_state::GameState;
pub use session::{GameSession, SessionState};
pub use session_rng::SessionRng;
pub use settings::SessionSettings;
pub use types::{
    GameStatus, Mark, PlayerCommand, RoundOutcome, ScoredMove, SessionSummary, StateUpdate,
    WinningLine, BOT_MARK, HUMAN_MARK,
};
pub use win_detector::{check_win, check_win_with_line, has_won};
