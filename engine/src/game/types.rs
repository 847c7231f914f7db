use super::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

/// The human always plays `O` and opens every round; the bot replies as `X`.
pub const HUMAN_MARK: Mark = Mark::O;
pub const BOT_MARK: Mark = Mark::X;

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    pub fn is_over(&self) -> bool {
        *self != GameStatus::InProgress
    }
}

/// A candidate cell together with its minimax value for the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: usize,
    pub score: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub line: [usize; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    PlaceMark { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Win(Mark),
    Draw,
}

/// Snapshot pushed to the UI layer after every state change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StateUpdate {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub turn: u32,
    pub attempts_left: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: u32,
    pub human_wins: u32,
    pub bot_wins: u32,
    pub draws: u32,
}
