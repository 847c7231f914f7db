use engine::game::{
    check_win_with_line, Board, GameStatus, RoundOutcome, SessionSummary, StateUpdate, HUMAN_MARK,
};

/// Everything the session pushes towards the terminal.
#[derive(Debug, Clone, Copy)]
pub enum UiEvent {
    State(StateUpdate),
    RoundOver {
        outcome: RoundOutcome,
        attempts_left: u32,
    },
    SessionOver(SessionSummary),
}

/// Maps "1".."9" (as printed on the empty cells) to a board index.
pub fn parse_cell(input: &str) -> Option<usize> {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|cell| (1..=9).contains(cell))
        .map(|cell| cell - 1)
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..3 {
        if row > 0 {
            out.push_str("---+---+---\n");
        }
        for col in 0..3 {
            let index = row * 3 + col;
            if col > 0 {
                out.push('|');
            }
            out.push(' ');
            out.push(match board.get(index) {
                Some(mark) => mark.symbol(),
                None => (b'1' + index as u8) as char,
            });
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

pub fn outcome_line(outcome: RoundOutcome) -> String {
    match outcome {
        RoundOutcome::Win(mark) if mark == HUMAN_MARK => {
            format!("You win the round as {}!", mark.symbol())
        }
        RoundOutcome::Win(mark) => format!("The bot wins the round as {}!", mark.symbol()),
        RoundOutcome::Draw => "Round drawn!".to_string(),
    }
}

pub fn attempts_line(attempts_left: u32) -> String {
    if attempts_left == 0 {
        "No attempts left. The game is over!".to_string()
    } else {
        format!("Attempts left: {}", attempts_left)
    }
}

pub fn summary_lines(summary: &SessionSummary) -> String {
    format!(
        "Session over after {} rounds: you {}, bot {}, drawn {}.",
        summary.rounds_played, summary.human_wins, summary.bot_wins, summary.draws
    )
}

/// Terminal renderer; keeps the last board so a finished round can show the
/// winning line.
pub struct TerminalUi {
    last_board: Option<Board>,
}

impl TerminalUi {
    pub fn new() -> Self {
        Self { last_board: None }
    }

    pub fn handle_event(&mut self, event: UiEvent) {
        match event {
            UiEvent::State(update) => {
                self.last_board = Some(update.board);
                println!();
                print!("{}", render_board(&update.board));
                if update.status == GameStatus::InProgress {
                    if update.current_mark == HUMAN_MARK {
                        println!("Move {}. Your move (1-9):", update.turn + 1);
                    } else {
                        println!("Move {}. The bot is thinking...", update.turn + 1);
                    }
                }
            }
            UiEvent::RoundOver {
                outcome,
                attempts_left,
            } => {
                if let RoundOutcome::Win(_) = outcome {
                    if let Some(winning) = self.last_board.as_ref().and_then(check_win_with_line) {
                        let [a, b, c] = winning.line;
                        println!(
                            "{} completes cells {}, {} and {}.",
                            winning.mark.symbol(),
                            a + 1,
                            b + 1,
                            c + 1
                        );
                    }
                }
                println!("{}", outcome_line(outcome));
                println!("{}", attempts_line(attempts_left));
            }
            UiEvent::SessionOver(summary) => {
                println!("{}", summary_lines(&summary));
            }
        }
    }
}

impl Default for TerminalUi {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::game::Mark;

    #[test]
    fn test_parse_cell_accepts_one_through_nine() {
        assert_eq!(parse_cell("1"), Some(0));
        assert_eq!(parse_cell(" 5 "), Some(4));
        assert_eq!(parse_cell("9"), Some(8));
    }

    #[test]
    fn test_parse_cell_rejects_everything_else() {
        assert_eq!(parse_cell("0"), None);
        assert_eq!(parse_cell("10"), None);
        assert_eq!(parse_cell("q"), None);
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("-3"), None);
    }

    #[test]
    fn test_render_board_shows_marks_and_cell_numbers() {
        let mut board = Board::new();
        board.place(0, Mark::X);
        board.place(4, Mark::O);

        let rendered = render_board(&board);

        assert_eq!(
            rendered,
            " X | 2 | 3 \n---+---+---\n 4 | O | 6 \n---+---+---\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_outcome_lines() {
        assert_eq!(
            outcome_line(RoundOutcome::Win(Mark::O)),
            "You win the round as O!"
        );
        assert_eq!(
            outcome_line(RoundOutcome::Win(Mark::X)),
            "The bot wins the round as X!"
        );
        assert_eq!(outcome_line(RoundOutcome::Draw), "Round drawn!");
    }

    #[test]
    fn test_attempts_lines() {
        assert_eq!(attempts_line(3), "Attempts left: 3");
        assert_eq!(attempts_line(0), "No attempts left. The game is over!");
    }

    #[test]
    fn test_summary_line_mentions_all_counts() {
        let summary = SessionSummary {
            rounds_played: 10,
            human_wins: 0,
            bot_wins: 6,
            draws: 4,
        };
        assert_eq!(
            summary_lines(&summary),
            "Session over after 10 rounds: you 0, bot 6, drawn 4."
        );
    }
}
