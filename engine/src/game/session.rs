use std::sync::Arc;

use tokio::sync::{Mutex, Notify};

use crate::log;
use super::bot_controller::calculate_bot_move;
use super::broadcaster::SessionBroadcaster;
use super::game_state::GameState;
use super::session_rng::SessionRng;
use super::settings::SessionSettings;
use super::types::{
    PlayerCommand, RoundOutcome, SessionSummary, StateUpdate, HUMAN_MARK,
};

#[derive(Clone)]
pub struct SessionState {
    pub session_id: String,
    pub game_state: Arc<Mutex<GameState>>,
    pub rng: Arc<Mutex<SessionRng>>,
    pub attempts_left: Arc<Mutex<u32>>,
    pub turn_notify: Arc<Notify>,
}

impl SessionState {
    pub fn create(
        session_id: String,
        settings: &SessionSettings,
        rng: SessionRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        Ok(Self {
            session_id,
            game_state: Arc::new(Mutex::new(GameState::new())),
            rng: Arc::new(Mutex::new(rng)),
            attempts_left: Arc::new(Mutex::new(settings.attempts)),
            turn_notify: Arc::new(Notify::new()),
        })
    }
}

pub struct GameSession;

impl GameSession {
    /// Drives the session until every attempt is spent, then returns the
    /// summary. One task per session; the human side is fed through
    /// `handle_command`.
    pub async fn run(
        settings: SessionSettings,
        state: SessionState,
        broadcaster: impl SessionBroadcaster,
    ) -> SessionSummary {
        let mut summary = SessionSummary::default();

        loop {
            broadcast_state(&state, &broadcaster).await;

            let (round_over, human_turn) = {
                let game_state = state.game_state.lock().await;
                (game_state.status.is_over(), game_state.is_human_turn())
            };

            if round_over {
                let (outcome, attempts_left) = settle_round(&state, &mut summary).await;
                broadcaster.broadcast_round_over(outcome, attempts_left).await;

                if attempts_left == 0 {
                    break;
                }

                tokio::time::sleep(settings.round_reset_delay()).await;
                state.game_state.lock().await.reset();
                continue;
            }

            if human_turn {
                state.turn_notify.notified().await;
            } else {
                play_bot_turn(&settings, &state).await;
            }
        }

        broadcaster.broadcast_session_over(summary).await;
        summary
    }

    /// UI-originated events. Invalid selections (occupied cell, finished
    /// round, not the human's turn) are logged and dropped.
    pub async fn handle_command(state: &SessionState, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceMark { index } => {
                let mut game_state = state.game_state.lock().await;
                match game_state.place_mark(HUMAN_MARK, index) {
                    Ok(()) => {
                        drop(game_state);
                        state.turn_notify.notify_one();
                    }
                    Err(reason) => {
                        log!(
                            "[session:{}] rejected move at cell {}: {}",
                            state.session_id,
                            index,
                            reason
                        );
                    }
                }
            }
        }
    }
}

async fn play_bot_turn(settings: &SessionSettings, state: &SessionState) {
    // Pacing only; nothing else touches the board while the bot "thinks".
    tokio::time::sleep(settings.bot_move_delay()).await;

    let mut game_state = state.game_state.lock().await;
    if game_state.status.is_over() || game_state.is_human_turn() {
        return;
    }

    let board = game_state.board;
    let mark = game_state.current_mark;

    let chosen = {
        let mut rng = state.rng.lock().await;
        calculate_bot_move(&board, mark, &mut rng)
    };

    let Some(index) = chosen else {
        return;
    };

    if let Err(reason) = game_state.place_mark(mark, index) {
        log!(
            "[session:{}] bot move at cell {} rejected: {}",
            state.session_id,
            index,
            reason
        );
    }
}

async fn settle_round(
    state: &SessionState,
    summary: &mut SessionSummary,
) -> (RoundOutcome, u32) {
    let outcome = {
        let game_state = state.game_state.lock().await;
        match game_state.status.winner() {
            Some(mark) => RoundOutcome::Win(mark),
            None => RoundOutcome::Draw,
        }
    };

    summary.rounds_played += 1;
    match outcome {
        RoundOutcome::Win(HUMAN_MARK) => summary.human_wins += 1,
        RoundOutcome::Win(_) => summary.bot_wins += 1,
        RoundOutcome::Draw => summary.draws += 1,
    }

    // A finished round costs one attempt, draw and win alike.
    let mut attempts_left = state.attempts_left.lock().await;
    *attempts_left = attempts_left.saturating_sub(1);

    (outcome, *attempts_left)
}

async fn broadcast_state(state: &SessionState, broadcaster: &impl SessionBroadcaster) {
    let update = {
        let game_state = state.game_state.lock().await;
        let attempts_left = *state.attempts_left.lock().await;
        StateUpdate {
            board: game_state.board,
            current_mark: game_state.current_mark,
            status: game_state.status,
            turn: game_state.turn,
            attempts_left,
        }
    };

    broadcaster.broadcast_state(update).await;
}
