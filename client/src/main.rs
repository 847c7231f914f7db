mod config;
mod ui;

use clap::Parser;
use engine::game::{
    GameSession, PlayerCommand, RoundOutcome, SessionBroadcaster, SessionRng, SessionState,
    SessionSummary, StateUpdate,
};
use engine::id_generator::generate_session_id;
use engine::{log, logger};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use config::Config;
use ui::{parse_cell, TerminalUi, UiEvent};

#[derive(Parser)]
#[command(name = "tictactoe_client")]
struct Args {
    /// Path to the YAML config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    /// Override the session RNG seed
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[derive(Clone)]
struct ChannelBroadcaster {
    events: mpsc::UnboundedSender<UiEvent>,
}

impl SessionBroadcaster for ChannelBroadcaster {
    async fn broadcast_state(&self, update: StateUpdate) {
        let _ = self.events.send(UiEvent::State(update));
    }

    async fn broadcast_round_over(&self, outcome: RoundOutcome, attempts_left: u32) {
        let _ = self.events.send(UiEvent::RoundOver {
            outcome,
            attempts_left,
        });
    }

    async fn broadcast_session_over(&self, summary: SessionSummary) {
        let _ = self.events.send(UiEvent::SessionOver(summary));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config)?;

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    let rng = match args.seed.or(config.seed) {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let session_id = generate_session_id();
    log!("[session:{}] starting with seed {}", session_id, rng.seed());

    let state = SessionState::create(session_id, &config.session, rng)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let broadcaster = ChannelBroadcaster { events: event_tx };

    let settings = config.session;
    let run_state = state.clone();
    let mut game_handle = tokio::spawn(async move {
        GameSession::run(settings, run_state, broadcaster).await
    });

    println!("You play O and always move first. Pick a cell with 1-9; q quits.");

    let mut terminal_ui = TerminalUi::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            result = &mut game_handle => {
                // Show whatever the session pushed before finishing.
                while let Ok(event) = event_rx.try_recv() {
                    terminal_ui.handle_event(event);
                }
                if result.is_err() {
                    log!("game task failed unexpectedly");
                }
                return Ok(());
            }
            Some(event) = event_rx.recv() => {
                terminal_ui.handle_event(event);
            }
            line = lines.next_line() => {
                match line {
                    Ok(Some(input)) => {
                        let input = input.trim();
                        if input.eq_ignore_ascii_case("q") {
                            break;
                        }
                        match parse_cell(input) {
                            Some(index) => {
                                GameSession::handle_command(
                                    &state,
                                    PlayerCommand::PlaceMark { index },
                                )
                                .await;
                            }
                            None => println!("Enter a number from 1 to 9, or q to quit."),
                        }
                    }
                    Ok(None) => break,
                    Err(error) => {
                        log!("failed to read input: {}", error);
                        break;
                    }
                }
            }
        }
    }

    game_handle.abort();
    Ok(())
}
