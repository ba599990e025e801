//! Pomodoro Timer CLI - an interactive interval timer
//!
//! Alternates work and rest periods, plays a cue when each one ends and
//! reads commands from standard input:
//! - `pause`, `next`, `restart [MM:SS]`, `help`, `quit`

use std::io::{self, BufReader};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tokio::sync::mpsc;
use tracing::{debug, info};

use pomodoro::cli::{Cli, Display, InputReader};
use pomodoro::sound::{CuePlayer, RodioCuePlayer, SOUND_DIR};
use pomodoro::timer::{Scheduler, TimerContext};
use pomodoro::types::{Command, TimerConfig};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    if let Err(e) = run().await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// Logs go to stderr so they never interleave with the period lines.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

/// Wires the input reader, scheduler and display together and runs until quit.
async fn run() -> Result<()> {
    let config = TimerConfig::default();
    let context = Arc::new(TimerContext::new());
    let (command_tx, command_rx) = mpsc::channel(1);
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    let cues: Arc<dyn CuePlayer> =
        Arc::new(RodioCuePlayer::spawn(SOUND_DIR).context("Failed to start audio")?);

    #[cfg(feature = "key-hook")]
    let acknowledgments =
        pomodoro::ack::KeyHookAcknowledgment::spawn(pomodoro::ack::ACKNOWLEDGE_KEY)
            .context("Failed to start key hook")?;
    #[cfg(not(feature = "key-hook"))]
    let acknowledgments = pomodoro::ack::LineAcknowledgment;

    let scheduler = Scheduler::new(
        config,
        Arc::clone(&context),
        command_rx,
        cues,
        acknowledgments,
        event_tx,
    )?;

    Display::show_banner();

    // The reader thread is not joined: after Ctrl-C it may still be blocked
    // in a stdin read, and process exit reclaims it.
    InputReader::new(
        BufReader::new(io::stdin()),
        io::stdout(),
        context,
        command_tx.clone(),
    )
    .spawn()?;

    let printer = tokio::spawn(Display::print_events(event_rx));
    let mut timer = tokio::spawn(scheduler.run());

    tokio::select! {
        result = &mut timer => result.context("Scheduler task failed")??,
        result = signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl-C")?;
            info!("Ctrl-C received, quitting");
            if command_tx.send(Command::Quit).await.is_err() {
                debug!("Scheduler has stopped, dropping quit");
            }
            timer.await.context("Scheduler task failed")??;
        }
    }

    printer.await.context("Display task failed")?;
    debug!("Timer finished");
    Ok(())
}
