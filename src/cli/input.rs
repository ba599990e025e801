//! Input reader for the Pomodoro Timer.
//!
//! Runs on a dedicated thread, blocking on one line at a time. Each line is
//! classified into a `Command`; commands that must interrupt the scheduler
//! are sent over the capacity-1 command channel, which doubles as the
//! scheduler's wake-up.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing::debug;

use super::display::Display;
use crate::timer::TimerContext;
use crate::types::Command;

/// Reads commands from `R` and writes help output to `W`.
pub struct InputReader<R, W> {
    input: R,
    output: W,
    context: Arc<TimerContext>,
    commands: mpsc::Sender<Command>,
}

impl<R: BufRead, W: Write> InputReader<R, W> {
    pub fn new(
        input: R,
        output: W,
        context: Arc<TimerContext>,
        commands: mpsc::Sender<Command>,
    ) -> Self {
        Self {
            input,
            output,
            context,
            commands,
        }
    }

    /// Reads lines until `quit`, end of input, or the scheduler going away.
    ///
    /// End of input counts as `quit` so the scheduler never waits forever.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing help fails. The
    /// scheduler is told to quit before a read error is returned.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();

        loop {
            line.clear();
            let read = match self.input.read_line(&mut line) {
                Ok(read) => read,
                Err(e) => {
                    self.send(Command::Quit);
                    return Err(e).context("Failed to read from stdin");
                }
            };

            if read == 0 {
                debug!("Input closed, quitting");
                self.send(Command::Quit);
                return Ok(());
            }

            match Command::parse(&line) {
                Command::Help => {
                    Display::write_help(&mut self.output).context("Failed to write help")?;
                }
                Command::Quit => {
                    self.send(Command::Quit);
                    return Ok(());
                }
                command if command.wakes_scheduler(self.context.is_awaiting_acknowledgment()) => {
                    if !self.send(command) {
                        return Ok(());
                    }
                }
                command => debug!(%command, "Ignoring input"),
            }
        }
    }

    /// Hands a command to the scheduler, blocking while the slot is full.
    ///
    /// Returns false if the scheduler has stopped.
    fn send(&self, command: Command) -> bool {
        match self.commands.blocking_send(command) {
            Ok(()) => true,
            Err(_) => {
                debug!("Scheduler has stopped, dropping command");
                false
            }
        }
    }
}

impl<R, W> InputReader<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Runs the reader on its own thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(mut self) -> Result<JoinHandle<Result<()>>> {
        thread::Builder::new()
            .name("input-reader".to_string())
            .spawn(move || self.run())
            .context("Failed to spawn input reader thread")
    }
}
