//! Typed commands read from standard input.

use std::fmt;
use std::time::Duration;

use super::MAX_PERIOD_DURATION;

/// Literal command words.
pub const PAUSE: &str = "pause";
pub const NEXT: &str = "next";
pub const RESTART: &str = "restart";
pub const HELP: &str = "help";
pub const QUIT: &str = "quit";

/// The most recently read line of input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Halt the current period while keeping the time
    Pause,
    /// Proceed to the next period
    Next,
    /// Restart the current period, optionally with an explicit duration
    Restart(Option<Duration>),
    /// End the timer
    Quit,
    /// Print the command reference
    Help,
    /// Anything else; only meaningful as an acknowledgment
    Unrecognized(String),
}

impl Command {
    /// Classifies one line of input.
    ///
    /// The trimmed line must match a command word exactly, except for
    /// `restart` which may carry a trailing `MM:SS` on the same line.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            PAUSE => Command::Pause,
            NEXT => Command::Next,
            QUIT => Command::Quit,
            HELP => Command::Help,
            _ if line.contains(RESTART) => Command::Restart(parse_restart_duration(line)),
            _ => Command::Unrecognized(line.to_string()),
        }
    }

    /// Returns true if this command must interrupt the scheduler's wait.
    ///
    /// Unrecognized input only counts while the scheduler is waiting for an
    /// acknowledgment; help is always handled by the reader itself.
    pub fn wakes_scheduler(&self, awaiting_acknowledgment: bool) -> bool {
        match self {
            Command::Pause | Command::Next | Command::Restart(_) | Command::Quit => true,
            Command::Help => false,
            Command::Unrecognized(_) => awaiting_acknowledgment,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Pause => f.write_str(PAUSE),
            Command::Next => f.write_str(NEXT),
            Command::Restart(None) => f.write_str(RESTART),
            Command::Restart(Some(duration)) => {
                let secs = duration.as_secs();
                write!(f, "{} {:02}:{:02}", RESTART, secs / 60, secs % 60)
            }
            Command::Quit => f.write_str(QUIT),
            Command::Help => f.write_str(HELP),
            Command::Unrecognized(text) => f.write_str(text),
        }
    }
}

/// Extracts a `minutes*60 + seconds` override from the first two digit groups.
///
/// Fewer than two groups, or a total above `MAX_PERIOD_DURATION`, yield `None`.
fn parse_restart_duration(line: &str) -> Option<Duration> {
    let mut groups = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|group| !group.is_empty());

    let minutes: u64 = groups.next()?.parse().ok()?;
    let seconds: u64 = groups.next()?.parse().ok()?;

    minutes
        .checked_mul(60)
        .and_then(|total| total.checked_add(seconds))
        .map(Duration::from_secs)
        .filter(|duration| *duration <= MAX_PERIOD_DURATION)
}
