//! Display utilities for the Pomodoro Timer CLI.
//!
//! This module provides formatted output for:
//! - The startup banner and command reference
//! - Period transition lines
//! - Pause and period-end prompts
//! - Error messages

use std::io::{self, Write};
use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;

use crate::timer::TimerEvent;
use crate::types::command::{HELP, NEXT, PAUSE, QUIT, RESTART};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the startup banner.
    pub fn show_banner() {
        println!("Pomodoro Timer start, enter \"{}\" to end the timer", QUIT);
    }

    /// Prints timer events until the scheduler drops its sender.
    pub async fn print_events(mut events: mpsc::UnboundedReceiver<TimerEvent>) {
        while let Some(event) = events.recv().await {
            Self::show_event(&event);
        }
    }

    /// Shows a single timer event.
    pub fn show_event(event: &TimerEvent) {
        if let Some(text) = Self::render(event) {
            println!("{}", text);
        }
    }

    /// Renders a timer event as a console line.
    ///
    /// Returns `None` for events with no output of their own.
    pub fn render(event: &TimerEvent) -> Option<String> {
        match event {
            TimerEvent::PeriodStarted {
                period,
                kind,
                remaining,
                started_at,
            } => {
                let ends_at = chrono::Duration::from_std(*remaining)
                    .ok()
                    .and_then(|delta| started_at.checked_add_signed(delta));
                Some(format!(
                    "[{}] {}: {} | End: {} ({})",
                    period,
                    kind.as_str(),
                    Self::format_clock(started_at),
                    ends_at.map_or_else(|| "--:--:--".to_string(), |end| Self::format_clock(&end)),
                    Self::format_remaining(*remaining)
                ))
            }
            TimerEvent::Paused { period, remaining } => Some(format!(
                "[{}] Period paused ({} left), press enter to resume",
                period,
                Self::format_remaining(*remaining)
            )),
            TimerEvent::PeriodEnded { ended, next } => Some(format!(
                "[{}] Period end, press enter to start {}",
                ended, next
            )),
            TimerEvent::Acknowledged { .. } => None,
            TimerEvent::Quit => Some("Quitting timer".to_string()),
        }
    }

    /// Writes the command reference.
    pub fn write_help(out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "[Commands]")?;
        writeln!(out, "{} - halts the current period while keeping the time", PAUSE)?;
        writeln!(out, "{} - proceeds to the next period", NEXT)?;
        writeln!(
            out,
            "{} (MM:SS) - restarts the current period with the preset time or optionally \
             with a specific time formatted as \"MM:SS\"",
            RESTART
        )?;
        writeln!(out, "{} - ends the timer and exits the program", QUIT)?;
        writeln!(out, "{} - displays this command reference", HELP)?;
        writeln!(out)?;
        out.flush()
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Formats a duration as `MM:SS`; minutes are not wrapped into hours.
    fn format_remaining(remaining: Duration) -> String {
        let total_seconds = remaining.as_secs();
        format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
    }

    /// Formats a wall-clock time like `3:04:05 PM`.
    fn format_clock(time: &DateTime<Local>) -> String {
        time.format("%-I:%M:%S %p").to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
