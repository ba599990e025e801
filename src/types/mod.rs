//! Core data types for the Pomodoro Timer.
//!
//! This module defines the data structures used for:
//! - Period labels (Work / Rest)
//! - Timer configuration with validation
//! - Period state owned by the scheduler
//! - Commands typed on standard input

pub mod command;

pub use command::Command;

use std::fmt;
use std::time::Duration;

// ============================================================================
// Compile-time defaults
// ============================================================================

/// Default length of a work period.
pub const WORK_DURATION: Duration = Duration::from_secs(25 * 60);

/// Default length of a rest period.
pub const REST_DURATION: Duration = Duration::from_secs(5 * 60);

/// Interval between reminder cues while waiting for acknowledgment.
pub const NOTIFY_INTERVAL: Duration = Duration::from_secs(15);

/// Longest period the timer accepts, one year.
///
/// Keeps deadline and wall-clock arithmetic far from their limits.
pub const MAX_PERIOD_DURATION: Duration = Duration::from_secs(365 * 24 * 60 * 60);

// ============================================================================
// Period
// ============================================================================

/// One of the two alternating intervals of the timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Period {
    /// Focused work
    #[default]
    Work,
    /// Rest between work periods
    Rest,
}

impl Period {
    /// Returns the label printed in status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Period::Work => "WORK",
            Period::Rest => "REST",
        }
    }

    /// Returns the period that follows this one.
    pub fn next(&self) -> Period {
        match self {
            Period::Work => Period::Rest,
            Period::Rest => Period::Work,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Durations used by the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerConfig {
    /// Work period duration
    pub work: Duration,
    /// Rest period duration
    pub rest: Duration,
    /// Interval between reminder cues after a period ends
    pub notify_interval: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work: WORK_DURATION,
            rest: REST_DURATION,
            notify_interval: NOTIFY_INTERVAL,
        }
    }
}

impl TimerConfig {
    /// Creates a new configuration with the specified work duration.
    pub fn with_work(mut self, work: Duration) -> Self {
        self.work = work;
        self
    }

    /// Creates a new configuration with the specified rest duration.
    pub fn with_rest(mut self, rest: Duration) -> Self {
        self.rest = rest;
        self
    }

    /// Creates a new configuration with the specified reminder interval.
    pub fn with_notify_interval(mut self, interval: Duration) -> Self {
        self.notify_interval = interval;
        self
    }

    /// Returns the default duration of the given period.
    pub fn duration_for(&self, period: Period) -> Duration {
        match period {
            Period::Work => self.work,
            Period::Rest => self.rest,
        }
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.work.is_zero() {
            return Err("work duration must be greater than zero".to_string());
        }
        if self.rest.is_zero() {
            return Err("rest duration must be greater than zero".to_string());
        }
        if self.notify_interval.is_zero() {
            return Err("notify interval must be greater than zero".to_string());
        }
        if self.work > MAX_PERIOD_DURATION || self.rest > MAX_PERIOD_DURATION {
            return Err("period durations must not exceed one year".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// StartKind
// ============================================================================

/// How a period (re)entered the running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartKind {
    /// Fresh period with its full default duration
    Started,
    /// Continuation after a pause
    Resumed,
    /// Restart of the current label
    Restarted,
}

impl StartKind {
    /// Returns the verb printed in status lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            StartKind::Started => "Start",
            StartKind::Resumed => "Resumed",
            StartKind::Restarted => "Restarted",
        }
    }
}

// ============================================================================
// PeriodState
// ============================================================================

/// State of the current period, owned by the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodState {
    /// Current period label
    pub period: Period,
    /// Time left when the period (re)starts
    pub remaining: Duration,
    /// Set when the period is resumed from a pause
    paused: bool,
    /// Set when the period was restarted
    restarted: bool,
}

impl PeriodState {
    /// Creates the initial state: a full work period.
    pub fn new(config: &TimerConfig) -> Self {
        Self {
            period: Period::Work,
            remaining: config.work,
            paused: false,
            restarted: false,
        }
    }

    /// Flips to the next period with its full default duration.
    pub fn advance(&mut self, config: &TimerConfig) {
        self.period = self.period.next();
        self.remaining = config.duration_for(self.period);
        self.paused = false;
        self.restarted = false;
    }

    /// Records a pause, keeping the label and the time actually left.
    pub fn pause(&mut self, remaining: Duration) {
        self.remaining = remaining;
        self.paused = true;
        self.restarted = false;
    }

    /// Restarts the current label with an override or its default duration.
    pub fn restart(&mut self, config: &TimerConfig, duration: Option<Duration>) {
        self.remaining = duration.unwrap_or_else(|| config.duration_for(self.period));
        self.restarted = true;
        self.paused = false;
    }

    /// Returns how the next start should be reported and clears the flags.
    pub fn take_start_kind(&mut self) -> StartKind {
        let kind = if self.paused {
            StartKind::Resumed
        } else if self.restarted {
            StartKind::Restarted
        } else {
            StartKind::Started
        };
        self.paused = false;
        self.restarted = false;
        kind
    }
}

// ============================================================================
// Tests
// ============================================================================
