//! Period scheduler for the Pomodoro Timer.
//!
//! This module provides the core timer state machine:
//! - State transitions (Running → Paused → Running, Running → AwaitingAcknowledgment)
//! - A single timed wait that serves both period expiry and command interruption
//! - The end-of-period acknowledgment sequence with repeating reminders
//! - Event firing for the console display

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{debug, info, warn};

use super::context::TimerContext;
use super::notifier::Notifier;
use crate::ack::AcknowledgmentSource;
use crate::sound::{Cue, CuePlayer};
use crate::types::{Command, Period, PeriodState, StartKind, TimerConfig, MAX_PERIOD_DURATION};

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events for the console display and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// A period started, resumed or restarted
    PeriodStarted {
        /// Period label
        period: Period,
        /// How the period (re)started
        kind: StartKind,
        /// Time until the period ends
        remaining: Duration,
        /// Wall-clock start (or resume) time
        started_at: DateTime<Local>,
    },
    /// The period was paused and waits for any input
    Paused {
        /// Period label
        period: Period,
        /// Time left when paused
        remaining: Duration,
    },
    /// A period ran out; the label already points at the next period
    PeriodEnded {
        /// Period that just ended
        ended: Period,
        /// Period that starts after acknowledgment
        next: Period,
    },
    /// The period end was acknowledged
    Acknowledged {
        /// Period about to start
        period: Period,
    },
    /// The timer is quitting
    Quit,
}

/// What the scheduler does after handling a wake-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Start (or resume) the current period
    Continue,
    /// Terminate
    Quit,
}

// ============================================================================
// Scheduler
// ============================================================================

/// Owns the period state and drives it from commands and timeouts.
pub struct Scheduler<A> {
    /// Timer durations
    config: TimerConfig,
    /// Current period state
    state: PeriodState,
    /// Context shared with the input reader
    context: Arc<TimerContext>,
    /// Commands from the input reader; a receive is the wake-up
    commands: mpsc::Receiver<Command>,
    /// Cue playback
    cues: Arc<dyn CuePlayer>,
    /// Out-of-band acknowledgments after a period ends
    acknowledgments: A,
    /// Event sender channel
    event_tx: mpsc::UnboundedSender<TimerEvent>,
}

impl<A: AcknowledgmentSource> Scheduler<A> {
    /// Creates a scheduler positioned at the start of a work period.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(
        config: TimerConfig,
        context: Arc<TimerContext>,
        commands: mpsc::Receiver<Command>,
        cues: Arc<dyn CuePlayer>,
        acknowledgments: A,
        event_tx: mpsc::UnboundedSender<TimerEvent>,
    ) -> Result<Self> {
        config.validate().map_err(anyhow::Error::msg)?;

        Ok(Self {
            state: PeriodState::new(&config),
            config,
            context,
            commands,
            cues,
            acknowledgments,
            event_tx,
        })
    }

    /// Returns a reference to the current period state.
    pub fn state(&self) -> &PeriodState {
        &self.state
    }

    /// Runs the timer until `quit` is received or the command channel closes.
    ///
    /// It should be spawned as a separate tokio task.
    pub async fn run(mut self) -> Result<()> {
        loop {
            let kind = self.state.take_start_kind();
            let remaining = self.state.remaining;
            let ends_at = deadline(Instant::now(), remaining);

            debug!(period = %self.state.period, ?kind, ?remaining, "Period running");
            self.emit(TimerEvent::PeriodStarted {
                period: self.state.period,
                kind,
                remaining,
                started_at: Local::now(),
            })?;

            if self.wait_period(ends_at).await? == Flow::Quit {
                break;
            }
        }

        info!("Timer quitting");
        self.emit(TimerEvent::Quit)?;
        Ok(())
    }

    /// Waits until the period ends or a command interrupts it.
    async fn wait_period(&mut self, ends_at: Instant) -> Result<Flow> {
        loop {
            match time::timeout_at(ends_at, self.commands.recv()).await {
                Ok(Some(command)) => {
                    if let Some(flow) = self.handle_command(command, ends_at).await? {
                        return Ok(flow);
                    }
                }
                Ok(None) => {
                    debug!("Command channel closed");
                    return Ok(Flow::Quit);
                }
                Err(_) => return self.finish_period().await,
            }
        }
    }

    /// Applies a command received while the period was running.
    ///
    /// Returns `None` when the command is ignored and the same wait continues.
    async fn handle_command(&mut self, command: Command, ends_at: Instant) -> Result<Option<Flow>> {
        debug!(%command, "Handling command");

        let flow = match command {
            Command::Pause => {
                let remaining = remaining_until(ends_at, Instant::now());
                self.state.pause(remaining);

                self.context.enter_acknowledgment_mode();
                self.emit(TimerEvent::Paused {
                    period: self.state.period,
                    remaining,
                })?;

                let flow = self.wait_for_resume().await;
                self.context.leave_acknowledgment_mode();
                flow
            }
            Command::Next => {
                self.state.advance(&self.config);
                Flow::Continue
            }
            Command::Restart(duration) => {
                self.state.restart(&self.config, duration);
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
            Command::Help | Command::Unrecognized(_) => {
                debug!("Ignoring command outside acknowledgment mode");
                return Ok(None);
            }
        };

        Ok(Some(flow))
    }

    /// Blocks a paused period until any input arrives.
    async fn wait_for_resume(&mut self) -> Flow {
        match self.commands.recv().await {
            None | Some(Command::Quit) => Flow::Quit,
            Some(command) => {
                debug!(%command, "Resuming paused period");
                Flow::Continue
            }
        }
    }

    /// Handles a natural timeout: flips the label, then waits for acknowledgment
    /// while the notifier repeats the reminder cue.
    async fn finish_period(&mut self) -> Result<Flow> {
        let ended = self.state.period;
        self.state.advance(&self.config);
        let next = self.state.period;
        info!(%ended, %next, "Period ended");

        self.play(Cue::EndOfPeriod);
        self.context.enter_acknowledgment_mode();
        self.emit(TimerEvent::PeriodEnded { ended, next })?;

        let notifier = Notifier::spawn(Arc::clone(&self.cues), self.config.notify_interval);

        let flow = tokio::select! {
            command = self.commands.recv() => match command {
                None | Some(Command::Quit) => Flow::Quit,
                Some(command) => {
                    debug!(%command, "Period end acknowledged by input");
                    Flow::Continue
                }
            },
            () = self.acknowledgments.acknowledged() => {
                debug!("Period end acknowledged by external source");
                Flow::Continue
            }
        };

        notifier.stop().await;
        self.context.leave_acknowledgment_mode();

        if flow == Flow::Continue {
            self.play(Cue::Confirmation);
            self.emit(TimerEvent::Acknowledged { period: next })?;
        }

        Ok(flow)
    }

    /// Plays a cue; failures only cost the sound.
    fn play(&self, cue: Cue) {
        if let Err(e) = self.cues.play(cue) {
            warn!("Failed to play {:?} cue: {}", cue, e);
        }
    }

    fn emit(&self, event: TimerEvent) -> Result<()> {
        self.event_tx
            .send(event)
            .context("Failed to send timer event")
    }
}

/// Instant `remaining` after `now`, capped at `MAX_PERIOD_DURATION` when the
/// clock cannot represent it.
fn deadline(now: Instant, remaining: Duration) -> Instant {
    now.checked_add(remaining)
        .or_else(|| now.checked_add(MAX_PERIOD_DURATION))
        .unwrap_or(now)
}

/// Time left until `ends_at`, never negative.
fn remaining_until(ends_at: Instant, now: Instant) -> Duration {
    ends_at.saturating_duration_since(now)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ack::LineAcknowledgment;
    use crate::sound::MockCuePlayer;

    fn short_config() -> TimerConfig {
        TimerConfig::default()
            .with_work(Duration::from_secs(10))
            .with_rest(Duration::from_secs(8))
    }

    fn create_scheduler(
        config: TimerConfig,
    ) -> Result<(
        Scheduler<LineAcknowledgment>,
        mpsc::Sender<Command>,
        mpsc::UnboundedReceiver<TimerEvent>,
    )> {
        let (command_tx, command_rx) = mpsc::channel(1);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let scheduler = Scheduler::new(
            config,
            Arc::new(TimerContext::new()),
            command_rx,
            Arc::new(MockCuePlayer::new()),
            LineAcknowledgment,
            event_tx,
        )?;
        Ok((scheduler, command_tx, event_rx))
    }

    mod remaining_tests {
        use super::*;

        #[test]
        fn test_remaining_until_future() {
            let now = Instant::now();
            let ends_at = now + Duration::from_secs(7);
            assert_eq!(remaining_until(ends_at, now), Duration::from_secs(7));
        }

        #[test]
        fn test_deadline_adds_remaining() {
            let now = Instant::now();
            assert_eq!(
                deadline(now, Duration::from_secs(90)),
                now + Duration::from_secs(90)
            );
        }

        #[test]
        fn test_deadline_never_overflows() {
            let now = Instant::now();
            assert_eq!(deadline(now, Duration::MAX), now + MAX_PERIOD_DURATION);
        }

        #[test]
        fn test_remaining_until_past_is_zero() {
            let now = Instant::now();
            let ends_at = now;
            let later = now + Duration::from_secs(3);
            assert_eq!(remaining_until(ends_at, later), Duration::ZERO);
        }
    }

    mod scheduler_tests {
        use super::*;

        #[test]
        fn test_new_scheduler_starts_with_work() {
            let (scheduler, _tx, _rx) = create_scheduler(short_config()).unwrap();
            let state = scheduler.state();
            assert_eq!(state.period, Period::Work);
            assert_eq!(state.remaining, Duration::from_secs(10));
        }

        #[test]
        fn test_new_rejects_invalid_config() {
            let config = short_config().with_notify_interval(Duration::ZERO);
            let result = create_scheduler(config);
            assert!(result.is_err());
            let message = result.err().unwrap().to_string();
            assert!(message.contains("notify interval"));
        }

        #[tokio::test(start_paused = true)]
        async fn test_ignores_unrecognized_while_running() {
            let (scheduler, tx, mut rx) = create_scheduler(short_config()).unwrap();
            let handle = tokio::spawn(scheduler.run());

            let started = rx.recv().await.unwrap();
            assert!(matches!(started, TimerEvent::PeriodStarted { .. }));

            time::sleep(Duration::from_secs(4)).await;
            tx.send(Command::Unrecognized("hello".into())).await.unwrap();
            tx.send(Command::Help).await.unwrap();

            // The period still ends at its original time
            let before = Instant::now();
            let ended = rx.recv().await.unwrap();
            assert_eq!(
                ended,
                TimerEvent::PeriodEnded {
                    ended: Period::Work,
                    next: Period::Rest
                }
            );
            assert_eq!(Instant::now() - before, Duration::from_secs(6));

            tx.send(Command::Quit).await.unwrap();
            handle.await.unwrap().unwrap();
        }

        #[tokio::test(start_paused = true)]
        async fn test_fails_when_event_receiver_dropped() {
            let (scheduler, _tx, rx) = create_scheduler(short_config()).unwrap();
            drop(rx);

            let result = scheduler.run().await;
            assert!(result.is_err());
        }
    }
}
