//! Reminder loop run while a period end waits for acknowledgment.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::signal::WakeSignal;
use crate::sound::{Cue, CuePlayer};

/// Replays the reminder cue every interval until stopped.
///
/// Each period-end episode spawns its own notifier task with its own
/// stop signal, independent of the scheduler's command channel.
pub struct Notifier {
    stop: Arc<WakeSignal>,
    handle: JoinHandle<()>,
}

impl Notifier {
    /// Spawns the reminder task on the current tokio runtime.
    pub fn spawn(cues: Arc<dyn CuePlayer>, interval: Duration) -> Self {
        let stop = Arc::new(WakeSignal::new());
        let signal = Arc::clone(&stop);

        let handle = tokio::spawn(async move {
            let mut reminders = 0u32;
            while !signal.wait_timeout(interval).await {
                reminders += 1;
                debug!(reminders, "Playing reminder cue");
                if let Err(e) = cues.play(Cue::Reminder) {
                    warn!("Failed to play reminder cue: {}", e);
                }
            }
            debug!(reminders, "Notifier stopped");
        });

        Self { stop, handle }
    }

    /// Stops the reminder loop and waits for the task to finish.
    ///
    /// No reminder is played after this returns.
    pub async fn stop(self) {
        self.stop.raise();
        if let Err(e) = self.handle.await {
            warn!("Notifier task failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sound::MockCuePlayer;

    #[tokio::test(start_paused = true)]
    async fn test_reminds_every_interval() {
        let mock = Arc::new(MockCuePlayer::new());
        let notifier = Notifier::spawn(mock.clone(), Duration::from_secs(15));

        tokio::time::sleep(Duration::from_secs(46)).await;
        assert_eq!(mock.count_of(Cue::Reminder), 3);

        notifier.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_reminder_after_stop() {
        let mock = Arc::new(MockCuePlayer::new());
        let notifier = Notifier::spawn(mock.clone(), Duration::from_secs(15));

        tokio::time::sleep(Duration::from_secs(20)).await;
        notifier.stop().await;
        let played = mock.play_count();
        assert_eq!(played, 1);

        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(mock.play_count(), played);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_before_first_interval() {
        let mock = Arc::new(MockCuePlayer::new());
        let notifier = Notifier::spawn(mock.clone(), Duration::from_secs(15));

        notifier.stop().await;
        assert_eq!(mock.play_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_playback_failure_keeps_looping() {
        let mock = Arc::new(MockCuePlayer::new());
        mock.set_should_fail(true);
        let notifier = Notifier::spawn(mock.clone(), Duration::from_secs(15));

        tokio::time::sleep(Duration::from_secs(31)).await;
        mock.set_should_fail(false);
        tokio::time::sleep(Duration::from_secs(15)).await;

        assert_eq!(mock.count_of(Cue::Reminder), 1);
        notifier.stop().await;
    }
}
