use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, instrument, Instrument};

use crate::messages::{StorefrontRequest, TimerEvent};

/// Schedules one-shot timer events back into the session mailbox.
///
/// Timers hold only a weak sender, so they never keep a finished session
/// alive. A timer cannot be cancelled once scheduled; if the session is gone
/// when it fires, the event is dropped.
#[derive(Debug, Clone)]
pub struct TimerScheduler {
    mailbox: mpsc::WeakSender<StorefrontRequest>,
}

impl TimerScheduler {
    pub fn new(mailbox: mpsc::WeakSender<StorefrontRequest>) -> Self {
        Self { mailbox }
    }

    #[instrument(skip(self))]
    pub fn schedule(&self, delay: Duration, event: TimerEvent) {
        let mailbox = self.mailbox.clone();
        tokio::spawn(
            async move {
                tokio::time::sleep(delay).await;
                let Some(sender) = mailbox.upgrade() else {
                    debug!("Session closed before timer fired");
                    return;
                };
                if sender.send(StorefrontRequest::Timer(event)).await.is_err() {
                    debug!("Session closed before timer fired");
                }
            }
            .in_current_span(),
        );
    }
}
