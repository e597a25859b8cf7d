use std::time::Duration;

pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_millis(3000);
pub const DEFAULT_MAILBOX_CAPACITY: usize = 100;

/// Tunables for one storefront session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Simulated "typing" latency before the bot answers.
    pub reply_delay: Duration,
    /// How long a banner stays up before it removes itself.
    pub notification_duration: Duration,
    pub mailbox_capacity: usize,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            reply_delay: DEFAULT_REPLY_DELAY,
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl StorefrontConfig {
    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }

    pub fn with_notification_duration(mut self, duration: Duration) -> Self {
        self.notification_duration = duration;
        self
    }

    /// Capacity is clamped to at least one slot.
    pub fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.reply_delay, Duration::from_millis(1000));
        assert_eq!(config.notification_duration, Duration::from_millis(3000));
        assert_eq!(config.mailbox_capacity, 100);
    }

    #[test]
    fn test_builder() {
        let config = StorefrontConfig::default()
            .with_reply_delay(Duration::from_millis(10))
            .with_notification_duration(Duration::from_millis(20))
            .with_mailbox_capacity(0);
        assert_eq!(config.reply_delay, Duration::from_millis(10));
        assert_eq!(config.notification_duration, Duration::from_millis(20));
        assert_eq!(config.mailbox_capacity, 1);
    }
}
