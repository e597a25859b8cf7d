//! Transient success banners.
//!
//! The notifier only tracks which banners are on screen. Dismissal timing
//! lives with the session actor, which schedules a one-shot dismissal for
//! every banner it shows.

use std::fmt;

use tracing::{debug, instrument};

pub const PRODUCT_ADDED: &str = "Product added to cart!";
pub const PRODUCT_REMOVED: &str = "Product removed from cart!";
pub const CONSULTATION_SUBMITTED: &str = "Consultation request submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
}

/// Stack of banners currently shown, oldest first.
#[derive(Debug, Default)]
pub struct Notifier {
    next_id: u64,
    active: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(skip(self))]
    pub fn push(&mut self, message: &str) -> NotificationId {
        self.next_id += 1;
        let id = NotificationId(self.next_id);
        self.active.push(Notification { id, message: message.to_string() });
        debug!(notification_id = %id, stacked = self.active.len(), "Notification shown");
        id
    }

    /// Removes the banner with `id`. Returns false when it is already gone.
    #[instrument(skip(self))]
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.active.len();
        self.active.retain(|n| n.id != id);
        let removed = self.active.len() != before;
        if removed {
            debug!("Notification dismissed");
        }
        removed
    }

    pub fn active(&self) -> &[Notification] {
        &self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifications_stack() {
        let mut notifier = Notifier::new();
        let first = notifier.push(PRODUCT_ADDED);
        let second = notifier.push(PRODUCT_ADDED);
        assert_ne!(first, second);
        assert_eq!(notifier.active().len(), 2);
    }

    #[test]
    fn test_dismiss_is_independent() {
        let mut notifier = Notifier::new();
        let first = notifier.push(PRODUCT_ADDED);
        let second = notifier.push(PRODUCT_REMOVED);

        assert!(notifier.dismiss(first));
        assert_eq!(notifier.active().len(), 1);
        assert_eq!(notifier.active()[0].id, second);
        assert!(!notifier.dismiss(first));
    }
}
