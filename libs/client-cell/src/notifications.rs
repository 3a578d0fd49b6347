use std::time::{Duration, Instant};

/// Banners disappear on their own after this long.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "alert alert-success",
            NotificationKind::Error => "alert alert-error",
            NotificationKind::Info => "alert alert-info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

/// Newest first, matching how banners stack at the top of the page.
#[derive(Debug, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.push_at(message, kind, Instant::now());
    }

    pub fn push_at(&mut self, message: impl Into<String>, kind: NotificationKind, now: Instant) {
        self.items.insert(
            0,
            Notification {
                message: message.into(),
                kind,
                expires_at: now + NOTIFICATION_TTL,
            },
        );
    }

    /// Drops every banner whose time is up.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|n| n.expires_at > now);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_banner_is_first() {
        let mut notifications = Notifications::new();
        notifications.push("one", NotificationKind::Info);
        notifications.push("two", NotificationKind::Error);

        assert_eq!(notifications.latest().unwrap().message, "two");
        assert_eq!(notifications.len(), 2);
    }

    #[test]
    fn banners_expire_after_ttl() {
        let start = Instant::now();
        let mut notifications = Notifications::new();
        notifications.push_at("early", NotificationKind::Success, start);
        notifications.push_at("late", NotificationKind::Success, start + Duration::from_secs(3));

        notifications.prune(start + Duration::from_secs(4));
        assert_eq!(notifications.len(), 2);

        notifications.prune(start + NOTIFICATION_TTL);
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications.latest().unwrap().message, "late");

        notifications.prune(start + Duration::from_secs(9));
        assert!(notifications.is_empty());
    }
}
