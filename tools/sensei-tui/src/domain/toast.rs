//! Transient notifications.

use std::time::{Duration, Instant};

pub const TOAST_LIFETIME: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    expires_at: Instant,
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>, now: Instant) {
        self.items.push(Toast {
            title: title.into(),
            description: description.into(),
            expires_at: now + TOAST_LIFETIME,
        });
    }

    /// Drop expired toasts.
    pub fn tick(&mut self, now: Instant) {
        self.items.retain(|t| t.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expires_after_lifetime() {
        let mut toasts = Toasts::new();
        let start = Instant::now();
        toasts.push("Running", "Connected! Program starting...", start);

        toasts.tick(start + Duration::from_millis(2999));
        assert_eq!(toasts.len(), 1);

        toasts.tick(start + TOAST_LIFETIME);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_toasts_stack() {
        let mut toasts = Toasts::new();
        let start = Instant::now();
        toasts.push("a", "first", start);
        toasts.push("b", "second", start + Duration::from_secs(2));

        toasts.tick(start + Duration::from_secs(4));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().map(|t| t.title.as_str()), Some("b"));
    }
}
