//! Transient notifications.

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u64 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification shown in the bottom-right corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: &'static str,
    pub description: &'static str,
    pub shown_at_ms: u64,
}

impl Toast {
    pub fn sent(now_ms: u64) -> Self {
        Self {
            kind: ToastKind::Success,
            title: "Message Sent!",
            description: "Thank you for reaching out. I'll get back to you soon.",
            shown_at_ms: now_ms,
        }
    }

    pub fn send_failed(now_ms: u64) -> Self {
        Self {
            kind: ToastKind::Error,
            title: "Failed to send message",
            description: "Please try again or contact me directly.",
            shown_at_ms: now_ms,
        }
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.shown_at_ms) >= TOAST_LIFETIME_MS
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    items: Vec<Toast>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        log::info!("{}: {}", toast.title, toast.description);
        self.items.push(toast);
    }

    /// Drop expired toasts.
    pub fn prune(&mut self, now_ms: u64) {
        self.items.retain(|t| !t.is_expired(now_ms));
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toasts_expire() {
        let mut toasts = Toasts::new();
        toasts.push(Toast::sent(0));
        toasts.push(Toast::send_failed(3000));

        toasts.prune(TOAST_LIFETIME_MS - 1);
        assert_eq!(toasts.len(), 2);

        toasts.prune(TOAST_LIFETIME_MS);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().kind, ToastKind::Error);

        toasts.prune(3000 + TOAST_LIFETIME_MS);
        assert!(toasts.is_empty());
    }
}
