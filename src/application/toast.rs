//! Transient, non-blocking notifications.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Most toasts kept on screen at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant, lifetime: Duration) -> bool {
        now.saturating_duration_since(self.created) >= lifetime
    }
}

/// Queue of live toasts, oldest first.
#[derive(Debug)]
pub struct Toasts {
    items: VecDeque<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            items: VecDeque::new(),
            lifetime,
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        if self.items.len() == MAX_VISIBLE_TOASTS {
            self.items.pop_front();
        }
        self.items.push_back(Toast {
            kind,
            message,
            created: Instant::now(),
        });
    }

    /// Drops every toast older than the configured lifetime.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.items.retain(|toast| !toast.is_expired(now, lifetime));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
