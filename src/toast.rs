//! Transient notifications raised by the pages.
//!
//! Page models never touch timers or the DOM. They return a [`Notification`]
//! value and the toaster in `components::toaster` decides when it appears and
//! when it goes away. [`ToastQueue`] is the bookkeeping behind that: a bounded
//! set of visible toasts plus a FIFO of toasts waiting for a free slot.

use std::collections::VecDeque;

/// Presentation style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Default,
    /// Rejected input or a failed request.
    Destructive,
}

impl Variant {
    pub fn css_class(self) -> &'static str {
        match self {
            Variant::Default => "toast toast-default",
            Variant::Destructive => "toast toast-destructive",
        }
    }
}

/// A message for the user: a short title and a one-line description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub variant: Variant,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Default,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

/// Identifier handed out by [`ToastQueue::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

/// A queued or visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
}

/// Visible toasts (oldest first) and the backlog behind them.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    visible: VecDeque<Toast>,
    waiting: VecDeque<Toast>,
    limit: usize,
    next_id: u64,
}

impl ToastQueue {
    /// Creates a queue showing at most `limit` toasts (never fewer than one).
    pub fn new(limit: usize) -> Self {
        Self {
            visible: VecDeque::new(),
            waiting: VecDeque::new(),
            limit: limit.max(1),
            next_id: 0,
        }
    }

    /// Adds a notification, showing it right away when a slot is free.
    pub fn push(&mut self, notification: Notification) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast { id, notification };
        if self.visible.len() < self.limit {
            self.visible.push_back(toast);
        } else {
            self.waiting.push_back(toast);
        }
        id
    }

    /// Removes a toast wherever it is.
    ///
    /// Returns `None` if the id is unknown (already dismissed), otherwise the
    /// ids of waiting toasts that just became visible.
    pub fn dismiss(&mut self, id: ToastId) -> Option<Vec<ToastId>> {
        if let Some(pos) = self.visible.iter().position(|t| t.id == id) {
            self.visible.remove(pos);
            return Some(self.promote());
        }

        let pos = self.waiting.iter().position(|t| t.id == id)?;
        self.waiting.remove(pos);
        Some(Vec::new())
    }

    pub fn is_visible(&self, id: ToastId) -> bool {
        self.visible.iter().any(|t| t.id == id)
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    fn promote(&mut self) -> Vec<ToastId> {
        let mut promoted = Vec::new();
        while self.visible.len() < self.limit {
            let Some(toast) = self.waiting.pop_front() else {
                break;
            };
            promoted.push(toast.id);
            self.visible.push_back(toast);
        }
        promoted
    }
}
