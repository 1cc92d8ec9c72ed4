//! # Notices
//!
//! Non-blocking, user-visible notifications (toasts). Components push a
//! `Notice` through the `Notifier` port; the host decides how to render it.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Neutral information.
    Info,
    /// Completed action.
    Success,
    /// Failed action.
    Destructive,
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Destructive,
        }
    }
}

/// Outbound port for user-visible notifications.
pub trait Notifier: Send + Sync {
    /// Show a notice. Must not block.
    fn notify(&self, notice: Notice);
}

/// In-memory notifier that keeps every notice it was given.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all notices in arrival order.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    /// Most recent notice, if any.
    pub fn last(&self) -> Option<Notice> {
        self.notices.lock().last().cloned()
    }

    /// Remove and return all notices.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl Notifier for NoticeBoard {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Destructive => {
                warn!(title = %notice.title, description = %notice.description, "notice")
            }
            _ => info!(title = %notice.title, description = %notice.description, "notice"),
        }
        self.notices.lock().push(notice);
    }
}
