//! Notification data model and visibility state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual/semantic category of a notification. Closed set; each value
/// maps to a distinct display style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Danger,
    Warning,
    Success,
    Info,
}

impl Severity {
    /// The style name for this severity (`"danger"`, `"warning"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Danger => "danger",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque handle for one live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

/// Visibility state of a notification.
///
/// `Removed` is terminal: the notification is detached from the display
/// and ceases to exist. Every event on a `Removed` notification is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    Shown,
    Hiding,
    Removed,
}

/// One transient status message, alive from creation until `Removed`.
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
    state: NotificationState,
}

impl Notification {
    pub fn new(id: NotificationId, message: impl Into<String>, severity: Severity) -> Self {
        Notification {
            id,
            message: message.into(),
            severity,
            state: NotificationState::Shown,
        }
    }

    pub fn state(&self) -> NotificationState {
        self.state
    }

    /// Auto-dismiss timer elapsed: `Shown → Hiding`.
    ///
    /// Returns whether the transition happened. Already `Hiding` or
    /// `Removed` notifications are left untouched.
    pub fn timer_elapsed(&mut self) -> bool {
        if self.state == NotificationState::Shown {
            self.state = NotificationState::Hiding;
            true
        } else {
            false
        }
    }

    /// Hide transition completed: `Hiding → Removed`.
    ///
    /// Returns whether the notification reached `Removed` through this
    /// event (i.e. the caller is the one that must detach it).
    pub fn hide_finished(&mut self) -> bool {
        if self.state == NotificationState::Hiding {
            self.state = NotificationState::Removed;
            true
        } else {
            false
        }
    }

    /// Manual dismissal: `Shown | Hiding → Removed`, with zero delay.
    ///
    /// Returns whether the notification reached `Removed` through this
    /// event. A second dismissal, or one racing a completed auto-dismiss,
    /// returns false and changes nothing.
    pub fn dismiss(&mut self) -> bool {
        if self.state == NotificationState::Removed {
            false
        } else {
            self.state = NotificationState::Removed;
            true
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
