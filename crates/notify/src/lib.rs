//! orderlens-notify: transient, dismissible status notifications.
//!
//! A [`Notifier`] appends [`Notification`]s to a [`NotificationHost`]
//! (the display surface) and auto-dismisses each one after a fixed
//! visible duration. Each notification walks an explicit state machine,
//! `Shown → Hiding → Removed`, driven by three single-shot events:
//! timer elapse, hide-transition completion, and manual dismissal.
//! Manual dismissal skips `Hiding` and removes immediately; a timer that
//! fires afterwards is a no-op.
//!
//! Notifications are independent: one auto-dismiss task each, no shared
//! clock, no ordering dependency between live notifications.

pub mod notifier;
pub mod state;

pub use notifier::{NotificationHost, Notifier, AUTO_HIDE};
pub use state::{Notification, NotificationId, NotificationState, Severity};
