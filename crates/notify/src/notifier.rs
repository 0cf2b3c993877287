//! The Notifier: owns live notifications and drives their auto-dismiss.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::state::{Notification, NotificationId, NotificationState, Severity};

/// Visible duration before the auto-hide transition begins.
pub const AUTO_HIDE: Duration = Duration::from_millis(3000);

/// The display surface notifications are mounted on.
///
/// The host is a handle to one well-known container, passed in at
/// construction. The Notifier only needs three capabilities: append an
/// element (newest last), run an element's hide transition, and detach
/// an element. `hide` returns once the transition has completed; a host
/// without animation may return immediately.
///
/// Implementations must be `Send + Sync + 'static` so the auto-dismiss
/// tasks can hold the host across await points.
#[async_trait]
pub trait NotificationHost: Send + Sync + 'static {
    /// Append a new notification element at the end of the container.
    fn append(&self, notification: &Notification);

    /// Start the hide transition for `id`, resolving when it completes.
    async fn hide(&self, id: NotificationId);

    /// Detach the element for `id` from the container.
    fn detach(&self, id: NotificationId);
}

/// Creates and auto-dismisses transient notifications on a host.
///
/// Each `notify` spawns one independent timer task; notifications share
/// no clock and no ordering beyond append order. `detach` is called on
/// the host exactly once per notification, whichever of the two removal
/// paths (timer or manual dismissal) gets there first.
pub struct Notifier<H: NotificationHost> {
    host: Arc<H>,
    live: Arc<Mutex<HashMap<NotificationId, Notification>>>,
    next_id: AtomicU64,
    auto_hide: Duration,
}

impl<H: NotificationHost> Notifier<H> {
    pub fn new(host: H) -> Self {
        Notifier {
            host: Arc::new(host),
            live: Arc::new(Mutex::new(HashMap::new())),
            next_id: AtomicU64::new(1),
            auto_hide: AUTO_HIDE,
        }
    }

    /// Override the auto-hide delay (tests use a short one).
    pub fn with_auto_hide(host: H, auto_hide: Duration) -> Self {
        let mut notifier = Notifier::new(host);
        notifier.auto_hide = auto_hide;
        notifier
    }

    /// Show a message with the given severity. Fire-and-forget: the
    /// notification is appended to the host immediately and its
    /// auto-dismiss timer starts now. Must be called within a tokio
    /// runtime.
    ///
    /// Returns the handle usable for manual dismissal.
    pub fn notify(&self, message: &str, severity: Severity) -> NotificationId {
        let id = NotificationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let notification = Notification::new(id, message, severity);
        self.host.append(&notification);
        lock(&self.live).insert(id, notification);

        let host = Arc::clone(&self.host);
        let live = Arc::clone(&self.live);
        let auto_hide = self.auto_hide;
        tokio::spawn(async move {
            tokio::time::sleep(auto_hide).await;

            // Shown → Hiding. Fails when the notification was already
            // dismissed manually; the timer is then a no-op.
            let begin_hide = lock(&live).get_mut(&id).is_some_and(|n| n.timer_elapsed());
            if !begin_hide {
                return;
            }

            host.hide(id).await;

            // Hiding → Removed, unless a manual dismissal won the race
            // while the transition was running.
            let removed = {
                let mut live = lock(&live);
                match live.get_mut(&id) {
                    Some(n) => {
                        if n.hide_finished() {
                            live.remove(&id);
                            true
                        } else {
                            false
                        }
                    }
                    None => false,
                }
            };
            if removed {
                host.detach(id);
            }
        });

        id
    }

    /// Show a message with the default severity (danger).
    pub fn notify_default(&self, message: &str) -> NotificationId {
        self.notify(message, Severity::default())
    }

    /// Manually dismiss a notification: removed immediately, skipping the
    /// hide transition. Dismissing an unknown or already-removed id is a
    /// no-op; returns whether this call removed it.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let removed = {
            let mut live = lock(&self.live);
            match live.get_mut(&id) {
                Some(n) => {
                    if n.dismiss() {
                        live.remove(&id);
                        true
                    } else {
                        false
                    }
                }
                None => false,
            }
        };
        if removed {
            self.host.detach(id);
        }
        removed
    }

    /// Current state of a notification, or `None` once removed.
    pub fn state(&self, id: NotificationId) -> Option<NotificationState> {
        lock(&self.live).get(&id).map(|n| n.state())
    }

    /// Number of notifications not yet removed.
    pub fn live_count(&self) -> usize {
        lock(&self.live).len()
    }
}

// Recover data even if the mutex was poisoned by a panic in another task.
fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Event {
        Appended(NotificationId, Severity, String),
        HideStarted(NotificationId),
        Detached(NotificationId),
    }

    /// Host that records every call; hide completes immediately.
    #[derive(Default)]
    struct RecordingHost {
        events: Mutex<Vec<Event>>,
    }

    impl RecordingHost {
        fn events(&self) -> Vec<Event> {
            self.events.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl NotificationHost for Arc<RecordingHost> {
        fn append(&self, notification: &Notification) {
            self.events.lock().unwrap().push(Event::Appended(
                notification.id,
                notification.severity,
                notification.message.clone(),
            ));
        }

        async fn hide(&self, id: NotificationId) {
            self.events.lock().unwrap().push(Event::HideStarted(id));
        }

        fn detach(&self, id: NotificationId) {
            self.events.lock().unwrap().push(Event::Detached(id));
        }
    }

    fn short_notifier(host: Arc<RecordingHost>) -> Notifier<Arc<RecordingHost>> {
        Notifier::with_auto_hide(host, Duration::from_millis(10))
    }

    #[tokio::test]
    async fn auto_dismiss_appends_hides_then_detaches() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let id = notifier.notify("saved", Severity::Success);
        assert_eq!(notifier.state(id), Some(NotificationState::Shown));

        tokio::time::sleep(Duration::from_millis(60)).await;

        assert_eq!(
            host.events(),
            vec![
                Event::Appended(id, Severity::Success, "saved".to_string()),
                Event::HideStarted(id),
                Event::Detached(id),
            ]
        );
        assert_eq!(notifier.state(id), None);
        assert_eq!(notifier.live_count(), 0);
    }

    #[tokio::test]
    async fn manual_dismiss_detaches_immediately_and_timer_is_noop() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let id = notifier.notify("oops", Severity::Danger);
        assert!(notifier.dismiss(id));
        assert_eq!(notifier.state(id), None);

        // Let the pending timer fire on the already-removed notification.
        tokio::time::sleep(Duration::from_millis(60)).await;

        let events = host.events();
        assert_eq!(
            events,
            vec![
                Event::Appended(id, Severity::Danger, "oops".to_string()),
                Event::Detached(id),
            ]
        );
        // No second detach, no hide transition.
        assert_eq!(
            events.iter().filter(|e| matches!(e, Event::Detached(_))).count(),
            1
        );
    }

    #[tokio::test]
    async fn dismissing_twice_detaches_once() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let id = notifier.notify("msg", Severity::Info);
        assert!(notifier.dismiss(id));
        assert!(!notifier.dismiss(id));

        tokio::time::sleep(Duration::from_millis(30)).await;
        let detaches = host
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Detached(_)))
            .count();
        assert_eq!(detaches, 1);
    }

    #[tokio::test]
    async fn notifications_are_independent() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let a = notifier.notify("first", Severity::Warning);
        let b = notifier.notify("second", Severity::Info);
        assert_ne!(a, b);
        assert_eq!(notifier.live_count(), 2);

        // Dismissing one leaves the other alive and on its own timer.
        notifier.dismiss(a);
        assert_eq!(notifier.state(a), None);
        assert_eq!(notifier.state(b), Some(NotificationState::Shown));

        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(notifier.live_count(), 0);
    }

    #[tokio::test]
    async fn notify_default_is_danger() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let id = notifier.notify_default("boom");
        let events = host.events();
        assert_eq!(
            events[0],
            Event::Appended(id, Severity::Danger, "boom".to_string())
        );
    }

    #[tokio::test]
    async fn dismiss_after_auto_dismiss_completed_is_a_noop() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));

        let id = notifier.notify("done", Severity::Success);
        tokio::time::sleep(Duration::from_millis(60)).await;

        // The timer path already removed and detached it.
        assert_eq!(notifier.state(id), None);
        assert!(!notifier.dismiss(id));

        let detaches = host
            .events()
            .iter()
            .filter(|e| matches!(e, Event::Detached(_)))
            .count();
        assert_eq!(detaches, 1);
    }

    #[tokio::test]
    async fn dismissing_unknown_id_is_a_noop() {
        let host = Arc::new(RecordingHost::default());
        let notifier = short_notifier(Arc::clone(&host));
        assert!(!notifier.dismiss(NotificationId(999)));
        assert!(host.events().is_empty());
    }
}
