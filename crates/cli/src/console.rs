//! Console implementations of the two display ports.
//!
//! The terminal stands in for the page: banners go to stderr tagged
//! with their severity, the result markup goes to stdout. There is no
//! hide animation on a terminal, so the hide transition completes
//! immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use orderlens_lookup::ResultPane;
use orderlens_notify::{Notification, NotificationHost, NotificationId};

/// Notification container backed by stderr.
pub struct ConsoleHost;

#[async_trait]
impl NotificationHost for ConsoleHost {
    fn append(&self, notification: &Notification) {
        eprintln!("{}: {}", notification.severity, notification.message);
    }

    async fn hide(&self, _id: NotificationId) {}

    fn detach(&self, _id: NotificationId) {}
}

/// Result area backed by stdout.
///
/// One-shot: `show` prints the markup and flips a flag the caller reads
/// to pick the exit code. `clear` resets the flag; there is nothing on
/// a terminal to hide.
#[derive(Default)]
pub struct ConsolePane {
    rendered: Arc<AtomicBool>,
}

impl ConsolePane {
    pub fn new() -> Self {
        ConsolePane::default()
    }

    /// Handle that observes whether a result was shown.
    pub fn rendered_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.rendered)
    }
}

impl ResultPane for ConsolePane {
    fn clear(&self) {
        self.rendered.store(false, Ordering::SeqCst);
    }

    fn show(&self, markup: &str) {
        println!("{}", markup);
        self.rendered.store(true, Ordering::SeqCst);
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pane_tracks_whether_a_result_is_visible() {
        let pane = ConsolePane::new();
        let rendered = pane.rendered_handle();
        assert!(!rendered.load(Ordering::SeqCst));

        pane.show("<pre><code>{}</code></pre>");
        assert!(rendered.load(Ordering::SeqCst));

        pane.clear();
        assert!(!rendered.load(Ordering::SeqCst));
    }
}
