//! The lookup flow: clear, fetch, then render or notify.

use orderlens_highlight::highlight_value;
use orderlens_notify::{NotificationHost, Notifier, Severity};

use crate::source::{LookupError, OrderSource};

/// Banner text for an unknown order identifier.
pub const NOT_FOUND_MESSAGE: &str = "Order with this UID not found";

/// Banner text for a transport-level failure.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error";

/// The single-slot result area of the display.
///
/// `clear` empties and hides the slot; `show` overwrites its contents
/// and makes it visible.
pub trait ResultPane: Send + Sync {
    fn clear(&self);
    fn show(&self, markup: &str);
}

/// Orchestrates one request/response cycle per submission.
///
/// All collaborators are injected at construction: the order source,
/// the result pane, and the notifier with its host. Submissions are
/// independent; an in-flight request from a previous submission is not
/// aborted, so overlapping submissions resolve last-response-wins on
/// the pane.
pub struct OrderLookupFlow<H: NotificationHost> {
    source: Box<dyn OrderSource>,
    pane: Box<dyn ResultPane>,
    notifier: Notifier<H>,
}

impl<H: NotificationHost> OrderLookupFlow<H> {
    pub fn new(
        source: Box<dyn OrderSource>,
        pane: Box<dyn ResultPane>,
        notifier: Notifier<H>,
    ) -> Self {
        OrderLookupFlow {
            source,
            pane,
            notifier,
        }
    }

    /// The notifier, for wiring manual dismissal from the host.
    pub fn notifier(&self) -> &Notifier<H> {
        &self.notifier
    }

    /// Submit one order lookup. Suspends at the network boundary and
    /// resolves to exactly one outcome, with no retries:
    ///
    /// - success: the payload is highlighted and shown in the pane
    /// - not found: one warning banner, pane stays cleared
    /// - server error: one danger banner carrying the status
    /// - connection failure (or malformed body): one danger banner
    ///
    /// The order id is used verbatim. Nothing propagates past this
    /// method.
    pub async fn submit(&self, order_id: &str) {
        self.pane.clear();

        match self.source.lookup(order_id).await {
            Ok(payload) => {
                let markup = format!("<pre><code>{}</code></pre>", highlight_value(&payload));
                self.pane.show(&markup);
            }
            Err(LookupError::NotFound) => {
                self.notifier.notify(NOT_FOUND_MESSAGE, Severity::Warning);
            }
            Err(LookupError::Server { status }) => {
                self.notifier
                    .notify(&format!("Server error: {}", status), Severity::Danger);
            }
            Err(LookupError::Connection { .. }) => {
                self.notifier.notify(CONNECTION_ERROR_MESSAGE, Severity::Danger);
            }
        }
    }
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
