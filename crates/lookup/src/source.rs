//! The order-source port and its failure taxonomy.

use async_trait::async_trait;

/// Failure outcomes of one order query.
///
/// `NotFound` is expected and user-facing; `Server` is unexpected but
/// structured; `Connection` is transport-level. A 200 response whose
/// body fails to parse as JSON also maps to `Connection` -- the two are
/// deliberately not distinguished to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The order identifier is unknown to the collaborator (HTTP 404).
    #[error("order not found")]
    NotFound,

    /// The collaborator answered with a non-2xx, non-404 status.
    #[error("server error: {status}")]
    Server { status: u16 },

    /// No usable response was received.
    #[error("connection error: {message}")]
    Connection { message: String },
}

/// Discriminated outcome of one order query: `Ok` carries the JSON
/// payload, `Err` one of the three failure kinds. Produced once per
/// submission and consumed once by the flow.
pub type LookupResult = Result<serde_json::Value, LookupError>;

/// Read-only collaborator that resolves an order identifier to its
/// JSON document.
///
/// The identifier is passed verbatim -- no format validation happens on
/// this side of the contract.
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn lookup(&self, order_id: &str) -> LookupResult;
}

// ──────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────
