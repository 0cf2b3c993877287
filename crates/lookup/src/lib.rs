//! orderlens-lookup: one order query, one rendered outcome.
//!
//! [`OrderLookupFlow`] orchestrates a single request/response cycle:
//! clear the result pane, ask an [`OrderSource`] for the order, then
//! either render the payload through the highlighter into the
//! [`ResultPane`] (success) or raise a notification (any failure).
//!
//! The two display handles and the source are injected at construction;
//! nothing is looked up ad hoc. Errors never propagate past
//! [`OrderLookupFlow::submit`] -- every failure becomes exactly one
//! user-visible banner.

pub mod flow;
pub mod http;
pub mod source;

pub use flow::{OrderLookupFlow, ResultPane};
pub use http::HttpOrderSource;
pub use source::{LookupError, LookupResult, OrderSource};
