//! Error types for the request bridge.
//!
//! The remote data types never fail: a failed request is an `E` payload.
//! These errors describe problems with *running* requests: a spawned task
//! that never produced a result, or a result that arrived for a request
//! that has since been replaced.

use std::any::Any;

use super::resource::Ticket;

/// A spawned [`Task`](super::Task) ended without producing its value.
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::effect::TaskError;
///
/// let error = TaskError::Panicked("transport exploded".to_string());
/// assert_eq!(error.to_string(), "task panicked: transport exploded");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    /// The task was aborted before it completed.
    #[error("task was cancelled before completing")]
    Cancelled,
    /// The task panicked; carries the panic message when it was a string.
    #[error("task panicked: {0}")]
    Panicked(String),
}

impl From<tokio::task::JoinError> for TaskError {
    fn from(error: tokio::task::JoinError) -> Self {
        match error.try_into_panic() {
            Ok(payload) => Self::Panicked(panic_message(payload.as_ref())),
            Err(_) => Self::Cancelled,
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string())
}

/// A request outcome could not be applied to a
/// [`CachedResource`](super::CachedResource).
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::effect::CachedResource;
///
/// let resource: CachedResource<&str, i32> = CachedResource::default();
/// let first = resource.begin();
/// let second = resource.begin();
///
/// let error = resource.settle(first, Ok(1)).unwrap_err();
/// assert_eq!(error.to_string(), "request #1 was superseded by request #2");
/// assert!(resource.settle(second, Ok(2)).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SettleError {
    /// A newer request was dispatched, or the state was replaced, after this
    /// one began. The outcome was discarded.
    #[error("request {ticket} was superseded by request {latest}")]
    Superseded {
        /// The ticket the outcome was reported for.
        ticket: Ticket,
        /// The most recently issued ticket.
        latest: Ticket,
    },
}
