//! A single-owner container for the current state of one remote resource.
//!
//! [`CachedResource`] holds "the current" [`CachedRemoteData`] and performs
//! the dispatch and settle transitions atomically. Every dispatch issues a
//! [`Ticket`]; only the outcome for the latest ticket is applied, so two
//! overlapping requests for the same resource can never apply out of order.
//!
//! The lock is never held across an `.await`.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::effect::CachedResource;
//! use cached_remote_data::remote::CachedRemoteData;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let resource: CachedResource<String, u32> = CachedResource::default();
//!
//! resource.refresh(|| async { Ok(7) }).await.unwrap();
//! assert_eq!(resource.snapshot(), CachedRemoteData::Success(7));
//!
//! resource
//!     .refresh(|| async { Err("503".to_string()) })
//!     .await
//!     .unwrap();
//! assert_eq!(resource.snapshot(), CachedRemoteData::Stale("503".to_string(), 7));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use parking_lot::Mutex;

use super::error::SettleError;
use crate::remote::{CachedRemoteData, StateKind};

/// Identifies one dispatched request of a [`CachedResource`].
///
/// Tickets are issued in increasing order; a resource only accepts the
/// outcome for the most recent one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Ticket(u64);

impl Ticket {
    /// The generation number of this ticket. The first dispatch is `1`.
    #[inline]
    pub const fn generation(self) -> u64 {
        self.0
    }

    #[inline]
    const fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "#{}", self.0)
    }
}

struct ResourceState<E, A> {
    current: CachedRemoteData<E, A>,
    latest: Ticket,
}

/// The current state of one remote resource, shared between the code that
/// renders it and the code that refreshes it.
///
/// Cloning a `CachedResource` yields another handle to the same state.
pub struct CachedResource<E, A> {
    state: Arc<Mutex<ResourceState<E, A>>>,
}

impl<E, A> Clone for CachedResource<E, A> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<E, A> Default for CachedResource<E, A> {
    fn default() -> Self {
        Self::new(CachedRemoteData::NotAsked)
    }
}

impl<E, A> fmt::Debug for CachedResource<E, A>
where
    E: fmt::Debug,
    A: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        formatter
            .debug_struct("CachedResource")
            .field("current", &state.current)
            .field("latest", &state.latest)
            .finish()
    }
}

impl<E, A> CachedResource<E, A> {
    /// Creates a resource holding `initial`.
    pub fn new(initial: CachedRemoteData<E, A>) -> Self {
        Self {
            state: Arc::new(Mutex::new(ResourceState {
                current: initial,
                latest: Ticket(0),
            })),
        }
    }

    /// Runs `function` against the current state without cloning it.
    pub fn with_current<R, F>(&self, function: F) -> R
    where
        F: FnOnce(&CachedRemoteData<E, A>) -> R,
    {
        function(&self.state.lock().current)
    }

    /// The variant of the current state.
    pub fn kind(&self) -> StateKind {
        self.with_current(CachedRemoteData::kind)
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CachedRemoteData<E, A>
    where
        E: Clone,
        A: Clone,
    {
        self.with_current(Clone::clone)
    }

    /// Marks a request as dispatched.
    ///
    /// The state moves to `Refreshing` if it holds a value and to `Loading`
    /// otherwise. The returned ticket must be passed to [`settle`](Self::settle).
    pub fn begin(&self) -> Ticket {
        let mut state = self.state.lock();
        let previous = state.current.kind();
        let ticket = state.latest.next();
        state.latest = ticket;
        state.current = std::mem::take(&mut state.current).start_loading();
        tracing::debug!(
            %ticket,
            %previous,
            state = %state.current.kind(),
            "request dispatched"
        );
        ticket
    }

    /// Applies the outcome of the request identified by `ticket`.
    ///
    /// A failure keeps any cached value as `Stale`. Returns the resulting
    /// state kind.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Superseded`] if another request was dispatched
    /// or the state was [replaced](Self::replace) after `ticket` was issued.
    /// The state is left untouched in that case.
    pub fn settle(&self, ticket: Ticket, result: Result<A, E>) -> Result<StateKind, SettleError> {
        let mut state = self.state.lock();
        if ticket != state.latest {
            tracing::warn!(%ticket, latest = %state.latest, "discarding superseded response");
            return Err(SettleError::Superseded {
                ticket,
                latest: state.latest,
            });
        }
        state.current = std::mem::take(&mut state.current).settle(result);
        let kind = state.current.kind();
        tracing::debug!(%ticket, state = %kind, "request settled");
        Ok(kind)
    }

    /// Overwrites the current state and invalidates every outstanding ticket.
    pub fn replace(&self, new_state: CachedRemoteData<E, A>) {
        let mut state = self.state.lock();
        state.latest = state.latest.next();
        state.current = new_state;
        tracing::debug!(state = %state.current.kind(), "state replaced");
    }

    /// Dispatches `operation`, awaits it and settles its outcome.
    ///
    /// # Errors
    ///
    /// Returns [`SettleError::Superseded`] if a newer request was dispatched
    /// while this one was in flight.
    pub async fn refresh<Op, Fut>(&self, operation: Op) -> Result<StateKind, SettleError>
    where
        Op: FnOnce() -> Fut,
        Fut: Future<Output = Result<A, E>>,
    {
        let ticket = self.begin();
        let result = operation().await;
        self.settle(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    type Resource = CachedResource<&'static str, &'static str>;

    #[rstest]
    fn tickets_increase() {
        let resource = Resource::default();
        let first = resource.begin();
        let second = resource.begin();
        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert_eq!(second.to_string(), "#2");
    }

    #[rstest]
    fn begin_on_empty_resource_is_loading() {
        let resource = Resource::default();
        resource.begin();
        assert_eq!(resource.snapshot(), CachedRemoteData::Loading);
    }

    #[rstest]
    fn begin_on_success_is_refreshing() {
        let resource = Resource::new(CachedRemoteData::Success("data"));
        resource.begin();
        assert_eq!(resource.snapshot(), CachedRemoteData::Refreshing("data"));
    }

    #[rstest]
    fn settle_failure_over_cached_value_is_stale() {
        let resource = Resource::new(CachedRemoteData::Success("data"));
        let ticket = resource.begin();
        assert_eq!(resource.settle(ticket, Err("503")), Ok(StateKind::Stale));
        assert_eq!(resource.snapshot(), CachedRemoteData::Stale("503", "data"));
    }

    #[rstest]
    fn superseded_settle_leaves_state_untouched() {
        let resource = Resource::default();
        let old = resource.begin();
        let new = resource.begin();

        let error = resource.settle(old, Ok("old")).unwrap_err();
        assert_eq!(error, SettleError::Superseded { ticket: old, latest: new });
        assert_eq!(resource.kind(), StateKind::Loading);

        assert_eq!(resource.settle(new, Ok("new")), Ok(StateKind::Success));
        assert_eq!(resource.snapshot(), CachedRemoteData::Success("new"));
    }

    #[rstest]
    fn replace_invalidates_outstanding_tickets() {
        let resource = Resource::default();
        let ticket = resource.begin();
        resource.replace(CachedRemoteData::Success("manual"));
        assert!(resource.settle(ticket, Ok("late")).is_err());
        assert_eq!(resource.snapshot(), CachedRemoteData::Success("manual"));
    }

    #[rstest]
    fn clones_share_state() {
        let resource = Resource::default();
        let other = resource.clone();
        let ticket = other.begin();
        resource.settle(ticket, Ok("shared")).unwrap();
        assert_eq!(other.snapshot(), CachedRemoteData::Success("shared"));
    }
}
