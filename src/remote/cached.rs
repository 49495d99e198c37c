//! The six-state cached remote value.
//!
//! [`CachedRemoteData`] extends [`RemoteData`] with two states that remember
//! a previously successful value: `Refreshing` while a new request is in
//! flight, and `Stale` after that request failed. A UI can keep rendering
//! the cached value in both.
//!
//! # Lifecycle
//!
//! ```text
//!            start_loading              settle(Err)
//! NotAsked ───────────────▶ Loading ───────────────▶ Failure
//!                              │
//!                              │ settle(Ok)
//!                              ▼
//!           ┌──────────────▶ Success ◀───────────────┐
//!           │ settle(Ok)       │ start_loading       │ settle(Ok)
//!           │                  ▼                     │
//!           └────────────── Refreshing ──────────▶ Stale
//!                                      settle(Err)
//! ```
//!
//! Values are only ever carried forward: no constructor or transition
//! produces `Refreshing` or `Stale` without a value it was handed.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//!
//! let fresh: CachedRemoteData<&str, &str> = CachedRemoteData::from_result(Ok("data"));
//! let refreshing = fresh.start_loading();
//! assert_eq!(refreshing, CachedRemoteData::Refreshing("data"));
//!
//! let stale = refreshing.settle(Err("503"));
//! assert_eq!(stale, CachedRemoteData::Stale("503", "data"));
//! assert_eq!(stale.value(), Some("data"));
//! ```

use super::kind::StateKind;
use super::remote_data::RemoteData;

/// A remote value that may keep a previously fetched value around.
///
/// Exactly one of six states. A value payload is present in `Success`,
/// `Refreshing` and `Stale`; an error payload is present in `Failure` and
/// `Stale`.
///
/// # Type Parameters
///
/// * `E` - The error payload of a failed request
/// * `A` - The value payload of a successful request
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::remote::CachedRemoteData;
///
/// let cached: CachedRemoteData<String, i32> = CachedRemoteData::Refreshing(7);
/// assert!(cached.is_refreshing());
/// assert_eq!(cached.value_ref(), Some(&7));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CachedRemoteData<E, A> {
    /// No request has been made and nothing is cached.
    NotAsked,
    /// A first request is in flight; nothing is cached.
    Loading,
    /// The only request failed; nothing is cached.
    Failure(E),
    /// The latest request succeeded with this value.
    Success(A),
    /// A value is cached and a new request is in flight.
    Refreshing(A),
    /// A value is cached and the latest request failed with this error.
    Stale(E, A),
}

static_assertions::assert_impl_all!(CachedRemoteData<String, i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(CachedRemoteData<(), ()>: Copy);

impl<E, A> Default for CachedRemoteData<E, A> {
    #[inline]
    fn default() -> Self {
        Self::NotAsked
    }
}

impl<E, A> CachedRemoteData<E, A> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Lifts a four-state [`RemoteData`] without inventing any cached value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::{CachedRemoteData, RemoteData};
    ///
    /// let loading: RemoteData<String, i32> = RemoteData::Loading;
    /// assert_eq!(CachedRemoteData::from_remote_data(loading), CachedRemoteData::Loading);
    /// ```
    #[inline]
    pub fn from_remote_data(remote_data: RemoteData<E, A>) -> Self {
        match remote_data {
            RemoteData::NotAsked => Self::NotAsked,
            RemoteData::Loading => Self::Loading,
            RemoteData::Failure(error) => Self::Failure(error),
            RemoteData::Success(value) => Self::Success(value),
        }
    }

    /// Builds a state from a cached value alone: `None` is `NotAsked`,
    /// `Some(v)` is `Success(v)`.
    #[inline]
    pub fn from_value(value: Option<A>) -> Self {
        value.map_or(Self::NotAsked, Self::Success)
    }

    /// Builds a settled state from a request outcome.
    #[inline]
    pub fn from_result(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    /// Combines a previously cached value with a fresh request outcome.
    ///
    /// A failed request over a cached value yields `Stale(e, v)` so the value
    /// survives; every other combination is [`from_result`](Self::from_result)
    /// and the cached value is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let kept: CachedRemoteData<&str, &str> =
    ///     CachedRemoteData::from_value_and_result(Some("old"), Err("503"));
    /// assert_eq!(kept, CachedRemoteData::Stale("503", "old"));
    ///
    /// let replaced: CachedRemoteData<&str, &str> =
    ///     CachedRemoteData::from_value_and_result(Some("old"), Ok("new"));
    /// assert_eq!(replaced, CachedRemoteData::Success("new"));
    /// ```
    #[inline]
    pub fn from_value_and_result(value: Option<A>, result: Result<A, E>) -> Self {
        match (value, result) {
            (Some(value), Err(error)) => Self::Stale(error, value),
            (_, result) => Self::from_result(result),
        }
    }

    /// Combines a previously cached value with a four-state snapshot.
    ///
    /// With a cached value `v`:
    ///
    /// | `remote_data` | result |
    /// |---|---|
    /// | `NotAsked` | `Success(v)` |
    /// | `Loading` | `Refreshing(v)` |
    /// | `Failure(e)` | `Stale(e, v)` |
    /// | `Success(w)` | `Success(w)` |
    ///
    /// Without a cached value this is [`from_remote_data`](Self::from_remote_data).
    #[inline]
    pub fn from_value_and_remote_data(value: Option<A>, remote_data: RemoteData<E, A>) -> Self {
        match (value, remote_data) {
            (Some(value), RemoteData::NotAsked) => Self::Success(value),
            (Some(value), RemoteData::Loading) => Self::Refreshing(value),
            (Some(value), RemoteData::Failure(error)) => Self::Stale(error, value),
            (_, remote_data) => Self::from_remote_data(remote_data),
        }
    }

    // =========================================================================
    // State Predicates
    // =========================================================================

    /// Returns `true` if this is `NotAsked`.
    #[inline]
    pub const fn is_not_asked(&self) -> bool {
        matches!(self, Self::NotAsked)
    }

    /// Returns `true` if this is `Loading`.
    #[inline]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if this is `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is `Refreshing`.
    #[inline]
    pub const fn is_refreshing(&self) -> bool {
        matches!(self, Self::Refreshing(_))
    }

    /// Returns `true` if this is `Stale`.
    #[inline]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale(_, _))
    }

    /// Names the current state without its payload.
    #[inline]
    pub const fn kind(&self) -> StateKind {
        match self {
            Self::NotAsked => StateKind::NotAsked,
            Self::Loading => StateKind::Loading,
            Self::Failure(_) => StateKind::Failure,
            Self::Success(_) => StateKind::Success,
            Self::Refreshing(_) => StateKind::Refreshing,
            Self::Stale(_, _) => StateKind::Stale,
        }
    }

    // =========================================================================
    // Projections (Consuming)
    // =========================================================================

    /// Collapses to the four-state shape.
    ///
    /// `Refreshing` reads as `Loading` and `Stale(e, _)` as `Failure(e)`; the
    /// cached value is dropped in both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::{CachedRemoteData, RemoteData};
    ///
    /// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("503", 1);
    /// assert_eq!(stale.remote_data(), RemoteData::Failure("503"));
    /// ```
    #[inline]
    pub fn remote_data(self) -> RemoteData<E, A> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading | Self::Refreshing(_) => RemoteData::Loading,
            Self::Failure(error) | Self::Stale(error, _) => RemoteData::Failure(error),
            Self::Success(value) => RemoteData::Success(value),
        }
    }

    /// Returns the value of `Success`, `Refreshing` or `Stale`.
    #[inline]
    pub fn value(self) -> Option<A> {
        match self {
            Self::Success(value) | Self::Refreshing(value) | Self::Stale(_, value) => Some(value),
            Self::NotAsked | Self::Loading | Self::Failure(_) => None,
        }
    }

    /// Returns the outcome of the latest settled request.
    ///
    /// `Refreshing` carries a value but has no outcome yet, so it yields `None`
    /// like `NotAsked` and `Loading`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("503", 1);
    /// assert_eq!(stale.result(), Some(Err("503")));
    ///
    /// let refreshing: CachedRemoteData<&str, i32> = CachedRemoteData::Refreshing(1);
    /// assert_eq!(refreshing.result(), None);
    /// ```
    #[inline]
    pub fn result(self) -> Option<Result<A, E>> {
        match self {
            Self::Success(value) => Some(Ok(value)),
            Self::Failure(error) | Self::Stale(error, _) => Some(Err(error)),
            Self::NotAsked | Self::Loading | Self::Refreshing(_) => None,
        }
    }

    /// Returns the error of `Failure` or `Stale`.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Failure(error) | Self::Stale(error, _) => Some(error),
            Self::NotAsked | Self::Loading | Self::Success(_) | Self::Refreshing(_) => None,
        }
    }

    /// Returns the carried value, or `default` when there is none.
    #[inline]
    pub fn with_default(self, default: A) -> A {
        self.value().unwrap_or(default)
    }

    // =========================================================================
    // Projections (Borrowing)
    // =========================================================================

    /// Borrows both payloads, keeping the state.
    #[inline]
    pub const fn as_ref(&self) -> CachedRemoteData<&E, &A> {
        match self {
            Self::NotAsked => CachedRemoteData::NotAsked,
            Self::Loading => CachedRemoteData::Loading,
            Self::Failure(error) => CachedRemoteData::Failure(error),
            Self::Success(value) => CachedRemoteData::Success(value),
            Self::Refreshing(value) => CachedRemoteData::Refreshing(value),
            Self::Stale(error, value) => CachedRemoteData::Stale(error, value),
        }
    }

    /// Borrowing counterpart of [`value`](Self::value).
    #[inline]
    pub const fn value_ref(&self) -> Option<&A> {
        match self {
            Self::Success(value) | Self::Refreshing(value) | Self::Stale(_, value) => Some(value),
            Self::NotAsked | Self::Loading | Self::Failure(_) => None,
        }
    }

    /// Borrowing counterpart of [`result`](Self::result).
    #[inline]
    pub const fn result_ref(&self) -> Option<Result<&A, &E>> {
        match self {
            Self::Success(value) => Some(Ok(value)),
            Self::Failure(error) | Self::Stale(error, _) => Some(Err(error)),
            Self::NotAsked | Self::Loading | Self::Refreshing(_) => None,
        }
    }

    /// Borrowing counterpart of [`error`](Self::error).
    #[inline]
    pub const fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Failure(error) | Self::Stale(error, _) => Some(error),
            Self::NotAsked | Self::Loading | Self::Success(_) | Self::Refreshing(_) => None,
        }
    }

    // =========================================================================
    // Request Transitions
    // =========================================================================

    /// The state to show while a request is dispatched.
    ///
    /// Any state holding a value becomes `Refreshing` with that value; the
    /// others become `Loading`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let failed: CachedRemoteData<&str, i32> = CachedRemoteData::Failure("timeout");
    /// assert_eq!(failed.start_loading(), CachedRemoteData::Loading);
    ///
    /// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("503", 1);
    /// assert_eq!(stale.start_loading(), CachedRemoteData::Refreshing(1));
    /// ```
    #[inline]
    #[must_use]
    pub fn start_loading(self) -> Self {
        self.value().map_or(Self::Loading, Self::Refreshing)
    }

    /// The state after a dispatched request completes with `result`.
    ///
    /// Equivalent to `from_value_and_result(self.value(), result)`.
    #[inline]
    #[must_use]
    pub fn settle(self, result: Result<A, E>) -> Self {
        Self::from_value_and_result(self.value(), result)
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<E, A> From<RemoteData<E, A>> for CachedRemoteData<E, A> {
    #[inline]
    fn from(remote_data: RemoteData<E, A>) -> Self {
        Self::from_remote_data(remote_data)
    }
}

impl<E, A> From<Option<A>> for CachedRemoteData<E, A> {
    #[inline]
    fn from(value: Option<A>) -> Self {
        Self::from_value(value)
    }
}

impl<E, A> From<Result<A, E>> for CachedRemoteData<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        Self::from_result(result)
    }
}

impl<E, A> From<CachedRemoteData<E, A>> for RemoteData<E, A> {
    #[inline]
    fn from(cached: CachedRemoteData<E, A>) -> Self {
        cached.remote_data()
    }
}
