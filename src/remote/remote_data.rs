//! The four-state remote data shape.
//!
//! [`RemoteData`] is the simpler model that [`CachedRemoteData`] extends: it
//! knows whether a request was made, is in flight, failed or succeeded, but
//! it never remembers a previous value across states. It is the natural
//! output of a one-shot fetch, and the projection target of
//! [`CachedRemoteData::remote_data`].
//!
//! [`CachedRemoteData`]: super::CachedRemoteData
//! [`CachedRemoteData::remote_data`]: super::CachedRemoteData::remote_data

/// A remote value without caching: exactly one of four states.
///
/// # Type Parameters
///
/// * `E` - The error payload of a failed request
/// * `A` - The value payload of a successful request
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::remote::RemoteData;
///
/// let fetched: RemoteData<String, i32> = Ok(21).into();
/// assert_eq!(fetched.map(|n| n * 2), RemoteData::Success(42));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemoteData<E, A> {
    /// No request has been made.
    NotAsked,
    /// A request is in flight.
    Loading,
    /// The request failed.
    Failure(E),
    /// The request succeeded.
    Success(A),
}

impl<E, A> RemoteData<E, A> {
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

    /// Returns `true` if this is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns `true` if this is `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Returns the success value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::RemoteData;
    ///
    /// let success: RemoteData<String, i32> = RemoteData::Success(1);
    /// assert_eq!(success.value(), Some(1));
    ///
    /// let loading: RemoteData<String, i32> = RemoteData::Loading;
    /// assert_eq!(loading.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<A> {
        match self {
            Self::Success(value) => Some(value),
            Self::NotAsked | Self::Loading | Self::Failure(_) => None,
        }
    }

    /// Returns the failure payload, if any.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Failure(error) => Some(error),
            Self::NotAsked | Self::Loading | Self::Success(_) => None,
        }
    }

    /// Borrows both payloads.
    #[inline]
    pub const fn as_ref(&self) -> RemoteData<&E, &A> {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure(error) => RemoteData::Failure(error),
            Self::Success(value) => RemoteData::Success(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value, leaving other states untouched.
    #[inline]
    pub fn map<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure(error) => RemoteData::Failure(error),
            Self::Success(value) => RemoteData::Success(function(value)),
        }
    }

    /// Applies a function to the failure payload, leaving other states untouched.
    #[inline]
    pub fn map_error<C, G>(self, function: G) -> RemoteData<C, A>
    where
        G: FnOnce(E) -> C,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure(error) => RemoteData::Failure(function(error)),
            Self::Success(value) => RemoteData::Success(value),
        }
    }

    /// Applies `value_function` to a success value or `error_function` to a
    /// failure payload, whichever is present.
    #[inline]
    pub fn map_both<B, C, F, G>(self, value_function: F, error_function: G) -> RemoteData<C, B>
    where
        F: FnOnce(A) -> B,
        G: FnOnce(E) -> C,
    {
        match self {
            Self::NotAsked => RemoteData::NotAsked,
            Self::Loading => RemoteData::Loading,
            Self::Failure(error) => RemoteData::Failure(error_function(error)),
            Self::Success(value) => RemoteData::Success(value_function(value)),
        }
    }
}

impl<E, A> Default for RemoteData<E, A> {
    #[inline]
    fn default() -> Self {
        Self::NotAsked
    }
}

impl<E, A> From<Result<A, E>> for RemoteData<E, A> {
    /// `Ok(v)` becomes `Success(v)` and `Err(e)` becomes `Failure(e)`.
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}
