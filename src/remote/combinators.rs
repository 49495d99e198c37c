//! Mapping, merging and chaining of [`CachedRemoteData`].
//!
//! # Merging
//!
//! [`and_map`](CachedRemoteData::and_map) combines two instances by picking
//! the "worse" state, highest priority first:
//!
//! 1. Both sides hold a value and at least one is `Stale`: `Stale(e, f(a))`.
//! 2. Either side is `Failure` or `Stale`: `Failure(e)`.
//! 3. Both sides hold a value and at least one is `Refreshing`: `Refreshing(f(a))`.
//! 4. Either side is `NotAsked`: `NotAsked`.
//! 5. Either side is `Loading` or `Refreshing`: `Loading`.
//! 6. Both sides are `Success`: `Success(f(a))`.
//!
//! The resulting state does not depend on which side each input was on.
//! When both sides carry an error, the error of the argument side is kept.
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//!
//! let user: CachedRemoteData<&str, &str> = CachedRemoteData::Refreshing("ada");
//! let posts: CachedRemoteData<&str, u32> = CachedRemoteData::Stale("503", 12);
//!
//! let page = CachedRemoteData::map2(user, posts, |name, count| format!("{name}: {count}"));
//! assert_eq!(page, CachedRemoteData::Stale("503", "ada: 12".to_string()));
//! ```

use super::cached::CachedRemoteData;

impl<E, A> CachedRemoteData<E, A> {
    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the carried value of `Success`, `Refreshing` or
    /// `Stale`. Errors and value-less states pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("503", 20);
    /// assert_eq!(stale.map(|n| n + 1), CachedRemoteData::Stale("503", 21));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> CachedRemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::NotAsked => CachedRemoteData::NotAsked,
            Self::Loading => CachedRemoteData::Loading,
            Self::Failure(error) => CachedRemoteData::Failure(error),
            Self::Success(value) => CachedRemoteData::Success(function(value)),
            Self::Refreshing(value) => CachedRemoteData::Refreshing(function(value)),
            Self::Stale(error, value) => CachedRemoteData::Stale(error, function(value)),
        }
    }

    /// Applies a function to the error of `Failure` or `Stale`.
    #[inline]
    pub fn map_error<C, G>(self, function: G) -> CachedRemoteData<C, A>
    where
        G: FnOnce(E) -> C,
    {
        match self {
            Self::NotAsked => CachedRemoteData::NotAsked,
            Self::Loading => CachedRemoteData::Loading,
            Self::Failure(error) => CachedRemoteData::Failure(function(error)),
            Self::Success(value) => CachedRemoteData::Success(value),
            Self::Refreshing(value) => CachedRemoteData::Refreshing(value),
            Self::Stale(error, value) => CachedRemoteData::Stale(function(error), value),
        }
    }

    /// Applies `value_function` and `error_function` to whichever payloads
    /// are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let stale: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("503", 20);
    /// assert_eq!(
    ///     stale.map_both(|n| n * 2, str::len),
    ///     CachedRemoteData::Stale(3, 40)
    /// );
    /// ```
    #[inline]
    pub fn map_both<B, C, F, G>(
        self,
        value_function: F,
        error_function: G,
    ) -> CachedRemoteData<C, B>
    where
        F: FnOnce(A) -> B,
        G: FnOnce(E) -> C,
    {
        match self {
            Self::NotAsked => CachedRemoteData::NotAsked,
            Self::Loading => CachedRemoteData::Loading,
            Self::Failure(error) => CachedRemoteData::Failure(error_function(error)),
            Self::Success(value) => CachedRemoteData::Success(value_function(value)),
            Self::Refreshing(value) => CachedRemoteData::Refreshing(value_function(value)),
            Self::Stale(error, value) => {
                CachedRemoteData::Stale(error_function(error), value_function(value))
            }
        }
    }

    // =========================================================================
    // Monadic Chaining
    // =========================================================================

    /// Chains a dependent fetch from a settled `Success`.
    ///
    /// Every other state, including `Refreshing` and `Stale` which do carry a
    /// value, yields `NotAsked`: the dependent request is only issued from a
    /// current value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let lookup = |id: u32| CachedRemoteData::<&str, String>::Success(format!("user-{id}"));
    ///
    /// let settled: CachedRemoteData<&str, u32> = CachedRemoteData::Success(7);
    /// assert_eq!(settled.and_then(lookup), CachedRemoteData::Success("user-7".to_string()));
    ///
    /// let refreshing: CachedRemoteData<&str, u32> = CachedRemoteData::Refreshing(7);
    /// assert_eq!(refreshing.and_then(lookup), CachedRemoteData::NotAsked);
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> CachedRemoteData<E, B>
    where
        F: FnOnce(A) -> CachedRemoteData<E, B>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::NotAsked
            | Self::Loading
            | Self::Failure(_)
            | Self::Refreshing(_)
            | Self::Stale(_, _) => CachedRemoteData::NotAsked,
        }
    }

    // =========================================================================
    // Applicative Merging
    // =========================================================================

    /// Merges two instances with a binary function.
    ///
    /// Equivalent to `first.map(|a| |b| function(a, b)).and_map(second)`.
    #[inline]
    pub fn map2<B, C, F>(
        first: Self,
        second: CachedRemoteData<E, B>,
        function: F,
    ) -> CachedRemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        first
            .map(|a| move |b| function(a, b))
            .and_map(second)
    }

    /// Merges three instances with a ternary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let a: CachedRemoteData<&str, i32> = CachedRemoteData::Success(1);
    /// let b: CachedRemoteData<&str, i32> = CachedRemoteData::Refreshing(2);
    /// let c: CachedRemoteData<&str, i32> = CachedRemoteData::Success(3);
    ///
    /// let sum = CachedRemoteData::map3(a, b, c, |x, y, z| x + y + z);
    /// assert_eq!(sum, CachedRemoteData::Refreshing(6));
    /// ```
    #[inline]
    pub fn map3<B, C, D, F>(
        first: Self,
        second: CachedRemoteData<E, B>,
        third: CachedRemoteData<E, C>,
        function: F,
    ) -> CachedRemoteData<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        first
            .map(|a| move |b| move |c| function(a, b, c))
            .and_map(second)
            .and_map(third)
    }

    /// Merges four instances with a quaternary function.
    #[inline]
    pub fn map4<B, C, D, R, F>(
        first: Self,
        second: CachedRemoteData<E, B>,
        third: CachedRemoteData<E, C>,
        fourth: CachedRemoteData<E, D>,
        function: F,
    ) -> CachedRemoteData<E, R>
    where
        F: FnOnce(A, B, C, D) -> R,
    {
        first
            .map(|a| move |b| move |c| move |d| function(a, b, c, d))
            .and_map(second)
            .and_map(third)
            .and_map(fourth)
    }

    /// Pairs the values of two instances.
    #[inline]
    pub fn product<B>(self, other: CachedRemoteData<E, B>) -> CachedRemoteData<E, (A, B)> {
        Self::map2(self, other, |a, b| (a, b))
    }
}

impl<E, F> CachedRemoteData<E, F> {
    /// Applies the carried function to the value carried by `argument`.
    ///
    /// See the [module documentation](self) for the precedence used when
    /// either side lacks a usable value. Longer merges are written as a chain:
    /// `f.map(curried).and_map(b).and_map(c)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    ///
    /// let function: CachedRemoteData<&str, fn(i32) -> i32> = CachedRemoteData::Success(|n| n + 1);
    ///
    /// let argument: CachedRemoteData<&str, i32> = CachedRemoteData::Stale("timeout", 41);
    /// assert_eq!(function.and_map(argument), CachedRemoteData::Stale("timeout", 42));
    ///
    /// let argument: CachedRemoteData<&str, i32> = CachedRemoteData::Failure("timeout");
    /// assert_eq!(function.and_map(argument), CachedRemoteData::Failure("timeout"));
    /// ```
    pub fn and_map<A, B>(self, argument: CachedRemoteData<E, A>) -> CachedRemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        use CachedRemoteData::{Failure, Loading, NotAsked, Refreshing, Stale, Success};

        match (self, argument) {
            // Both hold a value, at least one is stale.
            (Stale(_, function), Stale(error, value))
            | (Success(function) | Refreshing(function), Stale(error, value)) => {
                Stale(error, function(value))
            }
            (Stale(error, function), Success(value) | Refreshing(value)) => {
                Stale(error, function(value))
            }

            // An error without a value on the other side.
            (_, Failure(error) | Stale(error, _)) | (Failure(error) | Stale(error, _), _) => {
                Failure(error)
            }

            // Both hold a value, at least one is refreshing.
            (Refreshing(function), Success(value) | Refreshing(value))
            | (Success(function), Refreshing(value)) => Refreshing(function(value)),

            (_, NotAsked) | (NotAsked, _) => NotAsked,

            (_, Loading | Refreshing(_)) | (Loading | Refreshing(_), _) => Loading,

            (Success(function), Success(value)) => Success(function(value)),
        }
    }
}
