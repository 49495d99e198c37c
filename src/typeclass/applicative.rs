//! Applicative type class - merging independent remote values.
//!
//! For [`CachedRemoteData`], `pure` is `Success` and `map2`/`apply` follow
//! the precedence of [`CachedRemoteData::and_map`]: the merged state is the
//! worse of the two, and a value survives as long as both sides have one.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//! use cached_remote_data::typeclass::Applicative;
//!
//! let profile: CachedRemoteData<String, &str> = CachedRemoteData::Success("ada");
//! let avatar: CachedRemoteData<String, u32> = CachedRemoteData::Refreshing(64);
//!
//! let card = profile.map2(avatar, |name, size| format!("{name}@{size}"));
//! assert_eq!(card, CachedRemoteData::Refreshing("ada@64".to_string()));
//! ```

use super::functor::Functor;
use crate::remote::CachedRemoteData;

/// A type class for types that support lifting values and merging contexts.
///
/// See the module documentation for the laws.
pub trait Applicative: Functor {
    /// Lifts a value into the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    /// use cached_remote_data::typeclass::Applicative;
    ///
    /// let lifted: CachedRemoteData<String, i32> = <CachedRemoteData<String, ()>>::pure(42);
    /// assert_eq!(lifted, CachedRemoteData::Success(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Merges two values with a binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Merges three values with a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the carried function to the value carried by `other`.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// CachedRemoteData<E, A> Implementation
// =============================================================================

impl<E: Clone, A> Applicative for CachedRemoteData<E, A> {
    #[inline]
    fn pure<B>(value: B) -> CachedRemoteData<E, B> {
        CachedRemoteData::Success(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: CachedRemoteData<E, B>, function: F) -> CachedRemoteData<E, C>
    where
        F: FnOnce(A, B) -> C,
    {
        CachedRemoteData::map2(self, other, function)
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: CachedRemoteData<E, B>,
        third: CachedRemoteData<E, C>,
        function: F,
    ) -> CachedRemoteData<E, D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        CachedRemoteData::map3(self, second, third, function)
    }

    #[inline]
    fn apply<B, Output>(self, other: CachedRemoteData<E, B>) -> CachedRemoteData<E, Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.and_map(other)
    }
}
