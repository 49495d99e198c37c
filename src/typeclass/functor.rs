//! Functor type class - mapping over the carried value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Both remote data types satisfy these laws in every state: the function
//! only ever touches a value payload, and the state itself is preserved.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//! use cached_remote_data::typeclass::Functor;
//!
//! let refreshing: CachedRemoteData<String, i32> = CachedRemoteData::Refreshing(5);
//! assert_eq!(refreshing.fmap(|n| n.to_string()), CachedRemoteData::Refreshing("5".to_string()));
//! ```

use super::higher::TypeConstructor;
use crate::remote::{CachedRemoteData, RemoteData};

/// A type class for types that can have a function mapped over their value.
///
/// See the module documentation for the laws.
pub trait Functor: TypeConstructor {
    /// Applies a function to the carried value, if any.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the carried value without
    /// consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use cached_remote_data::remote::CachedRemoteData;
    /// use cached_remote_data::typeclass::Functor;
    ///
    /// let stale: CachedRemoteData<String, String> =
    ///     CachedRemoteData::Stale("503".to_string(), "hello".to_string());
    /// let lengths = stale.fmap_ref(String::len);
    /// assert_eq!(lengths, CachedRemoteData::Stale("503".to_string(), 5));
    /// assert!(stale.is_stale());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the carried value with a constant.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the carried value, keeping only the state.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// CachedRemoteData<E, A> Implementation
// =============================================================================

impl<E: Clone, A> Functor for CachedRemoteData<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> CachedRemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> CachedRemoteData<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map_error(E::clone).map(function)
    }
}

// =============================================================================
// RemoteData<E, A> Implementation
// =============================================================================

impl<E: Clone, A> Functor for RemoteData<E, A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> RemoteData<E, B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map_error(E::clone).map(function)
    }
}
