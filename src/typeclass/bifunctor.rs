//! Bifunctor type class - mapping over the error and the value.
//!
//! The remote data types are implemented as `Bifunctor<E, A>`, the same
//! order as their type parameters:
//! - `first`: transforms the error payload, equivalent to `map_error`
//! - `second`: transforms the value payload, equivalent to `map`
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//! use cached_remote_data::typeclass::Bifunctor;
//!
//! let stale: CachedRemoteData<u16, &str> = CachedRemoteData::Stale(503, "cached");
//! let mapped = stale.bimap(|status| format!("HTTP {status}"), str::len);
//! assert_eq!(mapped, CachedRemoteData::Stale("HTTP 503".to_string(), 6));
//! ```

use crate::remote::{CachedRemoteData, RemoteData};

/// A type class for types with an error and a value parameter that can both
/// be mapped.
///
/// See module-level documentation for the laws.
pub trait Bifunctor<A, B> {
    /// The same shape with its parameters replaced by `C` and `D`.
    type Target<C, D>;

    /// Applies two functions to whichever payloads are present.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first payload only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second payload only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies two functions to references of whichever payloads are present,
    /// without consuming `self`.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

// =============================================================================
// CachedRemoteData<E, A> Implementation
// =============================================================================

impl<E, A> Bifunctor<E, A> for CachedRemoteData<E, A> {
    type Target<C, D> = CachedRemoteData<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> CachedRemoteData<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        self.map_both(second_function, first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> CachedRemoteData<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&A) -> D,
    {
        self.as_ref().map_both(second_function, first_function)
    }
}

// =============================================================================
// RemoteData<E, A> Implementation
// =============================================================================

impl<E, A> Bifunctor<E, A> for RemoteData<E, A> {
    type Target<C, D> = RemoteData<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> RemoteData<C, D>
    where
        F: FnOnce(E) -> C,
        G: FnOnce(A) -> D,
    {
        self.map_both(second_function, first_function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> RemoteData<C, D>
    where
        F: FnOnce(&E) -> C,
        G: FnOnce(&A) -> D,
    {
        self.as_ref().map_both(second_function, first_function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_rewrites_failure() {
        let failure: CachedRemoteData<&str, i32> = CachedRemoteData::Failure("timeout");
        assert_eq!(failure.first(str::len), CachedRemoteData::Failure(7));
    }

    #[rstest]
    fn second_rewrites_refreshing() {
        let refreshing: CachedRemoteData<&str, i32> = CachedRemoteData::Refreshing(2);
        assert_eq!(refreshing.second(|n| n * 3), CachedRemoteData::Refreshing(6));
    }

    #[rstest]
    fn bimap_ref_keeps_original() {
        let stale: CachedRemoteData<String, String> =
            CachedRemoteData::Stale("503".to_string(), "body".to_string());
        let lengths = stale.bimap_ref(String::len, String::len);
        assert!(stale.is_stale());
        assert_eq!(lengths, CachedRemoteData::Stale(3, 4));
    }

    #[rstest]
    fn remote_data_bimap_on_success() {
        let success: RemoteData<&str, i32> = RemoteData::Success(1);
        assert_eq!(success.bimap(str::len, |n| n + 1), RemoteData::Success(2));
    }
}
