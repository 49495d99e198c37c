//! Type class traits implemented by the remote data types.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: mapping over the carried value
//! - [`Applicative`]: lifting values and merging independent remote values
//! - [`Bifunctor`]: mapping over the error and the value
//!
//! [`CachedRemoteData`](crate::remote::CachedRemoteData) implements all four.
//! [`RemoteData`](crate::remote::RemoteData) implements `TypeConstructor`,
//! `Functor` and `Bifunctor`.
//!
//! There is no `Monad` instance. `and_then` turns `Refreshing`
//! and `Stale` into `NotAsked`, so `m.and_then(pure) == m` does not hold for
//! those states; it stays an inherent method.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//! use cached_remote_data::typeclass::{Applicative, Bifunctor, Functor};
//!
//! fn label<T>(cached: T) -> T::WithType<String>
//! where
//!     T: Functor<Inner = u32>,
//! {
//!     cached.fmap(|n| format!("#{n}"))
//! }
//!
//! let stale: CachedRemoteData<&str, u32> = CachedRemoteData::Stale("503", 7);
//! assert_eq!(label(stale), CachedRemoteData::Stale("503", "#7".to_string()));
//!
//! let merged = CachedRemoteData::<&str, u32>::Success(1)
//!     .map2(CachedRemoteData::Success(2), |a, b| a + b)
//!     .first(str::to_uppercase);
//! assert_eq!(merged, CachedRemoteData::Success(3));
//! ```

mod applicative;
mod bifunctor;
mod functor;
mod higher;

pub use applicative::Applicative;
pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
