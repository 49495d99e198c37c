//! # cached-remote-data
//!
//! A model of asynchronously fetched, cacheable values as a single closed
//! set of states, with combinators to construct, inspect, transform and
//! merge them without unwrapping.
//!
//! ## Overview
//!
//! Remote data is usually modelled with four states: not asked, loading,
//! failure and success. That model forgets the last good value as soon as a
//! refresh starts. [`CachedRemoteData`](remote::CachedRemoteData) adds two
//! states that remember it:
//!
//! - `Refreshing(v)`: `v` is cached and a new request is in flight
//! - `Stale(e, v)`: `v` is cached and the latest request failed with `e`
//!
//! so a UI can keep showing `v` in both.
//!
//! - **Remote Data**: the state types, constructors, projections, mapping,
//!   applicative merging and chaining ([`remote`])
//! - **Type Classes**: Functor, Applicative and Bifunctor instances
//!   ([`typeclass`])
//! - **Effects**: deferred request tasks and a shared resource container
//!   ([`effect`])
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and instances (default)
//! - `async`: request tasks and `CachedResource` on tokio (default)
//! - `serde`: `Serialize`/`Deserialize` for the state types
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use cached_remote_data::prelude::*;
//!
//! let cached: CachedRemoteData<&str, u32> =
//!     CachedRemoteData::from_value_and_result(Some(41), Err("503"));
//! assert_eq!(cached, CachedRemoteData::Stale("503", 41));
//!
//! let shown = cached.map(|n| n + 1);
//! assert_eq!(shown.value(), Some(42));
//! assert_eq!(shown.remote_data(), RemoteData::Failure("503"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use cached_remote_data::prelude::*;
/// ```
pub mod prelude {
    pub use crate::remote::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "async")]
    pub use crate::effect::*;
}

pub mod remote;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "async")]
pub mod effect;
