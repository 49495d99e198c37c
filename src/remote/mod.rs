//! Remote data states and their combinators.
//!
//! - [`RemoteData`]: four states, no memory of earlier values
//! - [`CachedRemoteData`]: six states, keeps the last good value through
//!   `Refreshing` and `Stale`
//! - [`StateKind`]: the variant of a [`CachedRemoteData`] without payloads
//!
//! Every operation here is a pure, total function: it consumes its inputs
//! and returns a new value.
//!
//! # Examples
//!
//! ## Keeping a Value Through a Failed Refresh
//!
//! ```rust
//! use cached_remote_data::remote::CachedRemoteData;
//!
//! let mut state: CachedRemoteData<&str, &str> = CachedRemoteData::NotAsked;
//!
//! state = state.start_loading();
//! assert!(state.is_loading());
//! state = state.settle(Ok("data"));
//! assert_eq!(state, CachedRemoteData::Success("data"));
//!
//! state = state.start_loading();
//! assert_eq!(state, CachedRemoteData::Refreshing("data"));
//! state = state.settle(Err("503"));
//! assert_eq!(state, CachedRemoteData::Stale("503", "data"));
//! assert_eq!(state.value(), Some("data"));
//! ```
//!
//! ## Folding a Snapshot Into a Cache
//!
//! ```rust
//! use cached_remote_data::remote::{CachedRemoteData, RemoteData};
//!
//! let snapshot: RemoteData<&str, i32> = RemoteData::Loading;
//! let cached = CachedRemoteData::from_value_and_remote_data(Some(3), snapshot);
//! assert_eq!(cached, CachedRemoteData::Refreshing(3));
//! ```

mod cached;
mod combinators;
mod kind;
mod remote_data;

pub use cached::CachedRemoteData;
pub use kind::StateKind;
pub use remote_data::RemoteData;
