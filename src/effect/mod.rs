//! Running transport operations and tracking their state.
//!
//! This module is the only part of the crate that performs effects:
//!
//! - [`Task`]: a deferred asynchronous computation, awaited directly or
//!   [spawned](Task::spawn) onto tokio
//! - [`send_request`], [`send_request_with_value`],
//!   [`send_request_with_cached_data`]: wrap a transport operation so that
//!   its outcome becomes a [`CachedRemoteData`](crate::remote::CachedRemoteData)
//! - [`CachedResource`]: a shared owner of one resource's current state that
//!   serializes dispatch and settle transitions
//!
//! Events are emitted through `tracing` at `debug` level; responses that
//! arrive for superseded requests are reported at `warn`.
//!
//! # Examples
//!
//! ```rust
//! use cached_remote_data::effect::send_request_with_cached_data;
//! use cached_remote_data::remote::CachedRemoteData;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let shown: CachedRemoteData<String, &str> = CachedRemoteData::Success("v1");
//!
//! let refreshing = shown.start_loading();
//! assert_eq!(refreshing, CachedRemoteData::Refreshing("v1"));
//!
//! let settled = send_request_with_cached_data(refreshing, || async {
//!     Err("connection reset".to_string())
//! })
//! .await;
//! assert_eq!(settled, CachedRemoteData::Stale("connection reset".to_string(), "v1"));
//! # });
//! ```

mod error;
mod request;
mod resource;
mod task;

pub use error::{SettleError, TaskError};
pub use request::{send_request, send_request_with_cached_data, send_request_with_value};
pub use resource::{CachedResource, Ticket};
pub use task::{Task, TaskHandle};
