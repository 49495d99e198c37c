//! Bridges from a transport operation to [`CachedRemoteData`].
//!
//! A transport operation is any `FnOnce() -> impl Future<Output = Result<A, E>>`.
//! These helpers wrap it in a [`Task`] whose output is the state the
//! resource should move to once the operation settles. The operation is not
//! invoked until the task is polled.

use std::future::Future;

use super::task::Task;
use crate::remote::CachedRemoteData;

/// Runs `operation` and turns its outcome into `Success` or `Failure`.
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::effect::send_request;
/// use cached_remote_data::remote::CachedRemoteData;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let task = send_request(|| async { Err::<u32, _>("timeout") });
/// assert_eq!(task.await, CachedRemoteData::Failure("timeout"));
/// # });
/// ```
pub fn send_request<E, A, Op, Fut>(operation: Op) -> Task<CachedRemoteData<E, A>>
where
    Op: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<A, E>> + Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    send_request_with_value(None, operation)
}

/// Runs `operation` and merges its outcome with a previously cached value.
///
/// A failure with a cached value yields `Stale`, keeping the value.
///
/// # Examples
///
/// ```rust
/// use cached_remote_data::effect::send_request_with_value;
/// use cached_remote_data::remote::CachedRemoteData;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let task = send_request_with_value(Some("data"), || async { Err("503") });
/// assert_eq!(task.await, CachedRemoteData::Stale("503", "data"));
/// # });
/// ```
pub fn send_request_with_value<E, A, Op, Fut>(
    cached: Option<A>,
    operation: Op,
) -> Task<CachedRemoteData<E, A>>
where
    Op: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<A, E>> + Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    let has_cached_value = cached.is_some();
    Task::new(move || {
        tracing::debug!(has_cached_value, "sending request");
        operation()
    })
    .fmap(move |result| {
        let settled = CachedRemoteData::from_value_and_result(cached, result);
        tracing::debug!(state = %settled.kind(), "request settled");
        settled
    })
}

/// Runs `operation`, keeping the value carried by `cached` if it fails.
///
/// Equivalent to `send_request_with_value(cached.value(), operation)`.
pub fn send_request_with_cached_data<E, A, Op, Fut>(
    cached: CachedRemoteData<E, A>,
    operation: Op,
) -> Task<CachedRemoteData<E, A>>
where
    Op: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<A, E>> + Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    send_request_with_value(cached.value(), operation)
}
