#![cfg(feature = "async")]
//! Integration tests for running transport operations into
//! `CachedRemoteData`.
//!
//! Transport operations are simulated with tokio timers; the runtime clock is
//! paused so the tests run instantly and deterministically.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use cached_remote_data::effect::{
    CachedResource, SettleError, TaskError, send_request, send_request_with_cached_data,
    send_request_with_value,
};
use cached_remote_data::remote::{CachedRemoteData, StateKind};
use rstest::rstest;

type Cached = CachedRemoteData<String, String>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

async fn respond(delay_ms: u64, result: Result<&str, &str>) -> Result<String, String> {
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    result.map(str::to_string).map_err(str::to_string)
}

// =============================================================================
// send_request
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn send_request_success() {
    init_tracing();
    let settled: Cached = send_request(|| respond(10, Ok("data"))).await;
    assert_eq!(settled, CachedRemoteData::Success("data".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn send_request_failure_without_cache() {
    let settled: Cached = send_request(|| respond(10, Err("timeout"))).await;
    assert_eq!(settled, CachedRemoteData::Failure("timeout".to_string()));
}

#[rstest]
#[tokio::test]
async fn send_request_is_lazy() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let task = send_request(move || async move {
        counter.fetch_add(1, Ordering::SeqCst);
        Ok::<_, String>(1)
    });
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(task.await, CachedRemoteData::Success(1));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[rstest]
#[case(Some("old"), Ok("new"), CachedRemoteData::Success("new".to_string()))]
#[case(Some("old"), Err("503"), CachedRemoteData::Stale("503".to_string(), "old".to_string()))]
#[case(None, Err("503"), CachedRemoteData::Failure("503".to_string()))]
#[tokio::test(start_paused = true)]
async fn send_request_with_value_cases(
    #[case] cached: Option<&'static str>,
    #[case] outcome: Result<&'static str, &'static str>,
    #[case] expected: Cached,
) {
    let settled = send_request_with_value(cached.map(str::to_string), move || respond(5, outcome)).await;
    assert_eq!(settled, expected);
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn send_request_with_cached_data_keeps_stale_value() {
    let shown: Cached = CachedRemoteData::Stale("old error".to_string(), "v1".to_string());

    let refreshing = shown.start_loading();
    assert_eq!(refreshing, CachedRemoteData::Refreshing("v1".to_string()));

    let settled = send_request_with_cached_data(refreshing, || respond(5, Err("new error"))).await;
    assert_eq!(
        settled,
        CachedRemoteData::Stale("new error".to_string(), "v1".to_string())
    );
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn spawned_request_can_be_awaited_through_handle() {
    let handle = send_request(|| respond(20, Ok("spawned"))).spawn();
    let settled: Result<Cached, TaskError> = handle.await;
    assert_eq!(settled, Ok(CachedRemoteData::Success("spawned".to_string())));
}

// =============================================================================
// CachedResource
// =============================================================================

#[rstest]
#[tokio::test(start_paused = true)]
async fn resource_round_trip() {
    init_tracing();
    let resource: CachedResource<String, String> = CachedResource::default();

    let kind = resource.refresh(|| respond(10, Err("timeout"))).await;
    assert_eq!(kind, Ok(StateKind::Failure));

    let kind = resource.refresh(|| respond(10, Ok("data"))).await;
    assert_eq!(kind, Ok(StateKind::Success));

    let kind = resource.refresh(|| respond(10, Err("503"))).await;
    assert_eq!(kind, Ok(StateKind::Stale));
    assert_eq!(
        resource.snapshot(),
        CachedRemoteData::Stale("503".to_string(), "data".to_string())
    );
    assert_eq!(resource.snapshot().value(), Some("data".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn resource_shows_refreshing_while_in_flight() {
    let resource = CachedResource::new(CachedRemoteData::Success("cached".to_string()));
    let background = resource.clone();

    let in_flight = tokio::spawn(async move {
        background
            .refresh(|| respond(50, Ok("fresh")))
            .await
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(
        resource.snapshot(),
        CachedRemoteData::<String, String>::Refreshing("cached".to_string())
    );

    assert_eq!(in_flight.await.unwrap(), Ok(StateKind::Success));
    assert_eq!(resource.snapshot(), CachedRemoteData::Success("fresh".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn slower_superseded_request_is_discarded() {
    let resource: CachedResource<String, String> = CachedResource::default();

    let slow = {
        let resource = resource.clone();
        tokio::spawn(async move { resource.refresh(|| respond(100, Ok("slow"))).await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;

    let fast = {
        let resource = resource.clone();
        tokio::spawn(async move { resource.refresh(|| respond(10, Ok("fast"))).await })
    };

    assert_eq!(fast.await.unwrap(), Ok(StateKind::Success));
    let slow_outcome = slow.await.unwrap();
    assert!(matches!(slow_outcome, Err(SettleError::Superseded { .. })));

    assert_eq!(resource.snapshot(), CachedRemoteData::Success("fast".to_string()));
}

#[rstest]
#[tokio::test(start_paused = true)]
async fn replace_discards_in_flight_response() {
    let resource: CachedResource<String, String> = CachedResource::default();
    let background = resource.clone();

    let in_flight =
        tokio::spawn(async move { background.refresh(|| respond(30, Err("late"))).await });
    tokio::time::sleep(Duration::from_millis(1)).await;

    resource.replace(CachedRemoteData::Success("manual".to_string()));

    let outcome = in_flight.await.unwrap();
    assert!(outcome.is_err());
    assert_eq!(resource.kind(), StateKind::Success);
}
