#![cfg(feature = "control")]
//! Integration tests for the boundary adapters and the notifier.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use rstest::rstest;
use tagrail::Error;
use tagrail::container::{maybe, option};
use tagrail::control::{PushSub, Thrown, safe, trycatch};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// safe / trycatch
// =============================================================================

#[rstest]
fn safe_reports_the_failing_assertion() {
    init_tracing();

    let outcome = safe(|value: i32| maybe::just(value).unwrap(), 0);
    assert_eq!(outcome, Err(Error::new("just argument is falsy")));
}

#[rstest]
fn safe_chains_with_the_option_family() {
    let outcome = safe(option::unwrap::<&str>, Some("ready"));
    assert_eq!(outcome, Ok("ready"));
}

#[rstest]
#[case("7", Ok(7))]
#[case("seven", Err(false))]
#[case("", Err(true))]
fn trycatch_tells_errors_from_panics(#[case] input: &str, #[case] expected: Result<i32, bool>) {
    init_tracing();

    let outcome = trycatch(
        |text: &str| {
            assert!(!text.is_empty(), "empty input");
            text.parse::<i32>()
        },
        input,
    );

    assert_eq!(outcome.map_err(|thrown| thrown.is_panic()), expected);
}

#[rstest]
fn thrown_converts_into_error() {
    let raised: Error = Thrown::Raised(Error::new("raised")).into();
    let panicked: Error = Thrown::<Error>::Panicked(Error::new("panicked")).into();

    assert_eq!(raised.message(), "raised");
    assert_eq!(panicked.message(), "panicked");
}

// =============================================================================
// PushSub
// =============================================================================

#[rstest]
fn notifications_reach_subscribers_on_other_threads() {
    let pushsub = PushSub::<usize>::new();
    let total = Arc::new(AtomicUsize::new(0));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let total = Arc::clone(&total);
            pushsub.subscribe(move |value| {
                total.fetch_add(*value, Ordering::SeqCst);
            })
        })
        .collect();

    let publisher = pushsub.clone();
    std::thread::spawn(move || publisher.notify(&3))
        .join()
        .unwrap();

    assert_eq!(total.load(Ordering::SeqCst), 12);
    assert!(handles.iter().all(|handle| handle.unsubscribe()));
    assert!(pushsub.is_empty());
}

#[rstest]
fn unsubscribed_handlers_miss_later_notifications() {
    let pushsub = PushSub::<()>::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&calls);
    let subscription = pushsub.subscribe(move |()| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    pushsub.notify(&());
    assert!(subscription.unsubscribe());
    assert!(!subscription.unsubscribe());
    pushsub.notify(&());

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Async
// =============================================================================

#[cfg(all(feature = "async", feature = "collection"))]
mod asynchronous {
    use super::*;
    use std::sync::Mutex;

    use futures::FutureExt;
    use tagrail::collection::Queue;
    use tagrail::control::{safe_async, trycatch_async};

    #[rstest]
    #[tokio::test]
    async fn safe_async_resolves_values() {
        let outcome = safe_async(|value: u32| async move { value * 2 }, 21).await;
        assert_eq!(outcome, Ok(42));
    }

    #[rstest]
    #[tokio::test]
    async fn safe_async_catches_panics_after_an_await() {
        init_tracing();

        let outcome = safe_async(
            |value: Option<u32>| async move {
                tokio::task::yield_now().await;
                option::unwrap(value)
            },
            None,
        )
        .await;

        assert_eq!(outcome, Err(Error::new("option.unwrap argument must be some")));
    }

    #[rstest]
    #[tokio::test]
    async fn trycatch_async_keeps_raised_errors() {
        let outcome = trycatch_async(|text: &'static str| async move { text.parse::<u8>() }, "300").await;
        assert!(matches!(outcome, Err(Thrown::Raised(_))));
    }

    #[rstest]
    #[tokio::test]
    async fn queue_awaits_in_insertion_order() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let mut queue = Queue::new();
        for step in 0..3_usize {
            let order = Arc::clone(&order);
            queue.push(move |value: usize| {
                let order = Arc::clone(&order);
                async move {
                    tokio::task::yield_now().await;
                    order.lock().unwrap().push(step);
                    value + step
                }
                .boxed()
            });
        }

        assert_eq!(queue.call_async(10).await, vec![Ok(10), Ok(11), Ok(12)]);
        assert_eq!(*order.lock().unwrap(), vec![0, 1, 2]);
    }
}
