use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use audioscribe::application::services::{RetryPolicy, retry_with_backoff};

fn policy(max_attempts: u32, initial_ms: u64) -> RetryPolicy {
    RetryPolicy {
        max_attempts,
        initial_delay: Duration::from_millis(initial_ms),
        max_delay: None,
    }
}

#[tokio::test(start_paused = true)]
async fn given_operation_failing_then_succeeding_when_retried_then_returns_success_value() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);

    let result: Result<&str, String> = retry_with_backoff(policy(3, 1000), || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        async move {
            if n < 2 {
                Err(format!("failure {}", n))
            } else {
                Ok("done")
            }
        }
    })
    .await;

    assert_eq!(result, Ok("done"));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn given_operation_always_failing_when_retries_exhausted_then_returns_last_error() {
    let attempts = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempts);

    let result: Result<(), String> = retry_with_backoff(policy(3, 1000), || {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        async move { Err(format!("failure {}", n)) }
    })
    .await;

    assert_eq!(result, Err("failure 2".to_string()));
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test(start_paused = true)]
async fn given_three_failing_attempts_when_retried_then_total_wait_is_exponential_sum() {
    let start = tokio::time::Instant::now();

    let _: Result<(), &str> =
        retry_with_backoff(policy(3, 1000), || async { Err("nope") }).await;

    // 1000 * 2^0 + 1000 * 2^1, no wait after the final attempt.
    assert_eq!(start.elapsed(), Duration::from_millis(3000));
}

#[tokio::test(start_paused = true)]
async fn given_max_delay_cap_when_backing_off_then_waits_never_exceed_cap() {
    let start = tokio::time::Instant::now();
    let capped = RetryPolicy {
        max_attempts: 4,
        initial_delay: Duration::from_millis(1000),
        max_delay: Some(Duration::from_millis(1500)),
    };

    let _: Result<(), &str> = retry_with_backoff(capped, || async { Err("nope") }).await;

    // 1000 + min(2000, 1500) + min(4000, 1500)
    assert_eq!(start.elapsed(), Duration::from_millis(4000));
}

#[tokio::test(start_paused = true)]
async fn given_immediately_succeeding_operation_when_retried_then_no_wait_occurs() {
    let start = tokio::time::Instant::now();

    let result: Result<u8, &str> = retry_with_backoff(policy(3, 1000), || async { Ok(7) }).await;

    assert_eq!(result, Ok(7));
    assert_eq!(start.elapsed(), Duration::ZERO);
}
