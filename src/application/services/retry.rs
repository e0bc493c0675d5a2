use std::fmt;
use std::future::Future;
use std::time::Duration;

/// Retry timing for a fallible async operation.
///
/// Attempt `i` (0-indexed) that fails with more attempts remaining is
/// followed by a wait of `initial_delay * 2^i`, capped at `max_delay` when
/// one is set. No jitter is applied, so cumulative wait times are exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Option<Duration>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: None,
        }
    }
}

impl RetryPolicy {
    fn delay_after(&self, failed_attempt: u32) -> Duration {
        let factor = 1u32.checked_shl(failed_attempt).unwrap_or(u32::MAX);
        let delay = self.initial_delay.saturating_mul(factor);
        match self.max_delay {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}

/// Run `operation` up to `policy.max_attempts` times, sequentially, sleeping
/// with exponential backoff between attempts. On exhaustion the last observed
/// error is returned unchanged.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: RetryPolicy, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);

    for attempt in 0..max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                tracing::warn!(
                    attempt = attempt + 1,
                    max_attempts,
                    error = %error,
                    "Attempt failed"
                );

                if attempt + 1 == max_attempts {
                    return Err(error);
                }

                let delay = policy.delay_after(attempt);
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Retrying after backoff");
                tokio::time::sleep(delay).await;
            }
        }
    }

    unreachable!("loop returns on final attempt")
}
