//! Bounded retry without backoff.

use std::future::Future;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;

/// Runs `action` up to `attempts` times, retrying immediately while
/// `condition` accepts the returned error.
///
/// Errors rejected by `condition` are returned at once. When every attempt
/// fails, the last error is returned. `attempts` of zero behaves like one.
///
/// # Examples
///
/// ```ignore
/// let key = retry_bounded(20, || try_candidate(), |e| e.is_key_collision()).await?;
/// ```
pub async fn retry_bounded<A, F, T, E, C>(attempts: usize, action: A, condition: C) -> Result<T, E>
where
    A: FnMut() -> F,
    F: Future<Output = Result<T, E>>,
    C: FnMut(&E) -> bool,
{
    let strategy = FixedInterval::new(Duration::ZERO).take(attempts.saturating_sub(1));

    RetryIf::start(strategy, action, condition).await
}
