//! Deadline-bounded polling.
//!
//! A probe is polled until it reports ready, reports a fatal failure, or the
//! deadline passes. Every poll gets the remaining budget so a single slow
//! attempt cannot overrun the deadline by more than [`MIN_ATTEMPT_BUDGET`].
//!
//! Invariants:
//! - At least one attempt is made, even with a zero timeout.
//! - The driver never sleeps past the deadline.
//! - No attempt is started once the deadline has passed.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use ub_config::constants::DEFAULT_POLL_INTERVAL_MS;

/// Budget given to an attempt when the deadline has already been reached.
pub const MIN_ATTEMPT_BUDGET: Duration = Duration::from_millis(100);

/// How long to keep polling and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    timeout: Duration,
    interval: Duration,
}

impl RetryPolicy {
    /// Poll for up to `timeout` at the default interval.
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Override the delay between attempts.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

/// Result of one polling attempt.
#[derive(Debug)]
pub enum Attempt<T, E> {
    /// The target is ready; stop polling.
    Ready(T),
    /// The target answered in a way that will not improve; stop polling.
    Fatal(E),
    /// Not ready yet; try again if time remains.
    NotYet(E),
}

/// Why polling stopped without success.
#[derive(Debug)]
pub enum PollError<E> {
    Fatal(E),
    Exhausted { attempts: u32, last: E },
}

/// Run `attempt` until it is ready, fails fatally, or the policy's deadline
/// passes. The closure receives the time budget for that attempt.
pub async fn poll_until<T, E, F, Fut>(
    policy: RetryPolicy,
    mut attempt: F,
) -> std::result::Result<T, PollError<E>>
where
    F: FnMut(Duration) -> Fut,
    Fut: Future<Output = Attempt<T, E>>,
    E: Display,
{
    let deadline = Instant::now() + policy.timeout;
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let budget = deadline
            .saturating_duration_since(Instant::now())
            .max(MIN_ATTEMPT_BUDGET);

        let last = match attempt(budget).await {
            Attempt::Ready(value) => {
                tracing::debug!(attempts, "Probe ready");
                return Ok(value);
            }
            Attempt::Fatal(err) => {
                tracing::debug!(attempts, error = %err, "Probe failed");
                return Err(PollError::Fatal(err));
            }
            Attempt::NotYet(err) => err,
        };

        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(PollError::Exhausted { attempts, last });
        }

        tracing::debug!(attempts, error = %last, "Not ready yet, retrying");
        tokio::time::sleep(policy.interval.min(remaining)).await;

        if Instant::now() >= deadline {
            return Err(PollError::Exhausted { attempts, last });
        }
    }
}
