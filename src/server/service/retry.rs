//! Retry logic with exponential backoff for service operations.
//!
//! `RetryContext` re-runs an operation while its error maps to [`ErrorRetryStrategy::Retry`],
//! sleeping between attempts with a doubling backoff. Business-rule failures return on the
//! first attempt.

use std::{future::Future, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default)
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, 4s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
/// - **Permanent failures**: Errors with `ErrorRetryStrategy::Fail` return immediately
///
/// # Example
///
/// ```ignore
/// let ctx = RetryContext::new();
///
/// ctx.execute_with_retry("acceptance notice for application ID 12", || {
///     let notifier = notifier.clone();
///     let notice = notice.clone();
///
///     async move { notifier.application_accepted(&notice).await }
/// })
/// .await?;
/// ```
pub struct RetryContext {
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration (doubles with each retry)
    initial_backoff: Duration,
}

impl Default for RetryContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryContext {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_secs(1);

    /// Creates a new retry context with 3 max attempts and 1 second initial backoff.
    pub fn new() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff: Self::DEFAULT_INITIAL_BACKOFF,
        }
    }

    pub fn with_initial_backoff(mut self, initial_backoff: Duration) -> Self {
        self.initial_backoff = initial_backoff;
        self
    }

    /// Executes an operation with automatic retry logic and exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging
    /// - `operation` - Produces a fresh future for each attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all retry attempts
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        // Internal failures are logged when rendered as a 500
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.initial_backoff * 2_u32.pow(attempt_count - 1);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
