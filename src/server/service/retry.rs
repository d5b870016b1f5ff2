//! Retry logic with exponential backoff for service operations.
//!
//! Loading the session user runs through a [`RetryContext`], so connection hiccups are
//! retried instead of surfacing as a 500. Whether an error is retried is decided by
//! [`Error::to_retry_strategy`].

use std::time::Duration;

use dioxus_logger::tracing;

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// Context for executing operations with automatic retry logic.
///
/// The generic `T` is a scratch value kept between attempts, letting an operation remember
/// work already done in a failed attempt. Operations that need nothing carried over use `()`.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3
/// - **Backoff strategy**: Exponential starting at 1 second (1s, 2s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
pub struct RetryContext<T> {
    /// Value carried between attempts
    cache: T,
    /// Maximum number of attempts before giving up
    max_attempts: u32,
    /// Initial backoff duration in seconds (doubles with each retry)
    initial_backoff_secs: u64,
}

impl<T> RetryContext<T>
where
    T: Clone + Default,
{
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_INITIAL_BACKOFF_SECS: u64 = 1;

    pub fn new() -> Self {
        Self {
            cache: T::default(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            initial_backoff_secs: Self::DEFAULT_INITIAL_BACKOFF_SECS,
        }
    }

    /// Executes an operation, retrying transient failures with exponential backoff.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "GSF lookup for character ID 1")
    /// - `operation` - Async function receiving the carried value and returning `Result<R, Error>`
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all attempts
    ///
    /// # Example
    ///
    /// ```ignore
    /// let mut ctx: RetryContext<()> = RetryContext::new();
    /// let db = db.clone();
    ///
    /// ctx.execute_with_retry(&format!("get user ID {}", user_id), |_| {
    ///     let db = db.clone();
    ///
    ///     Box::pin(async move { Ok(UserRepository::new(&db).get(user_id).await?) })
    /// })
    /// .await?;
    /// ```
    pub async fn execute_with_retry<R, F>(
        &mut self,
        description: &str,
        operation: F,
    ) -> Result<R, Error>
    where
        F: for<'a> Fn(
            &'a mut T,
        ) -> std::pin::Pin<
            Box<dyn std::future::Future<Output = Result<R, Error>> + Send + 'a>,
        >,
    {
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                self.max_attempts
            );

            match operation(&mut self.cache).await {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {}",
                                self.max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = Duration::from_secs(
                            self.initial_backoff_secs * 2_u64.pow(attempt_count - 1),
                        );

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
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
