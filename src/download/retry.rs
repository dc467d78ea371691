//! Fixed-delay retry loop

use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Retry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total number of attempts, the first one included
    pub max_attempts: u32,
    /// Pause between two attempts
    pub delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_secs(1),
        }
    }
}

/// Retry executor
#[derive(Debug, Clone, Default)]
pub struct RetryExecutor {
    config: RetryConfig,
}

impl RetryExecutor {
    /// Create a new retry executor with configuration
    pub fn with_config(config: RetryConfig) -> Self {
        Self { config }
    }

    /// Get configuration
    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Run `func` until it yields `Some`, at most `max_attempts` times.
    ///
    /// `func` receives the 1-based attempt number. No pause follows the
    /// last attempt.
    pub async fn until_some<F, Fut, T>(&self, mut func: F) -> Option<T>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        let attempts = self.config.max_attempts.max(1);

        for attempt in 1..=attempts {
            if let Some(value) = func(attempt).await {
                return Some(value);
            }

            if attempt < attempts {
                debug!("Attempt {}/{} gave nothing, retrying in {:?}", attempt, attempts, self.config.delay);
                if !self.config.delay.is_zero() {
                    tokio::time::sleep(self.config.delay).await;
                }
            }
        }

        None
    }
}

/// Retry configuration builder
#[derive(Debug, Default)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl RetryConfigBuilder {
    /// Create a new retry configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set attempt count
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.config.max_attempts = max_attempts;
        self
    }

    /// Set delay between attempts
    pub fn delay(mut self, delay: Duration) -> Self {
        self.config.delay = delay;
        self
    }

    /// Build the retry configuration
    pub fn build(self) -> RetryConfig {
        self.config
    }
}
