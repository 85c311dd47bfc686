//! Execution parameters: model call control.
//!
//! [`ExecutionParams`] groups the static parameters that bound each model
//! call made by the generation use cases. These are application-layer
//! concerns, not domain policy.

use std::time::Duration;

/// Model call control parameters.
///
/// Every call is awaited under `request_timeout`. Transient failures
/// (connection errors, overloaded endpoint, timeouts) are retried up to
/// `max_retries` times, sleeping `retry_backoff` between attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionParams {
    /// Upper bound on a single model call.
    pub request_timeout: Duration,
    /// Extra attempts after a transient failure.
    pub max_retries: u32,
    /// Pause before each retry.
    pub retry_backoff: Duration,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(60),
            max_retries: 1,
            retry_backoff: Duration::from_secs(2),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }
}
