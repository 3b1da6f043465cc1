//! Delayed result producer.

use std::time::Duration;

use snippets_config::ProducerConfig;
use snippets_types::{ComputationFailure, DEFAULT_DELAY_MS, FAILURE_MESSAGE, SUCCESS_MESSAGE};

use crate::DeferredOutcome;

/// Produces a fixed success value or a fixed failure after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedResultProducer {
    delay: Duration,
    success_message: String,
    failure_message: String,
}

impl Default for DelayedResultProducer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl DelayedResultProducer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            success_message: SUCCESS_MESSAGE.to_string(),
            failure_message: FAILURE_MESSAGE.to_string(),
        }
    }

    #[must_use]
    pub fn from_config(config: &ProducerConfig) -> Self {
        Self {
            delay: config.delay(),
            success_message: config.success_message.clone(),
            failure_message: config.failure_message.clone(),
        }
    }

    pub fn with_messages(
        mut self,
        success_message: impl Into<String>,
        failure_message: impl Into<String>,
    ) -> Self {
        self.success_message = success_message.into();
        self.failure_message = failure_message.into();
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn success_message(&self) -> &str {
        &self.success_message
    }

    #[must_use]
    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    /// Start a computation that settles after [`Self::delay`].
    ///
    /// Must be called from within a Tokio runtime. The returned outcome is
    /// already running; awaiting it only observes the result.
    pub fn produce(&self, will_succeed: bool) -> DeferredOutcome<String> {
        let outcome = if will_succeed {
            Ok(self.success_message.clone())
        } else {
            Err(ComputationFailure::new(self.failure_message.clone()))
        };
        tracing::debug!(will_succeed, delay = ?self.delay, "Scheduling deferred outcome");
        DeferredOutcome::settle_after(self.delay, outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn success_resolves_with_fixed_message_after_delay() {
        let producer = DelayedResultProducer::default();
        let start = Instant::now();
        let outcome = producer.produce(true);
        assert!(outcome.try_settled().is_none());

        assert_eq!(outcome.await.as_deref(), Ok("Promise 成功！"));
        assert!(start.elapsed() >= Duration::from_millis(1000));
    }

    #[tokio::test(start_paused = true)]
    async fn failure_carries_fixed_message() {
        let producer = DelayedResultProducer::default();
        let failure = producer.produce(false).await.unwrap_err();
        assert_eq!(failure.message(), "Promise 失败！");
    }

    #[tokio::test(start_paused = true)]
    async fn configured_messages_and_delay_are_used() {
        let config = ProducerConfig {
            delay_ms: 40,
            success_message: "yes".to_string(),
            failure_message: "no".to_string(),
        };
        let producer = DelayedResultProducer::from_config(&config);
        assert_eq!(producer.delay(), Duration::from_millis(40));

        let start = Instant::now();
        assert_eq!(producer.produce(true).await.as_deref(), Ok("yes"));
        assert!(start.elapsed() >= Duration::from_millis(40));
        assert_eq!(producer.produce(false).await.unwrap_err().message(), "no");
    }

    #[test]
    fn with_messages_overrides_defaults() {
        let producer = DelayedResultProducer::new(Duration::ZERO).with_messages("a", "b");
        assert_eq!(producer.success_message(), "a");
        assert_eq!(producer.failure_message(), "b");
    }
}
