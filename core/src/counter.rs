//! A counter with an async accessor, plus the small async helpers that go
//! with it.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

use snippets_types::ComputationFailure;

use crate::DeferredOutcome;

pub const FETCH_DELAY: Duration = Duration::from_millis(1000);
pub const PROMISE_EXAMPLE_DELAY: Duration = Duration::from_millis(100);
pub const PROMISE_EXAMPLE_RESULT: &str = "异步操作完成";

/// Counter whose value is shared by every handle and closure derived from it.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    value: Arc<AtomicI64>,
}

impl Counter {
    #[must_use]
    pub fn new(initial: i64) -> Self {
        Self {
            value: Arc::new(AtomicI64::new(initial)),
        }
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> i64 {
        self.value.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn current_value(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    /// A detached `increment` that keeps working after the counter handle is
    /// gone: it captured the counter when it was created.
    pub fn incrementer(&self) -> impl Fn() -> i64 + Send + Sync + use<> {
        let value = Arc::clone(&self.value);
        move || value.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Describe the counter after `delay`. The value is read when the outcome
    /// settles, so increments made in the meantime are visible.
    pub fn fetch_data(&self, delay: Duration) -> DeferredOutcome<String> {
        let value = Arc::clone(&self.value);
        DeferredOutcome::spawn(async move {
            tokio::time::sleep(delay).await;
            Ok::<_, ComputationFailure>(format!(
                "Data for value: {}",
                value.load(Ordering::SeqCst)
            ))
        })
    }
}

pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}

pub async fn promise_example() -> &'static str {
    delay(PROMISE_EXAMPLE_DELAY).await;
    PROMISE_EXAMPLE_RESULT
}

/// `len` empty slots.
#[must_use]
pub fn empty_array<T>(len: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(len).collect()
}
