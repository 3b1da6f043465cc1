//! Settle-once values computed on spawned tasks.
//!
//! A [`DeferredOutcome`] is started the moment it is created: the computation
//! runs on its own task and publishes its result exactly once through a
//! `watch` channel. Any number of observers can clone the outcome and await
//! it; they all see the same settled value.

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::sync::watch;
use tokio::task::AbortHandle;

use snippets_types::ComputationFailure;

type Slot<T> = Option<Result<T, ComputationFailure>>;

/// A computation that completes in the future with a value or a failure.
pub struct DeferredOutcome<T> {
    rx: watch::Receiver<Slot<T>>,
    abort: Arc<AbortHandle>,
}

impl<T> Clone for DeferredOutcome<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
            abort: Arc::clone(&self.abort),
        }
    }
}

impl<T> fmt::Debug for DeferredOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match &*self.rx.borrow() {
            None => "pending",
            Some(Ok(_)) => "fulfilled",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("DeferredOutcome")
            .field("state", &state)
            .finish_non_exhaustive()
    }
}

impl<T> DeferredOutcome<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Start `future` on a new task. Must be called from within a Tokio runtime.
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
    {
        let (tx, rx) = watch::channel(None);
        let handle = tokio::spawn(async move {
            let outcome = future.await;
            tracing::debug!(success = outcome.is_ok(), "Deferred outcome settled");
            // send_replace stores the value even when every observer is gone.
            tx.send_replace(Some(outcome));
        });

        Self {
            rx,
            abort: Arc::new(handle.abort_handle()),
        }
    }

    /// Settle with `outcome` once `delay` has elapsed.
    pub fn settle_after(delay: Duration, outcome: Result<T, ComputationFailure>) -> Self {
        Self::spawn(async move {
            tokio::time::sleep(delay).await;
            outcome
        })
    }

    /// The settled value, or `None` while the computation is still running.
    #[must_use]
    pub fn try_settled(&self) -> Option<Result<T, ComputationFailure>> {
        self.rx.borrow().clone()
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Abort the backing task. Observers of an unsettled outcome then see
    /// [`ComputationFailure::abandoned`]; a settled outcome keeps its value.
    pub fn abort(&self) {
        self.abort.abort();
    }

    /// Wait for the outcome without consuming this handle.
    pub async fn wait(&self) -> Result<T, ComputationFailure> {
        let mut rx = self.rx.clone();
        observe(&mut rx).await
    }
}

async fn observe<T: Clone>(rx: &mut watch::Receiver<Slot<T>>) -> Result<T, ComputationFailure> {
    match rx.wait_for(Option::is_some).await {
        Ok(slot) => (*slot)
            .clone()
            .unwrap_or_else(|| Err(ComputationFailure::abandoned())),
        // Sender dropped without publishing: the task was aborted or panicked.
        Err(_) => Err(ComputationFailure::abandoned()),
    }
}

impl<T> IntoFuture for DeferredOutcome<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Output = Result<T, ComputationFailure>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        let mut rx = self.rx;
        Box::pin(async move { observe(&mut rx).await })
    }
}
