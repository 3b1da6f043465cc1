//! Continuation-style sequential chains.
//!
//! A [`Chain`] starts from a head computation and appends stages with
//! [`Chain::then`]. Each stage receives the previous stage's value and returns
//! a [`Step`]: a value, a failure, or another computation to wait for. The
//! next stage never starts before the previous one has settled successfully.
//! The first failure skips every remaining stage and is handed to the single
//! handler passed to [`Chain::catch`].

use std::fmt;
use std::future::{Future, IntoFuture};

use futures_util::future::BoxFuture;

use snippets_types::{ComputationFailure, Settled};

use crate::DeferredOutcome;

/// What a chain stage hands to the next one.
pub enum Step<T> {
    Value(T),
    Failed(ComputationFailure),
    /// A scheduled computation; the chain waits for it before continuing.
    Deferred(BoxFuture<'static, Result<T, ComputationFailure>>),
}

impl<T> fmt::Debug for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Step::Value(..)"),
            Self::Failed(failure) => f.debug_tuple("Step::Failed").field(failure).finish(),
            Self::Deferred(_) => f.write_str("Step::Deferred(..)"),
        }
    }
}

impl<T: Send + 'static> Step<T> {
    pub fn fail(failure: impl Into<ComputationFailure>) -> Self {
        Self::Failed(failure.into())
    }

    pub fn deferred(outcome: DeferredOutcome<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self::Deferred(outcome.into_future())
    }

    pub fn future<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    async fn resolve(self) -> Result<T, ComputationFailure> {
        match self {
            Self::Value(value) => Ok(value),
            Self::Failed(failure) => Err(failure),
            Self::Deferred(pending) => pending.await,
        }
    }
}

impl<T> From<Result<T, ComputationFailure>> for Step<T> {
    fn from(result: Result<T, ComputationFailure>) -> Self {
        match result {
            Ok(value) => Self::Value(value),
            Err(failure) => Self::Failed(failure),
        }
    }
}

/// A sequence of dependent stages.
pub struct Chain<T> {
    head: BoxFuture<'static, Result<T, ComputationFailure>>,
    stages: usize,
}

impl<T> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("stages", &self.stages)
            .finish_non_exhaustive()
    }
}

impl<T: Send + 'static> Chain<T> {
    /// Start a chain whose first stage is `head`.
    pub fn new<F>(head: F) -> Self
    where
        F: Future<Output = Result<T, ComputationFailure>> + Send + 'static,
    {
        Self {
            head: Box::pin(head),
            stages: 1,
        }
    }

    pub fn from_outcome(outcome: DeferredOutcome<T>) -> Self
    where
        T: Clone + Sync,
    {
        Self {
            head: outcome.into_future(),
            stages: 1,
        }
    }

    /// Number of stages, including the head.
    #[must_use]
    pub fn stages(&self) -> usize {
        self.stages
    }

    /// Append a stage that runs once every earlier stage has succeeded.
    pub fn then<U, F>(self, stage: F) -> Chain<U>
    where
        U: Send + 'static,
        F: FnOnce(T) -> Step<U> + Send + 'static,
    {
        let index = self.stages + 1;
        let head = self.head;
        Chain {
            head: Box::pin(async move {
                let value = head.await?;
                tracing::debug!(stage = index, "Chain stage starting");
                stage(value).resolve().await
            }),
            stages: index,
        }
    }

    /// Run the chain, routing a failure from any stage to `handler`.
    ///
    /// The handler runs exactly once on failure and never on success.
    pub async fn catch<H>(self, handler: H) -> Settled<T>
    where
        H: FnOnce(&ComputationFailure),
    {
        match self.head.await {
            Ok(value) => Settled::Fulfilled(value),
            Err(failure) => {
                handler(&failure);
                Settled::Handled(failure)
            }
        }
    }
}

impl<T: Send + 'static> IntoFuture for Chain<T> {
    type Output = Result<T, ComputationFailure>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        self.head
    }
}
