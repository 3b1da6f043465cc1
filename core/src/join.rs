//! Concurrent join over deferred outcomes.
//!
//! Every outcome passed in is already running (outcomes start when they are
//! created), so the join only observes. Results come back in input order no
//! matter which outcome settles first. The first failure to settle fails the
//! whole join; what happens to the remaining siblings is decided by
//! [`SiblingPolicy`].

use futures_util::stream::{FuturesUnordered, StreamExt};

use snippets_types::{ComputationFailure, SiblingPolicy};

use crate::DeferredOutcome;

/// Wait for every outcome and collect the values in input order.
pub async fn join_outcomes<T>(
    outcomes: Vec<DeferredOutcome<T>>,
    policy: SiblingPolicy,
) -> Result<Vec<T>, ComputationFailure>
where
    T: Clone + Send + Sync + 'static,
{
    let total = outcomes.len();
    let mut slots: Vec<Option<T>> = vec![None; total];
    let mut pending: FuturesUnordered<_> = outcomes
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, outcome)| async move { (index, outcome.await) })
        .collect();

    let mut first_failure: Option<ComputationFailure> = None;

    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(value) => slots[index] = Some(value),
            Err(failure) if first_failure.is_some() => {
                tracing::debug!(index, %failure, "Additional join failure ignored");
            }
            Err(failure) => {
                tracing::debug!(index, %failure, %policy, "Join member failed");
                match policy {
                    SiblingPolicy::Detach => return Err(failure),
                    SiblingPolicy::Abort => {
                        for outcome in &outcomes {
                            outcome.abort();
                        }
                        return Err(failure);
                    }
                    SiblingPolicy::Drain => first_failure = Some(failure),
                }
            }
        }
    }

    if let Some(failure) = first_failure {
        return Err(failure);
    }

    tracing::debug!(total, "Join completed");
    slots
        .into_iter()
        .collect::<Option<Vec<T>>>()
        .ok_or_else(ComputationFailure::abandoned)
}
