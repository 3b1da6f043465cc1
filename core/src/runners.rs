//! The three call patterns built on [`DelayedResultProducer`].
//!
//! Each runner has a no-argument form that uses the default producer and a
//! `_with` form that takes an explicit producer and outcome flags.

use std::sync::{Arc, Mutex, PoisonError};

use snippets_types::{
    ChainReport, ComputationFailure, DEFAULT_JOIN_COUNT, FINAL_RESULT, SECOND_STEP, Settled,
    SiblingPolicy,
};

use crate::{Chain, DeferredOutcome, DelayedResultProducer, Step, join_outcomes};

/// Start a computation with the default producer (1000 ms delay).
///
/// Must be called from within a Tokio runtime.
pub fn produce(will_succeed: bool) -> DeferredOutcome<String> {
    DelayedResultProducer::default().produce(will_succeed)
}

/// Values observed by each continuation, in the order they ran.
#[derive(Debug, Clone, Default)]
struct StepLog(Arc<Mutex<Vec<String>>>);

impl StepLog {
    fn record(&self, step: usize, value: &str) {
        tracing::info!(step, value, "Step completed");
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value.to_string());
    }

    fn into_steps(self) -> Vec<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Continuation style: `produce -> then -> then -> catch`.
pub async fn run_chain() -> ChainReport {
    run_chain_with(&DelayedResultProducer::default(), true).await
}

pub async fn run_chain_with(producer: &DelayedResultProducer, will_succeed: bool) -> ChainReport {
    let log = StepLog::default();
    let first = log.clone();
    let second = log.clone();

    let outcome = Chain::from_outcome(producer.produce(will_succeed))
        .then(move |result| {
            first.record(1, &result);
            Step::Value(SECOND_STEP.to_string())
        })
        .then(move |result| {
            second.record(2, &result);
            Step::Value(FINAL_RESULT.to_string())
        })
        .catch(|_| tracing::debug!("Chain stopped; failure handed to the report"))
        .await;

    ChainReport {
        steps: log.into_steps(),
        outcome,
    }
}

/// Suspend/resume style of [`run_chain`]: same steps, same failure routing.
pub async fn run_awaited() -> ChainReport {
    run_awaited_with(&DelayedResultProducer::default(), true).await
}

pub async fn run_awaited_with(producer: &DelayedResultProducer, will_succeed: bool) -> ChainReport {
    let log = StepLog::default();

    let attempt: Result<String, ComputationFailure> = async {
        let result1 = producer.produce(will_succeed).await?;
        log.record(1, &result1);

        let result2 = SECOND_STEP;
        log.record(2, result2);

        Ok(FINAL_RESULT.to_string())
    }
    .await;

    let outcome = match attempt {
        Ok(value) => Settled::Fulfilled(value),
        Err(failure) => {
            tracing::debug!("Awaited chain stopped; failure handed to the report");
            Settled::Handled(failure)
        }
    };

    ChainReport {
        steps: log.into_steps(),
        outcome,
    }
}

/// Start three successful computations at once and join them.
pub async fn run_concurrent() -> Result<Vec<String>, ComputationFailure> {
    run_concurrent_with(
        &DelayedResultProducer::default(),
        &[true; DEFAULT_JOIN_COUNT],
        SiblingPolicy::default(),
    )
    .await
}

/// Start one computation per flag, all before waiting on any, then join.
pub async fn run_concurrent_with(
    producer: &DelayedResultProducer,
    outcomes: &[bool],
    policy: SiblingPolicy,
) -> Result<Vec<String>, ComputationFailure> {
    let started: Vec<_> = outcomes
        .iter()
        .map(|&will_succeed| producer.produce(will_succeed))
        .collect();

    let results = join_outcomes(started, policy).await?;
    tracing::info!(?results, "All results settled");
    Ok(results)
}
