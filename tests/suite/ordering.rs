//! Ordering and failure-routing guarantees of the three call patterns.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use snippets_core::{
    Chain, ComputationFailure, Settled, SiblingPolicy, Step, join_outcomes, produce,
    run_awaited_with, run_chain_with, run_concurrent, run_concurrent_with,
};
use snippets_types::{FAILURE_MESSAGE, FINAL_RESULT, SECOND_STEP, SUCCESS_MESSAGE};

use crate::common::{err_after, fast_producer, ok_after};

#[tokio::test(start_paused = true)]
async fn produce_true_never_settles_before_the_delay() {
    let start = Instant::now();
    let outcome = produce(true);

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(outcome.try_settled().is_none());

    assert_eq!(outcome.await.as_deref(), Ok(SUCCESS_MESSAGE));
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn produce_false_fails_with_fixed_message() {
    let failure = produce(false).await.unwrap_err();
    assert_eq!(failure.message(), FAILURE_MESSAGE);
}

#[tokio::test(start_paused = true)]
async fn chain_success_path() {
    let report = run_chain_with(&fast_producer(), true).await;
    assert_eq!(report.steps, vec![SUCCESS_MESSAGE, SECOND_STEP]);
    assert_eq!(report.outcome, Settled::Fulfilled(FINAL_RESULT.to_string()));
}

#[tokio::test(start_paused = true)]
async fn chain_and_await_styles_are_observably_identical() {
    let producer = fast_producer();
    for will_succeed in [true, false] {
        assert_eq!(
            run_chain_with(&producer, will_succeed).await,
            run_awaited_with(&producer, will_succeed).await
        );
    }
}

#[tokio::test(start_paused = true)]
async fn injected_failing_stage_routes_to_handler_once() {
    let executed = Arc::new(Mutex::new(Vec::new()));
    let handled = AtomicUsize::new(0);
    let (second, third) = (Arc::clone(&executed), Arc::clone(&executed));

    let settled = Chain::from_outcome(fast_producer().produce(true))
        .then(move |_| {
            second.lock().unwrap().push(2);
            Step::<String>::fail("stage two failed")
        })
        .then(move |value| {
            third.lock().unwrap().push(3);
            Step::Value(value)
        })
        .catch(|failure| {
            assert_eq!(failure.message(), "stage two failed");
            handled.fetch_add(1, Ordering::SeqCst);
        })
        .await;

    assert_eq!(handled.load(Ordering::SeqCst), 1);
    assert_eq!(*executed.lock().unwrap(), vec![2]);
    assert!(!settled.is_fulfilled());
}

#[tokio::test(start_paused = true)]
async fn join_orders_by_input_and_runs_concurrently() {
    let start = Instant::now();
    let results = join_outcomes(
        vec![ok_after(90, "first"), ok_after(30, "second"), ok_after(60, "third")],
        SiblingPolicy::Detach,
    )
    .await
    .unwrap();

    assert_eq!(results, vec!["first", "second", "third"]);
    assert!(start.elapsed() < Duration::from_millis(180));
}

#[tokio::test(start_paused = true)]
async fn default_join_of_three_producers() {
    let start = Instant::now();
    let results = run_concurrent().await.unwrap();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r == SUCCESS_MESSAGE));
    assert!(start.elapsed() < Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn join_with_one_failure_fails_overall() {
    for policy in [SiblingPolicy::Detach, SiblingPolicy::Abort, SiblingPolicy::Drain] {
        let failure = run_concurrent_with(&fast_producer(), &[true, true, false], policy)
            .await
            .unwrap_err();
        assert_eq!(failure, ComputationFailure::new(FAILURE_MESSAGE));
    }
}

#[tokio::test(start_paused = true)]
async fn aborted_sibling_is_seen_as_abandoned() {
    let sibling = ok_after(500, "never");
    let failure = join_outcomes(vec![sibling.clone(), err_after(10, "boom")], SiblingPolicy::Abort)
        .await
        .unwrap_err();

    assert_eq!(failure.message(), "boom");
    assert_eq!(sibling.await, Err(ComputationFailure::abandoned()));
}
