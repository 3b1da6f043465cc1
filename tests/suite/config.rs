//! Configuration flowing into the producer and join.

use std::time::Duration;

use tokio::time::Instant;

use snippets_config::{ConfigError, SnippetsConfig};
use snippets_core::{DelayedResultProducer, SiblingPolicy, run_chain_with};

use crate::common::config_file;

#[tokio::test(start_paused = true)]
async fn configured_producer_drives_the_chain() {
    let file = config_file(
        r#"
[producer]
delay_ms = 200
success_message = "ready"
failure_message = "not ready"

[join]
count = 4
sibling_policy = "abort"
"#,
    );
    let config = SnippetsConfig::load_from(file.path()).unwrap();
    let producer = DelayedResultProducer::from_config(config.producer.as_ref().unwrap());
    assert_eq!(producer.delay(), Duration::from_millis(200));

    let join = config.join();
    assert_eq!(join.count, 4);
    assert_eq!(join.sibling_policy, SiblingPolicy::Abort);

    let start = Instant::now();
    let report = run_chain_with(&producer, true).await;
    assert!(start.elapsed() >= Duration::from_millis(200));
    assert_eq!(report.steps[0], "ready");

    let report = run_chain_with(&producer, false).await;
    assert_eq!(report.outcome.failure().map(|f| f.message()), Some("not ready"));
}

#[test]
fn malformed_config_reports_its_path() {
    let file = config_file("[producer\ndelay_ms = ");
    let err = SnippetsConfig::load_from(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &file.path().to_path_buf());
}
