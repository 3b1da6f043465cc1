//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::io::Write;
use std::time::Duration;

use snippets_core::{DeferredOutcome, DelayedResultProducer};
use tempfile::NamedTempFile;

/// Producer with a short delay so assertions about ordering stay readable.
pub fn fast_producer() -> DelayedResultProducer {
    DelayedResultProducer::new(Duration::from_millis(50))
}

pub fn ok_after(ms: u64, value: &str) -> DeferredOutcome<String> {
    DeferredOutcome::settle_after(Duration::from_millis(ms), Ok(value.to_string()))
}

pub fn err_after(ms: u64, message: &str) -> DeferredOutcome<String> {
    DeferredOutcome::settle_after(Duration::from_millis(ms), Err(message.into()))
}

/// Write `content` to a temporary config file.
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp config");
    file.write_all(content.as_bytes()).expect("write config");
    file
}
