//! Core domain types for the snippets workspace.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer: the runtime pieces in `snippets-core`,
//! configuration parsing in `snippets-config`, and the binary.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Fixed values
// ============================================================================

/// Value a producer resolves with when asked to succeed.
pub const SUCCESS_MESSAGE: &str = "Promise 成功！";

/// Message carried by the failure a producer rejects with.
pub const FAILURE_MESSAGE: &str = "Promise 失败！";

/// Output of the second chain stage.
pub const SECOND_STEP: &str = "第二步数据";

/// Output of the final chain stage.
pub const FINAL_RESULT: &str = "最终结果";

/// Delay used by every demonstration unless configured otherwise.
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Number of producers started by the default concurrent join.
pub const DEFAULT_JOIN_COUNT: usize = 3;

// ============================================================================
// ComputationFailure
// ============================================================================

/// The single failure kind a deferred computation can settle with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ComputationFailure {
    message: String,
}

impl ComputationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure observed when the task backing an outcome was aborted before it
    /// published a value.
    #[must_use]
    pub fn abandoned() -> Self {
        Self::new("computation abandoned before settling")
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<&str> for ComputationFailure {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ComputationFailure {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

// ============================================================================
// Settled
// ============================================================================

/// How a runner with a failure handler finished.
///
/// `Handled` means the failure was already routed to the handler and reported.
/// It is deliberately not a `Result` so that `?` cannot report it a second time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Settled<T> {
    Fulfilled(T),
    Handled(ComputationFailure),
}

impl<T> Settled<T> {
    #[must_use]
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Self::Fulfilled(_))
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Fulfilled(value) => Some(value),
            Self::Handled(_) => None,
        }
    }

    #[must_use]
    pub fn failure(&self) -> Option<&ComputationFailure> {
        match self {
            Self::Fulfilled(_) => None,
            Self::Handled(failure) => Some(failure),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Settled<U> {
        match self {
            Self::Fulfilled(value) => Settled::Fulfilled(f(value)),
            Self::Handled(failure) => Settled::Handled(failure),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Settled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fulfilled(value) => write!(f, "fulfilled: {value}"),
            Self::Handled(failure) => write!(f, "handled failure: {failure}"),
        }
    }
}

// ============================================================================
// ChainReport
// ============================================================================

/// Observable trace of a three-stage chain: the output of every stage that
/// completed, in order, and how the chain settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainReport {
    pub steps: Vec<String>,
    pub outcome: Settled<String>,
}

// ============================================================================
// SiblingPolicy
// ============================================================================

/// What a concurrent join does with still-running siblings once one of them
/// has failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiblingPolicy {
    /// Return the failure immediately; siblings keep running to completion.
    #[default]
    Detach,
    /// Return the failure immediately and abort every unsettled sibling.
    Abort,
    /// Wait for every sibling to settle, then return the first failure.
    Drain,
}

impl SiblingPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Detach => "detach",
            Self::Abort => "abort",
            Self::Drain => "drain",
        }
    }
}

impl fmt::Display for SiblingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown sibling policy `{0}` (expected detach, abort or drain)")]
pub struct UnknownSiblingPolicy(pub String);

impl std::str::FromStr for SiblingPolicy {
    type Err = UnknownSiblingPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detach" => Ok(Self::Detach),
            "abort" => Ok(Self::Abort),
            "drain" => Ok(Self::Drain),
            other => Err(UnknownSiblingPolicy(other.to_string())),
        }
    }
}
