//! Deferred outcomes and the call patterns built on them.
//!
//! - [`DeferredOutcome`]: a settle-once value computed on a spawned task
//! - [`DelayedResultProducer`]: a fixed value or failure after a delay
//! - [`Chain`]: continuation-style sequential stages with one failure handler
//! - [`join_outcomes`]: concurrent join with input-order results
//! - [`runners`]: the chain, awaited and concurrent demonstrations
//!
//! Everything that spawns must run inside a Tokio runtime.

mod chain;
pub mod counter;
mod deferred;
mod join;
mod producer;
pub mod runners;

pub use chain::{Chain, Step};
pub use counter::Counter;
pub use deferred::DeferredOutcome;
pub use join::join_outcomes;
pub use producer::DelayedResultProducer;
pub use runners::{
    produce, run_awaited, run_awaited_with, run_chain, run_chain_with, run_concurrent,
    run_concurrent_with,
};

pub use snippets_types::{ChainReport, ComputationFailure, Settled, SiblingPolicy};
