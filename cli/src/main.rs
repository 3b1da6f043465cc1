//! Snippets CLI - runs the deferred-outcome and language-feature demonstrations.
//!
//! ```text
//! main() -> Args::parse -> SnippetsConfig::load -> run_demo() per demonstration
//!                                                      |
//!                                                      v
//!                                      Report (stdout: text or JSON)
//! ```
//!
//! Logs go to stderr so stdout carries only reports. Every failure is shown
//! once, in its report. The process exits non-zero on bad arguments or when a
//! concurrent join returns a failure.

mod args;
mod report;

use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use snippets_config::{JoinConfig, SnippetsConfig};
use snippets_core::{DelayedResultProducer, run_awaited_with, run_chain_with, run_concurrent_with};

use crate::args::{Args, Demo, USAGE};
use crate::report::{ExampleReport, FeatureReport, JoinReport, Report};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

/// Read errors and parse errors are already logged by the loader.
fn load_config() -> SnippetsConfig {
    SnippetsConfig::load().ok().flatten().unwrap_or_default()
}

/// One flag per join member; with `fail` the middle member fails.
fn join_flags(count: usize, fail: bool) -> Vec<bool> {
    (0..count).map(|index| !(fail && index == count / 2)).collect()
}

async fn run_demo(
    demo: Demo,
    args: &Args,
    producer: &DelayedResultProducer,
    join: JoinConfig,
) -> Report {
    tracing::debug!(demo = demo.as_str(), "Running demonstration");
    match demo {
        Demo::Chain => Report::Chain(run_chain_with(producer, !args.fail).await),
        Demo::Await => Report::Await(run_awaited_with(producer, !args.fail).await),
        Demo::Join => {
            let policy = args.policy.unwrap_or(join.sibling_policy);
            let flags = join_flags(join.count, args.fail);
            let outcome = run_concurrent_with(producer, &flags, policy).await;
            Report::Join(JoinReport::new(policy, outcome))
        }
        Demo::Example => Report::Example(ExampleReport::collect(producer.delay()).await),
        Demo::Features => Report::Features(FeatureReport::collect()),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();

    let args = Args::parse(env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config();
    let producer = DelayedResultProducer::from_config(&config.producer());
    let join = config.join();

    let mut unhandled = false;
    for &demo in &args.demos {
        let report = run_demo(demo, &args, &producer, join).await;
        if args.json {
            println!(
                "{}",
                serde_json::to_string(&report).context("failed to serialize report")?
            );
        } else {
            println!("{report}");
        }
        unhandled |= report.unhandled_failure().is_some();
    }

    // The failing report has already been printed.
    Ok(if unhandled {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
