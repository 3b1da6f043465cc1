//! Per-demonstration reports, printable as text or JSON.

use serde::Serialize;
use std::fmt;
use std::time::Duration;

use snippets_core::counter::{Counter, empty_array, promise_example};
use snippets_features::modern::{
    BINARY, HEX, MILLION, Settings, User, nullish_assign, or_assign, replace_all,
};
use snippets_features::{Calculation, NamedObject, arrow_add, calculate, double, greet, scoping};
use snippets_types::{ChainReport, ComputationFailure, Settled, SiblingPolicy};

#[derive(Debug, Serialize)]
#[serde(tag = "demo", rename_all = "snake_case")]
pub enum Report {
    Chain(ChainReport),
    Await(ChainReport),
    Join(JoinReport),
    Example(ExampleReport),
    Features(FeatureReport),
}

impl Report {
    /// The failure a join returned to its caller; chain failures were already
    /// handled inside the chain.
    pub fn unhandled_failure(&self) -> Option<&ComputationFailure> {
        match self {
            Report::Join(join) => join.failure.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct JoinReport {
    pub policy: SiblingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<ComputationFailure>,
}

impl JoinReport {
    pub fn new(policy: SiblingPolicy, outcome: Result<Vec<String>, ComputationFailure>) -> Self {
        let (results, failure) = match outcome {
            Ok(results) => (Some(results), None),
            Err(failure) => (None, Some(failure)),
        };
        Self {
            policy,
            results,
            failure,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExampleReport {
    pub increments: Vec<i64>,
    pub fetched: Result<String, ComputationFailure>,
    pub promise_example: String,
    pub empty_slots: usize,
}

impl ExampleReport {
    pub async fn collect(fetch_delay: Duration) -> Self {
        let counter = Counter::default();
        let bump = counter.incrementer();
        let increments = vec![counter.increment(), bump()];
        let fetched = counter.fetch_data(fetch_delay).await;
        let slots: Vec<Option<String>> = empty_array(3);

        Self {
            increments,
            fetched,
            promise_example: promise_example().await.to_string(),
            empty_slots: slots.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FeatureReport {
    pub function_scoped: i32,
    pub block_scoped: (i32, i32),
    pub arrow_add: i64,
    pub double: i64,
    pub greet: String,
    pub calculation: Calculation,
    pub traditional: String,
    pub arrow: String,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub theme: String,
    pub timeout: u64,
    pub debug: bool,
    pub count: i64,
    pub value: String,
    pub million: u32,
    pub binary: u8,
    pub hex: u32,
    pub replaced: String,
}

impl FeatureReport {
    pub fn collect() -> Self {
        let object = NamedObject::module_level();
        let user = User::sample();
        let settings = Settings::sample();

        let mut count = 0_i64;
        or_assign(&mut count, 10);
        let mut value: Option<String> = None;
        let value = nullish_assign(&mut value, "default".to_string()).clone();

        Self {
            function_scoped: scoping::function_scoped(),
            block_scoped: scoping::block_scoped(),
            arrow_add: arrow_add(1, 2),
            double: double(21),
            greet: greet().to_string(),
            calculation: calculate(3, 4),
            traditional: object.traditional(),
            arrow: object.arrow(),
            city: user.city().map(str::to_string),
            phone: user.phone().map(str::to_string),
            theme: settings.theme().to_string(),
            timeout: settings.timeout(),
            debug: settings.debug(),
            count,
            value,
            million: MILLION,
            binary: BINARY,
            hex: HEX,
            replaced: replace_all("hello world hello", "hello", "hi"),
        }
    }
}

fn write_chain(f: &mut fmt::Formatter<'_>, label: &str, report: &ChainReport) -> fmt::Result {
    writeln!(f, "[{label}]")?;
    for (index, step) in report.steps.iter().enumerate() {
        writeln!(f, "  step {}: {step}", index + 1)?;
    }
    match &report.outcome {
        Settled::Fulfilled(value) => write!(f, "  result: {value}"),
        Settled::Handled(failure) => write!(f, "  error: {failure}"),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Chain(report) => write_chain(f, "chain", report),
            Report::Await(report) => write_chain(f, "await", report),
            Report::Join(join) => {
                writeln!(f, "[join] policy={}", join.policy)?;
                match (&join.results, &join.failure) {
                    (_, Some(failure)) => write!(f, "  error: {failure}"),
                    (Some(results), None) => write!(f, "  results: {}", results.join(", ")),
                    (None, None) => write!(f, "  results: none"),
                }
            }
            Report::Example(example) => {
                writeln!(f, "[example]")?;
                writeln!(f, "  increments: {:?}", example.increments)?;
                match &example.fetched {
                    Ok(data) => writeln!(f, "  fetched: {data}")?,
                    Err(failure) => writeln!(f, "  fetch error: {failure}")?,
                }
                writeln!(f, "  promise example: {}", example.promise_example)?;
                write!(f, "  empty slots: {}", example.empty_slots)
            }
            Report::Features(features) => {
                writeln!(f, "[features]")?;
                writeln!(
                    f,
                    "  scoping: function={} block={:?}",
                    features.function_scoped, features.block_scoped
                )?;
                writeln!(
                    f,
                    "  functions: add={} double={} greet={} sum={} product={}",
                    features.arrow_add,
                    features.double,
                    features.greet,
                    features.calculation.sum,
                    features.calculation.product
                )?;
                writeln!(f, "  receivers: {} / {}", features.traditional, features.arrow)?;
                writeln!(
                    f,
                    "  optional chaining: city={:?} phone={:?}",
                    features.city, features.phone
                )?;
                writeln!(
                    f,
                    "  nullish: theme={} timeout={} debug={}",
                    features.theme, features.timeout, features.debug
                )?;
                writeln!(
                    f,
                    "  logical assignment: count={} value={}",
                    features.count, features.value
                )?;
                writeln!(
                    f,
                    "  numbers: {} {} {}",
                    features.million, features.binary, features.hex
                )?;
                write!(f, "  replace all: {}", features.replaced)
            }
        }
    }
}
