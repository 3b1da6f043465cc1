//! Language-feature rules expressed as small Rust functions.
//!
//! Each module keeps one family of rules: how bindings are scoped, how
//! functions and closures see their receiver, and how absent values,
//! assignment shortcuts, numeric literals and string replacement behave.

pub mod functions;
pub mod modern;
pub mod receivers;
pub mod scoping;

pub use functions::{Calculation, arrow_add, calculate, double, greet, traditional_add};
pub use receivers::{NamedObject, Receiver};
