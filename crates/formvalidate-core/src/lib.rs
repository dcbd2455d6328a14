//! # formvalidate-core
//!
//! The pure layer of the formvalidate workspace: the rule engine
//! (character filters and whole-value classifiers), session options, setup
//! error types, and logging setup. Nothing in this crate touches a host
//! document; everything is a deterministic function over strings and plain
//! values.

pub mod error;
pub mod logging;
pub mod options;
pub mod rules;

pub use error::{SetupError, SetupResult};
pub use options::{ErrorTarget, ValidateOptions};
pub use rules::{classify, filter, RuleKind, UnknownRule};
