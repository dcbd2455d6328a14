//! Setup error types.
//!
//! Validation failures are never errors in this library: they are collected
//! into a result value and reflected as presentation state. The only error
//! channel is form wiring, where a missing or ambiguous submit control is a
//! caller defect that fails loudly at construction time instead of being
//! silently tolerated.

use thiserror::Error;

/// Errors raised while wiring a form for validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The form contains no element bearing the submit marker class.
    #[error("no submit control with class `{class}` found in form")]
    SubmitControlMissing {
        /// The configured submit marker class.
        class: String,
    },

    /// The form contains more than one element bearing the submit marker
    /// class; exactly one is required.
    #[error("expected exactly one submit control with class `{class}`, found {count}")]
    SubmitControlAmbiguous {
        /// The configured submit marker class.
        class: String,
        /// How many matching elements were found.
        count: usize,
    },
}

/// A convenience type alias for `Result<T, SetupError>`.
pub type SetupResult<T> = Result<T, SetupError>;
