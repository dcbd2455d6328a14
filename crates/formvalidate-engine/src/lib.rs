//! # formvalidate-engine
//!
//! Host-facing validation engine for the formvalidate workspace: the host
//! document port, field and radio-group evaluators, error presentation,
//! and the form validation session. The pure rule layer lives in
//! `formvalidate-core`; this crate decides when to invoke it and how
//! verdicts become presentation state and submit gating.

pub mod host;
pub mod presenter;
pub mod session;

mod field;
mod group;

// The unit tests need `MockDocument`, but linking the `formvalidate-test`
// crate here would pull in a second copy of this crate (dev-dependency
// cycle), whose `Host` trait is a distinct instance from the one the test
// harness compiles. Compiling the mock's source directly into the test
// build keeps a single trait instance.
#[cfg(test)]
extern crate self as formvalidate_engine;

#[cfg(test)]
#[path = "../../formvalidate-test/src/lib.rs"]
mod mock;

pub use host::{ControlKind, Host};
pub use presenter::ErrorPresenter;
pub use session::{FormState, FormValidator, ValidationResult};
