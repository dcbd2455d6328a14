//! # formvalidate
//!
//! Form validation and live input filtering with a pluggable host
//! document. This is the meta-crate that re-exports the workspace members
//! for convenient access; depend on the individual crates for
//! finer-grained control.
//!
//! The core idea: the rule engine and the form session are pure,
//! synchronous logic; everything document-shaped (element queries, marker
//! classes, value writes, native submission) is injected through the
//! [`Host`] trait, so the engine runs identically under a browser
//! embedding or the in-memory mock used in tests.
//!
//! # Examples
//!
//! ```
//! use formvalidate::{FormValidator, ValidateOptions};
//! # use formvalidate_test::MockDocument;
//! # use formvalidate::Host;
//!
//! # let doc = MockDocument::new();
//! # let form = doc.form(&["js_form_validate"]);
//! # let submit = doc.input(form, "button");
//! # doc.add_class(&submit, "js_form_validate_submit");
//! let mut validator = FormValidator::new(doc, ValidateOptions::default());
//! validator.init()?;
//! // The host forwards keystrokes, focus, and submit events:
//! // validator.on_input(&el), validator.on_focus(&el),
//! // validator.on_submit_click(&form), validator.on_submit_intent(&form)
//! # Ok::<(), formvalidate::SetupError>(())
//! ```

/// Pure rule engine, options, and error types.
pub use formvalidate_core as core;

/// Host document port, evaluators, presenter, and session.
pub use formvalidate_engine as engine;

/// In-memory mock document for tests (feature `testing`).
#[cfg(feature = "testing")]
pub use formvalidate_test as test;

pub use formvalidate_core::{
    classify, filter, ErrorTarget, RuleKind, SetupError, SetupResult, UnknownRule,
    ValidateOptions,
};
pub use formvalidate_engine::{
    ControlKind, ErrorPresenter, FormState, FormValidator, Host, ValidationResult,
};
