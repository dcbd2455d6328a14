//! Form validation session: discovery, wiring, live filtering, and the
//! submit state machine.
//!
//! A [`FormValidator`] owns the host handle, the immutable options, the
//! per-form [`FormState`], the live-filter registry, and the error
//! presenter. The host wires its real events to the narrow entry points
//! ([`FormValidator::on_input`], [`FormValidator::on_focus`],
//! [`FormValidator::on_submit_click`], [`FormValidator::on_submit_intent`]);
//! everything behind them is synchronous.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use formvalidate_core::{filter, RuleKind, SetupError, SetupResult, ValidateOptions};

use crate::field::{self, evaluate_field};
use crate::group::evaluate_group;
use crate::host::{ControlKind, Host};
use crate::presenter::ErrorPresenter;

/// Processing state of a wired form.
///
/// Transitions happen only through validation attempts: a pass moves
/// `Idle -> Processing -> Success` when everything validates, and
/// `Idle -> Processing -> Idle` otherwise. Native submission is gated on
/// `Success`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// No validation pass has succeeded since the last trigger.
    #[default]
    Idle,
    /// A validation pass is in flight; further triggers are ignored.
    Processing,
    /// The last validation pass succeeded; submission is allowed.
    Success,
}

/// Outcome of a full-form validation pass. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Whether every field and group passed.
    pub is_valid: bool,
    /// Names of failing controls in scan order, followed by failing
    /// radio-group names. Anonymous failing controls flip `is_valid`
    /// without contributing a name.
    pub errors: Vec<String>,
}

/// Orchestrates validation for the forms of one host document.
pub struct FormValidator<H: Host> {
    host: H,
    options: ValidateOptions,
    states: HashMap<H::El, FormState>,
    filtered: HashMap<H::El, RuleKind>,
    presenter: ErrorPresenter<H>,
}

impl<H: Host> FormValidator<H> {
    /// Creates a session over `host` with the given options.
    pub fn new(host: H, options: ValidateOptions) -> Self {
        Self {
            host,
            options,
            states: HashMap::new(),
            filtered: HashMap::new(),
            presenter: ErrorPresenter::new(),
        }
    }

    /// The session's options.
    pub fn options(&self) -> &ValidateOptions {
        &self.options
    }

    /// The underlying host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Discovers and wires every form bearing the form marker class.
    pub fn init(&mut self) -> SetupResult<()> {
        for form in self.host.elements_with_class(&self.options.form_class) {
            self.set_form(&form)?;
        }
        Ok(())
    }

    /// Wires a single form for validation.
    ///
    /// Locates the form's submit control and requires exactly one; zero or
    /// several matches are a setup defect reported loudly here rather than
    /// surfacing as a dead submit button later. Eligible controls get live
    /// filtering attached and the form's state machine starts at `Idle`.
    pub fn set_form(&mut self, form: &H::El) -> SetupResult<()> {
        let submits = self
            .host
            .descendants_with_class(form, &self.options.submit_class);
        match submits.len() {
            1 => {}
            0 => {
                return Err(SetupError::SubmitControlMissing {
                    class: self.options.submit_class.clone(),
                })
            }
            n => {
                return Err(SetupError::SubmitControlAmbiguous {
                    class: self.options.submit_class.clone(),
                    count: n,
                })
            }
        }

        self.set_form_filtering(form);
        self.states.insert(form.clone(), FormState::Idle);
        debug!(form = ?form, "form wired for validation");
        Ok(())
    }

    /// Attaches live filtering to every eligible control of `form`.
    ///
    /// With the global switch off, a control still opts in through a
    /// non-empty active-validation data attribute.
    pub fn set_form_filtering(&mut self, form: &H::El) {
        let attr = self.options.active_validation_attr();
        for control in self.host.controls_of(form) {
            if self.options.active_input_filtering
                || field::flag_attr(&self.host, &control, &attr)
            {
                self.set_input_filtering(&control, None);
            }
        }
    }

    /// Registers live filtering for one control.
    ///
    /// The rule comes from `rule_override`, else the control's rule data
    /// attribute. Controls with no resolvable rule (including unknown
    /// tokens) are left alone.
    pub fn set_input_filtering(&mut self, input: &H::El, rule_override: Option<RuleKind>) {
        let rule =
            rule_override.or_else(|| field::assigned_rule(&self.host, &self.options, input));
        if let Some(rule) = rule {
            self.filtered.insert(input.clone(), rule);
        }
    }

    /// Keystroke entry point: rewrites the control's value through its
    /// registered filter. Controls without filtering are untouched.
    pub fn on_input(&self, input: &H::El) {
        if let Some(rule) = self.filtered.get(input) {
            let filtered = filter(&self.host.value(input), *rule);
            self.host.set_value(input, &filtered);
        }
    }

    /// Focus entry point: one-shot clear of a pending error marker. For a
    /// radio member this clears the whole group.
    pub fn on_focus(&mut self, el: &H::El) {
        self.presenter.on_focus(&self.host, &self.options, el);
    }

    /// Submit-control click entry point: validate with auto-submit.
    pub fn on_submit_click(&mut self, form: &H::El) -> Option<ValidationResult> {
        self.validate_form(form, true)
    }

    /// Native submit-intent gate.
    ///
    /// The host must suppress its default submit action whenever this
    /// returns `false`. This is what stops an Enter keypress from
    /// bypassing validation.
    pub fn on_submit_intent(&self, form: &H::El) -> bool {
        self.state_of(form) == FormState::Success
    }

    /// Current processing state of `form`. Unwired forms report `Idle`.
    pub fn state_of(&self, form: &H::El) -> FormState {
        self.states.get(form).copied().unwrap_or_default()
    }

    /// Whether `el` currently holds a clear-on-refocus error subscription.
    pub fn has_pending_clear(&self, el: &H::El) -> bool {
        self.presenter.is_subscribed(el)
    }

    /// Validates `form` on demand.
    ///
    /// Any success marker from an earlier pass is dropped first, then the
    /// form moves to `Processing` for the duration of the pass. A trigger
    /// arriving while a pass is already in flight is ignored.
    ///
    /// With `auto_submit`, a fully valid form is submitted through the
    /// host and `None` is returned; otherwise the aggregated result is
    /// handed back to the caller.
    pub fn validate_form(&mut self, form: &H::El, auto_submit: bool) -> Option<ValidationResult> {
        self.host
            .remove_class(form, &self.options.form_success_class);
        if self.state_of(form) == FormState::Processing {
            debug!(form = ?form, "validation already in flight, ignoring trigger");
            return None;
        }

        self.states.insert(form.clone(), FormState::Processing);
        self.host.add_class(form, &self.options.processing_class);

        self.run_validation(form, auto_submit)
    }

    /// Validates a single control on demand. The control is treated as
    /// required regardless of its attributes.
    pub fn validate_input(&mut self, input: &H::El, rule_override: Option<RuleKind>) -> bool {
        evaluate_field(
            &self.host,
            &self.options,
            &mut self.presenter,
            input,
            rule_override,
            true,
        )
    }

    fn run_validation(&mut self, form: &H::El, auto_submit: bool) -> Option<ValidationResult> {
        let required_attr = self.options.required_attr();
        let mut errors = Vec::new();
        let mut is_valid = true;

        // Radios are deferred so each group is evaluated exactly once, in
        // the order its first required member was encountered.
        let mut group_names: Vec<String> = Vec::new();
        let mut seen_groups: HashSet<String> = HashSet::new();

        for control in self.host.controls_of(form) {
            if self.host.control_kind(&control) == ControlKind::Radio {
                if field::flag_attr(&self.host, &control, &required_attr) {
                    // A nameless radio forms an empty group, which can
                    // never have a selected member and therefore fails —
                    // the same verdict the on-demand path reaches.
                    let name = self.host.name(&control).unwrap_or_default();
                    if seen_groups.insert(name.clone()) {
                        group_names.push(name);
                    }
                }
            } else {
                let ok = evaluate_field(
                    &self.host,
                    &self.options,
                    &mut self.presenter,
                    &control,
                    None,
                    false,
                );
                if !ok {
                    is_valid = false;
                    if let Some(name) = self.host.name(&control).filter(|n| !n.is_empty()) {
                        errors.push(name);
                    }
                }
            }
        }

        for name in group_names {
            if !evaluate_group(&self.host, &self.options, &mut self.presenter, &name) {
                is_valid = false;
                if !name.is_empty() {
                    errors.push(name);
                }
            }
        }

        self.host
            .remove_class(form, &self.options.processing_class);
        if is_valid {
            self.host
                .add_class(form, &self.options.form_success_class);
            self.states.insert(form.clone(), FormState::Success);
            debug!(form = ?form, "form validated successfully");
        } else {
            self.states.insert(form.clone(), FormState::Idle);
            debug!(form = ?form, failures = errors.len(), "form failed validation");
        }

        let result = ValidationResult { is_valid, errors };
        if auto_submit && result.is_valid {
            self.host.submit(form);
            None
        } else {
            Some(result)
        }
    }
}
