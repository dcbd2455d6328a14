//! Single-field evaluation.

use formvalidate_core::{classify, RuleKind, ValidateOptions};

use crate::group;
use crate::host::{ControlKind, Host};
use crate::presenter::ErrorPresenter;

/// True when the attribute is present with a non-empty value.
///
/// A bare or empty attribute does not set the flag; only a non-empty
/// value marks the control.
pub(crate) fn flag_attr<H: Host>(host: &H, el: &H::El, attr: &str) -> bool {
    host.attr(el, attr).is_some_and(|v| !v.is_empty())
}

/// Resolves the rule assigned to a control through its rule data attribute.
/// Unknown tokens resolve to no rule at all.
pub(crate) fn assigned_rule<H: Host>(
    host: &H,
    options: &ValidateOptions,
    el: &H::El,
) -> Option<RuleKind> {
    host.attr(el, &options.rule_attr())
        .and_then(|token| token.parse().ok())
}

/// Evaluates one control against its required flag and assigned rule.
///
/// - A required select fails while its placeholder (index 0) is selected.
/// - A required radio delegates to its group.
/// - A required checkbox passes iff checked.
/// - A text-like control with an empty value fails only when required; a
///   non-empty value is classified against its rule. With no rule the
///   control passes unconditionally.
///
/// On failure the error marker is applied through the presenter. Success
/// performs no implicit clear; clearing is driven by refocus.
pub(crate) fn evaluate_field<H: Host>(
    host: &H,
    options: &ValidateOptions,
    presenter: &mut ErrorPresenter<H>,
    el: &H::El,
    rule_override: Option<RuleKind>,
    force_required: bool,
) -> bool {
    let required = force_required || flag_attr(host, el, &options.required_attr());

    let valid = match host.control_kind(el) {
        ControlKind::Select => !(required && host.selected_index(el) == 0),
        ControlKind::Radio => {
            if required {
                let name = host.name(el).unwrap_or_default();
                group::evaluate_group(host, options, presenter, &name)
            } else {
                true
            }
        }
        kind => {
            let rule = rule_override.or_else(|| assigned_rule(host, options, el));
            if kind == ControlKind::Checkbox && required {
                host.is_checked(el)
            } else if let Some(rule) = rule {
                let value = host.value(el);
                if value.is_empty() {
                    !required
                } else {
                    classify(&value, rule)
                }
            } else {
                // Unvalidated free text passes, required or not.
                true
            }
        }
    };

    if !valid {
        presenter.set_error(host, options, el);
    }
    valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockDocument;

    fn setup() -> (MockDocument, ValidateOptions, ErrorPresenter<MockDocument>) {
        (
            MockDocument::new(),
            ValidateOptions::default(),
            ErrorPresenter::new(),
        )
    }

    #[test]
    fn test_required_empty_text_with_rule_fails() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-validate", "email");
        doc.set_attr(input, "data-required", "required");

        assert!(!evaluate_field(&doc, &options, &mut presenter, &input, None, false));
        assert!(doc.classes(input).contains(&"validate-error".to_string()));
    }

    #[test]
    fn test_optional_empty_text_with_rule_passes_vacuously() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-validate", "email");

        assert!(evaluate_field(&doc, &options, &mut presenter, &input, None, false));
    }

    #[test]
    fn test_text_without_rule_passes_even_when_required() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-required", "required");

        assert!(evaluate_field(&doc, &options, &mut presenter, &input, None, false));
    }

    #[test]
    fn test_rule_override_takes_precedence_over_attribute() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-validate", "integer");
        doc.set_value(&input, "abc");

        assert!(!evaluate_field(&doc, &options, &mut presenter, &input, None, false));
        assert!(evaluate_field(
            &doc,
            &options,
            &mut presenter,
            &input,
            Some(RuleKind::Alpha),
            false
        ));
    }

    #[test]
    fn test_required_checkbox_needs_check() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let checkbox = doc.input(form, "checkbox");
        doc.set_attr(checkbox, "data-required", "required");

        assert!(!evaluate_field(&doc, &options, &mut presenter, &checkbox, None, false));
        doc.set_checked(checkbox, true);
        assert!(evaluate_field(&doc, &options, &mut presenter, &checkbox, None, false));
    }

    #[test]
    fn test_required_select_rejects_placeholder() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let select = doc.select(form);
        doc.set_attr(select, "data-required", "required");

        assert!(!evaluate_field(&doc, &options, &mut presenter, &select, None, false));
        doc.set_selected_index(select, 1);
        assert!(evaluate_field(&doc, &options, &mut presenter, &select, None, false));
    }

    #[test]
    fn test_optional_select_accepts_placeholder() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let select = doc.select(form);

        assert!(evaluate_field(&doc, &options, &mut presenter, &select, None, false));
    }

    #[test]
    fn test_empty_required_attribute_is_not_required() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-validate", "email");
        doc.set_attr(input, "data-required", "");

        assert!(evaluate_field(&doc, &options, &mut presenter, &input, None, false));
    }

    #[test]
    fn test_unknown_rule_token_is_ignored() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let input = doc.input(form, "text");
        doc.set_attr(input, "data-validate", "zipcode");
        doc.set_value(&input, "not a zipcode");

        assert!(evaluate_field(&doc, &options, &mut presenter, &input, None, false));
    }

    #[test]
    fn test_required_radio_delegates_to_group() {
        let (doc, options, mut presenter) = setup();
        let form = doc.form(&[]);
        let a = doc.input(form, "radio");
        let b = doc.input(form, "radio");
        doc.set_name(a, "choice");
        doc.set_name(b, "choice");

        assert!(!evaluate_field(&doc, &options, &mut presenter, &a, None, true));
        assert!(doc.classes(b).contains(&"validate-error".to_string()));

        doc.set_checked(b, true);
        assert!(evaluate_field(&doc, &options, &mut presenter, &a, None, true));
    }
}
