//! Session configuration.
//!
//! [`ValidateOptions`] carries every knob a validation session honors.
//! A session receives its options at construction and never mutates them
//! afterwards; there is no process-wide default instance.

use serde::{Deserialize, Serialize};

/// Where the error marker class is applied when a control fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorTarget {
    /// Mark the failing control itself.
    #[default]
    Itself,
    /// Mark the nearest ancestor (the control included) bearing this class.
    /// When no ancestor matches, the walk settles on the document root.
    Ancestor(String),
}

/// Construction-time options for a validation session.
///
/// Data-attribute names are stored without their `data-` prefix; use
/// [`ValidateOptions::rule_attr`] and friends to get the full attribute
/// name to query on the host.
///
/// # Examples
///
/// ```
/// use formvalidate_core::options::{ErrorTarget, ValidateOptions};
///
/// let options = ValidateOptions::default()
///     .with_error_target(ErrorTarget::Ancestor("input-wrapper".into()));
/// assert_eq!(options.rule_attr(), "data-validate");
/// assert!(options.active_input_filtering);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateOptions {
    /// Whether live input filtering is attached to every eligible control.
    /// When `false`, a control can still opt in through the
    /// active-validation data attribute.
    pub active_input_filtering: bool,
    /// Attribute tag (minus `data-`) a control uses to opt into live
    /// filtering when the global switch is off.
    pub data_active_validation: String,
    /// Attribute tag (minus `data-`) carrying a control's assigned rule.
    pub data_tag: String,
    /// Attribute tag (minus `data-`) marking a control as required.
    pub required_tag: String,
    /// Marker class used to discover forms during auto-initialization.
    pub form_class: String,
    /// Marker class added to a form that validated successfully.
    pub form_success_class: String,
    /// Marker class present while a validation pass is in flight.
    pub processing_class: String,
    /// Marker class applied to a failing control's presentation target.
    pub error_class: String,
    /// Which element receives the error marker class.
    pub error_target: ErrorTarget,
    /// Marker class used to discover a form's submit control.
    pub submit_class: String,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            active_input_filtering: true,
            data_active_validation: "active-validation".to_string(),
            data_tag: "validate".to_string(),
            required_tag: "required".to_string(),
            form_class: "js_form_validate".to_string(),
            form_success_class: "validate-success".to_string(),
            processing_class: "processing".to_string(),
            error_class: "validate-error".to_string(),
            error_target: ErrorTarget::Itself,
            submit_class: "js_form_validate_submit".to_string(),
        }
    }
}

impl ValidateOptions {
    /// Enables or disables live input filtering globally.
    pub fn with_active_input_filtering(mut self, enabled: bool) -> Self {
        self.active_input_filtering = enabled;
        self
    }

    /// Sets the error presentation target.
    pub fn with_error_target(mut self, target: ErrorTarget) -> Self {
        self.error_target = target;
        self
    }

    /// Sets the error marker class.
    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the form discovery marker class.
    pub fn with_form_class(mut self, class: impl Into<String>) -> Self {
        self.form_class = class.into();
        self
    }

    /// Sets the submit-control discovery marker class.
    pub fn with_submit_class(mut self, class: impl Into<String>) -> Self {
        self.submit_class = class.into();
        self
    }

    /// Full attribute name for the live-filtering opt-in.
    pub fn active_validation_attr(&self) -> String {
        format!("data-{}", self.data_active_validation)
    }

    /// Full attribute name for a control's assigned rule.
    pub fn rule_attr(&self) -> String {
        format!("data-{}", self.data_tag)
    }

    /// Full attribute name for the required flag.
    pub fn required_attr(&self) -> String {
        format!("data-{}", self.required_tag)
    }
}
