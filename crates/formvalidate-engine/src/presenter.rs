//! Error presentation: marker-class toggling and clear-on-refocus
//! bookkeeping.
//!
//! The presenter never decides validity; it reflects verdicts handed to it
//! by the evaluators and clears them when the user returns to a field.
//! Set and clear are idempotent, so repeated identical calls are safe
//! no-ops.

use std::collections::HashSet;

use tracing::trace;

use formvalidate_core::{ErrorTarget, ValidateOptions};

use crate::host::{ControlKind, Host};

/// Applies and clears the error marker class for failed controls.
///
/// The presenter owns the set of controls holding a one-shot
/// clear-on-refocus subscription. A control enters the set when its error
/// marker is first applied and leaves it when the marker is cleared,
/// whether by refocus or explicitly.
pub struct ErrorPresenter<H: Host> {
    subscribed: HashSet<H::El>,
}

impl<H: Host> Default for ErrorPresenter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> ErrorPresenter<H> {
    /// Creates a presenter with no pending subscriptions.
    pub fn new() -> Self {
        Self {
            subscribed: HashSet::new(),
        }
    }

    /// Resolves the element the error class is applied to.
    ///
    /// With an ancestor target the walk starts at the control itself and
    /// moves upward; when nothing bears the marker class the walk settles
    /// on the document root.
    fn resolve_target(host: &H, options: &ValidateOptions, el: &H::El) -> H::El {
        match &options.error_target {
            ErrorTarget::Itself => el.clone(),
            ErrorTarget::Ancestor(class) => {
                let mut current = el.clone();
                loop {
                    if host.has_class(&current, class) {
                        break;
                    }
                    match host.parent(&current) {
                        Some(parent) => current = parent,
                        None => break,
                    }
                }
                current
            }
        }
    }

    /// Marks `el` as errored.
    ///
    /// No-op when the resolved target already carries the error class; the
    /// refocus subscription is only registered the first time the marker is
    /// applied.
    pub fn set_error(&mut self, host: &H, options: &ValidateOptions, el: &H::El) {
        let target = Self::resolve_target(host, options, el);
        if host.has_class(&target, &options.error_class) {
            return;
        }
        host.add_class(&target, &options.error_class);
        self.subscribed.insert(el.clone());
        trace!(control = ?el, "error marker set");
    }

    /// Clears the error marker for `el`.
    ///
    /// A radio control clears its entire group: every member's resolved
    /// target loses the marker and every member's subscription is released,
    /// since any member regaining focus clears the whole group's error.
    /// Clearing a clean control is a no-op.
    pub fn clear_error(&mut self, host: &H, options: &ValidateOptions, el: &H::El) {
        if host.control_kind(el) == ControlKind::Radio {
            if let Some(name) = host.name(el) {
                for member in host.elements_named(&name) {
                    self.clear_single(host, options, &member);
                }
                return;
            }
        }
        self.clear_single(host, options, el);
    }

    fn clear_single(&mut self, host: &H, options: &ValidateOptions, el: &H::El) {
        let target = Self::resolve_target(host, options, el);
        host.remove_class(&target, &options.error_class);
        if self.subscribed.remove(el) {
            trace!(control = ?el, "error marker cleared");
        }
    }

    /// Focus entry point: performs the one-shot clear iff `el` holds a
    /// subscription.
    pub fn on_focus(&mut self, host: &H, options: &ValidateOptions, el: &H::El) {
        if self.subscribed.contains(el) {
            self.clear_error(host, options, el);
        }
    }

    /// Whether `el` currently holds a clear-on-refocus subscription.
    pub fn is_subscribed(&self, el: &H::El) -> bool {
        self.subscribed.contains(el)
    }
}
