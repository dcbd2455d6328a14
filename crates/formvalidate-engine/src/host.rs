//! Host document port.
//!
//! The engine never touches a real DOM. Everything it needs from the host
//! document — element queries, control introspection, marker classes,
//! value writes, native submission — goes through the [`Host`] trait. A
//! browser embedding implements it over real elements; tests use the
//! in-memory mock from `formvalidate-test`.
//!
//! Handles are cheap opaque tokens. All query methods return elements in
//! document order, which the session relies on for its error ordering
//! guarantee.

use std::fmt;
use std::hash::Hash;

/// The broad kind of a form control, as seen by the evaluators.
///
/// Anything that is not a select, checkbox, or radio — text inputs of any
/// type, textareas — is text-like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// A text-like input or textarea.
    Text,
    /// A selection control with indexed options.
    Select,
    /// A checkbox.
    Checkbox,
    /// A member of a mutually-exclusive radio set.
    Radio,
}

/// Capabilities the engine consumes from the host document.
///
/// Implementations are expected to be interiorly mutable: value and class
/// writes take `&self`, matching a DOM-like host where handles alias shared
/// document state. All mutation happens synchronously inside a single
/// event callback, so no locking discipline is imposed here; a
/// multi-threaded embedding must confine each form's session to one logical
/// task.
pub trait Host {
    /// Opaque element handle.
    type El: Clone + Eq + Hash + fmt::Debug;

    /// All elements in the document bearing the given class, in document
    /// order.
    fn elements_with_class(&self, class: &str) -> Vec<Self::El>;

    /// Descendant form controls (inputs, textareas, selects) of `root`, in
    /// document order.
    fn controls_of(&self, root: &Self::El) -> Vec<Self::El>;

    /// Descendant elements of `root` bearing the given class, in document
    /// order.
    fn descendants_with_class(&self, root: &Self::El, class: &str) -> Vec<Self::El>;

    /// All elements in the document sharing the given `name`, in document
    /// order. This is how radio groups are enumerated.
    fn elements_named(&self, name: &str) -> Vec<Self::El>;

    /// Parent of `el`, or `None` at the document root.
    fn parent(&self, el: &Self::El) -> Option<Self::El>;

    /// The control kind of `el`.
    fn control_kind(&self, el: &Self::El) -> ControlKind;

    /// The `name` of `el`, if it has one.
    fn name(&self, el: &Self::El) -> Option<String>;

    /// Current value of `el`.
    fn value(&self, el: &Self::El) -> String;

    /// Overwrites the value of `el`. Used by live filtering.
    fn set_value(&self, el: &Self::El, value: &str);

    /// Whether `el` is currently checked (checkboxes and radios).
    fn is_checked(&self, el: &Self::El) -> bool;

    /// Index of the currently selected option (selects). Index 0 is the
    /// placeholder by convention.
    fn selected_index(&self, el: &Self::El) -> usize;

    /// Raw attribute value, `None` when the attribute is absent.
    fn attr(&self, el: &Self::El, name: &str) -> Option<String>;

    /// Whether `el` bears the given marker class.
    fn has_class(&self, el: &Self::El, class: &str) -> bool;

    /// Adds a marker class to `el`. Adding a class already present is a
    /// no-op.
    fn add_class(&self, el: &Self::El, class: &str);

    /// Removes a marker class from `el`. Removing an absent class is a
    /// no-op.
    fn remove_class(&self, el: &Self::El, class: &str);

    /// Triggers the host's native submit action for `form`.
    fn submit(&self, form: &Self::El);
}
