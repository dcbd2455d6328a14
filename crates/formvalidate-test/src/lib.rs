//! # formvalidate-test
//!
//! Test utilities for the formvalidate workspace: an in-memory
//! [`MockDocument`] implementing the engine's [`Host`] port, so validation
//! behavior can be exercised without a browser host.
//!
//! The mock models just enough of a document to satisfy the port: a node
//! tree with tags, names, values, marker classes, and data attributes.
//! Nodes are created in document order and every query preserves it.

use std::cell::RefCell;
use std::collections::HashMap;

use formvalidate_engine::host::{ControlKind, Host};

/// Handle to a node in a [`MockDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Default, Clone)]
struct Node {
    tag: String,
    input_type: String,
    parent: Option<usize>,
    children: Vec<usize>,
    name: Option<String>,
    value: String,
    checked: bool,
    selected_index: usize,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
}

/// An in-memory document tree implementing the [`Host`] port.
///
/// Mutators take `&self` like the port requires, so a test can keep using
/// the document after handing a clone-free reference to the validator via
/// [`FormValidator::host`](formvalidate_engine::FormValidator::host).
///
/// # Examples
///
/// ```
/// use formvalidate_engine::host::Host;
/// use formvalidate_test::MockDocument;
///
/// let doc = MockDocument::new();
/// let form = doc.form(&["js_form_validate"]);
/// let input = doc.input(form, "text");
/// doc.set_attr(input, "data-validate", "email");
/// assert_eq!(doc.controls_of(&form), vec![input]);
/// ```
#[derive(Debug, Default)]
pub struct MockDocument {
    nodes: RefCell<Vec<Node>>,
    submissions: RefCell<Vec<NodeId>>,
}

impl MockDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an element with the given tag under `parent`, or at the
    /// document root when `parent` is `None`.
    pub fn element(&self, tag: &str, parent: Option<NodeId>) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = nodes.len();
        nodes.push(Node {
            tag: tag.to_string(),
            parent: parent.map(|p| p.0),
            ..Node::default()
        });
        if let Some(p) = parent {
            nodes[p.0].children.push(id);
        }
        NodeId(id)
    }

    /// Creates a root-level `<form>` bearing the given classes.
    pub fn form(&self, classes: &[&str]) -> NodeId {
        let id = self.element("form", None);
        for class in classes {
            self.add_class(&id, class);
        }
        id
    }

    /// Creates an `<input>` of the given type under `parent`.
    pub fn input(&self, parent: NodeId, input_type: &str) -> NodeId {
        let id = self.element("input", Some(parent));
        self.nodes.borrow_mut()[id.0].input_type = input_type.to_string();
        id
    }

    /// Creates a `<select>` under `parent` with the placeholder (index 0)
    /// selected.
    pub fn select(&self, parent: NodeId) -> NodeId {
        self.element("select", Some(parent))
    }

    /// Creates a `<textarea>` under `parent`.
    pub fn textarea(&self, parent: NodeId) -> NodeId {
        self.element("textarea", Some(parent))
    }

    /// Creates a `<div>` under `parent` bearing the given classes.
    pub fn div(&self, parent: NodeId, classes: &[&str]) -> NodeId {
        let id = self.element("div", Some(parent));
        for class in classes {
            self.add_class(&id, class);
        }
        id
    }

    /// Sets the node's `name`.
    pub fn set_name(&self, id: NodeId, name: &str) {
        self.nodes.borrow_mut()[id.0].name = Some(name.to_string());
    }

    /// Sets an attribute on the node.
    pub fn set_attr(&self, id: NodeId, key: &str, value: &str) {
        self.nodes.borrow_mut()[id.0]
            .attrs
            .insert(key.to_string(), value.to_string());
    }

    /// Sets the node's checked state.
    pub fn set_checked(&self, id: NodeId, checked: bool) {
        self.nodes.borrow_mut()[id.0].checked = checked;
    }

    /// Sets the node's selected option index.
    pub fn set_selected_index(&self, id: NodeId, index: usize) {
        self.nodes.borrow_mut()[id.0].selected_index = index;
    }

    /// The node's current classes, in insertion order.
    pub fn classes(&self, id: NodeId) -> Vec<String> {
        self.nodes.borrow()[id.0].classes.clone()
    }

    /// Forms submitted through the port, in submission order.
    pub fn submissions(&self) -> Vec<NodeId> {
        self.submissions.borrow().clone()
    }

    /// Preorder walk below `root`, collecting nodes matching `pred`.
    fn collect(&self, root: usize, pred: impl Fn(&Node) -> bool) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<usize> = nodes[root].children.iter().rev().copied().collect();
        while let Some(idx) = stack.pop() {
            if pred(&nodes[idx]) {
                out.push(NodeId(idx));
            }
            stack.extend(nodes[idx].children.iter().rev().copied());
        }
        out
    }
}

impl Host for MockDocument {
    type El = NodeId;

    fn elements_with_class(&self, class: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|&idx| nodes[idx].classes.iter().any(|c| c == class))
            .map(NodeId)
            .collect()
    }

    fn controls_of(&self, root: &NodeId) -> Vec<NodeId> {
        self.collect(root.0, |node| {
            matches!(node.tag.as_str(), "input" | "textarea" | "select")
        })
    }

    fn descendants_with_class(&self, root: &NodeId, class: &str) -> Vec<NodeId> {
        self.collect(root.0, |node| node.classes.iter().any(|c| c == class))
    }

    fn elements_named(&self, name: &str) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        (0..nodes.len())
            .filter(|&idx| nodes[idx].name.as_deref() == Some(name))
            .map(NodeId)
            .collect()
    }

    fn parent(&self, el: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[el.0].parent.map(NodeId)
    }

    fn control_kind(&self, el: &NodeId) -> ControlKind {
        let nodes = self.nodes.borrow();
        let node = &nodes[el.0];
        match node.tag.as_str() {
            "select" => ControlKind::Select,
            "input" => match node.input_type.as_str() {
                "checkbox" => ControlKind::Checkbox,
                "radio" => ControlKind::Radio,
                _ => ControlKind::Text,
            },
            _ => ControlKind::Text,
        }
    }

    fn name(&self, el: &NodeId) -> Option<String> {
        self.nodes.borrow()[el.0].name.clone()
    }

    fn value(&self, el: &NodeId) -> String {
        self.nodes.borrow()[el.0].value.clone()
    }

    fn set_value(&self, el: &NodeId, value: &str) {
        self.nodes.borrow_mut()[el.0].value = value.to_string();
    }

    fn is_checked(&self, el: &NodeId) -> bool {
        self.nodes.borrow()[el.0].checked
    }

    fn selected_index(&self, el: &NodeId) -> usize {
        self.nodes.borrow()[el.0].selected_index
    }

    fn attr(&self, el: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[el.0].attrs.get(name).cloned()
    }

    fn has_class(&self, el: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[el.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, el: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[el.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&self, el: &NodeId, class: &str) {
        self.nodes.borrow_mut()[el.0].classes.retain(|c| c != class);
    }

    fn submit(&self, form: &NodeId) {
        self.submissions.borrow_mut().push(*form);
    }
}
