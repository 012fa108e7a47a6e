//! Capability Classifier
//!
//! Decides whether a node supports a state axis, either natively through
//! its tag or through an ARIA role. Each axis has one static vocabulary
//! (native tags, ARIA roles, ARIA attribute name) that the state readers
//! and writers derive from as well.

use axia_dom::{DomTree, NodeId};

/// A state dimension a node may support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateAxis {
    Disableable,
    Selectable,
    Checkable,
    Expandable,
}

/// Per-axis vocabulary: native tags, ARIA roles, ARIA attribute name
#[derive(Debug)]
pub(crate) struct AxisVocabulary {
    pub tags: &'static [&'static str],
    pub roles: &'static [&'static str],
    pub attr: &'static str,
}

static DISABLEABLE: AxisVocabulary = AxisVocabulary {
    tags: &[
        "button", "fieldset", "optgroup", "option", "select", "textarea", "input", "progress",
        "a",
    ],
    roles: &[
        "button",
        "group",
        "input",
        "link",
        "menuitem",
        "menuitemradio",
        "menuitemcheckbox",
        "tab",
        "combobox",
        "listbox",
        "radio",
        "radiogroup",
        "checkbox",
        "select",
        "switch",
        "tablist",
        "textbox",
        "toolbar",
    ],
    attr: "aria-disabled",
};

static SELECTABLE: AxisVocabulary = AxisVocabulary {
    tags: &["option"],
    roles: &["gridcell", "option", "row", "tab"],
    attr: "aria-selected",
};

static CHECKABLE: AxisVocabulary = AxisVocabulary {
    tags: &["input"],
    roles: &[
        "checkbox",
        "menuitemcheckbox",
        "menuitemradio",
        "option",
        "radio",
        "switch",
    ],
    attr: "aria-checked",
};

static EXPANDABLE: AxisVocabulary = AxisVocabulary {
    tags: &["button"],
    roles: &[
        "application",
        "button",
        "checkbox",
        "combobox",
        "gridcell",
        "link",
        "listbox",
        "menuitem",
        "row",
        "rowheader",
        "tab",
        "treeitem",
    ],
    attr: "aria-expanded",
};

impl StateAxis {
    pub(crate) fn vocabulary(self) -> &'static AxisVocabulary {
        match self {
            Self::Disableable => &DISABLEABLE,
            Self::Selectable => &SELECTABLE,
            Self::Checkable => &CHECKABLE,
            Self::Expandable => &EXPANDABLE,
        }
    }

    /// The ARIA attribute carrying this axis's state
    pub fn aria_attribute(self) -> &'static str {
        self.vocabulary().attr
    }
}

/// Check whether a node supports a state axis through its tag or role.
///
/// Total: a missing or non-element node yields `false`. A node may qualify
/// through tag, role, both, or neither.
pub fn supports(axis: StateAxis, tree: &DomTree, node: NodeId) -> bool {
    supports_via_tag(axis, tree, node) || supports_via_role(axis, tree, node)
}

/// Check the native-tag rule alone
pub(crate) fn supports_via_tag(axis: StateAxis, tree: &DomTree, node: NodeId) -> bool {
    tree.element(node)
        .is_some_and(|el| axis.vocabulary().tags.contains(&el.tag.as_str()))
}

/// Check the ARIA-role rule alone
pub(crate) fn supports_via_role(axis: StateAxis, tree: &DomTree, node: NodeId) -> bool {
    tree.element(node)
        .and_then(|el| el.role())
        .is_some_and(|role| axis.vocabulary().roles.contains(&role))
}
