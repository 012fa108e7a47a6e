//! State Reader and Writer
//!
//! Readers report a node's current value on a state axis, preferring an
//! explicit ARIA attribute over the native widget flag. Writers apply state
//! through whichever mechanism(s) the node supports, keeping both in step.

use axia_dom::{DomTree, NodeId};

use crate::axis::{supports, supports_via_tag, supports_via_role, StateAxis};
use crate::relations;

/// Attribute holding a disabled link's navigation target so it can be
/// restored on re-enable. Stored on the node itself, so links do not
/// collide with each other.
const SAVED_HREF_ATTR: &str = "data-saved-href";

fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Read an axis value: explicit ARIA attribute wins, else the native flag.
/// Unsupported nodes are never reported positive.
fn read_state(axis: StateAxis, tree: &DomTree, node: NodeId) -> bool {
    if !supports(axis, tree, node) {
        return false;
    }
    let Some(el) = tree.element(node) else {
        return false;
    };
    match el.attribute(axis.aria_attribute()) {
        Some(value) => value == "true",
        None => match axis {
            StateAxis::Disableable => el.disabled,
            StateAxis::Selectable => el.selected,
            StateAxis::Checkable => el.checked,
            // No native expanded flag; absence means not expanded
            StateAxis::Expandable => false,
        },
    }
}

/// Whether the node is currently disabled
pub fn is_disabled(tree: &DomTree, node: NodeId) -> bool {
    read_state(StateAxis::Disableable, tree, node)
}

/// Whether the node is currently selected
pub fn is_selected(tree: &DomTree, node: NodeId) -> bool {
    read_state(StateAxis::Selectable, tree, node)
}

/// Whether the node is currently checked
pub fn is_checked(tree: &DomTree, node: NodeId) -> bool {
    read_state(StateAxis::Checkable, tree, node)
}

/// Whether the node is currently expanded
pub fn is_expanded(tree: &DomTree, node: NodeId) -> bool {
    read_state(StateAxis::Expandable, tree, node)
}

/// Whether a checkable node is in the mixed (tri-state) checked state
pub fn is_mixed(tree: &DomTree, node: NodeId) -> bool {
    supports(StateAxis::Checkable, tree, node)
        && tree.attribute(node, StateAxis::Checkable.aria_attribute()) == Some("mixed")
}

/// Checked or selected, for UIs that use the two idioms interchangeably
pub fn is_checked_or_selected(tree: &DomTree, node: NodeId) -> bool {
    is_checked(tree, node) || is_selected(tree, node)
}

/// Whether a container allows multiple selection (no axis gating)
pub fn is_multiselectable(tree: &DomTree, node: NodeId) -> bool {
    tree.attribute(node, "aria-multiselectable") == Some("true")
}

/// Set the disabled state. No-op on nodes that are not disableable.
///
/// Disabling a hyperlink with a navigation target also strips the target
/// (saving it on the node) and marks the node `role="link"` so it stays
/// announced as a link; re-enabling restores the target and drops the role.
pub fn set_disabled(tree: &mut DomTree, node: NodeId, disabled: bool) {
    // Snapshot both branches before mutating: the hyperlink side effect
    // rewrites the role attribute mid-call.
    let via_tag = supports_via_tag(StateAxis::Disableable, tree, node);
    let via_role = supports_via_role(StateAxis::Disableable, tree, node);

    if via_tag {
        let is_anchor = tree
            .element(node)
            .is_some_and(|el| el.tag == "a");
        if let Some(el) = tree.element_mut(node) {
            el.disabled = disabled;
        }
        if is_anchor {
            toggle_link_navigation(tree, node, disabled);
        }
    }
    if via_role {
        tree.set_attribute(node, StateAxis::Disableable.aria_attribute(), bool_str(disabled));
    }
}

fn toggle_link_navigation(tree: &mut DomTree, node: NodeId, disabled: bool) {
    if disabled {
        if let Some(href) = tree.remove_attribute(node, "href") {
            tree.set_attribute(node, SAVED_HREF_ATTR, &href);
            tree.set_attribute(node, "role", "link");
        }
    } else if let Some(saved) = tree.remove_attribute(node, SAVED_HREF_ATTR) {
        tree.set_attribute(node, "href", &saved);
        tree.remove_attribute(node, "role");
    }
}

/// Set the selected state. No-op on nodes that are not selectable.
pub fn set_selected(tree: &mut DomTree, node: NodeId, selected: bool) {
    let via_tag = supports_via_tag(StateAxis::Selectable, tree, node);
    let via_role = supports_via_role(StateAxis::Selectable, tree, node);

    if via_tag {
        if let Some(el) = tree.element_mut(node) {
            el.selected = selected;
        }
    }
    if via_role {
        tree.set_attribute(node, StateAxis::Selectable.aria_attribute(), bool_str(selected));
    }
}

/// Set the checked state. No-op on nodes that are not checkable.
///
/// The native checked flag is only meaningful on radio/checkbox inputs;
/// other input types skip the native mutation but still take the ARIA
/// attribute when a role grants the capability.
pub fn set_checked(tree: &mut DomTree, node: NodeId, checked: bool) {
    let via_tag = supports_via_tag(StateAxis::Checkable, tree, node);
    let via_role = supports_via_role(StateAxis::Checkable, tree, node);

    if via_tag {
        let checkable_type = matches!(tree.attribute(node, "type"), Some("radio" | "checkbox"));
        if checkable_type {
            if let Some(el) = tree.element_mut(node) {
                el.checked = checked;
            }
        }
    }
    if via_role {
        tree.set_attribute(node, StateAxis::Checkable.aria_attribute(), bool_str(checked));
    }
}

/// Set the expanded state. No-op on nodes that are not expandable.
///
/// An expandable node is expected to reference what it expands through
/// aria-controls; a missing or empty list is reported as a configuration
/// warning, and expansion still proceeds.
pub fn set_expanded(tree: &mut DomTree, node: NodeId, expanded: bool) {
    if !supports(StateAxis::Expandable, tree, node) {
        return;
    }
    if relations::controls_ids(tree, node).is_none_or(|ids| ids.is_empty()) {
        tracing::warn!(?node, "expandable node has no aria-controls target");
    }
    tree.set_attribute(node, StateAxis::Expandable.aria_attribute(), bool_str(expanded));
}
