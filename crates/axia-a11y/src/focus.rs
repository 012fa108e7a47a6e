//! Focus-Set Resolver
//!
//! Enumerates the nodes of a subtree reachable by sequential keyboard
//! navigation. A static candidate rule picks out structurally focusable
//! elements; a runtime eligibility predicate then drops the ones that are
//! currently hidden, disabled, or opted out of the tab order. Results are
//! recomputed from current tree state on every call.

use axia_dom::{DomTree, ElementData, NodeId};

/// Tags that are focus candidates regardless of their attributes
const CANDIDATE_TAGS: &[&str] = &[
    "audio", "button", "canvas", "details", "iframe", "input", "select", "summary", "textarea",
    "video", "progress",
];

/// Marker attribute for sentinel elements that bump focus back into a
/// region; they are never part of the navigation order themselves.
const FOCUS_BUMPER_ATTR: &str = "data-focus-bumper";

fn is_candidate(el: &ElementData) -> bool {
    CANDIDATE_TAGS.contains(&el.tag.as_str())
        || el.has_attribute("href")
        || el.has_attribute("accesskey")
        || el.has_attribute("contenteditable")
        || el.attribute("tabindex").is_some_and(|v| v != "-1")
}

/// Whether a node can currently receive keyboard focus.
///
/// Requires: focus order above -1 (the default of 0 counts), a rendered
/// layout box or client rect, no hidden attribute/class, no native disabled
/// flag, and not being a focus-bumper sentinel.
pub fn can_be_focused(tree: &DomTree, node: NodeId) -> bool {
    let Some(el) = tree.element(node) else {
        return false;
    };
    el.tab_index() > -1
        && el.is_rendered()
        && !el.has_attribute("hidden")
        && !el.has_class("hidden")
        && !el.has_class("d-none")
        && !el.disabled
        && !el.has_attribute(FOCUS_BUMPER_ATTR)
}

/// All focusable descendants of `root`, in document order.
///
/// Candidates are matched structurally, then filtered through
/// [`can_be_focused`]. The subtree root itself is not considered.
pub fn focusable_descendants(tree: &DomTree, root: NodeId) -> Vec<NodeId> {
    tree.descendants(root)
        .into_iter()
        .filter(|&id| tree.element(id).is_some_and(is_candidate))
        .filter(|&id| can_be_focused(tree, id))
        .collect()
}

/// First focusable descendant with a focus order above -1, if any
pub fn first_focusable(tree: &DomTree, root: NodeId) -> Option<NodeId> {
    focusable_descendants(tree, root)
        .into_iter()
        .find(|&id| tree.element(id).is_some_and(|el| el.tab_index() > -1))
}

/// Last focusable descendant with a focus order above -1, if any
pub fn last_focusable(tree: &DomTree, root: NodeId) -> Option<NodeId> {
    focusable_descendants(tree, root)
        .into_iter()
        .rev()
        .find(|&id| tree.element(id).is_some_and(|el| el.tab_index() > -1))
}

/// Remove a whole region from the tab order, or restore it.
///
/// Every candidate inside `container` gets its focus order set to -1
/// (`untabbable`) or back to 0. Eligibility is not consulted, so hidden or
/// disabled candidates are rewritten too. Restoring always writes 0:
/// explicit pre-existing orders are not remembered.
pub fn set_untabbable(tree: &mut DomTree, container: NodeId, untabbable: bool) {
    let order = if untabbable { -1 } else { 0 };
    let targets: Vec<NodeId> = tree
        .descendants(container)
        .into_iter()
        .filter(|&id| tree.element(id).is_some_and(is_candidate))
        .collect();
    tracing::debug!(?container, order, count = targets.len(), "rewriting focus order");
    for id in targets {
        if let Some(el) = tree.element_mut(id) {
            el.set_tab_index(order);
        }
    }
}
