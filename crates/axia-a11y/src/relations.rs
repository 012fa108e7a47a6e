//! Relationship Resolver
//!
//! Resolves labelling and controlling relationships declared through ARIA
//! reference attributes (aria-labelledby, aria-controls,
//! aria-activedescendant) or implicit native association (`label for=`),
//! and derives a human-readable label string.

use axia_dom::{DomTree, NodeId};

use crate::A11yError;

/// Split a whitespace-separated reference attribute into ids.
/// `None` when the attribute is absent.
fn id_list(tree: &DomTree, node: NodeId, attr: &str) -> Option<Vec<String>> {
    tree.attribute(node, attr)
        .map(|v| v.split_whitespace().map(String::from).collect())
}

/// Resolve each id document-wide; dangling ids are skipped with a warning.
fn resolve_ids(tree: &DomTree, ids: &[String], attr: &str) -> Vec<NodeId> {
    ids.iter()
        .filter_map(|id| {
            let found = tree.get_element_by_id(id);
            if found.is_none() {
                tracing::warn!(%id, attr, "reference id does not resolve");
            }
            found
        })
        .collect()
}

/// Ids referenced by the node's aria-labelledby, in reference order
pub fn labelled_by_ids(tree: &DomTree, node: NodeId) -> Option<Vec<String>> {
    id_list(tree, node, "aria-labelledby")
}

/// Elements referenced by the node's aria-labelledby.
///
/// Fails when the attribute is absent; callers must check
/// [`labelled_by_ids`] first.
pub fn labelled_by_elements(tree: &DomTree, node: NodeId) -> Result<Vec<NodeId>, A11yError> {
    let ids =
        labelled_by_ids(tree, node).ok_or(A11yError::MissingReference("aria-labelledby"))?;
    Ok(resolve_ids(tree, &ids, "aria-labelledby"))
}

/// Ids referenced by the node's aria-controls, in reference order
pub fn controls_ids(tree: &DomTree, node: NodeId) -> Option<Vec<String>> {
    id_list(tree, node, "aria-controls")
}

/// Elements referenced by the node's aria-controls.
///
/// Fails when the attribute is absent; callers must check
/// [`controls_ids`] first.
pub fn controls_elements(tree: &DomTree, node: NodeId) -> Result<Vec<NodeId>, A11yError> {
    let ids = controls_ids(tree, node).ok_or(A11yError::MissingReference("aria-controls"))?;
    Ok(resolve_ids(tree, &ids, "aria-controls"))
}

/// Elements whose aria-controls list references this node.
///
/// Reverse lookup: a LINEAR SCAN over every element in the document. Fine
/// for occasional relationship queries, not for hot paths. Degrades to an
/// empty result with a warning when the node has no id.
pub fn controlling_elements(tree: &DomTree, node: NodeId) -> Vec<NodeId> {
    let Some(own_id) = tree.element(node).and_then(|el| el.id().map(String::from)) else {
        tracing::warn!(?node, "controlling_elements on a node without an id");
        return Vec::new();
    };
    tree.element_ids()
        .into_iter()
        .filter(|&id| {
            tree.attribute(id, "aria-controls")
                .is_some_and(|v| v.split_whitespace().any(|r| r == own_id))
        })
        .collect()
}

/// The node's aria-activedescendant id, if any
pub fn active_descendant(tree: &DomTree, node: NodeId) -> Option<String> {
    tree.attribute(node, "aria-activedescendant")
        .map(String::from)
}

/// The element the node's aria-activedescendant resolves to, if any
pub fn active_descendant_element(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    active_descendant(tree, node).and_then(|id| tree.get_element_by_id(&id))
}

/// Derive a human-readable label for the node.
///
/// Precedence: aria-labelledby text (reference order, space-joined), then
/// aria-label, then the text of a `label for=` element matching the node's
/// id. `None` when no label is available; that is a data-quality failure
/// and is logged as an error, never an escalation.
pub fn label_text(tree: &DomTree, node: NodeId) -> Option<String> {
    if let Some(ids) = labelled_by_ids(tree, node) {
        if !ids.is_empty() {
            let parts: Vec<String> = resolve_ids(tree, &ids, "aria-labelledby")
                .into_iter()
                .map(|id| tree.text_content(id))
                .collect();
            return Some(parts.join(" "));
        }
    }
    if let Some(label) = tree.attribute(node, "aria-label") {
        return Some(label.to_string());
    }
    if let Some(label) = label_element_for(tree, node) {
        return Some(tree.text_content(label));
    }
    tracing::error!(?node, "no label available");
    None
}

/// Find a `label` element whose `for` attribute matches the node's id
fn label_element_for(tree: &DomTree, node: NodeId) -> Option<NodeId> {
    let own_id = tree.element(node)?.id()?.to_string();
    tree.element_ids().into_iter().find(|&id| {
        tree.element(id)
            .is_some_and(|el| el.tag == "label" && el.attribute("for") == Some(own_id.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axia_dom::ElementInit;

    fn labelled_fixture() -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        tree.append_child(tree.root(), body);
        tree.build_element(
            body,
            "span",
            ElementInit::new().with_attr("id", "greet").with_text("Hello"),
        );
        tree.build_element(
            body,
            "span",
            ElementInit::new().with_attr("id", "who").with_text("world"),
        );
        let field = tree.build_element(body, "input", ElementInit::new());
        (tree, field)
    }

    #[test]
    fn test_labelled_by_ids_and_elements() {
        let (mut tree, field) = labelled_fixture();
        assert_eq!(labelled_by_ids(&tree, field), None);
        assert!(matches!(
            labelled_by_elements(&tree, field),
            Err(A11yError::MissingReference("aria-labelledby"))
        ));

        tree.set_attribute(field, "aria-labelledby", "greet who");
        assert_eq!(
            labelled_by_ids(&tree, field),
            Some(vec!["greet".to_string(), "who".to_string()])
        );
        assert_eq!(labelled_by_elements(&tree, field).unwrap().len(), 2);
    }

    #[test]
    fn test_dangling_reference_is_skipped() {
        let (mut tree, field) = labelled_fixture();
        tree.set_attribute(field, "aria-labelledby", "greet missing who");

        assert_eq!(labelled_by_elements(&tree, field).unwrap().len(), 2);
        assert_eq!(label_text(&tree, field), Some("Hello world".to_string()));
    }

    #[test]
    fn test_label_text_precedence() {
        let (mut tree, field) = labelled_fixture();
        let body = tree.get(field).unwrap().parent.unwrap();
        tree.set_attribute(field, "id", "name");
        tree.build_element(
            body,
            "label",
            ElementInit::new().with_attr("for", "name").with_text("Your name"),
        );

        // Native label association
        assert_eq!(label_text(&tree, field), Some("Your name".to_string()));

        // aria-label beats it
        tree.set_attribute(field, "aria-label", "Name");
        assert_eq!(label_text(&tree, field), Some("Name".to_string()));

        // aria-labelledby beats everything
        tree.set_attribute(field, "aria-labelledby", "greet who");
        assert_eq!(label_text(&tree, field), Some("Hello world".to_string()));
    }

    #[test]
    fn test_label_text_sentinel() {
        let (mut tree, field) = labelled_fixture();
        assert_eq!(label_text(&tree, field), None);

        // A whitespace-only labelledby falls through the chain
        tree.set_attribute(field, "aria-labelledby", "   ");
        assert_eq!(label_text(&tree, field), None);
    }

    #[test]
    fn test_controls_and_reverse_lookup() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        tree.append_child(tree.root(), body);
        let panel = tree.build_element(body, "div", ElementInit::new().with_attr("id", "panel"));
        let toggle = tree.build_element(
            body,
            "button",
            ElementInit::new().with_attr("aria-controls", "panel"),
        );
        let other = tree.build_element(
            body,
            "button",
            ElementInit::new().with_attr("aria-controls", "sidebar panel"),
        );
        let unrelated = tree.build_element(body, "button", ElementInit::new());

        assert_eq!(controls_elements(&tree, toggle).unwrap(), vec![panel]);
        assert!(matches!(
            controls_elements(&tree, unrelated),
            Err(A11yError::MissingReference("aria-controls"))
        ));

        assert_eq!(controlling_elements(&tree, panel), vec![toggle, other]);
        // No id: degrade to empty
        assert!(controlling_elements(&tree, unrelated).is_empty());
    }

    #[test]
    fn test_active_descendant() {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        tree.append_child(tree.root(), body);
        let item = tree.build_element(body, "li", ElementInit::new().with_attr("id", "opt-2"));
        let listbox = tree.build_element(body, "ul", ElementInit::new());

        assert_eq!(active_descendant(&tree, listbox), None);
        assert_eq!(active_descendant_element(&tree, listbox), None);

        tree.set_attribute(listbox, "aria-activedescendant", "opt-2");
        assert_eq!(active_descendant(&tree, listbox), Some("opt-2".to_string()));
        assert_eq!(active_descendant_element(&tree, listbox), Some(item));
    }
}
